//! Transition log for diagnostics.
//!
//! Every accepted state change is appended as an immutable record. The log
//! is purely observational: nothing in the controller reads it back, and it
//! is not a persistence mechanism.

use super::state::ObjectState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of a single accepted state change.
///
/// For a deferred change `to` is the `Transition` marker; the eventual
/// destination shows up as a second record when the transition finishes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionRecord<S: ObjectState> {
    /// The state the controller left.
    pub from: S,
    /// The state the controller entered.
    pub to: S,
    /// When the change was accepted.
    pub timestamp: DateTime<Utc>,
    /// Whether the change committed in one step.
    pub immediate: bool,
}

impl<S: ObjectState> TransitionRecord<S> {
    /// Build a record stamped with the current time.
    pub fn now(from: S, to: S, immediate: bool) -> Self {
        Self {
            from,
            to,
            timestamp: Utc::now(),
            immediate,
        }
    }
}

/// Ordered log of accepted state changes.
///
/// # Example
///
/// ```rust
/// use gameplay_objects::objects::{DoorController, DoorState};
///
/// let mut door = DoorController::new(DoorState::Closed);
/// door.open(true).unwrap();
/// door.close(true).unwrap();
///
/// let log = door.history();
/// assert_eq!(log.len(), 2);
/// assert_eq!(log.latest().unwrap().to, DoorState::Closed);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionLog<S: ObjectState> {
    records: Vec<TransitionRecord<S>>,
}

impl<S: ObjectState> TransitionLog<S> {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record.
    pub fn record(&mut self, record: TransitionRecord<S>) {
        self.records.push(record);
    }

    /// The most recently accepted change, if any.
    pub fn latest(&self) -> Option<&TransitionRecord<S>> {
        self.records.last()
    }

    /// Iterate over records in acceptance order.
    pub fn iter(&self) -> impl Iterator<Item = &TransitionRecord<S>> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<S: ObjectState> Default for TransitionLog<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
    enum TestState {
        Up,
        Down,
        Disabled,
        Transition,
    }

    impl ObjectState for TestState {
        const TRANSITION: Self = Self::Transition;
        const DISABLED: Self = Self::Disabled;

        fn fallback_initial() -> Self {
            Self::Down
        }

        fn name(&self) -> &'static str {
            match self {
                Self::Up => "Up",
                Self::Down => "Down",
                Self::Disabled => "Disabled",
                Self::Transition => "Transition",
            }
        }
    }

    #[test]
    fn new_log_is_empty() {
        let log: TransitionLog<TestState> = TransitionLog::new();
        assert!(log.is_empty());
        assert!(log.latest().is_none());
    }

    #[test]
    fn record_preserves_order() {
        let mut log = TransitionLog::new();
        log.record(TransitionRecord::now(TestState::Down, TestState::Up, true));
        log.record(TransitionRecord::now(TestState::Up, TestState::Down, false));

        assert_eq!(log.len(), 2);
        let tos: Vec<TestState> = log.iter().map(|r| r.to).collect();
        assert_eq!(tos, vec![TestState::Up, TestState::Down]);
        assert_eq!(log.latest().unwrap().from, TestState::Up);
    }

    #[test]
    fn record_serializes_round_trip() {
        let record = TransitionRecord::now(TestState::Down, TestState::Up, true);
        let json = serde_json::to_string(&record).unwrap();
        let back: TransitionRecord<TestState> = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
