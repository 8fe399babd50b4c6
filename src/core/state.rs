//! Core `ObjectState` trait for gameplay object states.
//!
//! Every gameplay object flavor (door, chest, button, lock, generic object)
//! defines its own small state enum and implements this trait so the shared
//! [`StateController`](crate::core::StateController) can drive it.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for gameplay object state enums.
///
/// A state enum always contains two distinguished variants next to its
/// "normal" states: `Disabled` (the generic override layer) and `Transition`
/// (the transient marker for a deferred change that has not yet been
/// committed). The controller only ever needs to recognize those two; the
/// remaining variants and their command guards belong to the flavor.
///
/// # Required Traits
///
/// - `Copy` + `Clone`: states are plain C-like enums passed by value
/// - `Eq`: states must be comparable for guard and no-op checks
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states travel in editor/tool payloads
///
/// # Example
///
/// ```rust
/// use gameplay_objects::core::ObjectState;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
/// enum ValveState {
///     Open,
///     Shut,
///     Disabled,
///     Transition,
/// }
///
/// impl ObjectState for ValveState {
///     const TRANSITION: Self = Self::Transition;
///     const DISABLED: Self = Self::Disabled;
///
///     fn fallback_initial() -> Self {
///         Self::Shut
///     }
///
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Open => "Open",
///             Self::Shut => "Shut",
///             Self::Disabled => "Disabled",
///             Self::Transition => "Transition",
///         }
///     }
/// }
/// ```
pub trait ObjectState:
    Copy
    + Clone
    + PartialEq
    + Eq
    + Debug
    + Serialize
    + for<'de> Deserialize<'de>
    + Send
    + Sync
    + 'static
{
    /// The transient marker variant for a pending deferred change.
    ///
    /// Never a legal initial state and never a legal requested target; the
    /// controller enters it on a deferred change and leaves it on finish.
    const TRANSITION: Self;

    /// The generic disable-override variant.
    const DISABLED: Self;

    /// The state used when a forbidden initial state is supplied.
    ///
    /// Typically the flavor's "closed-equivalent" steady state.
    fn fallback_initial() -> Self;

    /// Get the state's name for display/logging.
    fn name(&self) -> &'static str;

    /// Check if this is the transition marker.
    fn is_transition(&self) -> bool {
        *self == Self::TRANSITION
    }

    /// Check if this is the disabled override state.
    fn is_disabled(&self) -> bool {
        *self == Self::DISABLED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
    enum TestState {
        Primary,
        Secondary,
        Disabled,
        Transition,
    }

    impl ObjectState for TestState {
        const TRANSITION: Self = Self::Transition;
        const DISABLED: Self = Self::Disabled;

        fn fallback_initial() -> Self {
            Self::Secondary
        }

        fn name(&self) -> &'static str {
            match self {
                Self::Primary => "Primary",
                Self::Secondary => "Secondary",
                Self::Disabled => "Disabled",
                Self::Transition => "Transition",
            }
        }
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(TestState::Primary.name(), "Primary");
        assert_eq!(TestState::Secondary.name(), "Secondary");
        assert_eq!(TestState::Disabled.name(), "Disabled");
        assert_eq!(TestState::Transition.name(), "Transition");
    }

    #[test]
    fn is_transition_identifies_marker_variant() {
        assert!(TestState::Transition.is_transition());
        assert!(!TestState::Primary.is_transition());
        assert!(!TestState::Disabled.is_transition());
    }

    #[test]
    fn is_disabled_identifies_override_variant() {
        assert!(TestState::Disabled.is_disabled());
        assert!(!TestState::Secondary.is_disabled());
        assert!(!TestState::Transition.is_disabled());
    }

    #[test]
    fn fallback_initial_is_a_steady_state() {
        let fallback = TestState::fallback_initial();
        assert!(!fallback.is_transition());
        assert!(!fallback.is_disabled());
    }

    #[test]
    fn state_serializes_correctly() {
        let state = TestState::Primary;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
