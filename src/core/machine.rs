//! Generic state controller shared by every gameplay object flavor.
//!
//! The controller drives a small closed state enum with two steady "normal"
//! states (or three, for flavors with a built-in lock), a `Disabled`
//! override, and a transient `Transition` marker for deferred changes. Each
//! flavor wraps a controller and contributes only its command names and
//! guard predicates; the change algorithm, disable/enable restore, deferred
//! transitions, and reversal all live here.

use super::error::CommandError;
use super::events::{Observers, StateEvent};
use super::history::{TransitionLog, TransitionRecord};
use super::state::ObjectState;
use tracing::{debug, warn};

/// Finite-state controller for one gameplay object instance.
///
/// A deferred change (`immediate = false`) parks the controller in the
/// `Transition` marker until [`finish_transition`](Self::finish_transition)
/// commits it or [`reverse_transition`](Self::reverse_transition) points it
/// back where it came from. The deferral is purely logical; the controller
/// never waits. Callers typically finish the transition when an animation
/// or timer completes.
///
/// # Example
///
/// ```rust
/// use gameplay_objects::objects::{DoorController, DoorState};
///
/// let mut door = DoorController::new(DoorState::Closed);
///
/// door.open(false).unwrap();
/// assert_eq!(door.current_state(), DoorState::Transition);
/// assert_eq!(door.target_state(), DoorState::Opened);
///
/// door.finish_transition().unwrap();
/// assert_eq!(door.current_state(), DoorState::Opened);
/// ```
pub struct StateController<S: ObjectState> {
    initial_state: S,
    current_state: S,
    target_state: S,
    last_state: S,
    observers: Observers<S>,
    history: TransitionLog<S>,
}

impl<S: ObjectState> StateController<S> {
    /// Create a controller starting in `initial`.
    ///
    /// `Transition` is not a legal initial state; supplying it logs a
    /// warning and falls back to the flavor's default steady state.
    pub fn new(initial: S) -> Self {
        let initial = if initial.is_transition() {
            warn!(
                fallback = S::fallback_initial().name(),
                "initial state can't be Transition, using the fallback"
            );
            S::fallback_initial()
        } else {
            initial
        };

        Self {
            initial_state: initial,
            current_state: initial,
            target_state: initial,
            last_state: initial,
            observers: Observers::new(),
            history: TransitionLog::new(),
        }
    }

    /// Reconfigure the initial state, force-resetting the current state.
    ///
    /// This also resets `current_state` even on a machine that has already
    /// moved past its initial state; the force-reset mirrors how editor
    /// tooling uses the setter and is intentional. It bypasses the change
    /// machinery entirely: no events fire and `last_state`/`target_state`
    /// are left untouched.
    pub fn set_initial_state(&mut self, new_state: S) -> Result<(), CommandError> {
        if new_state.is_transition() {
            warn!("initial state can't be Transition, state unchanged");
            return Err(CommandError::InvalidTarget);
        }

        if self.initial_state == new_state {
            return Err(CommandError::NoOpRequested);
        }

        self.initial_state = new_state;
        self.current_state = new_state;
        Ok(())
    }

    /// The shared change algorithm behind every command.
    ///
    /// Rejects same-state and `Transition` targets. On success it records
    /// the pre-change state in `last_state` (unless the controller was
    /// already mid-transition, so `last_state` never holds the marker),
    /// then either jumps straight to `new_state` or parks in `Transition`
    /// with `target_state` holding the destination. Fires
    /// `TransitionStarted` for the deferred branch, then `StateChanged` in
    /// both branches.
    pub fn change_state(&mut self, new_state: S, immediate: bool) -> Result<(), CommandError> {
        if new_state == self.current_state {
            return Err(CommandError::NoOpRequested);
        }

        if new_state.is_transition() {
            warn!("can't change the current state to Transition");
            return Err(CommandError::InvalidTarget);
        }

        if !self.current_state.is_transition() {
            self.last_state = self.current_state;
        }
        self.target_state = new_state;

        let from = self.current_state;

        if immediate {
            self.current_state = self.target_state;
        } else {
            self.current_state = S::TRANSITION;
            debug!(
                from = self.last_state.name(),
                to = self.target_state.name(),
                "state transition started"
            );
            self.observers.broadcast(&StateEvent::TransitionStarted {
                target: self.target_state,
            });
        }

        self.history
            .record(TransitionRecord::now(from, self.current_state, immediate));
        debug!(state = self.current_state.name(), "state changed");
        self.observers.broadcast(&StateEvent::StateChanged {
            state: self.current_state,
            immediate,
        });
        Ok(())
    }

    /// Administrative override: change state without any flavor guard.
    ///
    /// Only the structural checks remain (no-op and `Transition` target
    /// rejection); preconditions like "a door only opens from Closed" do
    /// not apply.
    pub fn force_state(&mut self, new_state: S, immediate: bool) -> Result<(), CommandError> {
        if new_state == self.current_state {
            return Err(CommandError::NoOpRequested);
        }

        if new_state.is_transition() {
            warn!("can't force the current state to Transition");
            return Err(CommandError::InvalidTarget);
        }

        self.change_state(new_state, immediate)
    }

    /// Disable the object from any state except already-Disabled.
    ///
    /// The pre-disable state is captured in `last_state` so
    /// [`enable`](Self::enable) can restore it.
    pub fn disable(&mut self, immediate: bool) -> Result<(), CommandError> {
        if self.current_state.is_disabled() {
            return Err(CommandError::GuardRejected);
        }

        self.change_state(S::DISABLED, immediate)
    }

    /// Re-enable a disabled object, restoring the state captured at
    /// disable time.
    pub fn enable(&mut self, immediate: bool) -> Result<(), CommandError> {
        if !self.current_state.is_disabled() {
            return Err(CommandError::GuardRejected);
        }

        self.change_state(self.last_state, immediate)
    }

    /// Commit the pending deferred change.
    ///
    /// Jumps to `target_state` as if the change had been immediate and
    /// fires `TransitionFinished` after the usual `StateChanged`.
    pub fn finish_transition(&mut self) -> Result<(), CommandError> {
        if !self.current_state.is_transition() {
            warn!("can't finish a transition, no transition is in progress");
            return Err(CommandError::NotInTransition);
        }

        self.change_state(self.target_state, true)?;
        debug!(state = self.current_state.name(), "state transition finished");
        self.observers.broadcast(&StateEvent::TransitionFinished {
            state: self.current_state,
        });
        Ok(())
    }

    /// Invert the pending deferred change.
    ///
    /// Swaps `target_state` with `last_state` and stays in `Transition`;
    /// the pending change now heads back to the state it started from. A
    /// later [`finish_transition`](Self::finish_transition) commits the
    /// swapped destination.
    pub fn reverse_transition(&mut self) -> Result<(), CommandError> {
        if !self.current_state.is_transition() {
            warn!("can't reverse a transition, no transition is in progress");
            return Err(CommandError::NotInTransition);
        }

        std::mem::swap(&mut self.target_state, &mut self.last_state);
        debug!(
            from = self.last_state.name(),
            to = self.target_state.name(),
            "state transition reversed"
        );
        self.observers.broadcast(&StateEvent::TransitionReversed {
            target: self.target_state,
        });
        Ok(())
    }

    /// Register a listener for this controller's events.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&StateEvent<S>) + Send + 'static,
    {
        self.observers.subscribe(listener);
    }

    /// The authoritative "where the object is now".
    pub fn current_state(&self) -> S {
        self.current_state
    }

    /// The destination of the pending change; outside a transition this is
    /// simply the most recently entered state.
    pub fn target_state(&self) -> S {
        self.target_state
    }

    /// The state occupied immediately before the most recent accepted
    /// change. Never the `Transition` marker.
    pub fn last_state(&self) -> S {
        self.last_state
    }

    /// The configured initial state.
    pub fn initial_state(&self) -> S {
        self.initial_state
    }

    /// Whether a deferred change is pending.
    pub fn is_transitioning(&self) -> bool {
        self.current_state.is_transition()
    }

    /// Whether the disable override is active.
    pub fn is_disabled(&self) -> bool {
        self.current_state.is_disabled()
    }

    /// The diagnostic log of accepted changes.
    pub fn history(&self) -> &TransitionLog<S> {
        &self.history
    }
}
