//! Gameplay object flavors.
//!
//! Each flavor is a thin wrapper over a
//! [`StateController`](crate::core::StateController): it names its states,
//! supplies the guard for each named command, and forwards everything else
//! to the shared engine. The disable/enable override, deferred transitions,
//! and reversal behave identically across flavors.

mod button;
mod chest;
mod door;
mod gameplay_object;
mod lock;

pub use button::{ButtonController, ButtonState};
pub use chest::{ChestController, ChestState};
pub use door::{DoorController, DoorState};
pub use gameplay_object::{GameplayObjectController, GameplayObjectState};
pub use lock::{LockController, LockState};

/// Generate the command surface every flavor shares: disable/enable, the
/// administrative force-state override, transition finish/reverse, the
/// initial-state setter, observers, and read accessors. Named semantic
/// commands (open, press, lock, ...) stay in the flavor files next to
/// their guards.
macro_rules! impl_controller_facade {
    ($controller:ident, $state:ident) => {
        impl $controller {
            /// Disable the object, capturing the current state for a later
            /// [`enable`](Self::enable). Rejected when already disabled.
            pub fn disable(
                &mut self,
                immediate: bool,
            ) -> Result<(), $crate::core::CommandError> {
                self.machine.disable(immediate)
            }

            /// Restore the state captured when the object was disabled.
            /// Rejected unless currently disabled.
            pub fn enable(
                &mut self,
                immediate: bool,
            ) -> Result<(), $crate::core::CommandError> {
                self.machine.enable(immediate)
            }

            /// Set the state directly, bypassing the command guards.
            pub fn force_state(
                &mut self,
                new_state: $state,
                immediate: bool,
            ) -> Result<(), $crate::core::CommandError> {
                self.machine.force_state(new_state, immediate)
            }

            /// Commit the pending deferred transition.
            pub fn finish_transition(&mut self) -> Result<(), $crate::core::CommandError> {
                self.machine.finish_transition()
            }

            /// Point the pending deferred transition back where it came
            /// from, without committing it.
            pub fn reverse_transition(&mut self) -> Result<(), $crate::core::CommandError> {
                self.machine.reverse_transition()
            }

            /// Reconfigure the initial state, force-resetting the current
            /// state. Rejects the `Transition` marker.
            pub fn set_initial_state(
                &mut self,
                new_state: $state,
            ) -> Result<(), $crate::core::CommandError> {
                self.machine.set_initial_state(new_state)
            }

            /// Register a listener for this object's state events.
            pub fn subscribe<F>(&mut self, listener: F)
            where
                F: FnMut(&$crate::core::StateEvent<$state>) + Send + 'static,
            {
                self.machine.subscribe(listener)
            }

            pub fn current_state(&self) -> $state {
                self.machine.current_state()
            }

            pub fn target_state(&self) -> $state {
                self.machine.target_state()
            }

            pub fn last_state(&self) -> $state {
                self.machine.last_state()
            }

            pub fn initial_state(&self) -> $state {
                self.machine.initial_state()
            }

            pub fn is_transitioning(&self) -> bool {
                self.machine.is_transitioning()
            }

            pub fn is_disabled(&self) -> bool {
                self.machine.is_disabled()
            }

            /// The diagnostic log of accepted changes.
            pub fn history(&self) -> &$crate::core::TransitionLog<$state> {
                self.machine.history()
            }
        }

        impl Default for $controller {
            fn default() -> Self {
                Self::new(<$state as $crate::core::ObjectState>::fallback_initial())
            }
        }
    };
}

pub(crate) use impl_controller_facade;
