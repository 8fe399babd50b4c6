//! Generic activatable object state controller.
//!
//! The catch-all flavor for levers, terminals, shrines and other objects
//! that are simply "on or off" with the shared disable/transition layer.

use super::impl_controller_facade;
use crate::core::{CommandError, StateController};
use crate::object_state;

object_state! {
    /// States of a generic activatable object.
    pub enum GameplayObjectState {
        Active,
        Inactive,
        Disabled,
        Transition,
    }
    fallback: Active
}

/// Drives a generic gameplay object through activate/deactivate commands.
pub struct GameplayObjectController {
    machine: StateController<GameplayObjectState>,
}

impl GameplayObjectController {
    /// Create a controller starting in `initial`. Supplying `Transition`
    /// falls back to `Active`.
    pub fn new(initial: GameplayObjectState) -> Self {
        Self {
            machine: StateController::new(initial),
        }
    }

    /// Activate the object. Valid only while `Inactive`.
    pub fn activate(&mut self, immediate: bool) -> Result<(), CommandError> {
        if self.machine.current_state() != GameplayObjectState::Inactive {
            return Err(CommandError::GuardRejected);
        }

        self.machine
            .change_state(GameplayObjectState::Active, immediate)
    }

    /// Deactivate the object. Valid only while `Active`.
    pub fn deactivate(&mut self, immediate: bool) -> Result<(), CommandError> {
        if self.machine.current_state() != GameplayObjectState::Active {
            return Err(CommandError::GuardRejected);
        }

        self.machine
            .change_state(GameplayObjectState::Inactive, immediate)
    }
}

impl_controller_facade!(GameplayObjectController, GameplayObjectState);
