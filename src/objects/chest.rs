//! Chest state controller.

use super::impl_controller_facade;
use crate::core::{CommandError, StateController};
use crate::object_state;

object_state! {
    /// States of a chest. Like a door, a chest carries a built-in latch:
    /// it locks and unlocks from `Closed` without key involvement.
    pub enum ChestState {
        Closed,
        Opened,
        Locked,
        Disabled,
        Transition,
    }
    fallback: Closed
}

/// Drives a single chest through open/close/lock/unlock commands.
///
/// A deferred `open(false)` is the usual pairing with a lid animation:
/// finish the transition when the lid lands.
pub struct ChestController {
    machine: StateController<ChestState>,
}

impl ChestController {
    /// Create a chest controller starting in `initial`. Supplying
    /// `Transition` falls back to `Closed`.
    pub fn new(initial: ChestState) -> Self {
        Self {
            machine: StateController::new(initial),
        }
    }

    /// Open the chest. Valid only while `Closed`.
    pub fn open(&mut self, immediate: bool) -> Result<(), CommandError> {
        if self.machine.current_state() != ChestState::Closed {
            return Err(CommandError::GuardRejected);
        }

        self.machine.change_state(ChestState::Opened, immediate)
    }

    /// Close the chest. Valid only while `Opened`.
    pub fn close(&mut self, immediate: bool) -> Result<(), CommandError> {
        if self.machine.current_state() != ChestState::Opened {
            return Err(CommandError::GuardRejected);
        }

        self.machine.change_state(ChestState::Closed, immediate)
    }

    /// Lock the chest. Valid only while `Closed`.
    pub fn lock(&mut self, immediate: bool) -> Result<(), CommandError> {
        if self.machine.current_state() != ChestState::Closed {
            return Err(CommandError::GuardRejected);
        }

        self.machine.change_state(ChestState::Locked, immediate)
    }

    /// Unlock the chest back to `Closed`. Valid only while `Locked`.
    pub fn unlock(&mut self, immediate: bool) -> Result<(), CommandError> {
        if self.machine.current_state() != ChestState::Locked {
            return Err(CommandError::GuardRejected);
        }

        self.machine.change_state(ChestState::Closed, immediate)
    }
}

impl_controller_facade!(ChestController, ChestState);
