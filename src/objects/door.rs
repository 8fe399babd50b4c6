//! Door state controller.

use super::impl_controller_facade;
use crate::core::{CommandError, StateController};
use crate::object_state;

object_state! {
    /// States of a door.
    ///
    /// `Locked` is a third steady state next to `Closed`/`Opened`: a door
    /// locks and unlocks from `Closed` without any key involvement. Key
    /// gating belongs to the separate lock object
    /// ([`LockController`](super::LockController)).
    pub enum DoorState {
        Closed,
        Opened,
        Locked,
        Disabled,
        Transition,
    }
    fallback: Closed
}

/// Drives a single door through open/close/lock/unlock commands.
///
/// # Example
///
/// ```rust
/// use gameplay_objects::objects::{DoorController, DoorState};
///
/// let mut door = DoorController::new(DoorState::Closed);
/// door.open(true).unwrap();
/// assert_eq!(door.current_state(), DoorState::Opened);
///
/// // A second open is rejected: the door is no longer closed.
/// assert!(door.open(true).is_err());
/// ```
pub struct DoorController {
    machine: StateController<DoorState>,
}

impl DoorController {
    /// Create a door controller starting in `initial`. Supplying
    /// `Transition` falls back to `Closed`.
    pub fn new(initial: DoorState) -> Self {
        Self {
            machine: StateController::new(initial),
        }
    }

    /// Open the door. Valid only while `Closed`.
    pub fn open(&mut self, immediate: bool) -> Result<(), CommandError> {
        if self.machine.current_state() != DoorState::Closed {
            return Err(CommandError::GuardRejected);
        }

        self.machine.change_state(DoorState::Opened, immediate)
    }

    /// Close the door. Valid only while `Opened`.
    pub fn close(&mut self, immediate: bool) -> Result<(), CommandError> {
        if self.machine.current_state() != DoorState::Opened {
            return Err(CommandError::GuardRejected);
        }

        self.machine.change_state(DoorState::Closed, immediate)
    }

    /// Lock the door. Valid only while `Closed`.
    pub fn lock(&mut self, immediate: bool) -> Result<(), CommandError> {
        if self.machine.current_state() != DoorState::Closed {
            return Err(CommandError::GuardRejected);
        }

        self.machine.change_state(DoorState::Locked, immediate)
    }

    /// Unlock the door back to `Closed`. Valid only while `Locked`.
    pub fn unlock(&mut self, immediate: bool) -> Result<(), CommandError> {
        if self.machine.current_state() != DoorState::Locked {
            return Err(CommandError::GuardRejected);
        }

        self.machine.change_state(DoorState::Closed, immediate)
    }
}

impl_controller_facade!(DoorController, DoorState);
