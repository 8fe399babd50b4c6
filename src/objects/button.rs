//! Button state controller.

use super::impl_controller_facade;
use crate::core::{CommandError, StateController};
use crate::object_state;

object_state! {
    /// States of a button.
    pub enum ButtonState {
        Released,
        Pressed,
        Disabled,
        Transition,
    }
    fallback: Released
}

/// Drives a single button through press/release commands.
pub struct ButtonController {
    machine: StateController<ButtonState>,
}

impl ButtonController {
    /// Create a button controller starting in `initial`. Supplying
    /// `Transition` falls back to `Released`.
    pub fn new(initial: ButtonState) -> Self {
        Self {
            machine: StateController::new(initial),
        }
    }

    /// Press the button. Valid only while `Released`.
    pub fn press(&mut self, immediate: bool) -> Result<(), CommandError> {
        if self.machine.current_state() != ButtonState::Released {
            return Err(CommandError::GuardRejected);
        }

        self.machine.change_state(ButtonState::Pressed, immediate)
    }

    /// Release the button. Valid only while `Pressed`.
    pub fn release(&mut self, immediate: bool) -> Result<(), CommandError> {
        if self.machine.current_state() != ButtonState::Pressed {
            return Err(CommandError::GuardRejected);
        }

        self.machine.change_state(ButtonState::Released, immediate)
    }
}

impl_controller_facade!(ButtonController, ButtonState);
