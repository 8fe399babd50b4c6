//! Generic state controller engine.
//!
//! This module contains everything the gameplay object flavors share:
//! - State definitions via the [`ObjectState`] trait
//! - The [`StateController`] transition engine
//! - Notification events and observer registration
//! - The command rejection taxonomy
//! - A diagnostic transition log
//!
//! Flavors in [`crate::objects`] are thin wrappers over a controller; all
//! transition semantics live here.

mod error;
mod events;
mod history;
mod machine;
mod state;

pub use error::CommandError;
pub use events::{Observers, StateEvent, StateListener};
pub use history::{TransitionLog, TransitionRecord};
pub use machine::StateController;
pub use state::ObjectState;
