//! Gameplay Objects: reusable interactable building blocks
//!
//! This crate provides the state logic behind common gameplay objects -
//! doors, chests, buttons, locks, keyrings and pickups - as plain Rust
//! components a game attaches to its entities. One generic
//! [`StateController`](core::StateController) drives every flavor; each
//! flavor contributes only its state names and command guards.
//!
//! # Core Concepts
//!
//! - **States**: each flavor has two or three steady states plus a shared
//!   `Disabled` override and a transient `Transition` marker
//! - **Commands**: synchronous, guarded, and non-fatal - a rejected
//!   command returns an error, mutates nothing, and fires no events
//! - **Deferred transitions**: a command with `immediate = false` parks in
//!   `Transition` until the caller finishes or reverses it, typically at
//!   the end of an animation
//! - **Events**: every accepted change is broadcast synchronously to
//!   registered listeners, in registration order
//!
//! # Example
//!
//! ```rust
//! use gameplay_objects::core::StateEvent;
//! use gameplay_objects::objects::{DoorController, DoorState};
//!
//! let mut door = DoorController::new(DoorState::Closed);
//! door.subscribe(|event: &StateEvent<DoorState>| {
//!     if let StateEvent::TransitionFinished { state } = event {
//!         println!("door settled in {state:?}");
//!     }
//! });
//!
//! // Deferred open: the door is "in motion" until the swing animation
//! // ends and the game finishes the transition.
//! door.open(false).unwrap();
//! assert_eq!(door.current_state(), DoorState::Transition);
//! door.finish_transition().unwrap();
//! assert_eq!(door.current_state(), DoorState::Opened);
//! ```
//!
//! The crate performs no rendering, physics, or persistence; it is the
//! single-threaded state brain a game loop calls into.

pub mod core;
pub mod keyring;
mod macros;
pub mod objects;
pub mod pickup;

// Re-export commonly used types
pub use crate::core::{CommandError, ObjectState, StateController, StateEvent};
