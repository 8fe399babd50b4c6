//! Command rejection errors for state controllers.

use thiserror::Error;

/// Reasons a state controller command can be rejected.
///
/// Rejections are local and non-fatal: the command leaves the controller
/// untouched and fires no events. Callers check the `Result` to learn
/// whether a command took effect.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// The command's state precondition was not met, e.g. pressing an
    /// already-pressed button or disabling a disabled object.
    #[error("command precondition not met for the current state")]
    GuardRejected,

    /// Transition was requested as an explicit target or initial state.
    /// It is only ever a derived, transient value of the current state.
    #[error("Transition is not a valid target or initial state")]
    InvalidTarget,

    /// The requested state equals the current (or initial) state already.
    #[error("requested state equals the current state")]
    NoOpRequested,

    /// Finish or reverse was called while no transition is pending.
    #[error("no transition is in progress")]
    NotInTransition,

    /// A lock command could not present a matching key, or a pickup was
    /// already consumed.
    #[error("required capability is missing")]
    MissingCapability,
}
