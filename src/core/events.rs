//! Notification events and observer plumbing.
//!
//! The controller broadcasts every accepted change synchronously to a list
//! of registered listeners, in registration order. Listeners are plain
//! closures; nothing is queued and nothing outlives the command call that
//! fired it.

use super::state::ObjectState;

/// Notification fired by a [`StateController`](super::StateController).
///
/// `StateChanged` accompanies every accepted change. For a deferred change
/// its `state` is the `Transition` marker, not the eventual destination;
/// listeners that need the destination use `immediate` to tell the cases
/// apart and listen for `TransitionStarted`/`TransitionFinished`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StateEvent<S: ObjectState> {
    /// The current state changed (possibly to the `Transition` marker).
    StateChanged {
        /// The new current state.
        state: S,
        /// Whether the change committed in one step.
        immediate: bool,
    },
    /// A deferred change entered its pending window.
    TransitionStarted {
        /// The destination the pending change will commit to.
        target: S,
    },
    /// A pending change was committed.
    TransitionFinished {
        /// The state the controller landed in.
        state: S,
    },
    /// A pending change now points at the opposite destination.
    TransitionReversed {
        /// The new destination of the still-pending change.
        target: S,
    },
}

/// Boxed listener closure invoked for every fired event.
pub type StateListener<S> = Box<dyn FnMut(&StateEvent<S>) + Send>;

/// Ordered list of event listeners.
///
/// Delivery is synchronous: `broadcast` runs every listener to completion
/// before returning to the command that fired the event.
pub struct Observers<S: ObjectState> {
    listeners: Vec<StateListener<S>>,
}

impl<S: ObjectState> Observers<S> {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    /// Register a listener. Listeners are never removed individually; they
    /// live as long as the controller.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&StateEvent<S>) + Send + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Invoke every listener with `event`, in registration order.
    pub fn broadcast(&mut self, event: &StateEvent<S>) {
        for listener in &mut self.listeners {
            listener(event);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl<S: ObjectState> Default for Observers<S> {
    fn default() -> Self {
        Self::new()
    }
}
