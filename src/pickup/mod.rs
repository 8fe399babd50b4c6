//! Pickup activation.
//!
//! A pickup is a one-shot (or reusable) object an actor activates on
//! contact or interaction. The acceptance check and the success/failure
//! reactions are supplied by a [`PickupBehavior`]; the trigger volume that
//! detects contact is engine territory and stays outside this crate —
//! callers invoke [`Pickup::activate`] from their own collision or
//! interaction handling.

use crate::core::CommandError;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Opaque identity of the actor activating a pickup. Carried in event
/// payloads and behavior hooks; the crate never dereferences it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorId(pub u64);

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "actor#{}", self.0)
    }
}

/// Game-specific reactions of a pickup.
///
/// `activate` drives these as a template method: the acceptance check
/// first, then exactly one of the success or failure hooks.
pub trait PickupBehavior {
    /// Whether `activator` may take this pickup. Defaults to yes.
    fn can_be_activated(&self, _activator: &ActorId) -> bool {
        true
    }

    /// Reaction to a successful activation, e.g. granting the contents.
    fn on_activated(&mut self, activator: ActorId);

    /// Reaction to a refused activation. Defaults to nothing.
    fn on_activation_failed(&mut self, _activator: ActorId) {}
}

type PickupListener = Box<dyn FnMut(ActorId) + Send>;

/// A pickup wrapping game-specific [`PickupBehavior`].
///
/// With `consume_on_activation` (the default) the first successful
/// activation marks the pickup consumed and later attempts are rejected;
/// the owning game destroys the entity in response to the activation
/// event.
///
/// # Example
///
/// ```rust
/// use gameplay_objects::pickup::{ActorId, Pickup, PickupBehavior};
///
/// struct HealthPack {
///     healed: u32,
/// }
///
/// impl PickupBehavior for HealthPack {
///     fn on_activated(&mut self, _activator: ActorId) {
///         self.healed += 25;
///     }
/// }
///
/// let mut pack = Pickup::new(HealthPack { healed: 0 });
/// pack.activate(ActorId(7)).unwrap();
/// assert!(pack.is_consumed());
/// assert!(pack.activate(ActorId(7)).is_err());
/// ```
pub struct Pickup<B: PickupBehavior> {
    behavior: B,
    consume_on_activation: bool,
    consumed: bool,
    listeners: Vec<PickupListener>,
}

impl<B: PickupBehavior> Pickup<B> {
    /// Create a pickup that is consumed by its first activation.
    pub fn new(behavior: B) -> Self {
        Self {
            behavior,
            consume_on_activation: true,
            consumed: false,
            listeners: Vec::new(),
        }
    }

    /// Create a pickup that can be activated repeatedly.
    pub fn reusable(behavior: B) -> Self {
        Self {
            consume_on_activation: false,
            ..Self::new(behavior)
        }
    }

    /// Register a listener invoked with the activator on every successful
    /// activation.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(ActorId) + Send + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Attempt to activate the pickup for `activator`.
    ///
    /// A consumed pickup rejects with `MissingCapability`. A refusal from
    /// the behavior's acceptance check invokes the failure hook and
    /// rejects with `GuardRejected`; otherwise the success hook runs, the
    /// activation event fires, and the pickup is marked consumed when
    /// configured to be.
    pub fn activate(&mut self, activator: ActorId) -> Result<(), CommandError> {
        if self.consumed {
            return Err(CommandError::MissingCapability);
        }

        if !self.behavior.can_be_activated(&activator) {
            self.behavior.on_activation_failed(activator);
            return Err(CommandError::GuardRejected);
        }

        self.behavior.on_activated(activator);
        debug!(%activator, "pickup activated");
        for listener in &mut self.listeners {
            listener(activator);
        }

        if self.consume_on_activation {
            self.consumed = true;
        }

        Ok(())
    }

    /// Whether the pickup has been consumed by an activation.
    pub fn is_consumed(&self) -> bool {
        self.consumed
    }

    /// Whether the first successful activation consumes the pickup.
    pub fn consume_on_activation(&self) -> bool {
        self.consume_on_activation
    }

    /// Access the wrapped behavior.
    pub fn behavior(&self) -> &B {
        &self.behavior
    }
}
