//! Lock state controller with key gating.

use super::impl_controller_facade;
use crate::core::{CommandError, StateController};
use crate::keyring::{KeyProvider, LockKey};
use crate::object_state;

object_state! {
    /// States of a standalone lock.
    pub enum LockState {
        Locked,
        Unlocked,
        Disabled,
        Transition,
    }
    fallback: Locked
}

/// Drives a standalone lock through key-gated lock/unlock commands.
///
/// Unlike the built-in latches of doors and chests, both commands require
/// presenting the configured key to a [`KeyProvider`]: if no key is
/// configured, the holder lacks it, or using it fails, the command is
/// rejected with no state change and no events. Disable/enable ignore
/// keys.
///
/// # Example
///
/// ```rust
/// use gameplay_objects::keyring::{Keyring, LockKey};
/// use gameplay_objects::objects::{LockController, LockState};
///
/// let key = LockKey::new("vault-key");
/// let mut keyring = Keyring::new();
/// keyring.add_key(key.clone());
///
/// let mut lock = LockController::new(LockState::Locked);
/// lock.set_required_key(Some(key));
///
/// lock.unlock(&mut keyring, true).unwrap();
/// assert_eq!(lock.current_state(), LockState::Unlocked);
/// ```
pub struct LockController {
    machine: StateController<LockState>,
    required_key: Option<LockKey>,
}

impl LockController {
    /// Create a lock controller starting in `initial` with no required key
    /// configured. Supplying `Transition` falls back to `Locked`.
    ///
    /// A lock without a required key rejects every lock/unlock command;
    /// configure one with [`set_required_key`](Self::set_required_key).
    pub fn new(initial: LockState) -> Self {
        Self {
            machine: StateController::new(initial),
            required_key: None,
        }
    }

    /// Configure which key gates this lock. `None` makes the lock
    /// inoperable through the key-gated commands.
    pub fn set_required_key(&mut self, key: Option<LockKey>) {
        self.required_key = key;
    }

    /// The key this lock requires, if any.
    pub fn required_key(&self) -> Option<&LockKey> {
        self.required_key.as_ref()
    }

    /// Engage the lock. Valid only while `Unlocked`, and only with a
    /// matching key presented through `keys`.
    pub fn lock(
        &mut self,
        keys: &mut dyn KeyProvider,
        immediate: bool,
    ) -> Result<(), CommandError> {
        if self.machine.current_state() != LockState::Unlocked {
            return Err(CommandError::GuardRejected);
        }

        self.try_use_key(keys)?;
        self.machine.change_state(LockState::Locked, immediate)
    }

    /// Disengage the lock. Valid only while `Locked`, and only with a
    /// matching key presented through `keys`.
    pub fn unlock(
        &mut self,
        keys: &mut dyn KeyProvider,
        immediate: bool,
    ) -> Result<(), CommandError> {
        if self.machine.current_state() != LockState::Locked {
            return Err(CommandError::GuardRejected);
        }

        self.try_use_key(keys)?;
        self.machine.change_state(LockState::Unlocked, immediate)
    }

    fn try_use_key(&self, keys: &mut dyn KeyProvider) -> Result<(), CommandError> {
        let required = self
            .required_key
            .as_ref()
            .ok_or(CommandError::MissingCapability)?;

        if !keys.use_key(required) {
            return Err(CommandError::MissingCapability);
        }

        Ok(())
    }
}

impl_controller_facade!(LockController, LockState);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StateEvent;
    use crate::keyring::Keyring;
    use std::sync::{Arc, Mutex};

    fn lock_with_key() -> (LockController, Keyring, LockKey) {
        let key = LockKey::new("test-key");
        let mut keyring = Keyring::new();
        keyring.add_key(key.clone());

        let mut lock = LockController::new(LockState::Locked);
        lock.set_required_key(Some(key.clone()));
        (lock, keyring, key)
    }

    #[test]
    fn unlock_with_matching_key_succeeds() {
        let (mut lock, mut keyring, _key) = lock_with_key();

        lock.unlock(&mut keyring, true).unwrap();
        assert_eq!(lock.current_state(), LockState::Unlocked);

        lock.lock(&mut keyring, true).unwrap();
        assert_eq!(lock.current_state(), LockState::Locked);
    }

    #[test]
    fn unlock_without_the_key_is_rejected() {
        let (mut lock, _keyring, _key) = lock_with_key();
        let mut empty = Keyring::new();
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        lock.subscribe(move |event: &StateEvent<LockState>| sink.lock().unwrap().push(*event));

        assert_eq!(
            lock.unlock(&mut empty, true),
            Err(CommandError::MissingCapability)
        );
        assert_eq!(lock.current_state(), LockState::Locked);
        assert!(events.lock().unwrap().is_empty());
    }

    #[test]
    fn wrong_key_on_the_ring_is_rejected() {
        let (mut lock, _keyring, _key) = lock_with_key();
        let mut wrong = Keyring::new();
        wrong.add_key(LockKey::new("test-key")); // same name, different identity

        assert_eq!(
            lock.unlock(&mut wrong, true),
            Err(CommandError::MissingCapability)
        );
        assert_eq!(lock.current_state(), LockState::Locked);
    }

    #[test]
    fn unconfigured_lock_rejects_commands() {
        let mut lock = LockController::new(LockState::Locked);
        let mut keyring = Keyring::new();
        keyring.add_key(LockKey::new("any"));

        assert_eq!(
            lock.unlock(&mut keyring, true),
            Err(CommandError::MissingCapability)
        );
    }

    #[test]
    fn state_guard_is_checked_before_the_key() {
        let (mut lock, mut keyring, _key) = lock_with_key();

        // Locking an already-locked lock fails on the guard, not the key.
        assert_eq!(
            lock.lock(&mut keyring, true),
            Err(CommandError::GuardRejected)
        );
    }

    #[test]
    fn disable_and_enable_ignore_keys() {
        let (mut lock, _keyring, _key) = lock_with_key();

        lock.disable(true).unwrap();
        assert_eq!(lock.current_state(), LockState::Disabled);

        lock.enable(true).unwrap();
        assert_eq!(lock.current_state(), LockState::Locked);
    }

    #[test]
    fn deferred_unlock_finishes_later() {
        let (mut lock, mut keyring, _key) = lock_with_key();

        lock.unlock(&mut keyring, false).unwrap();
        assert_eq!(lock.current_state(), LockState::Transition);
        assert_eq!(lock.target_state(), LockState::Unlocked);

        lock.finish_transition().unwrap();
        assert_eq!(lock.current_state(), LockState::Unlocked);
    }

    #[test]
    fn force_state_needs_no_key() {
        let mut lock = LockController::new(LockState::Locked);

        lock.force_state(LockState::Unlocked, true).unwrap();
        assert_eq!(lock.current_state(), LockState::Unlocked);
    }

    #[test]
    fn required_key_can_be_reconfigured() {
        let (mut lock, mut keyring, key) = lock_with_key();
        assert_eq!(lock.required_key(), Some(&key));

        let replacement = LockKey::new("replacement");
        lock.set_required_key(Some(replacement.clone()));
        assert_eq!(
            lock.unlock(&mut keyring, true),
            Err(CommandError::MissingCapability)
        );

        keyring.add_key(replacement);
        lock.unlock(&mut keyring, true).unwrap();
        assert_eq!(lock.current_state(), LockState::Unlocked);
    }
}
