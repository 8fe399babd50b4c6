//! Lock keys and the keyring component that holds them.
//!
//! A [`LockKey`] is an identity, not an item with behavior: locks compare
//! the key they require against the keys a keyring holds. The
//! [`KeyProvider`] trait is the capability the lock flavor consumes, so
//! tests and game code can substitute their own holder.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;
use uuid::Uuid;

/// Identity of a lock key. Two keys match when their ids are equal; the
/// name is display-only.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LockKey {
    id: Uuid,
    name: String,
}

impl LockKey {
    /// Mint a new key identity with a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for LockKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for LockKey {}

impl fmt::Display for LockKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Capability a lock consumes to gate its commands.
///
/// `use_key` confirms the key is present and marks it used; whether a used
/// key stays on the ring is the holder's policy.
pub trait KeyProvider {
    /// Whether the holder carries a matching key.
    fn has_key(&self, key: &LockKey) -> bool;

    /// Present a matching key, returning whether it was there.
    fn use_key(&mut self, key: &LockKey) -> bool;
}

/// Notification fired by a [`Keyring`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyringEvent {
    KeyAdded(LockKey),
    KeyRemoved(LockKey),
    AllKeysRemoved,
    KeyUsed(LockKey),
}

type KeyringListener = Box<dyn FnMut(&KeyringEvent) + Send>;

/// Ordered unique collection of acquired lock keys.
///
/// All mutating operations return whether they took effect; rejected
/// operations fire no events.
///
/// # Example
///
/// ```rust
/// use gameplay_objects::keyring::{KeyProvider, Keyring, LockKey};
///
/// let rusty = LockKey::new("rusty-key");
/// let mut keyring = Keyring::new();
///
/// assert!(keyring.add_key(rusty.clone()));
/// assert!(!keyring.add_key(rusty.clone())); // already acquired
/// assert!(keyring.has_key(&rusty));
/// assert!(keyring.use_key(&rusty)); // stays on the ring after use
/// ```
pub struct Keyring {
    acquired: Vec<LockKey>,
    listeners: Vec<KeyringListener>,
}

impl Keyring {
    /// Create an empty keyring.
    pub fn new() -> Self {
        Self {
            acquired: Vec::new(),
            listeners: Vec::new(),
        }
    }

    /// Register a listener for this keyring's events.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&KeyringEvent) + Send + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Acquire a key. Rejected if an identical key is already held.
    pub fn add_key(&mut self, key: LockKey) -> bool {
        if self.acquired.contains(&key) {
            return false;
        }

        debug!(key = key.name(), "lock key added");
        self.acquired.push(key.clone());
        self.broadcast(&KeyringEvent::KeyAdded(key));
        true
    }

    /// Drop a key from the ring. Rejected if it is not held.
    pub fn remove_key(&mut self, key: &LockKey) -> bool {
        let Some(index) = self.acquired.iter().position(|held| held == key) else {
            return false;
        };

        let removed = self.acquired.remove(index);
        debug!(key = removed.name(), "lock key removed");
        self.broadcast(&KeyringEvent::KeyRemoved(removed));
        true
    }

    /// Drop every key. Rejected if the ring is already empty.
    pub fn remove_all_keys(&mut self) -> bool {
        if self.acquired.is_empty() {
            return false;
        }

        self.acquired.clear();
        debug!("all lock keys removed");
        self.broadcast(&KeyringEvent::AllKeysRemoved);
        true
    }

    /// The keys currently held, in acquisition order.
    pub fn acquired_keys(&self) -> &[LockKey] {
        &self.acquired
    }

    fn broadcast(&mut self, event: &KeyringEvent) {
        for listener in &mut self.listeners {
            listener(event);
        }
    }
}

impl KeyProvider for Keyring {
    fn has_key(&self, key: &LockKey) -> bool {
        self.acquired.contains(key)
    }

    /// Confirms presence and fires `KeyUsed`. The key stays on the ring;
    /// callers that want consumable keys follow up with
    /// [`remove_key`](Keyring::remove_key).
    fn use_key(&mut self, key: &LockKey) -> bool {
        if !self.has_key(key) {
            return false;
        }

        debug!(key = key.name(), "lock key used");
        self.broadcast(&KeyringEvent::KeyUsed(key.clone()));
        true
    }
}

impl Default for Keyring {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn recorded_events(keyring: &mut Keyring) -> Arc<Mutex<Vec<KeyringEvent>>> {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        keyring.subscribe(move |event| sink.lock().unwrap().push(event.clone()));
        events
    }

    #[test]
    fn keys_with_the_same_name_are_distinct() {
        let a = LockKey::new("cellar");
        let b = LockKey::new("cellar");
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn add_key_rejects_duplicates() {
        let key = LockKey::new("cellar");
        let mut keyring = Keyring::new();
        let events = recorded_events(&mut keyring);

        assert!(keyring.add_key(key.clone()));
        assert!(!keyring.add_key(key.clone()));

        assert_eq!(keyring.acquired_keys(), &[key.clone()]);
        assert_eq!(*events.lock().unwrap(), vec![KeyringEvent::KeyAdded(key)]);
    }

    #[test]
    fn remove_key_requires_possession() {
        let key = LockKey::new("attic");
        let mut keyring = Keyring::new();

        assert!(!keyring.remove_key(&key));

        keyring.add_key(key.clone());
        assert!(keyring.remove_key(&key));
        assert!(keyring.acquired_keys().is_empty());
    }

    #[test]
    fn remove_all_keys_rejects_an_empty_ring() {
        let mut keyring = Keyring::new();
        let events = recorded_events(&mut keyring);

        assert!(!keyring.remove_all_keys());
        assert!(events.lock().unwrap().is_empty());

        keyring.add_key(LockKey::new("one"));
        keyring.add_key(LockKey::new("two"));
        assert!(keyring.remove_all_keys());
        assert!(keyring.acquired_keys().is_empty());
        assert_eq!(
            events.lock().unwrap().last(),
            Some(&KeyringEvent::AllKeysRemoved)
        );
    }

    #[test]
    fn use_key_confirms_but_does_not_consume() {
        let key = LockKey::new("vault");
        let mut keyring = Keyring::new();
        keyring.add_key(key.clone());
        let events = recorded_events(&mut keyring);

        assert!(keyring.use_key(&key));
        assert!(keyring.has_key(&key));
        assert_eq!(
            *events.lock().unwrap(),
            vec![KeyringEvent::KeyUsed(key.clone())]
        );

        // A second use still succeeds; consumption is the caller's policy.
        assert!(keyring.use_key(&key));
    }

    #[test]
    fn use_key_on_an_absent_key_fires_nothing() {
        let mut keyring = Keyring::new();
        let events = recorded_events(&mut keyring);

        assert!(!keyring.use_key(&LockKey::new("missing")));
        assert!(events.lock().unwrap().is_empty());
    }

    #[test]
    fn keys_keep_acquisition_order() {
        let mut keyring = Keyring::new();
        let first = LockKey::new("first");
        let second = LockKey::new("second");
        keyring.add_key(first.clone());
        keyring.add_key(second.clone());

        assert_eq!(keyring.acquired_keys(), &[first, second]);
    }

    #[test]
    fn lock_key_serializes_round_trip() {
        let key = LockKey::new("gate");
        let json = serde_json::to_string(&key).unwrap();
        let back: LockKey = serde_json::from_str(&json).unwrap();
        assert_eq!(key, back);
        assert_eq!(back.name(), "gate");
    }
}
