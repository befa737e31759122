//! Per-collection lock registry

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Shared handle to one collection's exclusive lock
pub type CollectionLock = Arc<Mutex<()>>;

/// Maps collection names to their exclusive locks.
///
/// Entries are created lazily on first use and never removed. The registry's
/// own mutex guards only the map lookup/insert; callers lock the returned
/// handle after the registry guard has been released.
#[derive(Debug, Default)]
pub struct LockRegistry {
    locks: Mutex<HashMap<String, CollectionLock>>,
}

impl LockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the lock handle for `collection`, creating it if absent
    pub fn acquire(&self, collection: &str) -> CollectionLock {
        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(locks.entry(collection.to_string()).or_default())
    }

    /// Number of collections that have a lock
    pub fn len(&self) -> usize {
        self.locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Lock `lock`, recovering from poisoning.
///
/// The guarded value is `()`, so a panic in a previous holder cannot leave
/// anything inconsistent behind.
pub(crate) fn lock_exclusive(lock: &Mutex<()>) -> MutexGuard<'_, ()> {
    lock.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_same_collection_same_handle() {
        let registry = LockRegistry::new();
        let a = registry.acquire("users");
        let b = registry.acquire("users");
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_distinct_collections_distinct_handles() {
        let registry = LockRegistry::new();
        let users = registry.acquire("users");
        let orders = registry.acquire("orders");
        assert!(!Arc::ptr_eq(&users, &orders));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_concurrent_acquire_yields_one_handle() {
        let registry = Arc::new(LockRegistry::new());

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || registry.acquire("shared"))
            })
            .collect();

        let locks: Vec<CollectionLock> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(locks.iter().all(|l| Arc::ptr_eq(l, &locks[0])));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_registry_not_blocked_by_held_collection_lock() {
        let registry = LockRegistry::new();
        let users = registry.acquire("users");
        let _guard = lock_exclusive(&users);

        // Registry lookups stay available while a collection lock is held
        let again = registry.acquire("users");
        assert!(Arc::ptr_eq(&users, &again));
        assert!(again.try_lock().is_err());
    }

    #[test]
    fn test_poisoned_lock_is_recovered() {
        let registry = Arc::new(LockRegistry::new());
        let lock = registry.acquire("users");

        let poisoner = Arc::clone(&lock);
        let _ = thread::spawn(move || {
            let _guard = poisoner.lock().unwrap();
            panic!("poison the lock");
        })
        .join();

        assert!(lock.is_poisoned());
        let _guard = lock_exclusive(&lock);
    }
}
