//! Change-notification registry
//!
//! Observers are plain callbacks with no payload: a notification only says "state
//! changed, read it again". `notify` copies the observer list and releases the lock
//! before calling anyone, so callbacks may subscribe or unsubscribe (themselves
//! included) without deadlocking. Such changes apply from the next notification.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub type Observer = Arc<dyn Fn() + Send + Sync>;

/// Token returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionHandle(u64);

#[derive(Default)]
pub struct ObserverRegistry {
    next_id: AtomicU64,
    observers: Mutex<Vec<(SubscriptionHandle, Observer)>>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn observers(&self) -> MutexGuard<'_, Vec<(SubscriptionHandle, Observer)>> {
        // A panicking observer never runs under this lock, so the list is intact
        self.observers.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn subscribe<F>(&self, observer: F) -> SubscriptionHandle
    where
        F: Fn() + Send + Sync + 'static,
    {
        let handle = SubscriptionHandle(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.observers().push((handle, Arc::new(observer)));
        handle
    }

    /// Returns false when the handle was not (or no longer) registered
    pub fn unsubscribe(&self, handle: SubscriptionHandle) -> bool {
        let mut observers = self.observers();
        let before = observers.len();
        observers.retain(|(h, _)| *h != handle);
        observers.len() != before
    }

    pub fn len(&self) -> usize {
        self.observers().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Call every observer registered at the time of the call
    pub fn notify(&self) {
        let snapshot: Vec<Observer> = self.observers().iter().map(|(_, o)| o.clone()).collect();
        for observer in snapshot {
            observer();
        }
    }
}
