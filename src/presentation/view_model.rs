//! Observable state holder shared by presenters and views

use std::sync::{PoisonError, RwLock};

use super::observer::{ObserverRegistry, SubscriptionHandle};

pub struct ViewModel<S> {
    name: &'static str,
    state: RwLock<S>,
    observers: ObserverRegistry,
}

impl<S: Clone + Default> ViewModel<S> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            state: RwLock::new(S::default()),
            observers: ObserverRegistry::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Copy of the current state
    pub fn state(&self) -> S {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Mutate the state, then tell every observer it changed.
    ///
    /// The state lock is released before observers run, so they can call `state()`.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut S),
    {
        {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            f(&mut state);
        }
        tracing::debug!(view = self.name, observers = self.observers.len(), "State changed");
        self.observers.notify();
    }

    pub fn subscribe<F>(&self, observer: F) -> SubscriptionHandle
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.observers.subscribe(observer)
    }

    pub fn unsubscribe(&self, handle: SubscriptionHandle) -> bool {
        self.observers.unsubscribe(handle)
    }
}
