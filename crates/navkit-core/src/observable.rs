//! # Published State
//!
//! [`Published<T>`] is the observable container behind every piece of
//! navigation state the rendering layer binds to. Each mutation notifies all
//! observers synchronously with the new value.
//!
//! ## Locking
//!
//! The value lock is released before observers run, so an observer may read
//! or mutate the same container (or any router) without deadlocking.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::identity::SubscriptionId;

/// Callback invoked with the new value after every mutation.
pub type Observer<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// A value whose mutations are broadcast to subscribers.
pub struct Published<T> {
    value: RwLock<T>,
    observers: RwLock<Vec<(SubscriptionId, Observer<T>)>>,
    next_id: AtomicU64,
}

impl<T: Clone> Published<T> {
    /// Wrap an initial value. The initial value is not broadcast.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
            observers: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(0),
        }
    }

    /// Clone of the current value.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Borrow the current value without cloning.
    pub fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.value.read())
    }

    /// Replace the value and notify.
    pub fn set(&self, value: T) {
        self.update(|current| *current = value);
    }

    /// Mutate in place and notify.
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let (result, snapshot) = {
            let mut guard = self.value.write();
            let result = f(&mut guard);
            (result, self.snapshot_for_observers(&guard))
        };
        if let Some(snapshot) = snapshot {
            self.notify(&snapshot);
        }
        result
    }

    /// Mutate in place; notify only when `f` returns `Some`.
    ///
    /// `f` must leave the value untouched when it returns `None`.
    pub fn try_update<R>(&self, f: impl FnOnce(&mut T) -> Option<R>) -> Option<R> {
        let (result, snapshot) = {
            let mut guard = self.value.write();
            match f(&mut guard) {
                Some(result) => (result, self.snapshot_for_observers(&guard)),
                None => return None,
            }
        };
        if let Some(snapshot) = snapshot {
            self.notify(&snapshot);
        }
        Some(result)
    }

    /// Register an observer. It is not called with the current value.
    pub fn subscribe(&self, observer: impl Fn(&T) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.observers.write().push((id, Arc::new(observer)));
        id
    }

    /// Remove an observer. Returns whether it was registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut observers = self.observers.write();
        let before = observers.len();
        observers.retain(|(sid, _)| *sid != id);
        observers.len() != before
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.read().len()
    }

    /// Clone `value` only when someone will receive it.
    fn snapshot_for_observers(&self, value: &T) -> Option<T> {
        if self.observers.read().is_empty() {
            None
        } else {
            Some(value.clone())
        }
    }

    fn notify(&self, value: &T) {
        let observers: Vec<Observer<T>> = self
            .observers
            .read()
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect();
        for observer in observers {
            observer(value);
        }
    }
}

impl<T: Clone + Default> Default for Published<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Published<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Published")
            .field("value", &*self.value.read())
            .field("observers", &self.observers.read().len())
            .finish()
    }
}
