//! Identity-compared callback handles for state subscribers.
//!
//! ## Usage
//!
//! Register a [`CallbackWith`] through the controller's `subscribe` /
//! `on_mode_changed` hooks; handles compare by identity (`Arc::ptr_eq`) so
//! they stay cheap to clone and compare without deep closure comparison.

use std::sync::Arc;

/// Stable, comparable slot handle for a shared callable trait object.
struct Slot<F: ?Sized> {
    inner: Arc<F>,
}

impl<F: ?Sized> Slot<F> {
    fn from_shared(handler: Arc<F>) -> Self {
        Self { inner: handler }
    }

    fn shared(&self) -> Arc<F> {
        Arc::clone(&self.inner)
    }
}

impl<F: ?Sized> Clone for Slot<F> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<F: ?Sized> PartialEq for Slot<F> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<F: ?Sized> Eq for Slot<F> {}

/// Stable, comparable callback handle for `Fn(&T)`.
///
/// The payload is passed by reference: subscribers observe a snapshot
/// without forcing an extra clone per listener.
pub struct CallbackWith<T> {
    slot: Slot<dyn Fn(&T) + Send + Sync>,
}

impl<T> CallbackWith<T> {
    /// Create a callback handle from a closure.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        Self {
            slot: Slot::from_shared(Arc::new(handler)),
        }
    }

    /// Invoke the callback with a borrowed payload.
    pub fn call(&self, value: &T) {
        let handler = self.slot.shared();
        handler(value);
    }
}

impl<T, F> From<F> for CallbackWith<T>
where
    F: Fn(&T) + Send + Sync + 'static,
{
    fn from(handler: F) -> Self {
        Self::new(handler)
    }
}

impl<T> Clone for CallbackWith<T> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
        }
    }
}

impl<T> std::fmt::Debug for CallbackWith<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackWith").finish_non_exhaustive()
    }
}

impl<T> PartialEq for CallbackWith<T> {
    fn eq(&self, other: &Self) -> bool {
        self.slot == other.slot
    }
}

impl<T> Eq for CallbackWith<T> {}
