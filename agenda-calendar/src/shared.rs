//! Shared handle for host-owned engine state.
//!
//! ## Usage
//!
//! Hosts keep the controller in a [`Shared`] handle and access it with
//! `with`/`with_mut` from event handlers; clones refer to the same value.

use std::sync::Arc;

use parking_lot::RwLock;

/// Cloneable shared handle around a value.
#[derive(Debug)]
pub struct Shared<T> {
    inner: Arc<RwLock<T>>,
}

impl<T> Shared<T> {
    /// Wraps a value in a new shared handle.
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
        }
    }

    /// Reads the value through a closure.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.read())
    }

    /// Mutates the value through a closure.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.inner.write())
    }
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> PartialEq for Shared<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T> Eq for Shared<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_the_value() {
        let a = Shared::new(1);
        let b = a.clone();
        b.with_mut(|value| *value += 1);
        assert_eq!(a.with(|value| *value), 2);
        assert_eq!(a, b);
        assert_ne!(a, Shared::new(2));
    }
}
