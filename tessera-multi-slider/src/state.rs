//! Shared slider handle.
//!
//! [`SliderModel`] is plain data for a single UI thread. Hosts that read or
//! mutate it from several threads wrap it in a [`SharedSlider`].

use std::sync::Arc;

use parking_lot::RwLock;

use crate::model::SliderModel;

/// Clonable, thread-safe handle to a [`SliderModel`].
#[derive(Debug)]
pub struct SharedSlider<S = ()> {
    inner: Arc<RwLock<SliderModel<S>>>,
}

impl<S> SharedSlider<S> {
    /// Wraps a model.
    pub fn new(model: SliderModel<S>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(model)),
        }
    }

    /// Runs `f` with shared access to the model.
    pub fn with<R>(&self, f: impl FnOnce(&SliderModel<S>) -> R) -> R {
        f(&self.inner.read())
    }

    /// Runs `f` with exclusive access to the model.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut SliderModel<S>) -> R) -> R {
        f(&mut self.inner.write())
    }

    /// Returns `true` if both handles point at the same model.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<S> Clone for SharedSlider<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S> Default for SharedSlider<S> {
    fn default() -> Self {
        Self::new(SliderModel::default())
    }
}

impl<S> From<SliderModel<S>> for SharedSlider<S> {
    fn from(model: SliderModel<S>) -> Self {
        Self::new(model)
    }
}
