//! Value change notification.
//!
//! ## Usage
//!
//! Attach an [`OnValueChanged`] to a [`DragController`](crate::DragController)
//! to hear about drag movements and commits.

use std::{fmt, sync::Arc};

use crate::thumb::ThumbId;

/// Emitted when a drag moves or releases a thumb.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueChanged {
    /// The thumb whose value changed.
    pub id: ThumbId,
    /// The thumb's value after the change.
    pub value: f32,
    /// `true` once the drag has ended and the value is final (snapped).
    pub committed: bool,
}

/// Shared value change handler.
///
/// Compares by identity (`Arc::ptr_eq`), so cloning keeps equality and two
/// handlers built from identical closures are still different.
#[derive(Clone)]
pub struct OnValueChanged {
    handler: Arc<dyn Fn(&ValueChanged) + Send + Sync>,
}

impl OnValueChanged {
    /// Creates a handler from a closure.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&ValueChanged) + Send + Sync + 'static,
    {
        Self {
            handler: Arc::new(handler),
        }
    }

    /// Invokes the handler.
    pub fn call(&self, event: &ValueChanged) {
        (self.handler)(event);
    }
}

impl<F> From<F> for OnValueChanged
where
    F: Fn(&ValueChanged) + Send + Sync + 'static,
{
    fn from(handler: F) -> Self {
        Self::new(handler)
    }
}

impl PartialEq for OnValueChanged {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.handler, &other.handler)
    }
}

impl Eq for OnValueChanged {}

impl fmt::Debug for OnValueChanged {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OnValueChanged").finish_non_exhaustive()
    }
}
