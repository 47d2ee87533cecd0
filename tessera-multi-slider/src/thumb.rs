//! Thumb identity and per-thumb state.

use std::{borrow::Borrow, fmt};

use uuid::Uuid;

/// Stable identifier of a thumb.
///
/// Supplied by the host or generated on insertion. Unique among the live
/// thumbs of one slider and never changed by moves.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ThumbId(String);

impl ThumbId {
    /// Wraps an existing identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ThumbId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ThumbId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ThumbId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ThumbId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ThumbId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A single draggable marker on the track.
///
/// `position` is derived from `value` and the current track layout, except
/// during a drag where the value is derived from the pointer position
/// instead. `S` carries host style hints (colors, shapes...) that the model
/// stores but never reads.
#[derive(Debug, Clone, PartialEq)]
pub struct Thumb<S = ()> {
    pub(crate) id: ThumbId,
    pub(crate) value: f32,
    pub(crate) position: f32,
    pub(crate) style: S,
}

impl<S> Thumb<S> {
    pub(crate) fn new(id: ThumbId, value: f32, position: f32, style: S) -> Self {
        Self {
            id,
            value,
            position,
            style,
        }
    }

    /// The thumb's identifier.
    pub fn id(&self) -> &ThumbId {
        &self.id
    }

    /// Current semantic value.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Current position along the track.
    pub fn position(&self) -> f32 {
        self.position
    }

    /// Host style hints.
    pub fn style(&self) -> &S {
        &self.style
    }

    /// Mutable access to the host style hints.
    pub fn style_mut(&mut self) -> &mut S {
        &mut self.style
    }
}
