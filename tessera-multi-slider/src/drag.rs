//! Drag gesture handling.
//!
//! The host decodes its own pointer events and forwards them here. A drag
//! goes `Idle -> Dragging -> Idle`: it starts when the pointer lands in a
//! thumb's hit region, moves that thumb without snapping while the pointer
//! moves, and snaps it once on release. Cancelling leaves the thumb where
//! the last movement put it.

use tracing::debug;

use crate::{
    callback::{OnValueChanged, ValueChanged},
    geometry::PointerPosition,
    model::SliderModel,
    thumb::ThumbId,
};

/// Phase of the drag gesture.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragPhase {
    /// No thumb is captured.
    #[default]
    Idle,
    /// The given thumb follows the pointer.
    Dragging(ThumbId),
}

/// Drives a [`SliderModel`] from pointer gestures.
///
/// Change notifications go to the optional [`OnValueChanged`] handler: on
/// every movement when the slider is continuous, and always on release.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    phase: DragPhase,
    on_change: Option<OnValueChanged>,
}

impl DragController {
    /// Creates an idle controller without a change handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the change handler.
    pub fn on_change(mut self, on_change: impl Into<OnValueChanged>) -> Self {
        self.on_change = Some(on_change.into());
        self
    }

    /// Current phase.
    pub fn phase(&self) -> &DragPhase {
        &self.phase
    }

    /// Returns whether a thumb is being dragged.
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging(_))
    }

    /// The captured thumb, if any.
    pub fn dragged_thumb(&self) -> Option<&ThumbId> {
        match &self.phase {
            DragPhase::Dragging(id) => Some(id),
            DragPhase::Idle => None,
        }
    }

    /// Starts a drag at `pointer`, capturing the top-most thumb under it.
    ///
    /// Returns the captured thumb. A press that misses every thumb leaves
    /// the controller idle, dropping any previous capture.
    pub fn begin<S>(&mut self, model: &SliderModel<S>, pointer: PointerPosition) -> Option<ThumbId> {
        match model.thumb_at(pointer) {
            Some(id) => {
                debug!(%id, "drag started");
                self.phase = DragPhase::Dragging(id.clone());
                Some(id.clone())
            }
            None => {
                self.phase = DragPhase::Idle;
                None
            }
        }
    }

    /// Moves the captured thumb to `along` and returns its unsnapped value.
    ///
    /// Does nothing while idle. If the thumb was removed mid-drag the
    /// controller falls back to idle.
    pub fn update<S>(&mut self, model: &mut SliderModel<S>, along: f32) -> Option<f32> {
        let DragPhase::Dragging(id) = &self.phase else {
            return None;
        };
        let Some(value) = model.move_thumb(id.as_str(), along) else {
            debug!(%id, "dragged thumb disappeared");
            self.phase = DragPhase::Idle;
            return None;
        };
        if model.is_continuous() {
            self.notify(ValueChanged {
                id: id.clone(),
                value,
                committed: false,
            });
        }
        Some(value)
    }

    /// Releases the captured thumb, snapping it, and returns its committed
    /// value.
    pub fn end<S>(&mut self, model: &mut SliderModel<S>) -> Option<f32> {
        let DragPhase::Dragging(id) = std::mem::take(&mut self.phase) else {
            return None;
        };
        let value = model.commit(id.as_str())?;
        debug!(%id, value, "drag ended");
        self.notify(ValueChanged {
            id,
            value,
            committed: true,
        });
        Some(value)
    }

    /// Abandons the drag without snapping or notifying. The thumb keeps its
    /// last moved value. Returns the thumb that was captured.
    pub fn cancel(&mut self) -> Option<ThumbId> {
        match std::mem::take(&mut self.phase) {
            DragPhase::Dragging(id) => {
                debug!(%id, "drag cancelled");
                Some(id)
            }
            DragPhase::Idle => None,
        }
    }

    fn notify(&self, event: ValueChanged) {
        if let Some(on_change) = &self.on_change {
            on_change.call(&event);
        }
    }
}
