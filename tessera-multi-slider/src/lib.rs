//! Headless model for multi-thumb range sliders.
//!
//! A slider has a track with one or more thumbs, each holding a value in
//! `[min, max]`. This crate keeps the values, maps them to and from track
//! positions, snaps thumbs to fixed points, keeps thumbs from crossing when
//! asked to, and derives the paint order the host stacks its visuals in.
//! Drawing, pointer decoding and animation stay with the host.
//!
//! # Usage
//!
//! ```
//! use tessera_multi_slider::{
//!     DragController, PointerPosition, SliderConfig, SliderModel, TrackBounds,
//! };
//!
//! let mut slider = SliderModel::with_config(
//!     SliderConfig::default()
//!         .snaps(vec![0.0, 0.25, 0.5, 0.75, 1.0])
//!         .can_thumbs_cross(false),
//! );
//! // The host lays the track out from x = 14 to x = 114.
//! slider.set_track(TrackBounds::new(14.0, 114.0));
//! slider.add_thumb_with_id("low", 0.2, ());
//! slider.add_thumb_with_id("high", 0.85, ());
//!
//! let mut drag = DragController::new();
//! drag.begin(&slider, PointerPosition::on_track(34.0));
//! drag.update(&mut slider, 70.0);
//! assert_eq!(drag.end(&mut slider), Some(0.5));
//!
//! let order: Vec<&str> = slider.paint_order().ids().map(|id| id.as_str()).collect();
//! assert_eq!(order, ["low", "high"]);
//! ```
//!
//! # Threading
//!
//! All operations are synchronous. [`SliderModel`] does no locking; use
//! [`SharedSlider`] when more than one thread touches it.

mod callback;
mod config;
mod drag;
mod error;
mod geometry;
mod model;
mod nearest;
mod paint;
mod state;
mod thumb;

pub use callback::{OnValueChanged, ValueChanged};
pub use config::SliderConfig;
pub use drag::{DragController, DragPhase};
pub use error::ConfigError;
pub use geometry::{
    DEFAULT_HIT_SIZE, HitRegion, PointerPosition, Span, TrackBounds, ValueRange, clamp_position,
    position_to_value, subtrack_span, value_to_position,
};
pub use model::{SliderModel, ValueChange};
pub use nearest::nearest_value;
pub use paint::{PaintEntry, PaintOrder};
pub use state::SharedSlider;
pub use thumb::{Thumb, ThumbId};
