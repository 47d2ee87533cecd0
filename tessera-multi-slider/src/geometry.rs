//! Track geometry.
//!
//! Maps between a 1-D position along the slider track and a value in the
//! slider's domain. Positions are in whatever unit the host lays the track
//! out in (usually physical pixels); the perpendicular axis only matters for
//! hit testing.

/// Default side length of the square hit region around a thumb.
pub const DEFAULT_HIT_SIZE: f32 = 40.0;

/// Start and end of the track along its axis, as laid out by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackBounds {
    /// Position of the track's start (value `min`).
    pub start: f32,
    /// Position of the track's end (value `max`).
    pub end: f32,
}

impl TrackBounds {
    /// A unit track, `[0, 1]`.
    pub const UNIT: Self = Self::new(0.0, 1.0);

    /// Creates new track bounds.
    pub const fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    /// Length of the track along its axis.
    pub fn length(&self) -> f32 {
        self.end - self.start
    }

    /// Clamps a position onto the track.
    pub fn clamp(&self, position: f32) -> f32 {
        clamp_position(position, self.start, self.end)
    }
}

impl Default for TrackBounds {
    fn default() -> Self {
        Self::UNIT
    }
}

/// The value domain `[min, max]` of a slider.
///
/// `max > min` is expected but not enforced; see
/// [`SliderConfig::validate`](crate::SliderConfig::validate).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    /// Lowest value, mapped to the track start.
    pub min: f32,
    /// Highest value, mapped to the track end.
    pub max: f32,
}

impl ValueRange {
    /// The unit range, `[0, 1]`.
    pub const UNIT: Self = Self::new(0.0, 1.0);

    /// Creates a new value range.
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// `max - min`.
    pub fn span(&self) -> f32 {
        self.max - self.min
    }

    /// Clamps a value into the range.
    pub fn clamp(&self, value: f32) -> f32 {
        clamp_position(value, self.min, self.max)
    }

    /// Returns `true` when `max > min` and both bounds are finite.
    pub fn is_well_formed(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.max > self.min
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        Self::UNIT
    }
}

/// Maps a value to its position on the track.
///
/// The value is first normalized against `range`, then placed linearly
/// between the track bounds. Values outside `range` land outside the track.
pub fn value_to_position(value: f32, range: ValueRange, track: TrackBounds) -> f32 {
    let fraction = (value - range.min) / range.span();
    track.start + fraction * track.length()
}

/// Maps a track position back to a value.
///
/// Callers clamp `position` onto the track beforehand. A position exactly
/// at the track start yields `range.min`. Any other position yields
/// `fraction * (max - min)` without the `min` offset, so the result is only
/// the exact inverse of [`value_to_position`] when `range.min == 0`.
///
/// A zero-length track maps every position to `range.min`.
pub fn position_to_value(position: f32, range: ValueRange, track: TrackBounds) -> f32 {
    let length = track.length();
    if length == 0.0 {
        return range.min;
    }
    let fraction = (position - track.start) / length;
    if fraction == 0.0 {
        return range.min;
    }
    fraction * range.span()
}

/// Clamps `position` into `[lower, upper]`.
///
/// Unlike [`f32::clamp`] this never panics: when `lower > upper` the lower
/// bound wins.
pub fn clamp_position(position: f32, lower: f32, upper: f32) -> f32 {
    position.min(upper).max(lower)
}

/// A segment along the track axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    /// Segment start.
    pub start: f32,
    /// Segment end.
    pub end: f32,
}

impl Span {
    /// Length of the segment; negative if it runs backwards.
    pub fn length(&self) -> f32 {
        self.end - self.start
    }
}

/// Returns the filled subtrack for a thumb at `thumb_position`.
pub fn subtrack_span(track: TrackBounds, thumb_position: f32) -> Span {
    Span {
        start: track.start,
        end: thumb_position,
    }
}

/// A pointer location relative to the track.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPosition {
    /// Position along the track axis, in track units.
    pub along: f32,
    /// Offset from the track's center line on the perpendicular axis.
    pub across: f32,
}

impl PointerPosition {
    /// Creates a new pointer position.
    pub const fn new(along: f32, across: f32) -> Self {
        Self { along, across }
    }

    /// A pointer sitting on the track's center line.
    pub const fn on_track(along: f32) -> Self {
        Self { along, across: 0.0 }
    }
}

/// Square grab area centered on a thumb.
///
/// Usually larger than the drawn thumb so small handles stay easy to grab.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRegion {
    /// Side length of the square.
    pub size: f32,
}

impl HitRegion {
    /// Creates a hit region with the given side length.
    pub const fn new(size: f32) -> Self {
        Self { size }
    }

    /// Returns `true` when `pointer` falls inside the square centered on
    /// `thumb_position`. Edges are inclusive.
    pub fn contains(&self, thumb_position: f32, pointer: PointerPosition) -> bool {
        let half = self.size / 2.0;
        (pointer.along - thumb_position).abs() <= half && pointer.across.abs() <= half
    }
}

impl Default for HitRegion {
    fn default() -> Self {
        Self::new(DEFAULT_HIT_SIZE)
    }
}
