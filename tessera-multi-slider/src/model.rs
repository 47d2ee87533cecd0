//! The slider value model.
//!
//! [`SliderModel`] owns the thumbs of one multi-thumb slider together with
//! its value domain, snap points and crossing policy. Every operation is
//! synchronous and misuse (unknown ids, a full slider) is a silent no-op
//! reported through `Option` results and `tracing` debug events.

use rustc_hash::FxHashMap;
use slotmap::{SlotMap, new_key_type};
use tracing::{debug, trace, warn};

use crate::{
    config::SliderConfig,
    geometry::{
        HitRegion, PointerPosition, Span, TrackBounds, ValueRange, clamp_position,
        position_to_value, subtrack_span, value_to_position,
    },
    nearest::nearest_value,
    paint::PaintOrder,
    thumb::{Thumb, ThumbId},
};

new_key_type! {
    struct ThumbKey;
}

/// Outcome of [`SliderModel::set_value`], for hosts that animate the thumb
/// from its old position to the new one.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueChange {
    /// The thumb that changed.
    pub id: ThumbId,
    /// Value before the change.
    pub previous_value: f32,
    /// Value after snapping.
    pub value: f32,
    /// Track position before the change.
    pub previous_position: f32,
    /// Track position after the change.
    pub position: f32,
    /// Host animation hint, passed through untouched.
    pub animated: bool,
}

/// Value and ordering model of a multi-thumb slider.
///
/// `S` is the per-thumb style hint type chosen by the host.
///
/// # Examples
///
/// ```
/// use tessera_multi_slider::{SliderModel, TrackBounds};
///
/// let mut slider = SliderModel::new();
/// slider.set_track(TrackBounds::new(14.0, 114.0));
/// slider.add_thumb_with_id("1", 0.2, ());
/// slider.add_thumb_with_id("2", 0.85, ());
///
/// slider.move_thumb("1", 64.0);
/// assert_eq!(slider.values()["1"], 0.5);
/// ```
#[derive(Debug, Clone)]
pub struct SliderModel<S = ()> {
    thumbs: SlotMap<ThumbKey, Thumb<S>>,
    index: FxHashMap<ThumbId, ThumbKey>,
    insertion: Vec<ThumbKey>,
    // Ascending by value; ties keep their previous relative order.
    value_order: Vec<ThumbKey>,
    range: ValueRange,
    track: TrackBounds,
    snaps: Vec<f32>,
    can_thumbs_cross: bool,
    max_thumbs: Option<usize>,
    is_continuous: bool,
    hit_region: HitRegion,
    paint_order: PaintOrder,
}

impl<S> Default for SliderModel<S> {
    fn default() -> Self {
        Self::with_config(SliderConfig::default())
    }
}

impl<S> SliderModel<S> {
    /// Creates an empty slider over `[0, 1]` on a unit track.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty slider from `config`.
    ///
    /// The configuration is taken as is; call [`SliderConfig::validate`]
    /// first when it comes from an untrusted source.
    pub fn with_config(config: SliderConfig) -> Self {
        let range = config.value_range();
        warn_if_malformed(range);
        let hit_region = config.hit_region();
        let mut snaps = config.snaps;
        sort_snaps(&mut snaps);
        Self {
            thumbs: SlotMap::with_key(),
            index: FxHashMap::default(),
            insertion: Vec::new(),
            value_order: Vec::new(),
            range,
            track: TrackBounds::default(),
            snaps,
            can_thumbs_cross: config.can_thumbs_cross,
            max_thumbs: config.max_thumbs,
            is_continuous: config.is_continuous,
            hit_region,
            paint_order: PaintOrder::default(),
        }
    }

    /// Snapshot of the current configuration.
    pub fn config(&self) -> SliderConfig {
        SliderConfig {
            min_value: self.range.min,
            max_value: self.range.max,
            snaps: self.snaps.clone(),
            can_thumbs_cross: self.can_thumbs_cross,
            max_thumbs: self.max_thumbs,
            is_continuous: self.is_continuous,
            hit_size: self.hit_region.size,
        }
    }

    // --- Configuration ---

    /// Lowest value of the domain.
    pub fn min_value(&self) -> f32 {
        self.range.min
    }

    /// Highest value of the domain.
    pub fn max_value(&self) -> f32 {
        self.range.max
    }

    /// The value domain.
    pub fn value_range(&self) -> ValueRange {
        self.range
    }

    /// Sets the lowest value of the domain.
    pub fn set_min_value(&mut self, min: f32) {
        self.set_value_range(ValueRange::new(min, self.range.max));
    }

    /// Sets the highest value of the domain.
    pub fn set_max_value(&mut self, max: f32) {
        self.set_value_range(ValueRange::new(self.range.min, max));
    }

    /// Replaces the value domain and re-derives thumb positions.
    ///
    /// A domain with `max <= min` is stored as given; the model's behaviour
    /// under it is unspecified.
    pub fn set_value_range(&mut self, range: ValueRange) {
        warn_if_malformed(range);
        self.range = range;
        self.relayout();
    }

    /// Current track layout.
    pub fn track(&self) -> TrackBounds {
        self.track
    }

    /// Updates the track layout and re-derives every thumb position from its
    /// value. Call whenever the host lays the control out again.
    pub fn set_track(&mut self, track: TrackBounds) {
        self.track = track;
        self.relayout();
    }

    /// Snap points, sorted ascending.
    pub fn snaps(&self) -> &[f32] {
        &self.snaps
    }

    /// Replaces the snap points. They are sorted; existing thumbs keep their
    /// values until their next commit or snapping `set_value`.
    pub fn set_snaps(&mut self, snaps: impl Into<Vec<f32>>) {
        let mut snaps = snaps.into();
        sort_snaps(&mut snaps);
        self.snaps = snaps;
    }

    /// Whether dragged thumbs may pass their neighbours.
    pub fn can_thumbs_cross(&self) -> bool {
        self.can_thumbs_cross
    }

    /// Sets the crossing policy.
    pub fn set_can_thumbs_cross(&mut self, can_cross: bool) {
        self.can_thumbs_cross = can_cross;
    }

    /// Maximum number of thumbs, if bounded.
    pub fn max_thumbs(&self) -> Option<usize> {
        self.max_thumbs
    }

    /// Sets the thumb capacity. Lowering it below the current count keeps
    /// the existing thumbs and only blocks further insertions.
    pub fn set_max_thumbs(&mut self, max_thumbs: Option<usize>) {
        self.max_thumbs = max_thumbs;
    }

    /// Whether hosts are notified on every drag movement.
    pub fn is_continuous(&self) -> bool {
        self.is_continuous
    }

    /// Sets continuous notification.
    pub fn set_continuous(&mut self, continuous: bool) {
        self.is_continuous = continuous;
    }

    /// Grab area used by [`thumb_at`](Self::thumb_at).
    pub fn hit_region(&self) -> HitRegion {
        self.hit_region
    }

    /// Sets the grab area.
    pub fn set_hit_region(&mut self, region: HitRegion) {
        self.hit_region = region;
    }

    // --- Thumbs ---

    /// Number of live thumbs.
    pub fn len(&self) -> usize {
        self.thumbs.len()
    }

    /// Returns `true` if the slider has no thumbs.
    pub fn is_empty(&self) -> bool {
        self.thumbs.is_empty()
    }

    /// Returns `true` if a thumb with `id` exists.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Looks up a thumb.
    pub fn thumb(&self, id: &str) -> Option<&Thumb<S>> {
        self.key(id).and_then(|key| self.thumbs.get(key))
    }

    /// Mutable access to a thumb's style hints.
    pub fn style_mut(&mut self, id: &str) -> Option<&mut S> {
        let key = self.key(id)?;
        self.thumbs.get_mut(key).map(Thumb::style_mut)
    }

    /// Thumbs in insertion order.
    pub fn thumbs(&self) -> impl Iterator<Item = &Thumb<S>> {
        self.insertion.iter().filter_map(|&key| self.thumbs.get(key))
    }

    /// Current value of every thumb.
    pub fn values(&self) -> FxHashMap<ThumbId, f32> {
        self.thumbs
            .values()
            .map(|thumb| (thumb.id.clone(), thumb.value))
            .collect()
    }

    /// Adds a thumb with a generated id.
    ///
    /// See [`add_thumb_with_id`](Self::add_thumb_with_id).
    pub fn add_thumb(&mut self, value: f32, style: S) -> Option<ThumbId> {
        self.insert(ThumbId::generate(), value, style)
    }

    /// Adds a thumb at `value` and returns its id.
    ///
    /// The value is clamped into the domain but not snapped. Nothing happens
    /// and `None` is returned when the slider is full or `id` is taken.
    pub fn add_thumb_with_id(
        &mut self,
        id: impl Into<ThumbId>,
        value: f32,
        style: S,
    ) -> Option<ThumbId> {
        self.insert(id.into(), value, style)
    }

    fn insert(&mut self, id: ThumbId, value: f32, style: S) -> Option<ThumbId> {
        if self
            .max_thumbs
            .is_some_and(|max_thumbs| self.thumbs.len() >= max_thumbs)
        {
            debug!(%id, max_thumbs = ?self.max_thumbs, "slider is full; thumb not added");
            return None;
        }
        if self.index.contains_key(&id) {
            debug!(%id, "thumb id already in use; thumb not added");
            return None;
        }

        let value = self.range.clamp(value);
        let position = value_to_position(value, self.range, self.track);
        let key = self
            .thumbs
            .insert(Thumb::new(id.clone(), value, position, style));
        self.index.insert(id.clone(), key);
        self.insertion.push(key);
        self.value_order.push(key);
        debug!(%id, value, "thumb added");

        self.reposition_layers();
        Some(id)
    }

    /// Removes a thumb and returns it. Unknown ids are ignored.
    pub fn remove_thumb(&mut self, id: &str) -> Option<Thumb<S>> {
        let Some(key) = self.index.remove(id) else {
            debug!(id, "remove_thumb: unknown thumb");
            return None;
        };
        self.insertion.retain(|&k| k != key);
        self.value_order.retain(|&k| k != key);
        let thumb = self.thumbs.remove(key);
        debug!(id, "thumb removed");

        self.reposition_layers();
        thumb
    }

    /// Sets a thumb's value.
    ///
    /// With `snapping` and at least one snap point the value is replaced by
    /// the nearest snap point. The result is clamped into the domain and the
    /// position re-derived from it. `animated` is a host hint carried in the
    /// returned [`ValueChange`].
    pub fn set_value(
        &mut self,
        id: &str,
        value: f32,
        snapping: bool,
        animated: bool,
    ) -> Option<ValueChange> {
        let Some(key) = self.key(id) else {
            debug!(id, "set_value: unknown thumb");
            return None;
        };

        let value = if snapping {
            nearest_value(&self.snaps, value).unwrap_or(value)
        } else {
            value
        };
        let value = self.range.clamp(value);
        let position = value_to_position(value, self.range, self.track);

        let thumb = &mut self.thumbs[key];
        let change = ValueChange {
            id: thumb.id.clone(),
            previous_value: thumb.value,
            value,
            previous_position: thumb.position,
            position,
            animated,
        };
        thumb.value = value;
        thumb.position = position;
        debug!(id, value, snapping, "thumb value set");

        self.reposition_layers();
        Some(change)
    }

    /// Moves a thumb to a raw pointer position along the track and returns
    /// its new, unsnapped value.
    ///
    /// The position is clamped onto the track. When thumbs may not cross it
    /// is further clamped between the positions of the nearest lower-valued
    /// and nearest higher-valued thumbs, so the thumb can reach but never
    /// pass a neighbour.
    pub fn move_thumb(&mut self, id: &str, raw_position: f32) -> Option<f32> {
        let Some(key) = self.key(id) else {
            debug!(id, "move_thumb: unknown thumb");
            return None;
        };

        let (position, value) = if self.can_thumbs_cross {
            let position = self.track.clamp(raw_position);
            (position, position_to_value(position, self.range, self.track))
        } else {
            let bounds = self.movement_bounds(key);
            let position = clamp_position(raw_position, bounds.lower, bounds.upper);
            let value = position_to_value(position, self.range, self.track);
            // Keep value order in step with position order despite rounding.
            (
                position,
                clamp_position(value, bounds.min_value, bounds.max_value),
            )
        };

        let thumb = &mut self.thumbs[key];
        thumb.position = position;
        thumb.value = value;
        trace!(id, raw_position, position, value, "thumb moved");

        self.reposition_layers();
        Some(value)
    }

    /// Ends a drag: snaps the thumb to the nearest snap point, if any, and
    /// returns its committed value.
    pub fn commit(&mut self, id: &str) -> Option<f32> {
        let Some(key) = self.key(id) else {
            debug!(id, "commit: unknown thumb");
            return None;
        };

        let thumb = &mut self.thumbs[key];
        let Some(snapped) = nearest_value(&self.snaps, thumb.value) else {
            return Some(thumb.value);
        };
        thumb.value = snapped;
        thumb.position = value_to_position(snapped, self.range, self.track);
        debug!(id, value = snapped, "thumb committed");

        self.reposition_layers();
        Some(snapped)
    }

    /// Filled subtrack of a thumb, from the track start to the thumb.
    pub fn subtrack(&self, id: &str) -> Option<Span> {
        self.thumb(id)
            .map(|thumb| subtrack_span(self.track, thumb.position))
    }

    /// Returns the top-most thumb whose hit region contains `pointer`.
    pub fn thumb_at(&self, pointer: PointerPosition) -> Option<&ThumbId> {
        self.paint_order
            .iter()
            .rev()
            .filter_map(|entry| self.thumb(entry.id.as_str()))
            .find(|thumb| self.hit_region.contains(thumb.position, pointer))
            .map(Thumb::id)
    }

    // --- Paint order ---

    /// Current paint order, lowest value first.
    pub fn paint_order(&self) -> &PaintOrder {
        &self.paint_order
    }

    /// Recomputes the paint order from the current values.
    pub fn reposition_layers(&mut self) -> &PaintOrder {
        let thumbs = &self.thumbs;
        self.value_order
            .sort_by(|&a, &b| thumbs[a].value.total_cmp(&thumbs[b].value));
        self.paint_order = PaintOrder::from_thumbs(
            self.insertion
                .iter()
                .filter_map(|&key| self.thumbs.get(key)),
        );
        &self.paint_order
    }

    // --- Internals ---

    fn key(&self, id: &str) -> Option<ThumbKey> {
        self.index.get(id).copied()
    }

    /// Track interval and value interval a thumb may move in when thumbs
    /// may not cross.
    ///
    /// Neighbours are the adjacent thumbs in value order. A neighbour with
    /// an equal value still blocks on the side it was on, so a thumb held
    /// against it cannot slip past on the next move.
    fn movement_bounds(&self, key: ThumbKey) -> MovementBounds {
        let mut bounds = MovementBounds {
            lower: self.track.start,
            upper: self.track.end,
            min_value: f32::NEG_INFINITY,
            max_value: f32::INFINITY,
        };
        let Some(index) = self.value_order.iter().position(|&k| k == key) else {
            return bounds;
        };

        if let Some(left) = index
            .checked_sub(1)
            .map(|i| &self.thumbs[self.value_order[i]])
        {
            bounds.lower = bounds.lower.max(left.position);
            bounds.min_value = left.value;
        }
        if let Some(right) = self.value_order.get(index + 1).map(|&k| &self.thumbs[k]) {
            bounds.upper = bounds.upper.min(right.position);
            bounds.max_value = right.value;
        }
        bounds
    }

    fn relayout(&mut self) {
        let (range, track) = (self.range, self.track);
        for thumb in self.thumbs.values_mut() {
            thumb.position = value_to_position(thumb.value, range, track);
        }
    }
}

fn sort_snaps(snaps: &mut [f32]) {
    snaps.sort_by(f32::total_cmp);
}

fn warn_if_malformed(range: ValueRange) {
    if !range.is_well_formed() {
        warn!(
            min = range.min,
            max = range.max,
            "slider value range is malformed; behaviour is unspecified"
        );
    }
}

struct MovementBounds {
    lower: f32,
    upper: f32,
    min_value: f32,
    max_value: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    /// Two thumbs on a 128 px wide control with 28 px thumbs.
    fn two_thumbs() -> SliderModel {
        let mut slider = SliderModel::new();
        slider.set_track(TrackBounds::new(14.0, 114.0));
        slider.add_thumb_with_id("1", 0.2, ());
        slider.add_thumb_with_id("2", 0.85, ());
        slider
    }

    #[test]
    fn test_thumb_positions_follow_values() {
        let slider = two_thumbs();
        assert!(approx_eq(slider.thumb("1").unwrap().position(), 34.0));
        assert!(approx_eq(slider.thumb("2").unwrap().position(), 99.0));
    }

    #[test]
    fn test_add_thumb() {
        let mut slider = two_thumbs();
        let id = slider.add_thumb_with_id("3", 1.0, ());
        assert_eq!(id, Some(ThumbId::from("3")));
        assert_eq!(slider.len(), 3);
        assert!(slider.contains("3"));
    }

    #[test]
    fn test_add_thumb_generates_id() {
        let mut slider = SliderModel::new();
        let id = slider.add_thumb(0.3, ()).unwrap();
        assert_eq!(slider.thumb(id.as_str()).unwrap().value(), 0.3);
    }

    #[test]
    fn test_add_thumb_respects_capacity() {
        let mut slider = two_thumbs();
        slider.set_max_thumbs(Some(2));
        assert_eq!(slider.add_thumb_with_id("3", 0.5, ()), None);
        assert_eq!(slider.len(), 2);
        assert!(!slider.contains("3"));

        slider.set_max_thumbs(None);
        assert!(slider.add_thumb_with_id("3", 0.5, ()).is_some());
    }

    #[test]
    fn test_add_thumb_rejects_duplicate_id() {
        let mut slider = two_thumbs();
        assert_eq!(slider.add_thumb_with_id("1", 0.9, ()), None);
        assert_eq!(slider.len(), 2);
        assert_eq!(slider.thumb("1").unwrap().value(), 0.2);
    }

    #[test]
    fn test_add_thumb_does_not_snap() {
        let mut slider = SliderModel::with_config(SliderConfig::default().snaps(vec![0.0, 1.0]));
        slider.add_thumb_with_id("a", 0.3, ());
        assert_eq!(slider.thumb("a").unwrap().value(), 0.3);
    }

    #[test]
    fn test_add_thumb_clamps_into_domain() {
        let mut slider = SliderModel::new();
        slider.add_thumb_with_id("low", -0.5, ());
        slider.add_thumb_with_id("high", 1.5, ());
        assert_eq!(slider.thumb("low").unwrap().value(), 0.0);
        assert_eq!(slider.thumb("high").unwrap().value(), 1.0);
    }

    #[test]
    fn test_remove_thumb() {
        let mut slider = two_thumbs();
        let removed = slider.remove_thumb("2").unwrap();
        assert_eq!(removed.id().as_str(), "2");
        assert_eq!(slider.len(), 1);
        assert!(!slider.values().contains_key("2"));
        assert_eq!(slider.thumbs().next().unwrap().id().as_str(), "1");
        assert_eq!(slider.paint_order().len(), 1);
    }

    #[test]
    fn test_remove_unknown_thumb_is_noop() {
        let mut slider = two_thumbs();
        assert!(slider.remove_thumb("nope").is_none());
        assert_eq!(slider.len(), 2);
    }

    #[test]
    fn test_removed_id_can_be_reused() {
        let mut slider = two_thumbs();
        slider.remove_thumb("1");
        assert!(slider.add_thumb_with_id("1", 0.4, ()).is_some());
        assert_eq!(slider.thumb("1").unwrap().value(), 0.4);
    }

    #[test]
    fn test_set_value() {
        let mut slider = two_thumbs();
        let change = slider.set_value("1", 0.5, true, false).unwrap();
        assert_eq!(change.previous_value, 0.2);
        assert_eq!(change.value, 0.5);
        assert!(approx_eq(change.position, 64.0));
        assert!(approx_eq(slider.thumb("1").unwrap().position() - 14.0, 50.0));
    }

    #[test]
    fn test_set_value_snaps_to_lower_on_tie() {
        let mut slider = two_thumbs();
        slider.set_snaps(vec![0.45, 0.55, 1.0]);
        let change = slider.set_value("1", 0.5, true, true).unwrap();
        assert_eq!(change.value, 0.45);
        assert!(change.animated);
        assert!(approx_eq(slider.thumb("1").unwrap().position() - 14.0, 45.0));
    }

    #[test]
    fn test_set_value_without_snapping() {
        let mut slider = two_thumbs();
        slider.set_snaps(vec![0.45, 0.55, 1.0]);
        slider.set_value("1", 0.5, false, false);
        assert_eq!(slider.values()["1"], 0.5);
    }

    #[test]
    fn test_set_value_unknown_thumb() {
        let mut slider = two_thumbs();
        assert!(slider.set_value("9", 0.5, true, false).is_none());
        assert_eq!(slider.values().len(), 2);
    }

    #[test]
    fn test_snaps_are_sorted() {
        let mut slider = SliderModel::<()>::new();
        slider.set_snaps(vec![1.0, 0.2, 0.55, 0.0]);
        assert_eq!(slider.snaps(), &[0.0, 0.2, 0.55, 1.0]);

        let slider = SliderModel::<()>::with_config(SliderConfig::default().snaps(vec![0.9, 0.1]));
        assert_eq!(slider.snaps(), &[0.1, 0.9]);
    }

    #[test]
    fn test_paint_order_two_thumbs() {
        let slider = two_thumbs();
        let order = slider.paint_order();
        let first = order.get("1").unwrap();
        let second = order.get("2").unwrap();
        assert_eq!((first.subtrack_rank, first.thumb_rank), (0, 2));
        assert_eq!((second.subtrack_rank, second.thumb_rank), (1, 3));
    }

    #[test]
    fn test_paint_order_after_insert() {
        let mut slider = two_thumbs();
        slider.add_thumb_with_id("3", 0.6, ());
        let order = slider.reposition_layers();
        let ids: Vec<&str> = order.ids().map(ThumbId::as_str).collect();
        assert_eq!(ids, ["1", "3", "2"]);
        assert_eq!(order.get("1").unwrap().thumb_rank, 3);
        assert_eq!(order.get("3").unwrap().thumb_rank, 4);
        assert_eq!(order.get("2").unwrap().thumb_rank, 5);
        assert_eq!(order.get("3").unwrap().subtrack_rank, 1);
    }

    #[test]
    fn test_paint_order_follows_moves() {
        let mut slider = two_thumbs();
        slider.move_thumb("1", 110.0);
        let ids: Vec<&str> = slider.paint_order().ids().map(ThumbId::as_str).collect();
        assert_eq!(ids, ["2", "1"]);
    }

    #[test]
    fn test_move_thumb_clamps_to_track() {
        let mut slider = two_thumbs();
        assert_eq!(slider.move_thumb("1", -40.0), Some(0.0));
        assert_eq!(slider.thumb("1").unwrap().position(), 14.0);
        assert_eq!(slider.move_thumb("1", 500.0), Some(1.0));
        assert_eq!(slider.thumb("1").unwrap().position(), 114.0);
    }

    #[test]
    fn test_move_thumb_crossing_allowed() {
        let mut slider = two_thumbs();
        let value = slider.move_thumb("1", 104.0).unwrap();
        assert!(approx_eq(value, 0.9));
        assert!(slider.values()["1"] > slider.values()["2"]);
    }

    #[test]
    fn test_move_thumb_stops_at_right_neighbour() {
        let mut slider = two_thumbs();
        slider.set_can_thumbs_cross(false);
        slider.move_thumb("1", 110.0);
        let thumb = slider.thumb("1").unwrap();
        assert!(approx_eq(thumb.position(), 99.0));
        assert!(approx_eq(thumb.value(), 0.85));
    }

    #[test]
    fn test_move_thumb_stops_at_left_neighbour() {
        let mut slider = two_thumbs();
        slider.set_can_thumbs_cross(false);
        slider.move_thumb("2", 0.0);
        assert!(approx_eq(slider.thumb("2").unwrap().position(), 34.0));
    }

    #[test]
    fn test_move_thumb_between_neighbours() {
        let mut slider = two_thumbs();
        slider.set_can_thumbs_cross(false);
        slider.add_thumb_with_id("3", 0.6, ());

        slider.move_thumb("3", 200.0);
        assert!(approx_eq(slider.thumb("3").unwrap().position(), 99.0));
        slider.move_thumb("3", -200.0);
        assert!(approx_eq(slider.thumb("3").unwrap().position(), 34.0));
        slider.move_thumb("3", 50.0);
        assert!(approx_eq(slider.thumb("3").unwrap().position(), 50.0));
    }

    #[test]
    fn test_thumb_held_at_neighbour_does_not_slip_past() {
        let mut slider = two_thumbs();
        slider.set_can_thumbs_cross(false);
        slider.move_thumb("2", 20.0);
        assert!(approx_eq(slider.values()["2"], slider.values()["1"]));

        slider.move_thumb("2", 0.0);
        assert!(approx_eq(slider.thumb("2").unwrap().position(), 34.0));
        slider.move_thumb("2", 80.0);
        assert!(approx_eq(slider.thumb("2").unwrap().position(), 80.0));
    }

    #[test]
    fn test_clamped_thumb_never_passes_close_neighbour() {
        let tracks = [
            TrackBounds::new(14.0, 114.0),
            TrackBounds::new(0.0, 300.0),
            TrackBounds::new(7.5, 333.3),
            TrackBounds::new(22.0, 1022.0),
        ];
        for track in tracks {
            for step in 1..1000 {
                let right = step as f32 / 1000.0;
                let mut slider = SliderModel::new();
                slider.set_track(track);
                slider.set_can_thumbs_cross(false);
                slider.add_thumb_with_id("l", 0.0, ());
                slider.add_thumb_with_id("r", right, ());

                slider.move_thumb("l", track.end + 10.0);
                let values = slider.values();
                assert!(values["l"] <= values["r"], "l passed r at {right}");

                slider.move_thumb("l", track.end);
                let l = slider.thumb("l").unwrap();
                let r = slider.thumb("r").unwrap();
                assert!(l.position() <= r.position(), "l slipped past r at {right}");
                assert!(l.value() <= r.value());
            }
        }
    }

    #[test]
    fn test_equal_values_block_in_insertion_order() {
        let mut slider = SliderModel::new();
        slider.set_can_thumbs_cross(false);
        slider.add_thumb_with_id("a", 0.5, ());
        slider.add_thumb_with_id("b", 0.5, ());
        assert_eq!(slider.move_thumb("a", 0.9), Some(0.5));
        assert_eq!(slider.move_thumb("b", 0.1), Some(0.5));
        assert_eq!(slider.move_thumb("b", 0.9), Some(0.9));
    }

    #[test]
    fn test_move_single_thumb_without_crossing_uses_track() {
        let mut slider = SliderModel::new();
        slider.set_can_thumbs_cross(false);
        slider.add_thumb_with_id("solo", 0.5, ());
        assert_eq!(slider.move_thumb("solo", 2.0), Some(1.0));
        assert_eq!(slider.move_thumb("solo", -2.0), Some(0.0));
    }

    #[test]
    fn test_move_does_not_snap_until_commit() {
        let mut slider = two_thumbs();
        slider.set_snaps(vec![0.0, 0.5, 1.0]);
        let moved = slider.move_thumb("1", 54.0).unwrap();
        assert!(approx_eq(moved, 0.4));
        assert_eq!(slider.commit("1"), Some(0.5));
        assert!(approx_eq(slider.thumb("1").unwrap().position(), 64.0));
    }

    #[test]
    fn test_commit_without_snaps_keeps_value() {
        let mut slider = two_thumbs();
        slider.move_thumb("1", 54.0);
        let committed = slider.commit("1").unwrap();
        assert!(approx_eq(committed, 0.4));
        assert_eq!(slider.commit("unknown"), None);
    }

    #[test]
    fn test_move_unknown_thumb() {
        let mut slider = two_thumbs();
        assert_eq!(slider.move_thumb("x", 40.0), None);
    }

    #[test]
    fn test_set_track_relayouts_thumbs() {
        let mut slider = two_thumbs();
        slider.set_track(TrackBounds::new(0.0, 200.0));
        assert!(approx_eq(slider.thumb("1").unwrap().position(), 40.0));
        assert!(approx_eq(slider.thumb("2").unwrap().position(), 170.0));
        assert_eq!(slider.values()["1"], 0.2);
    }

    #[test]
    fn test_custom_domain_positions() {
        let mut slider = SliderModel::with_config(
            SliderConfig::default().min_value(0.0).max_value(10.0),
        );
        slider.set_track(TrackBounds::new(0.0, 100.0));
        slider.add_thumb_with_id("a", 2.5, ());
        assert_eq!(slider.thumb("a").unwrap().position(), 25.0);
        assert!(approx_eq(slider.move_thumb("a", 60.0).unwrap(), 6.0));
    }

    #[test]
    fn test_subtrack() {
        let slider = two_thumbs();
        let span = slider.subtrack("1").unwrap();
        assert_eq!(span.start, 14.0);
        assert!(approx_eq(span.end, 34.0));
        assert!(slider.subtrack("x").is_none());
    }

    #[test]
    fn test_thumb_at_prefers_top_most() {
        let mut slider = two_thumbs();
        slider.set_value("1", 0.8, false, false);
        // Both hit regions cover x = 97; thumb "2" paints on top.
        let hit = slider.thumb_at(PointerPosition::on_track(97.0));
        assert_eq!(hit.map(ThumbId::as_str), Some("2"));
        let hit = slider.thumb_at(PointerPosition::on_track(75.0));
        assert_eq!(hit.map(ThumbId::as_str), Some("1"));
        assert!(slider.thumb_at(PointerPosition::on_track(30.0)).is_none());
        assert!(slider.thumb_at(PointerPosition::new(97.0, 25.0)).is_none());
    }

    #[test]
    fn test_style_hints() {
        let mut slider = SliderModel::<&str>::new();
        slider.add_thumb_with_id("a", 0.1, "red");
        assert_eq!(*slider.thumb("a").unwrap().style(), "red");
        *slider.style_mut("a").unwrap() = "green";
        assert_eq!(*slider.thumb("a").unwrap().style(), "green");
        assert!(slider.style_mut("b").is_none());
    }

    #[test]
    fn test_hit_size_from_config() {
        let config = SliderConfig::default().hit_size(10.0);
        let mut slider = SliderModel::with_config(config);
        slider.set_track(TrackBounds::new(14.0, 114.0));
        slider.add_thumb_with_id("1", 0.2, ());
        assert_eq!(slider.hit_region(), HitRegion::new(10.0));
        assert_eq!(
            slider.thumb_at(PointerPosition::new(38.0, 0.0)).map(ThumbId::as_str),
            Some("1")
        );
        assert_eq!(slider.thumb_at(PointerPosition::new(44.0, 0.0)), None);
    }

    #[test]
    fn test_config_round_trip() {
        let config = SliderConfig::default()
            .snaps(vec![0.25, 0.75])
            .can_thumbs_cross(false)
            .max_thumbs(4)
            .is_continuous(true);
        let slider = SliderModel::<()>::with_config(config.clone());
        assert_eq!(slider.config(), config);
    }
}
