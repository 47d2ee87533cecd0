//! Nearest snap point search.
//!
//! ## Usage
//!
//! Resolve a free value to the closest entry of a sorted snap list.

/// Returns the candidate closest to `value`.
///
/// `candidates` must be sorted ascending. When two neighbouring candidates
/// are equally distant the lower one wins. An empty slice yields `None`.
///
/// Unsorted input is not detected; the result is then unspecified.
///
/// # Examples
///
/// ```
/// use tessera_multi_slider::nearest_value;
///
/// let snaps = [0.45, 0.55, 1.0];
/// assert_eq!(nearest_value(&snaps, 0.5), Some(0.45));
/// assert_eq!(nearest_value(&snaps, 0.9), Some(1.0));
/// assert_eq!(nearest_value(&[], 0.9), None);
/// ```
pub fn nearest_value(candidates: &[f32], value: f32) -> Option<f32> {
    if candidates.is_empty() {
        return None;
    }
    Some(search(candidates, value, 0, candidates.len()))
}

// `upper` is one past the range, but it is still compared once the range
// collapses, so it is clamped to the last index there.
fn search(candidates: &[f32], value: f32, lower: usize, upper: usize) -> f32 {
    let mid = lower + (upper - lower) / 2;

    if mid == lower {
        let left = candidates[lower];
        let right = candidates[upper.min(candidates.len() - 1)];
        return if (value - left).abs() <= (value - right).abs() {
            left
        } else {
            right
        };
    }

    let pivot = candidates[mid];
    if value < pivot {
        search(candidates, value, lower, mid)
    } else if value > pivot {
        search(candidates, value, mid, upper)
    } else {
        pivot
    }
}
