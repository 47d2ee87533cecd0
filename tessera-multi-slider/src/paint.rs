//! Paint order derivation.
//!
//! Thumbs are stacked by ascending value: a higher value thumb paints above
//! a lower one, and every subtrack paints below every thumb handle. With `n`
//! thumbs, subtracks take ranks `0..n` and handles take ranks `n..2n`, both
//! in ascending value order. Equal values keep insertion order.

use smallvec::SmallVec;

use crate::thumb::{Thumb, ThumbId};

/// Z ranks assigned to one thumb and its subtrack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaintEntry {
    /// The thumb these ranks belong to.
    pub id: ThumbId,
    /// Rank of the filled subtrack; always below every thumb rank.
    pub subtrack_rank: usize,
    /// Rank of the thumb handle.
    pub thumb_rank: usize,
}

/// Thumbs in paint order, lowest value first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PaintOrder {
    entries: SmallVec<[PaintEntry; 4]>,
}

impl PaintOrder {
    /// Derives the paint order from thumbs given in insertion order.
    pub fn from_thumbs<'a, S: 'a>(thumbs: impl IntoIterator<Item = &'a Thumb<S>>) -> Self {
        let mut sorted: SmallVec<[&Thumb<S>; 4]> = thumbs.into_iter().collect();
        // `sort_by` is stable, ties keep insertion order.
        sorted.sort_by(|a, b| a.value.total_cmp(&b.value));

        let count = sorted.len();
        let entries = sorted
            .into_iter()
            .enumerate()
            .map(|(index, thumb)| PaintEntry {
                id: thumb.id.clone(),
                subtrack_rank: index,
                thumb_rank: count + index,
            })
            .collect();
        Self { entries }
    }

    /// Number of thumbs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no thumbs.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries from the bottom-most thumb to the top-most.
    pub fn iter(&self) -> std::slice::Iter<'_, PaintEntry> {
        self.entries.iter()
    }

    /// Ranks of one thumb.
    pub fn get(&self, id: &str) -> Option<&PaintEntry> {
        self.entries.iter().find(|entry| entry.id.as_str() == id)
    }

    /// Thumb ids from the bottom-most to the top-most.
    pub fn ids(&self) -> impl Iterator<Item = &ThumbId> {
        self.entries.iter().map(|entry| &entry.id)
    }
}

impl<'a> IntoIterator for &'a PaintOrder {
    type Item = &'a PaintEntry;
    type IntoIter = std::slice::Iter<'a, PaintEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
