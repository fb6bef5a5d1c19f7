//! Fixed-size slice planning over the candidate range.

use std::ops::Range;

/// The set of work slices covering `[0, slice_count * slice_size)`.
///
/// Candidates beyond the last full slice (`total mod slice_size` of them)
/// are not covered; the search drops them by design rather than dispatching
/// a trailing undersized slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlicePlan {
    slice_size: usize,
    slice_count: usize,
}

impl SlicePlan {
    /// `slice_size` must be non-zero; `SearchConfig` validation guarantees
    /// this before a plan is ever built.
    pub fn new(total: usize, slice_size: usize) -> Self {
        debug_assert!(slice_size > 0);
        Self {
            slice_size,
            slice_count: total / slice_size,
        }
    }

    pub fn slice_count(&self) -> usize {
        self.slice_count
    }

    /// Number of candidates covered by full slices.
    pub fn covered(&self) -> usize {
        self.slice_count * self.slice_size
    }

    /// Slice bounds in dispatch order: highest index first, matching the
    /// original dispatch loop. Order has no effect on the sorted output.
    pub fn bounds(&self) -> impl Iterator<Item = Range<usize>> {
        let size = self.slice_size;
        (0..self.slice_count).rev().map(move |index| {
            let start = index * size;
            start..start + size
        })
    }
}
