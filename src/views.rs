//! Borrowed views over the live region: batches and sliding windows.
//!
//! Views alias the source storage; no element is copied. The shared borrow
//! they hold keeps the source immutable for as long as any view is alive.

use crate::sequence::Sequence;

impl<T> Sequence<T> {
    /// Partition the live region into consecutive, non-overlapping slices of
    /// length `size`; the last batch holds the remainder and may be shorter.
    /// An empty sequence yields no batches. The batch count is
    /// `ceil(len / size)`.
    ///
    /// # Panics
    ///
    /// Panics if `size == 0`.
    pub fn batches(&self, size: usize) -> Vec<&[T]> {
        assert!(size > 0, "batch size must be at least 1");
        self.as_slice().chunks(size).collect()
    }

    /// Every contiguous window of exactly `size` elements, in order of
    /// starting offset. When `0 < len <= size` the single window is the
    /// whole live region; an empty sequence yields no windows.
    ///
    /// # Panics
    ///
    /// Panics if `size == 0`.
    pub fn sliding_windows(&self, size: usize) -> Vec<&[T]> {
        assert!(size > 0, "window size must be at least 1");
        if self.len == 0 {
            return Vec::new();
        }
        if self.len <= size {
            return vec![self.as_slice()];
        }
        self.as_slice().windows(size).collect()
    }
}
