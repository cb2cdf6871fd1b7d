//! Compaction passes: filter, reverse, and sort+dedupe.
//!
//! Filtering and deduplication share the same shape: a forward pass with a
//! write cursor that only advances on keep, followed by a trailing clear of
//! the slots the pass vacated. Kept elements move down by swap so every slot
//! stays initialized throughout.

use std::cmp::Ordering;

use crate::sequence::Sequence;

impl<T> Sequence<T> {
    /// Forward compaction of the live region. Returns the number of kept
    /// elements; evicted values end up (in no particular order) in the
    /// slots between that count and the old length.
    fn compact_live(&mut self, keep: &mut dyn FnMut(&T) -> bool) -> usize {
        let mut write = 0;
        for read in 0..self.len {
            if keep(&self.slots[read]) {
                if read != write {
                    self.slots.swap(write, read);
                }
                write += 1;
            }
        }
        write
    }

    /// Retain, in order, exactly the elements for which `keep` returns true,
    /// without clearing the vacated tail. Identical ordering and element set
    /// to [`Sequence::filter`], one pass, no allocation.
    ///
    /// Stale values stay reachable through initialized capacity until they
    /// are overwritten, so element types that own resources will not release
    /// them promptly. Opt in only when `T` holds nothing that needs timely
    /// release; otherwise use [`Sequence::filter`].
    pub fn filter_no_clear<F: FnMut(&T) -> bool>(&mut self, mut keep: F) {
        self.len = self.compact_live(&mut keep);
    }
}

impl<T: Default> Sequence<T> {
    /// Retain, in order, exactly the elements for which `keep` returns true.
    /// Single forward compaction pass; the predicate is called once per
    /// element in traversal order. Vacated slots are cleared so dropped
    /// elements release their payloads immediately.
    pub fn filter<F: FnMut(&T) -> bool>(&mut self, mut keep: F) {
        let kept = self.compact_live(&mut keep);
        self.clear_slots(kept, self.len);
        self.len = kept;
    }

    /// Stable sort by `cmp`, then in-place removal of consecutive duplicates
    /// under the element type's own equality, keeping the first occurrence
    /// of each run and clearing the vacated tail.
    pub fn sort_and_dedup<F>(&mut self, cmp: F)
    where
        T: PartialEq,
        F: FnMut(&T, &T) -> Ordering,
    {
        self.sort_and_dedup_by(cmp, |a, b| a == b);
    }

    /// [`Sequence::sort_and_dedup`] with a caller-supplied equivalence, for
    /// element types without `PartialEq` or when duplicate detection should
    /// differ from native equality. `same` must be consistent with the order
    /// `cmp` produces, or non-adjacent duplicates will survive.
    pub fn sort_and_dedup_by<F, E>(&mut self, cmp: F, mut same: E)
    where
        F: FnMut(&T, &T) -> Ordering,
        E: FnMut(&T, &T) -> bool,
    {
        self.as_mut_slice().sort_by(cmp);
        if self.len == 0 {
            return;
        }
        let mut write = 0;
        for read in 1..self.len {
            if same(&self.slots[write], &self.slots[read]) {
                continue;
            }
            write += 1;
            if read != write {
                self.slots.swap(write, read);
            }
        }
        let new_len = write + 1;
        self.clear_slots(new_len, self.len);
        self.len = new_len;
    }
}

impl<T> Sequence<T> {
    /// In-place reversal by symmetric swaps from both ends toward the
    /// center. No-op on empty or single-element sequences.
    pub fn reverse(&mut self) {
        self.as_mut_slice().reverse();
    }
}
