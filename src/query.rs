//! Predicate queries over the live region.
//!
//! All four share one traversal shape: a forward scan that short-circuits as
//! soon as the answer is decided. Predicates are called once per element in
//! traversal order and should be side-effect-free.

use crate::sequence::Sequence;

impl<T> Sequence<T> {
    /// True iff some element satisfies `pred`. Short-circuits on the first
    /// match; false on an empty sequence.
    pub fn any<F: FnMut(&T) -> bool>(&self, pred: F) -> bool {
        self.as_slice().iter().any(pred)
    }

    /// True iff every element satisfies `pred`. Short-circuits on the first
    /// failure; vacuously true on an empty sequence.
    pub fn all<F: FnMut(&T) -> bool>(&self, pred: F) -> bool {
        self.as_slice().iter().all(pred)
    }

    /// True iff no element satisfies `pred`. Vacuously true on an empty
    /// sequence.
    pub fn none<F: FnMut(&T) -> bool>(&self, pred: F) -> bool {
        !self.any(pred)
    }

    /// True iff some element equals `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.any(|x| x == value)
    }
}
