//! The core sequence handle and its storage invariants.
//!
//! A [`Sequence`] owns a contiguous backing store and tracks a live prefix of
//! it explicitly. Three extents matter:
//!
//! - `len()` — number of live elements;
//! - `initialized_capacity()` — slots holding real values of `T` (the live
//!   prefix plus a dead tail left behind by shrinking operations);
//! - `capacity()` — slots that can be initialized without reallocating.
//!
//! `len() <= initialized_capacity() <= capacity()` holds at all times.
//! Operations documented as clearing overwrite the slots they vacate with
//! `T::default()`, dropping the previous occupants immediately. The
//! `*_no_clear` variants skip that step; their stale values stay in the dead
//! tail until some later operation overwrites them, observable through
//! [`Sequence::dead_slots`].

use std::fmt;

/// Ordered, finite, mutable collection backed by contiguous storage.
///
/// Construct one from a `Vec`, an iterator, or empty via [`Sequence::new`];
/// the restructuring operations live in inherent impls across the crate.
/// Dereferences to `[T]` over the live region, so slice methods and indexing
/// work as usual.
pub struct Sequence<T> {
    /// Initialized storage. Everything in here is a real `T`; only the
    /// first `len` slots are live.
    pub(crate) slots: Vec<T>,
    /// Live prefix length. Invariant: `len <= slots.len()`.
    pub(crate) len: usize,
}

impl<T> Sequence<T> {
    /// An empty sequence with no allocation.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            len: 0,
        }
    }

    /// An empty sequence with at least `cap` slots reserved. Pre-sizing lets
    /// the in-place insertion paths run without reallocating.
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            slots: Vec::with_capacity(cap),
            len: 0,
        }
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total slots usable without a reallocation.
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Slots currently holding real values (live prefix plus dead tail).
    pub fn initialized_capacity(&self) -> usize {
        self.slots.len()
    }

    /// The live region.
    pub fn as_slice(&self) -> &[T] {
        &self.slots[..self.len]
    }

    /// The live region, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.slots[..self.len]
    }

    /// Diagnostic view of the dead tail: initialized slots beyond the live
    /// region. Slots vacated by a clearing operation hold `T::default()`;
    /// slots left behind by a `*_no_clear` operation may hold stale values.
    pub fn dead_slots(&self) -> &[T] {
        &self.slots[self.len..]
    }

    /// Consume the sequence, returning the live elements as a `Vec`.
    pub fn into_vec(mut self) -> Vec<T> {
        self.slots.truncate(self.len);
        self.slots
    }
}

impl<T: Default> Sequence<T> {
    /// Grow initialized storage to at least `new_len` slots, filling new
    /// slots with `T::default()`. Does not touch `len`.
    pub(crate) fn reserve_slots(&mut self, new_len: usize) {
        if new_len <= self.slots.len() {
            return;
        }
        #[cfg(feature = "tracing")]
        if new_len > self.slots.capacity() {
            tracing::trace!(
                requested = new_len,
                capacity = self.slots.capacity(),
                "reallocating backing store"
            );
        }
        self.slots.resize_with(new_len, T::default);
    }

    /// Overwrite `slots[from..to]` with `T::default()`, dropping the
    /// previous occupants.
    pub(crate) fn clear_slots(&mut self, from: usize, to: usize) {
        for slot in &mut self.slots[from..to] {
            *slot = T::default();
        }
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(v: Vec<T>) -> Self {
        Self { len: v.len(), slots: v }
    }
}

impl<T: Clone> From<&[T]> for Sequence<T> {
    fn from(s: &[T]) -> Self {
        Self::from(s.to_vec())
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

/// Shallow element-wise duplicate of the live region into fresh, tightly
/// sized storage. Dead and spare capacity are not carried over.
impl<T: Clone> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.as_slice().to_vec(),
            len: self.len,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Sequence<T> {}

impl<T: PartialEq> PartialEq<Vec<T>> for Sequence<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for Sequence<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T> std::ops::Deref for Sequence<T> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> std::ops::DerefMut for Sequence<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Sequence<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.as_slice())
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Sequence<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Sequence::from)
    }
}
