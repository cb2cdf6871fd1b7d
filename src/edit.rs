//! Structural edits: cut, delete, expand, insert, and the push/pop family.
//!
//! Everything here mutates in place. Shifts are expressed as slice rotations
//! over the affected region, which keeps every slot initialized and lets the
//! clearing step drop evicted values by overwriting them with `T::default()`.

use crate::sequence::Sequence;

impl<T: Default> Sequence<T> {
    /// Remove the elements in `start..end`, preserving the order of the
    /// remainder. The remainder shifts down in a single block move and the
    /// vacated tail is cleared. `start == end` is a no-op.
    ///
    /// # Panics
    ///
    /// Panics unless `start <= end <= len()`.
    pub fn cut(&mut self, start: usize, end: usize) {
        assert!(
            start <= end && end <= self.len,
            "range {start}..{end} out of bounds for length {}",
            self.len
        );
        if start == end {
            return;
        }
        let removed = end - start;
        self.slots[start..self.len].rotate_left(removed);
        let new_len = self.len - removed;
        self.clear_slots(new_len, self.len);
        self.len = new_len;
    }

    /// Remove the element at `i`, shifting the suffix down by one and
    /// clearing the vacated final slot.
    ///
    /// # Panics
    ///
    /// Panics unless `i < len()`.
    pub fn delete(&mut self, i: usize) {
        assert!(
            i < self.len,
            "index {i} out of bounds for length {}",
            self.len
        );
        self.slots[i..self.len].rotate_left(1);
        self.len -= 1;
        self.clear_slots(self.len, self.len + 1);
    }

    /// Remove the element at `i` by swapping the last live element into its
    /// place. O(1), but the relative order of the remainder is not preserved.
    ///
    /// # Panics
    ///
    /// Panics unless `i < len()`.
    pub fn delete_unordered(&mut self, i: usize) {
        assert!(
            i < self.len,
            "index {i} out of bounds for length {}",
            self.len
        );
        self.slots.swap(i, self.len - 1);
        self.len -= 1;
        self.clear_slots(self.len, self.len + 1);
    }

    /// Insert `n` default-valued elements at index `i`, shifting the tail
    /// right. `i == len()` appends; `n == 0` is a no-op.
    ///
    /// # Panics
    ///
    /// Panics unless `i <= len()`.
    pub fn expand(&mut self, i: usize, n: usize) {
        assert!(
            i <= self.len,
            "index {i} out of bounds for length {}",
            self.len
        );
        if n == 0 {
            return;
        }
        let new_len = self.len + n;
        self.reserve_slots(new_len);
        self.slots[i..new_len].rotate_right(n);
        // Slots rotated in from the dead tail may be stale after a no-clear
        // operation, so the inserted region is always rewritten.
        self.clear_slots(i, i + n);
        self.len = new_len;
    }

    /// Append `n` default-valued elements.
    pub fn extend(&mut self, n: usize) {
        self.expand(self.len, n);
    }

    /// Insert `elem` at index `i`, shifting elements at and after `i` one
    /// slot right.
    ///
    /// # Panics
    ///
    /// Panics unless `i <= len()`.
    pub fn insert(&mut self, i: usize, elem: T) {
        assert!(
            i <= self.len,
            "index {i} out of bounds for length {}",
            self.len
        );
        let new_len = self.len + 1;
        self.reserve_slots(new_len);
        self.slots[i..new_len].rotate_right(1);
        self.slots[i] = elem;
        self.len = new_len;
    }

    /// Prepend one element. The expensive counterpart to [`Sequence::push`]:
    /// every existing element shifts one slot right.
    pub fn push_front(&mut self, elem: T) {
        self.insert(0, elem);
    }

    /// Remove and return the last element, clearing the vacated slot.
    ///
    /// # Panics
    ///
    /// Panics if the sequence is empty.
    pub fn pop(&mut self) -> T {
        assert!(self.len > 0, "pop on an empty sequence");
        self.len -= 1;
        std::mem::take(&mut self.slots[self.len])
    }

    /// Remove and return the first element, shifting the remainder down.
    /// O(n), the expensive counterpart to [`Sequence::pop`].
    ///
    /// # Panics
    ///
    /// Panics if the sequence is empty.
    pub fn pop_front(&mut self) -> T {
        assert!(self.len > 0, "pop_front on an empty sequence");
        self.slots[..self.len].rotate_left(1);
        self.len -= 1;
        std::mem::take(&mut self.slots[self.len])
    }
}

impl<T> Sequence<T> {
    /// Append one element, growing storage if needed.
    pub fn push(&mut self, elem: T) {
        if self.len < self.slots.len() {
            // Reuse a dead slot; the old occupant is dropped here.
            self.slots[self.len] = elem;
        } else {
            #[cfg(feature = "tracing")]
            if self.slots.len() == self.slots.capacity() {
                tracing::trace!(capacity = self.slots.capacity(), "push growing backing store");
            }
            self.slots.push(elem);
        }
        self.len += 1;
    }
}

impl<T: Clone + Default> Sequence<T> {
    /// Insert a slice of elements at index `i`.
    ///
    /// Two paths, chosen by capacity. When reserved capacity already
    /// accommodates the new length, the tail shifts within existing storage
    /// and no reallocation happens, so callers who pre-size with
    /// [`Sequence::with_capacity`] get zero-reallocation inserts. Otherwise
    /// a new backing store sized exactly to the new length is filled with
    /// prefix, inserted elements, and suffix in one pass. Both paths yield
    /// identical contents.
    ///
    /// # Panics
    ///
    /// Panics unless `i <= len()`.
    pub fn insert_many(&mut self, i: usize, elems: &[T]) {
        assert!(
            i <= self.len,
            "index {i} out of bounds for length {}",
            self.len
        );
        if elems.is_empty() {
            return;
        }
        let new_len = self.len + elems.len();

        if new_len <= self.slots.capacity() {
            self.reserve_slots(new_len);
            self.slots[i..new_len].rotate_right(elems.len());
            self.slots[i..i + elems.len()].clone_from_slice(elems);
            self.len = new_len;
            return;
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            len = self.len,
            inserted = elems.len(),
            capacity = self.slots.capacity(),
            "insert_many rebuilding backing store"
        );
        let mut old = std::mem::take(&mut self.slots);
        old.truncate(self.len);
        let suffix = old.split_off(i);

        let mut next = Vec::with_capacity(new_len);
        next.extend(old);
        next.extend_from_slice(elems);
        next.extend(suffix);
        self.slots = next;
        self.len = new_len;
    }
}
