//! Fallible counterparts to the operations with contracts.
//!
//! The primary API panics on contract violations; these return the violation
//! as an [`Error`] instead and leave the sequence untouched on failure. On
//! valid input each `try_*` method behaves exactly like its panicking
//! counterpart.

use crate::error::{Error, Result};
use crate::sequence::Sequence;

impl<T: Default> Sequence<T> {
    /// Fallible [`Sequence::cut`].
    pub fn try_cut(&mut self, start: usize, end: usize) -> Result<()> {
        if start > end || end > self.len {
            return Err(Error::RangeOutOfBounds {
                start,
                end,
                len: self.len,
            });
        }
        self.cut(start, end);
        Ok(())
    }

    /// Fallible [`Sequence::delete`].
    pub fn try_delete(&mut self, i: usize) -> Result<()> {
        if i >= self.len {
            return Err(Error::IndexOutOfBounds {
                index: i,
                len: self.len,
            });
        }
        self.delete(i);
        Ok(())
    }

    /// Fallible [`Sequence::delete_unordered`].
    pub fn try_delete_unordered(&mut self, i: usize) -> Result<()> {
        if i >= self.len {
            return Err(Error::IndexOutOfBounds {
                index: i,
                len: self.len,
            });
        }
        self.delete_unordered(i);
        Ok(())
    }

    /// Fallible [`Sequence::expand`].
    pub fn try_expand(&mut self, i: usize, n: usize) -> Result<()> {
        if i > self.len {
            return Err(Error::IndexOutOfBounds {
                index: i,
                len: self.len,
            });
        }
        self.expand(i, n);
        Ok(())
    }

    /// Fallible [`Sequence::insert`].
    pub fn try_insert(&mut self, i: usize, elem: T) -> Result<()> {
        if i > self.len {
            return Err(Error::IndexOutOfBounds {
                index: i,
                len: self.len,
            });
        }
        self.insert(i, elem);
        Ok(())
    }

    /// Fallible [`Sequence::pop`].
    pub fn try_pop(&mut self) -> Result<T> {
        if self.len == 0 {
            return Err(Error::Empty { op: "pop" });
        }
        Ok(self.pop())
    }

    /// Fallible [`Sequence::pop_front`].
    pub fn try_pop_front(&mut self) -> Result<T> {
        if self.len == 0 {
            return Err(Error::Empty { op: "pop_front" });
        }
        Ok(self.pop_front())
    }
}

impl<T: Clone + Default> Sequence<T> {
    /// Fallible [`Sequence::insert_many`].
    pub fn try_insert_many(&mut self, i: usize, elems: &[T]) -> Result<()> {
        if i > self.len {
            return Err(Error::IndexOutOfBounds {
                index: i,
                len: self.len,
            });
        }
        self.insert_many(i, elems);
        Ok(())
    }
}

impl<T> Sequence<T> {
    /// Fallible [`Sequence::batches`].
    pub fn try_batches(&self, size: usize) -> Result<Vec<&[T]>> {
        if size == 0 {
            return Err(Error::ZeroSize { what: "batch" });
        }
        Ok(self.batches(size))
    }

    /// Fallible [`Sequence::sliding_windows`].
    pub fn try_sliding_windows(&self, size: usize) -> Result<Vec<&[T]>> {
        if size == 0 {
            return Err(Error::ZeroSize { what: "window" });
        }
        Ok(self.sliding_windows(size))
    }
}
