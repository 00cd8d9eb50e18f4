//! The growable sequence and its storage-management engine.
//!
//! A [`Sequence`] owns one [`RawBuffer`] and a live-element count. Slots
//! `[0, len)` are live; everything past `len` is uninitialised and never
//! touched. Every mutator below restores that invariant before returning,
//! including on its error paths.

#![allow(unsafe_code)]

use std::fmt;
use std::mem;
use std::ops::{Index, IndexMut};

use crate::config::SequenceConfig;
use crate::cursor::{Cursor, CursorMut, ReverseCursor, ReverseCursorMut};
use crate::error::SequenceError;
use crate::raw::{self, RawBuffer};

/// A contiguous, growable sequence of `T` over self-managed storage.
///
/// Capacity doubles whenever an insertion finds the sequence full and
/// never shrinks on its own. Growth allocates the new block before any
/// element is touched, so a failed growth leaves the sequence exactly as
/// it was.
///
/// Index arguments are contracts: out-of-range indices panic rather than
/// returning an error.
pub struct Sequence<T> {
    buf: RawBuffer<T>,
    len: usize,
}

impl<T> Sequence<T> {
    /// Create an empty sequence with the default capacity of 8 slots.
    pub fn new() -> Result<Self, SequenceError> {
        Self::with_config(SequenceConfig::new())
    }

    /// Create an empty sequence with room for `capacity` elements.
    ///
    /// Returns [`SequenceError::InvalidArgument`] if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self, SequenceError> {
        Self::with_config(SequenceConfig::with_initial_capacity(capacity))
    }

    /// Create an empty sequence from a validated config.
    pub fn with_config(config: SequenceConfig) -> Result<Self, SequenceError> {
        config.validate()?;
        Ok(Self {
            buf: RawBuffer::allocate(config.initial_capacity)?,
            len: 0,
        })
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the sequence holds no live elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of element slots in the backing block.
    ///
    /// Zero only for the empty moved-from state.
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Append `value`, growing if full. Returns the index it landed at.
    pub fn push(&mut self, value: T) -> Result<usize, SequenceError> {
        self.insert(self.len, value)
    }

    /// Insert `value` at `index`, shifting `[index, len)` one slot right.
    ///
    /// If growth fails the sequence is left unchanged and `value` is
    /// dropped.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<usize, SequenceError> {
        assert!(
            index <= self.len,
            "insertion index {index} out of range for length {}",
            self.len
        );

        if self.len == self.buf.capacity() {
            self.grow()?;
        }

        // SAFETY: `len < capacity` after growth, `[index, len)` is live and
        // slot `len` is vacant. After the shift slot `index` is vacant.
        unsafe {
            self.buf.shift_right(index, self.len);
            self.buf.write(index, value);
        }
        self.len += 1;
        Ok(index)
    }

    /// Remove and return the element at `index`, shifting the tail left.
    ///
    /// Capacity is unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn remove(&mut self, index: usize) -> T {
        assert!(
            index < self.len,
            "removal index {index} out of range for length {}",
            self.len
        );

        // SAFETY: slot `index` is live; once read it is vacant, which is
        // what `shift_left` needs. Afterwards `[0, len - 1)` is live.
        let value = unsafe {
            let value = self.buf.read(index);
            self.buf.shift_left(index, self.len);
            value
        };
        self.len -= 1;
        value
    }

    /// Drop every live element, keeping the allocated capacity.
    pub fn clear(&mut self) {
        let len = mem::replace(&mut self.len, 0);
        // SAFETY: `[0, len)` was live. `len` is already zero, so a
        // panicking destructor cannot lead to a second drop.
        unsafe { self.buf.destruct_range(0, len) }
    }

    /// The live elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[0, len)` is live.
        unsafe { self.buf.as_slice(self.len) }
    }

    /// The live elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: `[0, len)` is live.
        unsafe { self.buf.as_mut_slice(self.len) }
    }

    /// Move the whole state out, leaving `self` empty with no storage.
    ///
    /// No element is copied or moved individually; the block changes owner.
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Release the current contents and adopt `source`'s state.
    ///
    /// `source` is left empty with no storage.
    pub fn move_from(&mut self, source: &mut Self) {
        *self = source.take();
    }

    /// Exchange the complete state of two sequences in O(1).
    pub fn swap_with(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Append every item of `iter`, stopping at the first growth failure.
    ///
    /// Items appended before the failure stay in the sequence.
    pub fn try_extend<I>(&mut self, iter: I) -> Result<(), SequenceError>
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.push(value)?;
        }
        Ok(())
    }

    /// Forward read-only cursor starting at index 0.
    pub fn cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self.as_slice())
    }

    /// Forward read-write cursor starting at index 0.
    pub fn cursor_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self.as_mut_slice())
    }

    /// Reverse read-only cursor starting at the last element.
    pub fn reverse_cursor(&self) -> ReverseCursor<'_, T> {
        ReverseCursor::new(self.as_slice())
    }

    /// Reverse read-write cursor starting at the last element.
    pub fn reverse_cursor_mut(&mut self) -> ReverseCursorMut<'_, T> {
        ReverseCursorMut::new(self.as_mut_slice())
    }

    fn grow(&mut self) -> Result<(), SequenceError> {
        let capacity = self.buf.capacity();
        let new_capacity = if capacity == 0 {
            1
        } else {
            capacity
                .checked_mul(SequenceConfig::GROWTH_FACTOR)
                .ok_or_else(|| raw::out_of_memory::<T>(usize::MAX))?
        };
        self.resize(new_capacity)
    }

    /// Move every live element into a fresh block of `new_capacity` slots.
    fn resize(&mut self, new_capacity: usize) -> Result<(), SequenceError> {
        debug_assert!(new_capacity >= self.len);

        let mut fresh = RawBuffer::allocate(new_capacity)?;
        // SAFETY: `[0, len)` is live in the old block and `fresh` has at
        // least `len` vacant slots.
        unsafe { self.buf.relocate_into(&mut fresh, self.len) };
        let old = mem::replace(&mut self.buf, fresh);
        log::trace!(
            "sequence grew from {} to {new_capacity} slots with {} live",
            old.capacity(),
            self.len
        );
        drop(old);
        Ok(())
    }
}

impl<T: Clone> Sequence<T> {
    /// Build a sequence holding clones of `values`.
    ///
    /// Capacity is `values.len()`, or 1 for an empty slice.
    pub fn from_slice(values: &[T]) -> Result<Self, SequenceError> {
        let mut seq = Self::with_capacity(values.len().max(1))?;
        seq.try_extend(values.iter().cloned())?;
        Ok(seq)
    }

    /// Deep copy with the same capacity, length and element values.
    ///
    /// If `T::clone` panics the partial copy is dropped and `self` is
    /// untouched.
    pub fn try_clone(&self) -> Result<Self, SequenceError> {
        if self.capacity() == 0 {
            return Ok(Self::default());
        }
        let mut copy = Self::with_capacity(self.capacity())?;
        for value in self.as_slice() {
            // SAFETY: `copy.len < copy.capacity` since both have the same
            // capacity and `copy.len < self.len`. The slot is vacant.
            unsafe { copy.buf.write(copy.len, value.clone()) };
            copy.len += 1;
        }
        Ok(copy)
    }

    /// Replace the contents with a deep copy of `source`.
    ///
    /// All-or-nothing: the copy is built in full before anything in
    /// `self` changes, and the old contents are dropped after the swap.
    pub fn assign_from(&mut self, source: &Self) -> Result<(), SequenceError> {
        let mut staged = source.try_clone()?;
        self.swap_with(&mut staged);
        Ok(())
    }
}

impl<T> Default for Sequence<T> {
    /// The empty state: no storage, no elements. Grows to 1 slot on the
    /// first insertion.
    fn default() -> Self {
        Self {
            buf: RawBuffer::empty(),
            len: 0,
        }
    }
}

impl<T> Drop for Sequence<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(copy) => copy,
            Err(_) => raw::handle_alloc_failure::<T>(self.capacity()),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        if self.assign_from(source).is_err() {
            raw::handle_alloc_failure::<T>(source.capacity());
        }
    }
}

impl<T> Index<usize> for Sequence<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        assert!(
            index < self.len,
            "index {index} out of range for length {}",
            self.len
        );
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for Sequence<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        assert!(
            index < self.len,
            "index {index} out of range for length {}",
            self.len
        );
        &mut self.as_mut_slice()[index]
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

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = Cursor<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.cursor()
    }
}

impl<'a, T> IntoIterator for &'a mut Sequence<T> {
    type Item = &'a mut T;
    type IntoIter = CursorMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.cursor_mut()
    }
}
