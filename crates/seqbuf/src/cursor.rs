//! Iteration cursors over a sequence's live elements.
//!
//! Four flavours: forward and reverse, each read-only or read-write. A
//! cursor borrows the sequence it came from, so the sequence cannot be
//! structurally mutated while the cursor is alive. Cursors are one-pass;
//! take a fresh one from the sequence to iterate again.
//!
//! Besides the explicit `has_next` / `current` / `advance` protocol every
//! cursor is also an [`Iterator`] over the elements it has not yet passed.

use std::iter::FusedIterator;
use std::mem;

/// Forward read-only cursor.
#[derive(Debug)]
pub struct Cursor<'a, T> {
    remaining: &'a [T],
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        Self {
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(live: &'a [T]) -> Self {
        Self { remaining: live }
    }

    /// Whether an unvisited element remains.
    pub fn has_next(&self) -> bool {
        !self.remaining.is_empty()
    }

    /// The element at the cursor's position.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is exhausted.
    pub fn current(&self) -> &'a T {
        assert!(self.has_next(), "cursor is exhausted");
        let remaining = self.remaining;
        &remaining[0]
    }

    /// Step to the next position. Does nothing once exhausted.
    pub fn advance(&mut self) {
        if let Some((_, rest)) = self.remaining.split_first() {
            self.remaining = rest;
        }
    }
}

impl<'a, T> Iterator for Cursor<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let (first, rest) = self.remaining.split_first()?;
        self.remaining = rest;
        Some(first)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining.len(), Some(self.remaining.len()))
    }
}

impl<T> ExactSizeIterator for Cursor<'_, T> {}
impl<T> FusedIterator for Cursor<'_, T> {}

/// Reverse read-only cursor, starting at the last element.
#[derive(Debug)]
pub struct ReverseCursor<'a, T> {
    remaining: &'a [T],
}

impl<T> Clone for ReverseCursor<'_, T> {
    fn clone(&self) -> Self {
        Self {
            remaining: self.remaining,
        }
    }
}

impl<'a, T> ReverseCursor<'a, T> {
    pub(crate) fn new(live: &'a [T]) -> Self {
        Self { remaining: live }
    }

    /// Whether an unvisited element remains.
    pub fn has_next(&self) -> bool {
        !self.remaining.is_empty()
    }

    /// The element at the cursor's position.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is exhausted.
    pub fn current(&self) -> &'a T {
        assert!(self.has_next(), "cursor is exhausted");
        let remaining = self.remaining;
        &remaining[remaining.len() - 1]
    }

    /// Step toward index 0. Does nothing once exhausted.
    pub fn advance(&mut self) {
        if let Some((_, rest)) = self.remaining.split_last() {
            self.remaining = rest;
        }
    }
}

impl<'a, T> Iterator for ReverseCursor<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let (last, rest) = self.remaining.split_last()?;
        self.remaining = rest;
        Some(last)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining.len(), Some(self.remaining.len()))
    }
}

impl<T> ExactSizeIterator for ReverseCursor<'_, T> {}
impl<T> FusedIterator for ReverseCursor<'_, T> {}

/// Forward read-write cursor.
#[derive(Debug)]
pub struct CursorMut<'a, T> {
    remaining: &'a mut [T],
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn new(live: &'a mut [T]) -> Self {
        Self { remaining: live }
    }

    /// Whether an unvisited element remains.
    pub fn has_next(&self) -> bool {
        !self.remaining.is_empty()
    }

    /// The element at the cursor's position.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is exhausted.
    pub fn current(&self) -> &T {
        assert!(self.has_next(), "cursor is exhausted");
        &self.remaining[0]
    }

    /// Mutable access to the element at the cursor's position.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is exhausted.
    pub fn current_mut(&mut self) -> &mut T {
        assert!(self.has_next(), "cursor is exhausted");
        &mut self.remaining[0]
    }

    /// Overwrite the element at the cursor's position.
    pub fn set(&mut self, value: T) {
        *self.current_mut() = value;
    }

    /// Step to the next position. Does nothing once exhausted.
    pub fn advance(&mut self) {
        if let Some((_, rest)) = mem::take(&mut self.remaining).split_first_mut() {
            self.remaining = rest;
        }
    }
}

impl<'a, T> Iterator for CursorMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        let (first, rest) = mem::take(&mut self.remaining).split_first_mut()?;
        self.remaining = rest;
        Some(first)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining.len(), Some(self.remaining.len()))
    }
}

impl<T> ExactSizeIterator for CursorMut<'_, T> {}
impl<T> FusedIterator for CursorMut<'_, T> {}

/// Reverse read-write cursor, starting at the last element.
#[derive(Debug)]
pub struct ReverseCursorMut<'a, T> {
    remaining: &'a mut [T],
}

impl<'a, T> ReverseCursorMut<'a, T> {
    pub(crate) fn new(live: &'a mut [T]) -> Self {
        Self { remaining: live }
    }

    /// Whether an unvisited element remains.
    pub fn has_next(&self) -> bool {
        !self.remaining.is_empty()
    }

    /// The element at the cursor's position.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is exhausted.
    pub fn current(&self) -> &T {
        assert!(self.has_next(), "cursor is exhausted");
        &self.remaining[self.remaining.len() - 1]
    }

    /// Mutable access to the element at the cursor's position.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is exhausted.
    pub fn current_mut(&mut self) -> &mut T {
        assert!(self.has_next(), "cursor is exhausted");
        let last = self.remaining.len() - 1;
        &mut self.remaining[last]
    }

    /// Overwrite the element at the cursor's position.
    pub fn set(&mut self, value: T) {
        *self.current_mut() = value;
    }

    /// Step toward index 0. Does nothing once exhausted.
    pub fn advance(&mut self) {
        if let Some((_, rest)) = mem::take(&mut self.remaining).split_last_mut() {
            self.remaining = rest;
        }
    }
}

impl<'a, T> Iterator for ReverseCursorMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        let (last, rest) = mem::take(&mut self.remaining).split_last_mut()?;
        self.remaining = rest;
        Some(last)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining.len(), Some(self.remaining.len()))
    }
}

impl<T> ExactSizeIterator for ReverseCursorMut<'_, T> {}
impl<T> FusedIterator for ReverseCursorMut<'_, T> {}

#[cfg(test)]
mod tests {
    use crate::Sequence;

    fn sample() -> Sequence<i32> {
        Sequence::from_slice(&[10, 20, 30]).unwrap()
    }

    #[test]
    fn forward_protocol_visits_in_order() {
        let seq = sample();
        let mut cursor = seq.cursor();
        let mut seen = Vec::new();
        while cursor.has_next() {
            seen.push(*cursor.current());
            cursor.advance();
        }
        assert_eq!(seen, vec![10, 20, 30]);
        cursor.advance();
        assert!(!cursor.has_next());
    }

    #[test]
    fn reverse_protocol_visits_backwards() {
        let seq = sample();
        let mut cursor = seq.reverse_cursor();
        let mut seen = Vec::new();
        while cursor.has_next() {
            seen.push(*cursor.current());
            cursor.advance();
        }
        assert_eq!(seen, vec![30, 20, 10]);
    }

    #[test]
    fn cursors_are_iterators() {
        let seq = sample();
        assert_eq!(seq.cursor().copied().collect::<Vec<_>>(), vec![10, 20, 30]);
        assert_eq!(
            seq.reverse_cursor().copied().collect::<Vec<_>>(),
            vec![30, 20, 10]
        );
        assert_eq!(seq.cursor().len(), 3);
        let total: i32 = (&seq).into_iter().sum();
        assert_eq!(total, 60);
    }

    #[test]
    fn mutable_cursor_sets_in_place() {
        let mut seq = sample();
        let mut cursor = seq.cursor_mut();
        cursor.advance();
        cursor.set(25);
        cursor.advance();
        *cursor.current_mut() += 5;
        assert_eq!(*cursor.current(), 35);
        assert_eq!(seq.as_slice(), &[10, 25, 35]);
    }

    #[test]
    fn reverse_mutable_cursor_sets_in_place() {
        let mut seq = sample();
        let mut cursor = seq.reverse_cursor_mut();
        cursor.set(33);
        cursor.advance();
        cursor.advance();
        cursor.set(11);
        cursor.advance();
        assert!(!cursor.has_next());
        assert_eq!(seq.as_slice(), &[11, 20, 33]);
    }

    #[test]
    fn mutable_iteration_doubles_every_element() {
        let mut seq = sample();
        for value in &mut seq {
            *value *= 2;
        }
        for value in seq.reverse_cursor_mut() {
            *value += 1;
        }
        assert_eq!(seq.as_slice(), &[21, 41, 61]);
    }

    #[test]
    fn empty_sequence_cursor_has_nothing() {
        let seq = Sequence::<i32>::new().unwrap();
        assert!(!seq.cursor().has_next());
        assert!(!seq.reverse_cursor().has_next());
        assert_eq!(seq.cursor().next(), None);
    }

    #[test]
    fn fresh_cursor_restarts_iteration() {
        let seq = sample();
        let mut first = seq.cursor();
        first.advance();
        first.advance();
        let second = seq.cursor();
        assert_eq!(*first.current(), 30);
        assert_eq!(*second.current(), 10);
    }

    #[test]
    #[should_panic(expected = "cursor is exhausted")]
    fn current_past_end_panics() {
        let seq = sample();
        let mut cursor = seq.cursor();
        for _ in 0..3 {
            cursor.advance();
        }
        cursor.current();
    }
}
