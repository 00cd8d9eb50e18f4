//! Test utilities for seqbuf development.
//!
//! Provides [`Tracked`], an element type that reports every construction,
//! clone and drop to a shared [`DropTracker`], so tests can assert that a
//! sequence drops each element exactly once. Sample sequences live in
//! [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

#[derive(Default)]
struct Counts {
    created: Cell<usize>,
    cloned: Cell<usize>,
    dropped: Cell<usize>,
    /// Clones still allowed before `Tracked::clone` panics.
    clone_budget: Cell<Option<usize>>,
}

/// Shared lifecycle counters for a family of [`Tracked`] values.
#[derive(Clone, Default)]
pub struct DropTracker {
    counts: Rc<Counts>,
}

impl DropTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// A tracker whose elements panic on clone once `budget` clones
    /// have succeeded.
    pub fn with_clone_budget(budget: usize) -> Self {
        let tracker = Self::new();
        tracker.counts.clone_budget.set(Some(budget));
        tracker
    }

    /// Create a tracked element holding `value`.
    pub fn track(&self, value: i32) -> Tracked {
        self.counts.created.set(self.counts.created.get() + 1);
        Tracked {
            value,
            counts: Rc::clone(&self.counts),
        }
    }

    /// Elements created, including clones.
    pub fn created(&self) -> usize {
        self.counts.created.get()
    }

    pub fn cloned(&self) -> usize {
        self.counts.cloned.get()
    }

    pub fn dropped(&self) -> usize {
        self.counts.dropped.get()
    }

    /// Elements created and not yet dropped.
    pub fn live(&self) -> usize {
        self.created() - self.dropped()
    }
}

/// An `i32` wrapper that records its lifecycle in a [`DropTracker`].
pub struct Tracked {
    value: i32,
    counts: Rc<Counts>,
}

impl Tracked {
    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn set_value(&mut self, value: i32) {
        self.value = value;
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        if let Some(budget) = self.counts.clone_budget.get() {
            if budget == 0 {
                panic!("clone budget exhausted");
            }
            self.counts.clone_budget.set(Some(budget - 1));
        }
        self.counts.created.set(self.counts.created.get() + 1);
        self.counts.cloned.set(self.counts.cloned.get() + 1);
        Self {
            value: self.value,
            counts: Rc::clone(&self.counts),
        }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.counts.dropped.set(self.counts.dropped.get() + 1);
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl fmt::Debug for Tracked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tracked({})", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_and_drop_balance() {
        let tracker = DropTracker::new();
        let a = tracker.track(1);
        let b = a.clone();
        assert_eq!(tracker.created(), 2);
        assert_eq!(tracker.cloned(), 1);
        drop(a);
        assert_eq!(tracker.live(), 1);
        drop(b);
        assert_eq!(tracker.live(), 0);
        assert_eq!(tracker.dropped(), 2);
    }

    #[test]
    #[should_panic(expected = "clone budget exhausted")]
    fn clone_budget_panics_when_spent() {
        let tracker = DropTracker::with_clone_budget(1);
        let a = tracker.track(1);
        let _b = a.clone();
        let _c = a.clone();
    }
}
