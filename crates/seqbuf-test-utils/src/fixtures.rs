//! Reusable sample sequences.
//!
//! - [`ints`] — a plain `Sequence<i32>` from a slice.
//! - [`tracked`] — `Tracked` elements registered with a tracker.
//! - [`words`] — heap-owning `String` elements.

use seqbuf::Sequence;

use crate::{DropTracker, Tracked};

/// A sequence holding `values` in order.
pub fn ints(values: &[i32]) -> Sequence<i32> {
    Sequence::from_slice(values).expect("fixture allocation")
}

/// A default-capacity sequence of tracked elements holding `values`.
pub fn tracked(tracker: &DropTracker, values: &[i32]) -> Sequence<Tracked> {
    let mut seq = Sequence::new().expect("fixture allocation");
    seq.try_extend(values.iter().map(|&v| tracker.track(v)))
        .expect("fixture allocation");
    seq
}

/// A sequence of owned strings.
pub fn words(values: &[&str]) -> Sequence<String> {
    let mut seq = Sequence::new().expect("fixture allocation");
    seq.try_extend(values.iter().map(|s| s.to_string()))
        .expect("fixture allocation");
    seq
}

/// Current values of a tracked sequence, front to back.
pub fn values(seq: &Sequence<Tracked>) -> Vec<i32> {
    seq.cursor().map(Tracked::value).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracked_fixture_registers_every_element() {
        let tracker = DropTracker::new();
        let seq = tracked(&tracker, &[1, 2, 3]);
        assert_eq!(tracker.live(), 3);
        assert_eq!(values(&seq), vec![1, 2, 3]);
        drop(seq);
        assert_eq!(tracker.live(), 0);
    }

    #[test]
    fn words_fixture_preserves_order() {
        let seq = words(&["a", "b"]);
        assert_eq!(seq.as_slice(), &["a".to_string(), "b".to_string()]);
    }
}
