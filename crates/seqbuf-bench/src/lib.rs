//! Benchmark workloads for seqbuf.
//!
//! Provides deterministic operation scripts for benchmarking and
//! soak-testing a [`Sequence`]:
//!
//! - [`random_workload`]: seeded mix of pushes, mid-sequence inserts and removals
//! - [`replay`]: apply a script to a sequence, returning the final length

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use seqbuf::{Sequence, SequenceError};

/// One step of a benchmark script.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Append a value.
    Push(u64),
    /// Insert a value at a position, taken modulo `len + 1` at replay time.
    Insert(usize, u64),
    /// Remove at a position, taken modulo `len` at replay time. Skipped on
    /// an empty sequence.
    Remove(usize),
}

/// Build a deterministic script of `steps` operations.
///
/// Roughly half pushes, a third inserts and the rest removals, so the
/// sequence trends upward and exercises growth.
pub fn random_workload(steps: usize, seed: u64) -> Vec<Step> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..steps)
        .map(|_| {
            let value: u64 = rng.random();
            match rng.random_range(0..6u8) {
                0..=2 => Step::Push(value),
                3 | 4 => Step::Insert(rng.random_range(0..=steps), value),
                _ => Step::Remove(rng.random_range(0..=steps)),
            }
        })
        .collect()
}

/// Apply `script` to `seq`. Returns the resulting length.
pub fn replay(seq: &mut Sequence<u64>, script: &[Step]) -> Result<usize, SequenceError> {
    for &step in script {
        match step {
            Step::Push(v) => {
                seq.push(v)?;
            }
            Step::Insert(at, v) => {
                seq.insert(at % (seq.len() + 1), v)?;
            }
            Step::Remove(at) => {
                if !seq.is_empty() {
                    seq.remove(at % seq.len());
                }
            }
        }
    }
    Ok(seq.len())
}
