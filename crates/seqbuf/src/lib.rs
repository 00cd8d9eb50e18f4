//! Contiguous growable sequences over self-managed raw storage.
//!
//! [`Sequence<T>`] owns a single uninitialised block and constructs,
//! relocates and drops elements in place. `unsafe` code is confined to
//! `raw.rs` (allocation and slot primitives) and `sequence.rs` (the
//! engine that tracks which slots are live).
//!
//! # Architecture
//!
//! ```text
//! Sequence<T> (engine: len + growth + copy/move transfer)
//! ├── RawBuffer<T> (owned block, in-place write/read/drop, relocation)
//! └── Cursor / CursorMut / ReverseCursor / ReverseCursorMut (borrowing views)
//! ```
//!
//! # Errors
//!
//! Allocation failures and invalid capacities are [`SequenceError`]
//! values and leave the sequence in its last valid state. Out-of-range
//! indices are caller bugs and panic.
//!
//! # Example
//!
//! ```rust
//! use seqbuf::Sequence;
//!
//! let mut seq = Sequence::new()?;
//! seq.push(10)?;
//! seq.push(30)?;
//! seq.insert(1, 20)?;
//! assert_eq!(seq.remove(0), 10);
//!
//! let backwards: Vec<i32> = seq.reverse_cursor().copied().collect();
//! assert_eq!(backwards, vec![30, 20]);
//! # Ok::<(), seqbuf::SequenceError>(())
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod config;
pub mod cursor;
pub mod error;
mod raw;
pub mod sequence;

pub use config::SequenceConfig;
pub use cursor::{Cursor, CursorMut, ReverseCursor, ReverseCursorMut};
pub use error::SequenceError;
pub use sequence::Sequence;
