//! # Running Folds (Scan) Over Eager and Lazy Sequences
//!
//! This library implements one sequence-transformation primitive: the
//! running fold, or *scan*. Given an initial accumulator and a combining
//! function, a scan produces every partial fold result in order, from
//! the empty prefix to the full input:
//!
//! ```text
//! scan(a0, f) over [e0, e1, e2] = [a0, f(a0,e0), f(f(a0,e0),e1), ...]
//! ```
//!
//! Two variants are provided, differing only in evaluation strategy:
//!
//! 1. **Eager**: [`scan_eager`] consumes a finite input and materializes
//!    all `n + 1` partial results into a `Vec` in one call.
//! 2. **Lazy**: [`LazySequence::scan`] wraps a (possibly infinite)
//!    re-iterable sequence and computes each partial result on demand,
//!    holding O(1) state per traversal.
//!
//! ## Usage Example
//!
//! ```
//! use scanfold::{lazy, LazySequence, ScanExt};
//!
//! // Eager: the whole result at once.
//! let totals = [1, 2, 3, 4, 5].scan_eager(0, |acc, x| acc + x);
//! assert_eq!(totals, [0, 1, 3, 6, 10, 15]);
//!
//! // Lazy: six values pulled from an infinite upstream.
//! let running = lazy(1..).scan(0, |acc, x| acc + x).prefix(6);
//! let six: Vec<i32> = running.fresh_iter().collect();
//! assert_eq!(six, [0, 1, 3, 6, 10, 15]);
//! ```

#![warn(missing_docs, missing_debug_implementations)]

// Core modules - the eager one-shot fold and the lazy adapter machinery
pub mod eager; // Materializing scan over finite inputs
pub mod lazy; // Lazy-sequence capability, scan adapter, prefix truncation

// Re-exports for convenience
pub use eager::{scan_eager, ScanExt};
pub use lazy::{lazy, Lazy, LazyScan, LazyScanIter, LazySequence, Prefix, PrefixIter};
