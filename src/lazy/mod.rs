//! Lazy sequences and the lazy scan adapter
//!
//! Pull-based, caller-driven machinery:
//! - [`LazySequence`]: re-iterable capability, the compile-time
//!   laziness marker that keeps chained operations lazy
//! - [`LazyScan`]: scan adapter capturing (initial, source, combiner)
//! - [`LazyScanIter`]: per-traversal state machine, O(1) state per step
//! - [`Prefix`]: lazy truncation to a finite prefix

mod prefix;
mod scan;
mod sequence;

pub use prefix::{Prefix, PrefixIter};
pub use scan::{LazyScan, LazyScanIter};
pub use sequence::{lazy, Lazy, LazySequence};
