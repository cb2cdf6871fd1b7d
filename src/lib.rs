#![forbid(unsafe_code)]
//! seqops: generic in-place sequence manipulation primitives.
//!
//! The library provides one type, [`Sequence`], a caller-owned, contiguous,
//! ordered collection, plus a set of small restructuring operations on it:
//! cut, delete, insert, expand, filter, batch, sliding window, sort+dedupe,
//! and predicate queries. Every operation is a single synchronous pass that
//! mutates the caller's storage directly, reusing capacity where possible and
//! reallocating only when it must.
//!
//! Design intent:
//! - Keep the crate pure and synchronous (no async, no I/O, no locking).
//! - Operations documented as *clearing* overwrite the slots they vacate
//!   with `T::default()` so dead storage does not retain ownership of
//!   payloads. The `*_no_clear` variants skip that step and are opt-in.
//! - Views (batches, windows) borrow the live region; the borrow checker
//!   prevents mutation of the source while views are held.
//! - Contract violations (out-of-range index, empty pop, zero-sized view)
//!   panic in the primary API. The `try_*` counterparts return `Result`
//!   instead, for callers who prefer to handle them.

pub mod error;
pub mod prelude;
pub mod sequence;

mod checked;
mod compact;
mod edit;
mod query;
mod views;

pub use error::{Error, Result};
pub use sequence::Sequence;
