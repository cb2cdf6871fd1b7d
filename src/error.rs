use thiserror::Error;

/// Canonical result for the crate; used by the `try_*` operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Contract violations, surfaced as values instead of panics.
///
/// The primary API treats every one of these as a programmer error and
/// panics. The `try_*` counterparts return them so callers can recover.
/// There are no runtime/environment failures in this crate; allocation
/// failure aborts per the host allocator.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("range {start}..{end} out of bounds for length {len}")]
    RangeOutOfBounds { start: usize, end: usize, len: usize },

    #[error("{op} on an empty sequence")]
    Empty { op: &'static str },

    #[error("{what} size must be at least 1")]
    ZeroSize { what: &'static str },
}
