//! Convenient re-exports for downstream crates.

pub use crate::error::{Error, Result};
pub use crate::sequence::Sequence;
