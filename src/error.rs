//! Typed construction-time error taxonomy (§7).
//!
//! `Unroutable` is deliberately absent: a failed route is not a hard error
//! (§7) — the owning `TextPath` simply emits no cells, logged at `debug`.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TextDrawError {
    #[error("invalid style string: {0:?}")]
    InvalidStyle(String),

    #[error("start or end point lies outside the routing bounding box")]
    OutOfBbox,

    #[error("weight must be non-negative")]
    NegativeWeight,

    #[error("bend penalty must be non-negative")]
    NegativeBendPenalty,

    #[error("path reuse graph contains a cycle")]
    CyclicPathReuse,
}

#[cfg(test)]
#[path = "../tests/rust/test_error.rs"]
mod tests;
