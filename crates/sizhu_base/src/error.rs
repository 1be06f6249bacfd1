//! Error types for sexagenary primitives.

use thiserror::Error;

/// Errors from stem/branch/term construction and parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum BaseError {
    /// Index outside `0..len` for the symbol family.
    #[error("{kind} index {index} out of range 0..{len}")]
    IndexOutOfRange {
        kind: &'static str,
        index: usize,
        len: usize,
    },
    /// Text that does not name any member of the symbol family.
    #[error("cannot parse '{input}' as {kind}")]
    Parse { kind: &'static str, input: String },
}

impl BaseError {
    pub(crate) fn parse(kind: &'static str, input: &str) -> Self {
        Self::Parse {
            kind,
            input: input.to_string(),
        }
    }
}
