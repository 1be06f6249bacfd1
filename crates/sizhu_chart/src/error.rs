//! Error types for chart construction.

use sizhu_calendar::CalendarError;
use thiserror::Error;

use crate::options::BaziPrecision;

/// Errors from building a birth record or chart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum BaziError {
    /// Input rejected before any derivation (range, format, timezone).
    #[error("validation error: {0}")]
    Validation(String),
    /// The requested precision is declared but not implemented.
    #[error("precision '{requested}' is not supported (supported: {supported})")]
    UnsupportedPrecision {
        requested: BaziPrecision,
        supported: BaziPrecision,
    },
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}
