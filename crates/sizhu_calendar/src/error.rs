//! Error types for calendar validation, conversion and table loading.

use thiserror::Error;

use crate::date::{CalendarDate, CalendarKind};

/// Errors from the calendar model or the reference tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CalendarError {
    /// Ordering or equality requested between dates of different kinds.
    #[error("cannot compare a {left} date with a {right} date")]
    CrossKindComparison {
        left: CalendarKind,
        right: CalendarKind,
    },
    /// The reference data has no entry for this year.
    #[error("year {year} is outside the reference data range")]
    DataRange { year: i32 },
    /// The date is outside the supported range or does not exist.
    #[error("invalid date: {0}")]
    InvalidDate(CalendarDate),
    /// An operation received a date of the wrong calendar kind.
    #[error("expected a {expected} date, found a {found} date")]
    WrongKind {
        expected: CalendarKind,
        found: CalendarKind,
    },
    /// Reference table text is malformed.
    #[error("reference table parse error: {0}")]
    TableParse(String),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for CalendarError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
