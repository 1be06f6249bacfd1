//! Calendar date model shared by the solar, lunar and ganzhi calendars.
//!
//! A [`CalendarDate`] is a plain `(year, month, day, kind)` record. It is
//! not validated at construction; use the functions in [`crate::validate`].
//! Dates only order against dates of the same kind.
//!
//! Month and day meaning per kind:
//! - Solar: Gregorian month 1..=12 and day of month.
//! - Lunar: ordinal month within the lunar year (1..=13 in a leap year),
//!   day 1..=30.
//! - Ganzhi: month 1..=12 counted from the 寅 month opened by 立春, day
//!   counted from the opening jie of that month.

use std::cmp::Ordering;
use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::error::CalendarError;

/// Which calendar a date is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CalendarKind {
    Solar,
    Lunar,
    Ganzhi,
}

pub const ALL_CALENDAR_KINDS: [CalendarKind; 3] =
    [CalendarKind::Solar, CalendarKind::Lunar, CalendarKind::Ganzhi];

impl CalendarKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Solar => "solar",
            Self::Lunar => "lunar",
            Self::Ganzhi => "ganzhi",
        }
    }

    pub const fn hanzi(self) -> &'static str {
        match self {
            Self::Solar => "公历",
            Self::Lunar => "农历",
            Self::Ganzhi => "干支历",
        }
    }
}

impl fmt::Display for CalendarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A date in one of the three calendars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub kind: CalendarKind,
}

/// Earliest supported solar date.
pub const MIN_SOLAR: CalendarDate = CalendarDate::solar(1901, 2, 19);
/// Latest supported solar date.
pub const MAX_SOLAR: CalendarDate = CalendarDate::solar(2100, 2, 3);
/// Lunar image of [`MIN_SOLAR`].
pub const MIN_LUNAR: CalendarDate = CalendarDate::lunar(1901, 1, 1);
/// Lunar image of [`MAX_SOLAR`].
pub const MAX_LUNAR: CalendarDate = CalendarDate::lunar(2099, 13, 25);
/// Ganzhi image of [`MIN_SOLAR`].
pub const MIN_GANZHI: CalendarDate = CalendarDate::ganzhi(1901, 1, 16);
/// Ganzhi image of [`MAX_SOLAR`].
pub const MAX_GANZHI: CalendarDate = CalendarDate::ganzhi(2099, 12, 30);

impl CalendarDate {
    pub const fn new(year: i32, month: u32, day: u32, kind: CalendarKind) -> Self {
        Self {
            year,
            month,
            day,
            kind,
        }
    }

    pub const fn solar(year: i32, month: u32, day: u32) -> Self {
        Self::new(year, month, day, CalendarKind::Solar)
    }

    pub const fn lunar(year: i32, month: u32, day: u32) -> Self {
        Self::new(year, month, day, CalendarKind::Lunar)
    }

    pub const fn ganzhi(year: i32, month: u32, day: u32) -> Self {
        Self::new(year, month, day, CalendarKind::Ganzhi)
    }

    /// Solar date from a chrono date.
    pub fn from_naive_date(date: NaiveDate) -> Self {
        Self::solar(date.year(), date.month(), date.day())
    }

    /// Chrono date of a solar date.
    ///
    /// Fails with `WrongKind` for lunar/ganzhi dates and `InvalidDate` when
    /// the fields do not name a Gregorian day.
    pub fn to_naive_date(&self) -> Result<NaiveDate, CalendarError> {
        self.expect_kind(CalendarKind::Solar)?;
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .ok_or(CalendarError::InvalidDate(*self))
    }

    pub(crate) fn expect_kind(&self, expected: CalendarKind) -> Result<(), CalendarError> {
        if self.kind == expected {
            Ok(())
        } else {
            Err(CalendarError::WrongKind {
                expected,
                found: self.kind,
            })
        }
    }

    /// Total order between dates of the same kind.
    pub fn try_cmp(&self, other: &Self) -> Result<Ordering, CalendarError> {
        if self.kind != other.kind {
            return Err(CalendarError::CrossKindComparison {
                left: self.kind,
                right: other.kind,
            });
        }
        Ok((self.year, self.month, self.day).cmp(&(other.year, other.month, other.day)))
    }

    /// Equality between dates of the same kind.
    pub fn try_eq(&self, other: &Self) -> Result<bool, CalendarError> {
        self.try_cmp(other).map(|o| o == Ordering::Equal)
    }

    /// Earliest supported date of `kind`.
    pub const fn min_supported(kind: CalendarKind) -> Self {
        match kind {
            CalendarKind::Solar => MIN_SOLAR,
            CalendarKind::Lunar => MIN_LUNAR,
            CalendarKind::Ganzhi => MIN_GANZHI,
        }
    }

    /// Latest supported date of `kind`.
    pub const fn max_supported(kind: CalendarKind) -> Self {
        match kind {
            CalendarKind::Solar => MAX_SOLAR,
            CalendarKind::Lunar => MAX_LUNAR,
            CalendarKind::Ganzhi => MAX_GANZHI,
        }
    }

    /// Whether the date lies within the supported range of its kind.
    pub fn in_supported_range(&self) -> bool {
        let min = Self::min_supported(self.kind);
        let max = Self::max_supported(self.kind);
        matches!(self.try_cmp(&min), Ok(Ordering::Greater | Ordering::Equal))
            && matches!(self.try_cmp(&max), Ok(Ordering::Less | Ordering::Equal))
    }
}

/// `None` across kinds.
impl PartialOrd for CalendarDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.try_cmp(other).ok()
    }
}

/// Renders as `solar 1984-04-02`.
impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:04}-{:02}-{:02}",
            self.kind, self.year, self.month, self.day
        )
    }
}
