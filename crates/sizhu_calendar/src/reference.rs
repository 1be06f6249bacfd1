//! Reference data seam: jieqi dates and lunar-year layouts.
//!
//! The calendar never computes astronomy itself. Every solar-term date and
//! lunar-month layout comes from a [`ReferenceData`] provider, injected by
//! the caller. [`crate::ReferenceTables`] is the text-file implementation.

use chrono::{Days, NaiveDate};
use sizhu_base::Jieqi;

use crate::error::CalendarError;

/// Layout of one lunar year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LunarYearInfo {
    /// Solar date of the first day of month 1 (正月初一).
    pub first_solar_day: NaiveDate,
    /// Day count of each month in order; 13 entries in a leap year.
    pub month_days: Vec<u32>,
    /// Traditional month number the leap month follows (闰月), if any.
    pub leap_month: Option<u8>,
}

impl LunarYearInfo {
    /// Number of months, 12 or 13.
    pub fn month_count(&self) -> u32 {
        self.month_days.len() as u32
    }

    pub fn total_days(&self) -> u32 {
        self.month_days.iter().sum()
    }

    /// Day count of ordinal month `month` (1-based), if it exists.
    pub fn days_in_month(&self, month: u32) -> Option<u32> {
        let idx = (month as usize).checked_sub(1)?;
        self.month_days.get(idx).copied()
    }

    /// Whether ordinal month `month` is the leap month.
    ///
    /// The leap month directly follows the month it repeats, so with
    /// `leap_month = Some(4)` the fifth ordinal month is 闰四月.
    pub fn is_leap_ordinal(&self, month: u32) -> bool {
        self.leap_month
            .is_some_and(|leap| month == u32::from(leap) + 1)
    }

    /// Traditional `(month number, is_leap)` label of ordinal month `month`.
    pub fn month_label(&self, month: u32) -> Option<(u32, bool)> {
        self.days_in_month(month)?;
        Some(match self.leap_month.map(u32::from) {
            Some(leap) if month == leap + 1 => (leap, true),
            Some(leap) if month > leap + 1 => (month - 1, false),
            _ => (month, false),
        })
    }

    /// Solar date of the first day of ordinal month `month`.
    pub fn month_start(&self, month: u32) -> Option<NaiveDate> {
        self.days_in_month(month)?;
        let before: u32 = self.month_days[..month as usize - 1].iter().sum();
        self.first_solar_day
            .checked_add_days(Days::new(u64::from(before)))
    }
}

/// Source of jieqi dates and lunar-year layouts.
///
/// Implementations answer for a contiguous span of years and return
/// [`CalendarError::DataRange`] outside it. Terms are keyed by Gregorian
/// year, so 小寒 and 大寒 of `year` fall in January of `year`.
pub trait ReferenceData: Send + Sync {
    /// Civil date of solar term `term` in Gregorian year `year`.
    fn jieqi_date(&self, year: i32, term: Jieqi) -> Result<NaiveDate, CalendarError>;

    /// Layout of the lunar year that starts in Gregorian year `year`.
    fn lunar_year_info(&self, year: i32) -> Result<LunarYearInfo, CalendarError>;
}
