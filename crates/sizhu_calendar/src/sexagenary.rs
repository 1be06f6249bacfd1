//! Day pillars from the sexagenary day count.
//!
//! Days run through the 60-cycle without gaps, so one known 甲子 day fixes
//! every other day.

use chrono::{Datelike, NaiveDate};
use sizhu_base::Ganzhi;

use crate::date::{CalendarDate, CalendarKind};
use crate::error::CalendarError;
use crate::validate::is_valid_solar;

/// Day number (chrono's days from CE, 0001-01-01 = 1) of 2024-03-01, a 甲子 day.
pub const JIAZI_DAY_ANCHOR: i32 = 738_946;

/// Day pillar of a Gregorian date. Works for any date chrono can represent.
pub fn day_ganzhi(date: NaiveDate) -> Ganzhi {
    Ganzhi::from_cycle_index(i64::from(date.num_days_from_ce() - JIAZI_DAY_ANCHOR))
}

/// Day pillar of a solar calendar date within the supported range.
pub fn get_day_ganzhi(date: &CalendarDate) -> Result<Ganzhi, CalendarError> {
    date.expect_kind(CalendarKind::Solar)?;
    if !is_valid_solar(date)? {
        return Err(CalendarError::InvalidDate(*date));
    }
    Ok(day_ganzhi(date.to_naive_date()?))
}
