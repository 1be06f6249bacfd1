//! Date validity per calendar kind.
//!
//! Each validator checks, in order: the kind tag, the supported range, and
//! the structure of the date (month count and month lengths). They return
//! `Ok(false)` for an illegal date and `Err` only when the reference data
//! cannot answer for an in-range year.

use chrono::NaiveDate;

use crate::convert::days_in_ganzhi_year;
use crate::date::{CalendarDate, CalendarKind};
use crate::error::CalendarError;
use crate::reference::ReferenceData;

/// Whether `date` is a supported Gregorian date.
///
/// Needs no reference data; the `Result` keeps the validator signatures
/// uniform.
pub fn is_valid_solar(date: &CalendarDate) -> Result<bool, CalendarError> {
    if date.kind != CalendarKind::Solar || !date.in_supported_range() {
        return Ok(false);
    }
    Ok(NaiveDate::from_ymd_opt(date.year, date.month, date.day).is_some())
}

/// Whether `date` is a supported lunar date.
pub fn is_valid_lunar(data: &dyn ReferenceData, date: &CalendarDate) -> Result<bool, CalendarError> {
    if date.kind != CalendarKind::Lunar || !date.in_supported_range() {
        return Ok(false);
    }
    let info = data.lunar_year_info(date.year)?;
    Ok(date.day >= 1
        && info
            .days_in_month(date.month)
            .is_some_and(|days| date.day <= days))
}

/// Whether `date` is a supported ganzhi date.
pub fn is_valid_ganzhi(data: &dyn ReferenceData, date: &CalendarDate) -> Result<bool, CalendarError> {
    if date.kind != CalendarKind::Ganzhi || !date.in_supported_range() {
        return Ok(false);
    }
    if !(1..=12).contains(&date.month) || date.day < 1 {
        return Ok(false);
    }
    let days = days_in_ganzhi_year(data, date.year)?;
    Ok(date.day <= days[date.month as usize - 1])
}

/// Validate `date` according to its own kind.
pub fn is_valid(data: &dyn ReferenceData, date: &CalendarDate) -> Result<bool, CalendarError> {
    match date.kind {
        CalendarKind::Solar => is_valid_solar(date),
        CalendarKind::Lunar => is_valid_lunar(data, date),
        CalendarKind::Ganzhi => is_valid_ganzhi(data, date),
    }
}

/// `Ok(())` for a valid date, `InvalidDate` otherwise.
pub(crate) fn ensure_valid(
    data: &dyn ReferenceData,
    date: &CalendarDate,
) -> Result<(), CalendarError> {
    if is_valid(data, date)? {
        Ok(())
    } else {
        Err(CalendarError::InvalidDate(*date))
    }
}
