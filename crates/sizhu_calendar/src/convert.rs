//! Conversions between the solar, lunar and ganzhi calendars, plus jieqi
//! lookups around a solar date.
//!
//! A ganzhi year runs from 立春 to the day before the next 立春. Its twelve
//! months open on the twelve jie: 立春, 惊蛰, .. 大雪 of the same Gregorian
//! year, then 小寒 of the next.

use chrono::{Datelike, Days, NaiveDate};
use sizhu_base::{ALL_JIEQIS, JIE, Jieqi};
use tracing::trace;

use crate::date::{CalendarDate, CalendarKind};
use crate::error::CalendarError;
use crate::reference::{LunarYearInfo, ReferenceData};
use crate::validate::ensure_valid;

// ---------------------------------------------------------------------------
// Ganzhi calendar
// ---------------------------------------------------------------------------

/// Ganzhi year containing `date`: its Gregorian year from 立春 on, the
/// previous year before.
pub fn ganzhi_year_of(data: &dyn ReferenceData, date: NaiveDate) -> Result<i32, CalendarError> {
    let year = date.year();
    let lichun = data.jieqi_date(year, Jieqi::Lichun)?;
    Ok(if date >= lichun { year } else { year - 1 })
}

/// Opening dates of the twelve months of ganzhi year `year`, followed by
/// the 立春 that opens the next year.
pub fn ganzhi_month_starts(
    data: &dyn ReferenceData,
    year: i32,
) -> Result<[NaiveDate; 13], CalendarError> {
    let mut starts = [NaiveDate::MIN; 13];
    for (slot, jie) in starts.iter_mut().zip(JIE) {
        let table_year = if jie.is_january_term() { year + 1 } else { year };
        *slot = data.jieqi_date(table_year, jie)?;
    }
    starts[12] = data.jieqi_date(year + 1, Jieqi::Lichun)?;
    Ok(starts)
}

/// Day count of each month of ganzhi year `year`.
pub fn days_in_ganzhi_year(data: &dyn ReferenceData, year: i32) -> Result<[u32; 12], CalendarError> {
    let starts = ganzhi_month_starts(data, year)?;
    let mut days = [0u32; 12];
    for (i, d) in days.iter_mut().enumerate() {
        *d = (starts[i + 1] - starts[i]).num_days() as u32;
    }
    Ok(days)
}

/// Ganzhi date of a solar date.
pub fn solar_to_ganzhi(
    data: &dyn ReferenceData,
    date: &CalendarDate,
) -> Result<CalendarDate, CalendarError> {
    date.expect_kind(CalendarKind::Solar)?;
    ensure_valid(data, date)?;
    let solar = date.to_naive_date()?;

    let year = ganzhi_year_of(data, solar)?;
    let starts = ganzhi_month_starts(data, year)?;
    let month = starts[..12]
        .iter()
        .rposition(|start| *start <= solar)
        .ok_or(CalendarError::InvalidDate(*date))?;
    let day = (solar - starts[month]).num_days() as u32 + 1;

    let out = CalendarDate::ganzhi(year, month as u32 + 1, day);
    trace!(%date, %out, "solar to ganzhi");
    Ok(out)
}

/// Solar date of a ganzhi date.
pub fn ganzhi_to_solar(
    data: &dyn ReferenceData,
    date: &CalendarDate,
) -> Result<CalendarDate, CalendarError> {
    date.expect_kind(CalendarKind::Ganzhi)?;
    ensure_valid(data, date)?;

    let starts = ganzhi_month_starts(data, date.year)?;
    let solar = starts[date.month as usize - 1]
        .checked_add_days(Days::new(u64::from(date.day - 1)))
        .ok_or(CalendarError::InvalidDate(*date))?;
    Ok(CalendarDate::from_naive_date(solar))
}

// ---------------------------------------------------------------------------
// Lunar calendar
// ---------------------------------------------------------------------------

/// Solar date of a lunar date: whole months before it plus `day − 1` days,
/// counted from the lunar year's first solar day.
pub fn lunar_to_solar(
    data: &dyn ReferenceData,
    date: &CalendarDate,
) -> Result<CalendarDate, CalendarError> {
    date.expect_kind(CalendarKind::Lunar)?;
    ensure_valid(data, date)?;

    let info = data.lunar_year_info(date.year)?;
    let solar = info
        .month_start(date.month)
        .and_then(|start| start.checked_add_days(Days::new(u64::from(date.day - 1))))
        .ok_or(CalendarError::InvalidDate(*date))?;
    Ok(CalendarDate::from_naive_date(solar))
}

/// Lunar year containing `solar`, with its layout.
///
/// A lunar year opens in January or February, so the candidates are the
/// previous Gregorian year and this one. The previous year is asked first;
/// the current one is only needed once `solar` is past its end, so data
/// that stops a year short still covers the January tail.
fn lunar_year_containing(
    data: &dyn ReferenceData,
    solar: NaiveDate,
) -> Result<(i32, LunarYearInfo), CalendarError> {
    let year = solar.year();
    match data.lunar_year_info(year - 1) {
        Ok(prev) => {
            let end = prev
                .first_solar_day
                .checked_add_days(Days::new(u64::from(prev.total_days())));
            if end.is_some_and(|end| solar < end) {
                return Ok((year - 1, prev));
            }
        }
        Err(CalendarError::DataRange { .. }) => {}
        Err(e) => return Err(e),
    }
    let info = data.lunar_year_info(year)?;
    if solar < info.first_solar_day {
        return Err(CalendarError::DataRange { year: year - 1 });
    }
    Ok((year, info))
}

/// Lunar date of a solar date.
pub fn solar_to_lunar(
    data: &dyn ReferenceData,
    date: &CalendarDate,
) -> Result<CalendarDate, CalendarError> {
    date.expect_kind(CalendarKind::Solar)?;
    ensure_valid(data, date)?;
    let solar = date.to_naive_date()?;

    let (year, info) = lunar_year_containing(data, solar)?;
    let mut offset = (solar - info.first_solar_day).num_days() as u32;
    for (i, days) in info.month_days.iter().enumerate() {
        if offset < *days {
            let out = CalendarDate::lunar(year, i as u32 + 1, offset + 1);
            trace!(%date, %out, "solar to lunar");
            return Ok(out);
        }
        offset -= days;
    }
    Err(CalendarError::InvalidDate(*date))
}

/// Number of months (12 or 13) in lunar year `year`.
pub fn lunar_month_count(data: &dyn ReferenceData, year: i32) -> Result<u32, CalendarError> {
    Ok(data.lunar_year_info(year)?.month_count())
}

/// Day count of ordinal month `month` of lunar year `year`, `None` when
/// the year has no such month.
pub fn days_in_lunar_month(
    data: &dyn ReferenceData,
    year: i32,
    month: u32,
) -> Result<Option<u32>, CalendarError> {
    Ok(data.lunar_year_info(year)?.days_in_month(month))
}

/// Whether ordinal month `month` of lunar year `year` is its leap month.
pub fn is_leap_lunar_month(
    data: &dyn ReferenceData,
    year: i32,
    month: u32,
) -> Result<bool, CalendarError> {
    Ok(data.lunar_year_info(year)?.is_leap_ordinal(month))
}

// ---------------------------------------------------------------------------
// Any kind
// ---------------------------------------------------------------------------

/// Convert a date of any kind to the solar calendar. Solar dates are
/// validated and returned as-is.
pub fn to_solar(data: &dyn ReferenceData, date: &CalendarDate) -> Result<CalendarDate, CalendarError> {
    match date.kind {
        CalendarKind::Solar => {
            ensure_valid(data, date)?;
            Ok(*date)
        }
        CalendarKind::Lunar => lunar_to_solar(data, date),
        CalendarKind::Ganzhi => ganzhi_to_solar(data, date),
    }
}

/// Convert a date of any kind to the lunar calendar.
pub fn to_lunar(data: &dyn ReferenceData, date: &CalendarDate) -> Result<CalendarDate, CalendarError> {
    match date.kind {
        CalendarKind::Lunar => {
            ensure_valid(data, date)?;
            Ok(*date)
        }
        _ => solar_to_lunar(data, &to_solar(data, date)?),
    }
}

/// Convert a date of any kind to the ganzhi calendar.
pub fn to_ganzhi(data: &dyn ReferenceData, date: &CalendarDate) -> Result<CalendarDate, CalendarError> {
    match date.kind {
        CalendarKind::Ganzhi => {
            ensure_valid(data, date)?;
            Ok(*date)
        }
        _ => solar_to_ganzhi(data, &to_solar(data, date)?),
    }
}

// ---------------------------------------------------------------------------
// Jieqi lookups
// ---------------------------------------------------------------------------

/// The twelve jie dated within Gregorian year `year`, in date order
/// (小寒 first).
fn jie_in_gregorian_year(
    data: &dyn ReferenceData,
    year: i32,
) -> Result<Vec<(Jieqi, NaiveDate)>, CalendarError> {
    let mut out = JIE
        .iter()
        .map(|jie| Ok((*jie, data.jieqi_date(year, *jie)?)))
        .collect::<Result<Vec<_>, CalendarError>>()?;
    out.sort_by_key(|(_, d)| *d);
    Ok(out)
}

/// The latest month-opening jie on or before `date`.
pub fn prev_jie(data: &dyn ReferenceData, date: NaiveDate) -> Result<(Jieqi, NaiveDate), CalendarError> {
    let year = date.year();
    let found = jie_in_gregorian_year(data, year)?
        .into_iter()
        .rev()
        .find(|(_, d)| *d <= date);
    match found {
        Some(hit) => Ok(hit),
        None => Ok((Jieqi::Daxue, data.jieqi_date(year - 1, Jieqi::Daxue)?)),
    }
}

/// The earliest month-opening jie strictly after `date`.
pub fn next_jie(data: &dyn ReferenceData, date: NaiveDate) -> Result<(Jieqi, NaiveDate), CalendarError> {
    let year = date.year();
    let found = jie_in_gregorian_year(data, year)?
        .into_iter()
        .find(|(_, d)| *d > date);
    match found {
        Some(hit) => Ok(hit),
        None => Ok((Jieqi::Xiaohan, data.jieqi_date(year + 1, Jieqi::Xiaohan)?)),
    }
}

/// All 24 terms of Gregorian year `year` in term order (立春 .. 大寒).
/// 小寒 and 大寒 are the January terms of `year`.
pub fn jieqi_of_year(
    data: &dyn ReferenceData,
    year: i32,
) -> Result<Vec<(Jieqi, NaiveDate)>, CalendarError> {
    ALL_JIEQIS
        .iter()
        .map(|term| Ok((*term, data.jieqi_date(year, *term)?)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_tables;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn ganzhi_year_1984_lengths() {
        let t = sample_tables();
        assert_eq!(
            days_in_ganzhi_year(&t, 1984).unwrap(),
            [30, 30, 31, 31, 32, 31, 31, 31, 30, 30, 29, 30]
        );
        let total: u32 = days_in_ganzhi_year(&t, 1984).unwrap().iter().sum();
        assert_eq!(total, 366);
    }

    #[test]
    fn solar_to_ganzhi_1984() {
        let t = sample_tables();
        let gz = solar_to_ganzhi(&t, &CalendarDate::solar(1984, 4, 2)).unwrap();
        assert_eq!(gz, CalendarDate::ganzhi(1984, 2, 29));
        assert_eq!(ganzhi_to_solar(&t, &gz).unwrap(), CalendarDate::solar(1984, 4, 2));
    }

    #[test]
    fn lichun_boundary() {
        let t = sample_tables();
        assert_eq!(
            solar_to_ganzhi(&t, &CalendarDate::solar(2000, 2, 4)).unwrap(),
            CalendarDate::ganzhi(2000, 1, 1)
        );
        let before = solar_to_ganzhi(&t, &CalendarDate::solar(2000, 2, 3)).unwrap();
        assert_eq!((before.year, before.month), (1999, 12));
    }

    #[test]
    fn lunar_round_trip() {
        let t = sample_tables();
        let lunar = solar_to_lunar(&t, &CalendarDate::solar(1984, 2, 2)).unwrap();
        assert_eq!(lunar, CalendarDate::lunar(1984, 1, 1));
        // 1984 lunar year still runs on 1985-01-31
        let lunar = solar_to_lunar(&t, &CalendarDate::solar(1985, 1, 31)).unwrap();
        assert_eq!(lunar.year, 1984);
        assert_eq!(lunar_to_solar(&t, &lunar).unwrap(), CalendarDate::solar(1985, 1, 31));
        assert_eq!(
            lunar_to_solar(&t, &CalendarDate::lunar(1984, 3, 2)).unwrap(),
            CalendarDate::solar(1984, 4, 2)
        );
    }

    #[test]
    fn conversions_reject_wrong_kind() {
        let t = sample_tables();
        assert!(matches!(
            solar_to_lunar(&t, &CalendarDate::lunar(1984, 1, 1)),
            Err(CalendarError::WrongKind { .. })
        ));
        assert!(matches!(
            lunar_to_solar(&t, &CalendarDate::lunar(1984, 2, 30)),
            Err(CalendarError::InvalidDate(_))
        ));
    }

    #[test]
    fn generic_conversions() {
        let t = sample_tables();
        let lunar = CalendarDate::lunar(1984, 3, 2);
        assert_eq!(to_ganzhi(&t, &lunar).unwrap(), CalendarDate::ganzhi(1984, 2, 29));
        assert_eq!(to_lunar(&t, &CalendarDate::ganzhi(1984, 2, 29)).unwrap(), lunar);
        assert_eq!(to_solar(&t, &CalendarDate::solar(1984, 4, 2)).unwrap(), CalendarDate::solar(1984, 4, 2));
    }

    #[test]
    fn lunar_helpers() {
        let t = sample_tables();
        assert_eq!(lunar_month_count(&t, 1984).unwrap(), 13);
        assert_eq!(lunar_month_count(&t, 2000).unwrap(), 12);
        assert_eq!(days_in_lunar_month(&t, 2000, 1).unwrap(), Some(30));
        assert_eq!(days_in_lunar_month(&t, 2000, 13).unwrap(), None);
        assert!(is_leap_lunar_month(&t, 1984, 11).unwrap());
        assert!(!is_leap_lunar_month(&t, 2000, 11).unwrap());
    }

    #[test]
    fn jie_around_dates() {
        let t = sample_tables();
        assert_eq!(prev_jie(&t, ymd(1984, 4, 2)).unwrap(), (Jieqi::Jingzhe, ymd(1984, 3, 5)));
        assert_eq!(next_jie(&t, ymd(1984, 4, 2)).unwrap(), (Jieqi::Qingming, ymd(1984, 4, 4)));
        // on the jie day itself
        assert_eq!(prev_jie(&t, ymd(1984, 4, 4)).unwrap(), (Jieqi::Qingming, ymd(1984, 4, 4)));
        assert_eq!(next_jie(&t, ymd(1984, 4, 4)).unwrap().0, Jieqi::Lixia);
        // crossing Gregorian years
        assert_eq!(prev_jie(&t, ymd(1985, 1, 2)).unwrap(), (Jieqi::Daxue, ymd(1984, 12, 7)));
        assert_eq!(next_jie(&t, ymd(1984, 12, 20)).unwrap(), (Jieqi::Xiaohan, ymd(1985, 1, 5)));
    }

    #[test]
    fn all_terms_of_year() {
        let t = sample_tables();
        let terms = jieqi_of_year(&t, 1998).unwrap();
        assert_eq!(terms.len(), 24);
        assert_eq!(terms[0], (Jieqi::Lichun, ymd(1998, 2, 4)));
        assert_eq!(terms[2], (Jieqi::Jingzhe, ymd(1998, 3, 6)));
        assert_eq!(terms[22], (Jieqi::Xiaohan, ymd(1998, 1, 5)));
    }
}
