//! Integration tests for calendar conversions against the sample reference
//! tables (data/sample_reference.txt, Gregorian years 1980-2030).

use std::path::Path;

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use sizhu_base::{Jieqi, SEXAGENARY_CYCLE};
use sizhu_calendar::{
    CalendarDate, CalendarError, JIAZI_DAY_ANCHOR, LunarYearInfo, ReferenceData, ReferenceTables,
    day_ganzhi,
    days_in_ganzhi_year, ganzhi_to_solar, is_valid, lunar_to_solar, prev_jie, solar_to_ganzhi,
    solar_to_lunar, to_ganzhi,
};

fn sample_path() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data/sample_reference.txt")
}

fn load_sample() -> ReferenceTables {
    ReferenceTables::load(&sample_path()).expect("should load sample_reference.txt")
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ---------------------------------------------------------------------------
// Table contents
// ---------------------------------------------------------------------------

#[test]
fn sample_covers_1980_to_2030() {
    let t = load_sample();
    assert_eq!(t.year_range(), Some(1980..=2030));
}

#[test]
fn lichun_dates() {
    let t = load_sample();
    for year in [1984, 1998, 2000] {
        assert_eq!(t.jieqi_date(year, Jieqi::Lichun).unwrap(), ymd(year, 2, 4));
    }
    assert_eq!(t.jieqi_date(1998, Jieqi::Jingzhe).unwrap(), ymd(1998, 3, 6));
}

#[test]
fn lunar_new_years() {
    let t = load_sample();
    let cases = [
        (1983, ymd(1983, 2, 13), None),
        (1984, ymd(1984, 2, 2), Some(10)),
        (1998, ymd(1998, 1, 28), Some(5)),
        (2000, ymd(2000, 2, 5), None),
        (2001, ymd(2001, 1, 24), Some(4)),
        (2017, ymd(2017, 1, 28), Some(6)),
        (2023, ymd(2023, 1, 22), Some(2)),
        (2024, ymd(2024, 2, 10), None),
    ];
    for (year, first, leap) in cases {
        let info = t.lunar_year_info(year).unwrap();
        assert_eq!(info.first_solar_day, first, "{year}");
        assert_eq!(info.leap_month, leap, "{year}");
    }
}

#[test]
fn missing_file_is_io_error() {
    let err = ReferenceTables::load(Path::new("/nonexistent/sizhu.txt")).unwrap_err();
    assert!(matches!(err, CalendarError::Io(_)));
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

#[test]
fn year_1984_ganzhi_layout() {
    let t = load_sample();
    assert_eq!(
        days_in_ganzhi_year(&t, 1984).unwrap(),
        [30, 30, 31, 31, 32, 31, 31, 31, 30, 30, 29, 30]
    );
    assert_eq!(
        solar_to_ganzhi(&t, &CalendarDate::solar(1984, 4, 2)).unwrap(),
        CalendarDate::ganzhi(1984, 2, 29)
    );
}

#[test]
fn leap_month_1984() {
    let t = load_sample();
    // 闰十月 is the 11th ordinal month of 1984
    let start = lunar_to_solar(&t, &CalendarDate::lunar(1984, 11, 1)).unwrap();
    let back = solar_to_lunar(&t, &start).unwrap();
    assert_eq!(back, CalendarDate::lunar(1984, 11, 1));
}

#[test]
fn data_range_errors_inside_supported_range() {
    let t = load_sample();
    let d = CalendarDate::solar(1950, 6, 1);
    assert_eq!(
        solar_to_ganzhi(&t, &d),
        Err(CalendarError::DataRange { year: 1950 })
    );
    assert!(is_valid(&t, &d).unwrap());
}

/// Sample tables whose lunar years stop one year before the jieqi years.
struct LunarCapped {
    inner: ReferenceTables,
    last_lunar_year: i32,
}

impl ReferenceData for LunarCapped {
    fn jieqi_date(&self, year: i32, term: Jieqi) -> Result<NaiveDate, CalendarError> {
        self.inner.jieqi_date(year, term)
    }

    fn lunar_year_info(&self, year: i32) -> Result<LunarYearInfo, CalendarError> {
        if year > self.last_lunar_year {
            return Err(CalendarError::DataRange { year });
        }
        self.inner.lunar_year_info(year)
    }
}

#[test]
fn january_tail_of_last_lunar_year() {
    let t = LunarCapped {
        inner: load_sample(),
        last_lunar_year: 2029,
    };
    // lunar 2029 opens 2029-02-13 and runs 355 days, past 2030-01-15
    let solar = CalendarDate::solar(2030, 1, 15);
    let lunar = solar_to_lunar(&t, &solar).unwrap();
    assert_eq!(lunar, CalendarDate::lunar(2029, 12, 12));
    assert_eq!(lunar_to_solar(&t, &lunar).unwrap(), solar);
    assert_eq!(
        solar_to_lunar(&t, &CalendarDate::solar(2030, 2, 2)).unwrap(),
        CalendarDate::lunar(2029, 12, 30)
    );
    assert_eq!(
        solar_to_lunar(&t, &CalendarDate::solar(2030, 2, 3)),
        Err(CalendarError::DataRange { year: 2030 })
    );
}

#[test]
fn before_first_lunar_year_is_data_range() {
    let t = load_sample();
    assert_eq!(
        solar_to_lunar(&t, &CalendarDate::solar(1980, 1, 10)),
        Err(CalendarError::DataRange { year: 1979 })
    );
}

#[test]
fn jie_on_boundary_day() {
    let t = load_sample();
    assert_eq!(
        prev_jie(&t, ymd(2000, 2, 4)).unwrap(),
        (Jieqi::Lichun, ymd(2000, 2, 4))
    );
}

#[test]
fn day_anchor_sweep() {
    let anchor = ymd(2024, 3, 1);
    for k in 0..120u64 {
        let d = anchor.checked_add_days(Days::new(k)).unwrap();
        assert_eq!(day_ganzhi(d), SEXAGENARY_CYCLE[(k % 60) as usize]);
    }
    assert_eq!(
        chrono::Datelike::num_days_from_ce(&anchor),
        JIAZI_DAY_ANCHOR
    );
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

fn sample_date(offset: u64) -> NaiveDate {
    ymd(1981, 1, 1).checked_add_days(Days::new(offset)).unwrap()
}

proptest! {
    #[test]
    fn solar_ganzhi_round_trip(offset in 0u64..17_500) {
        let t = load_sample();
        let solar = CalendarDate::from_naive_date(sample_date(offset));
        let gz = solar_to_ganzhi(&t, &solar).unwrap();
        prop_assert!(is_valid(&t, &gz).unwrap());
        prop_assert_eq!(ganzhi_to_solar(&t, &gz).unwrap(), solar);
    }

    #[test]
    fn solar_lunar_round_trip(offset in 0u64..17_500) {
        let t = load_sample();
        let solar = CalendarDate::from_naive_date(sample_date(offset));
        let lunar = solar_to_lunar(&t, &solar).unwrap();
        prop_assert!(is_valid(&t, &lunar).unwrap());
        prop_assert_eq!(lunar_to_solar(&t, &lunar).unwrap(), solar);
        prop_assert_eq!(to_ganzhi(&t, &lunar).unwrap(), solar_to_ganzhi(&t, &solar).unwrap());
    }

    #[test]
    fn conversions_preserve_order(a in 0u64..17_500, b in 0u64..17_500) {
        let t = load_sample();
        let sa = CalendarDate::from_naive_date(sample_date(a));
        let sb = CalendarDate::from_naive_date(sample_date(b));
        let order = sa.try_cmp(&sb).unwrap();
        let ga = solar_to_ganzhi(&t, &sa).unwrap();
        let gb = solar_to_ganzhi(&t, &sb).unwrap();
        prop_assert_eq!(ga.try_cmp(&gb).unwrap(), order);
        let la = solar_to_lunar(&t, &sa).unwrap();
        let lb = solar_to_lunar(&t, &sb).unwrap();
        prop_assert_eq!(la.try_cmp(&lb).unwrap(), order);
        prop_assert!(sa.try_cmp(&ga).is_err());
    }

    #[test]
    fn day_pillar_period_is_60(offset in 0u64..1_000_000) {
        let d = ymd(1, 1, 1).checked_add_days(Days::new(offset)).unwrap();
        let later = d.checked_add_days(Days::new(60)).unwrap();
        prop_assert_eq!(day_ganzhi(d), day_ganzhi(later));
        prop_assert_ne!(day_ganzhi(d), day_ganzhi(d.checked_add_days(Days::new(1)).unwrap()));
    }
}
