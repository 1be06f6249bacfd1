//! Four-pillar derivation from a birth instant.
//!
//! The year and month pillars follow the ganzhi calendar (立春 opens the
//! year, each jie opens a month). The day pillar follows the sexagenary
//! day count, with the 子 hour starting at 23:00 on the previous civil
//! day. The hour pillar follows the day stem.

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use sizhu_base::{
    Dizhi, Ganzhi, Tiangan, find_hour_tiangan, find_month_tiangan, hour_dizhi, month_dizhi,
};
use sizhu_calendar::{
    CalendarDate, ReferenceData, day_ganzhi, is_valid_solar, solar_to_ganzhi, solar_to_lunar,
};
use tracing::debug;

use crate::error::BaziError;
use crate::options::{BaziGender, BaziPrecision};
use crate::pillars::FourPillars;

/// A birth record and its four pillars.
///
/// Immutable once built. Month and hour stems are recomputed from the
/// stored branches on each access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bazi {
    solar_datetime: NaiveDateTime,
    gender: BaziGender,
    precision: BaziPrecision,
    year_pillar: Ganzhi,
    month_dizhi: Dizhi,
    day_pillar: Ganzhi,
    hour_dizhi: Dizhi,
    ganzhi_date: CalendarDate,
    lunar_date: CalendarDate,
}

impl Bazi {
    /// Derive the pillars for a naive local birth time.
    ///
    /// Fails with `UnsupportedPrecision` for anything but day precision,
    /// `Validation` outside the supported solar range, and `Calendar`
    /// when the reference data does not cover the birth year.
    pub fn new(
        birth: NaiveDateTime,
        gender: BaziGender,
        precision: BaziPrecision,
        data: &dyn ReferenceData,
    ) -> Result<Self, BaziError> {
        if precision != BaziPrecision::Day {
            return Err(BaziError::UnsupportedPrecision {
                requested: precision,
                supported: BaziPrecision::Day,
            });
        }

        let solar = CalendarDate::from_naive_date(birth.date());
        if !is_valid_solar(&solar)? {
            return Err(BaziError::Validation(format!(
                "birth date {solar} is outside the supported range"
            )));
        }

        let ganzhi_date = solar_to_ganzhi(data, &solar)?;
        let lunar_date = solar_to_lunar(data, &solar)?;

        let year_pillar = Ganzhi::for_year(ganzhi_date.year);
        let month_dizhi = month_dizhi(ganzhi_date.month);
        let day_pillar = day_ganzhi(day_pillar_date(birth)?);
        let hour_dizhi = hour_dizhi(birth.hour());

        let bazi = Self {
            solar_datetime: birth,
            gender,
            precision,
            year_pillar,
            month_dizhi,
            day_pillar,
            hour_dizhi,
            ganzhi_date,
            lunar_date,
        };
        debug!(
            %birth,
            year = %bazi.year_pillar(),
            month = %bazi.month_pillar(),
            day = %bazi.day_pillar(),
            hour = %bazi.hour_pillar(),
            "derived pillars"
        );
        Ok(bazi)
    }

    pub fn solar_datetime(&self) -> NaiveDateTime {
        self.solar_datetime
    }

    pub fn solar_date(&self) -> CalendarDate {
        CalendarDate::from_naive_date(self.solar_datetime.date())
    }

    pub fn gender(&self) -> BaziGender {
        self.gender
    }

    pub fn precision(&self) -> BaziPrecision {
        self.precision
    }

    /// Ganzhi date of the birth (civil day, no 23:00 roll-over).
    pub fn ganzhi_date(&self) -> CalendarDate {
        self.ganzhi_date
    }

    /// Lunar date of the birth (civil day, no 23:00 roll-over).
    pub fn lunar_date(&self) -> CalendarDate {
        self.lunar_date
    }

    pub fn year_pillar(&self) -> Ganzhi {
        self.year_pillar
    }

    pub fn month_pillar(&self) -> Ganzhi {
        let tiangan = find_month_tiangan(self.year_pillar.tiangan, self.month_dizhi);
        Ganzhi::new(tiangan, self.month_dizhi)
    }

    pub fn day_pillar(&self) -> Ganzhi {
        self.day_pillar
    }

    pub fn hour_pillar(&self) -> Ganzhi {
        let tiangan = find_hour_tiangan(self.day_pillar.tiangan, self.hour_dizhi);
        Ganzhi::new(tiangan, self.hour_dizhi)
    }

    /// The day stem (日主).
    pub fn day_master(&self) -> Tiangan {
        self.day_pillar.tiangan
    }

    pub fn pillars(&self) -> FourPillars<Ganzhi> {
        FourPillars::new(
            self.year_pillar(),
            self.month_pillar(),
            self.day_pillar(),
            self.hour_pillar(),
        )
    }

    pub fn four_tiangans(&self) -> FourPillars<Tiangan> {
        self.pillars().map(|gz| gz.tiangan)
    }

    pub fn four_dizhis(&self) -> FourPillars<Dizhi> {
        self.pillars().map(|gz| gz.dizhi)
    }
}

/// Civil date whose sexagenary day the birth belongs to: the next day
/// from 23:00 on.
fn day_pillar_date(birth: NaiveDateTime) -> Result<NaiveDate, BaziError> {
    let date = birth.date();
    if birth.hour() < 23 {
        return Ok(date);
    }
    date.succ_opt().ok_or_else(|| {
        BaziError::Validation(format!("no day after {}", date.format("%Y-%m-%d")))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{at, sample_tables};
    use sizhu_base::Jieqi;
    use sizhu_calendar::{CalendarError, LunarYearInfo, ReferenceTables};

    /// Lunar layouts end at `last_lunar_year`; jieqi dates are untouched.
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

    fn strings(b: &Bazi) -> Vec<String> {
        b.pillars().iter().map(|gz| gz.to_string()).collect()
    }

    #[test]
    fn chart_1984() {
        let t = sample_tables();
        let b = Bazi::new(at(1984, 4, 2, 4, 2), BaziGender::Male, BaziPrecision::Day, &t).unwrap();
        assert_eq!(strings(&b), vec!["甲子", "丁卯", "丙寅", "庚寅"]);
        assert_eq!(b.day_master(), Tiangan::Bing);
        assert_eq!(b.ganzhi_date(), CalendarDate::ganzhi(1984, 2, 29));
        assert_eq!(b.lunar_date(), CalendarDate::lunar(1984, 3, 2));
    }

    #[test]
    fn lichun_day_opens_new_year() {
        let t = sample_tables();
        let b = Bazi::new(at(2000, 2, 4, 22, 1), BaziGender::Female, BaziPrecision::Day, &t).unwrap();
        assert_eq!(strings(&b), vec!["庚辰", "戊寅", "壬辰", "辛亥"]);
        let before = Bazi::new(at(2000, 2, 3, 12, 0), BaziGender::Female, BaziPrecision::Day, &t).unwrap();
        assert_eq!(before.year_pillar().to_string(), "己卯");
        assert_eq!(before.month_pillar().to_string(), "丁丑");
    }

    #[test]
    fn late_zi_hour_rolls_day() {
        let t = sample_tables();
        let b = Bazi::new(at(1998, 3, 17, 22, 59), BaziGender::Male, BaziPrecision::Day, &t).unwrap();
        assert_eq!(b.day_pillar().to_string(), "癸亥");
        assert_eq!(b.hour_pillar().to_string(), "癸亥");
        let b = Bazi::new(at(1998, 3, 17, 23, 0), BaziGender::Male, BaziPrecision::Day, &t).unwrap();
        assert_eq!(b.day_pillar().to_string(), "甲子");
        assert_eq!(b.hour_pillar().to_string(), "甲子");
        // the calendar dates stay on the civil day
        assert_eq!(b.solar_date(), CalendarDate::solar(1998, 3, 17));
        assert_eq!(b.ganzhi_date(), CalendarDate::ganzhi(1998, 2, 12));
    }

    #[test]
    fn unsupported_precision() {
        let t = sample_tables();
        for p in [BaziPrecision::Hour, BaziPrecision::Minute] {
            assert_eq!(
                Bazi::new(at(1998, 3, 17, 12, 0), BaziGender::Male, p, &t),
                Err(BaziError::UnsupportedPrecision {
                    requested: p,
                    supported: BaziPrecision::Day,
                })
            );
        }
    }

    #[test]
    fn out_of_range_birth() {
        let t = sample_tables();
        let err = Bazi::new(at(1901, 2, 18, 12, 0), BaziGender::Male, BaziPrecision::Day, &t)
            .unwrap_err();
        assert!(matches!(err, BaziError::Validation(_)));
        let err = Bazi::new(at(1950, 6, 1, 12, 0), BaziGender::Male, BaziPrecision::Day, &t)
            .unwrap_err();
        assert!(matches!(err, BaziError::Calendar(_)));
    }

    #[test]
    fn accessors_agree() {
        let t = sample_tables();
        let b = Bazi::new(at(2023, 8, 19, 9, 30), BaziGender::Female, BaziPrecision::Day, &t).unwrap();
        let pillars = b.pillars();
        let tgs = b.four_tiangans();
        let dzs = b.four_dizhis();
        for ((gz, tg), dz) in pillars.iter().zip(tgs.iter()).zip(dzs.iter()) {
            assert_eq!(gz.tiangan, *tg);
            assert_eq!(gz.dizhi, *dz);
            assert!(gz.is_cycle_member());
        }
    }

    #[test]
    fn birth_in_january_tail_of_last_lunar_year() {
        let t = LunarCapped {
            inner: sample_tables(),
            last_lunar_year: 2029,
        };
        let b = Bazi::new(at(2030, 1, 15, 12, 0), BaziGender::Male, BaziPrecision::Day, &t).unwrap();
        assert_eq!(b.lunar_date(), CalendarDate::lunar(2029, 12, 12));
        assert_eq!(b.year_pillar().to_string(), "己酉");
        assert_eq!(b.month_pillar().to_string(), "丁丑");
    }
}
