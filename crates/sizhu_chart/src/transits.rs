//! Luck pillars: decade (大运), childhood (小运) and annual (流年) sequences.
//!
//! All three are sexagenary steps from a natal pillar. The decade and
//! childhood pillars move forward or backward depending on the year stem's
//! polarity and the chart owner's gender.

use std::fmt;

use chrono::{Months, NaiveDate};
use sizhu_base::{Ganzhi, Jieqi, Yinyang};
use sizhu_calendar::{ReferenceData, ganzhi_year_of, next_jie, prev_jie};
use tracing::debug;

use crate::bazi::Bazi;
use crate::error::BaziError;
use crate::options::BaziGender;

/// Days of distance to the bounding jie that count as one year of age.
pub const DAYS_PER_LUCK_YEAR: u32 = 3;
/// Months of age that one remaining day counts for.
pub const MONTHS_PER_LUCK_DAY: u32 = 4;
/// Years covered by one decade pillar.
pub const DAYUN_SPAN_YEARS: i32 = 10;

/// Which way the luck pillars step through the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LuckDirection {
    Forward,
    Backward,
}

impl LuckDirection {
    pub const fn step(self) -> i32 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    pub const fn hanzi(self) -> &'static str {
        match self {
            Self::Forward => "顺行",
            Self::Backward => "逆行",
        }
    }
}

impl fmt::Display for LuckDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
        })
    }
}

/// Forward for a yang year stem and a male owner, or a yin year stem and
/// a female owner.
pub fn luck_direction(bazi: &Bazi) -> LuckDirection {
    match (bazi.year_pillar().tiangan.yinyang(), bazi.gender()) {
        (Yinyang::Yang, BaziGender::Male) | (Yinyang::Yin, BaziGender::Female) => {
            LuckDirection::Forward
        }
        _ => LuckDirection::Backward,
    }
}

/// One annual pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Liunian {
    pub ganzhi_year: i32,
    pub ganzhi: Ganzhi,
}

/// One childhood pillar, keyed by nominal age (虚岁, 1 in the birth year).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Xiaoyun {
    pub xusui: u32,
    pub ganzhi: Ganzhi,
}

/// One decade pillar and the ganzhi year it takes over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dayun {
    pub start_ganzhi_year: i32,
    pub ganzhi: Ganzhi,
}

/// When the first decade pillar begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayunStart {
    pub direction: LuckDirection,
    /// The jie that bounds the count.
    pub jie: Jieqi,
    pub jie_date: NaiveDate,
    /// Whole days between the birth date and `jie_date`.
    pub days: u32,
    pub years: u32,
    pub months: u32,
    /// Birth date advanced by `years` and `months`.
    pub start_date: NaiveDate,
    pub ganzhi_year: i32,
}

impl DayunStart {
    /// Nominal age in the first decade pillar's ganzhi year.
    pub fn start_xusui(&self, bazi: &Bazi) -> i32 {
        self.ganzhi_year - bazi.ganzhi_date().year + 1
    }
}

/// Annual pillars from the birth's ganzhi year on.
pub fn liunian(bazi: &Bazi) -> impl Iterator<Item = Liunian> + use<> {
    let first = bazi.ganzhi_date().year;
    (0..).map(move |k| {
        let ganzhi_year = first + k;
        Liunian {
            ganzhi_year,
            ganzhi: Ganzhi::for_year(ganzhi_year),
        }
    })
}

/// Childhood pillars from nominal age 1 on, one step from the hour pillar
/// per year.
///
/// The sequence is unbounded; charts read it up to the age at which the
/// first decade pillar starts.
pub fn xiaoyun(bazi: &Bazi) -> impl Iterator<Item = Xiaoyun> + use<> {
    let hour = bazi.hour_pillar();
    let step = luck_direction(bazi).step();
    (1u32..).map(move |xusui| Xiaoyun {
        xusui,
        ganzhi: hour.offset(step * xusui as i32),
    })
}

/// Start of the first decade pillar at day precision.
///
/// Counts days from the birth date to the next jie (forward) or from the
/// previous jie on or before the birth date (backward).
pub fn dayun_start(bazi: &Bazi, data: &dyn ReferenceData) -> Result<DayunStart, BaziError> {
    let birth = bazi.solar_datetime().date();
    let direction = luck_direction(bazi);
    let (jie, jie_date) = match direction {
        LuckDirection::Forward => next_jie(data, birth)?,
        LuckDirection::Backward => prev_jie(data, birth)?,
    };

    let days = u32::try_from((jie_date - birth).num_days().unsigned_abs()).map_err(|_| {
        BaziError::Validation(format!("jie {jie_date} is too far from birth {birth}"))
    })?;
    let years = days / DAYS_PER_LUCK_YEAR;
    let months = (days % DAYS_PER_LUCK_YEAR) * MONTHS_PER_LUCK_DAY;
    let start_date = birth
        .checked_add_months(Months::new(years * 12 + months))
        .ok_or_else(|| {
            BaziError::Validation(format!("luck start after {birth} is out of range"))
        })?;
    let ganzhi_year = ganzhi_year_of(data, start_date)?;

    debug!(%birth, %direction, days, years, months, %start_date, "dayun start");
    Ok(DayunStart {
        direction,
        jie,
        jie_date,
        days,
        years,
        months,
        start_date,
        ganzhi_year,
    })
}

/// Decade pillars stepping from the month pillar, ten ganzhi years each.
pub fn dayun(
    bazi: &Bazi,
    data: &dyn ReferenceData,
) -> Result<impl Iterator<Item = Dayun> + use<>, BaziError> {
    let start = dayun_start(bazi, data)?;
    let month = bazi.month_pillar();
    let step = start.direction.step();
    Ok((1..).map(move |k: i32| Dayun {
        start_ganzhi_year: start.ganzhi_year + DAYUN_SPAN_YEARS * (k - 1),
        ganzhi: month.offset(step * k),
    }))
}
