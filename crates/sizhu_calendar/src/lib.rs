//! Solar, lunar and ganzhi calendars for BaZi charts.
//!
//! This crate provides:
//! - A kind-tagged date model with same-kind ordering and supported ranges
//! - Validators for each calendar kind
//! - Conversions between the three calendars and jieqi lookups
//! - The [`ReferenceData`] seam and a text-table implementation
//! - Day pillars from the sexagenary day count
//!
//! Jieqi dates and lunar-year layouts are never computed here; they are
//! injected through [`ReferenceData`].

pub mod convert;
pub mod date;
pub mod error;
pub mod reference;
pub mod sexagenary;
pub mod tables;
pub mod validate;

pub use convert::{
    days_in_ganzhi_year, days_in_lunar_month, ganzhi_month_starts, ganzhi_to_solar,
    ganzhi_year_of, is_leap_lunar_month, jieqi_of_year, lunar_month_count, lunar_to_solar,
    next_jie, prev_jie, solar_to_ganzhi, solar_to_lunar, to_ganzhi, to_lunar, to_solar,
};
pub use date::{
    ALL_CALENDAR_KINDS, CalendarDate, CalendarKind, MAX_GANZHI, MAX_LUNAR, MAX_SOLAR, MIN_GANZHI,
    MIN_LUNAR, MIN_SOLAR,
};
pub use error::CalendarError;
pub use reference::{LunarYearInfo, ReferenceData};
pub use sexagenary::{JIAZI_DAY_ANCHOR, day_ganzhi, get_day_ganzhi};
pub use tables::ReferenceTables;
pub use validate::{is_valid, is_valid_ganzhi, is_valid_lunar, is_valid_solar};

#[cfg(test)]
pub(crate) mod test_support {
    use crate::ReferenceTables;

    const SAMPLE: &str = include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../../data/sample_reference.txt"
    ));

    pub(crate) fn sample_tables() -> ReferenceTables {
        ReferenceTables::parse(SAMPLE).expect("sample tables parse")
    }
}
