//! BaZi (四柱八字) charts.
//!
//! This crate provides:
//! - [`Bazi`]: the four pillars derived from a naive local birth time
//! - [`BaziChart`]: traits, hidden stems, ten gods, nayin and growth stages
//! - [`ChartJson`]: an owned, serializable snapshot
//! - Luck pillars (大运, 小运, 流年) in [`transits`]
//!
//! Calendar boundaries come from a [`sizhu_calendar::ReferenceData`]
//! passed in by the caller.

pub mod bazi;
pub mod chart;
pub mod error;
pub mod options;
pub mod pillars;
pub mod snapshot;
pub mod transits;

pub use bazi::Bazi;
pub use chart::{BaziChart, PillarShishens, PillarTraits};
pub use error::BaziError;
pub use options::{BaziGender, BaziPrecision, parse_birth_time};
pub use pillars::{ALL_PILLAR_POSITIONS, FourPillars, PillarPosition};
pub use snapshot::{BIRTH_TIME_FORMAT, ChartJson};
pub use transits::{
    Dayun, DayunStart, LuckDirection, Liunian, Xiaoyun, dayun, dayun_start, liunian,
    luck_direction, xiaoyun,
};
