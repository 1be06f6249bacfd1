//! Birth-record options: gender, precision, and birth-time parsing.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::BaziError;

/// Gender of the chart owner (乾造 / 坤造).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaziGender {
    Male,
    Female,
}

impl BaziGender {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    pub const fn hanzi(self) -> char {
        match self {
            Self::Male => '男',
            Self::Female => '女',
        }
    }
}

impl fmt::Display for BaziGender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts `male`/`m`/`男`/`乾` and `female`/`f`/`女`/`坤` (ASCII case-insensitive).
impl FromStr for BaziGender {
    type Err = BaziError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let lower = s.to_ascii_lowercase();
        match lower.as_str() {
            "male" | "m" | "男" | "乾" => Ok(Self::Male),
            "female" | "f" | "女" | "坤" => Ok(Self::Female),
            _ => Err(BaziError::Validation(format!("unknown gender '{s}'"))),
        }
    }
}

/// How precisely the birth instant places year and month boundaries.
///
/// Only [`BaziPrecision::Day`] is implemented: a birth on a jie day counts
/// as after the jie whatever the clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaziPrecision {
    Day,
    Hour,
    Minute,
}

impl BaziPrecision {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Hour => "hour",
            Self::Minute => "minute",
        }
    }
}

impl fmt::Display for BaziPrecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts `day`/`d`/`日`, `hour`/`h`/`时` and `minute`/`min`/`分`.
impl FromStr for BaziPrecision {
    type Err = BaziError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let lower = s.to_ascii_lowercase();
        match lower.as_str() {
            "day" | "d" | "日" => Ok(Self::Day),
            "hour" | "h" | "时" => Ok(Self::Hour),
            "minute" | "min" | "分" => Ok(Self::Minute),
            _ => Err(BaziError::Validation(format!("unknown precision '{s}'"))),
        }
    }
}

const BIRTH_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse a naive birth time: `YYYY-MM-DDTHH:MM[:SS]`, or with a space
/// instead of `T`.
///
/// Inputs carrying a timezone (`Z`, `+08:00`, `-0500`) are rejected; the
/// caller converts to local civil time first.
pub fn parse_birth_time(s: &str) -> Result<NaiveDateTime, BaziError> {
    let s = s.trim();
    if has_timezone_suffix(s) {
        return Err(BaziError::Validation(format!(
            "birth time '{s}' carries a timezone; pass a naive local time"
        )));
    }
    BIRTH_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .ok_or_else(|| BaziError::Validation(format!("cannot parse birth time '{s}'")))
}

fn has_timezone_suffix(s: &str) -> bool {
    if s.ends_with(['Z', 'z']) {
        return true;
    }
    // An offset sign after the time part (the date part has its own '-').
    let time_part = match s.find(['T', ' ']) {
        Some(i) => &s[i + 1..],
        None => return false,
    };
    time_part.contains(['+', '-'])
}
