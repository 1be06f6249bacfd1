//! Fixed four-slot container indexed by pillar position.

use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

/// One of the four pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Hour,
}

/// All positions in chart order.
pub const ALL_PILLAR_POSITIONS: [PillarPosition; 4] = [
    PillarPosition::Year,
    PillarPosition::Month,
    PillarPosition::Day,
    PillarPosition::Hour,
];

impl PillarPosition {
    /// Key used in JSON output.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Hour => "hour",
        }
    }

    pub const fn hanzi(self) -> char {
        match self {
            Self::Year => '年',
            Self::Month => '月',
            Self::Day => '日',
            Self::Hour => '时',
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for PillarPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One value per pillar, in year, month, day, hour order.
///
/// Serializes as a map keyed `year`/`month`/`day`/`hour`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FourPillars<T> {
    pub year: T,
    pub month: T,
    pub day: T,
    pub hour: T,
}

impl<T> FourPillars<T> {
    pub const fn new(year: T, month: T, day: T, hour: T) -> Self {
        Self {
            year,
            month,
            day,
            hour,
        }
    }

    /// Build from a function of the position.
    pub fn from_fn(mut f: impl FnMut(PillarPosition) -> T) -> Self {
        Self::new(
            f(PillarPosition::Year),
            f(PillarPosition::Month),
            f(PillarPosition::Day),
            f(PillarPosition::Hour),
        )
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> FourPillars<U> {
        FourPillars::new(f(self.year), f(self.month), f(self.day), f(self.hour))
    }

    pub fn each_ref(&self) -> FourPillars<&T> {
        FourPillars::new(&self.year, &self.month, &self.day, &self.hour)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        [&self.year, &self.month, &self.day, &self.hour].into_iter()
    }

    /// `(position, value)` pairs in chart order.
    pub fn entries(&self) -> impl Iterator<Item = (PillarPosition, &T)> {
        ALL_PILLAR_POSITIONS.into_iter().zip(self.iter())
    }

    pub fn into_array(self) -> [T; 4] {
        [self.year, self.month, self.day, self.hour]
    }
}

impl<T> Index<PillarPosition> for FourPillars<T> {
    type Output = T;

    fn index(&self, pos: PillarPosition) -> &T {
        match pos {
            PillarPosition::Year => &self.year,
            PillarPosition::Month => &self.month,
            PillarPosition::Day => &self.day,
            PillarPosition::Hour => &self.hour,
        }
    }
}

impl<T> IndexMut<PillarPosition> for FourPillars<T> {
    fn index_mut(&mut self, pos: PillarPosition) -> &mut T {
        match pos {
            PillarPosition::Year => &mut self.year,
            PillarPosition::Month => &mut self.month,
            PillarPosition::Day => &mut self.day,
            PillarPosition::Hour => &mut self.hour,
        }
    }
}

impl<T> IntoIterator for FourPillars<T> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, 4>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_array().into_iter()
    }
}

impl<T> From<[T; 4]> for FourPillars<T> {
    fn from([year, month, day, hour]: [T; 4]) -> Self {
        Self::new(year, month, day, hour)
    }
}
