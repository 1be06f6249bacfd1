//! Ganzhi (干支) pairs and the sexagenary cycle.
//!
//! Any stem may be paired with any branch (120 pairs), but only the 60
//! pairs whose stem and branch share parity occur in the cycle. The cycle
//! starts at 甲子 and advances stem and branch together, so position `i`
//! holds stem `i % 10` and branch `i % 12`.

use std::fmt;
use std::str::FromStr;

use crate::dizhi::{ALL_DIZHIS, Dizhi};
use crate::error::BaseError;
use crate::tiangan::{ALL_TIANGANS, Tiangan};

/// Length of the sexagenary cycle, lcm(10, 12).
pub const CYCLE_LEN: usize = 60;

/// Gregorian year whose ganzhi year is 甲子 (cycle position 0) modulo 60.
pub const JIAZI_YEAR_EPOCH: i32 = 4;

/// An ordered stem-branch pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ganzhi {
    pub tiangan: Tiangan,
    pub dizhi: Dizhi,
}

const fn build_cycle() -> [Ganzhi; CYCLE_LEN] {
    let mut out = [Ganzhi::new(Tiangan::Jia, Dizhi::Zi); CYCLE_LEN];
    let mut i = 0;
    while i < CYCLE_LEN {
        out[i] = Ganzhi::new(ALL_TIANGANS[i % 10], ALL_DIZHIS[i % 12]);
        i += 1;
    }
    out
}

/// All 60 cycle pairs in canonical order (index 0 = 甲子, 59 = 癸亥).
pub const SEXAGENARY_CYCLE: [Ganzhi; CYCLE_LEN] = build_cycle();

/// The 60 cycle pairs in canonical order.
pub fn sexagenary_cycle() -> &'static [Ganzhi; CYCLE_LEN] {
    &SEXAGENARY_CYCLE
}

impl Ganzhi {
    pub const fn new(tiangan: Tiangan, dizhi: Dizhi) -> Self {
        Self { tiangan, dizhi }
    }

    /// Whether the pair occurs in the sexagenary cycle.
    pub const fn is_cycle_member(self) -> bool {
        self.tiangan.index() % 2 == self.dizhi.index() % 2
    }

    /// Position in the cycle, or `None` for the 60 non-member pairs.
    ///
    /// Solves `i ≡ stem (mod 10)`, `i ≡ branch (mod 12)` as
    /// `i = (6·stem − 5·branch) mod 60`.
    pub const fn cycle_index(self) -> Option<u8> {
        if !self.is_cycle_member() {
            return None;
        }
        let i = (6 * self.tiangan.index() as i32 - 5 * self.dizhi.index() as i32).rem_euclid(60);
        Some(i as u8)
    }

    /// Pair at cycle position `index mod 60`.
    pub const fn from_cycle_index(index: i64) -> Self {
        SEXAGENARY_CYCLE[index.rem_euclid(CYCLE_LEN as i64) as usize]
    }

    /// Ganzhi year pillar for a ganzhi (Start-of-Spring based) year.
    pub const fn for_year(year: i32) -> Self {
        Self::from_cycle_index((year - JIAZI_YEAR_EPOCH) as i64)
    }

    /// Advance stem and branch together by `steps` (negative walks back).
    pub const fn offset(self, steps: i32) -> Self {
        Self::new(self.tiangan.offset(steps), self.dizhi.offset(steps))
    }

    pub const fn next(self) -> Self {
        self.offset(1)
    }

    pub const fn prev(self) -> Self {
        self.offset(-1)
    }
}

/// Renders as stem followed by branch, e.g. `甲子`.
impl fmt::Display for Ganzhi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.tiangan, self.dizhi)
    }
}

/// Parses a two-character string such as `丙寅`.
impl FromStr for Ganzhi {
    type Err = BaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(t), Some(d), None) => {
                let mut tb = [0u8; 4];
                let mut db = [0u8; 4];
                let tiangan = t
                    .encode_utf8(&mut tb)
                    .parse::<Tiangan>()
                    .map_err(|_| BaseError::parse("ganzhi", s))?;
                let dizhi = d
                    .encode_utf8(&mut db)
                    .parse::<Dizhi>()
                    .map_err(|_| BaseError::parse("ganzhi", s))?;
                Ok(Self::new(tiangan, dizhi))
            }
            _ => Err(BaseError::parse("ganzhi", s)),
        }
    }
}
