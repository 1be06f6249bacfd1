//! Tiangan (天干, heavenly stems).
//!
//! Ten stems in fixed order from 甲 to 癸. Consecutive pairs share one
//! phase (甲乙木, 丙丁火, 戊己土, 庚辛金, 壬癸水); within a pair the first
//! stem is yang and the second yin.

use std::fmt;
use std::str::FromStr;

use crate::error::BaseError;
use crate::wuxing::{ALL_WUXINGS, Traits, Wuxing, Yinyang};

/// The ten heavenly stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tiangan {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in order (0 = 甲, 9 = 癸).
pub const ALL_TIANGANS: [Tiangan; 10] = [
    Tiangan::Jia,
    Tiangan::Yi,
    Tiangan::Bing,
    Tiangan::Ding,
    Tiangan::Wu,
    Tiangan::Ji,
    Tiangan::Geng,
    Tiangan::Xin,
    Tiangan::Ren,
    Tiangan::Gui,
];

impl Tiangan {
    /// Chinese character of the stem.
    pub const fn hanzi(self) -> char {
        match self {
            Self::Jia => '甲',
            Self::Yi => '乙',
            Self::Bing => '丙',
            Self::Ding => '丁',
            Self::Wu => '戊',
            Self::Ji => '己',
            Self::Geng => '庚',
            Self::Xin => '辛',
            Self::Ren => '壬',
            Self::Gui => '癸',
        }
    }

    /// Pinyin name of the stem.
    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Jia => "jia",
            Self::Yi => "yi",
            Self::Bing => "bing",
            Self::Ding => "ding",
            Self::Wu => "wu",
            Self::Ji => "ji",
            Self::Geng => "geng",
            Self::Xin => "xin",
            Self::Ren => "ren",
            Self::Gui => "gui",
        }
    }

    /// 0-based index (甲=0 .. 癸=9).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Stem at `index`; fails outside 0..=9.
    pub fn from_index(index: usize) -> Result<Self, BaseError> {
        ALL_TIANGANS
            .get(index)
            .copied()
            .ok_or(BaseError::IndexOutOfRange {
                kind: "tiangan",
                index,
                len: ALL_TIANGANS.len(),
            })
    }

    /// All 10 stems in order.
    pub const fn all() -> &'static [Tiangan; 10] {
        &ALL_TIANGANS
    }

    /// The stem `steps` positions later in the cycle (negative walks back).
    pub const fn offset(self, steps: i32) -> Tiangan {
        ALL_TIANGANS[(self.index() as i32 + steps).rem_euclid(10) as usize]
    }

    pub const fn wuxing(self) -> Wuxing {
        ALL_WUXINGS[(self.index() / 2) as usize]
    }

    pub const fn yinyang(self) -> Yinyang {
        Yinyang::from_parity(self.index())
    }

    /// Element and polarity.
    pub const fn traits(self) -> Traits {
        Traits::new(self.wuxing(), self.yinyang())
    }
}

impl fmt::Display for Tiangan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hanzi())
    }
}

/// Accepts the Chinese character or the pinyin name (ASCII case-insensitive).
impl FromStr for Tiangan {
    type Err = BaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ALL_TIANGANS
            .iter()
            .copied()
            .find(|t| {
                let mut buf = [0u8; 4];
                s == t.hanzi().encode_utf8(&mut buf) || s.eq_ignore_ascii_case(t.pinyin())
            })
            .ok_or_else(|| BaseError::parse("tiangan", s))
    }
}
