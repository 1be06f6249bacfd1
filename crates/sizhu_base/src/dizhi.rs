//! Dizhi (地支, earthly branches).
//!
//! Twelve branches in fixed order from 子 to 亥. Polarity alternates
//! starting with yang at 子; the element follows the seasonal table
//! (寅卯 wood, 巳午 fire, 申酉 metal, 亥子 water, 辰戌丑未 earth).

use std::fmt;
use std::str::FromStr;

use crate::error::BaseError;
use crate::wuxing::{Traits, Wuxing, Yinyang};

/// The twelve earthly branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dizhi {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in order (0 = 子, 11 = 亥).
pub const ALL_DIZHIS: [Dizhi; 12] = [
    Dizhi::Zi,
    Dizhi::Chou,
    Dizhi::Yin,
    Dizhi::Mao,
    Dizhi::Chen,
    Dizhi::Si,
    Dizhi::Wu,
    Dizhi::Wei,
    Dizhi::Shen,
    Dizhi::You,
    Dizhi::Xu,
    Dizhi::Hai,
];

impl Dizhi {
    /// Chinese character of the branch.
    pub const fn hanzi(self) -> char {
        match self {
            Self::Zi => '子',
            Self::Chou => '丑',
            Self::Yin => '寅',
            Self::Mao => '卯',
            Self::Chen => '辰',
            Self::Si => '巳',
            Self::Wu => '午',
            Self::Wei => '未',
            Self::Shen => '申',
            Self::You => '酉',
            Self::Xu => '戌',
            Self::Hai => '亥',
        }
    }

    /// Pinyin name of the branch.
    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Zi => "zi",
            Self::Chou => "chou",
            Self::Yin => "yin",
            Self::Mao => "mao",
            Self::Chen => "chen",
            Self::Si => "si",
            Self::Wu => "wu",
            Self::Wei => "wei",
            Self::Shen => "shen",
            Self::You => "you",
            Self::Xu => "xu",
            Self::Hai => "hai",
        }
    }

    /// Zodiac animal (生肖) of the branch.
    pub const fn shengxiao(self) -> char {
        match self {
            Self::Zi => '鼠',
            Self::Chou => '牛',
            Self::Yin => '虎',
            Self::Mao => '兔',
            Self::Chen => '龙',
            Self::Si => '蛇',
            Self::Wu => '马',
            Self::Wei => '羊',
            Self::Shen => '猴',
            Self::You => '鸡',
            Self::Xu => '狗',
            Self::Hai => '猪',
        }
    }

    /// 0-based index (子=0 .. 亥=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Branch at `index`; fails outside 0..=11.
    pub fn from_index(index: usize) -> Result<Self, BaseError> {
        ALL_DIZHIS
            .get(index)
            .copied()
            .ok_or(BaseError::IndexOutOfRange {
                kind: "dizhi",
                index,
                len: ALL_DIZHIS.len(),
            })
    }

    /// All 12 branches in order.
    pub const fn all() -> &'static [Dizhi; 12] {
        &ALL_DIZHIS
    }

    /// The branch `steps` positions later in the cycle (negative walks back).
    pub const fn offset(self, steps: i32) -> Dizhi {
        ALL_DIZHIS[(self.index() as i32 + steps).rem_euclid(12) as usize]
    }

    pub const fn wuxing(self) -> Wuxing {
        match self {
            Self::Yin | Self::Mao => Wuxing::Mu,
            Self::Si | Self::Wu => Wuxing::Huo,
            Self::Shen | Self::You => Wuxing::Jin,
            Self::Hai | Self::Zi => Wuxing::Shui,
            Self::Chen | Self::Xu | Self::Chou | Self::Wei => Wuxing::Tu,
        }
    }

    pub const fn yinyang(self) -> Yinyang {
        Yinyang::from_parity(self.index())
    }

    /// Element and polarity.
    pub const fn traits(self) -> Traits {
        Traits::new(self.wuxing(), self.yinyang())
    }
}

impl fmt::Display for Dizhi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hanzi())
    }
}

/// Accepts the Chinese character or the pinyin name (ASCII case-insensitive).
impl FromStr for Dizhi {
    type Err = BaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ALL_DIZHIS
            .iter()
            .copied()
            .find(|d| {
                let mut buf = [0u8; 4];
                s == d.hanzi().encode_utf8(&mut buf) || s.eq_ignore_ascii_case(d.pinyin())
            })
            .ok_or_else(|| BaseError::parse("dizhi", s))
    }
}
