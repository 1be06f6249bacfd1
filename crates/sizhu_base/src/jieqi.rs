//! Jieqi (节气, the 24 solar terms).
//!
//! Terms are ordered from 立春 (Start of Spring) to 大寒 (Major Cold).
//! Every other term starting at 立春 is a "jie" (节) and opens a ganzhi
//! month; the remaining twelve are the "qi" (中气).

use std::fmt;
use std::str::FromStr;

use crate::error::BaseError;

/// The 24 solar terms, starting at Start of Spring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Jieqi {
    Lichun,
    Yushui,
    Jingzhe,
    Chunfen,
    Qingming,
    Guyu,
    Lixia,
    Xiaoman,
    Mangzhong,
    Xiazhi,
    Xiaoshu,
    Dashu,
    Liqiu,
    Chushu,
    Bailu,
    Qiufen,
    Hanlu,
    Shuangjiang,
    Lidong,
    Xiaoxue,
    Daxue,
    Dongzhi,
    Xiaohan,
    Dahan,
}

/// All 24 terms in order (0 = 立春, 23 = 大寒).
pub const ALL_JIEQIS: [Jieqi; 24] = [
    Jieqi::Lichun,
    Jieqi::Yushui,
    Jieqi::Jingzhe,
    Jieqi::Chunfen,
    Jieqi::Qingming,
    Jieqi::Guyu,
    Jieqi::Lixia,
    Jieqi::Xiaoman,
    Jieqi::Mangzhong,
    Jieqi::Xiazhi,
    Jieqi::Xiaoshu,
    Jieqi::Dashu,
    Jieqi::Liqiu,
    Jieqi::Chushu,
    Jieqi::Bailu,
    Jieqi::Qiufen,
    Jieqi::Hanlu,
    Jieqi::Shuangjiang,
    Jieqi::Lidong,
    Jieqi::Xiaoxue,
    Jieqi::Daxue,
    Jieqi::Dongzhi,
    Jieqi::Xiaohan,
    Jieqi::Dahan,
];

/// The twelve month-opening terms, in ganzhi month order (寅月 first).
pub const JIE: [Jieqi; 12] = [
    Jieqi::Lichun,
    Jieqi::Jingzhe,
    Jieqi::Qingming,
    Jieqi::Lixia,
    Jieqi::Mangzhong,
    Jieqi::Xiaoshu,
    Jieqi::Liqiu,
    Jieqi::Bailu,
    Jieqi::Hanlu,
    Jieqi::Lidong,
    Jieqi::Daxue,
    Jieqi::Xiaohan,
];

impl Jieqi {
    /// Chinese name of the term.
    pub const fn hanzi(self) -> &'static str {
        match self {
            Self::Lichun => "立春",
            Self::Yushui => "雨水",
            Self::Jingzhe => "惊蛰",
            Self::Chunfen => "春分",
            Self::Qingming => "清明",
            Self::Guyu => "谷雨",
            Self::Lixia => "立夏",
            Self::Xiaoman => "小满",
            Self::Mangzhong => "芒种",
            Self::Xiazhi => "夏至",
            Self::Xiaoshu => "小暑",
            Self::Dashu => "大暑",
            Self::Liqiu => "立秋",
            Self::Chushu => "处暑",
            Self::Bailu => "白露",
            Self::Qiufen => "秋分",
            Self::Hanlu => "寒露",
            Self::Shuangjiang => "霜降",
            Self::Lidong => "立冬",
            Self::Xiaoxue => "小雪",
            Self::Daxue => "大雪",
            Self::Dongzhi => "冬至",
            Self::Xiaohan => "小寒",
            Self::Dahan => "大寒",
        }
    }

    /// Pinyin name of the term (lowercase, no tone marks).
    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Lichun => "lichun",
            Self::Yushui => "yushui",
            Self::Jingzhe => "jingzhe",
            Self::Chunfen => "chunfen",
            Self::Qingming => "qingming",
            Self::Guyu => "guyu",
            Self::Lixia => "lixia",
            Self::Xiaoman => "xiaoman",
            Self::Mangzhong => "mangzhong",
            Self::Xiazhi => "xiazhi",
            Self::Xiaoshu => "xiaoshu",
            Self::Dashu => "dashu",
            Self::Liqiu => "liqiu",
            Self::Chushu => "chushu",
            Self::Bailu => "bailu",
            Self::Qiufen => "qiufen",
            Self::Hanlu => "hanlu",
            Self::Shuangjiang => "shuangjiang",
            Self::Lidong => "lidong",
            Self::Xiaoxue => "xiaoxue",
            Self::Daxue => "daxue",
            Self::Dongzhi => "dongzhi",
            Self::Xiaohan => "xiaohan",
            Self::Dahan => "dahan",
        }
    }

    /// 0-based index (立春=0 .. 大寒=23).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Term at `index`; fails outside 0..=23.
    pub fn from_index(index: usize) -> Result<Self, BaseError> {
        ALL_JIEQIS
            .get(index)
            .copied()
            .ok_or(BaseError::IndexOutOfRange {
                kind: "jieqi",
                index,
                len: ALL_JIEQIS.len(),
            })
    }

    /// Whether the term opens a ganzhi month.
    pub const fn is_jie(self) -> bool {
        self.index() % 2 == 0
    }

    /// Ganzhi month (1 = 寅月 .. 12 = 丑月) that this term falls in.
    pub const fn ganzhi_month(self) -> u8 {
        self.index() / 2 + 1
    }

    /// Ecliptic longitude of the Sun at this term, in degrees.
    pub const fn solar_longitude_deg(self) -> u16 {
        (315 + 15 * self.index() as u16) % 360
    }

    /// Whether the term falls in January of its Gregorian year
    /// (小寒 and 大寒 close the ganzhi year that began the previous spring).
    pub const fn is_january_term(self) -> bool {
        matches!(self, Self::Xiaohan | Self::Dahan)
    }
}

impl fmt::Display for Jieqi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hanzi())
    }
}

/// Accepts the Chinese name or the pinyin name (ASCII case-insensitive).
impl FromStr for Jieqi {
    type Err = BaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ALL_JIEQIS
            .iter()
            .copied()
            .find(|j| s == j.hanzi() || s.eq_ignore_ascii_case(j.pinyin()))
            .ok_or_else(|| BaseError::parse("jieqi", s))
    }
}
