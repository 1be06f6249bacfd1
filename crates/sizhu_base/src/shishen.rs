//! Shishen (十神, ten gods): the relation of a stem to the day master.
//!
//! The god is picked by the element relation between the day master and
//! the other stem, then split by whether their polarities match.

use std::fmt;

use crate::dizhi::Dizhi;
use crate::hidden_tiangan::hidden_tiangans;
use crate::tiangan::Tiangan;
use crate::wuxing::WuxingRelation;

/// The ten gods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Shishen {
    BiJian,
    JieCai,
    ShiShen,
    ShangGuan,
    PianCai,
    ZhengCai,
    QiSha,
    ZhengGuan,
    PianYin,
    ZhengYin,
}

/// All ten gods, same-element pair first.
pub const ALL_SHISHENS: [Shishen; 10] = [
    Shishen::BiJian,
    Shishen::JieCai,
    Shishen::ShiShen,
    Shishen::ShangGuan,
    Shishen::PianCai,
    Shishen::ZhengCai,
    Shishen::QiSha,
    Shishen::ZhengGuan,
    Shishen::PianYin,
    Shishen::ZhengYin,
];

impl Shishen {
    /// Full two-character name.
    pub const fn hanzi(self) -> &'static str {
        match self {
            Self::BiJian => "比肩",
            Self::JieCai => "劫财",
            Self::ShiShen => "食神",
            Self::ShangGuan => "伤官",
            Self::PianCai => "偏财",
            Self::ZhengCai => "正财",
            Self::QiSha => "七杀",
            Self::ZhengGuan => "正官",
            Self::PianYin => "偏印",
            Self::ZhengYin => "正印",
        }
    }

    /// One-character abbreviation used in compact charts.
    pub const fn abbr(self) -> char {
        match self {
            Self::BiJian => '比',
            Self::JieCai => '劫',
            Self::ShiShen => '食',
            Self::ShangGuan => '伤',
            Self::PianCai => '才',
            Self::ZhengCai => '财',
            Self::QiSha => '杀',
            Self::ZhengGuan => '官',
            Self::PianYin => '枭',
            Self::ZhengYin => '印',
        }
    }

    pub const fn index(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Shishen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hanzi())
    }
}

/// Ten god of `tiangan` seen from the day master `day_master`.
pub const fn shishen(day_master: Tiangan, tiangan: Tiangan) -> Shishen {
    let same_polarity = day_master.index() % 2 == tiangan.index() % 2;
    let (same, different) = match day_master.wuxing().relation_to(tiangan.wuxing()) {
        WuxingRelation::Same => (Shishen::BiJian, Shishen::JieCai),
        WuxingRelation::Generates => (Shishen::ShiShen, Shishen::ShangGuan),
        WuxingRelation::Controls => (Shishen::PianCai, Shishen::ZhengCai),
        WuxingRelation::ControlledBy => (Shishen::QiSha, Shishen::ZhengGuan),
        WuxingRelation::GeneratedBy => (Shishen::PianYin, Shishen::ZhengYin),
    };
    if same_polarity { same } else { different }
}

/// Ten god of a branch: that of its dominant hidden stem.
pub const fn shishen_for_dizhi(day_master: Tiangan, dizhi: Dizhi) -> Shishen {
    shishen(day_master, hidden_tiangans(dizhi).dominant())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiangan::ALL_TIANGANS;

    #[test]
    fn jia_day_master_row() {
        let got: Vec<&str> = ALL_TIANGANS
            .iter()
            .map(|t| shishen(Tiangan::Jia, *t).hanzi())
            .collect();
        assert_eq!(
            got,
            vec!["比肩", "劫财", "食神", "伤官", "偏财", "正财", "七杀", "正官", "偏印", "正印"]
        );
    }

    #[test]
    fn bing_day_master() {
        assert_eq!(shishen(Tiangan::Bing, Tiangan::Jia), Shishen::PianYin);
        assert_eq!(shishen(Tiangan::Bing, Tiangan::Ding), Shishen::JieCai);
        assert_eq!(shishen(Tiangan::Bing, Tiangan::Geng), Shishen::PianCai);
        assert_eq!(shishen(Tiangan::Bing, Tiangan::Gui), Shishen::ZhengGuan);
    }

    #[test]
    fn each_row_is_a_permutation() {
        for dm in ALL_TIANGANS {
            let mut seen: Vec<Shishen> = ALL_TIANGANS.iter().map(|t| shishen(dm, *t)).collect();
            seen.sort();
            assert_eq!(seen, ALL_SHISHENS.to_vec(), "{dm}");
        }
    }

    #[test]
    fn branch_uses_dominant_stem() {
        // 寅 hides 甲 first
        assert_eq!(shishen_for_dizhi(Tiangan::Bing, Dizhi::Yin), Shishen::PianYin);
        // 子 hides only 癸
        assert_eq!(shishen_for_dizhi(Tiangan::Bing, Dizhi::Zi), Shishen::ZhengGuan);
    }

    #[test]
    fn abbreviations() {
        assert_eq!(Shishen::PianCai.abbr(), '才');
        assert_eq!(Shishen::PianYin.abbr(), '枭');
        assert_eq!(Shishen::QiSha.abbr(), '杀');
    }
}
