//! Shensha (神煞): marker stars placed on branches.
//!
//! Each star is looked up from a reference character of the chart, the
//! year or day branch or the day master, and lands on one branch. A chart
//! carries the star when that branch appears among its other pillars.

use std::fmt;

use crate::dizhi::Dizhi;
use crate::tiangan::Tiangan;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Shensha {
    /// 桃花, from the year or day branch.
    Taohua,
    /// 红艳, from the day master.
    Hongyan,
    /// 红鸾, from the year branch.
    Hongluan,
    /// 天喜, from the year branch.
    Tianxi,
    /// 驿马, from the year or day branch.
    Yima,
}

pub const ALL_SHENSHAS: [Shensha; 5] = [
    Shensha::Taohua,
    Shensha::Hongyan,
    Shensha::Hongluan,
    Shensha::Tianxi,
    Shensha::Yima,
];

impl Shensha {
    pub const fn hanzi(self) -> &'static str {
        match self {
            Self::Taohua => "桃花",
            Self::Hongyan => "红艳",
            Self::Hongluan => "红鸾",
            Self::Tianxi => "天喜",
            Self::Yima => "驿马",
        }
    }
}

impl fmt::Display for Shensha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hanzi())
    }
}

/// 桃花 of a year or day branch: the 沐浴 branch of its 三合 group
/// (申子辰 → 酉, 寅午戌 → 卯, 亥卯未 → 子, 巳酉丑 → 午).
pub const fn taohua(year_or_day: Dizhi) -> Dizhi {
    match year_or_day {
        Dizhi::Shen | Dizhi::Zi | Dizhi::Chen => Dizhi::You,
        Dizhi::Yin | Dizhi::Wu | Dizhi::Xu => Dizhi::Mao,
        Dizhi::Hai | Dizhi::Mao | Dizhi::Wei => Dizhi::Zi,
        Dizhi::Si | Dizhi::You | Dizhi::Chou => Dizhi::Wu,
    }
}

/// 红艳 of a day master.
pub const fn hongyan(day_master: Tiangan) -> Dizhi {
    match day_master {
        Tiangan::Jia => Dizhi::Wu,
        Tiangan::Yi | Tiangan::Gui => Dizhi::Shen,
        Tiangan::Bing => Dizhi::Yin,
        Tiangan::Ding => Dizhi::Wei,
        Tiangan::Wu | Tiangan::Ji => Dizhi::Chen,
        Tiangan::Geng => Dizhi::Xu,
        Tiangan::Xin => Dizhi::You,
        Tiangan::Ren => Dizhi::Zi,
    }
}

/// 红鸾 of a year branch: 卯 for 子, then one branch back per year.
pub const fn hongluan(year: Dizhi) -> Dizhi {
    Dizhi::Mao.offset(-(year.index() as i32))
}

/// 天喜 of a year branch: the clash of its 红鸾.
pub const fn tianxi(year: Dizhi) -> Dizhi {
    hongluan(year).offset(6)
}

/// 驿马 of a year or day branch: the clash of its 三合 group's first branch
/// (申子辰 → 寅, 寅午戌 → 申, 亥卯未 → 巳, 巳酉丑 → 亥).
pub const fn yima(year_or_day: Dizhi) -> Dizhi {
    match year_or_day {
        Dizhi::Shen | Dizhi::Zi | Dizhi::Chen => Dizhi::Yin,
        Dizhi::Yin | Dizhi::Wu | Dizhi::Xu => Dizhi::Shen,
        Dizhi::Hai | Dizhi::Mao | Dizhi::Wei => Dizhi::Si,
        Dizhi::Si | Dizhi::You | Dizhi::Chou => Dizhi::Hai,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dizhi::ALL_DIZHIS;
    use crate::tiangan::ALL_TIANGANS;
    use Dizhi::*;

    fn group_table(targets: [Dizhi; 4]) -> impl Fn(Dizhi) -> Dizhi {
        move |d| {
            let groups = [[Shen, Zi, Chen], [Yin, Wu, Xu], [Hai, Mao, Wei], [Si, You, Chou]];
            let i = groups.iter().position(|g| g.contains(&d)).unwrap();
            targets[i]
        }
    }

    #[test]
    fn taohua_table() {
        let expected = group_table([You, Mao, Zi, Wu]);
        for d in ALL_DIZHIS {
            assert_eq!(taohua(d), expected(d), "{d}");
        }
        assert_eq!(taohua(Shen), You);
        assert_ne!(taohua(Shen), Zi);
    }

    #[test]
    fn yima_table() {
        let expected = group_table([Yin, Shen, Si, Hai]);
        for d in ALL_DIZHIS {
            assert_eq!(yima(d), expected(d), "{d}");
        }
        assert_eq!(yima(Shen), Yin);
    }

    #[test]
    fn hongyan_table() {
        let expected: [(Dizhi, &[Tiangan]); 8] = [
            (Wu, &[Tiangan::Jia]),
            (Shen, &[Tiangan::Yi, Tiangan::Gui]),
            (Yin, &[Tiangan::Bing]),
            (Wei, &[Tiangan::Ding]),
            (Chen, &[Tiangan::Wu, Tiangan::Ji]),
            (Xu, &[Tiangan::Geng]),
            (You, &[Tiangan::Xin]),
            (Zi, &[Tiangan::Ren]),
        ];
        for tg in ALL_TIANGANS {
            for d in ALL_DIZHIS {
                let listed = expected.iter().any(|(dz, tgs)| *dz == d && tgs.contains(&tg));
                assert_eq!(hongyan(tg) == d, listed, "{tg}{d}");
            }
        }
    }

    #[test]
    fn hongluan_and_tianxi_pairs() {
        let hongluan_pairs = [(Zi, Mao), (Chou, Yin), (Chen, Hai), (Si, Xu), (Wu, You), (Wei, Shen)];
        for (a, b) in hongluan_pairs {
            assert_eq!(hongluan(a), b);
            assert_eq!(hongluan(b), a);
        }
        let tianxi_pairs = [(Zi, You), (Chou, Shen), (Wei, Yin), (Wu, Mao), (Chen, Si), (Xu, Hai)];
        for (a, b) in tianxi_pairs {
            assert_eq!(tianxi(a), b);
            assert_eq!(tianxi(b), a);
        }
        assert_eq!(hongluan(Shen), Wei);
        assert_eq!(tianxi(Yin), Wei);
    }
}
