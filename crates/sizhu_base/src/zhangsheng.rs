//! Twelve growth stages (十二长生) of a stem over the branches.
//!
//! Each stem is born (长生) at a fixed branch. Yang stems then walk the
//! branches forward through the twelve stages; yin stems walk backward.

use std::fmt;

use crate::dizhi::Dizhi;
use crate::tiangan::Tiangan;
use crate::wuxing::Yinyang;

/// The twelve growth stages in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShierZhangsheng {
    Changsheng,
    Muyu,
    Guandai,
    Linguan,
    Diwang,
    Shuai,
    Bing,
    Si,
    Mu,
    Jue,
    Tai,
    Yang,
}

pub const ALL_ZHANGSHENGS: [ShierZhangsheng; 12] = [
    ShierZhangsheng::Changsheng,
    ShierZhangsheng::Muyu,
    ShierZhangsheng::Guandai,
    ShierZhangsheng::Linguan,
    ShierZhangsheng::Diwang,
    ShierZhangsheng::Shuai,
    ShierZhangsheng::Bing,
    ShierZhangsheng::Si,
    ShierZhangsheng::Mu,
    ShierZhangsheng::Jue,
    ShierZhangsheng::Tai,
    ShierZhangsheng::Yang,
];

impl ShierZhangsheng {
    pub const fn hanzi(self) -> &'static str {
        match self {
            Self::Changsheng => "长生",
            Self::Muyu => "沐浴",
            Self::Guandai => "冠带",
            Self::Linguan => "临官",
            Self::Diwang => "帝旺",
            Self::Shuai => "衰",
            Self::Bing => "病",
            Self::Si => "死",
            Self::Mu => "墓",
            Self::Jue => "绝",
            Self::Tai => "胎",
            Self::Yang => "养",
        }
    }

    pub const fn index(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for ShierZhangsheng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hanzi())
    }
}

/// Branch where `tiangan` is born (长生).
pub const fn changsheng_dizhi(tiangan: Tiangan) -> Dizhi {
    match tiangan {
        Tiangan::Jia => Dizhi::Hai,
        Tiangan::Yi => Dizhi::Wu,
        Tiangan::Bing | Tiangan::Wu => Dizhi::Yin,
        Tiangan::Ding | Tiangan::Ji => Dizhi::You,
        Tiangan::Geng => Dizhi::Si,
        Tiangan::Xin => Dizhi::Zi,
        Tiangan::Ren => Dizhi::Shen,
        Tiangan::Gui => Dizhi::Mao,
    }
}

/// Branch of the stem's 禄 (its 临官 stage).
pub const fn tiangan_lu(tiangan: Tiangan) -> Dizhi {
    match tiangan {
        Tiangan::Jia => Dizhi::Yin,
        Tiangan::Yi => Dizhi::Mao,
        Tiangan::Bing | Tiangan::Wu => Dizhi::Si,
        Tiangan::Ding | Tiangan::Ji => Dizhi::Wu,
        Tiangan::Geng => Dizhi::Shen,
        Tiangan::Xin => Dizhi::You,
        Tiangan::Ren => Dizhi::Hai,
        Tiangan::Gui => Dizhi::Zi,
    }
}

/// Growth stage of `tiangan` at `dizhi`.
pub const fn shier_zhangsheng(tiangan: Tiangan, dizhi: Dizhi) -> ShierZhangsheng {
    let start = changsheng_dizhi(tiangan).index() as i32;
    let branch = dizhi.index() as i32;
    let steps = match tiangan.yinyang() {
        Yinyang::Yang => branch - start,
        Yinyang::Yin => start - branch,
    };
    ALL_ZHANGSHENGS[steps.rem_euclid(12) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn birth_branches() {
        for t in Tiangan::all() {
            assert_eq!(
                shier_zhangsheng(*t, changsheng_dizhi(*t)),
                ShierZhangsheng::Changsheng
            );
        }
    }

    #[test]
    fn jia_walks_forward() {
        assert_eq!(shier_zhangsheng(Tiangan::Jia, Dizhi::Zi), ShierZhangsheng::Muyu);
        assert_eq!(shier_zhangsheng(Tiangan::Jia, Dizhi::Mao), ShierZhangsheng::Diwang);
        assert_eq!(shier_zhangsheng(Tiangan::Jia, Dizhi::Wei), ShierZhangsheng::Mu);
    }

    #[test]
    fn yi_walks_backward() {
        assert_eq!(shier_zhangsheng(Tiangan::Yi, Dizhi::Si), ShierZhangsheng::Muyu);
        assert_eq!(shier_zhangsheng(Tiangan::Yi, Dizhi::Yin), ShierZhangsheng::Diwang);
        assert_eq!(shier_zhangsheng(Tiangan::Yi, Dizhi::Xu), ShierZhangsheng::Mu);
    }

    #[test]
    fn bing_at_yin_and_wu() {
        assert_eq!(shier_zhangsheng(Tiangan::Bing, Dizhi::Wu), ShierZhangsheng::Diwang);
        assert_eq!(shier_zhangsheng(Tiangan::Ren, Dizhi::Zi), ShierZhangsheng::Diwang);
        assert_eq!(shier_zhangsheng(Tiangan::Gui, Dizhi::Zi), ShierZhangsheng::Linguan);
    }

    #[test]
    fn lu_is_the_linguan_branch() {
        for t in Tiangan::all() {
            assert_eq!(shier_zhangsheng(*t, tiangan_lu(*t)), ShierZhangsheng::Linguan, "{t}");
        }
        assert_eq!(tiangan_lu(Tiangan::Wu), Dizhi::Si);
        assert_eq!(tiangan_lu(Tiangan::Ji), Dizhi::Wu);
        assert_eq!(tiangan_lu(Tiangan::Gui), Dizhi::Zi);
    }
}
