//! Hidden stems (地支藏干) of each branch with their percentage weights.
//!
//! Each branch holds one to three stems. The first entry is the dominant
//! (本气) stem; weights per branch always sum to 100.

use crate::dizhi::Dizhi;
use crate::tiangan::Tiangan;

use Tiangan::*;

/// Hidden stems of one branch, dominant first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HiddenTiangans {
    entries: &'static [(Tiangan, u8)],
}

impl HiddenTiangans {
    /// `(stem, percent)` pairs, dominant first.
    pub const fn entries(&self) -> &'static [(Tiangan, u8)] {
        self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = (Tiangan, u8)> + 'static {
        self.entries.iter().copied()
    }

    /// The stem with the largest weight (本气).
    pub const fn dominant(&self) -> Tiangan {
        self.entries[0].0
    }

    /// Weight of `tiangan`, if hidden in this branch.
    pub fn percent(&self, tiangan: Tiangan) -> Option<u8> {
        self.entries
            .iter()
            .find(|(t, _)| *t == tiangan)
            .map(|(_, p)| *p)
    }

    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Hidden stems of a branch.
pub const fn hidden_tiangans(dizhi: Dizhi) -> HiddenTiangans {
    let entries: &'static [(Tiangan, u8)] = match dizhi {
        Dizhi::Zi => &[(Gui, 100)],
        Dizhi::Chou => &[(Ji, 60), (Gui, 30), (Xin, 10)],
        Dizhi::Yin => &[(Jia, 60), (Bing, 30), (Wu, 10)],
        Dizhi::Mao => &[(Yi, 100)],
        Dizhi::Chen => &[(Wu, 60), (Yi, 30), (Gui, 10)],
        Dizhi::Si => &[(Bing, 60), (Geng, 30), (Wu, 10)],
        Dizhi::Wu => &[(Ding, 70), (Ji, 30)],
        Dizhi::Wei => &[(Ji, 60), (Ding, 30), (Yi, 10)],
        Dizhi::Shen => &[(Geng, 60), (Ren, 30), (Wu, 10)],
        Dizhi::You => &[(Xin, 100)],
        Dizhi::Xu => &[(Wu, 60), (Xin, 30), (Ding, 10)],
        Dizhi::Hai => &[(Ren, 70), (Jia, 30)],
    };
    HiddenTiangans { entries }
}
