//! Relations between heavenly stems: 合 (combine), 冲 (clash), 生 and 克.
//!
//! 合 and 冲 are fixed pair tables and do not depend on order. 生 and 克
//! follow the stems' elements only, so they are directional and ignore
//! polarity.

use std::collections::BTreeMap;
use std::fmt;

use crate::tiangan::{ALL_TIANGANS, Tiangan};
use crate::wuxing::Wuxing;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TianganRelation {
    He,
    Chong,
    Sheng,
    Ke,
}

pub const ALL_TIANGAN_RELATIONS: [TianganRelation; 4] = [
    TianganRelation::He,
    TianganRelation::Chong,
    TianganRelation::Sheng,
    TianganRelation::Ke,
];

impl TianganRelation {
    pub const fn hanzi(self) -> char {
        match self {
            Self::He => '合',
            Self::Chong => '冲',
            Self::Sheng => '生',
            Self::Ke => '克',
        }
    }

    /// Whether the pair order matters.
    pub const fn is_directional(self) -> bool {
        matches!(self, Self::Sheng | Self::Ke)
    }
}

impl fmt::Display for TianganRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hanzi())
    }
}

/// The five combinations (五合) and the element each transforms into.
pub const TIANGAN_HE: [([Tiangan; 2], Wuxing); 5] = [
    ([Tiangan::Jia, Tiangan::Ji], Wuxing::Tu),
    ([Tiangan::Yi, Tiangan::Geng], Wuxing::Jin),
    ([Tiangan::Bing, Tiangan::Xin], Wuxing::Shui),
    ([Tiangan::Ding, Tiangan::Ren], Wuxing::Mu),
    ([Tiangan::Wu, Tiangan::Gui], Wuxing::Huo),
];

/// The four clashes (四冲). 戊 and 己 clash with nothing.
pub const TIANGAN_CHONG: [[Tiangan; 2]; 4] = [
    [Tiangan::Jia, Tiangan::Geng],
    [Tiangan::Yi, Tiangan::Xin],
    [Tiangan::Bing, Tiangan::Ren],
    [Tiangan::Ding, Tiangan::Gui],
];

const fn same_pair(pair: [Tiangan; 2], a: Tiangan, b: Tiangan) -> bool {
    let (x, y) = (pair[0].index(), pair[1].index());
    let (a, b) = (a.index(), b.index());
    (x == a && y == b) || (x == b && y == a)
}

/// Element formed when `a` and `b` combine, in either order.
pub const fn tiangan_he(a: Tiangan, b: Tiangan) -> Option<Wuxing> {
    let mut i = 0;
    while i < TIANGAN_HE.len() {
        if same_pair(TIANGAN_HE[i].0, a, b) {
            return Some(TIANGAN_HE[i].1);
        }
        i += 1;
    }
    None
}

pub const fn tiangan_chong(a: Tiangan, b: Tiangan) -> bool {
    let mut i = 0;
    while i < TIANGAN_CHONG.len() {
        if same_pair(TIANGAN_CHONG[i], a, b) {
            return true;
        }
        i += 1;
    }
    false
}

/// Whether `from` generates `to` by element (甲 生 丙, not 丙 生 甲).
pub const fn tiangan_sheng(from: Tiangan, to: Tiangan) -> bool {
    from.wuxing().generates().index() == to.wuxing().index()
}

/// Whether `from` controls `to` by element (庚 克 甲, not 甲 克 庚).
pub const fn tiangan_ke(from: Tiangan, to: Tiangan) -> bool {
    from.wuxing().controls().index() == to.wuxing().index()
}

/// Whether the ordered pair `(a, b)` satisfies `relation`.
pub const fn tiangan_related(a: Tiangan, b: Tiangan, relation: TianganRelation) -> bool {
    match relation {
        TianganRelation::He => tiangan_he(a, b).is_some(),
        TianganRelation::Chong => tiangan_chong(a, b),
        TianganRelation::Sheng => tiangan_sheng(a, b),
        TianganRelation::Ke => tiangan_ke(a, b),
    }
}

/// Every pair among `tiangans` that satisfies `relation`.
///
/// Presence is all that counts; repeating a stem adds nothing. Pairs come
/// out in stem order. Undirected pairs list the lower stem first;
/// directed pairs list the acting stem first, so `[甲, 丙]` reads 甲 生 丙.
pub fn find_tiangan_combos(tiangans: &[Tiangan], relation: TianganRelation) -> Vec<[Tiangan; 2]> {
    let present: Vec<Tiangan> = ALL_TIANGANS
        .into_iter()
        .filter(|t| tiangans.contains(t))
        .collect();
    let mut out = Vec::new();
    for &a in &present {
        for &b in &present {
            if !relation.is_directional() && b <= a {
                continue;
            }
            if tiangan_related(a, b, relation) {
                out.push([a, b]);
            }
        }
    }
    out
}

/// [`find_tiangan_combos`] for every relation.
pub fn discover_tiangan_relations(
    tiangans: &[Tiangan],
) -> BTreeMap<TianganRelation, Vec<[Tiangan; 2]>> {
    ALL_TIANGAN_RELATIONS
        .iter()
        .map(|r| (*r, find_tiangan_combos(tiangans, *r)))
        .collect()
}
