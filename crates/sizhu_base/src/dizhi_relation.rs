//! Relations between earthly branches (地支关系).
//!
//! Combinations (三会, 六合, 暗合, 通合, 通禄合, 三合, 半合), punishments
//! (刑), clashes (冲), breaks (破), harms (害) and the element relations
//! 生 and 克. Every table relation except 刑 ignores the order of its
//! branches; 生 and 克 go by element alone and are directional.

use std::collections::BTreeMap;
use std::fmt;

use crate::dizhi::{ALL_DIZHIS, Dizhi};
use crate::wuxing::Wuxing;

use Dizhi::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DizhiRelation {
    Sanhui,
    Liuhe,
    Anhe,
    Tonghe,
    Tongluhe,
    Sanhe,
    Banhe,
    Xing,
    Chong,
    Po,
    Hai,
    Sheng,
    Ke,
}

pub const ALL_DIZHI_RELATIONS: [DizhiRelation; 13] = [
    DizhiRelation::Sanhui,
    DizhiRelation::Liuhe,
    DizhiRelation::Anhe,
    DizhiRelation::Tonghe,
    DizhiRelation::Tongluhe,
    DizhiRelation::Sanhe,
    DizhiRelation::Banhe,
    DizhiRelation::Xing,
    DizhiRelation::Chong,
    DizhiRelation::Po,
    DizhiRelation::Hai,
    DizhiRelation::Sheng,
    DizhiRelation::Ke,
];

impl DizhiRelation {
    pub const fn hanzi(self) -> &'static str {
        match self {
            Self::Sanhui => "三会",
            Self::Liuhe => "六合",
            Self::Anhe => "暗合",
            Self::Tonghe => "通合",
            Self::Tongluhe => "通禄合",
            Self::Sanhe => "三合",
            Self::Banhe => "半合",
            Self::Xing => "刑",
            Self::Chong => "冲",
            Self::Po => "破",
            Self::Hai => "害",
            Self::Sheng => "生",
            Self::Ke => "克",
        }
    }
}

impl fmt::Display for DizhiRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hanzi())
    }
}

/// Which pairs count as 暗合 (hidden combination).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnheDef {
    /// 卯申, 巳酉, 亥午, 子巳, 寅午.
    #[default]
    Normal,
    /// [`AnheDef::Normal`] plus 寅丑.
    NormalExtended,
    /// The 盲派 reading: 卯申, 寅丑, 午亥.
    Mangpai,
}

/// How strictly [`xing`] matches its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum XingDef {
    /// Only complete patterns count and order is ignored: 寅巳申 needs all
    /// three branches.
    #[default]
    Strict,
    /// Also accepts the directed pairs of a 三刑 (寅刑巳, 巳刑申, 申刑寅,
    /// 丑刑戌, 戌刑未, 未刑丑), so order matters for two branches.
    Loose,
}

/// Kind of punishment (刑).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum XingSubType {
    /// 三刑: 寅巳申 or 丑未戌.
    Sanxing,
    /// 子卯刑.
    Zimaoxing,
    /// 自刑: 辰, 午, 酉 or 亥 twice.
    Zixing,
}

impl XingSubType {
    pub const fn hanzi(self) -> &'static str {
        match self {
            Self::Sanxing => "三刑",
            Self::Zimaoxing => "子卯刑",
            Self::Zixing => "自刑",
        }
    }
}

impl fmt::Display for XingSubType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hanzi())
    }
}

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

/// Seasonal gatherings (三会方).
pub const DIZHI_SANHUI: [([Dizhi; 3], Wuxing); 4] = [
    ([Yin, Mao, Chen], Wuxing::Mu),
    ([Si, Wu, Wei], Wuxing::Huo),
    ([Shen, You, Xu], Wuxing::Jin),
    ([Hai, Zi, Chou], Wuxing::Shui),
];

pub const DIZHI_LIUHE: [([Dizhi; 2], Wuxing); 6] = [
    ([Zi, Chou], Wuxing::Tu),
    ([Yin, Hai], Wuxing::Mu),
    ([Mao, Xu], Wuxing::Huo),
    ([Chen, You], Wuxing::Jin),
    ([Si, Shen], Wuxing::Shui),
    ([Wu, Wei], Wuxing::Tu),
];

const ANHE_NORMAL: [[Dizhi; 2]; 5] = [[Mao, Shen], [Si, You], [Hai, Wu], [Zi, Si], [Yin, Wu]];
const ANHE_NORMAL_EXTENDED: [[Dizhi; 2]; 6] = [
    [Mao, Shen],
    [Si, You],
    [Hai, Wu],
    [Zi, Si],
    [Yin, Wu],
    [Yin, Chou],
];
const ANHE_MANGPAI: [[Dizhi; 2]; 3] = [[Mao, Shen], [Yin, Chou], [Wu, Hai]];

/// Pairs whose hidden stems all combine with each other.
pub const DIZHI_TONGHE: [[Dizhi; 2]; 2] = [[Yin, Chou], [Wu, Hai]];

/// Pairs holding the 禄 of two combining stems.
pub const DIZHI_TONGLUHE: [[Dizhi; 2]; 5] =
    [[Mao, Shen], [Si, You], [Hai, Wu], [Zi, Si], [Yin, Wu]];

/// Triple combinations (三合局), by element.
pub const DIZHI_SANHE: [([Dizhi; 3], Wuxing); 4] = [
    ([Si, You, Chou], Wuxing::Jin),
    ([Hai, Mao, Wei], Wuxing::Mu),
    ([Shen, Zi, Chen], Wuxing::Shui),
    ([Yin, Wu, Xu], Wuxing::Huo),
];

/// Half combinations: a 三合 with its middle branch and one end.
pub const DIZHI_BANHE: [([Dizhi; 2], Wuxing); 8] = [
    ([Si, You], Wuxing::Jin),
    ([You, Chou], Wuxing::Jin),
    ([Hai, Mao], Wuxing::Mu),
    ([Mao, Wei], Wuxing::Mu),
    ([Shen, Zi], Wuxing::Shui),
    ([Zi, Chen], Wuxing::Shui),
    ([Yin, Wu], Wuxing::Huo),
    ([Wu, Xu], Wuxing::Huo),
];

/// Complete punishment patterns, each listed once.
pub const DIZHI_XING: [(&[Dizhi], XingSubType); 7] = [
    (&[Yin, Si, Shen], XingSubType::Sanxing),
    (&[Chou, Wei, Xu], XingSubType::Sanxing),
    (&[Zi, Mao], XingSubType::Zimaoxing),
    (&[Chen, Chen], XingSubType::Zixing),
    (&[Wu, Wu], XingSubType::Zixing),
    (&[You, You], XingSubType::Zixing),
    (&[Hai, Hai], XingSubType::Zixing),
];

/// Directed halves of the two 三刑, accepted under [`XingDef::Loose`].
const XING_DIRECTED: [[Dizhi; 2]; 6] = [
    [Yin, Si],
    [Si, Shen],
    [Shen, Yin],
    [Chou, Xu],
    [Xu, Wei],
    [Wei, Chou],
];

/// Opposite branches, six apart.
pub const DIZHI_CHONG: [[Dizhi; 2]; 6] = [
    [Zi, Wu],
    [Chou, Wei],
    [Yin, Shen],
    [Mao, You],
    [Chen, Xu],
    [Si, Hai],
];

pub const DIZHI_PO: [[Dizhi; 2]; 6] = [
    [Zi, You],
    [Yin, Hai],
    [Chen, Chou],
    [Wu, Mao],
    [Shen, Si],
    [Xu, Wei],
];

/// Each branch harms the clash of its 六合 partner.
pub const DIZHI_HAI: [[Dizhi; 2]; 6] = [
    [Zi, Wei],
    [Chou, Wu],
    [Yin, Si],
    [Mao, Chen],
    [Shen, Hai],
    [You, Xu],
];

// ---------------------------------------------------------------------------
// Pair and triple checks
// ---------------------------------------------------------------------------

const fn same_pair(pair: [Dizhi; 2], a: Dizhi, b: Dizhi) -> bool {
    let (x, y) = (pair[0].index(), pair[1].index());
    let (a, b) = (a.index(), b.index());
    (x == a && y == b) || (x == b && y == a)
}

const fn pair_listed(table: &[[Dizhi; 2]], a: Dizhi, b: Dizhi) -> bool {
    let mut i = 0;
    while i < table.len() {
        if same_pair(table[i], a, b) {
            return true;
        }
        i += 1;
    }
    false
}

const fn pair_element(table: &[([Dizhi; 2], Wuxing)], a: Dizhi, b: Dizhi) -> Option<Wuxing> {
    let mut i = 0;
    while i < table.len() {
        if same_pair(table[i].0, a, b) {
            return Some(table[i].1);
        }
        i += 1;
    }
    None
}

/// Whether `a` and `b` hold the same branches, counting repeats.
fn same_multiset(a: &[Dizhi], b: &[Dizhi]) -> bool {
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}

fn triple_element(table: &[([Dizhi; 3], Wuxing)], dizhis: [Dizhi; 3]) -> Option<Wuxing> {
    table
        .iter()
        .find(|(combo, _)| same_multiset(combo, &dizhis))
        .map(|(_, w)| *w)
}

/// Element of the seasonal gathering formed by three branches, in any order.
pub fn sanhui(a: Dizhi, b: Dizhi, c: Dizhi) -> Option<Wuxing> {
    triple_element(&DIZHI_SANHUI, [a, b, c])
}

pub const fn liuhe(a: Dizhi, b: Dizhi) -> Option<Wuxing> {
    pair_element(&DIZHI_LIUHE, a, b)
}

pub const fn anhe(a: Dizhi, b: Dizhi, definition: AnheDef) -> bool {
    match definition {
        AnheDef::Normal => pair_listed(&ANHE_NORMAL, a, b),
        AnheDef::NormalExtended => pair_listed(&ANHE_NORMAL_EXTENDED, a, b),
        AnheDef::Mangpai => pair_listed(&ANHE_MANGPAI, a, b),
    }
}

pub const fn tonghe(a: Dizhi, b: Dizhi) -> bool {
    pair_listed(&DIZHI_TONGHE, a, b)
}

pub const fn tongluhe(a: Dizhi, b: Dizhi) -> bool {
    pair_listed(&DIZHI_TONGLUHE, a, b)
}

/// Element of the triple combination formed by three branches, in any order.
pub fn sanhe(a: Dizhi, b: Dizhi, c: Dizhi) -> Option<Wuxing> {
    triple_element(&DIZHI_SANHE, [a, b, c])
}

pub const fn banhe(a: Dizhi, b: Dizhi) -> Option<Wuxing> {
    pair_element(&DIZHI_BANHE, a, b)
}

/// Kind of punishment formed by exactly `dizhis`.
///
/// The whole input must be one pattern: a single branch, an empty slice
/// or more than three branches never match, and a repeated branch must
/// appear exactly twice for 自刑.
pub fn xing(dizhis: &[Dizhi], definition: XingDef) -> Option<XingSubType> {
    if dizhis.len() > 3 {
        return None;
    }
    let complete = DIZHI_XING
        .iter()
        .find(|(combo, _)| same_multiset(combo, dizhis))
        .map(|(_, kind)| *kind);
    match (complete, definition, dizhis) {
        (Some(kind), _, _) => Some(kind),
        (None, XingDef::Loose, [a, b]) => XING_DIRECTED
            .iter()
            .any(|pair| pair[0] == *a && pair[1] == *b)
            .then_some(XingSubType::Sanxing),
        _ => None,
    }
}

pub const fn chong(a: Dizhi, b: Dizhi) -> bool {
    pair_listed(&DIZHI_CHONG, a, b)
}

pub const fn po(a: Dizhi, b: Dizhi) -> bool {
    pair_listed(&DIZHI_PO, a, b)
}

pub const fn hai(a: Dizhi, b: Dizhi) -> bool {
    pair_listed(&DIZHI_HAI, a, b)
}

/// Whether `from` generates `to` by element.
pub const fn dizhi_sheng(from: Dizhi, to: Dizhi) -> bool {
    from.wuxing().generates().index() == to.wuxing().index()
}

/// Whether `from` controls `to` by element.
pub const fn dizhi_ke(from: Dizhi, to: Dizhi) -> bool {
    from.wuxing().controls().index() == to.wuxing().index()
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

fn pairs_present(table: &[[Dizhi; 2]], present: &[Dizhi]) -> Vec<Vec<Dizhi>> {
    table
        .iter()
        .filter(|pair| pair.iter().all(|d| present.contains(d)))
        .map(|pair| pair.to_vec())
        .collect()
}

fn combos_present<const N: usize>(
    table: &[([Dizhi; N], Wuxing)],
    present: &[Dizhi],
) -> Vec<Vec<Dizhi>> {
    table
        .iter()
        .filter(|(combo, _)| combo.iter().all(|d| present.contains(d)))
        .map(|(combo, _)| combo.to_vec())
        .collect()
}

/// Ordered pairs of distinct branches among `present` that satisfy `f`.
fn directed_pairs(present: &[Dizhi], f: fn(Dizhi, Dizhi) -> bool) -> Vec<Vec<Dizhi>> {
    let mut out = Vec::new();
    for from in ALL_DIZHIS.iter().filter(|d| present.contains(d)) {
        for to in ALL_DIZHIS.iter().filter(|d| present.contains(d)) {
            if f(*from, *to) {
                out.push(vec![*from, *to]);
            }
        }
    }
    out
}

/// Every combination among `dizhis` that satisfies `relation`.
///
/// Combos come out in table order. Only 刑 counts repeats, so 辰辰
/// appears only when 辰 is given twice; the other relations look at
/// presence alone. 暗合 uses [`AnheDef::NormalExtended`], the widest
/// reading. 生 and 克 pairs list the acting branch first.
pub fn find_dizhi_combos(dizhis: &[Dizhi], relation: DizhiRelation) -> Vec<Vec<Dizhi>> {
    match relation {
        DizhiRelation::Sanhui => combos_present(&DIZHI_SANHUI[..], dizhis),
        DizhiRelation::Liuhe => combos_present(&DIZHI_LIUHE[..], dizhis),
        DizhiRelation::Anhe => pairs_present(&ANHE_NORMAL_EXTENDED, dizhis),
        DizhiRelation::Tonghe => pairs_present(&DIZHI_TONGHE, dizhis),
        DizhiRelation::Tongluhe => pairs_present(&DIZHI_TONGLUHE, dizhis),
        DizhiRelation::Sanhe => combos_present(&DIZHI_SANHE[..], dizhis),
        DizhiRelation::Banhe => combos_present(&DIZHI_BANHE[..], dizhis),
        DizhiRelation::Xing => DIZHI_XING
            .iter()
            .filter(|(combo, _)| {
                combo.iter().all(|d| {
                    let needed = combo.iter().filter(|x| *x == d).count();
                    dizhis.iter().filter(|x| *x == d).count() >= needed
                })
            })
            .map(|(combo, _)| combo.to_vec())
            .collect(),
        DizhiRelation::Chong => pairs_present(&DIZHI_CHONG, dizhis),
        DizhiRelation::Po => pairs_present(&DIZHI_PO, dizhis),
        DizhiRelation::Hai => pairs_present(&DIZHI_HAI, dizhis),
        DizhiRelation::Sheng => directed_pairs(dizhis, dizhi_sheng),
        DizhiRelation::Ke => directed_pairs(dizhis, dizhi_ke),
    }
}

/// [`find_dizhi_combos`] for every relation.
pub fn discover_dizhi_relations(dizhis: &[Dizhi]) -> BTreeMap<DizhiRelation, Vec<Vec<Dizhi>>> {
    ALL_DIZHI_RELATIONS
        .iter()
        .map(|r| (*r, find_dizhi_combos(dizhis, *r)))
        .collect()
}
