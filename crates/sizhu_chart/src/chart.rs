//! Chart annotations derived from the four pillars.
//!
//! Every view is a pure function of the pillars and is recomputed per call.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDateTime;
use sizhu_base::shensha::{hongluan, hongyan, taohua, tianxi, yima};
use sizhu_base::{
    ALL_SHENSHAS, ALL_SHISHENS, ALL_WUXINGS, Dizhi, DizhiRelation, Ganzhi, HiddenTiangans,
    Shensha, ShierZhangsheng, Shishen, Tiangan, TianganRelation, Traits, Wuxing,
    discover_dizhi_relations, discover_tiangan_relations, hidden_tiangans, nayin,
    shier_zhangsheng, shishen, shishen_for_dizhi,
};
use sizhu_calendar::ReferenceData;

use crate::bazi::Bazi;
use crate::error::BaziError;
use crate::options::{BaziGender, BaziPrecision};
use crate::pillars::{FourPillars, PillarPosition};
use crate::snapshot::ChartJson;
use crate::transits::{self, Dayun, DayunStart, Liunian, Xiaoyun};

/// Element and polarity of a pillar's stem and branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PillarTraits {
    pub tiangan: Traits,
    pub dizhi: Traits,
}

/// Ten gods of a pillar relative to the day master.
///
/// The day pillar's stem is the day master itself and has no ten god.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PillarShishens {
    pub tiangan: Option<Shishen>,
    pub dizhi: Shishen,
}

/// An annotated BaZi chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BaziChart {
    bazi: Bazi,
}

impl BaziChart {
    pub fn new(bazi: Bazi) -> Self {
        Self { bazi }
    }

    /// Derive the birth record and wrap it in a chart.
    pub fn create(
        birth: NaiveDateTime,
        gender: BaziGender,
        precision: BaziPrecision,
        data: &dyn ReferenceData,
    ) -> Result<Self, BaziError> {
        Bazi::new(birth, gender, precision, data).map(Self::new)
    }

    pub fn bazi(&self) -> &Bazi {
        &self.bazi
    }

    pub fn pillars(&self) -> FourPillars<Ganzhi> {
        self.bazi.pillars()
    }

    pub fn four_tiangans(&self) -> FourPillars<Tiangan> {
        self.bazi.four_tiangans()
    }

    pub fn four_dizhis(&self) -> FourPillars<Dizhi> {
        self.bazi.four_dizhis()
    }

    pub fn day_master(&self) -> Tiangan {
        self.bazi.day_master()
    }

    pub fn traits(&self) -> FourPillars<PillarTraits> {
        self.pillars().map(|gz| PillarTraits {
            tiangan: gz.tiangan.traits(),
            dizhi: gz.dizhi.traits(),
        })
    }

    pub fn hidden_tiangans(&self) -> FourPillars<HiddenTiangans> {
        self.four_dizhis().map(hidden_tiangans)
    }

    pub fn shishens(&self) -> FourPillars<PillarShishens> {
        let dm = self.day_master();
        let pillars = self.pillars();
        FourPillars::from_fn(|pos| {
            let gz = pillars[pos];
            PillarShishens {
                tiangan: (pos != PillarPosition::Day).then(|| shishen(dm, gz.tiangan)),
                dizhi: shishen_for_dizhi(dm, gz.dizhi),
            }
        })
    }

    /// Nayin of each pillar; `None` for a pair outside the sexagenary cycle.
    pub fn nayins(&self) -> FourPillars<Option<&'static str>> {
        self.pillars().map(nayin)
    }

    /// Growth stage of the day master at each pillar's branch.
    pub fn shier_zhangshengs(&self) -> FourPillars<ShierZhangsheng> {
        let dm = self.day_master();
        self.four_dizhis().map(|dz| shier_zhangsheng(dm, dz))
    }

    /// Element tally over the eight characters, in generating order.
    pub fn wuxing_counts(&self) -> [(Wuxing, u32); 5] {
        let mut counts = ALL_WUXINGS.map(|w| (w, 0u32));
        for gz in self.pillars() {
            counts[gz.tiangan.wuxing().index() as usize].1 += 1;
            counts[gz.dizhi.wuxing().index() as usize].1 += 1;
        }
        counts
    }

    /// Ten-god tally over the three visible stems besides the day master
    /// and the four branches.
    pub fn shishen_counts(&self) -> [(Shishen, u32); 10] {
        let mut counts = ALL_SHISHENS.map(|s| (s, 0u32));
        for ss in self.shishens() {
            if let Some(t) = ss.tiangan {
                counts[t.index() as usize].1 += 1;
            }
            counts[ss.dizhi.index() as usize].1 += 1;
        }
        counts
    }

    /// Stem pairs among the four pillars, per relation.
    pub fn tiangan_relations(&self) -> BTreeMap<TianganRelation, Vec<[Tiangan; 2]>> {
        discover_tiangan_relations(&self.four_tiangans().into_array())
    }

    /// Branch combinations among the four pillars, per relation.
    pub fn dizhi_relations(&self) -> BTreeMap<DizhiRelation, Vec<Vec<Dizhi>>> {
        discover_dizhi_relations(&self.four_dizhis().into_array())
    }

    /// Branches carrying each shensha star.
    ///
    /// 桃花 and 驿马 are looked up from the year and the day branch,
    /// 红鸾 and 天喜 from the year branch, each against the other three
    /// pillars. 红艳 is looked up from the day master against all four.
    /// Every star has an entry, empty when absent.
    pub fn shensha(&self) -> BTreeMap<Shensha, BTreeSet<Dizhi>> {
        use PillarPosition::{Day, Year};

        let dzs = self.four_dizhis();
        let (year, day) = (dzs[Year], dzs[Day]);
        let lookups = [
            (Shensha::Taohua, Some(Year), taohua(year)),
            (Shensha::Taohua, Some(Day), taohua(day)),
            (Shensha::Hongyan, None, hongyan(self.day_master())),
            (Shensha::Hongluan, Some(Year), hongluan(year)),
            (Shensha::Tianxi, Some(Year), tianxi(year)),
            (Shensha::Yima, Some(Year), yima(year)),
            (Shensha::Yima, Some(Day), yima(day)),
        ];

        let mut out: BTreeMap<Shensha, BTreeSet<Dizhi>> =
            ALL_SHENSHAS.iter().map(|s| (*s, BTreeSet::new())).collect();
        for (star, from, target) in lookups {
            let hit = dzs
                .entries()
                .any(|(pos, dz)| Some(pos) != from && *dz == target);
            if hit {
                out.entry(star).or_default().insert(target);
            }
        }
        out
    }

    /// Owned, serializable view of the chart.
    pub fn snapshot(&self) -> ChartJson {
        ChartJson::from_chart(self)
    }

    /// The snapshot rendered as JSON text.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        self.snapshot().to_json_string()
    }

    pub fn liunian(&self) -> impl Iterator<Item = Liunian> + use<> {
        transits::liunian(&self.bazi)
    }

    pub fn dayun_start(&self, data: &dyn ReferenceData) -> Result<DayunStart, BaziError> {
        transits::dayun_start(&self.bazi, data)
    }

    pub fn dayun(
        &self,
        data: &dyn ReferenceData,
    ) -> Result<impl Iterator<Item = Dayun> + use<>, BaziError> {
        transits::dayun(&self.bazi, data)
    }

    pub fn xiaoyun(&self) -> impl Iterator<Item = Xiaoyun> + use<> {
        transits::xiaoyun(&self.bazi)
    }
}
