//! Owned JSON view of a chart.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::chart::BaziChart;
use crate::options::{BaziGender, BaziPrecision};
use crate::pillars::FourPillars;

/// Format of `birth_time`.
pub const BIRTH_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Serializable chart snapshot.
///
/// Per-pillar fields are maps keyed `year`, `month`, `day`, `hour`.
/// Hidden stems keep their table order, dominant first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartJson {
    pub birth_time: String,
    pub gender: BaziGender,
    pub precision: BaziPrecision,
    pub pillars: FourPillars<String>,
    pub tiangan_traits: FourPillars<String>,
    pub dizhi_traits: FourPillars<String>,
    pub hidden_tiangans: FourPillars<Map<String, Value>>,
    pub tiangan_shishens: FourPillars<Option<String>>,
    pub dizhi_shishens: FourPillars<Option<String>>,
    pub nayins: FourPillars<Option<String>>,
    #[serde(rename = "12zhangshengs")]
    pub zhangshengs: FourPillars<String>,
}

impl ChartJson {
    pub fn from_chart(chart: &BaziChart) -> Self {
        let bazi = chart.bazi();
        let traits = chart.traits();
        let shishens = chart.shishens();

        let hidden_tiangans = chart.hidden_tiangans().map(|h| {
            h.iter()
                .map(|(tg, pct)| (tg.to_string(), Value::from(pct)))
                .collect::<Map<_, _>>()
        });

        Self {
            birth_time: bazi.solar_datetime().format(BIRTH_TIME_FORMAT).to_string(),
            gender: bazi.gender(),
            precision: bazi.precision(),
            pillars: chart.pillars().map(|gz| gz.to_string()),
            tiangan_traits: traits.map(|t| t.tiangan.to_string()),
            dizhi_traits: traits.map(|t| t.dizhi.to_string()),
            hidden_tiangans,
            tiangan_shishens: shishens.map(|s| s.tiangan.map(|ss| ss.to_string())),
            dizhi_shishens: shishens.map(|s| Some(s.dizhi.to_string())),
            nayins: chart.nayins().map(|n| n.map(str::to_owned)),
            zhangshengs: chart.shier_zhangshengs().map(|z| z.to_string()),
        }
    }

    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl From<&BaziChart> for ChartJson {
    fn from(chart: &BaziChart) -> Self {
        Self::from_chart(chart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{at, sample_tables};

    fn snapshot() -> ChartJson {
        let t = sample_tables();
        BaziChart::create(at(1984, 4, 2, 4, 2), BaziGender::Male, BaziPrecision::Day, &t)
            .unwrap()
            .snapshot()
    }

    #[test]
    fn scalar_fields() {
        let s = snapshot();
        assert_eq!(s.birth_time, "1984-04-02T04:02:00");
        assert_eq!(s.pillars.year, "甲子");
        assert_eq!(s.tiangan_traits.year, "阳木");
        assert_eq!(s.tiangan_shishens.day, None);
        assert_eq!(s.dizhi_shishens.day.as_deref(), Some("偏印"));
        assert_eq!(s.zhangshengs.year, "胎");
    }

    #[test]
    fn hidden_stems_keep_order() {
        let s = snapshot();
        let keys: Vec<&str> = s.hidden_tiangans.day.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["甲", "丙", "戊"]);
        assert_eq!(s.hidden_tiangans.year["癸"], Value::from(100));
    }

    #[test]
    fn json_layout() {
        let v: Value = serde_json::from_str(&snapshot().to_json_string().unwrap()).unwrap();
        let keys: Vec<&str> = v.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec![
                "birth_time",
                "gender",
                "precision",
                "pillars",
                "tiangan_traits",
                "dizhi_traits",
                "hidden_tiangans",
                "tiangan_shishens",
                "dizhi_shishens",
                "nayins",
                "12zhangshengs",
            ]
        );
        assert_eq!(v["gender"], "male");
        assert_eq!(v["precision"], "day");
        assert!(v["tiangan_shishens"]["day"].is_null());
        assert_eq!(v["nayins"]["hour"], "松柏木");
    }

    #[test]
    fn parses_back() {
        let s = snapshot();
        let back: ChartJson = serde_json::from_str(&s.to_json_pretty().unwrap()).unwrap();
        assert_eq!(back, s);
    }
}
