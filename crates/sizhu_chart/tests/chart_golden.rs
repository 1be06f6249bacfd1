//! Golden charts and chart-wide properties against the sample reference
//! tables (data/sample_reference.txt).

use std::path::Path;

use chrono::{Days, NaiveDate, NaiveDateTime, Timelike};
use proptest::prelude::*;
use sizhu_base::{Ganzhi, find_month_tiangan, nayin};
use sizhu_calendar::{CalendarDate, ReferenceTables, day_ganzhi};
use sizhu_chart::{
    BaziChart, BaziError, BaziGender, BaziPrecision, ChartJson, PillarPosition, parse_birth_time,
};

fn load_sample() -> ReferenceTables {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data/sample_reference.txt");
    ReferenceTables::load(&path).expect("should load sample_reference.txt")
}

fn chart(birth: &str, gender: BaziGender) -> BaziChart {
    let t = load_sample();
    let birth = parse_birth_time(birth).unwrap();
    BaziChart::create(birth, gender, BaziPrecision::Day, &t).unwrap()
}

fn pillar_strings(c: &BaziChart) -> Vec<String> {
    c.pillars().iter().map(|gz| gz.to_string()).collect()
}

fn branch_string(c: &BaziChart) -> String {
    c.four_dizhis().iter().map(|dz| dz.hanzi()).collect()
}

// ---------------------------------------------------------------------------
// Golden charts
// ---------------------------------------------------------------------------

#[test]
fn chart_1984_04_02() {
    let c = chart("1984-04-02T04:02", BaziGender::Male);
    assert_eq!(pillar_strings(&c), vec!["甲子", "丁卯", "丙寅", "庚寅"]);
    assert_eq!(c.traits().year.tiangan.to_string(), "阳木");
    assert_eq!(
        c.nayins().into_array(),
        [Some("海中金"), Some("炉中火"), Some("炉中火"), Some("松柏木")]
    );
}

#[test]
fn chart_2000_lichun_evening() {
    let c = chart("2000-02-04 22:01", BaziGender::Female);
    assert_eq!(pillar_strings(&c), vec!["庚辰", "戊寅", "壬辰", "辛亥"]);
}

#[test]
fn hour_boundary_at_fifteen() {
    assert_eq!(branch_string(&chart("1998-03-17T14:59", BaziGender::Male)), "寅卯亥未");
    assert_eq!(branch_string(&chart("1998-03-17T15:00", BaziGender::Male)), "寅卯亥申");
}

#[test]
fn late_zi_hour_moves_day_branch() {
    let before = chart("1998-03-17T22:59", BaziGender::Male);
    let after = chart("1998-03-17T23:00", BaziGender::Male);
    assert_eq!(before.four_dizhis()[PillarPosition::Day].hanzi(), '亥');
    assert_eq!(after.four_dizhis()[PillarPosition::Day].hanzi(), '子');
    assert_eq!(before.bazi().ganzhi_date(), after.bazi().ganzhi_date());
}

#[test]
fn timezone_suffix_rejected() {
    for input in ["1984-04-02T04:02:00Z", "1984-04-02T04:02:00+08:00"] {
        assert!(matches!(parse_birth_time(input), Err(BaziError::Validation(_))));
    }
}

#[test]
fn snapshot_json_keys() {
    let c = chart("1984-04-02T04:02", BaziGender::Male);
    let json = c.to_json().unwrap();
    for key in [
        "\"birth_time\":\"1984-04-02T04:02:00\"",
        "\"pillars\":{\"year\":\"甲子\"",
        "\"hidden_tiangans\"",
        "\"tiangan_shishens\"",
        "\"dizhi_shishens\"",
        "\"12zhangshengs\"",
    ] {
        assert!(json.contains(key), "missing {key} in {json}");
    }
    let parsed: ChartJson = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, c.snapshot());
}

#[test]
fn luck_pillars_1984_female() {
    let t = load_sample();
    let c = chart("1984-04-02T04:02", BaziGender::Female);
    let start = c.dayun_start(&t).unwrap();
    assert_eq!((start.years, start.months, start.ganzhi_year), (9, 4, 1993));
    let dayun: Vec<String> = c.dayun(&t).unwrap().take(3).map(|d| d.ganzhi.to_string()).collect();
    assert_eq!(dayun, vec!["丙寅", "乙丑", "甲子"]);
    let childhood = c.xiaoyun().take_while(|x| (x.xusui as i32) < start.start_xusui(c.bazi()));
    assert_eq!(childhood.count(), 9);
}

#[test]
fn birth_outside_tables_is_calendar_error() {
    let t = load_sample();
    let birth = parse_birth_time("1950-06-01T12:00").unwrap();
    let err = BaziChart::create(birth, BaziGender::Male, BaziPrecision::Day, &t).unwrap_err();
    assert!(matches!(err, BaziError::Calendar(_)));
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

fn birth_strategy(max_days: u64) -> impl Strategy<Value = NaiveDateTime> {
    (0..max_days, 0u32..24, 0u32..60).prop_map(|(days, h, m)| {
        NaiveDate::from_ymd_opt(1981, 1, 1)
            .unwrap()
            .checked_add_days(Days::new(days))
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    })
}

fn gender_strategy() -> impl Strategy<Value = BaziGender> {
    prop_oneof![Just(BaziGender::Male), Just(BaziGender::Female)]
}

proptest! {
    #[test]
    fn pillars_are_consistent(birth in birth_strategy(17_499), gender in gender_strategy()) {
        let t = load_sample();
        let c = BaziChart::create(birth, gender, BaziPrecision::Day, &t).unwrap();
        let b = c.bazi();

        for gz in c.pillars() {
            prop_assert!(gz.is_cycle_member());
        }
        prop_assert_eq!(b.year_pillar(), Ganzhi::for_year(b.ganzhi_date().year));
        prop_assert_eq!(
            b.month_pillar().tiangan,
            find_month_tiangan(b.year_pillar().tiangan, b.month_pillar().dizhi)
        );
        let day_date = if birth.hour() == 23 {
            birth.date().succ_opt().unwrap()
        } else {
            birth.date()
        };
        prop_assert_eq!(b.day_pillar(), day_ganzhi(day_date));
        prop_assert_eq!(b.solar_date(), CalendarDate::from_naive_date(birth.date()));
    }

    #[test]
    fn annotations_hold(birth in birth_strategy(17_499)) {
        let t = load_sample();
        let c = BaziChart::create(birth, BaziGender::Male, BaziPrecision::Day, &t).unwrap();

        for (pos, ss) in c.shishens().entries() {
            prop_assert_eq!(ss.tiangan.is_none(), pos == PillarPosition::Day);
        }
        for h in c.hidden_tiangans() {
            prop_assert_eq!(h.iter().map(|(_, p)| u32::from(p)).sum::<u32>(), 100);
        }
        prop_assert_eq!(c.wuxing_counts().iter().map(|(_, n)| n).sum::<u32>(), 8);
        prop_assert_eq!(c.shishen_counts().iter().map(|(_, n)| n).sum::<u32>(), 7);
        for (gz, name) in c.pillars().iter().zip(c.nayins()) {
            prop_assert_eq!(name, nayin(*gz));
            prop_assert!(name.is_some_and(|n| !n.is_empty()), "{}", gz);
        }
    }

    #[test]
    fn dayun_steps_ten_years(birth in birth_strategy(12_000), gender in gender_strategy()) {
        let t = load_sample();
        let c = BaziChart::create(birth, gender, BaziPrecision::Day, &t).unwrap();
        let start = c.dayun_start(&t).unwrap();
        prop_assert!(start.years <= 10);
        prop_assert!(start.start_xusui(c.bazi()) >= 1);

        let step = start.direction.step();
        let month = c.bazi().month_pillar();
        let seq: Vec<_> = c.dayun(&t).unwrap().take(4).collect();
        prop_assert_eq!(seq[0].start_ganzhi_year, start.ganzhi_year);
        for (k, d) in seq.iter().enumerate() {
            prop_assert_eq!(d.ganzhi, month.offset(step * (k as i32 + 1)));
        }
        for pair in seq.windows(2) {
            prop_assert_eq!(pair[1].start_ganzhi_year - pair[0].start_ganzhi_year, 10);
        }
    }
}
