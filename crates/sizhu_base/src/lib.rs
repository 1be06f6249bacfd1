//! Sexagenary primitives for BaZi (四柱八字) charts.
//!
//! This crate provides:
//! - Heavenly stems, earthly branches and their element/polarity traits
//! - The sexagenary cycle and ganzhi pairs
//! - The 24 solar terms
//! - Rule tables: month and hour stems, hidden stems, ten gods, nayin,
//!   the twelve growth stages and 禄
//! - Stem and branch relations (合, 冲, 刑, ...) and shensha stars
//!
//! Nothing here depends on a calendar; see `sizhu_calendar` for dates.

pub mod dizhi;
pub mod dizhi_relation;
pub mod error;
pub mod ganzhi;
pub mod hidden_tiangan;
pub mod jieqi;
pub mod nayin;
pub mod rules;
pub mod shensha;
pub mod shishen;
pub mod tiangan;
pub mod tiangan_relation;
pub mod wuxing;
pub mod zhangsheng;

pub use dizhi::{ALL_DIZHIS, Dizhi};
pub use dizhi_relation::{
    ALL_DIZHI_RELATIONS, AnheDef, DizhiRelation, XingDef, XingSubType, discover_dizhi_relations,
    find_dizhi_combos,
};
pub use error::BaseError;
pub use ganzhi::{CYCLE_LEN, Ganzhi, JIAZI_YEAR_EPOCH, SEXAGENARY_CYCLE, sexagenary_cycle};
pub use hidden_tiangan::{HiddenTiangans, hidden_tiangans};
pub use jieqi::{ALL_JIEQIS, JIE, Jieqi};
pub use nayin::{NAYIN_NAMES, nayin, nayin_wuxing};
pub use rules::{
    find_hour_tiangan, find_month_tiangan, first_hour_tiangan, first_month_tiangan, hour_dizhi,
    month_dizhi,
};
pub use shensha::{ALL_SHENSHAS, Shensha};
pub use shishen::{ALL_SHISHENS, Shishen, shishen, shishen_for_dizhi};
pub use tiangan::{ALL_TIANGANS, Tiangan};
pub use tiangan_relation::{
    ALL_TIANGAN_RELATIONS, TianganRelation, discover_tiangan_relations, find_tiangan_combos,
};
pub use wuxing::{ALL_WUXINGS, Traits, Wuxing, WuxingRelation, Yinyang};
pub use zhangsheng::{
    ALL_ZHANGSHENGS, ShierZhangsheng, changsheng_dizhi, shier_zhangsheng, tiangan_lu,
};
