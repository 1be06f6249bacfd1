//! Nayin (纳音): one of 30 sound-element names per consecutive pair of the
//! sexagenary cycle (甲子乙丑 海中金, 丙寅丁卯 炉中火, ...).

use crate::ganzhi::Ganzhi;
use crate::wuxing::Wuxing;

/// The 30 nayin names; entry `i` covers cycle positions `2i` and `2i + 1`.
pub const NAYIN_NAMES: [&str; 30] = [
    "海中金", "炉中火", "大林木", "路旁土", "剑锋金", "山头火", "涧下水", "城头土", "白蜡金", "杨柳木",
    "泉中水", "屋上土", "霹雳火", "松柏木", "长流水", "沙中金", "山下火", "平地木", "壁上土", "金箔金",
    "覆灯火", "天河水", "大驿土", "钗钏金", "桑柘木", "大溪水", "沙中土", "天上火", "石榴木", "大海水",
];

/// Nayin name of a ganzhi, or `None` if the pair is not in the cycle.
pub const fn nayin(ganzhi: Ganzhi) -> Option<&'static str> {
    match ganzhi.cycle_index() {
        Some(i) => Some(NAYIN_NAMES[i as usize / 2]),
        None => None,
    }
}

/// Element named by the last character of the nayin.
pub fn nayin_wuxing(ganzhi: Ganzhi) -> Option<Wuxing> {
    let last = nayin(ganzhi)?.chars().last()?;
    crate::wuxing::ALL_WUXINGS
        .iter()
        .copied()
        .find(|w| w.hanzi() == last)
}
