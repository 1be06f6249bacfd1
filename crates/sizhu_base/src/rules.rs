//! Pillar rule tables: month stems from the year stem (年上起月) and hour
//! stems from the day stem (日上起时), plus the clock-hour branch partition.

use crate::dizhi::{ALL_DIZHIS, Dizhi};
use crate::tiangan::Tiangan;

/// Stem of the first ganzhi month (寅月) for a year stem.
///
/// 甲己 → 丙寅, 乙庚 → 戊寅, 丙辛 → 庚寅, 丁壬 → 壬寅, 戊癸 → 甲寅.
pub const fn first_month_tiangan(year_tiangan: Tiangan) -> Tiangan {
    match year_tiangan {
        Tiangan::Jia | Tiangan::Ji => Tiangan::Bing,
        Tiangan::Yi | Tiangan::Geng => Tiangan::Wu,
        Tiangan::Bing | Tiangan::Xin => Tiangan::Geng,
        Tiangan::Ding | Tiangan::Ren => Tiangan::Ren,
        Tiangan::Wu | Tiangan::Gui => Tiangan::Jia,
    }
}

/// Stem of the 子 hour for a day stem.
///
/// 甲己 → 甲子, 乙庚 → 丙子, 丙辛 → 戊子, 丁壬 → 庚子, 戊癸 → 壬子.
pub const fn first_hour_tiangan(day_tiangan: Tiangan) -> Tiangan {
    match day_tiangan {
        Tiangan::Jia | Tiangan::Ji => Tiangan::Jia,
        Tiangan::Yi | Tiangan::Geng => Tiangan::Bing,
        Tiangan::Bing | Tiangan::Xin => Tiangan::Wu,
        Tiangan::Ding | Tiangan::Ren => Tiangan::Geng,
        Tiangan::Wu | Tiangan::Gui => Tiangan::Ren,
    }
}

/// Month stem from the year stem and the month branch.
///
/// The first month is 寅, so the month's offset from the first month is
/// `(branch − 2) mod 12`; the stem advances by that many steps.
pub const fn find_month_tiangan(year_tiangan: Tiangan, month_dizhi: Dizhi) -> Tiangan {
    let month_offset = (month_dizhi.index() as i32 - 2).rem_euclid(12);
    first_month_tiangan(year_tiangan).offset(month_offset)
}

/// Hour stem from the day stem and the hour branch.
pub const fn find_hour_tiangan(day_tiangan: Tiangan, hour_dizhi: Dizhi) -> Tiangan {
    first_hour_tiangan(day_tiangan).offset(hour_dizhi.index() as i32)
}

/// Branch of ganzhi month `month` (1 = 寅 .. 12 = 丑).
///
/// Values outside 1..=12 wrap.
pub const fn month_dizhi(month: u32) -> Dizhi {
    ALL_DIZHIS[((2 + month as i64 - 1).rem_euclid(12)) as usize]
}

/// Branch of a clock hour: two hours per branch, 子 covering 23:00–00:59.
pub const fn hour_dizhi(hour: u32) -> Dizhi {
    ALL_DIZHIS[(((hour + 1) / 2) % 12) as usize]
}
