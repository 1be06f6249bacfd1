//! Plain-text reference table parser.
//!
//! The file holds two sections, each between `\begin <name>` and `\end`:
//!
//! ```text
//! \begin jieqi
//! J <year> <24 × MM-DD, 立春 .. 大寒>
//! \end
//! \begin lunar
//! L <year> <YYYY-MM-DD> <leap month or 0> <12 or 13 month lengths>
//! \end
//! ```
//!
//! `#` starts a comment. Text outside the sections is ignored.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;
use std::path::Path;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use sizhu_base::{ALL_JIEQIS, Jieqi};
use tracing::debug;

use crate::error::CalendarError;
use crate::reference::{LunarYearInfo, ReferenceData};

/// Jieqi dates and lunar-year layouts loaded from a text table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceTables {
    jieqi: BTreeMap<i32, [NaiveDate; 24]>,
    lunar: BTreeMap<i32, LunarYearInfo>,
}

impl ReferenceTables {
    /// Load a table file from a path.
    pub fn load(path: &Path) -> Result<Self, CalendarError> {
        let content = std::fs::read_to_string(path)?;
        let tables = Self::parse(&content)?;
        debug!(
            path = %path.display(),
            jieqi_years = tables.jieqi.len(),
            lunar_years = tables.lunar.len(),
            "loaded reference tables"
        );
        Ok(tables)
    }

    /// Parse a table from its text content.
    pub fn parse(content: &str) -> Result<Self, CalendarError> {
        let jieqi_lines = extract_section(content, "jieqi")?;
        let lunar_lines = extract_section(content, "lunar")?;

        let mut jieqi = BTreeMap::new();
        for (line_no, line) in jieqi_lines {
            let (year, dates) = parse_jieqi_line(line)
                .map_err(|msg| CalendarError::TableParse(format!("line {line_no}: {msg}")))?;
            if jieqi.insert(year, dates).is_some() {
                return Err(CalendarError::TableParse(format!(
                    "line {line_no}: duplicate jieqi year {year}"
                )));
            }
        }

        let mut lunar = BTreeMap::new();
        for (line_no, line) in lunar_lines {
            let (year, info) = parse_lunar_line(line)
                .map_err(|msg| CalendarError::TableParse(format!("line {line_no}: {msg}")))?;
            if lunar.insert(year, info).is_some() {
                return Err(CalendarError::TableParse(format!(
                    "line {line_no}: duplicate lunar year {year}"
                )));
            }
        }

        check_contiguous("jieqi", jieqi.keys().copied())?;
        check_contiguous("lunar", lunar.keys().copied())?;

        Ok(Self { jieqi, lunar })
    }

    /// Years covered by both sections, or `None` if they do not overlap.
    pub fn year_range(&self) -> Option<RangeInclusive<i32>> {
        let (j0, j1) = key_span(&self.jieqi)?;
        let (l0, l1) = key_span(&self.lunar)?;
        let lo = j0.max(l0);
        let hi = j1.min(l1);
        (lo <= hi).then_some(lo..=hi)
    }

    /// Years with jieqi entries.
    pub fn jieqi_years(&self) -> Option<RangeInclusive<i32>> {
        key_span(&self.jieqi).map(|(lo, hi)| lo..=hi)
    }

    /// Years with lunar-year entries.
    pub fn lunar_years(&self) -> Option<RangeInclusive<i32>> {
        key_span(&self.lunar).map(|(lo, hi)| lo..=hi)
    }
}

impl FromStr for ReferenceTables {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl ReferenceData for ReferenceTables {
    fn jieqi_date(&self, year: i32, term: Jieqi) -> Result<NaiveDate, CalendarError> {
        self.jieqi
            .get(&year)
            .map(|dates| dates[term.index() as usize])
            .ok_or(CalendarError::DataRange { year })
    }

    fn lunar_year_info(&self, year: i32) -> Result<LunarYearInfo, CalendarError> {
        self.lunar
            .get(&year)
            .cloned()
            .ok_or(CalendarError::DataRange { year })
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn key_span<V>(map: &BTreeMap<i32, V>) -> Option<(i32, i32)> {
    Some((*map.keys().next()?, *map.keys().next_back()?))
}

/// Collect the non-empty, comment-stripped lines of section `name`,
/// paired with their 1-based line numbers.
fn extract_section<'a>(
    content: &'a str,
    name: &str,
) -> Result<Vec<(usize, &'a str)>, CalendarError> {
    let mut in_section = false;
    let mut found = false;
    let mut lines = Vec::new();

    for (i, raw) in content.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        if let Some(rest) = line.strip_prefix("\\begin") {
            if in_section {
                return Err(CalendarError::TableParse(format!(
                    "line {}: nested \\begin inside section '{name}'",
                    i + 1
                )));
            }
            if rest.trim() == name {
                in_section = true;
                found = true;
            }
            continue;
        }
        if line == "\\end" {
            in_section = false;
            continue;
        }
        if in_section {
            lines.push((i + 1, line));
        }
    }

    if !found {
        return Err(CalendarError::TableParse(format!(
            "no \\begin {name} section found"
        )));
    }
    if in_section {
        return Err(CalendarError::TableParse(format!(
            "section '{name}' is not closed by \\end"
        )));
    }
    Ok(lines)
}

fn parse_year(field: Option<&str>) -> Result<i32, String> {
    let field = field.ok_or("missing year")?;
    field
        .parse::<i32>()
        .map_err(|_| format!("bad year '{field}'"))
}

fn parse_jieqi_line(line: &str) -> Result<(i32, [NaiveDate; 24]), String> {
    let mut fields = line.split_whitespace();
    if fields.next() != Some("J") {
        return Err("jieqi rows start with 'J'".into());
    }
    let year = parse_year(fields.next())?;

    let mut dates = [NaiveDate::MIN; 24];
    let mut count = 0;
    for field in fields {
        if count == dates.len() {
            return Err(format!("year {year}: more than 24 jieqi dates"));
        }
        let (mm, dd) = field
            .split_once('-')
            .ok_or_else(|| format!("bad jieqi date '{field}'"))?;
        let month: u32 = mm.parse().map_err(|_| format!("bad month in '{field}'"))?;
        let day: u32 = dd.parse().map_err(|_| format!("bad day in '{field}'"))?;
        dates[count] = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| format!("no such date {year}-{field}"))?;
        count += 1;
    }
    if count != dates.len() {
        return Err(format!("year {year}: expected 24 jieqi dates, got {count}"));
    }

    // 立春 .. 大雪/冬至 increase through the year; 小寒 and 大寒 sit in
    // January, before 立春.
    let (spring_to_winter, january) = dates.split_at(22);
    let increasing = |ds: &[NaiveDate]| ds.windows(2).all(|w| w[0] < w[1]);
    if !increasing(spring_to_winter) || !increasing(january) || january[1] >= dates[0] {
        return Err(format!("year {year}: jieqi dates out of order"));
    }
    for (term, date) in ALL_JIEQIS.iter().zip(&dates) {
        if term.is_january_term() != (date.month() == 1) {
            return Err(format!("year {year}: {term} on unexpected month"));
        }
    }
    Ok((year, dates))
}

fn parse_lunar_line(line: &str) -> Result<(i32, LunarYearInfo), String> {
    let mut fields = line.split_whitespace();
    if fields.next() != Some("L") {
        return Err("lunar rows start with 'L'".into());
    }
    let year = parse_year(fields.next())?;

    let first = fields.next().ok_or("missing first day")?;
    let first_solar_day = NaiveDate::parse_from_str(first, "%Y-%m-%d")
        .map_err(|_| format!("bad first day '{first}'"))?;

    let leap = fields.next().ok_or("missing leap month")?;
    let leap: u8 = leap
        .parse()
        .map_err(|_| format!("bad leap month '{leap}'"))?;
    if leap > 12 {
        return Err(format!("year {year}: leap month {leap} out of range"));
    }
    let leap_month = (leap != 0).then_some(leap);

    let month_days = fields
        .map(|f| match f.parse::<u32>() {
            Ok(n @ 29..=30) => Ok(n),
            _ => Err(format!("bad month length '{f}'")),
        })
        .collect::<Result<Vec<u32>, String>>()?;
    let expected = if leap_month.is_some() { 13 } else { 12 };
    if month_days.len() != expected {
        return Err(format!(
            "year {year}: expected {expected} month lengths, got {}",
            month_days.len()
        ));
    }

    Ok((
        year,
        LunarYearInfo {
            first_solar_day,
            month_days,
            leap_month,
        },
    ))
}

fn check_contiguous(
    section: &str,
    years: impl Iterator<Item = i32>,
) -> Result<(), CalendarError> {
    let mut prev: Option<i32> = None;
    for year in years {
        match prev {
            Some(p) if year != p + 1 => {
                return Err(CalendarError::TableParse(format!(
                    "{section} years jump from {p} to {year}"
                )));
            }
            _ => prev = Some(year),
        }
    }
    Ok(())
}
