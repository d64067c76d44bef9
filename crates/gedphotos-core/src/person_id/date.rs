//! `2 DATE` line parsing and month lookup.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Day, month word, year. Anchored at the start only; anything after the year is ignored.
static DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^2 DATE ([0-9]+) (\w+) ([0-9]+)").expect("valid DATE regex")
});

const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// A birth date as written in the record. Not validated against the calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthDate {
    /// Year digits exactly as written (leading zeros kept).
    pub year: String,
    /// 1..=12
    pub month: u32,
    /// Day digits without leading zeros; any length, `"0"` for an all-zero day.
    pub day: String,
}

impl fmt::Display for BirthDate {
    /// `YYYY-MM-DD`, month and day zero-padded to two digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}-{:0>2}", self.year, self.month, self.day)
    }
}

/// Maps a three-letter English month abbreviation to 1..=12, ignoring ASCII case.
pub fn month_number(abbrev: &str) -> Option<u32> {
    if abbrev.len() != 3 {
        return None;
    }
    MONTHS
        .iter()
        .position(|m| m.eq_ignore_ascii_case(abbrev))
        .map(|i| i as u32 + 1)
}

/// Strips leading zeros from ASCII day digits, keeping a single `0` for zero.
fn normalize_day(digits: &str) -> String {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Parses `2 DATE <day> <mon> <year>`. Returns `None` when the line does not match
/// or the month is unknown. The day is not range-checked.
pub fn parse_date_line(line: &str) -> Option<BirthDate> {
    let caps = DATE_RE.captures(line)?;
    let day = normalize_day(caps.get(1)?.as_str());
    let month = month_number(caps.get(2)?.as_str())?;
    let year = caps.get(3)?.as_str().to_string();
    Some(BirthDate { year, month, day })
}
