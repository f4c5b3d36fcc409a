//! Named text matchers used by the field extractors. Each returns an optional
//! capture; composition happens in the extractors.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;

static WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([A-Za-z]+)\.? (\d{1,2}), (\d{4})\b").unwrap());
static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bat (\d{1,2}):(\d{2}) ([AP]M)\b").unwrap());
static FOLLOWING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Will begin immediately following[^-]*").unwrap());

const MONTHS: &[&str] = &[
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Collapse whitespace runs to one space and trim.
pub fn normalize_ws(s: &str) -> String {
    WS_RE.replace_all(s, " ").trim().to_string()
}

/// First `<Month> <day>, <yyyy>` in `text` that names a real date.
pub fn match_date(text: &str) -> Option<NaiveDate> {
    DATE_RE.captures_iter(text).find_map(|caps| {
        let month = month_number(&caps[1])?;
        let day = caps[2].parse().ok()?;
        let year = caps[3].parse().ok()?;
        NaiveDate::from_ymd_opt(year, month, day)
    })
}

/// `at H:MM AM|PM` as a wall-clock time. Out-of-range clocks count as absent.
pub fn match_time(text: &str) -> Option<NaiveTime> {
    let caps = TIME_RE.captures(text)?;
    let hour: u32 = caps[1].parse().ok()?;
    let minute: u32 = caps[2].parse().ok()?;
    if !(1..=12).contains(&hour) {
        return None;
    }
    let hour = match (&caps[3], hour) {
        ("AM", 12) => 0,
        ("AM", h) => h,
        ("PM", 12) => 12,
        (_, h) => h + 12,
    };
    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// The "Will begin immediately following ..." note, up to the next `-`.
pub fn match_following_note(text: &str) -> Option<&str> {
    FOLLOWING_RE.find(text).map(|m| m.as_str().trim())
}

fn month_number(name: &str) -> Option<u32> {
    let mut lower = name.to_ascii_lowercase();
    if lower == "sept" {
        lower.truncate(3);
    }
    MONTHS
        .iter()
        .position(|m| *m == lower || (lower.len() == 3 && m.starts_with(lower.as_str())))
        .map(|i| i as u32 + 1)
}
