//! Free-text date normalization for calendar cells
//!
//! Calendar dates are typed by hand and arrive in whatever shape the sheet
//! maintainer used: `March 30, 2024`, `30th Mar 2024`, `3/30/2024`,
//! `2024-03-30`, `TBD`. Normalization produces `Month D, YYYY` when the text
//! can be read, the literal `TBD` for unknown dates, and the original text
//! otherwise.
//!
//! Slash dates are ambiguous between month-first and day-first readings. One
//! [`DateOrder`] is chosen per normalizer and applied to every slash date; a
//! four-digit first part is always read as year/month/day.
//!
//! Consumers that need a calendar date (the countdown) re-parse the
//! *normalized* text with [`parse_display_date`], never the raw cell.

use crate::constants::DATE_TBD;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use tracing::debug;

/// Display format for normalized dates
const DISPLAY_FORMAT: &str = "%B %-d, %Y";

/// Earliest year accepted from a slash date
const MIN_YEAR: i32 = 2000;

/// Field order used to read `a/b/c` dates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateOrder {
    /// `month/day/year`
    #[default]
    MonthFirst,
    /// `day/month/year`
    DayFirst,
}

/// Result of normalizing one date cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedDate {
    /// `Month D, YYYY`, `TBD`, or the original text
    pub text: String,
    /// The calendar date, when the text could be read
    pub date: Option<NaiveDate>,
}

impl NormalizedDate {
    fn tbd() -> Self {
        Self {
            text: DATE_TBD.to_string(),
            date: None,
        }
    }

    fn parsed(date: NaiveDate) -> Self {
        Self {
            text: date.format(DISPLAY_FORMAT).to_string(),
            date: Some(date),
        }
    }

    fn unchanged(raw: &str) -> Self {
        Self {
            text: raw.to_string(),
            date: None,
        }
    }

    pub fn is_tbd(&self) -> bool {
        self.text == DATE_TBD
    }

    /// Text that was kept verbatim because it could not be read
    pub fn is_unparsed(&self) -> bool {
        self.date.is_none() && !self.is_tbd()
    }
}

/// Normalizes calendar date cells using one slash-date convention
#[derive(Debug, Clone, Copy, Default)]
pub struct DateNormalizer {
    order: DateOrder,
}

impl DateNormalizer {
    pub fn new(order: DateOrder) -> Self {
        Self { order }
    }

    pub fn order(&self) -> DateOrder {
        self.order
    }

    /// Normalize a raw date cell
    pub fn normalize(&self, raw: &str) -> NormalizedDate {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(DATE_TBD) {
            return NormalizedDate::tbd();
        }

        let parsed = if let Some(month) = find_month(trimmed) {
            parse_with_month_name(trimmed, month)
        } else if trimmed.contains('/') {
            self.parse_slash_date(trimmed)
        } else {
            parse_generic(trimmed)
        };

        match parsed {
            Some(date) => NormalizedDate::parsed(date),
            None => {
                debug!("Keeping unparseable date '{}' verbatim", trimmed);
                NormalizedDate::unchanged(raw)
            }
        }
    }

    fn parse_slash_date(&self, text: &str) -> Option<NaiveDate> {
        let parts: Vec<&str> = text.split('/').map(str::trim).collect();
        if parts.len() != 3 {
            return None;
        }
        let numbers: Vec<i32> = parts
            .iter()
            .map(|part| part.parse::<i32>().ok())
            .collect::<Option<_>>()?;

        let (year, month, day) = if parts[0].len() == 4 {
            (numbers[0], numbers[1], numbers[2])
        } else {
            match self.order {
                DateOrder::MonthFirst => (numbers[2], numbers[0], numbers[1]),
                DateOrder::DayFirst => (numbers[2], numbers[1], numbers[0]),
            }
        };

        if !(1..=31).contains(&day) || !(1..=12).contains(&month) || year < MIN_YEAR {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month as u32, day as u32)
    }
}

/// Re-parse a normalized `Month D, YYYY` string
pub fn parse_display_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%B %d, %Y").ok()
}

fn month_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)\b(jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\b",
        )
        .expect("valid month regex")
    })
}

fn day_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\b(\d{1,2})(?:st|nd|rd|th)?\b").expect("valid day regex"))
}

fn year_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b(\d{4})\b").expect("valid year regex"))
}

/// Month number (1-12) of the first month name in the text
fn find_month(text: &str) -> Option<u32> {
    let name = month_regex().captures(text)?.get(1)?.as_str().to_ascii_lowercase();
    let month = match &name[..3] {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(month)
}

fn parse_with_month_name(text: &str, month: u32) -> Option<NaiveDate> {
    let day: u32 = day_regex().captures(text)?.get(1)?.as_str().parse().ok()?;
    let year: i32 = year_regex().captures(text)?.get(1)?.as_str().parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_generic(text: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S") {
        return Some(datetime.date());
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S") {
        return Some(datetime.date());
    }
    DateTime::parse_from_rfc3339(text)
        .ok()
        .map(|datetime| datetime.date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month_first() -> DateNormalizer {
        DateNormalizer::new(DateOrder::MonthFirst)
    }

    #[test]
    fn test_month_name_formats() {
        let normalizer = month_first();
        assert_eq!(normalizer.normalize("March 30, 2024").text, "March 30, 2024");
        assert_eq!(normalizer.normalize("30th Mar 2024").text, "March 30, 2024");
        assert_eq!(normalizer.normalize("Sat, 6 April 2024").text, "April 6, 2024");
        assert_eq!(normalizer.normalize("sept 1 2024").text, "September 1, 2024");
    }

    #[test]
    fn test_month_name_without_year_kept() {
        let normalized = month_first().normalize("March 30");
        assert_eq!(normalized.text, "March 30");
        assert!(normalized.is_unparsed());
    }

    #[test]
    fn test_slash_dates_month_first() {
        let normalizer = month_first();
        assert_eq!(normalizer.normalize("3/30/2024").text, "March 30, 2024");
        assert_eq!(normalizer.normalize("4/13/2024").text, "April 13, 2024");
        // Day-first input is not reinterpreted
        assert_eq!(normalizer.normalize("30/3/2024").text, "30/3/2024");
    }

    #[test]
    fn test_slash_dates_day_first() {
        let normalizer = DateNormalizer::new(DateOrder::DayFirst);
        assert_eq!(normalizer.normalize("30/3/2024").text, "March 30, 2024");
        assert_eq!(normalizer.normalize("3/4/2024").text, "April 3, 2024");
        assert_eq!(normalizer.normalize("3/30/2024").text, "3/30/2024");
    }

    #[test]
    fn test_slash_date_range_validation() {
        let normalizer = month_first();
        assert_eq!(normalizer.normalize("3/30/24").text, "3/30/24");
        assert_eq!(normalizer.normalize("13/1/2024").text, "13/1/2024");
        assert_eq!(normalizer.normalize("2/31/2024").text, "2/31/2024");
        assert_eq!(normalizer.normalize("a/b/c").text, "a/b/c");
        assert_eq!(normalizer.normalize("3/30").text, "3/30");
    }

    #[test]
    fn test_year_first_slash_date() {
        assert_eq!(month_first().normalize("2024/03/30").text, "March 30, 2024");
    }

    #[test]
    fn test_generic_formats() {
        let normalizer = month_first();
        assert_eq!(normalizer.normalize("2024-03-30").text, "March 30, 2024");
        assert_eq!(
            normalizer.normalize("2024-03-30T14:00:00Z").text,
            "March 30, 2024"
        );
    }

    #[test]
    fn test_tbd_and_empty() {
        let normalizer = month_first();
        assert!(normalizer.normalize("TBD").is_tbd());
        assert!(normalizer.normalize("tbd").is_tbd());
        assert!(normalizer.normalize("  ").is_tbd());
    }

    #[test]
    fn test_unparseable_text_passthrough() {
        let normalized = month_first().normalize("after the summer break");
        assert_eq!(normalized.text, "after the summer break");
        assert!(normalized.date.is_none());
        assert!(normalized.is_unparsed());
    }

    #[test]
    fn test_display_date_round_trip() {
        let normalized = month_first().normalize("4/7/2024");
        assert_eq!(normalized.text, "April 7, 2024");
        assert_eq!(parse_display_date(&normalized.text), normalized.date);
        assert_eq!(parse_display_date("4/7/2024"), None);
    }
}
