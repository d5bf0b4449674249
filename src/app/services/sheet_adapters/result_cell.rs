//! Result cell decoding
//!
//! Cells are free text such as `P1`, `P4 (Fastest Lap)`, `P12 FL`, `DNF`,
//! `DNS` or `P7 DSQ`. A `P<digits>` token is the finishing position,
//! any `Fastest Lap` or `FL` in the cell sets the fastest-lap flag, and DNF, DNS
//! or DSQ mark a zero-point non-finish.

use crate::app::models::{NonFinish, ParsedResult};
use regex::Regex;
use std::sync::OnceLock;

fn position_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\bP(\d+)").expect("valid position regex"))
}

fn fastest_lap_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)fastest\s*lap|FL").expect("valid fastest lap regex"))
}

fn non_finish_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)(DNF|DNS|DSQ)").expect("valid non-finish regex"))
}

/// Decode one result cell. Empty cells mean the driver has no result for
/// the round and yield `None`.
pub fn parse_result_cell(raw: &str) -> Option<ParsedResult> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }

    let position = position_regex()
        .captures(text)
        .and_then(|captures| captures.get(1))
        .and_then(|digits| digits.as_str().parse::<u32>().ok());

    let non_finish = non_finish_regex()
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map(|class| match class.as_str().to_ascii_uppercase().as_str() {
            "DNS" => NonFinish::Dns,
            "DSQ" => NonFinish::Dsq,
            _ => NonFinish::Dnf,
        });

    Some(ParsedResult {
        raw: text.to_string(),
        position,
        fastest_lap: fastest_lap_regex().is_match(text),
        non_finish,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_only() {
        let result = parse_result_cell("P3").unwrap();
        assert_eq!(result.position, Some(3));
        assert!(!result.fastest_lap);
        assert_eq!(result.non_finish, None);
    }

    #[test]
    fn test_fastest_lap_spellings() {
        assert!(parse_result_cell("P1 (Fastest Lap)").unwrap().fastest_lap);
        assert!(parse_result_cell("P9 FL").unwrap().fastest_lap);
        assert!(parse_result_cell("p2 fastest lap").unwrap().fastest_lap);
        assert!(!parse_result_cell("P2").unwrap().fastest_lap);
    }

    #[test]
    fn test_unspaced_cells() {
        let result = parse_result_cell("P1FL").unwrap();
        assert_eq!(result.position, Some(1));
        assert!(result.fastest_lap);

        let result = parse_result_cell("P2FastestLap").unwrap();
        assert_eq!(result.position, Some(2));
        assert!(result.fastest_lap);

        let result = parse_result_cell("P12(FL)").unwrap();
        assert_eq!(result.position, Some(12));
        assert!(result.fastest_lap);
    }

    #[test]
    fn test_non_finish_classes() {
        assert_eq!(parse_result_cell("DNF").unwrap().non_finish, Some(NonFinish::Dnf));
        assert_eq!(parse_result_cell("dns").unwrap().non_finish, Some(NonFinish::Dns));
        let disqualified = parse_result_cell("P4 DSQ").unwrap();
        assert_eq!(disqualified.non_finish, Some(NonFinish::Dsq));
        assert_eq!(disqualified.position, Some(4));
        assert_eq!(parse_result_cell("P7DSQ").unwrap().non_finish, Some(NonFinish::Dsq));
    }

    #[test]
    fn test_empty_cell_is_no_result() {
        assert!(parse_result_cell("").is_none());
        assert!(parse_result_cell("   ").is_none());
    }

    #[test]
    fn test_unrecognised_text_kept_raw() {
        let result = parse_result_cell("reserve").unwrap();
        assert_eq!(result.raw, "reserve");
        assert_eq!(result.position, None);
        assert_eq!(result.non_finish, None);
    }
}
