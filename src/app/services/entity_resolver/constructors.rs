//! Matching a driver's team label to a constructor standings row
//!
//! Order: exact display name, substring in either direction, team code. A
//! label nothing matches has its round points dropped by the caller. When
//! several rows satisfy the same strategy, the one carrying the driver's team
//! code wins, otherwise the first.

use crate::app::models::ConstructorRow;

type Strategy = fn(&str, &str, &ConstructorRow) -> bool;

fn display_name(label: &str, _code: &str, row: &ConstructorRow) -> bool {
    !label.is_empty() && row.team_name == label
}

fn substring(label: &str, _code: &str, row: &ConstructorRow) -> bool {
    if label.is_empty() || row.team_name.is_empty() {
        return false;
    }
    let label = label.to_lowercase();
    let name = row.team_name.to_lowercase();
    name.contains(&label) || label.contains(&name)
}

fn team_code(_label: &str, code: &str, row: &ConstructorRow) -> bool {
    !code.is_empty() && row.team_code.eq_ignore_ascii_case(code)
}

const STRATEGIES: [Strategy; 3] = [display_name, substring, team_code];

/// Index of the constructor row a team label and code refer to
pub fn match_constructor(label: &str, code: &str, rows: &[ConstructorRow]) -> Option<usize> {
    let label = label.trim();
    let code = code.trim();
    STRATEGIES.iter().find_map(|strategy| {
        let mut hits = rows
            .iter()
            .enumerate()
            .filter(|(_, row)| strategy(label, code, row))
            .map(|(index, _)| index)
            .peekable();
        let first = *hits.peek()?;
        Some(
            hits.find(|&index| team_code(label, code, &rows[index]))
                .unwrap_or(first),
        )
    })
}
