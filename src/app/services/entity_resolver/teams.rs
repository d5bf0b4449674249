//! Team code to display name resolution
//!
//! Order: a Teams sheet row with that id, then the static code dictionary,
//! then the raw code itself.

use crate::app::models::Team;
use crate::constants::TEAM_CODE_NAMES;
use serde::Serialize;

/// Where a resolved team name came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamNameSource {
    Sheet,
    Dictionary,
    RawCode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedTeamName {
    pub name: String,
    pub source: TeamNameSource,
}

impl ResolvedTeamName {
    pub fn is_fallback(&self) -> bool {
        self.source == TeamNameSource::RawCode
    }
}

/// Display name for a driver's team code
pub fn resolve_team_name(code: &str, teams: &[Team]) -> ResolvedTeamName {
    let code = code.trim();

    if let Some(team) = teams.iter().find(|team| team.id == code) {
        let name = if team.name.is_empty() { code } else { &team.name };
        return ResolvedTeamName {
            name: name.to_string(),
            source: TeamNameSource::Sheet,
        };
    }

    if let Some((_, name)) = TEAM_CODE_NAMES
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(code))
    {
        return ResolvedTeamName {
            name: name.to_string(),
            source: TeamNameSource::Dictionary,
        };
    }

    ResolvedTeamName {
        name: code.to_string(),
        source: TeamNameSource::RawCode,
    }
}
