//! Test fixtures and suites for progression

use crate::app::models::{
    ConstructorRow, Driver, IngestReport, QualifyingTable, RaceResultsTable, StandingsRow, Team,
};
use crate::app::services::csv_table::SheetTable;
use crate::app::services::sheet_adapters::parse_race_results;
use crate::app::services::standings::{
    compute_constructor_standings, compute_driver_standings, compute_driver_stats,
};


pub const RESULTS: &str = "\
,x,x,
Race,Germany Grand Prix,Japan Grand Prix,Italy Grand Prix
Round,R1,R2,R3
alice,P1 (Fastest Lap),P3,P1
bob,P2,P1,P2
carol,P4,DNF,
dave,P3,P2,
";

pub fn results(text: &str) -> RaceResultsTable {
    parse_race_results(&SheetTable::parse(text), 10, &mut IngestReport::new())
}

pub fn driver(username: &str, team: &str) -> Driver {
    let mut driver = Driver::from_results_name(username);
    driver.team_code = team.to_string();
    driver
}

pub fn team(id: &str, name: &str, roster: &[&str]) -> Team {
    let seat = |index: usize| roster.get(index).map(|name| name.to_string()).unwrap_or_default();
    Team {
        name: name.to_string(),
        sponsor: String::new(),
        id: id.to_string(),
        primary_color: String::new(),
        secondary_color: String::new(),
        logo_url: String::new(),
        car_image_url: String::new(),
        driver1: seat(0),
        driver2: seat(1),
        reserve1: seat(2),
        reserve2: seat(3),
        owner: String::new(),
        principal: String::new(),
        engineer: String::new(),
        description: String::new(),
        active: true,
    }
}

/// Stats, standings and both standings tables for a results sheet
pub struct Season {
    pub results: RaceResultsTable,
    pub drivers: Vec<Driver>,
    pub teams: Vec<Team>,
    pub standings: Vec<StandingsRow>,
    pub constructors: Vec<ConstructorRow>,
}

pub fn season(text: &str, drivers: Vec<Driver>, teams: Vec<Team>) -> Season {
    let mut report = IngestReport::new();
    let results = results(text);
    let drivers = compute_driver_stats(&drivers, &results, &QualifyingTable::default(), &mut report);
    let standings = compute_driver_standings(&drivers, &teams, &mut report);
    let constructors = compute_constructor_standings(&drivers, &teams);
    Season {
        results,
        drivers,
        teams,
        standings,
        constructors,
    }
}

pub fn default_season() -> Season {
    season(
        RESULTS,
        vec![
            driver("alice", "APX"),
            driver("bob", "BLZ"),
            driver("carol", "APX"),
            driver("dave", "BLZ"),
        ],
        vec![
            team("APX", "Apex Racing", &["alice", "carol"]),
            team("BLZ", "Blaze", &["bob", "dave"]),
        ],
    )
}
