//! Test fixtures and suites for standings

use crate::app::models::{Driver, QualifyingTable, RaceResultsTable, Team};
use crate::app::services::csv_table::SheetTable;
use crate::app::services::sheet_adapters::{parse_qualifying, parse_race_results};
use crate::app::models::IngestReport;


pub fn results(text: &str) -> RaceResultsTable {
    parse_race_results(&SheetTable::parse(text), 10, &mut IngestReport::new())
}

pub fn qualifying(text: &str) -> QualifyingTable {
    parse_qualifying(&SheetTable::parse(text), 11, &mut IngestReport::new())
}

pub fn driver(username: &str, team: &str) -> Driver {
    let mut driver = Driver::from_results_name(username);
    driver.team_code = team.to_string();
    driver
}

pub fn driver_with_points(username: &str, team: &str, points: u32) -> Driver {
    let mut driver = driver(username, team);
    driver.stats.points = points;
    driver
}

pub fn team(id: &str, name: &str) -> Team {
    Team {
        name: name.to_string(),
        sponsor: String::new(),
        id: id.to_string(),
        primary_color: String::new(),
        secondary_color: String::new(),
        logo_url: String::new(),
        car_image_url: String::new(),
        driver1: String::new(),
        driver2: String::new(),
        reserve1: String::new(),
        reserve2: String::new(),
        owner: String::new(),
        principal: String::new(),
        engineer: String::new(),
        description: String::new(),
        active: true,
    }
}

pub const SEASON_RESULTS: &str = "\
,x,x,,
Race,Germany Grand Prix,Japan Grand Prix,Italy Grand Prix
Round,R1,R2,R3
alice,P1 (Fastest Lap),P3,P1
bob,P2,P1,P2
carol,DNF,P12 FL,
dave,P3,DSQ,
";
