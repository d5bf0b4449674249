//! Integration tests for full ingestion passes
//!
//! These tests drive the public [`Ingestor`] API end to end: sheet text goes
//! in through a source, a season snapshot comes out, and the derived
//! standings, progression and calendar are checked against hand-computed
//! totals.

use league_standings::app::models::{IngestIssue, RaceStatus, ReferenceKind, RoundPoints};
use league_standings::app::services::points_engine::points_for_cell;
use league_standings::{
    DirectorySource, IngestConfig, IngestOutcome, Ingestor, SeasonSnapshot, StaticSource,
};
use std::sync::Arc;
use tempfile::TempDir;

const DRIVERS: &str = "\
Username,ID,Short,Discord,Nationality,Team,Position,Active,Photo,Number,Socials,Description,Value
Alice,D01,ALI,alice#1,GB,APX,Main,y,,7,,,
Bruno,D02,BRU,bruno#2,BR,BLZ,Main,y,,12,,,
Chen,D03,CHE,chen#3,CN,APX,Main,y,,88,,,
Dana,D04,DAN,dana#4,US,XYZ,Main,y,,4,,,
";

const TEAMS: &str = "\
Name,Sponsor,ID,Primary,Secondary,Logo,Car,Driver 1,Driver 2,Reserve 1,Reserve 2,Owner,Principal,Engineer,Description,Active
Apex Racing,Acme,APX,#ff0000,#000000,,,Alice,Chen,,,,,,,y
Blaze Motorsport,,BLZ,#0000ff,,,,Bruno,,,,,,,,y
";

const CIRCUITS: &str = "\
Race,ID,Location,Length,Lap Record,Description,Circuit,Track Image
Germany Grand Prix,hockenheim,Hockenheim,4.574 km,1:13.780,,Hockenheimring,
Japan Grand Prix,suzuka,Suzuka,5.807 km,1:30.983,,Suzuka Circuit,
";

const CALENDAR: &str = ",Germany Grand Prix,Japan Grand Prix,Atlantis Grand Prix
,3/30/2024,4/13/2024,TBD
,Round 1,Round 2,Round 3
";

const RACE_RESULTS: &str = "\
Completed,x,x,
Race,Germany Grand Prix,Japan Grand Prix,Atlantis Grand Prix
Round,R1,R2,R3
Alice,P1 (Fastest Lap),P4,P1
Bruno,P2,P3,
Chen,P3,P2,
Dana,DNF,P1,
Ghost,P5,,
";

const QUALIFYING: &str = "\
Race,Germany Grand Prix,Japan Grand Prix
Round,R1,R2
Alice,P1,P2
Dana,P2,P1
";

fn season_source() -> StaticSource {
    StaticSource::new()
        .with_sheet("Drivers", DRIVERS)
        .with_sheet("Teams", TEAMS)
        .with_sheet("Circuits", CIRCUITS)
        .with_sheet("Calendar", CALENDAR)
        .with_sheet("Race Results", RACE_RESULTS)
        .with_sheet("Qualifying", QUALIFYING)
}

async fn ingest(source: StaticSource) -> Arc<SeasonSnapshot> {
    let ingestor = Ingestor::new(Arc::new(source), IngestConfig::default());
    match ingestor.refresh().await {
        IngestOutcome::Ready(snapshot) => snapshot,
        IngestOutcome::Empty(report) => panic!("pass produced no data: {:?}", report.issues),
    }
}

/// Test calendar columns become events in column order
///
/// Purpose: Validate a three-row calendar grid with a blank label column
/// Benefit: Guards the round numbering every other view depends on
#[tokio::test]
async fn test_calendar_grid_becomes_events() {
    let snapshot = ingest(season_source()).await;

    let names: Vec<&str> = snapshot.events.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Germany Grand Prix", "Japan Grand Prix", "Atlantis Grand Prix"]
    );
    assert_eq!(snapshot.events[0].round_label, "Round 1");
    assert_eq!(snapshot.events[1].round_label, "Round 2");
    assert_eq!(snapshot.events[0].date, "March 30, 2024");
    assert_eq!(snapshot.events[2].date, "TBD");

    let statuses: Vec<RaceStatus> = snapshot.events.iter().map(|e| e.status).collect();
    assert_eq!(
        statuses,
        vec![RaceStatus::Completed, RaceStatus::Completed, RaceStatus::Next]
    );
}

/// Test only completed rounds contribute points
///
/// Purpose: Alice scores in round 2 but only round 1 carries a completion marker
/// Benefit: Confirms unfinished rounds never leak into totals
#[tokio::test]
async fn test_points_count_completed_rounds_only() {
    let source = StaticSource::new()
        .with_sheet("Drivers", DRIVERS)
        .with_sheet(
            "Race Results",
            "Completed,x,\nRace,Germany Grand Prix,Japan Grand Prix\nRound,R1,R2\nAlice,P1 (Fastest Lap),P3\n",
        );
    let snapshot = ingest(source).await;

    let alice = snapshot.driver("alice").unwrap();
    assert_eq!(alice.stats.points, 26);
    assert_eq!(alice.stats.wins, 1);
    assert_eq!(alice.stats.fastest_laps, 1);

    let row = snapshot.driver_progression.row("Alice").unwrap();
    assert_eq!(
        row.rounds[0],
        RoundPoints::Scored {
            points: 26,
            cumulative: 26
        }
    );
    assert_eq!(row.rounds[1], RoundPoints::NotRun);
    assert_eq!(row.total, 26);
}

/// Test standings totals, tie positions and gaps
///
/// Purpose: Bruno and Chen finish the two completed rounds level on 33 points
/// Benefit: Validates competition ranking and the carried results-only driver
#[tokio::test]
async fn test_driver_standings_with_tie() {
    let snapshot = ingest(season_source()).await;

    let table: Vec<(usize, &str, u32, u32)> = snapshot
        .driver_standings
        .iter()
        .map(|row| (row.position, row.driver.as_str(), row.points, row.gap))
        .collect();
    assert_eq!(
        table,
        vec![
            (1, "Alice", 38, 0),
            (2, "Bruno", 33, 5),
            (2, "Chen", 33, 5),
            (4, "Dana", 25, 13),
            (5, "Ghost", 10, 28),
        ]
    );

    assert!(snapshot.report.issues.contains(&IngestIssue::UnresolvedReference {
        kind: ReferenceKind::Driver,
        name: "Ghost".to_string(),
    }));
}

/// Test total points equal the sum of scored cells
///
/// Purpose: Recompute every completed cell independently of the engine
/// Benefit: Catches double counting or dropped rows anywhere in the pipeline
#[tokio::test]
async fn test_points_are_conserved() {
    let snapshot = ingest(season_source()).await;

    let completed = snapshot.completed_rounds();
    let expected: u32 = RACE_RESULTS
        .lines()
        .skip(3)
        .flat_map(|line| line.split(',').skip(1).take(completed).collect::<Vec<_>>())
        .map(points_for_cell)
        .sum();

    let standings_total: u32 = snapshot.driver_standings.iter().map(|r| r.points).sum();
    assert_eq!(standings_total, expected);
    assert_eq!(expected, 139);

    let progression_total: u32 = snapshot.driver_progression.rows.iter().map(|r| r.total).sum();
    assert_eq!(progression_total, expected);

    // Ghost has no team, so constructors hold everything except Ghost's 10
    let constructor_total: u32 = snapshot
        .constructor_standings
        .iter()
        .map(|r| r.points)
        .sum();
    assert_eq!(constructor_total, expected - 10);
}

/// Test constructor standings and progression
///
/// Purpose: Team totals, unknown team codes shown verbatim and per-round sums
/// Benefit: Validates the team join from driver standings to constructor rows
#[tokio::test]
async fn test_constructor_standings_and_progression() {
    let snapshot = ingest(season_source()).await;

    let table: Vec<(usize, &str, u32)> = snapshot
        .constructor_standings
        .iter()
        .map(|row| (row.position, row.team_name.as_str(), row.points))
        .collect();
    assert_eq!(
        table,
        vec![
            (1, "Apex Racing", 71),
            (2, "Blaze Motorsport", 33),
            (3, "XYZ", 25),
        ]
    );

    let apex = snapshot.constructor_progression.row("Apex Racing").unwrap();
    assert_eq!(apex.rounds[0].cumulative(), Some(41));
    assert_eq!(apex.rounds[1].cumulative(), Some(71));
    assert_eq!(apex.rounds[2], RoundPoints::NotRun);
    assert_eq!(apex.total, 71);
}

/// Test unknown team codes are displayed literally
#[tokio::test]
async fn test_unknown_team_code_shown_verbatim() {
    let snapshot = ingest(season_source()).await;

    let dana = snapshot
        .driver_standings
        .iter()
        .find(|row| row.driver == "Dana")
        .unwrap();
    assert_eq!(dana.team_name, "XYZ");
}

/// Test unmatched races get a placeholder circuit
#[tokio::test]
async fn test_unmatched_race_gets_placeholder_circuit() {
    let snapshot = ingest(season_source()).await;

    let germany = &snapshot.events[0].circuit;
    assert_eq!(germany.circuit_name, "Hockenheimring");
    assert!(!germany.placeholder);

    let atlantis = &snapshot.events[2].circuit;
    assert!(atlantis.placeholder);
    assert_eq!(atlantis.circuit_name, "Atlantis Circuit");
    assert_eq!(atlantis.location, "TBA");
}

/// Test poles come from qualifying P1 cells
#[tokio::test]
async fn test_poles_from_qualifying() {
    let snapshot = ingest(season_source()).await;

    assert_eq!(snapshot.driver("Alice").unwrap().stats.poles, 1);
    assert_eq!(snapshot.driver("Dana").unwrap().stats.poles, 1);
    assert_eq!(snapshot.driver("Bruno").unwrap().stats.poles, 0);
}

/// Test a pass with no readable sheets is empty, not fabricated
///
/// Purpose: Every sheet is missing from the source
/// Benefit: Confirms the Empty outcome carries a report naming each sheet
#[tokio::test]
async fn test_no_sheets_yields_empty_outcome() {
    let ingestor = Ingestor::new(Arc::new(StaticSource::new()), IngestConfig::default());
    let outcome = ingestor.refresh().await;

    assert!(outcome.is_empty());
    assert_eq!(outcome.report().unavailable_sheets().len(), 6);
    assert!(ingestor.snapshot().await.is_none());
}

/// Test a season read from CSV files on disk
///
/// Purpose: Write one file per sheet and ingest through the directory source
/// Benefit: Validates file naming and that a missing sheet only degrades
#[tokio::test]
async fn test_directory_source_season() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("Drivers.csv"), DRIVERS).unwrap();
    std::fs::write(dir.path().join("Teams.csv"), TEAMS).unwrap();
    std::fs::write(dir.path().join("Calendar.csv"), CALENDAR).unwrap();
    std::fs::write(dir.path().join("Race Results.csv"), RACE_RESULTS).unwrap();

    let config = IngestConfig::default().with_sheets_dir(dir.path());
    let ingestor = Ingestor::new(Arc::new(DirectorySource::new(dir.path())), config);
    let outcome = ingestor.refresh().await;
    let snapshot = outcome.snapshot().unwrap();

    assert_eq!(snapshot.driver_standings[0].driver, "Alice");
    assert_eq!(snapshot.driver_standings[0].points, 38);
    assert!(snapshot.events.iter().all(|event| event.circuit.placeholder));

    assert_eq!(snapshot.report.unavailable_sheets().len(), 2);
}
