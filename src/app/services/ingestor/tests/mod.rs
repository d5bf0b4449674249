//! Test fixtures and suites for the ingestor

use crate::app::adapters::sheet_source::{SheetTextSource, StaticSource};
use crate::app::models::SheetKind;
use crate::app::services::ingestor::RawSheets;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;


pub const DRIVERS: &str = "\
Username,ID,Short,Discord,Nationality,Team,Position,Active,Photo,Number,Socials,Description,Value
alice,D01,ALI,alice#1,GB,APX,Main,y,,7,,,
bob,D02,BOB,bob#2,DE,BLZ,Main,y,,44,,,
carol,D03,CAR,carol#3,IT,APX,Main,y,,3,,,
dave,D04,DAV,dave#4,FR,XYZ,Main,y,,9,,,
";

pub const TEAMS: &str = "\
Name,Sponsor,ID,Primary,Secondary,Logo,Car,Driver 1,Driver 2,Reserve 1,Reserve 2,Owner,Principal,Engineer,Description,Active
Apex Racing,Acme,APX,#ff0000,#000000,,,alice,carol,,,,,,,y
Blaze,,BLZ,,,,,bob,,,,,,,,
";

pub const CIRCUITS: &str = "\
Race,ID,Location,Length,Lap Record,Description,Circuit,Track Image
Germany Grand Prix,hockenheim,Hockenheim,4.574 km,1:13.780,,Hockenheimring,
Suzuka Classic,suzuka,Suzuka,5.807 km,1:30.983,,Suzuka Circuit,
";

pub const CALENDAR: &str = "\
Race,Germany Grand Prix,Japan Grand Prix,Atlantis Grand Prix
Date,3/30/2024,4/13/2024,TBD
Round,Round 1,Round 2,Round 3
";

pub const RACE_RESULTS: &str = "\
Completed,x,,
Race,Germany Grand Prix,Japan Grand Prix,Atlantis Grand Prix
Round,R1,R2,R3
alice,P1 (Fastest Lap),P3,
bob,P2,P1,
carol,P3,,
dave,P4,,
";

pub const QUALIFYING: &str = "\
Race,Germany Grand Prix,Japan Grand Prix
Round,R1,R2
bob,P1,
alice,P2,
";

pub fn full_sheets() -> RawSheets {
    RawSheets::new()
        .with(SheetKind::Drivers, DRIVERS)
        .with(SheetKind::Teams, TEAMS)
        .with(SheetKind::Circuits, CIRCUITS)
        .with(SheetKind::Calendar, CALENDAR)
        .with(SheetKind::RaceResults, RACE_RESULTS)
        .with(SheetKind::Qualifying, QUALIFYING)
}

pub fn full_source() -> StaticSource {
    StaticSource::new()
        .with_sheet("Drivers", DRIVERS)
        .with_sheet("Teams", TEAMS)
        .with_sheet("Circuits", CIRCUITS)
        .with_sheet("Calendar", CALENDAR)
        .with_sheet("Race Results", RACE_RESULTS)
        .with_sheet("Qualifying", QUALIFYING)
}

/// Source that counts fetches, waits before answering and can be edited
/// between passes
pub struct CountingSource {
    sheets: Mutex<HashMap<String, String>>,
    delay: Duration,
    stalled: Option<String>,
    pub fetches: AtomicUsize,
}

impl CountingSource {
    pub fn new(delay: Duration) -> Self {
        let sheets = [
            ("Drivers", DRIVERS),
            ("Teams", TEAMS),
            ("Circuits", CIRCUITS),
            ("Calendar", CALENDAR),
            ("Race Results", RACE_RESULTS),
            ("Qualifying", QUALIFYING),
        ]
        .into_iter()
        .map(|(name, text)| (name.to_string(), text.to_string()))
        .collect();

        Self {
            sheets: Mutex::new(sheets),
            delay,
            stalled: None,
            fetches: AtomicUsize::new(0),
        }
    }

    /// Never answer for this sheet
    pub fn stalling(mut self, sheet: &str) -> Self {
        self.stalled = Some(sheet.to_string());
        self
    }

    pub fn clear(&self) {
        self.sheets.lock().unwrap().clear();
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SheetTextSource for CountingSource {
    async fn fetch_sheet_text(&self, sheet: &str) -> String {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.stalled.as_deref() == Some(sheet) {
            std::future::pending::<()>().await;
        }
        tokio::time::sleep(self.delay).await;
        self.sheets
            .lock()
            .unwrap()
            .get(sheet)
            .cloned()
            .unwrap_or_default()
    }
}
