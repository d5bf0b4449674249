//! Test fixtures and suites for the sheet adapters
//!
//! Fixtures mirror real sheet exports: header rows, ragged row widths,
//! trailing empty cells and blank separator lines.

use crate::app::services::csv_table::SheetTable;


pub const DRIVERS_CSV: &str = "\
Username,ID,Short,Discord,Nationality,Team,Position,Active,Photo,Number,Socials,Description,Value
alice,D01,ALI,alice#1,GB,APX,Main,y,https://img/alice.png,#7,@alice,Fast starter,12.5
bob,D02,BOB,bob#2,DE,APX,Main,y,,44,,,
carol,D03,CAR,carol#3,IT,,Reserve,n
,D04,NOB,nobody#4,FR,APX,Main,y,,,,,
short,D05
Alice,D06,DUP,dup#6,GB,BLZ,Main,y,,,,,
";

pub const TEAMS_CSV: &str = "\
Name,Sponsor,ID,Primary,Secondary,Logo,Car,Driver 1,Driver 2,Reserve 1,Reserve 2,Owner,Principal,Engineer,Description,Active
Apex Racing,Acme,APX,#ff0000,#000000,logo.png,car.png,alice,bob,carol,,Olive,Pat,Eve,Front runners,y
Blaze Motorsport,,BLZ,,,,,dave,,,,,,,,
Ghost,,,#123456
";

pub const CIRCUITS_CSV: &str = "\
Race,ID,Location,Length,Lap Record,Description,Circuit,Track Image
Germany Grand Prix,hockenheim,Hockenheim,4.574 km,1:13.780,Fast straights,Hockenheimring,hock.png
Japan Grand Prix,suzuka,Suzuka,5.807 km,1:30.983,Figure of eight,Suzuka International Racing Course,suzuka.png
,orphan,Nowhere
";

pub const CALENDAR_CSV: &str = "\
Race,Germany Grand Prix,Japan Grand Prix,,Italian Grand Prix
Date,3/30/2024,4/13/2024,,TBD
Round,Round 1,Round 2,,
";

pub const RACE_RESULTS_CSV: &str = "\
Completed,x,x,,
Race,Germany Grand Prix,Japan Grand Prix,Italian Grand Prix,
Round,R1,R2,R3,

alice,P1 (Fastest Lap),P3,P2,
bob,P2,P1,,
carol,DNF,P12 FL,,
";

pub const QUALIFYING_CSV: &str = "\
Race,Germany Grand Prix,Japan Grand Prix
Round,R1,R2
alice,P1,P2
bob,P2,P1
";

pub fn table(text: &str) -> SheetTable {
    SheetTable::parse(text)
}
