//! Test fixtures and suites for entity resolution

use crate::app::models::{Circuit, Driver, Team};


pub fn circuit(race_name: &str, id: &str, location: &str, circuit_name: &str) -> Circuit {
    Circuit {
        race_name: race_name.to_string(),
        id: id.to_string(),
        location: location.to_string(),
        length: "5.0 km".to_string(),
        lap_record: String::new(),
        description: String::new(),
        circuit_name: circuit_name.to_string(),
        track_image_url: String::new(),
        placeholder: false,
    }
}

pub fn sample_circuits() -> Vec<Circuit> {
    vec![
        circuit("Germany Grand Prix", "hockenheim", "Hockenheim", "Hockenheimring"),
        circuit("Suzuka 300", "suzuka", "Suzuka", "Suzuka International Racing Course"),
        circuit("Circuit of the Americas", "cota", "Austin", "COTA"),
        circuit("Monza Sprint", "monza", "Monza", "Autodromo Nazionale Monza"),
    ]
}

pub fn driver(username: &str, id: &str, short_display: &str, discord: &str, team: &str) -> Driver {
    let mut driver = Driver::from_results_name(username);
    driver.id = id.to_string();
    driver.short_display = short_display.to_string();
    driver.discord = discord.to_string();
    driver.team_code = team.to_string();
    driver
}

pub fn team(id: &str, name: &str) -> Team {
    Team {
        name: name.to_string(),
        sponsor: String::new(),
        id: id.to_string(),
        primary_color: "#00f7ff".to_string(),
        secondary_color: "#ffffff".to_string(),
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
