//! Plain-text tables for terminal output

use crate::app::models::{
    ConstructorRow, IngestReport, ProgressionTable, QualifyingTable, RaceEvent, RaceStatus,
    RoundHeader, RoundPoints, SheetKind, StandingsRow,
};
use crate::app::services::ingestor::Countdown;
use colored::*;
use std::fmt::Write;

const NAME_WIDTH: usize = 20;
const TEAM_WIDTH: usize = 22;
const ROUND_WIDTH: usize = 5;

/// Label for a progression or qualifying column
fn round_label(headers: &[RoundHeader], round: usize) -> String {
    headers
        .iter()
        .find(|header| header.round == round)
        .map(|header| header.label.trim())
        .filter(|label| !label.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("R{}", round))
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
        cut.push('~');
        cut
    }
}

pub fn driver_standings(rows: &[StandingsRow]) -> String {
    let mut out = String::new();
    let header = format!(
        "{:>3}  {:<nw$}  {:<tw$}  {:>4}  {:>4}  {:>4}  {:>4}",
        "Pos",
        "Driver",
        "Team",
        "Pts",
        "Wins",
        "Pod",
        "Gap",
        nw = NAME_WIDTH,
        tw = TEAM_WIDTH
    );
    let _ = writeln!(out, "{}", header.bold());

    for row in rows {
        let line = format!(
            "{:>3}  {:<nw$}  {:<tw$}  {:>4}  {:>4}  {:>4}  {:>4}",
            row.position,
            truncate(&row.driver, NAME_WIDTH),
            truncate(&row.team_name, TEAM_WIDTH),
            row.points,
            row.wins,
            row.podiums,
            gap_text(row.gap),
            nw = NAME_WIDTH,
            tw = TEAM_WIDTH
        );
        let _ = writeln!(out, "{}", highlight_leader(line, row.position));
    }
    out
}

pub fn constructor_standings(rows: &[ConstructorRow]) -> String {
    let mut out = String::new();
    let header = format!(
        "{:>3}  {:<tw$}  {:<6}  {:>4}  {:>4}  {:>4}  {:>4}  Drivers",
        "Pos",
        "Constructor",
        "Code",
        "Pts",
        "Wins",
        "Pod",
        "Gap",
        tw = TEAM_WIDTH
    );
    let _ = writeln!(out, "{}", header.bold());

    for row in rows {
        let line = format!(
            "{:>3}  {:<tw$}  {:<6}  {:>4}  {:>4}  {:>4}  {:>4}  {}",
            row.position,
            truncate(&row.team_name, TEAM_WIDTH),
            row.team_code,
            row.points,
            row.wins,
            row.podiums,
            gap_text(row.gap),
            row.members.join(", "),
            tw = TEAM_WIDTH
        );
        let _ = writeln!(out, "{}", highlight_leader(line, row.position));
    }
    out
}

fn gap_text(gap: u32) -> String {
    if gap == 0 {
        "-".to_string()
    } else {
        format!("-{}", gap)
    }
}

fn highlight_leader(line: String, position: usize) -> ColoredString {
    if position == 1 {
        line.bright_green()
    } else {
        line.normal()
    }
}

pub fn calendar(events: &[RaceEvent], countdown: Option<&Countdown>) -> String {
    let mut out = String::new();
    let header = format!(
        "{:>3}  {:<10}  {:<nw$}  {:<18}  {:<10}  Circuit",
        "Rnd",
        "Label",
        "Race",
        "Date",
        "Status",
        nw = NAME_WIDTH + 4
    );
    let _ = writeln!(out, "{}", header.bold());

    for event in events {
        let circuit = if event.circuit.location.is_empty() {
            event.circuit.circuit_name.clone()
        } else {
            format!("{} ({})", event.circuit.circuit_name, event.circuit.location)
        };
        let line = format!(
            "{:>3}  {:<10}  {:<nw$}  {:<18}  {:<10}  {}",
            event.round,
            truncate(&event.round_label, 10),
            truncate(&event.name, NAME_WIDTH + 4),
            truncate(&event.date, 18),
            event.status.to_string(),
            circuit,
            nw = NAME_WIDTH + 4
        );
        let line = match event.status {
            RaceStatus::Completed => line.dimmed(),
            RaceStatus::Next => line.bright_yellow().bold(),
            RaceStatus::Upcoming => line.normal(),
        };
        let _ = writeln!(out, "{}", line);
    }

    if let Some(countdown) = countdown {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", countdown_line(countdown));
    }
    out
}

pub fn countdown_line(countdown: &Countdown) -> String {
    if countdown.has_started() {
        return format!("{} is under way", countdown.race.bright_yellow().bold());
    }
    format!(
        "Next race: {} in {}d {}h {}m {}s",
        countdown.race.bright_yellow().bold(),
        countdown.days,
        countdown.hours,
        countdown.minutes,
        countdown.seconds
    )
}

/// Cumulative points per round; `-` marks rounds not yet run
pub fn progression(table: &ProgressionTable) -> String {
    let mut out = String::new();
    let round_count = table.rows.first().map_or(0, |row| row.rounds.len());

    let mut header = format!("{:<nw$}", "Name", nw = NAME_WIDTH);
    for round in 1..=round_count {
        let _ = write!(
            header,
            " {:>rw$}",
            truncate(&round_label(&table.rounds, round), ROUND_WIDTH),
            rw = ROUND_WIDTH
        );
    }
    let _ = write!(header, " {:>rw$}", "Total", rw = ROUND_WIDTH);
    let _ = writeln!(out, "{}", header.bold());

    for row in &table.rows {
        let mut line = format!("{:<nw$}", truncate(&row.name, NAME_WIDTH), nw = NAME_WIDTH);
        for points in &row.rounds {
            let cell = match points {
                RoundPoints::NotRun => "-".to_string(),
                RoundPoints::Scored { cumulative, .. } => cumulative.to_string(),
            };
            let _ = write!(line, " {:>rw$}", cell, rw = ROUND_WIDTH);
        }
        let _ = write!(line, " {:>rw$}", row.total, rw = ROUND_WIDTH);
        let _ = writeln!(out, "{}", line);
    }

    let _ = writeln!(
        out,
        "{}",
        format!("{} of {} rounds completed", table.completed_rounds, round_count).dimmed()
    );
    out
}

pub fn qualifying(table: &QualifyingTable) -> String {
    let mut out = String::new();

    let mut header = format!("{:<nw$}", "Driver", nw = NAME_WIDTH);
    for round in &table.rounds {
        let _ = write!(
            header,
            " {:>rw$}",
            truncate(&round_label(&table.rounds, round.round), ROUND_WIDTH),
            rw = ROUND_WIDTH
        );
    }
    let _ = writeln!(out, "{}", header.bold());

    for row in &table.rows {
        let mut line = format!("{:<nw$}", truncate(&row.driver, NAME_WIDTH), nw = NAME_WIDTH);
        for round in &table.rounds {
            let cell = row
                .result(round.round)
                .map_or_else(|| "-".to_string(), |result| result.raw.trim().to_string());
            let _ = write!(line, " {:>rw$}", truncate(&cell, ROUND_WIDTH), rw = ROUND_WIDTH);
        }
        let _ = writeln!(out, "{}", line);
    }
    out
}

/// Row counts and recovered issues for one pass
pub fn report_summary(report: &IngestReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "Ingestion Summary".bright_green().bold());
    for sheet in SheetKind::ALL {
        let stats = report.stats(sheet);
        let _ = writeln!(
            out,
            "  {:<14} {:>4} rows, {:>4} records, {:>3} skipped",
            sheet.to_string(),
            stats.rows_read,
            stats.records,
            stats.rows_skipped
        );
    }
    if report.issues.is_empty() {
        let _ = writeln!(out, "  No issues");
    } else {
        let _ = writeln!(out, "  {} issues:", report.issues.len().to_string().yellow());
        for issue in &report.issues {
            let _ = writeln!(out, "    - {}", issue);
        }
    }
    out
}
