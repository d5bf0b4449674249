use clap::Parser;
use league_standings::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        tokio::select! {
            result = commands::run(args) => result,
            _ = tokio::signal::ctrl_c() => {
                eprintln!("\nReceived CTRL+C, stopping");
                Err(anyhow::anyhow!("Interrupted by user"))
            }
        }
    });

    match result {
        Ok(status) => process::exit(status.exit_code()),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("League Standings - Racing League Championship Engine");
    println!("====================================================");
    println!();
    println!("Read a racing league spreadsheet (one CSV export per sheet) and derive");
    println!("driver and constructor standings, the calendar and round-by-round progression.");
    println!();
    println!("USAGE:");
    println!("    league-standings [OPTIONS] <COMMAND>");
    println!();
    println!("COMMANDS:");
    println!("    standings    Championship standings (--constructors for teams)");
    println!("    calendar     Race calendar with the countdown to the next race");
    println!("    progression  Cumulative points per round (--constructors for teams)");
    println!("    qualifying   Qualifying results grid");
    println!("    snapshot     The full season snapshot as JSON");
    println!("    help         Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -c, --config <FILE>     Configuration file (TOML)");
    println!("        --sheets-dir <DIR>  Read <DIR>/<sheet>.csv files");
    println!("        --sheet-url <URL>   Fetch sheets from a CSV export endpoint");
    println!("        --overrides <FILE>  Race date and circuit overrides (JSON)");
    println!("    -v, --verbose           Increase logging verbosity");
    println!("    -q, --quiet             Only print errors");
    println!();
    println!("EXAMPLES:");
    println!("    # Driver standings from a directory of sheet exports:");
    println!("    league-standings --sheets-dir ./sheets standings");
    println!();
    println!("    # Constructor progression as JSON from a published spreadsheet:");
    println!(
        "    league-standings --sheet-url 'https://example.com/export?format=csv' \\"
    );
    println!("                     progression --constructors --format json");
    println!();
    println!("Exit status is 2 when no sheet produced any data.");
    println!();
    println!("For detailed help on any command, use:");
    println!("    league-standings <COMMAND> --help");
}
