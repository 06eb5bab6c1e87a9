use clap::Parser;
use sensor_stability::cli::{args::Args, commands};
use std::io::IsTerminal;
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    let Some(command) = args.command else {
        show_help_and_commands();
        process::exit(0);
    };

    let use_color = std::io::stdout().is_terminal();

    match commands::run(command, use_color) {
        Ok(report) => {
            print!("{}", report);
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Sensor Stability - Telemetry Deviation Analyzer");
    println!("===============================================");
    println!();
    println!("Find the sensor whose readings deviate furthest from their own mean");
    println!("in a batch of `id,val1,val2,...` telemetry lines.");
    println!();
    println!("USAGE:");
    println!("    sensor-stability <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    analyze     Analyze telemetry lines from files or stdin");
    println!("    demo        Analyze the built-in reference batch");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Analyze a file:");
    println!("    sensor-stability analyze readings.csv");
    println!();
    println!("    # Read from stdin and list every sensor as JSON:");
    println!("    cat readings.csv | sensor-stability analyze --all --format json");
    println!();
    println!("    # Show which lines were dropped:");
    println!("    sensor-stability demo --show-skipped");
    println!();
    println!("For detailed help on any command, use:");
    println!("    sensor-stability <COMMAND> --help");
}
