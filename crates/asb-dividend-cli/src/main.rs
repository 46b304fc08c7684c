mod commands;
mod input;
mod logging;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::dividend::{ChartArgs, SimulateArgs};

/// ASB dividend and bonus growth calculator
#[derive(Parser)]
#[command(
    name = "asbcalc",
    version,
    about = "ASB dividend and bonus growth calculator",
    long_about = "Estimates the year-by-year growth of an ASB balance from an initial \
                  investment, a monthly deposit, the annual dividend rate and the annual \
                  bonus rate (paid on the first RM 30,000 only), with decimal precision."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Log level for stderr diagnostics (ASBCALC_LOG overrides)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate the balance year by year
    Simulate(SimulateArgs),
    /// Emit the wealth line series (year labels and rounded values)
    Chart(ChartArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(&cli.log_level);

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Simulate(args) => commands::dividend::run_simulate(args),
        Commands::Chart(args) => commands::dividend::run_chart(args),
        Commands::Version => {
            println!("asbcalc {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
