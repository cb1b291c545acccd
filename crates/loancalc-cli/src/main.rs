mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::loan::{LoanArgs, ScheduleArgs};

/// Flat-rate and effective (annuity) loan schedules
#[derive(Parser)]
#[command(
    name = "loancalc",
    version,
    about = "Flat-rate and effective (annuity) loan schedules",
    long_about = "Computes month-by-month repayment schedules for a loan under the flat-rate \
                  and the effective (reducing-balance annuity) method, with an optional \
                  introductory rate discount and an upfront provision fee. Input comes from \
                  flags, a JSON/YAML file (--input) or JSON piped on stdin. Set RUST_LOG=debug \
                  for diagnostics."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute both repayment schedules and the export report
    Schedule(ScheduleArgs),
    /// Compare total interest and payments between the two methods
    Compare(LoanArgs),
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
    env_logger::init();
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Schedule(args) => commands::loan::run_schedule(args),
        Commands::Compare(args) => commands::loan::run_compare(args),
        Commands::Version => {
            println!("loancalc {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            log::debug!("command failed: {e:?}");
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
