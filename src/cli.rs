use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands;

#[derive(Parser)]
#[command(name = "twse-disposition")]
#[command(about = "TWSE disposition-stock checker", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check which days a stock becomes a disposition stock
    Check {
        /// Path to the daily trading data CSV
        csv: PathBuf,
    },
    /// Fetch the daily limit-up stock list from TWSE
    LimitUp {
        /// Date in YYYYMMDD format (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
}

pub fn run() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { csv } => {
            commands::check::run(&csv);
        }
        Commands::LimitUp { date } => {
            commands::limit_up::run(date);
        }
    }
}
