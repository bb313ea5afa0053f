//! # content-analyser command-line entry point
//!
//! ```bash
//! content-analyser sample --count 1200 --seed 7 --output catalog.json
//! content-analyser analyse catalog.json
//! content-analyser analyse catalog.csv --format json --output analysis.json
//! content-analyser clean catalog.csv --output cleaned.csv
//! ```

#![warn(clippy::all, rust_2018_idioms)]
#![expect(clippy::print_stdout)] // Allow println! in main binary

mod cli;
mod logging;

use anyhow::Result;
use clap::Parser as _;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    logging::init(cli.verbose)?;
    cli::run_command(cli.command)
}
