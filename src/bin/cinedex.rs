//! Cinedex CLI Binary
//!
//! Command-line interface for browsing the movie catalog.

use cinedex::logging::init_logging;
use cinedex::tooling::cli::{Cli, CliContext};
use clap::Parser;
use std::process;

fn main() {
    let cli = Cli::parse();

    let config = match cli.load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = init_logging(Some(&config.logging)) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let context = CliContext::new(&config);

    match context.execute(&cli.command) {
        Ok(output) => {
            println!("{}", output.trim_end());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
