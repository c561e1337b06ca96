//! Baht Text CLI
//!
//! Reads amounts interactively from stdin, or converts a CSV file of amounts
//! when given a path.
//!
//! # Usage
//!
//! ```bash
//! cargo run                        # interactive
//! cargo run -- amounts.csv > out.csv
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use bahttext::{batch, repl, Result};
use log::info;
use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    match args.get(1) {
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            repl::run(stdin.lock(), stdout.lock())
        }
        Some(input_path) => {
            let file = File::open(input_path)?;
            let reader = BufReader::new(file);

            let stdout = io::stdout();
            let summary = batch::convert_csv(reader, stdout.lock())?;
            info!(
                "Converted {} amounts, skipped {}",
                summary.converted, summary.skipped
            );
            Ok(())
        }
    }
}
