#![forbid(unsafe_code)]

pub mod adapters;
pub mod app;
pub mod commands;
pub mod domain;
pub mod infrastructure;
pub mod ports;

use clap::Parser;

use app::AppController;
use commands::Cli;

/// Parse the command line and run it against a freshly initialized
/// controller. Returns the process exit code.
pub fn run() -> i32 {
    let cli = Cli::parse();

    // An unusable storage location is the one unrecoverable failure.
    let controller = match AppController::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to initialize application: {}", e);
            return 1;
        }
    };

    match cli.dispatch(&controller) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("{}", e);
            1
        }
    }
}
