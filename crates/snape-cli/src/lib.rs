pub mod cli;
pub mod commands;
pub mod logging;

use clap::Parser;
use cli::Snape;
use commands::handle_command;
use std::process;

/// Run the snape CLI application
pub fn run_main() {
    let args = Snape::parse();
    logging::init(args.verbose);

    if let Err(e) = handle_command(args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
