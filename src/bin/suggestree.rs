//! Suggestree CLI binary.

use std::io::Write;
use std::process;

use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use suggestree::cli::args::*;
use suggestree::cli::commands::*;

fn main() {
    // Parse command line arguments using clap
    let args = SuggestreeArgs::parse();

    let log_level = match args.verbosity() {
        0 => LevelFilter::Error, // Quiet mode
        1 => LevelFilter::Warn,  // Default
        2 => LevelFilter::Info,  // Verbose
        3 => LevelFilter::Debug, // Very verbose
        _ => LevelFilter::Trace, // Rotations and other per-insert detail (4+)
    };

    Builder::new()
        .filter_level(log_level)
        .parse_env("SUGGESTREE_LOG")
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    // Execute the command
    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
