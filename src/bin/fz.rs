//! fz CLI binary.

use std::io::Write;
use std::process;

use clap::Parser;
use clap::error::ErrorKind;
use env_logger::Builder;
use log::LevelFilter;

use fz::cli::args::*;
use fz::cli::commands::*;

fn main() {
    let args = match FzArgs::try_parse_from(normalize_args(std::env::args_os())) {
        Ok(args) => args,
        Err(e) => match e.kind() {
            // Help and version go to stdout.
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                let _ = e.print();
                process::exit(0);
            }
            ErrorKind::MissingRequiredArgument => {
                eprint!("{}", usage());
                process::exit(1);
            }
            _ => e.exit(),
        },
    };

    // Set up logging based on verbosity
    let log_level = match args.verbosity() {
        0 => LevelFilter::Error, // Quiet mode
        1 => LevelFilter::Warn,  // Default
        2 => LevelFilter::Info,  // Verbose
        _ => LevelFilter::Debug, // Very verbose (3+)
    };

    Builder::new()
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    // Execute the command
    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
