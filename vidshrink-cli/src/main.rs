// vidshrink-cli/src/main.rs
//
// Entry point for the `vidshrink` binary.
//
// Parses flags, sets up logging, runs the batch, prints the summary and
// exits with a status that reflects the outcome:
// - 0: every eligible file converted or already present
// - 1: fatal error before or during the walk
// - 2: usage error (reported by clap)
// - 3: batch finished with at least one failed file

use clap::Parser;
use std::process;
use std::time::Instant;

use vidshrink_cli::output::{print_error, print_report};
use vidshrink_cli::{Cli, EXIT_FATAL, exit_code_for, logging, run_convert};

fn main() {
    let started = Instant::now();
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let code = match run_convert(&cli, started) {
        Ok(report) => match print_report(&report, cli.json) {
            Ok(()) => exit_code_for(&report),
            Err(e) => {
                print_error(&e);
                EXIT_FATAL
            }
        },
        Err(e) => {
            print_error(&e);
            EXIT_FATAL
        }
    };

    process::exit(code);
}
