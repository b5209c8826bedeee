// appraise-cli/src/main.rs
//
// Entry point for the `appraise` binary: parse arguments, set up logging,
// run the ranking and map any failure to a message on stderr and exit code 1.

use appraise_cli::{Cli, init_logging, run_rank};
use clap::Parser;
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use std::process;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run_rank(&cli) {
        let message = format!("Error: {e}");
        if std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal() {
            eprintln!("{}", message.red().bold());
        } else {
            eprintln!("{message}");
        }
        process::exit(1);
    }
}
