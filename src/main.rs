mod cmd;
mod cohere;
mod logging;
mod prompt;
mod sdk;

use clap::Parser;
use owo_colors::OwoColorize;
use std::process::ExitCode;
use tracing::debug;

fn main() -> ExitCode {
    let cli = cmd::Cli::parse();
    logging::init(cli.verbose);
    debug!(level = %logging::level_for(cli.verbose), "tracing initialized");

    match cmd::handle(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", "error:".red());
            ExitCode::FAILURE
        }
    }
}
