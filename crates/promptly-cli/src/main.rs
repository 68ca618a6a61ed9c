mod cli;
mod logging;
mod picker;

use std::process::ExitCode;

use clap::Parser;
use crossterm::style::Stylize;

use crate::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        },
    }
}
