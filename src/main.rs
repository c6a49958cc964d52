//! `lunical` command-line entry point.

mod cli;
mod config;
mod convert;
mod date_cmd;
mod generate;
mod init_cmd;
mod logging;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match dispatch(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Generate(args) => generate::run(args),
        Command::ToLunar(args) => date_cmd::run_to_lunar(args),
        Command::ToSolar(args) => date_cmd::run_to_solar(args),
        Command::Init(args) => init_cmd::run(args),
    }
}
