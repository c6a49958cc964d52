use std::path::PathBuf;

use clap::{Parser, Subcommand};
use lunical_calendar::SolarDate;

/// Lunar calendar conversion and recurring-event calendar generator.
#[derive(Parser)]
#[command(
    name = "lunical",
    version,
    about = "Generate .ics calendars for events on fixed lunar dates"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Expand an events file into an .ics calendar.
    Generate(GenerateArgs),
    /// Convert a Gregorian date to its lunar date.
    ToLunar(ToLunarArgs),
    /// Convert a lunar date to its Gregorian date.
    ToSolar(ToSolarArgs),
    /// Write a starter events file.
    Init(InitArgs),
}

/// Arguments for the `generate` subcommand.
#[derive(clap::Args)]
pub struct GenerateArgs {
    /// Path to TOML configuration file (default: lunical.toml if present).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override events JSON path from config.
    #[arg(short, long)]
    pub events: Option<PathBuf>,

    /// Override output .ics path from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// First lunar year to generate (default: current year).
    #[arg(long)]
    pub start_year: Option<i32>,

    /// Number of lunar years to generate.
    #[arg(short = 'n', long)]
    pub years: Option<u32>,

    /// Calendar display name.
    #[arg(long)]
    pub name: Option<String>,
}

/// Arguments for the `to-lunar` subcommand.
#[derive(clap::Args)]
pub struct ToLunarArgs {
    /// Gregorian date as YYYY-MM-DD.
    pub date: SolarDate,
}

/// Arguments for the `to-solar` subcommand.
#[derive(clap::Args)]
pub struct ToSolarArgs {
    /// Lunar year.
    pub year: i32,
    /// Lunar month (1-12).
    pub month: u8,
    /// Lunar day (1-30).
    pub day: u8,
    /// The date is in the leap month.
    #[arg(long)]
    pub leap: bool,
}

/// Arguments for the `init` subcommand.
#[derive(clap::Args)]
pub struct InitArgs {
    /// Path of the events file to create.
    #[arg(short, long, default_value = "events.json")]
    pub output: PathBuf,

    /// Overwrite an existing file.
    #[arg(short, long)]
    pub force: bool,
}
