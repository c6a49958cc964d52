//! Generate command: events file -> occurrences -> .ics file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Datelike;
use tracing::{info, info_span, warn};

use lunical_ics::IcsEncoder;
use lunical_io::{read_events, write_calendar};
use lunical_occurrence::generate_all;

use crate::cli::GenerateArgs;
use crate::config::{DEFAULT_CONFIG_PATH, LunicalConfig};
use crate::convert;

/// Summary of a finished generation run.
#[derive(Debug, PartialEq, Eq)]
pub struct GenerateSummary {
    pub n_events: usize,
    pub n_occurrences: usize,
    pub output: PathBuf,
}

/// Run the generation pipeline and report what was written.
pub fn run(args: GenerateArgs) -> Result<()> {
    let summary = execute(args, current_year())?;
    println!(
        "wrote {} occurrences of {} events to {}",
        summary.n_occurrences,
        summary.n_events,
        summary.output.display()
    );
    Ok(())
}

/// Runs the pipeline with an explicit default start year.
pub fn execute(args: GenerateArgs, current_year: i32) -> Result<GenerateSummary> {
    let _cmd = info_span!("generate").entered();

    // 1. Load config, then let CLI flags override it
    let mut config = load_config(args.config.as_deref())?;
    if let Some(events) = args.events {
        config.io.events = events;
    }
    if let Some(output) = args.output {
        config.io.output = output;
    }
    if let Some(year) = args.start_year {
        config.generate.start_year = Some(year);
    }
    if let Some(years) = args.years {
        config.generate.years = years;
    }
    if let Some(name) = args.name {
        config.calendar.name = name;
    }

    // 2. Build crate configs
    let generate_cfg = convert::build_generate_config(&config.generate, current_year)?;
    let ics_cfg = convert::build_ics_config(&config.calendar);
    info!(
        start_year = generate_cfg.start_year(),
        years = generate_cfg.span(),
        "generation range"
    );

    // 3. Read events
    let events = read_events(&config.io.events)
        .with_context(|| format!("failed to load events: {}", config.io.events.display()))?;
    if events.is_empty() {
        warn!(path = %config.io.events.display(), "events file is empty");
    }

    // 4. Expand and encode
    let occurrences = generate_all(&events, &generate_cfg).context("failed to expand events")?;
    info!(n_occurrences = occurrences.len(), "expanded events");
    let document = IcsEncoder::new(ics_cfg).encode(&occurrences);

    // 5. Write
    write_calendar(&config.io.output, &document)
        .with_context(|| format!("failed to write calendar: {}", config.io.output.display()))?;
    info!(path = %config.io.output.display(), "calendar written");

    Ok(GenerateSummary {
        n_events: events.len(),
        n_occurrences: occurrences.len(),
        output: config.io.output,
    })
}

/// Loads the explicit config, or the default file if it exists, or defaults.
fn load_config(path: Option<&Path>) -> Result<LunicalConfig> {
    match path {
        Some(path) => LunicalConfig::load(path),
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_PATH);
            if default_path.exists() {
                LunicalConfig::load(default_path)
            } else {
                Ok(LunicalConfig::default())
            }
        }
    }
}

fn current_year() -> i32 {
    chrono::Local::now().year()
}
