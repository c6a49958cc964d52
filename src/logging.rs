use tracing_subscriber::EnvFilter;

/// Log targets of the binary and the library crates it drives.
const CRATE_TARGETS: &[&str] = &[
    "lunical",
    "lunical_calendar",
    "lunical_ics",
    "lunical_io",
    "lunical_occurrence",
];

/// Maps the `-v` count to a level: none warns, then info, debug, trace.
fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Builds the `target=level` directive list applied when `RUST_LOG` is unset.
fn default_directives(verbosity: u8) -> String {
    let level = level_for(verbosity);
    CRATE_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Installs the global subscriber. `RUST_LOG` takes precedence over `-v`.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbosity)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
