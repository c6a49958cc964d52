//! Init command: write a starter events file.

use anyhow::{Context, Result, bail};
use tracing::info_span;

use lunical_io::write_events;
use lunical_occurrence::{RecurringLunarEvent, ReminderOffset};

use crate::cli::InitArgs;

/// Write the template events file.
pub fn run(args: InitArgs) -> Result<()> {
    let _cmd = info_span!("init", path = %args.output.display()).entered();
    if args.output.exists() && !args.force {
        bail!(
            "{} already exists (use --force to overwrite)",
            args.output.display()
        );
    }
    let events = template_events()?;
    write_events(&args.output, &events)
        .with_context(|| format!("failed to write events: {}", args.output.display()))?;
    println!("wrote {} template event(s) to {}", events.len(), args.output.display());
    Ok(())
}

/// The starter event list: Mazu's birthday, lunar 3/23, reminded a day ahead.
fn template_events() -> Result<Vec<RecurringLunarEvent>> {
    let mazu = RecurringLunarEvent::new("媽祖生日", 3, 23)?
        .with_reminder(ReminderOffset::days(1))
        .with_notes("準備供品/香燭");
    Ok(vec![mazu])
}
