//! Date conversion commands.

use anyhow::{Context, Result};
use tracing::info_span;

use lunical_calendar::{LunarDate, lunar_to_solar, solar_to_lunar};

use crate::cli::{ToLunarArgs, ToSolarArgs};

/// Print the lunar date of a Gregorian date.
pub fn run_to_lunar(args: ToLunarArgs) -> Result<()> {
    let _cmd = info_span!("to_lunar", date = %args.date).entered();
    let lunar = solar_to_lunar(args.date)
        .with_context(|| format!("cannot convert {}", args.date))?;
    println!("{}", describe_lunar(lunar));
    Ok(())
}

/// Print the Gregorian date of a lunar date.
pub fn run_to_solar(args: ToSolarArgs) -> Result<()> {
    let _cmd = info_span!("to_solar").entered();
    let lunar = LunarDate::new(args.year, args.month, args.day, args.leap)?;
    let solar = lunar_to_solar(lunar).with_context(|| format!("cannot convert {lunar}"))?;
    println!("{solar}");
    Ok(())
}

fn describe_lunar(date: LunarDate) -> String {
    let month = if date.is_leap_month() {
        format!("leap month {}", date.month())
    } else {
        format!("month {}", date.month())
    };
    format!("{date} (lunar year {}, {month}, day {})", date.year(), date.day())
}
