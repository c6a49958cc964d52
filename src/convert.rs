//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Result, bail};

use lunical_ics::IcsConfig;
use lunical_occurrence::{GenerateConfig, MissingDayPolicy};

use crate::config::{CalendarToml, GenerateToml};

/// Parses a missing-day policy name into the corresponding enum variant.
pub fn parse_missing_day(s: &str) -> Result<MissingDayPolicy> {
    match s.to_lowercase().replace('_', "-").as_str() {
        "fail" => Ok(MissingDayPolicy::Fail),
        "skip" => Ok(MissingDayPolicy::Skip),
        "last-day" => Ok(MissingDayPolicy::LastDay),
        other => bail!("unknown missing_day policy: {other:?} (expected fail, skip or last-day)"),
    }
}

/// Builds a [`GenerateConfig`] from the TOML generate section.
///
/// `current_year` is used when no start year is configured.
pub fn build_generate_config(generate: &GenerateToml, current_year: i32) -> Result<GenerateConfig> {
    let start_year = generate.start_year.unwrap_or(current_year);
    if start_year < 1 {
        bail!("start_year must be positive, got {start_year}");
    }
    let cfg = GenerateConfig::new(start_year, generate.years)
        .with_missing_day(parse_missing_day(&generate.missing_day)?);
    cfg.validate()?;
    Ok(cfg)
}

/// Builds an [`IcsConfig`] from the TOML calendar section.
pub fn build_ics_config(calendar: &CalendarToml) -> IcsConfig {
    IcsConfig::new()
        .with_calendar_name(&calendar.name)
        .with_product_id(&calendar.product_id)
}
