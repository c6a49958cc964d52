use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Config file looked up when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "lunical.toml";

/// Top-level lunical configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct LunicalConfig {
    /// Calendar document settings.
    #[serde(default)]
    pub calendar: CalendarToml,

    /// Occurrence generation settings.
    #[serde(default)]
    pub generate: GenerateToml,

    /// I/O settings.
    #[serde(default)]
    pub io: IoToml,
}

impl LunicalConfig {
    /// Reads and parses a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse config: {}", path.display()))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarToml {
    #[serde(default = "default_calendar_name")]
    pub name: String,
    #[serde(default = "default_product_id")]
    pub product_id: String,
}

impl Default for CalendarToml {
    fn default() -> Self {
        Self {
            name: default_calendar_name(),
            product_id: default_product_id(),
        }
    }
}

fn default_calendar_name() -> String {
    lunical_ics::DEFAULT_CALENDAR_NAME.to_string()
}
fn default_product_id() -> String {
    lunical_ics::DEFAULT_PRODUCT_ID.to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerateToml {
    /// First lunar year; the current year when unset.
    #[serde(default)]
    pub start_year: Option<i32>,
    #[serde(default = "default_years")]
    pub years: u32,
    #[serde(default = "default_missing_day")]
    pub missing_day: String,
}

impl Default for GenerateToml {
    fn default() -> Self {
        Self {
            start_year: None,
            years: default_years(),
            missing_day: default_missing_day(),
        }
    }
}

fn default_years() -> u32 {
    20
}
fn default_missing_day() -> String {
    "fail".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoToml {
    #[serde(default = "default_events")]
    pub events: PathBuf,
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

impl Default for IoToml {
    fn default() -> Self {
        Self {
            events: default_events(),
            output: default_output(),
        }
    }
}

fn default_events() -> PathBuf {
    PathBuf::from("events.json")
}
fn default_output() -> PathBuf {
    PathBuf::from("lunar_events.ics")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let cfg: LunicalConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.calendar.name, "農曆提醒");
        assert_eq!(cfg.generate.start_year, None);
        assert_eq!(cfg.generate.years, 20);
        assert_eq!(cfg.generate.missing_day, "fail");
        assert_eq!(cfg.io.events, PathBuf::from("events.json"));
        assert_eq!(cfg.io.output, PathBuf::from("lunar_events.ics"));
    }

    #[test]
    fn full_file() {
        let cfg: LunicalConfig = toml::from_str(
            r#"
            [calendar]
            name = "Family"

            [generate]
            start_year = 2030
            years = 5
            missing_day = "last-day"

            [io]
            events = "data/events.json"
            output = "out/family.ics"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.calendar.name, "Family");
        assert_eq!(cfg.calendar.product_id, lunical_ics::DEFAULT_PRODUCT_ID);
        assert_eq!(cfg.generate.start_year, Some(2030));
        assert_eq!(cfg.generate.years, 5);
        assert_eq!(cfg.generate.missing_day, "last-day");
        assert_eq!(cfg.io.output, PathBuf::from("out/family.ics"));
    }

    #[test]
    fn unknown_fields_rejected() {
        assert!(toml::from_str::<LunicalConfig>("[generate]\nspan = 3\n").is_err());
        assert!(toml::from_str::<LunicalConfig>("[alarms]\n").is_err());
    }

    #[test]
    fn load_reports_path() {
        let err = LunicalConfig::load(Path::new("/nonexistent/lunical.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/lunical.toml"));
    }
}
