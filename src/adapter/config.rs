use anyhow::{Context, Result};
use chrono::Weekday;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::application::dto::report_config::ReportConfig;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Directory (or single file) holding attendance exports
    pub input_dir: String,

    // Aggregation
    pub week_starts_on: Weekday,
    pub weekly_target_hours: f64,

    // Backend-reported hours are a hint; this is how far they may drift
    pub hours_hint_tolerance: f64,

    pub skip_malformed: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: "./attendance".to_string(),
            week_starts_on: Weekday::Sun,
            weekly_target_hours: 40.0,
            hours_hint_tolerance: 0.05,
            skip_malformed: true,
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            info!("No config file at {}, using defaults", path);
            return Ok(Self::default());
        }

        let content =
            fs::read_to_string(path).context(format!("Failed to read config file: {}", path))?;
        let config: Config = serde_json::from_str(&content)
            .context(format!("Failed to parse config file: {}", path))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.weekly_target_hours.is_finite() || self.weekly_target_hours < 0.0 {
            anyhow::bail!(
                "weekly_target_hours must be a non-negative number, got {}",
                self.weekly_target_hours
            );
        }
        if !self.hours_hint_tolerance.is_finite() || self.hours_hint_tolerance < 0.0 {
            anyhow::bail!(
                "hours_hint_tolerance must be a non-negative number, got {}",
                self.hours_hint_tolerance
            );
        }
        Ok(())
    }

    pub fn report_config(&self, employee_id: Option<u64>) -> ReportConfig {
        ReportConfig::new(
            self.week_starts_on,
            self.weekly_target_hours,
            self.hours_hint_tolerance,
            self.skip_malformed,
            employee_id,
        )
    }
}
