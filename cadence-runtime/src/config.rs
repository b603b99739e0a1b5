use std::path::Path;
use std::time::Duration;

use config::{Config, ConfigError, File, FileFormat};
use serde::Deserialize;

use crate::error::{Result, SchedError};
use crate::time_unit::TimeUnit;

/// Table read from configuration sources.
const SCHEDULER_KEY: &str = "scheduler";

/// Load config from a specific TOML file
pub fn load_toml_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    load_config(path.as_ref(), FileFormat::Toml)
}

/// Load config from a specific YAML file
pub fn load_yaml_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    load_config(path.as_ref(), FileFormat::Yaml)
}

/// File values are overridden by `CADENCE_`-prefixed environment variables,
/// e.g. `CADENCE_SCHEDULER__MAX_WAIT=250ms`.
fn load_config(path: &Path, format: FileFormat) -> Result<Config> {
    let config = Config::builder()
        .add_source(File::from(path).format(format))
        .add_source(
            config::Environment::with_prefix("CADENCE")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;
    Ok(config)
}

/// Settings for the real-time clock and sleep waiter.
///
/// ```toml
/// [scheduler]
/// time_unit = "milliseconds"
/// max_wait = "500ms"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Unit of the float/epoch clocks and of numeric deltas given to the
    /// sleep waiter.
    pub time_unit: TimeUnit,
    /// Longest single sleep, in duration shorthand ("250ms", "5s").
    pub max_wait: Option<String>,
}

impl SchedulerConfig {
    /// Reads the `[scheduler]` table; a missing table yields the defaults.
    pub fn from_config(config: &Config) -> Result<Self> {
        let parsed = match config.get::<SchedulerConfig>(SCHEDULER_KEY) {
            Ok(parsed) => parsed,
            Err(ConfigError::NotFound(_)) => SchedulerConfig::default(),
            Err(e) => return Err(e.into()),
        };
        parsed.max_wait()?;
        Ok(parsed)
    }

    pub fn from_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_config(&load_toml_config(path)?)
    }

    pub fn from_yaml<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_config(&load_yaml_config(path)?)
    }

    /// `max_wait` parsed into a [`Duration`].
    pub fn max_wait(&self) -> Result<Option<Duration>> {
        self.max_wait
            .as_deref()
            .map(|raw| {
                TimeUnit::parse_duration(raw)
                    .map(|(value, unit)| unit.to_duration(value))
                    .ok_or_else(|| SchedError::InvalidDuration(raw.to_string()))
            })
            .transpose()
    }
}
