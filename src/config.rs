use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use thiserror::Error;

use crate::core::matcher::MAX_DISTANCE_MILES;

/// CSV filename arguments
#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Match surplus-food pickups to recipient organizations"
)]
pub struct Cli {
    /// CSV file containing pickups
    #[arg(long)]
    pub pickups: PathBuf,

    /// CSV file containing recipients
    #[arg(long)]
    pub recipients: PathBuf,

    /// CSV file to write matches to
    #[arg(long)]
    pub matches: PathBuf,

    /// Overwrite an existing matches file without prompting
    #[arg(long)]
    pub yes: bool,
}

#[derive(Debug, Error)]
pub enum ArgsError {
    #[error("cannot find csv file {0} specified by --pickups")]
    MissingPickups(String),

    #[error("cannot find csv file {0} specified by --recipients")]
    MissingRecipients(String),

    #[error("the csv file {0} specified by --matches already exists")]
    RefusedOverwrite(String),

    #[error("failed to read confirmation: {0}")]
    Prompt(#[from] io::Error),
}

/// Validate the CLI arguments at the boundary, before the core runs
///
/// Input files must exist. An existing output file requires confirmation
/// (default yes) unless `--yes` was passed.
pub fn verify_arguments(cli: &Cli) -> Result<(), ArgsError> {
    if !cli.pickups.exists() {
        return Err(ArgsError::MissingPickups(cli.pickups.display().to_string()));
    }

    if !cli.recipients.exists() {
        return Err(ArgsError::MissingRecipients(
            cli.recipients.display().to_string(),
        ));
    }

    if cli.matches.exists() && !cli.yes && !confirm_overwrite(&cli.matches)? {
        return Err(ArgsError::RefusedOverwrite(
            cli.matches.display().to_string(),
        ));
    }

    Ok(())
}

fn confirm_overwrite(path: &Path) -> Result<bool, io::Error> {
    print!("Overwrite {}? [y]: ", path.display());
    io::stdout().flush()?;

    let mut choice = String::new();
    io::stdin().lock().read_line(&mut choice)?;
    let choice = choice.trim();

    Ok(choice.is_empty() || choice.eq_ignore_ascii_case("y"))
}

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_max_distance_miles")]
    pub max_distance_miles: f64,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            max_distance_miles: default_max_distance_miles(),
        }
    }
}

fn default_max_distance_miles() -> f64 {
    MAX_DISTANCE_MILES
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "compact".to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides
    /// earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml, optional)
    /// 3. Environment variables (prefixed with FOODMATCH)
    ///    e.g., FOODMATCH_MATCHING__MAX_DISTANCE_MILES -> matching.max_distance_miles
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(
                Environment::with_prefix("FOODMATCH")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matching_settings() {
        let settings = MatchingSettings::default();
        assert_eq!(settings.max_distance_miles, 5.0);
    }

    #[test]
    fn test_default_logging_settings() {
        let settings = LoggingSettings::default();
        assert_eq!(settings.level, "info");
        assert_eq!(settings.format, "compact");
    }
}
