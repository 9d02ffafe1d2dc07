//! User settings for SignupCLI
//!
//! Display and host preferences. Nothing entered in the wizard is stored here.

use serde::{Deserialize, Serialize};

use super::paths::SignupPaths;
use crate::error::SignupError;
use crate::models::BillingPeriod;
use crate::submission::OutputFormat;

/// User settings for SignupCLI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol shown on price labels
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Billing period preselected on a new wizard
    #[serde(default)]
    pub default_billing: BillingPeriod,

    /// Format used to print the submission
    #[serde(default)]
    pub submission_format: OutputFormat,

    /// Log filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Whether the TUI writes logs to a file under the config directory
    #[serde(default = "default_true")]
    pub log_to_file: bool,

    /// TUI tick interval in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Slide the page in when the step changes
    #[serde(default = "default_true")]
    pub animate_transitions: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_tick_rate_ms() -> u64 {
    50
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            default_billing: BillingPeriod::default(),
            submission_format: OutputFormat::default(),
            log_level: default_log_level(),
            log_to_file: true,
            tick_rate_ms: default_tick_rate_ms(),
            animate_transitions: true,
        }
    }
}

impl Settings {
    /// Load settings from disk, or default settings if the file doesn't exist
    pub fn load_or_create(paths: &SignupPaths) -> Result<Self, SignupError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                SignupError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                SignupError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - `signup init` writes the file
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SignupPaths) -> Result<(), SignupError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            SignupError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            SignupError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
