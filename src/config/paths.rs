//! Path management for SignupCLI
//!
//! ## Path Resolution Order
//!
//! 1. `SIGNUP_CLI_CONFIG_DIR` environment variable (if set)
//! 2. The platform config directory from the `directories` crate
//!    (`~/.config/signup-cli` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::SignupError;

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "SIGNUP_CLI_CONFIG_DIR";

/// Manages all paths used by SignupCLI
#[derive(Debug, Clone)]
pub struct SignupPaths {
    base_dir: PathBuf,
}

impl SignupPaths {
    /// Create a new SignupPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, SignupError> {
        let base_dir = match std::env::var(CONFIG_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => ProjectDirs::from("", "", "signup-cli")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    SignupError::Config("Could not determine a config directory".into())
                })?,
        };

        Ok(Self { base_dir })
    }

    /// Create SignupPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Directory for TUI log files
    pub fn logs_dir(&self) -> PathBuf {
        self.base_dir.join("logs")
    }

    /// Ensure the config and log directories exist
    pub fn ensure_directories(&self) -> Result<(), SignupError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SignupError::Io(format!("Failed to create config directory: {}", e)))?;

        std::fs::create_dir_all(self.logs_dir())
            .map_err(|e| SignupError::Io(format!("Failed to create logs directory: {}", e)))?;

        Ok(())
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SignupPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.logs_dir(), temp_dir.path().join("logs"));
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var(CONFIG_DIR_ENV, custom_path);
        let paths = SignupPaths::new().unwrap();
        env::remove_var(CONFIG_DIR_ENV);

        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SignupPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.logs_dir().exists());
    }
}
