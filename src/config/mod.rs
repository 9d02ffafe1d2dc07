//! Configuration module for SignupCLI
//!
//! This module provides configuration management including:
//! - Config directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::SignupPaths;
pub use settings::Settings;
