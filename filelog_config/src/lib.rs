#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
//! Config schema for file loggers.
//!
//! - `Config` wraps a `[logger]` table deserialized from TOML.
//! - `LoggerConfig::validate` rejects values that would make the logger
//!   write somewhere other than `path/filename`.
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Directory used when no path is configured.
pub const DEFAULT_DIR: &str = "logs";

/// Level used when no level is configured.
pub const DEFAULT_LEVEL: &str = "DEBUG";

/// `[logger]` table.
///
/// Example:
/// ```toml
/// [logger]
/// path = "logs"
/// filename = "app.log"
/// level = "INFO"
/// type = "api"
/// ```
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    /// Directory holding the log file (created one level deep on demand)
    pub path: PathBuf,
    /// File name inside `path`; a dated `dd-mm-YYYY.log` name is used when absent
    pub filename: Option<String>,
    /// Severity tag for every line; free-form, DEBUG/INFO/ALERT/CRITICAL/ERROR/WARNING by convention
    pub level: String,
    /// Optional classification tag
    #[serde(rename = "type")]
    pub log_type: Option<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DIR),
            filename: None,
            level: DEFAULT_LEVEL.to_string(),
            log_type: None,
        }
    }
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub logger: LoggerConfig,
}

pub fn load_toml(s: &str) -> Result<Config, toml::de::Error> {
    toml::from_str::<Config>(s)
}

/// Read, parse and validate a config file.
pub fn load_file(path: &Path) -> eyre::Result<Config> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("read config {:?}: {}", path, e))?;
    let cfg = load_toml(&text).map_err(|e| eyre::eyre!("parse config {:?}: {}", path, e))?;
    cfg.logger.validate()?;
    Ok(cfg)
}

impl LoggerConfig {
    pub fn validate(&self) -> eyre::Result<()> {
        if self.path.as_os_str().is_empty() {
            eyre::bail!("logger.path must not be empty");
        }
        if let Some(name) = &self.filename {
            if name.trim().is_empty() {
                eyre::bail!("logger.filename must not be empty");
            }
            if name.contains('/') || name.contains(std::path::MAIN_SEPARATOR) {
                eyre::bail!("logger.filename must be a bare file name, got {name:?}");
            }
        }
        if self.level.trim().is_empty() {
            eyre::bail!("logger.level must not be empty");
        }
        // A newline in the tag would split every line it is written to.
        if let Some(t) = &self.log_type {
            if t.contains('\n') || t.contains('\r') {
                eyre::bail!("logger.type must be a single line");
            }
        }
        Ok(())
    }
}
