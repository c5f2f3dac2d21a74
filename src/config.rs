use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::shape_box::ShapeBox;

pub const CAPACITY_ENV: &str = "SHAPEBOX_CAPACITY";
pub const LOG_ENV: &str = "SHAPEBOX_LOG";

/// Settings for the demo binary, read from TOML:
///
/// ```toml
/// capacity = 3
/// log_filter = "shapebox=debug"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BoxConfig {
    pub capacity: isize,
    pub log_filter: String,
}

impl Default for BoxConfig {
    fn default() -> Self {
        Self {
            capacity: 3,
            log_filter: "info".to_string(),
        }
    }
}

impl BoxConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|err| ConfigError::io(path, err))?;
        Self::from_toml_str(&content)
    }

    /// Applies `SHAPEBOX_CAPACITY` and `SHAPEBOX_LOG` from the process
    /// environment.
    pub fn apply_env(self) -> Result<Self, ConfigError> {
        self.apply_overrides(|var| std::env::var(var).ok())
    }

    pub fn apply_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(raw) = lookup(CAPACITY_ENV) {
            self.capacity = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::invalid_env(CAPACITY_ENV, raw.as_str()))?;
        }
        if let Some(filter) = lookup(LOG_ENV) {
            self.log_filter = filter;
        }
        Ok(self)
    }

    pub fn build_box(&self) -> ShapeBox {
        ShapeBox::new(self.capacity)
    }
}
