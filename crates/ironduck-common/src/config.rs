//! Database configuration

use serde::{Deserialize, Serialize};

use crate::types::DECIMAL_MAX_WIDTH;
use crate::{Error, Result};

/// Settings applied when a database is opened.
///
/// Every field has a default, so a partial JSON document is accepted:
///
/// ```rust
/// use ironduck_common::Config;
///
/// let config = Config::from_json(r#"{ "default_decimal_scale": 2 }"#).unwrap();
/// assert_eq!(config.default_decimal_width, 18);
/// assert_eq!(config.default_decimal_scale, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Schema used for unqualified table names
    pub default_schema: String,
    /// Width given to a bare `DECIMAL` column
    pub default_decimal_width: u8,
    /// Scale given to a bare `DECIMAL` column
    pub default_decimal_scale: u8,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_schema: "main".to_string(),
            default_decimal_width: 18,
            default_decimal_scale: 3,
        }
    }
}

impl Config {
    /// Parse and validate a JSON configuration document
    pub fn from_json(json: &str) -> Result<Config> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_default_schema(mut self, schema: impl Into<String>) -> Self {
        self.default_schema = schema.into();
        self
    }

    pub fn with_default_decimal(mut self, width: u8, scale: u8) -> Self {
        self.default_decimal_width = width;
        self.default_decimal_scale = scale;
        self
    }

    /// Check the settings against engine limits
    pub fn validate(&self) -> Result<()> {
        if self.default_schema.is_empty() {
            return Err(Error::InvalidConfig(
                "default_schema must not be empty".to_string(),
            ));
        }
        let (width, scale) = (self.default_decimal_width, self.default_decimal_scale);
        if width == 0 || width > DECIMAL_MAX_WIDTH || scale > width {
            return Err(Error::InvalidConfig(format!(
                "invalid default decimal DECIMAL({},{})",
                width, scale
            )));
        }
        Ok(())
    }
}
