//! Theme switcher configuration.
//!
//! Every field has a default matching the stock page markup, so hosts only
//! pass the fields they override. The stored tokens are not configurable:
//! they are the persisted wire format.

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_DARK_CLASS, DEFAULT_STORAGE_KEY, DEFAULT_TOGGLE_ID};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid theme config json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("theme config field {field} must not be empty")]
    Empty { field: &'static str },
    #[error("theme config field {field} must not contain whitespace: {value:?}")]
    Whitespace { field: &'static str, value: String },
}

/// Element that carries the dark marker class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerHost {
    /// `document.body`
    #[default]
    Body,
    /// `document.documentElement` (`<html>`)
    Root,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub toggle_id: String,
    pub dark_class: String,
    pub marker_host: MarkerHost,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            toggle_id: DEFAULT_TOGGLE_ID.to_owned(),
            dark_class: DEFAULT_DARK_CLASS.to_owned(),
            marker_host: MarkerHost::default(),
        }
    }
}

impl ThemeConfig {
    /// Parse a JSON object of overrides and validate the result.
    ///
    /// Accepted keys: `storage_key`, `toggle_id`, `dark_class`,
    /// `marker_host` (`"body"` or `"root"`). Missing keys keep their default.
    ///
    /// # Errors
    ///
    /// Returns `Parse` for malformed JSON or unknown keys, and the
    /// `validate` errors for unusable values.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every name is usable as a storage key, element id, or
    /// class token.
    ///
    /// # Errors
    ///
    /// Returns `Empty` for blank fields and `Whitespace` for ids or classes
    /// containing whitespace.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty("storage_key", &self.storage_key)?;
        require_token("toggle_id", &self.toggle_id)?;
        require_token("dark_class", &self.dark_class)?;
        Ok(())
    }
}

fn require_non_empty(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Empty { field });
    }
    Ok(())
}

fn require_token(field: &'static str, value: &str) -> Result<(), ConfigError> {
    require_non_empty(field, value)?;
    if value.chars().any(char::is_whitespace) {
        return Err(ConfigError::Whitespace { field, value: value.to_owned() });
    }
    Ok(())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
