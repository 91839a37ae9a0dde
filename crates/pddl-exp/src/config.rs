//! Standardization configuration.

use crate::error::{ExpError, Result};
use serde::{Deserialize, Serialize};

/// Controls how fresh variable names are generated during standardization
///
/// A fresh name is `{original}{separator}{n}` where `n` counts up from
/// `first_index` within one standardization context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StandardizeConfig {
    pub separator: String,
    pub first_index: usize,
}

impl Default for StandardizeConfig {
    fn default() -> Self {
        StandardizeConfig {
            separator: "_".to_string(),
            first_index: 0,
        }
    }
}

impl StandardizeConfig {
    /// Load a configuration from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: StandardizeConfig = serde_json::from_str(json)
            .map_err(|e| ExpError::InvalidArgument(format!("standardize config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// The separator must be non-empty and digit-free, so the index is the
    /// trailing digit run of every fresh name. Otherwise `x` + `11` and
    /// `x1` + `1` would both give `x11`.
    pub fn validate(&self) -> Result<()> {
        if self.separator.is_empty() {
            return Err(ExpError::InvalidArgument(
                "standardize config: separator must not be empty".to_string(),
            ));
        }
        if self.separator.chars().any(|c| c.is_ascii_digit()) {
            return Err(ExpError::InvalidArgument(format!(
                "standardize config: separator {:?} must not contain digits",
                self.separator
            )));
        }
        Ok(())
    }

    pub(crate) fn fresh_name(&self, original: &str, index: usize) -> String {
        format!("{}{}{}", original, self.separator, index)
    }
}
