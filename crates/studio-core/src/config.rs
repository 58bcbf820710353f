//! Page Configuration
//!
//! Tunables for the creation form and the notification surface. Every field
//! has a serde default so a partial JSON document is enough.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{Result, StudioError};

/// Studio page configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudioConfig {
    /// Prompt is truncated to this many characters
    #[serde(default = "default_max_prompt_chars")]
    pub max_prompt_chars: usize,

    /// Minimum characters for a submittable description
    #[serde(default = "default_min_prompt_chars")]
    pub min_prompt_chars: usize,

    /// Counter turns to a warning above this length
    #[serde(default = "default_warn_prompt_chars")]
    pub warn_prompt_chars: usize,

    /// Duration (seconds) selected when the page loads
    #[serde(default = "default_duration_secs")]
    pub default_duration_secs: u32,

    /// Simulated generation time
    #[serde(default = "default_generation_delay_ms")]
    pub generation_delay_ms: u64,

    /// How long a toast stays on screen
    #[serde(default = "default_toast_ttl_ms")]
    pub toast_ttl_ms: u64,

    /// Maximum toasts visible at once
    #[serde(default = "default_max_toasts")]
    pub max_toasts: usize,
}

const fn default_max_prompt_chars() -> usize { 500 }
const fn default_min_prompt_chars() -> usize { 10 }
const fn default_warn_prompt_chars() -> usize { 450 }
const fn default_duration_secs() -> u32 { 30 }
const fn default_generation_delay_ms() -> u64 { 3000 }
const fn default_toast_ttl_ms() -> u64 { 4000 }
const fn default_max_toasts() -> usize { 3 }

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            max_prompt_chars: default_max_prompt_chars(),
            min_prompt_chars: default_min_prompt_chars(),
            warn_prompt_chars: default_warn_prompt_chars(),
            default_duration_secs: default_duration_secs(),
            generation_delay_ms: default_generation_delay_ms(),
            toast_ttl_ms: default_toast_ttl_ms(),
            max_toasts: default_max_toasts(),
        }
    }
}

impl StudioConfig {
    /// Parse and validate a JSON config document
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the limits are consistent with each other
    pub fn validate(&self) -> Result<()> {
        if self.min_prompt_chars == 0 {
            return Err(StudioError::Config("min_prompt_chars must be at least 1".into()));
        }
        if self.min_prompt_chars > self.max_prompt_chars {
            return Err(StudioError::Config(format!(
                "min_prompt_chars ({}) exceeds max_prompt_chars ({})",
                self.min_prompt_chars, self.max_prompt_chars
            )));
        }
        if self.warn_prompt_chars > self.max_prompt_chars {
            return Err(StudioError::Config(format!(
                "warn_prompt_chars ({}) exceeds max_prompt_chars ({})",
                self.warn_prompt_chars, self.max_prompt_chars
            )));
        }
        if self.max_toasts == 0 {
            return Err(StudioError::Config("max_toasts must be at least 1".into()));
        }
        Ok(())
    }

    pub const fn generation_delay(&self) -> Duration {
        Duration::from_millis(self.generation_delay_ms)
    }

    pub const fn toast_ttl(&self) -> Duration {
        Duration::from_millis(self.toast_ttl_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = StudioConfig::default();
        assert_eq!(config.max_prompt_chars, 500);
        assert_eq!(config.min_prompt_chars, 10);
        assert_eq!(config.default_duration_secs, 30);
        assert_eq!(config.generation_delay(), Duration::from_secs(3));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = StudioConfig::from_json(r#"{"generation_delay_ms": 500}"#).unwrap();
        assert_eq!(config.generation_delay_ms, 500);
        assert_eq!(config.max_prompt_chars, 500);
        assert_eq!(config.max_toasts, 3);
    }

    #[test]
    fn test_inconsistent_limits_rejected() {
        let err = StudioConfig::from_json(r#"{"min_prompt_chars": 600}"#).unwrap_err();
        assert!(matches!(err, StudioError::Config(_)));

        let err = StudioConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, StudioError::Json(_)));
    }
}
