//! Coordinator configuration.
//!
//! Every field has a default, so a config document only needs to name the
//! values it overrides.
//!
//! # Example
//!
//! ```rust
//! use waypoint::config::CoordinatorConfig;
//! use std::time::Duration;
//!
//! let config = CoordinatorConfig::from_json(r#"{ "splash_delay_ms": 250 }"#).unwrap();
//! assert_eq!(config.splash_delay(), Duration::from_millis(250));
//! assert!(config.prefill.email.is_empty());
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Default wait before the splash screen checks for a signed-in user.
pub const DEFAULT_SPLASH_DELAY_MS: u64 = 800;

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid coordinator config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Initial values for form fields when their screen is pushed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormPrefill {
    pub email: String,
    pub password: String,
    pub firstname: String,
    pub lastname: String,
    /// Used by both the PIN entry and PIN confirmation screens.
    pub pin: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoordinatorConfig {
    pub splash_delay_ms: u64,
    pub prefill: FormPrefill,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            splash_delay_ms: DEFAULT_SPLASH_DELAY_MS,
            prefill: FormPrefill::default(),
        }
    }
}

impl CoordinatorConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Defaults with every form pre-filled, for demos.
    pub fn demo() -> Self {
        Self {
            prefill: FormPrefill {
                email: "jane.doe@cool.me".to_string(),
                password: "secretstuff".to_string(),
                firstname: "Jane".to_string(),
                lastname: "Doe".to_string(),
                pin: "1234".to_string(),
            },
            ..Self::default()
        }
    }

    pub fn splash_delay(&self) -> Duration {
        Duration::from_millis(self.splash_delay_ms)
    }

    pub fn with_splash_delay(mut self, delay: Duration) -> Self {
        self.splash_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }
}
