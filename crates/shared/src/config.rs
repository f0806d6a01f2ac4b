//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Business-level defaults.
    #[serde(default)]
    pub business: BusinessConfig,
}

/// Business-level defaults applied when a stored profile omits a field.
#[derive(Debug, Clone, Deserialize)]
pub struct BusinessConfig {
    /// Fallback home state for place-of-supply comparison.
    #[serde(default)]
    pub home_state: Option<String>,
    /// ISO 4217 currency code reports are denominated in.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "INR".to_string()
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            home_state: None,
            currency: default_currency(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("LEKHA").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
