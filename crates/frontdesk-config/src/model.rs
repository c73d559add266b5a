use serde::{Deserialize, Serialize};

use frontdesk_domain::SessionContext;

use crate::ConfigError;

/// Stores front-desk connection settings and display preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "Config::default_api_endpoint")]
    pub api_endpoint: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
    /// Identity of the acting user; decides which summary is shown and
    /// which hotel transactions are recorded for.
    #[serde(default)]
    pub session: SessionContext,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_endpoint: Self::default_api_endpoint(),
            auth_token: None,
            ui_color_enabled: Self::default_ui_color_enabled(),
            session: SessionContext::default(),
        }
    }
}

impl Config {
    pub fn default_api_endpoint() -> String {
        "http://localhost:4000/graphql".into()
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    /// Checks the settings needed before talking to the API.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let endpoint = self.api_endpoint.trim();
        if endpoint.is_empty() {
            return Err(ConfigError::Invalid("api_endpoint must not be empty".into()));
        }
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "api_endpoint `{endpoint}` must be an http(s) URL"
            )));
        }
        Ok(())
    }
}
