use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "https://smartdevicemanagement.googleapis.com/v1";
pub const DEFAULT_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
pub const DEFAULT_DATADOG_URL: &str = "https://http-intake.logs.datadoghq.com/v1/input";
pub const DEFAULT_DATADOG_SERVICE: &str = "nestguard";

/// Credentials file handed to the CLI with `--config`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GuardConfig {
    pub project_id: String,
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
    #[serde(default)]
    pub datadog_api_key: Option<String>,

    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_token_url")]
    pub token_url: String,
    #[serde(default = "default_datadog_url")]
    pub datadog_url: String,
    #[serde(default = "default_datadog_service")]
    pub datadog_service: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_token_url() -> String {
    DEFAULT_TOKEN_URL.to_string()
}

fn default_datadog_url() -> String {
    DEFAULT_DATADOG_URL.to_string()
}

fn default_datadog_service() -> String {
    DEFAULT_DATADOG_SERVICE.to_string()
}

impl GuardConfig {
    /// Project path segment used by the device listing, always `enterprises/<id>`.
    pub fn enterprise_path(&self) -> String {
        let id = self.project_id.trim().trim_matches('/');
        if id.starts_with("enterprises/") {
            id.to_string()
        } else {
            format!("enterprises/{id}")
        }
    }

    /// Datadog key, treating an empty string as unset.
    pub fn datadog_api_key(&self) -> Option<&str> {
        self.datadog_api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }
}
