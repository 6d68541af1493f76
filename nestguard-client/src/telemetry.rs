use nestguard_shared::{
    config::GuardConfig,
    telemetry::{LogRecord, Severity, format_tags},
};
use reqwest::Client;
use tracing::{debug, warn};

use crate::{
    error::{GuardError, Result},
    util::http::status_and_body,
};

const DD_SOURCE: &str = "nestguard";

/// Best-effort forwarder of event lines to the Datadog log intake.
pub struct Telemetry {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
    service: String,
    hostname: String,
}

impl Telemetry {
    pub fn new(client: Client, config: &GuardConfig) -> Self {
        Self {
            client,
            endpoint: config.datadog_url.clone(),
            api_key: config.datadog_api_key().map(str::to_string),
            service: config.datadog_service.clone(),
            hostname: sysinfo::System::host_name().unwrap_or_else(|| "unknown".to_string()),
        }
    }

    /// Never fails; problems are logged and dropped.
    pub async fn emit(&self, message: &str, level: Severity, tags: &[(&str, &str)]) {
        if let Err(e) = self.try_emit(message, level, tags).await {
            warn!("Telemetry not delivered: {}", e);
        }
    }

    async fn try_emit(&self, message: &str, level: Severity, tags: &[(&str, &str)]) -> Result<()> {
        let Some(api_key) = &self.api_key else {
            return Ok(());
        };

        let record = LogRecord {
            message: message.to_string(),
            ddsource: DD_SOURCE.to_string(),
            service: self.service.clone(),
            hostname: self.hostname.clone(),
            status: level,
            ddtags: format_tags(tags),
        };

        debug!("POST {}", self.endpoint);
        let res = self
            .client
            .post(&self.endpoint)
            .header("DD-API-KEY", api_key)
            .json(&record)
            .send()
            .await?;
        if !res.status().is_success() {
            let (status, body) = status_and_body(res).await;
            return Err(GuardError::Telemetry { status, body });
        }
        Ok(())
    }
}
