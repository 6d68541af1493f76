//! One enforcement pass: token, device list, then per-device policy.
//!
//! Anything that fails before the device loop is returned to the caller.
//! Inside the loop a failed command only marks that device's report.

use nestguard_shared::{config::GuardConfig, device::Device, telemetry::Severity};
use reqwest::Client;
use tracing::{info, warn};

use crate::{
    auth::refresh_access_token,
    error::{GuardError, Result},
    policy::{Correction, NameFilter, PolicyBounds, evaluate},
    server::{list_devices, set_cool_setpoint},
    telemetry::Telemetry,
    util::{
        format::{format_failed, format_updated},
        http::get_client,
    },
};

#[derive(Debug, Clone, Default)]
pub struct EnforceOptions {
    pub filter: NameFilter,
    pub bounds: PolicyBounds,
    /// Colour the outcome markers.
    pub ansi: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Applied(Correction),
    Failed { correction: Correction, error: String },
}

#[derive(Debug, Clone)]
pub struct DeviceReport {
    pub custom_name: String,
    pub status_line: String,
    pub outcomes: Vec<Outcome>,
}

impl DeviceReport {
    pub fn failed(&self) -> bool {
        self.outcomes
            .iter()
            .any(|o| matches!(o, Outcome::Failed { .. }))
    }
}

/// Runs the pass and returns one report per evaluated device, in API order.
pub async fn run(config: &GuardConfig, options: &EnforceOptions) -> Result<Vec<DeviceReport>> {
    let client = get_client()?;

    let token = refresh_access_token(&client, config).await?;
    let devices = list_devices(&client, config, &token).await?;
    info!("Fetched {} devices", devices.len());

    let telemetry = Telemetry::new(client.clone(), config);
    let mut reports = Vec::new();
    for device in devices
        .iter()
        .filter(|d| options.filter.matches(d.custom_name()))
    {
        let report = enforce_device(&client, config, &token, &telemetry, device, options).await;
        reports.push(report);
    }

    let failures = reports.iter().filter(|r| r.failed()).count();
    info!(
        "Evaluated {} devices, {} with failed updates",
        reports.len(),
        failures
    );
    Ok(reports)
}

async fn enforce_device(
    client: &Client,
    config: &GuardConfig,
    token: &str,
    telemetry: &Telemetry,
    device: &Device,
    options: &EnforceOptions,
) -> DeviceReport {
    let custom_name = device.custom_name();
    let evaluation = evaluate(device, &options.bounds);
    println!("{}", evaluation.status_line);

    let mode = device.mode().map(|m| m.to_string()).unwrap_or_default();
    telemetry
        .emit(
            &evaluation.status_line,
            Severity::Info,
            &[("thermostat", custom_name), ("mode", mode.as_str()), ("action", "status")],
        )
        .await;

    let mut outcomes = Vec::with_capacity(evaluation.corrections.len());
    for correction in evaluation.corrections {
        let bound = correction.bound.to_string();
        match set_cool_setpoint(
            client,
            config,
            token,
            &device.name,
            correction.target_celsius,
        )
        .await
        {
            Ok(()) => {
                let line = format_updated(custom_name, correction.target_fahrenheit(), options.ansi);
                println!("{}", line);
                telemetry
                    .emit(
                        &format_updated(custom_name, correction.target_fahrenheit(), false),
                        Severity::Info,
                        &[("thermostat", custom_name), ("action", "update"), ("bound", bound.as_str())],
                    )
                    .await;
                outcomes.push(Outcome::Applied(correction));
            }
            Err(e) => {
                warn!("Setpoint command for {} failed: {}", device.name, e);
                let reason = match &e {
                    GuardError::Command { status, body, .. } => format!("{status} {body}"),
                    other => other.to_string(),
                };
                println!("{}", format_failed(custom_name, &reason, options.ansi));
                telemetry
                    .emit(
                        &format_failed(custom_name, &reason, false),
                        Severity::Error,
                        &[("thermostat", custom_name), ("action", "update"), ("bound", bound.as_str())],
                    )
                    .await;
                outcomes.push(Outcome::Failed {
                    correction,
                    error: reason,
                });
            }
        }
    }

    DeviceReport {
        custom_name: custom_name.to_string(),
        status_line: evaluation.status_line,
        outcomes,
    }
}
