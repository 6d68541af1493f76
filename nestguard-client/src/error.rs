use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong during an enforcement pass.
///
/// `Config`, `Authentication`, `Api` and `Transport` abort the run when they
/// happen before the device loop. `Command` is reported per device and the
/// loop moves on. `Telemetry` is only ever logged.
#[derive(Debug, Error)]
pub enum GuardError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("failed to refresh access token: {status} {body}")]
    Authentication { status: StatusCode, body: String },

    #[error("failed to fetch devices: {status} {body}")]
    Api { status: StatusCode, body: String },

    #[error("failed to update {device}: {status} {body}")]
    Command {
        device: String,
        status: StatusCode,
        body: String,
    },

    #[error("telemetry intake replied: {status} {body}")]
    Telemetry { status: StatusCode, body: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

pub type Result<T, E = GuardError> = std::result::Result<T, E>;
