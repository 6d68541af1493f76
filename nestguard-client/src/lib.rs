// === Core modules ===
pub mod auth;
pub mod config;
pub mod enforce;
pub mod error;
pub mod policy;
pub mod server;
pub mod telemetry;
pub mod util;

#[cfg(test)]
pub(crate) mod test_support;

// === CLI entrypoint ===
pub mod cli;

/// Entrypoint used by `main.rs` and tests to run the full CLI.
pub async fn run_cli() -> anyhow::Result<()> {
    cli::cli().await
}
