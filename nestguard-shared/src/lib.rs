pub mod command;
pub mod config;
pub mod device;
pub mod oauth;
pub mod telemetry;
pub mod units;
