use std::io::IsTerminal;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use crate::config;
use crate::enforce::{self, EnforceOptions};
use crate::policy::{NameFilter, PolicyBounds};
use crate::util::logging::init_tracing;

#[derive(Parser, Debug)]
#[command(name = "nestguard")]
#[command(version, about = "Keep Nest thermostat cooling setpoints inside a Fahrenheit band", long_about = None)]
struct Cli {
    /// Path to the JSON credentials file
    #[arg(long)]
    config: PathBuf,

    /// Comma-separated thermostat names to evaluate (default: all)
    #[arg(long)]
    thermostats: Option<String>,

    /// Minimum cooling setpoint in Fahrenheit
    #[arg(long, allow_negative_numbers = true)]
    enforce_min: Option<f64>,

    /// Maximum cooling setpoint in Fahrenheit
    #[arg(long, allow_negative_numbers = true)]
    enforce_max: Option<f64>,
}

impl Cli {
    fn options(&self) -> crate::error::Result<EnforceOptions> {
        let filter = match &self.thermostats {
            Some(list) => NameFilter::parse(list),
            None => NameFilter::all(),
        };
        Ok(EnforceOptions {
            filter,
            bounds: PolicyBounds::new(self.enforce_min, self.enforce_max)?,
            ansi: std::io::stdout().is_terminal(),
        })
    }
}

pub async fn cli() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let options = cli.options()?;
    let config = config::load(&cli.config)?;

    if options.bounds.is_empty() {
        info!("No bounds given, reporting only");
    }
    enforce::run(&config, &options).await?;

    Ok(())
}
