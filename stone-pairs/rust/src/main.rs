use std::io;
use std::path::PathBuf;

use anyhow::{bail, Result};
use stone_pairs::config::Config;
use stone_pairs::harness;
use tracing::info;

mod telemetry;

fn main() -> Result<()> {
    allow_missing_env_file(dotenv::dotenv())?;
    let config = Config::from_env()?;
    telemetry::init(config.log_filter())?;

    info!(%config, "initialized config");

    let cases = harness::cases();
    let report = harness::run(&cases, config.variants());

    for check in report.checks() {
        println!("{check}");
    }

    let total = report.checks().len();
    let passed = report.passed();
    info!(total, passed, "self-check finished");

    if !report.is_success() {
        bail!("{} of {} checks failed", total - passed, total);
    }

    Ok(())
}

/// A `.env` file is optional, but one that exists must load cleanly.
fn allow_missing_env_file(loaded: dotenv::Result<PathBuf>) -> Result<()> {
    match loaded {
        Ok(_) => Ok(()),
        Err(dotenv::Error::Io(e)) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}
