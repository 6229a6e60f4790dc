//! Logging setup for the `ninja` program
//!
//! Logs go to stderr so they never mix with help text on stdout.

use miette::{miette, Result};
use tracing_subscriber::EnvFilter;

use crate::cli::config::Config;

/// Install the global tracing subscriber
pub fn init(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_new(config.log_filter())
        .map_err(|e| miette!("invalid log filter {:?}: {}", config.log_filter(), e))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| miette!("failed to initialize tracing subscriber: {}", e))
}
