//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::ReaperConfig;
use crate::error::Result;
use crate::reaper::Reaper;
use crate::types::Params;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.build_config()?;
        debug!(
            "Using {}://{} with a {:?} gate",
            config.scheme(),
            config.hostname,
            config.rate
        );
        let reaper = Reaper::from_config(&config)?;

        match &self.cli.command {
            Commands::Reap { path, params } => {
                let harvest = reaper.reap(path, &to_params(params)).await?;
                debug!("Reaped {} items from {}", harvest.len(), path);
                self.output(&harvest)?;
            }
            Commands::Sow { path, params } => {
                reaper.sow(path, &to_params(params)).await?;
            }
            Commands::Submit { path, params } => {
                let submission = reaper.get_sow(path, &to_params(params)).await?;
                self.output(&submission)?;
            }
        }

        Ok(())
    }

    /// Load the config file, then apply command-line overrides
    pub fn build_config(&self) -> Result<ReaperConfig> {
        let mut config = match &self.cli.config {
            Some(path) => ReaperConfig::from_file(path)?,
            None => ReaperConfig::default(),
        };

        if let Some(hostname) = &self.cli.hostname {
            config.hostname.clone_from(hostname);
        }
        if let Some(suffix) = &self.cli.suffix {
            config.reap_suffix.clone_from(suffix);
        }
        if self.cli.insecure {
            config.tls = false;
        }
        if let Some(rate_ms) = self.cli.rate_ms {
            config.rate = Duration::from_millis(rate_ms);
        }
        if let Some(agent) = &self.cli.user_agent {
            config.user_agent.clone_from(agent);
        }

        config.validate()?;
        Ok(config)
    }

    /// Print a value in the selected format
    fn output<T: Serialize>(&self, value: &T) -> Result<()> {
        println!("{}", self.render(value)?);
        Ok(())
    }

    fn render<T: Serialize>(&self, value: &T) -> Result<String> {
        let rendered = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        };
        Ok(rendered)
    }
}

fn to_params(pairs: &[(String, String)]) -> Params {
    pairs.iter().cloned().collect()
}
