use anyhow::Context;
use clap::{Parser, Subcommand};
use forecast_core::{Config, Fetcher, pipeline, provider_from_config};
use inquire::{Confirm, Text};

use crate::report;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "forecast", version, about = "Concurrent multi-location forecast report")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch forecasts for all locations and print a report.
    Show {
        /// Location ids to fetch; defaults to the configured list.
        ids: Vec<String>,

        /// Override the configured API base URL.
        #[arg(long)]
        base_url: Option<String>,
    },

    /// Interactively edit the base URL and location list.
    Configure,

    /// Print where the config file lives.
    ConfigPath,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Show { ids, base_url } => {
                let mut cfg = Config::load()?;
                if let Some(url) = base_url {
                    cfg.set_base_url(&url)?;
                }
                let ids = if ids.is_empty() { cfg.locations.clone() } else { ids };
                show(&cfg, ids).await;
            }
            Command::Configure => configure()?,
            Command::ConfigPath => {
                println!("{}", Config::config_file_path()?.display());
            }
        }

        Ok(())
    }
}

async fn show(cfg: &Config, ids: Vec<String>) {
    let fetcher = Fetcher::new(provider_from_config(cfg));
    tracing::debug!(base_url = %cfg.base_url, count = ids.len(), "starting forecast report");

    print!("{}", report::header(ids.len()));

    let mut records = pipeline::forecast_stream(&fetcher, ids);
    while let Some(record) = records.recv().await {
        print!("{}", report::render_record(&record));
    }

    println!("{}", report::footer());
}

fn configure() -> anyhow::Result<()> {
    let mut cfg = Config::load()?;

    let base_url = Text::new("API base URL:")
        .with_default(&cfg.base_url)
        .prompt()
        .context("Failed to read base URL")?;
    cfg.set_base_url(&base_url)?;

    let current = cfg.locations.join(", ");
    let locations = Text::new("Location ids (comma separated):")
        .with_default(&current)
        .prompt()
        .context("Failed to read location ids")?;
    cfg.set_locations_from_str(&locations)?;

    let save = Confirm::new("Save configuration?")
        .with_default(true)
        .prompt()
        .context("Failed to read confirmation")?;

    if save {
        cfg.save()?;
        println!("Saved to {}", Config::config_file_path()?.display());
    } else {
        println!("Configuration not saved.");
    }

    Ok(())
}
