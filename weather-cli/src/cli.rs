use clap::Parser;
use std::{
    io::{self, Write},
    path::PathBuf,
};
use waybar_weather_core::{Config, pipeline};

/// Top-level CLI struct. Every flag is optional; the bar invokes the
/// binary with none.
#[derive(Debug, Parser)]
#[command(
    name = "waybar-weather",
    version,
    about = "Print current weather as a Waybar custom-module JSON line"
)]
pub struct Cli {
    /// Read settings from this file instead of the platform config directory.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Skip writing the plain-text cache file.
    #[arg(long)]
    pub no_cache: bool,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let mut config = self.load_config();
        if self.no_cache {
            config.write_cache = false;
        }

        let outcome = pipeline::run(&config).await;

        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", outcome.record.to_json_line())?;
        stdout.flush()?;

        if let Some(path) = config.cache_file_path() {
            outcome.persist(&path);
        }

        Ok(())
    }

    /// A broken config file must not cost the bar its output.
    fn load_config(&self) -> Config {
        let loaded = match &self.config {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        };

        loaded.unwrap_or_else(|err| {
            let reason = format!("{err:#}");
            tracing::warn!(error = %reason, "using default configuration");
            Config::default()
        })
    }
}
