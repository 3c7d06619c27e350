use crate::config::SiteConfig;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "mondesa-site")]
#[command(about = "Server-rendered MonDesa website")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Serve the site over HTTP (default)
    Serve {
        /// Override `server.listen`
        #[arg(long)]
        listen: Option<String>,
    },
    /// Render every page to static HTML files
    Export {
        #[arg(short, long, default_value = "./dist")]
        output: PathBuf,
    },
}

impl CliConfig {
    pub fn command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or(Command::Serve { listen: None })
    }

    /// File values (or defaults), then CLI overrides, then validation.
    pub fn load_site_config(&self) -> Result<SiteConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("Loading configuration from {}", path.display());
                SiteConfig::from_file(path)?
            }
            None => SiteConfig::default(),
        };

        match self.command() {
            Command::Serve {
                listen: Some(listen),
            } => {
                tracing::debug!("server.listen overridden to {}", listen);
                config.server.listen = listen;
            }
            Command::Export { output } => {
                validate_path("export.output", &output.to_string_lossy())?;
            }
            Command::Serve { listen: None } => {}
        }

        config.validate()?;
        Ok(config)
    }
}
