use clap::Parser;
use mondesa_site::config::Command;
use mondesa_site::core::site::current_year;
use mondesa_site::utils::error::ErrorSeverity;
use mondesa_site::utils::logger;
use mondesa_site::{
    server, AppState, CliConfig, FormSubmitRelay, LocalStorage, Site, SiteConfig, SiteError,
    SiteExporter,
};
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting mondesa-site");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.load_site_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    if let Err(e) = run(cli.command(), config).await {
        tracing::error!(
            "❌ mondesa-site failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

async fn run(command: Command, config: SiteConfig) -> Result<(), SiteError> {
    let site = Site::new(config.site.clone())?;

    match command {
        Command::Serve { .. } => {
            let relay = FormSubmitRelay::from_config(&config)?;
            tracing::info!("Contact messages relay to {}", relay.endpoint());
            let state = AppState::new(site, Arc::new(relay));
            server::serve(state, &config.server.listen).await
        }
        Command::Export { output } => {
            let exporter = SiteExporter::new(&site, LocalStorage::new(output.clone()));
            let written = exporter.export(current_year()).await?;
            println!("✅ Exported {} pages", written.len());
            println!("📁 Output saved to: {}", output.display());
            Ok(())
        }
    }
}
