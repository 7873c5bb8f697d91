use clap::Parser;
use std::path::Path;

mod api;
mod cli;
mod core;
mod generators;
mod logging;
mod models;
mod strength;

use crate::cli::{Args, CliCommand};
use crate::cli::handlers::render_report;
use crate::core::config::Config;
use crate::generators::PasswordGenerator;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let config = Config::load();

    logging::init(&config)?;
    config.report_warnings();
    log::debug!("Command line args: {:?}", args.command);
    log::debug!("Loaded config: {:?}", config);

    // API-only mode (blocks until shutdown)
    if args.api_only {
        let port = args.api_port.unwrap_or(config.web_port);
        log::info!("🔒 API-only mode active. CLI interface disabled.");
        api::start_server(config, port).await.map_err(|e| {
            log::error!("API server failed: {}", e);
            e
        })?;
        return Ok(());
    }

    // JSON mode
    if args.json {
        api::handlers::handle_json_api(args.command.as_ref(), &config)
            .map_err(|e| anyhow::anyhow!("JSON mode failed: {}", e))?;
        return Ok(());
    }

    match args.command {
        Some(CliCommand::Generate { length, check }) => {
            let length = length.map(usize::from).unwrap_or(config.default_password_length);
            let password = PasswordGenerator::new().generate(length)?;
            println!("{}", password);
            if check {
                println!("{}", render_report(&password));
            }
        }
        Some(CliCommand::Check { password }) => {
            println!("{}", render_report(&password));
        }
        Some(CliCommand::Tips { password }) => {
            let tips = strength::tips(&password);
            println!("{}", cli::handlers::render_tips(&tips));
        }
        None => {
            cli::menu::run_cli_menu(config.default_password_length)
                .map_err(|e| anyhow::anyhow!("CLI menu error: {}", e))?;
        }
    }

    Ok(())
}
