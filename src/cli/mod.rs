// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod menu;
pub mod handlers;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Print results as JSON (for scripting)
    #[arg(long)]
    pub json: bool,

    /// Command to execute (interactive menu when omitted)
    #[command(subcommand)]
    pub command: Option<CliCommand>,

    /// API server port (defaults to WEB_PORT, then 5000)
    #[arg(long)]
    pub api_port: Option<u16>,

    /// Run the HTTP API only (no CLI)
    #[arg(long)]
    pub api_only: bool,
}
