//! Palisade DNS policy node CLI.

mod bootstrap;
mod commands;

use clap::{Parser, Subcommand};
use std::net::IpAddr;

#[derive(Parser)]
#[command(name = "palisade-dns")]
#[command(version)]
#[command(about = "DNS policy node: safe-search enforcement and remote list retrieval")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Override the configured log level
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run one question through the policy chain
    Check {
        /// Domain name to look up
        name: String,

        /// Query type (A, AAAA, CNAME, HTTPS, PTR, ...)
        #[arg(default_value = "A")]
        record_type: String,

        /// Client identifier recorded on the request
        #[arg(long)]
        client_id: Option<String>,

        /// Client address recorded on the request
        #[arg(long)]
        client_ip: Option<IpAddr>,
    },

    /// Download every configured list source
    Refresh,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::config::load_config(cli.config.as_deref())?;
    bootstrap::logging::init_logging(&config, cli.log_level.as_deref());
    bootstrap::config::log_summary(&config, cli.config.as_deref());

    match cli.command {
        Command::Check {
            name,
            record_type,
            client_id,
            client_ip,
        } => commands::check::run(&config, &name, &record_type, client_id, client_ip).await,
        Command::Refresh => commands::refresh::run(&config).await,
    }
}
