//! TradeHub API Server
//!
//! Mock backend for the TradeHub B2B trading demo

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use miette::IntoDiagnostic;
use tradehub_server::{ServerConfig, start_server};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tradehub-server")]
#[command(about = "Mock API server for the TradeHub B2B trading demo", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the bind address (host:port)
    #[arg(long)]
    bind: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the API server (default)
    Serve,
    /// Print the effective configuration as TOML and exit
    PrintConfig,
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    // Load .env file if it exists
    let _ = dotenvy::dotenv();
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .rgb_colors(miette::RgbColors::Preferred)
                .with_cause_chain()
                .with_syntax_highlighting(miette::highlighters::SyntectHighlighter::default())
                .color(true)
                .context_lines(5)
                .tab_width(2)
                .break_words(true)
                .build(),
        )
    }))?;
    miette::set_panic_hook();

    let mut config = match &cli.config {
        Some(path) => ServerConfig::load(path).await?,
        None => ServerConfig::default(),
    }
    .with_env_overrides();
    if let Some(bind) = cli.bind {
        config.bind_address = bind;
    }

    if let Some(Commands::PrintConfig) = cli.command {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    // RUST_LOG wins over the configured filter
    let filter = if cli.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_timer(tracing_subscriber::fmt::time::LocalTime::rfc_3339())
        .pretty()
        .init();

    tracing::info!(bind = %config.bind_address, "starting TradeHub API server");
    start_server(config).await.into_diagnostic()?;

    Ok(())
}
