//! Sheets RAG server binary
//!
//! Run with: cargo run -p sheets-rag --bin sheets-rag-server -- --config sheets-rag.toml

use clap::Parser;
use sheets_rag::{config::AppConfig, server::SheetsRagServer};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "sheets-rag-server")]
#[command(about = "Keyword-retrieval knowledge base with Google Sheets ingestion")]
#[command(version)]
struct Args {
    /// TOML configuration file; defaults apply when omitted
    #[arg(long)]
    config: Option<PathBuf>,
    /// Override the listen host
    #[arg(long)]
    host: Option<String>,
    /// Override the listen port
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sheets_rag=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    };
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    tracing::info!("Configuration loaded");
    tracing::info!("  - Refresh interval: {}s", config.sheets.refresh_interval_secs);
    tracing::info!("  - Sheet document rows: {}", config.sheets.document_rows);
    tracing::info!("  - Max answer sources: {}", config.retrieval.max_results);

    let server = SheetsRagServer::new(config)?;

    println!("\nServer starting...");
    println!("  API: http://{}", server.address());
    println!("  Health: http://{}/health", server.address());
    println!("  API Info: http://{}/api/info", server.address());
    println!("\nPress Ctrl+C to stop\n");

    server.start().await?;

    Ok(())
}
