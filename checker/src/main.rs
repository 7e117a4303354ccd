//! Checker binary entry point

use std::path::PathBuf;
use clap::Parser;

use checker::{CheckerResult, ServiceManager};
use shared::logging::{init_tracing, DEFAULT_LOG_LEVEL};
use shared::ServiceConfig;

#[derive(Parser)]
#[command(name = "checker")]
#[command(about = "Check connectivity to Elasticsearch, Qdrant, Ollama and optionally Twilio")]
struct Args {
    /// Load configuration from this env file instead of searching for .env
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// Ollama base URL (defaults to OLLAMA_URL or http://localhost:11434)
    #[arg(long)]
    ollama_url: Option<String>,

    /// Also check the Twilio account credentials
    #[arg(long)]
    check_twilio: bool,

    /// Log level for diagnostics written to stderr
    #[arg(long, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,
}

#[tokio::main]
async fn main() -> CheckerResult<()> {
    let args = Args::parse();
    init_tracing(Some(&args.log_level));

    let mut config = ServiceConfig::from_env(args.env_file.as_deref())?;
    if let Some(url) = args.ollama_url.as_deref() {
        config = config.with_ollama_url(url)?;
    }

    let manager = ServiceManager::new(&config)?;

    println!("\nTesting service connections...");
    let reports = manager.run_all(args.check_twilio).await;

    println!("\nSummary:");
    for report in &reports {
        println!("  {}", report.summary_line());
    }

    Ok(())
}
