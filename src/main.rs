//! Latency probe runner
//!
//! Probes each configured inference endpoint once and prints a report.

use anyhow::Result;
use clap::Parser;
use tracing::info;

use inference_probe::{
    logging::init_tracing,
    probe::{run_probes, targets_from_config},
    report, Config,
};

#[derive(Debug, Parser)]
#[command(name = "latency-probe", version, about = "Measure completion latency of hosted inference APIs")]
struct Cli {
    /// Prompt sent to every endpoint (overrides PROBE_PROMPT)
    #[arg(long)]
    prompt: Option<String>,

    /// Emit one JSON object per probe instead of the text report
    #[arg(long)]
    json: bool,

    /// Probe endpoints concurrently instead of one after another
    #[arg(long, env = "PROBE_PARALLEL")]
    parallel: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    init_tracing("inference_probe=warn");

    let mut config = Config::from_env()?;
    if let Some(prompt) = cli.prompt {
        config.prompt = prompt;
    }
    info!("Configuration loaded successfully");

    // Per-request timeouts are set by each transport
    let client = reqwest::Client::builder().build()?;
    let targets = targets_from_config(&config, client);

    let outcomes = run_probes(&targets, cli.parallel).await;

    if cli.json {
        print!("{}", report::render_json_lines(&outcomes)?);
    } else {
        print!("{}", report::render_report(&outcomes));
    }

    Ok(())
}
