use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use forecast_api::ApiConfig;
use forecast_api_harness::{SmokeSuite, SmokeTarget};
use tracing_subscriber::EnvFilter;

/// Run the weather forecast smoke tests
#[derive(Debug, Parser)]
#[command(name = "forecast-smoke", version)]
struct Args {
    /// Test a deployed instance instead of an in-process one
    #[arg(long, env = "FORECAST_SMOKE_BASE_URL")]
    base_url: Option<String>,

    /// Configuration file for the in-process application
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let target = match args.base_url {
        Some(base_url) => SmokeTarget::Remote(base_url),
        None => SmokeTarget::InProcess(ApiConfig::load(args.config.as_deref())?),
    };

    let report = SmokeSuite::new(target).run().await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }

    Ok(if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
