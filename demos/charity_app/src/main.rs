// demos/charity_app/src/main.rs

// Declare modules for the application
mod config;
mod errors;
mod walkthrough;

use crate::config::DemoConfig;
use crate::errors::AppError;
use anyhow::Context;
use charity_connect::App;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing

#[tokio::main]
async fn main() {
  // Initialize tracing subscriber for logging
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO) // Default level
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE) // Log when spans close, showing duration
    .init();

  tracing::info!("Starting Charity Connect demo...");

  if let Err(e) = run().await {
    tracing::error!(error = %format!("{:#}", e), "Demo failed.");
    std::process::exit(AppError::from(e).exit_code());
  }
}

async fn run() -> anyhow::Result<()> {
  let config = DemoConfig::from_env().context("loading configuration")?;
  let mut app = App::start(config.app.clone());

  let donation_id = walkthrough::donor_submits(&mut app)
    .await
    .context("donor walkthrough")?;
  let report = walkthrough::admin_reviews(&mut app, &donation_id)
    .await
    .context("admin walkthrough")?;
  walkthrough::print_report(&report, config.output_json)?;

  app.stop();
  Ok(())
}
