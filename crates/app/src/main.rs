//! Deltafeed - incremental calendar export job
//!
//! Main entry point for one sync run.

use deltafeed_lib::{telemetry, AppContext};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging FIRST so we can see .env loading
    telemetry::init_tracing("info");

    // Load environment variables from .env file
    match dotenvy::dotenv() {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(e) => warn!(error = %e, "could not load .env file"),
    }

    let config = deltafeed_infra::config::load()?;
    let ctx = AppContext::new(config)?;

    let report = ctx.driver.run().await;
    info!(
        run_id = %report.run_id,
        status = ?report.status,
        rows = report.rows_exported,
        requests = report.requests,
        elapsed_ms = report.elapsed_ms,
        "sync run report"
    );

    // Machine-readable status first, fixed completion text last. Downstream
    // tooling keys on the text line, so it stays even for failed walks.
    println!("{}", serde_json::to_string(&report)?);
    println!("{}", report.completion_text());

    Ok(())
}
