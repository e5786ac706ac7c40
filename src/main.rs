use anyhow::{Context, Result};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, Level};

use wrp_rating::api::{create_api_router, ScoreApiState};
use wrp_rating::config::WrpConfig;
use wrp_rating::rating::{build_sample_wallets, RatingReport, WalletRatingEngine, WalletSnapshot};

#[tokio::main]
async fn main() -> Result<()> {
    let config = WrpConfig::from_env().map_err(|e| {
        eprintln!("Configuration error: {e}");
        e
    })?;

    init_logging(&config)?;

    let engine = Arc::new(
        config
            .engine
            .build_engine()
            .context("Failed to build rating engine")?,
    );

    match std::env::args().nth(1).as_deref() {
        Some("serve") => serve(engine, &config).await,
        Some("demo") | None => {
            run_demo(&engine);
            Ok(())
        }
        Some(other) => Err(anyhow::anyhow!(
            "Unknown command '{other}' (expected 'serve' or 'demo')"
        )),
    }
}

fn init_logging(config: &WrpConfig) -> Result<()> {
    let log_level = match config.logging.level.to_lowercase().as_str() {
        "error" => Level::ERROR,
        "warn" => Level::WARN,
        "info" => Level::INFO,
        "debug" => Level::DEBUG,
        "trace" => Level::TRACE,
        _ => Level::INFO,
    };

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(log_level)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set logging subscriber: {e}"))?;

    Ok(())
}

/// Start the HTTP API server on the configured host/port
async fn serve(engine: Arc<WalletRatingEngine>, config: &WrpConfig) -> Result<()> {
    info!("Starting Wallet Recognition Protocol Layer 1 server");
    info!(
        "Engine configured with metrics: {:?}",
        engine.metric_names()
    );

    let app = create_api_router(ScoreApiState { engine }).layer(TraceLayer::new_for_http());

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {bind_addr}"))?;

    info!("Serving Wallet Recognition API on http://{bind_addr} (POST /score, GET /health)");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Score the fixed sample wallets and print a formatted breakdown
fn run_demo(engine: &WalletRatingEngine) {
    println!("Wallet Recognition Protocol — Layer 1 Ratings (demo)");
    println!("{}", "=".repeat(60));
    for wallet in build_sample_wallets() {
        let report = engine.score_wallet(&wallet);
        println!("{}", render_report(&wallet, &report));
        println!("{}", "-".repeat(60));
    }
}

fn render_report(wallet: &WalletSnapshot, report: &RatingReport) -> String {
    let mut lines = vec![
        format!("Wallet {} ({})", wallet.address, wallet.chain),
        "  Metrics:".to_string(),
    ];
    for (name, value) in &report.metric_scores {
        lines.push(format!("    - {name}: {value:.2}"));
    }
    lines.push(format!("  Raw Score: {:.2}", report.raw_score));
    lines.push(format!("  Grade: {}", report.grade));
    lines.join("\n")
}
