use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use housing_watch_core::{
    load_config, load_credentials, validate_config, HttpFetcher, JsonSnapshotStore,
    ListingParser, SmtpNotifier, Watcher,
};

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Set to `json` for machine-readable log lines
const LOG_FORMAT_VAR: &str = "HOUSING_WATCH_LOG_FORMAT";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load .env before anything reads the environment
    dotenvy::dotenv().ok();
    init_logging();

    if let Err(e) = run().await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    let registry = tracing_subscriber::registry().with(filter);

    match std::env::var(LOG_FORMAT_VAR) {
        Ok(format) if format.eq_ignore_ascii_case("json") => {
            registry.with(fmt_layer.json()).init()
        }
        _ => registry.with(fmt_layer).init(),
    }
}

async fn run() -> Result<()> {
    info!(version = VERSION, "housing-watch starting");

    // Load configuration
    let config = load_config().context("Failed to load configuration")?;

    // Validate configuration
    validate_config(&config).context("Configuration validation failed")?;

    // Credentials are checked before any network traffic
    let credentials = load_credentials()?;

    info!("Target: {}", config.target.url);
    info!("Snapshot path: {:?}", config.snapshot.path);
    info!(
        "SMTP: {}:{} ({:?})",
        config.smtp.host,
        config.smtp.effective_port(),
        config.smtp.security
    );

    let fetcher = HttpFetcher::new(&config.target).context("Failed to create fetcher")?;
    let parser = ListingParser::for_target(&config.parser, &config.target)
        .context("Failed to create listing parser")?;
    let notifier =
        SmtpNotifier::new(&config.smtp, credentials).context("Failed to create notifier")?;
    let store = JsonSnapshotStore::new(&config.snapshot.path);

    let watcher = Watcher::new(fetcher, parser, notifier, store);
    let report = watcher.run().await?;

    println!("{}", report);
    Ok(())
}
