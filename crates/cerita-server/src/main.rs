//! cerita server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), opens the
//! SQLite journal, checks that it answers, and serves the JSON API over HTTP.
//!
//! # Suggesting a pairing code
//!
//! ```
//! cargo run -p cerita-server --bin cerita -- --suggest-code
//! ```

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use cerita_core::{code::suggest_code, store::JournalStore as _};
use cerita_server::{ServerConfig, expand_tilde};
use cerita_store_sqlite::SqliteStore;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "CeritaKita journal server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Print a random pairing code and exit.
  #[arg(long)]
  suggest_code: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  if cli.suggest_code {
    println!("{}", suggest_code(&mut rand::rng()));
    return Ok(());
  }

  let server_cfg = ServerConfig::load(&cli.config)
    .with_context(|| format!("failed to load config from {:?}", cli.config))?;

  let store_path = expand_tilde(&server_cfg.store_path);
  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;

  // Refuse to start against a store that does not answer.
  let info = store.ping().await.context("store did not answer ping")?;
  tracing::info!(backend = info.backend, version = %info.version, "store ready");

  let app = cerita_server::app(Arc::new(store));
  let address = server_cfg.address();

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("server error")?;

  Ok(())
}

async fn shutdown_signal() {
  if tokio::signal::ctrl_c().await.is_ok() {
    tracing::info!("shutting down");
  }
}
