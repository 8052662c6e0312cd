//! frond-api server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), opens an
//! in-process SQLite store, and serves the plant API over HTTP.
//!
//! # User provisioning
//!
//! There is no sign-up endpoint. To provision a user and mint their bearer
//! token:
//!
//! ```
//! cargo run -p frond-api --bin server -- --create-user alice@example.com
//! ```

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use anyhow::Context as _;
use clap::Parser;
use frond_api::{ServerConfig, auth};
use frond_core::{store::PlantStore as _, user::NewUser};
use frond_store_sqlite::SqliteStore;
use rand_core::{OsRng, RngCore as _};
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Frond plant registry server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Provision a user with this email, print a fresh bearer token, and exit.
  #[arg(long, value_name = "EMAIL")]
  create_user: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("FROND"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  // Expand `~` in store path.
  let store_path = expand_tilde(&server_cfg.store_path);

  // Open SQLite store.
  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;

  // Helper mode: provision a user, print the token, and exit. The token is
  // shown exactly once; only its digest is stored.
  if let Some(email) = cli.create_user {
    let token = mint_token();
    let user = store
      .add_user(NewUser {
        email,
        token_digest: auth::token_digest(&token),
      })
      .await
      .context("failed to create user")?;
    println!("user:  {}", user.user_id);
    println!("token: {token}");
    return Ok(());
  }

  let app = frond_api::router(Arc::new(store));
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}

/// Generate an opaque bearer token: 32 bytes from the OS RNG, hex-encoded.
fn mint_token() -> String {
  let mut bytes = [0u8; 32];
  OsRng.fill_bytes(&mut bytes);
  hex::encode(bytes)
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
