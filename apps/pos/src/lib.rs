//! # Tally POS Application Shell
//!
//! Wires the pure engines and the store adapter into a running app.
//!
//! ## Module Organization
//! ```text
//! tally_pos/
//! ├── lib.rs          ◄─── You are here (startup & wiring)
//! ├── state/
//! │   ├── config.rs   ◄─── Read-only configuration
//! │   └── session.rs  ◄─── Catalog cache, cart, register, stage
//! ├── commands/       ◄─── The verbs a host UI invokes
//! ├── presentation.rs ◄─── Host-side effects behind a trait
//! └── error.rs        ◄─── Command error type
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  1. Initialize logging (tracing, RUST_LOG overridable)       │
//! │  2. Resolve database path (TALLY_DB_PATH or platform dir)    │
//! │  3. Open store (SQLite WAL, run migrations)                  │
//! │  4. First run? seed sample data or start blank               │
//! │  5. Load the catalog into the session                        │
//! └──────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod presentation;
pub mod state;

use std::path::PathBuf;

use directories::ProjectDirs;
use tracing::info;
use tracing_subscriber::EnvFilter;

use presentation::ConsolePresentation;
use state::{AppContext, ConfigState};
use tally_store::{Store, StoreConfig};

/// Starts the application and returns the ready-to-use context.
///
/// ## Environment
/// - `TALLY_DB_PATH`: database file path override
/// - `TALLY_SAMPLE_DATA=1`: answer the first-run question with the
///   bundled sample catalog instead of starting blank
pub async fn run() -> Result<AppContext, Box<dyn std::error::Error>> {
    init_tracing();
    info!("Starting Tally POS");

    let db_path = database_path()?;
    info!(?db_path, "Database path determined");

    let store = Store::new(StoreConfig::new(db_path)).await?;
    info!("Store opened and migrations applied");

    let config = ConfigState::from_env();
    let mut ctx = AppContext::new(store, config, Box::new(ConsolePresentation));

    if commands::bootstrap::is_first_run(&ctx).await? {
        let seed = std::env::var("TALLY_SAMPLE_DATA").map(|v| v == "1").unwrap_or(false);
        if seed {
            commands::bootstrap::start_with_sample_data(&mut ctx).await?;
        } else {
            commands::bootstrap::start_blank(&mut ctx).await?;
        }
    }

    let count = commands::catalog::load_products(&mut ctx).await?;
    info!(products = count, "Ready");

    Ok(ctx)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=tally=trace` - Show trace for tally crates only
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tally=debug,sqlx=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Determines the database file path based on the platform.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/com.tally.pos/tally.db`
/// - **Windows**: `%APPDATA%\tally\pos\tally.db`
/// - **Linux**: `~/.local/share/tally-pos/tally.db`
///
/// ## Development Override
/// Set `TALLY_DB_PATH` environment variable to use a custom path.
fn database_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Ok(path) = std::env::var("TALLY_DB_PATH") {
        return Ok(PathBuf::from(path));
    }

    let proj_dirs =
        ProjectDirs::from("com", "tally", "pos").ok_or("Could not determine app data directory")?;

    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)?;

    Ok(data_dir.join("tally.db"))
}
