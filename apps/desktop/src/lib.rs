//! # Royal Fragrances Desktop Library
//!
//! Application state and the command surface the presentation layer calls.
//!
//! ## Module Organization
//! ```text
//! fragrance_desktop_lib/
//! ├── lib.rs          ◄─── You are here (startup helpers)
//! ├── state/
//! │   ├── mod.rs      ◄─── AppState: load, persist, snapshot
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── product.rs  ◄─── Add, list, restock, delete
//! │   ├── cart.rs     ◄─── Cart manipulation
//! │   ├── sale.rs     ◄─── Checkout and history
//! │   └── dashboard.rs◄─── Inventory summary, low-stock alerts
//! ├── notice.rs       ◄─── Transient success/error messages
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Single AppState
//! The catalog, cart and ledger change together on checkout and on delete
//! (which purges cart lines), so one owner holds all three:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  AppState                                                               │
//! │  ┌───────────┐ ┌───────────┐ ┌───────────┐ ┌───────────┐ ┌──────────┐ │
//! │  │ Catalog   │ │ Cart      │ │ Ledger    │ │ store     │ │ config   │ │
//! │  │ products  │ │ lines     │ │ records   │ │ dyn Snap- │ │ Config-  │ │
//! │  │           │ │ (memory)  │ │           │ │ shotStore │ │ State    │ │
//! │  └───────────┘ └───────────┘ └───────────┘ └───────────┘ └──────────┘ │
//! │                                                                         │
//! │  Commands take &mut AppState. Single-threaded, no locks.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod notice;
pub mod state;

use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use error::ApiError;
use fragrance_store::{JsonFileStore, StoreError, StoreResult};
use state::{AppState, ConfigState};

/// Starts the application with a file-backed store.
///
/// ## Startup Sequence
/// ```text
/// 1. Read ConfigState from the environment
/// 2. Resolve the data directory (ROYAL_DATA_PATH or the platform dir)
/// 3. Load the snapshot, seeding the default catalog if there is none
/// ```
///
/// Fails with `STORAGE_ERROR` only when no data directory can be found.
pub fn open() -> Result<AppState, ApiError> {
    open_with(ConfigState::from_env())
}

/// [`open`] with an explicit configuration.
pub fn open_with(config: ConfigState) -> Result<AppState, ApiError> {
    let data_dir = resolve_data_dir(&config)?;
    info!(?data_dir, store = %config.store_name, "Opening Royal Fragrances POS");

    Ok(AppState::load(JsonFileStore::new(data_dir), config))
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=fragrance_store=trace` - Show trace for one crate only
/// - Default: INFO, DEBUG for the fragrance crates
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,fragrance=debug"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Directory the snapshot file lives in.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/com.royal.fragrances/`
/// - **Windows**: `%APPDATA%\royal\fragrances\data\`
/// - **Linux**: `~/.local/share/fragrances/`
///
/// `ConfigState::data_dir` (from `ROYAL_DATA_PATH`) wins when set.
pub fn resolve_data_dir(config: &ConfigState) -> StoreResult<PathBuf> {
    if let Some(dir) = &config.data_dir {
        return Ok(dir.clone());
    }

    let proj_dirs =
        ProjectDirs::from("com", "royal", "fragrances").ok_or(StoreError::NoDataDirectory)?;

    Ok(proj_dirs.data_dir().to_path_buf())
}
