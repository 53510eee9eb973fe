//! # FoodFleet Storefront Library
//!
//! Session state and command driver for the FoodFleet storefront. The web
//! front-end talks to it one JSON line at a time over stdin/stdout.
//!
//! ## Module Organization
//! ```text
//! foodfleet_storefront/
//! ├── lib.rs          ◄─── You are here (Session, stdio driver, run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── config.rs   ◄─── Configuration state
//! │   ├── listing.rs  ◄─── Home page query
//! │   ├── cart.rs     ◄─── Cart state and demo cart
//! │   └── profile.rs  ◄─── Profile book and demo profile
//! ├── commands/
//! │   ├── mod.rs      ◄─── Dispatch table
//! │   └── ...         ◄─── One file per page
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Wire Format
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stdin  (one request per line)                                          │
//! │    {"command": "apply_promo_code", "args": {"code": "SAVE10"}}          │
//! │                                                                         │
//! │  stdout (one response per line)                                         │
//! │    {"ok": {"lines": [...], "totals": {...}}}                            │
//! │    {"error": {"code": "INVALID_PROMO_CODE", "message": "..."}}          │
//! │                                                                         │
//! │  stderr                                                                 │
//! │    tracing output (RUST_LOG)                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod state;

use std::io::{self, BufRead, Write};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use foodfleet_catalog::{Catalog, StaticCatalog};
use foodfleet_core::CoreError;

use error::{ApiError, StartupError};
use state::{CartState, ConfigState, ListingState, ProfileState};

/// Written when a response cannot be encoded at all.
const ENCODE_FAILURE: &str =
    r#"{"error":{"code":"INTERNAL","message":"Failed to encode response"}}"#;

// =============================================================================
// Session
// =============================================================================

/// Everything one storefront user owns while the app is open.
///
/// Commands receive the session by reference; nothing is global.
pub struct Session {
    pub config: ConfigState,
    pub catalog: Box<dyn Catalog>,
    pub listing: ListingState,
    pub cart: CartState,
    pub profile: ProfileState,
}

impl Session {
    /// Creates a session over a catalog. With `demo_data` set, the cart and
    /// profile start with the demo contents.
    pub fn new(config: ConfigState, catalog: Box<dyn Catalog>) -> Result<Self, StartupError> {
        let (cart, profile) = if config.demo_data {
            (
                CartState::demo()?,
                ProfileState::demo().map_err(CoreError::from)?,
            )
        } else {
            (CartState::new(), ProfileState::guest())
        };

        info!(
            restaurants = catalog.restaurants().len(),
            demo_data = config.demo_data,
            "Session created"
        );

        Ok(Session {
            config,
            catalog,
            listing: ListingState::new(),
            cart,
            profile,
        })
    }

    /// Creates a session using the configured catalog file, or the built-in
    /// catalog when none is set.
    pub fn from_config(config: ConfigState) -> Result<Self, StartupError> {
        let catalog = match &config.catalog_path {
            Some(path) => StaticCatalog::from_path(path)?,
            None => StaticCatalog::fixture(),
        };
        Session::new(config, Box::new(catalog))
    }

    /// Runs one request line and returns the response line.
    pub fn handle_line(&mut self, line: &str) -> String {
        let response = match serde_json::from_str::<Request>(line) {
            Ok(request) => {
                debug!(command = %request.command, "Request received");
                match commands::dispatch(self, &request.command, request.args) {
                    Ok(value) => Response::Ok(value),
                    Err(e) => {
                        debug!(command = %request.command, error = %e, "Command failed");
                        Response::Error(e)
                    }
                }
            }
            Err(e) => {
                warn!(error = %e, "Malformed request");
                Response::Error(ApiError::from(e))
            }
        };

        serde_json::to_string(&response).unwrap_or_else(|_| ENCODE_FAILURE.to_string())
    }
}

// =============================================================================
// Wire Types
// =============================================================================

/// One request line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    pub command: String,
    #[serde(default)]
    pub args: Value,
}

/// One response line.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Response {
    Ok(Value),
    Error(ApiError),
}

/// Serves requests until the reader is exhausted. Blank lines are skipped.
pub fn serve<R: BufRead, W: Write>(session: &mut Session, reader: R, mut writer: W) -> io::Result<()> {
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let response = session.handle_line(&line);
        writeln!(writer, "{}", response)?;
        writer.flush()?;
    }
    Ok(())
}

// =============================================================================
// Entry Point
// =============================================================================

/// Runs the storefront over stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: INFO (debug for foodfleet crates), RUST_LOG overrides    │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • FOODFLEET_* environment variables over defaults                   │
/// │                                                                         │
/// │  3. Load Catalog ─────────────────────────────────────────────────────► │
/// │     • FOODFLEET_CATALOG_PATH if set, built-in catalog otherwise         │
/// │                                                                         │
/// │  4. Create Session ───────────────────────────────────────────────────► │
/// │     • Listing query at page 1, demo cart and profile if enabled         │
/// │                                                                         │
/// │  5. Serve ────────────────────────────────────────────────────────────► │
/// │     • One response per request line until stdin closes                  │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    info!("Starting FoodFleet storefront");

    let config = ConfigState::from_env().map_err(StartupError::from)?;
    info!(
        store = %config.store_name,
        page_size = config.page_size,
        catalog = ?config.catalog_path,
        "Configuration loaded"
    );

    let mut session = Session::from_config(config)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    serve(&mut session, stdin.lock(), stdout.lock())?;

    info!("Input closed, shutting down");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=foodfleet=trace` - Show trace for foodfleet crates only
/// - Default: INFO, DEBUG for foodfleet crates
///
/// Output goes to stderr; stdout carries responses only.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,foodfleet=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[cfg(test)]
pub(crate) fn test_session() -> Session {
    Session::new(ConfigState::default(), Box::new(StaticCatalog::fixture()))
        .expect("demo session")
}
