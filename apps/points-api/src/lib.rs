//! # points-api: Receipt Points HTTP Service
//!
//! Accepts receipts over HTTP, scores them with `points-core` and keeps the
//! result in a `points-store` store until the process exits.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Receipt Points Server                            │
//! │                                                                         │
//! │  Client ──► axum Router ──► ReceiptService ──► MemoryStore             │
//! │             (routes.rs)     (services/)          (points-store)         │
//! │                                  │                                      │
//! │                                  ▼                                      │
//! │                            score_breakdown                              │
//! │                            (points-core)                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod routes;
pub mod services;

use std::sync::Arc;

use points_store::MemoryStore;

pub use config::{ApiConfig, ConfigError};
pub use error::{ApiError, ApiResult};
pub use routes::router;
pub use services::ReceiptService;

/// Shared application state.
pub struct AppState {
    pub service: ReceiptService<MemoryStore>,
    pub config: ApiConfig,
}

impl AppState {
    /// Creates state with a fresh, empty in-memory store.
    pub fn new(config: ApiConfig) -> Self {
        AppState {
            service: ReceiptService::new(Arc::new(MemoryStore::new())),
            config,
        }
    }
}
