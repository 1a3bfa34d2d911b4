//! HTTP gateway for the cafe API.
//!
//! This crate provides the public-facing REST API over the cafe directory.
//! It handles:
//!
//! - Read endpoints returning cafe records as flat JSON objects
//! - Mutating endpoints answering with fixed response envelopes
//! - The shared-secret check on `/report-closed`
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Clients (HTTP)                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     cafe-api-gateway                         │
//! │  ┌─────────────┐ ┌─────────────┐ ┌─────────────────────┐   │
//! │  │   Router    │ │  Handlers   │ │  Wire / Envelopes   │   │
//! │  └─────────────┘ └─────────────┘ └─────────────────────┘   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                     ┌────────┴────────┐
//!                     ▼                 ▼
//!              ┌────────────┐    ┌────────────┐
//!              │  Cafe      │    │  Access    │
//!              │  Directory │    │  Guard     │
//!              └────────────┘    └────────────┘
//! ```
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use cafe_api_gateway::{GatewayConfig, GatewayState, create_router};
//! use cafe_api_control::CafeDirectoryService;
//! use cafe_api_auth::SharedSecretGuard;
//! use cafe_api_store::RocksStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Arc::new(RocksStore::open("/tmp/cafes.db")?);
//! let directory = Arc::new(CafeDirectoryService::new(store));
//! let guard = Arc::new(SharedSecretGuard::new("TopSecretAPIKey")?);
//!
//! let state = GatewayState::new(directory, guard, GatewayConfig::default());
//! let app = create_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod envelope;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod wire;

pub use config::GatewayConfig;
pub use envelope::Envelope;
pub use error::ApiError;
pub use routes::create_router;
pub use state::GatewayState;
