//! Gateway application state.
//!
//! This module defines the shared state that is available to all request handlers.

use std::sync::Arc;

use cafe_api_auth::AccessGuard;
use cafe_api_control::CafeDirectory;

use crate::config::GatewayConfig;

/// Shared application state for the gateway.
///
/// This struct holds references to all services needed by the HTTP handlers.
pub struct GatewayState<D, G>
where
    D: CafeDirectory,
    G: AccessGuard,
{
    /// The cafe directory backing every route.
    pub directory: Arc<D>,
    /// The guard for destructive routes.
    pub guard: Arc<G>,
    /// Gateway configuration.
    pub config: GatewayConfig,
}

impl<D, G> GatewayState<D, G>
where
    D: CafeDirectory,
    G: AccessGuard,
{
    /// Create a new gateway state.
    #[must_use]
    pub fn new(directory: Arc<D>, guard: Arc<G>, config: GatewayConfig) -> Self {
        Self {
            directory,
            guard,
            config,
        }
    }
}

impl<D, G> Clone for GatewayState<D, G>
where
    D: CafeDirectory,
    G: AccessGuard,
{
    fn clone(&self) -> Self {
        Self {
            directory: Arc::clone(&self.directory),
            guard: Arc::clone(&self.guard),
            config: self.config.clone(),
        }
    }
}
