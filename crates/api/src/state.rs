use std::sync::Arc;

use crate::auth::provider::IdentityProvider;
use crate::cache::ListingCache;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: acme_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Cached invoices listing, invalidated after every successful write.
    pub listing_cache: Arc<ListingCache>,
    /// Identity provider the sign-in action forwards credentials to.
    pub identity: Arc<dyn IdentityProvider>,
}
