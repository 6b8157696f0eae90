//! In-process cache of the invoices listing view.
//!
//! The listing is served from memory until a mutation marks it stale;
//! the next read re-fetches from Postgres. This is deliberately a
//! whole-view cache with no per-entry eviction: every successful
//! create/update/delete invalidates the lot.

use tokio::sync::RwLock;

use acme_db::models::invoice::Invoice;
use acme_db::repositories::InvoiceRepo;
use acme_db::DbPool;

/// Cached copy of the invoices listing. `None` means stale.
#[derive(Default)]
pub struct ListingCache {
    entries: RwLock<Option<Vec<Invoice>>>,
}

impl ListingCache {
    /// A new cache starts stale: the first read loads from the database.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve the cached listing, loading it from the database if stale.
    pub async fn get_or_load(&self, pool: &DbPool) -> Result<Vec<Invoice>, sqlx::Error> {
        if let Some(cached) = self.entries.read().await.as_ref() {
            return Ok(cached.clone());
        }

        let mut guard = self.entries.write().await;
        // Another task may have refilled the cache while we waited.
        if let Some(cached) = guard.as_ref() {
            return Ok(cached.clone());
        }

        let fresh = InvoiceRepo::list(pool).await?;
        *guard = Some(fresh.clone());
        tracing::debug!(count = fresh.len(), "Invoice listing cache refilled");
        Ok(fresh)
    }

    /// Mark the listing stale so the next read re-fetches.
    pub async fn invalidate(&self) {
        *self.entries.write().await = None;
        tracing::debug!("Invoice listing cache invalidated");
    }

    /// Whether the next read will hit the database.
    pub async fn is_stale(&self) -> bool {
        self.entries.read().await.is_none()
    }
}
