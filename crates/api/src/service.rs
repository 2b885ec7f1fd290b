//! Atlas loading with static fallback.
//!
//! [`AtlasService`] owns the optional row source. Every load either
//! assembles live rows or, on any failure, hands back the static snapshot.
//! There is no retry and no error path out of [`AtlasService::load`].
//! A store that does not answer within the fetch timeout counts as failed.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use atlas_core::atlas::AtlasDocument;
use atlas_core::content::fallback_document;
use atlas_core::source::{load_document, AtlasSource, DataProvenance, DataSourceError};

/// A loaded document and the path that produced it.
#[derive(Debug, Clone)]
pub struct AtlasLoad {
    pub document: AtlasDocument,
    pub provenance: DataProvenance,
}

/// Reachability of the configured row store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreHealth {
    NotConfigured,
    Reachable,
    Unreachable,
}

/// Default deadline for one store round trip.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct AtlasService {
    source: Option<Arc<dyn AtlasSource>>,
    fetch_timeout: Duration,
}

impl AtlasService {
    pub fn new(source: Option<Arc<dyn AtlasSource>>) -> Self {
        Self {
            source,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }

    /// Replace the store deadline. Must stay below the HTTP request
    /// timeout, or a stalled store surfaces as 408 instead of the snapshot.
    pub fn with_fetch_timeout(mut self, fetch_timeout: Duration) -> Self {
        self.fetch_timeout = fetch_timeout;
        self
    }

    /// A service with no store; every load is served from the snapshot.
    pub fn static_only() -> Self {
        Self::new(None)
    }

    pub fn has_source(&self) -> bool {
        self.source.is_some()
    }

    /// Load the atlas document, falling back to the static snapshot.
    pub async fn load(&self) -> AtlasLoad {
        match self.within_deadline(load_document(self.source.as_deref())).await {
            Ok(document) => AtlasLoad {
                document,
                provenance: DataProvenance::Primary,
            },
            Err(err) => {
                match &err {
                    DataSourceError::Unavailable => {
                        tracing::debug!("No row store configured, serving static atlas content");
                    }
                    _ => {
                        tracing::warn!(error = %err, "Atlas row store failed, serving static atlas content");
                    }
                }
                AtlasLoad {
                    document: fallback_document().clone(),
                    provenance: DataProvenance::Fallback,
                }
            }
        }
    }

    /// Probe the row store without loading any rows.
    pub async fn store_health(&self) -> StoreHealth {
        let Some(source) = &self.source else {
            return StoreHealth::NotConfigured;
        };
        match self.within_deadline(source.ping()).await {
            Ok(()) => StoreHealth::Reachable,
            Err(err) => {
                tracing::warn!(error = %err, "Atlas row store health probe failed");
                StoreHealth::Unreachable
            }
        }
    }

    async fn within_deadline<T>(
        &self,
        call: impl Future<Output = Result<T, DataSourceError>>,
    ) -> Result<T, DataSourceError> {
        tokio::time::timeout(self.fetch_timeout, call)
            .await
            .unwrap_or(Err(DataSourceError::TimedOut(self.fetch_timeout)))
    }
}
