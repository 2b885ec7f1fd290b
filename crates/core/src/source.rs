//! The row source seam and its failure taxonomy.
//!
//! [`AtlasSource`] is implemented by the database crate over a connection
//! pool and by in-process doubles in tests. Every way the live path can
//! fail collapses into [`DataSourceError`], which callers recover from by
//! serving the static snapshot.

use std::time::Duration;

use async_trait::async_trait;

use crate::assembly::assemble;
use crate::atlas::AtlasDocument;
use crate::rows::AtlasRows;
use crate::types::DbId;

/// Name of the response header that carries the [`DataProvenance`].
pub const PROVENANCE_HEADER: &str = "x-atlas-data-source";

/// A store that can produce every flat atlas row set in one call.
#[async_trait]
pub trait AtlasSource: Send + Sync {
    /// Read all atlas tables. Implementations issue the reads concurrently
    /// and return only when every read has completed.
    async fn fetch_rows(&self) -> Result<AtlasRows, DataSourceError>;

    /// Cheap reachability probe for health reporting.
    async fn ping(&self) -> Result<(), DataSourceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DataSourceError {
    /// No store handle is configured.
    #[error("Data source unavailable: no store configured")]
    Unavailable,

    /// The store rejected or failed a read.
    #[error("Data source query failed: {0}")]
    Query(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The store did not answer within the fetch deadline.
    #[error("Data source timed out after {0:?}")]
    TimedOut(Duration),

    /// A row could not be converted to its typed schema.
    #[error("Invalid {table} row {id}: {reason}")]
    InvalidRow {
        table: &'static str,
        id: DbId,
        reason: String,
    },
}

/// Which path produced a served document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataProvenance {
    /// Assembled from live store rows.
    Primary,
    /// The static snapshot, served because the live path failed.
    Fallback,
}

impl DataProvenance {
    /// Header value for [`PROVENANCE_HEADER`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Fallback => "fallback",
        }
    }
}

impl std::fmt::Display for DataProvenance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fetch rows from `source` and assemble them.
///
/// A missing source fails with [`DataSourceError::Unavailable`] without
/// touching any store.
pub async fn load_document(
    source: Option<&dyn AtlasSource>,
) -> Result<AtlasDocument, DataSourceError> {
    let source = source.ok_or(DataSourceError::Unavailable)?;
    let rows = source.fetch_rows().await?;
    Ok(assemble(&rows))
}
