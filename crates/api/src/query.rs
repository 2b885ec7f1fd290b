//! Shared query parameter types for API handlers.

use atlas_core::publication::PublicationFilter;
use serde::Deserialize;

/// Query parameters for endpoints that can include unpublished case studies
/// (`?include_unpublished=true|false`).
#[derive(Debug, Default, Deserialize)]
pub struct IncludeUnpublishedParams {
    pub include_unpublished: Option<bool>,
}

impl IncludeUnpublishedParams {
    /// The filter requested by the caller, or `default` when the parameter
    /// is absent.
    pub fn filter_or(&self, default: PublicationFilter) -> PublicationFilter {
        self.include_unpublished
            .map(PublicationFilter::from_include_unpublished)
            .unwrap_or(default)
    }
}
