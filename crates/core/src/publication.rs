//! Publication filtering of case studies.
//!
//! Filtering happens on the assembled document, never in the store
//! queries, so every endpoint applies the same rule to the same data.

use crate::atlas::{AtlasDocument, CaseStudy};

/// Which case studies an endpoint exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PublicationFilter {
    /// Every case study, published or not. The client decides visibility.
    #[default]
    All,
    /// Only case studies whose `is_published` flag is set.
    PublishedOnly,
}

impl PublicationFilter {
    /// Pick a filter from an `include_unpublished` flag.
    pub fn from_include_unpublished(include_unpublished: bool) -> Self {
        if include_unpublished {
            Self::All
        } else {
            Self::PublishedOnly
        }
    }

    pub fn admits(&self, case: &CaseStudy) -> bool {
        match self {
            Self::All => true,
            Self::PublishedOnly => case.is_published,
        }
    }

    /// Drop the case studies this filter does not admit, keeping order.
    pub fn apply(&self, mut document: AtlasDocument) -> AtlasDocument {
        document.case_of_studies.retain(|c| self.admits(c));
        document
    }
}
