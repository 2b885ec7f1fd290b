//! Lookup indexes for resolving shared references during assembly.
//!
//! Built fresh from the fetched rows on every load. Lookups return
//! `Option` so an unresolved reference is an explicit branch at the call
//! site rather than a silent default.

use std::collections::HashMap;

use indexmap::IndexSet;

use crate::affectation::AffectationSlug;
use crate::rows::{AffectationTypeRow, ElementTagRow, TagRow};
use crate::types::DbId;

/// id -> row maps for affectation types and tags, plus the resolved tag
/// names of every element.
#[derive(Debug, Default)]
pub struct AtlasIndex<'a> {
    affectation_types: HashMap<DbId, &'a AffectationTypeRow>,
    tags: HashMap<DbId, &'a TagRow>,
    element_tags: HashMap<DbId, IndexSet<&'a str>>,
}

impl<'a> AtlasIndex<'a> {
    /// Build all three lookups.
    ///
    /// Element-tag links whose `tag_id` does not resolve are skipped. A tag
    /// linked more than once to the same element is kept once, at the
    /// position of its first link.
    pub fn build(
        affectation_types: &'a [AffectationTypeRow],
        tags: &'a [TagRow],
        element_tags: &[ElementTagRow],
    ) -> Self {
        let affectation_types: HashMap<DbId, &AffectationTypeRow> =
            affectation_types.iter().map(|t| (t.id, t)).collect();
        let tags: HashMap<DbId, &TagRow> = tags.iter().map(|t| (t.id, t)).collect();

        let mut by_element: HashMap<DbId, IndexSet<&'a str>> = HashMap::new();
        for link in element_tags {
            let Some(tag) = tags.get(&link.tag_id).copied() else {
                continue;
            };
            by_element
                .entry(link.element_id)
                .or_default()
                .insert(tag.name.as_str());
        }

        Self {
            affectation_types,
            tags,
            element_tags: by_element,
        }
    }

    /// The affectation type with the given id, if it exists.
    pub fn affectation_type(&self, id: DbId) -> Option<&'a AffectationTypeRow> {
        self.affectation_types.get(&id).copied()
    }

    /// Resolve an optional affectation type reference to its slug.
    pub fn affectation_slug(&self, id: Option<DbId>) -> Option<AffectationSlug> {
        id.and_then(|id| self.affectation_type(id)).map(|t| t.slug)
    }

    /// The tag with the given id, if it exists.
    pub fn tag(&self, id: DbId) -> Option<&'a TagRow> {
        self.tags.get(&id).copied()
    }

    /// Tag names linked to an element, in link order. Empty when none.
    pub fn element_tag_names(&self, element_id: DbId) -> Vec<String> {
        self.element_tags
            .get(&element_id)
            .map(|names| names.iter().map(|n| (*n).to_string()).collect())
            .unwrap_or_default()
    }
}
