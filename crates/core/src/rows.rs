//! Typed row schemas for the flat atlas tables.
//!
//! These are the validated shapes the assembler works on. The database
//! crate converts its raw `FromRow` records into these types, and the
//! static editorial content in [`crate::content`] is authored directly in
//! them, so both data paths feed the assembler the same input types.

use serde::{Deserialize, Serialize};

use crate::affectation::AffectationSlug;
use crate::types::DbId;

/// Overview copy shown on the atlas landing view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroRow {
    pub title: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub image_path: Option<String>,
}

/// A row from the `case_studies` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseStudyRow {
    pub id: DbId,
    pub slug: String,
    pub title: String,
    pub summary: Option<String>,
    pub image_path: Option<String>,
    pub detail_image_path: Option<String>,
    pub position_left: f64,
    pub position_top: f64,
    pub color: Option<String>,
    /// Stored as an integer flag; any non-zero value means published.
    pub is_published: i32,
}

/// A row from the `zones` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneRow {
    pub id: DbId,
    pub case_study_id: DbId,
    pub slug: String,
    pub title: String,
    pub image_path: Option<String>,
    pub position_left: f64,
    pub position_top: f64,
}

/// A row from the `scenes` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneRow {
    pub id: DbId,
    pub zone_id: DbId,
    pub slug: String,
    pub title: String,
    pub summary: Option<String>,
    pub image_path: Option<String>,
    pub position_left: f64,
    pub position_top: f64,
    pub affectation_type_id: Option<DbId>,
    // -- Decoration overlay --
    pub decoration_image_path: Option<String>,
    pub decoration_position_left: Option<f64>,
    pub decoration_position_top: Option<f64>,
    pub decoration_width_vw: Option<f64>,
    pub decoration_tooltip: Option<String>,
}

/// A row from the `elements` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementRow {
    pub id: DbId,
    pub scene_id: DbId,
    pub slug: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub source: Option<String>,
    pub image_path: Option<String>,
    pub detail_image_path: Option<String>,
    pub position_left: f64,
    pub position_top: f64,
    pub affectation_type_id: Option<DbId>,
}

/// A row from the `affectation_types` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffectationTypeRow {
    pub id: DbId,
    pub slug: AffectationSlug,
    pub name: String,
    pub description: Option<String>,
    pub icon_path: Option<String>,
}

/// A row from the `tags` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagRow {
    pub id: DbId,
    pub name: String,
}

/// A row from the `element_tags` junction table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementTagRow {
    pub element_id: DbId,
    pub tag_id: DbId,
}

/// Every flat row set the assembler needs, in store read order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AtlasRows {
    /// Newest overview row, if the overview table has any.
    pub hero: Option<HeroRow>,
    pub case_studies: Vec<CaseStudyRow>,
    pub zones: Vec<ZoneRow>,
    pub scenes: Vec<SceneRow>,
    pub elements: Vec<ElementRow>,
    pub affectation_types: Vec<AffectationTypeRow>,
    pub tags: Vec<TagRow>,
    pub element_tags: Vec<ElementTagRow>,
}
