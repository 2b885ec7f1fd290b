//! Nested atlas document served to the web client.
//!
//! The document is built only by [`crate::assembly::assemble`], whichever
//! data path produced the rows. Optional fields serialize as `null` (never
//! skipped) and child collections are plain `Vec`s, so every key is present
//! at every level of the tree.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::affectation::AffectationSlug;
use crate::types::DbId;

/// Top-level response body of `GET /api/atlas-data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AtlasDocument {
    pub hero: Hero,
    #[serde(rename = "affectationTypes")]
    pub affectation_types: Vec<AffectationType>,
    pub tags: Vec<Tag>,
    #[serde(rename = "caseOfStudies")]
    pub case_of_studies: Vec<CaseStudy>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Hero {
    pub title: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub image_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AffectationType {
    #[ts(type = "number")]
    pub id: DbId,
    pub slug: AffectationSlug,
    pub name: String,
    pub description: Option<String>,
    pub icon_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Tag {
    #[ts(type = "number")]
    pub id: DbId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CaseStudy {
    #[ts(type = "number")]
    pub id: DbId,
    pub slug: String,
    pub title: String,
    pub summary: Option<String>,
    pub image_path: Option<String>,
    pub detail_image_path: Option<String>,
    pub position_left: f64,
    pub position_top: f64,
    pub color: Option<String>,
    pub is_published: bool,
    pub zones: Vec<Zone>,
}

/// Case study without its zone tree, for list views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CaseStudySummary {
    #[ts(type = "number")]
    pub id: DbId,
    pub slug: String,
    pub title: String,
    pub summary: Option<String>,
    pub image_path: Option<String>,
    pub position_left: f64,
    pub position_top: f64,
    pub color: Option<String>,
    pub is_published: bool,
    pub zone_count: usize,
}

impl From<&CaseStudy> for CaseStudySummary {
    fn from(case: &CaseStudy) -> Self {
        Self {
            id: case.id,
            slug: case.slug.clone(),
            title: case.title.clone(),
            summary: case.summary.clone(),
            image_path: case.image_path.clone(),
            position_left: case.position_left,
            position_top: case.position_top,
            color: case.color.clone(),
            is_published: case.is_published,
            zone_count: case.zones.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Zone {
    #[ts(type = "number")]
    pub id: DbId,
    pub slug: String,
    pub title: String,
    pub image_path: Option<String>,
    pub position_left: f64,
    pub position_top: f64,
    pub scenes: Vec<Scene>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Scene {
    #[ts(type = "number")]
    pub id: DbId,
    pub slug: String,
    pub title: String,
    pub summary: Option<String>,
    pub image_path: Option<String>,
    pub position_left: f64,
    pub position_top: f64,
    /// Resolved affectation slug; `null` when the type reference dangles.
    pub affectation_type_id: Option<AffectationSlug>,
    pub decoration_image_path: Option<String>,
    pub decoration_position_left: Option<f64>,
    pub decoration_position_top: Option<f64>,
    pub decoration_width_vw: Option<f64>,
    pub decoration_tooltip: Option<String>,
    pub elements: Vec<Element>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Element {
    #[ts(type = "number")]
    pub id: DbId,
    pub slug: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub source: Option<String>,
    pub image_path: Option<String>,
    pub detail_image_path: Option<String>,
    pub position_left: f64,
    pub position_top: f64,
    /// Resolved affectation slug; `null` when the type reference dangles.
    pub affectation_type_id: Option<AffectationSlug>,
    pub tags: Vec<String>,
}

impl AtlasDocument {
    /// Find a case study by slug.
    pub fn case_study(&self, slug: &str) -> Option<&CaseStudy> {
        self.case_of_studies.iter().find(|c| c.slug == slug)
    }
}
