//! Case study record.

use atlas_core::rows::CaseStudyRow;
use atlas_core::source::DataSourceError;
use atlas_core::types::DbId;
use sqlx::FromRow;

use super::{non_blank, required};

/// A row from the `case_studies` table.
#[derive(Debug, Clone, FromRow)]
pub struct CaseStudyRecord {
    pub id: DbId,
    pub slug: String,
    pub title: String,
    pub summary: Option<String>,
    pub image_path: Option<String>,
    pub detail_image_path: Option<String>,
    pub position_left: f64,
    pub position_top: f64,
    pub color: Option<String>,
    pub is_published: i32,
}

impl CaseStudyRecord {
    pub fn into_row(self) -> Result<CaseStudyRow, DataSourceError> {
        Ok(CaseStudyRow {
            id: self.id,
            slug: required("case_studies", self.id, "slug", self.slug)?,
            title: self.title,
            summary: non_blank(self.summary),
            image_path: non_blank(self.image_path),
            detail_image_path: non_blank(self.detail_image_path),
            position_left: self.position_left,
            position_top: self.position_top,
            color: non_blank(self.color),
            is_published: self.is_published,
        })
    }
}
