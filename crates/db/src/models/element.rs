//! Element record.

use atlas_core::rows::ElementRow;
use atlas_core::source::DataSourceError;
use atlas_core::types::DbId;
use sqlx::FromRow;

use super::{non_blank, required};

/// A row from the `elements` table.
#[derive(Debug, Clone, FromRow)]
pub struct ElementRecord {
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

impl ElementRecord {
    pub fn into_row(self) -> Result<ElementRow, DataSourceError> {
        Ok(ElementRow {
            id: self.id,
            scene_id: self.scene_id,
            slug: required("elements", self.id, "slug", self.slug)?,
            title: self.title,
            subtitle: non_blank(self.subtitle),
            description: non_blank(self.description),
            source: non_blank(self.source),
            image_path: non_blank(self.image_path),
            detail_image_path: non_blank(self.detail_image_path),
            position_left: self.position_left,
            position_top: self.position_top,
            affectation_type_id: self.affectation_type_id,
        })
    }
}
