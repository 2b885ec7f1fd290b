//! Scene record.

use atlas_core::rows::SceneRow;
use atlas_core::source::DataSourceError;
use atlas_core::types::DbId;
use sqlx::FromRow;

use super::{non_blank, required};

/// A row from the `scenes` table.
#[derive(Debug, Clone, FromRow)]
pub struct SceneRecord {
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

impl SceneRecord {
    pub fn into_row(self) -> Result<SceneRow, DataSourceError> {
        Ok(SceneRow {
            id: self.id,
            zone_id: self.zone_id,
            slug: required("scenes", self.id, "slug", self.slug)?,
            title: self.title,
            summary: non_blank(self.summary),
            image_path: non_blank(self.image_path),
            position_left: self.position_left,
            position_top: self.position_top,
            affectation_type_id: self.affectation_type_id,
            decoration_image_path: non_blank(self.decoration_image_path),
            decoration_position_left: self.decoration_position_left,
            decoration_position_top: self.decoration_position_top,
            decoration_width_vw: self.decoration_width_vw,
            decoration_tooltip: non_blank(self.decoration_tooltip),
        })
    }
}
