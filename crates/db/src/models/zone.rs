//! Zone record.

use atlas_core::rows::ZoneRow;
use atlas_core::source::DataSourceError;
use atlas_core::types::DbId;
use sqlx::FromRow;

use super::{non_blank, required};

/// A row from the `zones` table.
#[derive(Debug, Clone, FromRow)]
pub struct ZoneRecord {
    pub id: DbId,
    pub case_study_id: DbId,
    pub slug: String,
    pub title: String,
    pub image_path: Option<String>,
    pub position_left: f64,
    pub position_top: f64,
}

impl ZoneRecord {
    pub fn into_row(self) -> Result<ZoneRow, DataSourceError> {
        Ok(ZoneRow {
            id: self.id,
            case_study_id: self.case_study_id,
            slug: required("zones", self.id, "slug", self.slug)?,
            title: self.title,
            image_path: non_blank(self.image_path),
            position_left: self.position_left,
            position_top: self.position_top,
        })
    }
}
