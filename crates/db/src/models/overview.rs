//! Overview (hero) record.

use atlas_core::rows::HeroRow;
use atlas_core::source::DataSourceError;
use atlas_core::types::{DbId, Timestamp};
use sqlx::FromRow;

use super::{non_blank, required};

/// A row from the `overview` table.
#[derive(Debug, Clone, FromRow)]
pub struct OverviewRecord {
    pub id: DbId,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub image_path: Option<String>,
    pub created_at: Timestamp,
}

impl OverviewRecord {
    pub fn into_row(self) -> Result<HeroRow, DataSourceError> {
        Ok(HeroRow {
            title: required("overview", self.id, "title", self.title)?,
            subtitle: non_blank(self.subtitle),
            description: non_blank(self.description),
            image_path: non_blank(self.image_path),
        })
    }
}
