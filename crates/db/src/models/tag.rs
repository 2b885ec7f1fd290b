//! Tag and element-tag records.

use atlas_core::rows::{ElementTagRow, TagRow};
use atlas_core::source::DataSourceError;
use atlas_core::types::DbId;
use sqlx::FromRow;

use super::required;

/// A row from the `tags` table.
#[derive(Debug, Clone, FromRow)]
pub struct TagRecord {
    pub id: DbId,
    pub name: String,
}

impl TagRecord {
    pub fn into_row(self) -> Result<TagRow, DataSourceError> {
        Ok(TagRow {
            id: self.id,
            name: required("tags", self.id, "name", self.name)?,
        })
    }
}

/// A row from the `element_tags` junction table.
#[derive(Debug, Clone, Copy, FromRow)]
pub struct ElementTagRecord {
    pub element_id: DbId,
    pub tag_id: DbId,
}

impl From<ElementTagRecord> for ElementTagRow {
    fn from(record: ElementTagRecord) -> Self {
        Self {
            element_id: record.element_id,
            tag_id: record.tag_id,
        }
    }
}
