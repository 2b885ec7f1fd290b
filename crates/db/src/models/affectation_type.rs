//! Affectation type record.

use atlas_core::affectation::AffectationSlug;
use atlas_core::rows::AffectationTypeRow;
use atlas_core::source::DataSourceError;
use atlas_core::types::DbId;
use sqlx::FromRow;

use super::non_blank;

/// A row from the `affectation_types` table.
#[derive(Debug, Clone, FromRow)]
pub struct AffectationTypeRecord {
    pub id: DbId,
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub icon_path: Option<String>,
}

impl AffectationTypeRecord {
    /// Convert to the typed row. A slug outside the three known categories
    /// is an invalid row.
    pub fn into_row(self) -> Result<AffectationTypeRow, DataSourceError> {
        let slug = self
            .slug
            .parse::<AffectationSlug>()
            .map_err(|e| DataSourceError::InvalidRow {
                table: "affectation_types",
                id: self.id,
                reason: e.to_string(),
            })?;

        Ok(AffectationTypeRow {
            id: self.id,
            slug,
            name: self.name,
            description: non_blank(self.description),
            icon_path: non_blank(self.icon_path),
        })
    }
}
