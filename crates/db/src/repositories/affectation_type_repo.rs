//! Repository for the `affectation_types` table.

use sqlx::PgPool;

use crate::models::affectation_type::AffectationTypeRecord;

/// Column list for `affectation_types` queries.
const COLUMNS: &str = "id, slug, name, description, icon_path";

/// Provides read access to affectation types.
pub struct AffectationTypeRepo;

impl AffectationTypeRepo {
    pub async fn list_all(pool: &PgPool) -> Result<Vec<AffectationTypeRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM affectation_types ORDER BY id");
        sqlx::query_as::<_, AffectationTypeRecord>(&query)
            .fetch_all(pool)
            .await
    }
}
