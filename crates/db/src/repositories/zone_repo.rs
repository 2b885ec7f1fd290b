//! Repository for the `zones` table.

use sqlx::PgPool;

use crate::models::zone::ZoneRecord;

/// Column list for `zones` queries.
const COLUMNS: &str = "id, case_study_id, slug, title, image_path, position_left, position_top";

/// Provides read access to zones.
pub struct ZoneRepo;

impl ZoneRepo {
    pub async fn list_all(pool: &PgPool) -> Result<Vec<ZoneRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM zones ORDER BY id");
        sqlx::query_as::<_, ZoneRecord>(&query).fetch_all(pool).await
    }
}
