//! Repository for the `overview` table.

use sqlx::PgPool;

use crate::models::overview::OverviewRecord;

/// Column list for `overview` queries.
const COLUMNS: &str = "id, title, subtitle, description, image_path, created_at";

/// Provides read access to the hero overview rows.
pub struct OverviewRepo;

impl OverviewRepo {
    /// The most recently created overview row, if any.
    pub async fn find_latest(pool: &PgPool) -> Result<Option<OverviewRecord>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM overview ORDER BY created_at DESC, id DESC LIMIT 1");
        sqlx::query_as::<_, OverviewRecord>(&query)
            .fetch_optional(pool)
            .await
    }
}
