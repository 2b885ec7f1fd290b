//! Repository for the `elements` table.

use sqlx::PgPool;

use crate::models::element::ElementRecord;

/// Column list for `elements` queries.
const COLUMNS: &str = "\
    id, scene_id, slug, title, subtitle, description, source, image_path, \
    detail_image_path, position_left, position_top, affectation_type_id";

/// Provides read access to elements.
pub struct ElementRepo;

impl ElementRepo {
    pub async fn list_all(pool: &PgPool) -> Result<Vec<ElementRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM elements ORDER BY id");
        sqlx::query_as::<_, ElementRecord>(&query)
            .fetch_all(pool)
            .await
    }
}
