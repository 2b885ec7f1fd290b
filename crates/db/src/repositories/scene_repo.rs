//! Repository for the `scenes` table.

use sqlx::PgPool;

use crate::models::scene::SceneRecord;

/// Column list for `scenes` queries.
const COLUMNS: &str = "\
    id, zone_id, slug, title, summary, image_path, position_left, position_top, \
    affectation_type_id, decoration_image_path, decoration_position_left, \
    decoration_position_top, decoration_width_vw, decoration_tooltip";

/// Provides read access to scenes.
pub struct SceneRepo;

impl SceneRepo {
    pub async fn list_all(pool: &PgPool) -> Result<Vec<SceneRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM scenes ORDER BY id");
        sqlx::query_as::<_, SceneRecord>(&query).fetch_all(pool).await
    }
}
