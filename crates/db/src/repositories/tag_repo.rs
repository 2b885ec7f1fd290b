//! Repository for the `tags` and `element_tags` tables.

use sqlx::PgPool;

use crate::models::tag::{ElementTagRecord, TagRecord};

/// Provides read access to tags and element-tag links.
pub struct TagRepo;

impl TagRepo {
    pub async fn list_all(pool: &PgPool) -> Result<Vec<TagRecord>, sqlx::Error> {
        sqlx::query_as::<_, TagRecord>("SELECT id, name FROM tags ORDER BY id")
            .fetch_all(pool)
            .await
    }

    /// Every element-tag link in the order the links were created.
    pub async fn list_element_links(pool: &PgPool) -> Result<Vec<ElementTagRecord>, sqlx::Error> {
        sqlx::query_as::<_, ElementTagRecord>(
            "SELECT element_id, tag_id FROM element_tags ORDER BY id",
        )
        .fetch_all(pool)
        .await
    }
}
