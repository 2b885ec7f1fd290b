//! Repository for the `case_studies` table.

use sqlx::PgPool;

use crate::models::case_study::CaseStudyRecord;

/// Column list for `case_studies` queries.
const COLUMNS: &str = "\
    id, slug, title, summary, image_path, detail_image_path, \
    position_left, position_top, color, is_published";

/// Provides read access to case studies.
pub struct CaseStudyRepo;

impl CaseStudyRepo {
    /// List every case study, published or not.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<CaseStudyRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM case_studies ORDER BY id");
        sqlx::query_as::<_, CaseStudyRecord>(&query)
            .fetch_all(pool)
            .await
    }
}
