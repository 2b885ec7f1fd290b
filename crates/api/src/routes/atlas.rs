//! Route definitions for atlas content.

use axum::routing::get;
use axum::Router;

use crate::handlers::atlas;
use crate::state::AppState;

/// Atlas content routes, mounted under `/api`.
///
/// ```text
/// GET /atlas-data                  -> get_atlas_data
/// GET /case-studies                -> list_case_studies
/// GET /case-studies/{slug}         -> get_case_study
/// GET /affectation-types           -> list_affectation_types
/// GET /tags                        -> list_tags
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/atlas-data", get(atlas::get_atlas_data))
        .route("/case-studies", get(atlas::list_case_studies))
        .route("/case-studies/{slug}", get(atlas::get_case_study))
        .route("/affectation-types", get(atlas::list_affectation_types))
        .route("/tags", get(atlas::list_tags))
}
