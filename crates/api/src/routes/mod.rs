pub mod atlas;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /atlas-data                      full nested atlas document
/// /case-studies                    published case study summaries
/// /case-studies/{slug}             one case study with its zone tree
/// /affectation-types               affectation type list
/// /tags                            tag list
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(atlas::router())
}
