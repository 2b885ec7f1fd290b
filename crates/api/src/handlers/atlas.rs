//! Handlers for atlas content.
//!
//! Every endpoint here is served from the same load: live rows when the
//! store answers, the static snapshot otherwise. The response status does
//! not depend on which path was taken; the `x-atlas-data-source` header
//! does.

use atlas_core::atlas::CaseStudySummary;
use atlas_core::error::CoreError;
use atlas_core::publication::PublicationFilter;
use atlas_core::source::{DataProvenance, PROVENANCE_HEADER};
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::query::IncludeUnpublishedParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Header pair naming the path that produced a response.
fn provenance(provenance: DataProvenance) -> [(&'static str, &'static str); 1] {
    [(PROVENANCE_HEADER, provenance.as_str())]
}

fn publication_params(
    params: Result<Query<IncludeUnpublishedParams>, QueryRejection>,
) -> AppResult<IncludeUnpublishedParams> {
    params
        .map(|Query(p)| p)
        .map_err(|e| AppError::BadRequest(e.body_text()))
}

/// GET /api/atlas-data
///
/// The full nested atlas document. Takes no parameters and never fails;
/// every case study is included and the client gates visibility on
/// `is_published`.
pub async fn get_atlas_data(State(state): State<AppState>) -> impl IntoResponse {
    let load = state.atlas.load().await;

    tracing::debug!(provenance = %load.provenance, "Serving atlas data");

    (
        provenance(load.provenance),
        Json(PublicationFilter::All.apply(load.document)),
    )
}

/// GET /api/case-studies
///
/// Case study summaries without their zone trees. Published only unless
/// `include_unpublished=true`.
pub async fn list_case_studies(
    State(state): State<AppState>,
    params: Result<Query<IncludeUnpublishedParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let filter = publication_params(params)?.filter_or(PublicationFilter::PublishedOnly);
    let load = state.atlas.load().await;

    let summaries: Vec<CaseStudySummary> = load
        .document
        .case_of_studies
        .iter()
        .filter(|c| filter.admits(c))
        .map(CaseStudySummary::from)
        .collect();

    Ok((
        provenance(load.provenance),
        Json(DataResponse { data: summaries }),
    ))
}

/// GET /api/case-studies/{slug}
///
/// One case study with its full zone tree. Unpublished case studies are
/// not found unless `include_unpublished=true`.
pub async fn get_case_study(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    params: Result<Query<IncludeUnpublishedParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let filter = publication_params(params)?.filter_or(PublicationFilter::PublishedOnly);
    let load = state.atlas.load().await;

    let case = load
        .document
        .case_of_studies
        .into_iter()
        .find(|c| c.slug == slug && filter.admits(c))
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "CaseStudy",
                key: slug,
            })
        })?;

    Ok((provenance(load.provenance), Json(DataResponse { data: case })))
}

/// GET /api/affectation-types
pub async fn list_affectation_types(State(state): State<AppState>) -> impl IntoResponse {
    let load = state.atlas.load().await;
    (
        provenance(load.provenance),
        Json(DataResponse {
            data: load.document.affectation_types,
        }),
    )
}

/// GET /api/tags
pub async fn list_tags(State(state): State<AppState>) -> impl IntoResponse {
    let load = state.atlas.load().await;
    (
        provenance(load.provenance),
        Json(DataResponse {
            data: load.document.tags,
        }),
    )
}
