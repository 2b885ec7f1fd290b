//! Integration tests for `GET /api/atlas-data`.
//!
//! Covers the live path, the fallback triggers (no store, failing store,
//! stalled store),
//! shape invariance between the two, and that query strings never change
//! the response.

mod common;

use std::sync::Arc;
use std::time::Duration;

use atlas_api::service::AtlasService;
use atlas_core::content::static_rows;
use atlas_core::rows::{AtlasRows, CaseStudyRow, ElementTagRow};
use atlas_core::source::AtlasSource;
use axum::http::StatusCode;
use common::{body_bytes, body_json, get, provenance, FailingSource, FixedSource, StalledSource};
use serde_json::{json, Value};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Live rows that differ from the snapshot: a renamed case study, an
/// unpublished draft, a dangling affectation reference, and a dangling tag.
fn live_rows() -> AtlasRows {
    let mut rows = static_rows();
    rows.case_studies[0].slug = "provincia-choapa-en-vivo".to_string();
    rows.case_studies.push(CaseStudyRow {
        id: 2,
        slug: "salar-de-atacama".to_string(),
        title: "Salar de Atacama".to_string(),
        summary: None,
        image_path: None,
        detail_image_path: None,
        position_left: 40.0,
        position_top: 20.0,
        color: None,
        is_published: 0,
    });
    rows.scenes[1].affectation_type_id = Some(404);
    rows.element_tags.push(ElementTagRow {
        element_id: 1,
        tag_id: 999,
    });
    rows
}

fn live_app(rows: AtlasRows) -> (axum::Router, Arc<FixedSource>) {
    let source = FixedSource::new(rows);
    let dyn_source: Arc<dyn AtlasSource> = source.clone();
    (common::build_test_app(Some(dyn_source)), source)
}

/// Key sets of every object in the document, one entry per tree path.
fn shape(value: &Value, path: String, out: &mut Vec<(String, Vec<String>)>) {
    match value {
        Value::Object(map) => {
            let mut keys: Vec<String> = map.keys().cloned().collect();
            keys.sort();
            out.push((path.clone(), keys));
            for (key, child) in map {
                shape(child, format!("{path}.{key}"), out);
            }
        }
        Value::Array(items) => {
            for item in items {
                shape(item, format!("{path}[]"), out);
            }
        }
        _ => {}
    }
}

fn shape_of(value: &Value) -> Vec<(String, Vec<String>)> {
    let mut out = Vec::new();
    shape(value, "$".to_string(), &mut out);
    out.sort();
    out.dedup();
    out
}

// ---------------------------------------------------------------------------
// Test: live store produces primary provenance and live content
// ---------------------------------------------------------------------------

#[tokio::test]
async fn live_store_serves_primary_document() {
    let (app, source) = live_app(live_rows());
    let response = get(app, "/api/atlas-data").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(provenance(&response), "primary");

    let json = body_json(response).await;
    assert_eq!(json["caseOfStudies"][0]["slug"], "provincia-choapa-en-vivo");
    assert_eq!(json["caseOfStudies"].as_array().unwrap().len(), 2);
    assert_eq!(source.fetches(), 1);
}

// ---------------------------------------------------------------------------
// Test: no store handle -> fallback with the static snapshot
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_store_serves_fallback() {
    let app = common::build_test_app(None);
    let response = get(app, "/api/atlas-data").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(provenance(&response), "fallback");

    let json = body_json(response).await;
    assert_eq!(json["caseOfStudies"][0]["slug"], "provincia-choapa");
}

// ---------------------------------------------------------------------------
// Test: failing store -> fallback, still 200
// ---------------------------------------------------------------------------

#[tokio::test]
async fn failing_store_serves_fallback() {
    let app = common::build_test_app(Some(Arc::new(FailingSource)));
    let response = get(app, "/api/atlas-data").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(provenance(&response), "fallback");

    let json = body_json(response).await;
    assert_eq!(json["caseOfStudies"][0]["slug"], "provincia-choapa");
    assert_eq!(json["hero"]["title"], "Atlas del Post-Extractivismo");
}

// ---------------------------------------------------------------------------
// Test: primary and fallback documents have the same shape
// ---------------------------------------------------------------------------

#[tokio::test]
async fn stalled_store_serves_fallback_before_request_timeout() {
    let atlas = AtlasService::new(Some(Arc::new(StalledSource)))
        .with_fetch_timeout(Duration::from_millis(50));
    let response = get(common::build_test_app_with(atlas), "/api/atlas-data").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(provenance(&response), "fallback");
    let json = body_json(response).await;
    assert_eq!(json["caseOfStudies"][0]["slug"], "provincia-choapa");
}

#[tokio::test]
async fn primary_and_fallback_share_shape() {
    let (app, _) = live_app(live_rows());
    let live = body_json(get(app, "/api/atlas-data").await).await;
    let fallback = body_json(get(common::build_test_app(None), "/api/atlas-data").await).await;

    assert_eq!(shape_of(&live), shape_of(&fallback));
}

// ---------------------------------------------------------------------------
// Test: identical rows -> byte-identical bodies
// ---------------------------------------------------------------------------

#[tokio::test]
async fn repeated_requests_are_byte_identical() {
    let (app, source) = live_app(live_rows());

    let first = body_bytes(get(app.clone(), "/api/atlas-data").await).await;
    let second = body_bytes(get(app, "/api/atlas-data").await).await;

    assert_eq!(first, second);
    assert_eq!(source.fetches(), 2);
}

// ---------------------------------------------------------------------------
// Test: dangling references and coercions on the wire
// ---------------------------------------------------------------------------

#[tokio::test]
async fn wire_format_resolves_references() {
    let (app, _) = live_app(live_rows());
    let json = body_json(get(app, "/api/atlas-data").await).await;

    let choapa = &json["caseOfStudies"][0];
    assert_eq!(choapa["is_published"], json!(true));
    assert_eq!(json["caseOfStudies"][1]["is_published"], json!(false));
    assert_eq!(json["caseOfStudies"][1]["zones"], json!([]));

    let cordillera = &choapa["zones"][0];
    assert_eq!(cordillera["scenes"][0]["affectation_type_id"], "anthropic");
    // Scene 2 points at a type that does not exist.
    assert_eq!(cordillera["scenes"][1]["affectation_type_id"], Value::Null);
    // Element 1 keeps its real tag and drops the dangling link.
    assert_eq!(cordillera["scenes"][0]["elements"][0]["tags"], json!(["mineria"]));
}

#[tokio::test]
async fn empty_store_still_has_every_top_level_key() {
    let (app, _) = live_app(AtlasRows::default());
    let response = get(app, "/api/atlas-data").await;

    assert_eq!(provenance(&response), "primary");
    let json = body_json(response).await;
    assert_eq!(json["caseOfStudies"], json!([]));
    assert_eq!(json["tags"], json!([]));
    assert_eq!(json["affectationTypes"], json!([]));
    assert!(json["hero"]["title"].is_string());
}

// ---------------------------------------------------------------------------
// Test: publication filter override
// ---------------------------------------------------------------------------

#[tokio::test]
async fn drafts_are_served_with_their_flag() {
    let (app, _) = live_app(live_rows());
    let json = body_json(get(app, "/api/atlas-data").await).await;

    let flags: Vec<(&str, bool)> = json["caseOfStudies"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| (c["slug"].as_str().unwrap(), c["is_published"].as_bool().unwrap()))
        .collect();
    assert_eq!(
        flags,
        vec![("provincia-choapa-en-vivo", true), ("salar-de-atacama", false)]
    );
}

#[tokio::test]
async fn query_string_is_ignored() {
    for uri in [
        "/api/atlas-data?include_unpublished=yes",
        "/api/atlas-data?include_unpublished=false",
        "/api/atlas-data?page=2&limit=abc",
    ] {
        let response = get(common::build_test_app(None), uri).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        assert_eq!(provenance(&response), "fallback", "{uri}");
    }

    let (app, source) = live_app(live_rows());
    let plain = body_bytes(get(app.clone(), "/api/atlas-data").await).await;
    let response = get(app, "/api/atlas-data?include_unpublished=false").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(provenance(&response), "primary");
    assert_eq!(body_bytes(response).await, plain);
    assert_eq!(source.fetches(), 2);
}
