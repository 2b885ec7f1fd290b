//! Hierarchical assembly of the atlas document from flat rows.
//!
//! Three grouped joins, innermost first: elements by scene, scenes by zone,
//! zones by case study. Each level is grouped into a hash map keyed by the
//! parent id and drained while mapping the parents, so the whole pass is
//! linear in the number of rows. Children keep their input order, and a
//! parent without children gets an empty `Vec`.

use std::collections::HashMap;

use crate::atlas::{AffectationType, AtlasDocument, CaseStudy, Element, Hero, Scene, Tag, Zone};
use crate::content::default_hero;
use crate::index::AtlasIndex;
use crate::rows::{AtlasRows, CaseStudyRow, ElementRow, HeroRow, SceneRow, ZoneRow};
use crate::types::DbId;

/// Assemble the nested document from flat rows.
///
/// Pure and deterministic: the same rows always produce the same document.
/// Dangling affectation references resolve to `None`; dangling tag links
/// are dropped. Children whose parent id matches no parent row are not
/// reachable from the tree and are left out.
pub fn assemble(rows: &AtlasRows) -> AtlasDocument {
    let index = AtlasIndex::build(&rows.affectation_types, &rows.tags, &rows.element_tags);

    let mut elements_by_scene = group_by(&rows.elements, |e| e.scene_id, |e| element(e, &index));
    let mut scenes_by_zone = group_by(
        &rows.scenes,
        |s| s.zone_id,
        |s| scene(s, &index, take(&mut elements_by_scene, s.id)),
    );
    let mut zones_by_case = group_by(
        &rows.zones,
        |z| z.case_study_id,
        |z| zone(z, take(&mut scenes_by_zone, z.id)),
    );
    let case_of_studies = rows
        .case_studies
        .iter()
        .map(|c| case_study(c, take(&mut zones_by_case, c.id)))
        .collect();

    AtlasDocument {
        hero: hero(rows.hero.clone().unwrap_or_else(default_hero)),
        affectation_types: rows
            .affectation_types
            .iter()
            .map(|t| AffectationType {
                id: t.id,
                slug: t.slug,
                name: t.name.clone(),
                description: t.description.clone(),
                icon_path: t.icon_path.clone(),
            })
            .collect(),
        tags: rows
            .tags
            .iter()
            .map(|t| Tag {
                id: t.id,
                name: t.name.clone(),
            })
            .collect(),
        case_of_studies,
    }
}

/// Coerce the stored integer flag to a strict boolean.
pub fn is_published(flag: i32) -> bool {
    flag != 0
}

// ---------------------------------------------------------------------------
// Grouping
// ---------------------------------------------------------------------------

/// Map each row and push it under its parent key, preserving input order.
fn group_by<R, V>(
    rows: &[R],
    parent: impl Fn(&R) -> DbId,
    mut map: impl FnMut(&R) -> V,
) -> HashMap<DbId, Vec<V>> {
    let mut groups: HashMap<DbId, Vec<V>> = HashMap::new();
    for row in rows {
        groups.entry(parent(row)).or_default().push(map(row));
    }
    groups
}

/// Remove a parent's children from the grouping, so each child list is
/// attached to at most one parent.
fn take<V>(groups: &mut HashMap<DbId, Vec<V>>, parent_id: DbId) -> Vec<V> {
    groups.remove(&parent_id).unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Row -> view mapping
// ---------------------------------------------------------------------------

fn hero(row: HeroRow) -> Hero {
    Hero {
        title: row.title,
        subtitle: row.subtitle,
        description: row.description,
        image_path: row.image_path,
    }
}

fn element(row: &ElementRow, index: &AtlasIndex<'_>) -> Element {
    Element {
        id: row.id,
        slug: row.slug.clone(),
        title: row.title.clone(),
        subtitle: row.subtitle.clone(),
        description: row.description.clone(),
        source: row.source.clone(),
        image_path: row.image_path.clone(),
        detail_image_path: row.detail_image_path.clone(),
        position_left: row.position_left,
        position_top: row.position_top,
        affectation_type_id: index.affectation_slug(row.affectation_type_id),
        tags: index.element_tag_names(row.id),
    }
}

fn scene(row: &SceneRow, index: &AtlasIndex<'_>, elements: Vec<Element>) -> Scene {
    Scene {
        id: row.id,
        slug: row.slug.clone(),
        title: row.title.clone(),
        summary: row.summary.clone(),
        image_path: row.image_path.clone(),
        position_left: row.position_left,
        position_top: row.position_top,
        affectation_type_id: index.affectation_slug(row.affectation_type_id),
        decoration_image_path: row.decoration_image_path.clone(),
        decoration_position_left: row.decoration_position_left,
        decoration_position_top: row.decoration_position_top,
        decoration_width_vw: row.decoration_width_vw,
        decoration_tooltip: row.decoration_tooltip.clone(),
        elements,
    }
}

fn zone(row: &ZoneRow, scenes: Vec<Scene>) -> Zone {
    Zone {
        id: row.id,
        slug: row.slug.clone(),
        title: row.title.clone(),
        image_path: row.image_path.clone(),
        position_left: row.position_left,
        position_top: row.position_top,
        scenes,
    }
}

fn case_study(row: &CaseStudyRow, zones: Vec<Zone>) -> CaseStudy {
    CaseStudy {
        id: row.id,
        slug: row.slug.clone(),
        title: row.title.clone(),
        summary: row.summary.clone(),
        image_path: row.image_path.clone(),
        detail_image_path: row.detail_image_path.clone(),
        position_left: row.position_left,
        position_top: row.position_top,
        color: row.color.clone(),
        is_published: is_published(row.is_published),
        zones,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;
    use crate::affectation::AffectationSlug;
    use crate::content::{fallback_document, DEFAULT_HERO_TITLE};
    use crate::rows::{AffectationTypeRow, ElementTagRow, TagRow};

    fn case_row(id: DbId, slug: &str, is_published: i32) -> CaseStudyRow {
        CaseStudyRow {
            id,
            slug: slug.to_string(),
            title: slug.to_uppercase(),
            summary: None,
            image_path: None,
            detail_image_path: None,
            position_left: 10.0,
            position_top: 20.0,
            color: None,
            is_published,
        }
    }

    fn zone_row(id: DbId, case_study_id: DbId) -> ZoneRow {
        ZoneRow {
            id,
            case_study_id,
            slug: format!("zone-{id}"),
            title: format!("Zone {id}"),
            image_path: None,
            position_left: 0.0,
            position_top: 0.0,
        }
    }

    fn scene_row(id: DbId, zone_id: DbId, affectation_type_id: Option<DbId>) -> SceneRow {
        SceneRow {
            id,
            zone_id,
            slug: format!("scene-{id}"),
            title: format!("Scene {id}"),
            summary: None,
            image_path: None,
            position_left: 0.0,
            position_top: 0.0,
            affectation_type_id,
            decoration_image_path: None,
            decoration_position_left: None,
            decoration_position_top: None,
            decoration_width_vw: None,
            decoration_tooltip: None,
        }
    }

    fn element_row(id: DbId, scene_id: DbId, affectation_type_id: Option<DbId>) -> ElementRow {
        ElementRow {
            id,
            scene_id,
            slug: format!("element-{id}"),
            title: format!("Element {id}"),
            subtitle: None,
            description: None,
            source: None,
            image_path: None,
            detail_image_path: None,
            position_left: 0.0,
            position_top: 0.0,
            affectation_type_id,
        }
    }

    fn sample_rows() -> AtlasRows {
        AtlasRows {
            hero: None,
            case_studies: vec![case_row(1, "choapa", 1), case_row(2, "atacama", 0)],
            zones: vec![zone_row(10, 1), zone_row(11, 1), zone_row(12, 2)],
            scenes: vec![
                scene_row(100, 10, Some(1)),
                scene_row(101, 10, Some(99)),
                scene_row(102, 11, None),
            ],
            elements: vec![
                element_row(1000, 100, Some(1)),
                element_row(1001, 101, Some(2)),
                element_row(1002, 100, Some(42)),
                element_row(1003, 100, None),
            ],
            affectation_types: vec![
                AffectationTypeRow {
                    id: 1,
                    slug: AffectationSlug::Biotic,
                    name: "Biótica".to_string(),
                    description: None,
                    icon_path: None,
                },
                AffectationTypeRow {
                    id: 2,
                    slug: AffectationSlug::Physical,
                    name: "Física".to_string(),
                    description: None,
                    icon_path: None,
                },
            ],
            tags: vec![
                TagRow {
                    id: 1,
                    name: "fauna".to_string(),
                },
                TagRow {
                    id: 2,
                    name: "glaciar".to_string(),
                },
            ],
            element_tags: vec![
                ElementTagRow {
                    element_id: 1000,
                    tag_id: 2,
                },
                ElementTagRow {
                    element_id: 1000,
                    tag_id: 1,
                },
                ElementTagRow {
                    element_id: 1001,
                    tag_id: 77,
                },
            ],
        }
    }

    /// Collect the key set of every object along the tree, per level.
    fn shape(value: &Value, path: &str, out: &mut Vec<(String, Vec<String>)>) {
        match value {
            Value::Object(map) => {
                let mut keys: Vec<String> = map.keys().cloned().collect();
                keys.sort();
                out.push((path.to_string(), keys));
                for (key, child) in map {
                    shape(child, &format!("{path}.{key}"), out);
                }
            }
            Value::Array(items) => {
                if let Some(first) = items.first() {
                    shape(first, &format!("{path}[]"), out);
                }
            }
            _ => {}
        }
    }

    fn shape_of(doc: &AtlasDocument) -> Vec<(String, Vec<String>)> {
        let mut out = Vec::new();
        shape(&serde_json::to_value(doc).unwrap(), "$", &mut out);
        out.sort();
        out
    }

    // -- grouping ------------------------------------------------------------

    #[test]
    fn elements_land_under_their_scene_in_input_order() {
        let doc = assemble(&sample_rows());
        let scene = &doc.case_of_studies[0].zones[0].scenes[0];

        assert_eq!(scene.id, 100);
        let ids: Vec<DbId> = scene.elements.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1000, 1002, 1003]);
    }

    #[test]
    fn no_element_appears_twice() {
        let doc = assemble(&sample_rows());
        let mut ids: Vec<DbId> = doc
            .case_of_studies
            .iter()
            .flat_map(|c| &c.zones)
            .flat_map(|z| &z.scenes)
            .flat_map(|s| &s.elements)
            .map(|e| e.id)
            .collect();
        ids.sort();
        assert_eq!(ids, vec![1000, 1001, 1002, 1003]);
    }

    #[test]
    fn zones_and_scenes_nest_under_parents() {
        let doc = assemble(&sample_rows());
        let choapa = &doc.case_of_studies[0];
        let atacama = &doc.case_of_studies[1];

        let zone_ids: Vec<DbId> = choapa.zones.iter().map(|z| z.id).collect();
        assert_eq!(zone_ids, vec![10, 11]);
        assert_eq!(atacama.zones.len(), 1);
        assert_eq!(atacama.zones[0].id, 12);

        let scene_ids: Vec<DbId> = choapa.zones[0].scenes.iter().map(|s| s.id).collect();
        assert_eq!(scene_ids, vec![100, 101]);
        assert_eq!(choapa.zones[1].scenes[0].id, 102);
    }

    #[test]
    fn orphans_are_not_attached() {
        let mut rows = sample_rows();
        rows.elements.push(element_row(2000, 999, None));
        rows.zones.push(zone_row(13, 404));

        let doc = assemble(&rows);
        let json = serde_json::to_string(&doc).unwrap();
        assert!(!json.contains("element-2000"));
        assert!(!json.contains("zone-13"));
    }

    // -- empty leaves --------------------------------------------------------

    #[test]
    fn parents_without_children_get_empty_collections() {
        let doc = assemble(&sample_rows());
        let atacama = &doc.case_of_studies[1];

        assert!(atacama.zones[0].scenes.is_empty());
        assert!(doc.case_of_studies[0].zones[1].scenes[0].elements.is_empty());

        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["caseOfStudies"][1]["zones"][0]["scenes"], serde_json::json!([]));
        assert_eq!(
            json["caseOfStudies"][0]["zones"][1]["scenes"][0]["elements"],
            serde_json::json!([])
        );
    }

    #[test]
    fn case_study_without_zones_has_empty_zone_list() {
        let mut rows = sample_rows();
        rows.case_studies.push(case_row(3, "huasco", 1));

        let json = serde_json::to_value(assemble(&rows)).unwrap();
        assert_eq!(json["caseOfStudies"][2]["zones"], serde_json::json!([]));
    }

    #[test]
    fn empty_rows_produce_default_hero_and_empty_lists() {
        let doc = assemble(&AtlasRows::default());

        assert_eq!(doc.hero.title, DEFAULT_HERO_TITLE);
        assert!(doc.case_of_studies.is_empty());
        assert!(doc.tags.is_empty());
        assert!(doc.affectation_types.is_empty());
    }

    // -- reference resolution ------------------------------------------------

    #[test]
    fn affectation_ids_resolve_to_slugs() {
        let doc = assemble(&sample_rows());
        let zone = &doc.case_of_studies[0].zones[0];

        assert_eq!(zone.scenes[0].affectation_type_id, Some(AffectationSlug::Biotic));
        assert_eq!(zone.scenes[0].elements[0].affectation_type_id, Some(AffectationSlug::Biotic));
        assert_eq!(zone.scenes[1].elements[0].affectation_type_id, Some(AffectationSlug::Physical));
    }

    #[test]
    fn dangling_affectation_serializes_as_null() {
        let doc = assemble(&sample_rows());
        let json = serde_json::to_value(&doc).unwrap();
        let zone = &json["caseOfStudies"][0]["zones"][0];

        assert_eq!(zone["scenes"][1]["affectation_type_id"], Value::Null);
        assert_eq!(zone["scenes"][0]["elements"][1]["affectation_type_id"], Value::Null);
        assert_eq!(zone["scenes"][0]["elements"][2]["affectation_type_id"], Value::Null);
    }

    #[test]
    fn element_tags_resolve_and_drop_dangling_links() {
        let doc = assemble(&sample_rows());
        let zone = &doc.case_of_studies[0].zones[0];

        assert_eq!(zone.scenes[0].elements[0].tags, vec!["glaciar", "fauna"]);
        assert!(zone.scenes[1].elements[0].tags.is_empty());
        assert!(zone.scenes[0].elements[1].tags.is_empty());
    }

    // -- coercion ------------------------------------------------------------

    #[test]
    fn is_published_is_coerced_to_bool() {
        let doc = assemble(&sample_rows());
        let json = serde_json::to_value(&doc).unwrap();

        assert_eq!(json["caseOfStudies"][0]["is_published"], Value::Bool(true));
        assert_eq!(json["caseOfStudies"][1]["is_published"], Value::Bool(false));
    }

    #[test]
    fn any_nonzero_flag_counts_as_published() {
        assert!(is_published(1));
        assert!(is_published(7));
        assert!(is_published(-1));
        assert!(!is_published(0));
    }

    // -- document-level properties -------------------------------------------

    #[test]
    fn assembly_is_idempotent() {
        let rows = sample_rows();
        let first = serde_json::to_vec(&assemble(&rows)).unwrap();
        let second = serde_json::to_vec(&assemble(&rows)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn assembled_and_fallback_documents_share_shape() {
        let mut rows = sample_rows();
        rows.element_tags.push(ElementTagRow {
            element_id: 1003,
            tag_id: 1,
        });
        let live = assemble(&rows);

        assert_eq!(shape_of(&live), shape_of(fallback_document()));
    }

    #[test]
    fn top_level_keys_match_wire_names() {
        let json = serde_json::to_value(assemble(&sample_rows())).unwrap();
        let mut keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort();
        assert_eq!(keys, vec!["affectationTypes", "caseOfStudies", "hero", "tags"]);
    }

    #[test]
    fn hero_row_overrides_default() {
        let mut rows = sample_rows();
        rows.hero = Some(HeroRow {
            title: "Otro título".to_string(),
            subtitle: None,
            description: None,
            image_path: None,
        });

        let json = serde_json::to_value(assemble(&rows)).unwrap();
        assert_eq!(json["hero"]["title"], "Otro título");
        assert_eq!(json["hero"]["subtitle"], Value::Null);
    }
}
