//! Static editorial content served when the row store is unavailable.
//!
//! The snapshot is authored as flat rows and assembled by the same code
//! that assembles live rows, so the fallback document always has the
//! live document's shape.

use std::sync::LazyLock;

use crate::affectation::AffectationSlug;
use crate::assembly::assemble;
use crate::atlas::AtlasDocument;
use crate::rows::{
    AffectationTypeRow, AtlasRows, CaseStudyRow, ElementRow, ElementTagRow, HeroRow, SceneRow,
    TagRow, ZoneRow,
};
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Hero
// ---------------------------------------------------------------------------

pub const DEFAULT_HERO_TITLE: &str = "Atlas del Post-Extractivismo";

/// Hero used when the overview table has no rows.
pub fn default_hero() -> HeroRow {
    HeroRow {
        title: DEFAULT_HERO_TITLE.to_string(),
        subtitle: Some("Territorios, cuerpos y aguas después de la mina".to_string()),
        description: Some(
            "Un recorrido por los territorios transformados por la minería a gran escala: \
             sus zonas, sus escenas y los elementos que las habitan."
                .to_string(),
        ),
        image_path: Some("/images/hero/atlas-hero.webp".to_string()),
    }
}

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

const BIOTIC: DbId = 1;
const ANTHROPIC: DbId = 2;
const PHYSICAL: DbId = 3;

static FALLBACK_DOCUMENT: LazyLock<AtlasDocument> = LazyLock::new(|| assemble(&static_rows()));

/// The assembled static snapshot. Built once per process.
pub fn fallback_document() -> &'static AtlasDocument {
    &FALLBACK_DOCUMENT
}

/// The static snapshot as flat rows.
pub fn static_rows() -> AtlasRows {
    AtlasRows {
        hero: Some(default_hero()),
        case_studies: vec![CaseStudyRow {
            id: 1,
            slug: "provincia-choapa".to_string(),
            title: "Provincia de Choapa".to_string(),
            summary: Some(
                "Valles de la región de Coquimbo atravesados por la mina Los Pelambres, \
                 su mineroducto y el tranque de relaves El Mauro."
                    .to_string(),
            ),
            image_path: Some("/images/case-studies/choapa/map.webp".to_string()),
            detail_image_path: Some("/images/case-studies/choapa/detail.webp".to_string()),
            position_left: 38.5,
            position_top: 54.0,
            color: Some("#C2703D".to_string()),
            is_published: 1,
        }],
        zones: vec![
            zone(1, "alta-cordillera", "Alta cordillera", 62.0, 24.0),
            zone(2, "valle-del-pupio", "Valle del Pupío", 30.0, 58.0),
        ],
        scenes: vec![
            SceneRow {
                decoration_image_path: Some("/images/decorations/condor.webp".to_string()),
                decoration_position_left: Some(12.0),
                decoration_position_top: Some(8.0),
                decoration_width_vw: Some(9.0),
                decoration_tooltip: Some("Cóndor andino".to_string()),
                ..scene(
                    1,
                    1,
                    "rajo-los-pelambres",
                    "Rajo Los Pelambres",
                    "El rajo abierto a 3.600 metros de altura, junto a las nacientes del río Choapa.",
                    ANTHROPIC,
                    (48.0, 30.0),
                )
            },
            scene(
                2,
                1,
                "glaciares-de-roca",
                "Glaciares de roca",
                "Reservas de agua congelada cubiertas por detritos, removidas por botaderos de estéril.",
                PHYSICAL,
                (70.0, 18.0),
            ),
            scene(
                3,
                2,
                "tranque-el-mauro",
                "Tranque El Mauro",
                "Depósito de relaves sobre el estero Pupío, aguas arriba de la localidad de Caimanes.",
                ANTHROPIC,
                (36.0, 44.0),
            ),
            scene(
                4,
                2,
                "bosque-esclerofilo",
                "Bosque esclerófilo",
                "Quebradas con peumos, litres y bellotos del norte, refugio de fauna del valle.",
                BIOTIC,
                (58.0, 66.0),
            ),
        ],
        elements: vec![
            element(
                1,
                1,
                "botadero-esteril",
                "Botadero de estéril",
                "Roca sin ley económica acumulada junto al rajo.",
                ANTHROPIC,
                (22.0, 40.0),
            ),
            element(
                2,
                1,
                "mineroducto",
                "Mineroducto",
                "Tubería que transporta concentrado de cobre hasta el puerto de Punta Chungo.",
                ANTHROPIC,
                (64.0, 55.0),
            ),
            element(
                3,
                2,
                "glaciar-de-roca",
                "Glaciar de roca",
                "Cuerpo de hielo y detritos que regula el caudal estival de la cuenca.",
                PHYSICAL,
                (40.0, 32.0),
            ),
            element(
                4,
                2,
                "vega-altoandina",
                "Vega altoandina",
                "Humedal de altura alimentado por el derretimiento de hielo.",
                BIOTIC,
                (58.0, 70.0),
            ),
            element(
                5,
                3,
                "muro-de-relaves",
                "Muro del tranque",
                "Muro de arenas de relave de más de 200 metros de altura.",
                ANTHROPIC,
                (30.0, 35.0),
            ),
            element(
                6,
                3,
                "estero-pupio",
                "Estero Pupío",
                "Curso de agua del que depende el abastecimiento de Caimanes.",
                PHYSICAL,
                (52.0, 62.0),
            ),
            element(
                7,
                4,
                "zorro-culpeo",
                "Zorro culpeo",
                "Carnívoro nativo que recorre las quebradas del valle.",
                BIOTIC,
                (44.0, 50.0),
            ),
            element(
                8,
                4,
                "belloto-del-norte",
                "Belloto del norte",
                "Árbol endémico en peligro, presente en quebradas húmedas.",
                BIOTIC,
                (66.0, 38.0),
            ),
        ],
        affectation_types: vec![
            affectation(
                BIOTIC,
                AffectationSlug::Biotic,
                "Biótica",
                "Afectaciones sobre seres vivos y ecosistemas.",
            ),
            affectation(
                ANTHROPIC,
                AffectationSlug::Anthropic,
                "Antrópica",
                "Afectaciones sobre comunidades, cuerpos e infraestructura humana.",
            ),
            affectation(
                PHYSICAL,
                AffectationSlug::Physical,
                "Física",
                "Afectaciones sobre agua, suelo, hielo y aire.",
            ),
        ],
        tags: ["fauna", "flora", "agua", "glaciar", "relave", "mineria", "comunidad"]
            .iter()
            .zip(1..)
            .map(|(name, id)| TagRow {
                id,
                name: (*name).to_string(),
            })
            .collect(),
        element_tags: [
            (1, 6),
            (2, 6),
            (3, 4),
            (3, 3),
            (4, 3),
            (4, 2),
            (5, 5),
            (5, 7),
            (6, 3),
            (6, 7),
            (7, 1),
            (8, 2),
        ]
        .into_iter()
        .map(|(element_id, tag_id)| ElementTagRow { element_id, tag_id })
        .collect(),
    }
}

fn zone(id: DbId, slug: &str, title: &str, left: f64, top: f64) -> ZoneRow {
    ZoneRow {
        id,
        case_study_id: 1,
        slug: slug.to_string(),
        title: title.to_string(),
        image_path: Some(format!("/images/zones/{slug}.webp")),
        position_left: left,
        position_top: top,
    }
}

fn scene(
    id: DbId,
    zone_id: DbId,
    slug: &str,
    title: &str,
    summary: &str,
    affectation_type_id: DbId,
    (left, top): (f64, f64),
) -> SceneRow {
    SceneRow {
        id,
        zone_id,
        slug: slug.to_string(),
        title: title.to_string(),
        summary: Some(summary.to_string()),
        image_path: Some(format!("/images/scenes/{slug}.webp")),
        position_left: left,
        position_top: top,
        affectation_type_id: Some(affectation_type_id),
        decoration_image_path: None,
        decoration_position_left: None,
        decoration_position_top: None,
        decoration_width_vw: None,
        decoration_tooltip: None,
    }
}

fn element(
    id: DbId,
    scene_id: DbId,
    slug: &str,
    title: &str,
    description: &str,
    affectation_type_id: DbId,
    (left, top): (f64, f64),
) -> ElementRow {
    ElementRow {
        id,
        scene_id,
        slug: slug.to_string(),
        title: title.to_string(),
        subtitle: None,
        description: Some(description.to_string()),
        source: Some("Observatorio Latinoamericano de Conflictos Ambientales".to_string()),
        image_path: Some(format!("/images/elements/{slug}.webp")),
        detail_image_path: Some(format!("/images/elements/{slug}-detail.webp")),
        position_left: left,
        position_top: top,
        affectation_type_id: Some(affectation_type_id),
    }
}

fn affectation(
    id: DbId,
    slug: AffectationSlug,
    name: &str,
    description: &str,
) -> AffectationTypeRow {
    AffectationTypeRow {
        id,
        slug,
        name: name.to_string(),
        description: Some(description.to_string()),
        icon_path: Some(format!("/icons/affectation/{slug}.svg")),
    }
}
