//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async read methods
//! that accept `&PgPool` as the first argument. Every list query orders by
//! its `BIGSERIAL` primary key, which grows with insertion, so child order
//! follows the order rows were inserted. Without `ORDER BY` PostgreSQL
//! makes no ordering promise at all.

pub mod affectation_type_repo;
pub mod case_study_repo;
pub mod element_repo;
pub mod overview_repo;
pub mod scene_repo;
pub mod tag_repo;
pub mod zone_repo;

pub use affectation_type_repo::AffectationTypeRepo;
pub use case_study_repo::CaseStudyRepo;
pub use element_repo::ElementRepo;
pub use overview_repo::OverviewRepo;
pub use scene_repo::SceneRepo;
pub use tag_repo::TagRepo;
pub use zone_repo::ZoneRepo;
