//! Pool-backed [`AtlasSource`].

use async_trait::async_trait;
use atlas_core::rows::{AtlasRows, ElementTagRow};
use atlas_core::source::{AtlasSource, DataSourceError};

use crate::repositories::{
    AffectationTypeRepo, CaseStudyRepo, ElementRepo, OverviewRepo, SceneRepo, TagRepo, ZoneRepo,
};
use crate::DbPool;

/// Reads every atlas table from PostgreSQL.
#[derive(Debug, Clone)]
pub struct PgAtlasSource {
    pool: DbPool,
}

impl PgAtlasSource {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl AtlasSource for PgAtlasSource {
    /// Issue the eight table reads concurrently, then validate every record.
    ///
    /// The first failing read aborts the whole fetch; a partial row set is
    /// never returned.
    async fn fetch_rows(&self) -> Result<AtlasRows, DataSourceError> {
        let pool = &self.pool;
        let (overview, case_studies, zones, scenes, elements, affectation_types, tags, links) =
            tokio::try_join!(
                OverviewRepo::find_latest(pool),
                CaseStudyRepo::list_all(pool),
                ZoneRepo::list_all(pool),
                SceneRepo::list_all(pool),
                ElementRepo::list_all(pool),
                AffectationTypeRepo::list_all(pool),
                TagRepo::list_all(pool),
                TagRepo::list_element_links(pool),
            )
            .map_err(|e| DataSourceError::Query(Box::new(e)))?;

        tracing::debug!(
            case_studies = case_studies.len(),
            zones = zones.len(),
            scenes = scenes.len(),
            elements = elements.len(),
            element_tags = links.len(),
            "Fetched atlas rows"
        );

        Ok(AtlasRows {
            hero: overview.map(|o| o.into_row()).transpose()?,
            case_studies: case_studies
                .into_iter()
                .map(|r| r.into_row())
                .collect::<Result<_, _>>()?,
            zones: zones
                .into_iter()
                .map(|r| r.into_row())
                .collect::<Result<_, _>>()?,
            scenes: scenes
                .into_iter()
                .map(|r| r.into_row())
                .collect::<Result<_, _>>()?,
            elements: elements
                .into_iter()
                .map(|r| r.into_row())
                .collect::<Result<_, _>>()?,
            affectation_types: affectation_types
                .into_iter()
                .map(|r| r.into_row())
                .collect::<Result<_, _>>()?,
            tags: tags
                .into_iter()
                .map(|r| r.into_row())
                .collect::<Result<_, _>>()?,
            element_tags: links.into_iter().map(ElementTagRow::from).collect(),
        })
    }

    async fn ping(&self) -> Result<(), DataSourceError> {
        crate::health_check(&self.pool)
            .await
            .map_err(|e| DataSourceError::Query(Box::new(e)))
    }
}
