pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use crate::application::analytics::{AnalyticsUseCase, RoiPlacement};
use crate::application::catalog::CatalogUseCase;
use crate::application::clusters::ClustersUseCase;
use crate::application::explore::ExploreUseCase;
use crate::application::import::{ImportReport, ImportUseCase};
use crate::application::saved_searches::{SavedSearchUseCase, SearchAlert};
use crate::application::scenario::{ScenarioUseCase, Simulation};
use crate::config::Config;
use crate::domain::analytics::CatalogAnalytics;
use crate::domain::clusters::ClusterSummary;
use crate::domain::distribution::HistogramBin;
use crate::domain::entities::property::{NewProperty, Property};
use crate::domain::entities::saved_search::SavedSearch;
use crate::domain::error::DomainError;
use crate::domain::pipeline::RankedResult;
use crate::domain::ports::property_repository::PropertyRepository;
use crate::domain::ports::property_source::PropertySource;
use crate::domain::ports::saved_search_repository::SavedSearchRepository;
use crate::domain::values::filter_spec::FilterSpecification;
use crate::domain::values::scenario::Scenario;
use crate::infrastructure::sqlite::migrations::run_migrations;
use crate::infrastructure::sqlite::property_repo::SqlitePropertyRepo;
use crate::infrastructure::sqlite::saved_search_repo::SqliteSavedSearchRepo;
use rusqlite::Connection;
use std::sync::Arc;

pub struct EstateLens {
    explore_uc: ExploreUseCase,
    catalog_uc: CatalogUseCase,
    clusters_uc: ClustersUseCase,
    analytics_uc: AnalyticsUseCase,
    searches_uc: SavedSearchUseCase,
    scenario_uc: ScenarioUseCase,
    import_uc: ImportUseCase,
}

fn open_connection(db_path: &str) -> Result<Connection, DomainError> {
    let conn = Connection::open(db_path).map_err(|e| DomainError::Database(format!("DB error: {e}")))?;
    if db_path != ":memory:" {
        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(|e| DomainError::Database(format!("WAL error: {e}")))?;
    }
    run_migrations(&conn)?;
    Ok(conn)
}

impl EstateLens {
    pub fn new(config: &Config) -> Result<Self, DomainError> {
        Self::open(&config.db_path)
    }

    pub fn open(db_path: &str) -> Result<Self, DomainError> {
        let properties: Arc<dyn PropertyRepository> = Arc::new(SqlitePropertyRepo::new(open_connection(db_path)?));
        let searches: Arc<dyn SavedSearchRepository> = Arc::new(SqliteSavedSearchRepo::new(open_connection(db_path)?));
        Ok(Self::with_repositories(properties, searches))
    }

    /// Fresh private database; each repository gets its own in-memory
    /// connection, which is fine since no query spans both tables.
    pub fn in_memory() -> Result<Self, DomainError> {
        Self::open(":memory:")
    }

    pub fn with_repositories(
        properties: Arc<dyn PropertyRepository>,
        searches: Arc<dyn SavedSearchRepository>,
    ) -> Self {
        Self {
            explore_uc: ExploreUseCase::new(properties.clone()),
            catalog_uc: CatalogUseCase::new(properties.clone()),
            clusters_uc: ClustersUseCase::new(properties.clone()),
            analytics_uc: AnalyticsUseCase::new(properties.clone()),
            searches_uc: SavedSearchUseCase::new(searches, properties.clone()),
            scenario_uc: ScenarioUseCase::new(properties.clone()),
            import_uc: ImportUseCase::new(properties),
        }
    }

    // Delegating methods
    pub fn explore(&self, spec: &FilterSpecification) -> Result<RankedResult, DomainError> {
        self.explore_uc.execute(spec)
    }

    pub fn add_property(&self, input: NewProperty) -> Result<Property, DomainError> {
        self.catalog_uc.create(input)
    }

    pub fn update_property(&self, id: &str, input: NewProperty) -> Result<Property, DomainError> {
        self.catalog_uc.update(id, input)
    }

    pub fn remove_property(&self, id: &str) -> Result<(), DomainError> {
        self.catalog_uc.delete(id)
    }

    pub fn get_property(&self, id: &str) -> Result<Property, DomainError> {
        self.catalog_uc.get(id)
    }

    pub fn list_properties(&self) -> Result<Vec<Property>, DomainError> {
        self.catalog_uc.list()
    }

    pub fn property_count(&self) -> Result<usize, DomainError> {
        self.catalog_uc.count()
    }

    pub async fn import_from(&self, source: &dyn PropertySource) -> Result<ImportReport, DomainError> {
        self.import_uc.execute(source).await
    }

    pub fn clusters(&self) -> Result<Vec<ClusterSummary>, DomainError> {
        self.clusters_uc.execute()
    }

    pub fn analytics(&self) -> Result<CatalogAnalytics, DomainError> {
        self.analytics_uc.execute()
    }

    pub fn roi_histogram(&self, bin_width: f64) -> Result<Vec<HistogramBin>, DomainError> {
        self.analytics_uc.histogram(bin_width)
    }

    pub fn roi_placement(&self, id: &str) -> Result<RoiPlacement, DomainError> {
        self.analytics_uc.placement(id)
    }

    pub fn comparables(&self, id: &str, limit: usize) -> Result<Vec<Property>, DomainError> {
        self.analytics_uc.comparables(id, limit)
    }

    pub fn simulate(
        &self,
        property_id: &str,
        scenarios: Vec<Scenario>,
        holding_period: Option<u32>,
    ) -> Result<Simulation, DomainError> {
        self.scenario_uc.simulate(property_id, scenarios, holding_period)
    }

    /// Simulation using the saved search's holding period, unless `months`
    /// overrides it.
    pub fn simulate_for_search(
        &self,
        property_id: &str,
        search_id: &str,
        scenarios: Vec<Scenario>,
        months: Option<u32>,
    ) -> Result<Simulation, DomainError> {
        let search = self.searches_uc.get(search_id)?;
        let holding_period = months.or(search.spec.holding_period_months);
        self.scenario_uc.simulate(property_id, scenarios, holding_period)
    }

    pub fn save_search(&self, name: String, spec: FilterSpecification) -> Result<SavedSearch, DomainError> {
        self.searches_uc.save(name, spec)
    }

    pub fn saved_search(&self, id: &str) -> Result<SavedSearch, DomainError> {
        self.searches_uc.get(id)
    }

    pub fn saved_searches(&self) -> Result<Vec<SavedSearch>, DomainError> {
        self.searches_uc.list()
    }

    pub fn remove_search(&self, id: &str) -> Result<(), DomainError> {
        self.searches_uc.delete(id)
    }

    pub fn check_search(&self, id: &str) -> Result<SearchAlert, DomainError> {
        self.searches_uc.check(id)
    }

    pub fn check_all_searches(&self) -> Result<Vec<SearchAlert>, DomainError> {
        self.searches_uc.check_all()
    }
}
