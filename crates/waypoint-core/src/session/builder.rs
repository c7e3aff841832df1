//! Builder for creating and configuring Session instances.

use jiff::civil::Date;

use super::Session;
use crate::{
    catalog::Catalog,
    schedule::AnalysisSettings,
    store::{CsvPlanStore, PlanStore},
};

/// Builder for creating and configuring Session instances.
pub struct SessionBuilder {
    store: Option<Box<dyn PlanStore>>,
    catalog: Catalog,
    settings: AnalysisSettings,
    today: Option<Date>,
}

impl SessionBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            store: None,
            catalog: Catalog::default(),
            settings: AnalysisSettings::default(),
            today: None,
        }
    }

    /// Sets the store plans are loaded from and saved to.
    ///
    /// If not specified, plans are kept in files on disk.
    pub fn with_store(mut self, store: impl PlanStore + 'static) -> Self {
        self.store = Some(Box::new(store));
        self
    }

    /// Sets the projects offered by dependency intake.
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Sets the thresholds used by the schedule analysis.
    pub fn with_settings(mut self, settings: AnalysisSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Pins the day milestones are evaluated against.
    ///
    /// If not specified, the local calendar date is read whenever it is
    /// needed.
    pub fn with_today(mut self, today: Option<Date>) -> Self {
        self.today = today;
        self
    }

    /// Builds the configured session, starting at the welcome step.
    pub fn build(self) -> Session {
        let store = self
            .store
            .unwrap_or_else(|| Box::new(CsvPlanStore::new()));
        Session::new(store, self.catalog, self.settings, self.today)
    }
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}
