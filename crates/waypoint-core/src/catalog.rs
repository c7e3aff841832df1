//! Catalog of other projects a plan can depend on.
//!
//! Dependency intake narrows the choice in three levels: portfolio, then
//! sub-portfolio, then project. All listings keep the catalog order and
//! drop duplicates.

use serde::{Deserialize, Serialize};

/// One project known to the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogEntry {
    pub portfolio: String,
    pub sub_portfolio: String,
    pub project: String,
}

impl CatalogEntry {
    pub fn new(
        portfolio: impl Into<String>,
        sub_portfolio: impl Into<String>,
        project: impl Into<String>,
    ) -> Self {
        Self {
            portfolio: portfolio.into(),
            sub_portfolio: sub_portfolio.into(),
            project: project.into(),
        }
    }
}

/// Projects available for dependency intake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

fn unique<'a>(values: impl Iterator<Item = &'a String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for value in values {
        if !seen.contains(value) {
            seen.push(value.clone());
        }
    }
    seen
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// The sample projects shipped with the application.
    pub fn sample_entries() -> Vec<CatalogEntry> {
        vec![
            CatalogEntry::new("Portfolio A", "Sub-Portfolio 1", "Project 1"),
            CatalogEntry::new("Portfolio A", "Sub-Portfolio 2", "Project 2"),
            CatalogEntry::new("Portfolio A", "Sub-Portfolio 3", "Project 3"),
            CatalogEntry::new("Portfolio B", "Sub-Portfolio 4", "Project 4"),
            CatalogEntry::new("Portfolio B", "Sub-Portfolio 5", "Project 5"),
        ]
    }

    pub fn portfolios(&self) -> Vec<String> {
        unique(self.entries.iter().map(|e| &e.portfolio))
    }

    pub fn sub_portfolios(&self, portfolio: &str) -> Vec<String> {
        unique(
            self.entries
                .iter()
                .filter(|e| e.portfolio == portfolio)
                .map(|e| &e.sub_portfolio),
        )
    }

    pub fn projects(&self, portfolio: &str, sub_portfolio: &str) -> Vec<String> {
        unique(
            self.entries
                .iter()
                .filter(|e| e.portfolio == portfolio && e.sub_portfolio == sub_portfolio)
                .map(|e| &e.project),
        )
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(Self::sample_entries())
    }
}
