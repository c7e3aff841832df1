//! Milestone model definition and related functionality.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// Prefix of the synthetic milestones created for cross-project
/// dependencies.
pub const DEPENDENCY_PREFIX: &str = "d - Dependency on ";

/// Represents a single milestone within a plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Milestone {
    /// Name of the milestone
    pub name: String,

    /// First day of work on the milestone
    pub start_date: Option<Date>,

    /// Day the milestone is due
    pub end_date: Option<Date>,

    /// Person responsible for the milestone
    pub owner: String,

    /// Completion percentage, 0 to 100
    pub progress: u8,

    /// Status text cached in the plan file (may be empty)
    #[serde(default)]
    pub status: String,
}

impl Milestone {
    /// A fresh milestone as presented by an empty entry form: both dates
    /// default to `today` and progress starts at zero.
    pub fn blank(today: Date) -> Self {
        Self {
            start_date: Some(today),
            end_date: Some(today),
            ..Self::default()
        }
    }

    /// Builds the synthetic milestone that records a dependency on another
    /// project.
    pub fn dependency(project: &str, start_date: Date, end_date: Date, progress: u8) -> Self {
        Self {
            name: format!("{DEPENDENCY_PREFIX}{project}"),
            start_date: Some(start_date),
            end_date: Some(end_date),
            owner: "N/A".to_string(),
            progress,
            status: String::new(),
        }
    }

    /// Both dates, if the milestone has them.
    pub fn dates(&self) -> Option<(Date, Date)> {
        Some((self.start_date?, self.end_date?))
    }
}
