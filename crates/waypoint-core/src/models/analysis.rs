//! Analyzer output records.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{MilestoneStatus, TimelineState};

/// Overall span of a program, from the earliest milestone start to the
/// latest milestone end.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProgramDuration {
    pub start: Date,
    pub end: Date,
    /// Whole days between `start` and `end`
    pub days: i64,
}

/// Schedule assessment of a single milestone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MilestoneAnalysis {
    pub name: String,
    pub status: MilestoneStatus,
    /// Explanation for non on-track statuses
    pub warning: Option<String>,
    /// Time-elapsed benchmark percentage, never above 100
    pub expected_progress: f64,
    pub actual_progress: u8,
    pub start_date: Date,
    pub end_date: Date,
    /// Behind schedule and at least the configured number of days past due
    pub significant_delay: bool,
    pub timeline: TimelineState,
}

/// Schedule assessment of a whole plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanAnalysis {
    pub duration: ProgramDuration,
    pub milestones: Vec<MilestoneAnalysis>,
    /// Warnings of significantly delayed milestones only
    pub delay_warnings: Vec<String>,
    /// Day the analysis was computed for
    pub today: Date,
}

impl PlanAnalysis {
    /// Number of milestones with the given status.
    pub fn count(&self, status: MilestoneStatus) -> usize {
        self.milestones.iter().filter(|m| m.status == status).count()
    }
}
