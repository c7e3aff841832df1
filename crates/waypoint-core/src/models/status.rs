//! Status enumerations for milestones.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of milestone schedule statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneStatus {
    /// Progress keeps up with the calendar
    OnTrack,

    /// Past due, or lagging the expected progress
    BehindSchedule,

    /// Past due and fully done
    Completed,

    /// Ends after the project target end date
    Critical,
}

impl FromStr for MilestoneStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['_', '-'], " ").trim() {
            "on track" => Ok(MilestoneStatus::OnTrack),
            "behind schedule" => Ok(MilestoneStatus::BehindSchedule),
            "completed" => Ok(MilestoneStatus::Completed),
            "critical" => Ok(MilestoneStatus::Critical),
            _ => Err(format!("Invalid milestone status: {s}")),
        }
    }
}

impl MilestoneStatus {
    /// Human readable label, as written to the status column.
    pub fn as_str(&self) -> &'static str {
        match self {
            MilestoneStatus::OnTrack => "On Track",
            MilestoneStatus::BehindSchedule => "Behind Schedule",
            MilestoneStatus::Completed => "Completed",
            MilestoneStatus::Critical => "Critical",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use waypoint_core::models::MilestoneStatus;
    ///
    /// assert_eq!(MilestoneStatus::Completed.with_icon(), "✓ Completed");
    /// assert_eq!(MilestoneStatus::Critical.with_icon(), "‼ Critical");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            MilestoneStatus::OnTrack => "➤ On Track",
            MilestoneStatus::BehindSchedule => "⚠ Behind Schedule",
            MilestoneStatus::Completed => "✓ Completed",
            MilestoneStatus::Critical => "‼ Critical",
        }
    }
}

/// Where a milestone sits on the program timeline, used to shade Gantt
/// bars.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TimelineState {
    /// Behind schedule
    Delayed,
    /// Finished and past its end date
    Completed,
    /// Today falls inside its date window
    InProgress,
    /// Anything else, typically not started yet
    Upcoming,
}

impl TimelineState {
    /// Character used to draw the bar of a milestone in this state.
    pub fn bar_char(&self) -> char {
        match self {
            TimelineState::Delayed => '▓',
            TimelineState::Completed => '█',
            TimelineState::InProgress => '▒',
            TimelineState::Upcoming => '░',
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimelineState::Delayed => "delayed",
            TimelineState::Completed => "completed",
            TimelineState::InProgress => "in progress",
            TimelineState::Upcoming => "upcoming",
        }
    }
}
