//! Schedule analysis for project plans.
//!
//! The analyzer is a set of pure functions over [`Milestone`] records. It
//! never reads the clock itself: every entry point takes `today` so the
//! session (or a test) decides which day is being evaluated.
//!
//! # Status Resolution
//!
//! For each milestone the first matching rule wins:
//!
//! 1. ends after the plan target end date: [`MilestoneStatus::Critical`]
//! 2. ended before today: [`MilestoneStatus::Completed`] at 100% progress,
//!    otherwise [`MilestoneStatus::BehindSchedule`]
//! 3. today inside the date window and progress more than the tolerance
//!    below the expected progress: [`MilestoneStatus::BehindSchedule`]
//! 4. otherwise [`MilestoneStatus::OnTrack`]
//!
//! # Examples
//!
//! ```rust
//! use jiff::civil::date;
//! use waypoint_core::{
//!     models::{Milestone, MilestoneStatus},
//!     schedule::{analyze_milestone_progress, AnalysisSettings},
//! };
//!
//! let milestone = Milestone {
//!     name: "Design".to_string(),
//!     start_date: Some(date(2024, 1, 1)),
//!     end_date: Some(date(2024, 1, 11)),
//!     owner: "Ana".to_string(),
//!     progress: 40,
//!     status: String::new(),
//! };
//!
//! let assessment = analyze_milestone_progress(
//!     &milestone,
//!     None,
//!     date(2024, 1, 6),
//!     &AnalysisSettings::default(),
//! )?;
//! assert_eq!(assessment.status, MilestoneStatus::OnTrack);
//! assert_eq!(assessment.expected_progress, 50.0);
//! # Ok::<(), waypoint_core::WaypointError>(())
//! ```

use jiff::civil::Date;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, WaypointError},
    models::{
        Milestone, MilestoneAnalysis, MilestoneStatus, Plan, PlanAnalysis, ProgramDuration,
        TimelineState,
    },
};

#[cfg(test)]
mod tests;

/// Thresholds used when classifying milestones.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AnalysisSettings {
    /// Percentage points a running milestone may lag its expected progress
    /// before it counts as behind schedule
    pub behind_tolerance: f64,

    /// Days past the end date after which a behind-schedule milestone is
    /// reported as a significant delay
    pub significant_delay_days: i64,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            behind_tolerance: 10.0,
            significant_delay_days: 7,
        }
    }
}

/// Result of assessing one milestone against the calendar.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressAssessment {
    pub status: MilestoneStatus,
    pub warning: Option<String>,
    pub expected_progress: f64,
}

/// Whole days from `from` to `to`, negative when `to` is earlier.
pub fn days_between(from: Date, to: Date) -> i64 {
    i64::from((to - from).get_days())
}

fn milestone_dates(milestone: &Milestone) -> Result<(Date, Date)> {
    milestone.dates().ok_or_else(|| WaypointError::MissingDates {
        milestone: milestone.name.clone(),
    })
}

/// Computes the earliest start, the latest end and the whole-day span of a
/// list of milestones.
///
/// # Errors
///
/// Returns `WaypointError::EmptySchedule` for an empty list and
/// `WaypointError::MissingDates` naming the first milestone that lacks a
/// start or end date.
pub fn calculate_program_duration(milestones: &[Milestone]) -> Result<ProgramDuration> {
    let mut bounds: Option<(Date, Date)> = None;
    for milestone in milestones {
        let (start, end) = milestone_dates(milestone)?;
        bounds = Some(match bounds {
            Some((earliest, latest)) => (earliest.min(start), latest.max(end)),
            None => (start, end),
        });
    }

    let (start, end) = bounds.ok_or(WaypointError::EmptySchedule)?;
    Ok(ProgramDuration {
        start,
        end,
        days: days_between(start, end),
    })
}

/// Percentage of the milestone window that has elapsed by `today`.
///
/// Capped at 100. A milestone whose window is zero days long is expected
/// to be complete. The value is negative before the window opens.
pub fn expected_progress(start: Date, end: Date, today: Date) -> f64 {
    let total = days_between(start, end);
    if total <= 0 {
        return 100.0;
    }
    let elapsed = days_between(start, today);
    (elapsed as f64 / total as f64 * 100.0).min(100.0)
}

/// Classifies a milestone and explains the classification.
///
/// # Errors
///
/// Returns `WaypointError::MissingDates` when the milestone lacks a start or
/// end date.
pub fn analyze_milestone_progress(
    milestone: &Milestone,
    target_end_date: Option<Date>,
    today: Date,
    settings: &AnalysisSettings,
) -> Result<ProgressAssessment> {
    let (start, end) = milestone_dates(milestone)?;
    let expected = expected_progress(start, end, today);
    let progress = f64::from(milestone.progress);
    let name = &milestone.name;

    let (status, warning) = match target_end_date {
        Some(target) if end > target => (
            MilestoneStatus::Critical,
            Some(format!(
                "Milestone '{name}' end date is after the project target end date."
            )),
        ),
        _ if end < today => {
            if milestone.progress == 100 {
                (MilestoneStatus::Completed, None)
            } else {
                (
                    MilestoneStatus::BehindSchedule,
                    Some(format!(
                        "Milestone '{name}' is past its end date and not 100% complete."
                    )),
                )
            }
        }
        _ if start <= today && today <= end && progress < expected - settings.behind_tolerance => (
            MilestoneStatus::BehindSchedule,
            Some(format!(
                "Milestone '{name}' is behind schedule! It should be at about {expected:.2}% progress."
            )),
        ),
        _ => (MilestoneStatus::OnTrack, None),
    };

    Ok(ProgressAssessment {
        status,
        warning,
        expected_progress: expected,
    })
}

/// Whether a behind-schedule milestone is late enough to be surfaced in the
/// aggregate warning list.
pub fn is_significant_delay(
    status: MilestoneStatus,
    end_date: Date,
    today: Date,
    settings: &AnalysisSettings,
) -> bool {
    status == MilestoneStatus::BehindSchedule
        && days_between(end_date, today) >= settings.significant_delay_days
}

/// Places a milestone on the program timeline for chart shading.
pub fn timeline_state(
    status: MilestoneStatus,
    milestone: &Milestone,
    start: Date,
    end: Date,
    today: Date,
) -> TimelineState {
    if status == MilestoneStatus::BehindSchedule {
        TimelineState::Delayed
    } else if end < today && milestone.progress == 100 {
        TimelineState::Completed
    } else if start <= today && today <= end {
        TimelineState::InProgress
    } else {
        TimelineState::Upcoming
    }
}

/// Analyzes every milestone of a plan.
///
/// # Errors
///
/// Fails fast with `WaypointError::EmptySchedule` or
/// `WaypointError::MissingDates` instead of guessing dates.
pub fn analyze_plan(plan: &Plan, today: Date, settings: &AnalysisSettings) -> Result<PlanAnalysis> {
    let duration = calculate_program_duration(&plan.milestones)?;

    let mut milestones = Vec::with_capacity(plan.milestones.len());
    let mut delay_warnings = Vec::new();
    for milestone in &plan.milestones {
        let (start, end) = milestone_dates(milestone)?;
        let assessment =
            analyze_milestone_progress(milestone, plan.target_end_date, today, settings)?;
        let significant_delay = is_significant_delay(assessment.status, end, today, settings);
        if significant_delay {
            if let Some(warning) = &assessment.warning {
                delay_warnings.push(warning.clone());
            }
        }

        debug!(
            "Milestone '{}' is {} (expected {:.2}%, actual {}%)",
            milestone.name,
            assessment.status.as_str(),
            assessment.expected_progress,
            milestone.progress
        );

        milestones.push(MilestoneAnalysis {
            name: milestone.name.clone(),
            status: assessment.status,
            warning: assessment.warning,
            expected_progress: assessment.expected_progress,
            actual_progress: milestone.progress,
            start_date: start,
            end_date: end,
            significant_delay,
            timeline: timeline_state(assessment.status, milestone, start, end, today),
        });
    }

    Ok(PlanAnalysis {
        duration,
        milestones,
        delay_warnings,
        today,
    })
}
