//! Display implementations for domain models.
//!
//! This module contains all Display trait implementations for the core domain
//! models, separated from the model definitions to maintain clean separation of
//! concerns. Output is markdown for rich terminal display.

use std::fmt;

use super::{
    charts::{GanttChart, ProgressChart},
    collections::{table_cell, MilestoneStatuses, Milestones, Warnings},
    datetime::OptionalDate,
};
use crate::models::{
    Milestone, MilestoneStatus, Plan, PlanAnalysis, ProgramDuration, TimelineState,
};

impl fmt::Display for MilestoneStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for TimelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One row of the milestone table.
impl fmt::Display for Milestone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "| {} | {} | {} | {} | {}% | {} |",
            table_cell(&self.name),
            OptionalDate(self.start_date),
            OptionalDate(self.end_date),
            table_cell(&self.owner),
            self.progress,
            table_cell(&self.status),
        )
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.name)?;
        writeln!(f)?;

        // Metadata section
        writeln!(f, "- Description: {}", self.description)?;
        writeln!(f, "- Stakeholders: {}", self.stakeholders)?;
        writeln!(f, "- Target End Date: {}", OptionalDate(self.target_end_date))?;

        writeln!(f, "\n## Milestones")?;
        writeln!(f)?;
        write!(f, "{}", Milestones(&self.milestones))
    }
}

impl fmt::Display for ProgramDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Your project is planned to run from {} to {}, a total of {} days.",
            self.start, self.end, self.days
        )
    }
}

impl fmt::Display for PlanAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.duration)?;
        writeln!(f)?;
        writeln!(
            f,
            "{} on track, {} behind schedule, {} completed, {} critical (as of {}).",
            self.count(MilestoneStatus::OnTrack),
            self.count(MilestoneStatus::BehindSchedule),
            self.count(MilestoneStatus::Completed),
            self.count(MilestoneStatus::Critical),
            self.today
        )?;

        if !self.delay_warnings.is_empty() {
            writeln!(f, "\n## Project Warnings")?;
            writeln!(f)?;
            write!(f, "{}", Warnings(&self.delay_warnings))?;
        }

        writeln!(f, "\n## Milestone Status")?;
        writeln!(f)?;
        write!(f, "{}", MilestoneStatuses(&self.milestones))?;

        writeln!(f, "\n## Program Plan")?;
        writeln!(f)?;
        writeln!(f, "```text")?;
        write!(f, "{}", GanttChart(self))?;
        writeln!(f, "```")?;

        writeln!(f, "\n## Milestone Progress")?;
        writeln!(f)?;
        writeln!(f, "```text")?;
        write!(f, "{}", ProgressChart(self))?;
        writeln!(f, "```")
    }
}
