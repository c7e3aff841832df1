//! Collection wrapper types for displaying groups of domain objects.
//!
//! This module provides wrapper types that format collections of domain objects
//! with consistent structure and empty collection handling.

use std::fmt;

use super::datetime::OptionalDate;
use crate::models::{Milestone, MilestoneAnalysis};

/// Keeps user text from breaking a markdown table row.
pub(crate) fn table_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

/// Newtype wrapper for displaying milestones as a markdown table.
///
/// # Examples
///
/// ```rust
/// use jiff::civil::date;
/// use waypoint_core::{display::Milestones, models::Milestone};
///
/// let milestones = vec![Milestone {
///     name: "Design".to_string(),
///     start_date: Some(date(2024, 1, 1)),
///     end_date: Some(date(2024, 1, 11)),
///     owner: "Ana".to_string(),
///     progress: 40,
///     status: String::new(),
/// }];
///
/// let output = Milestones(&milestones).to_string();
/// assert!(output.contains("| Design | 2024-01-01 | 2024-01-11 | Ana | 40% |"));
/// ```
pub struct Milestones<'a>(pub &'a [Milestone]);

impl fmt::Display for Milestones<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No milestones in this plan.");
        }
        writeln!(f, "| Milestone | Start Date | End Date | Owner | Progress | Status |")?;
        writeln!(f, "|---|---|---|---|---:|---|")?;
        for milestone in self.0 {
            write!(f, "{milestone}")?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying the per-milestone analysis table.
pub struct MilestoneStatuses<'a>(pub &'a [MilestoneAnalysis]);

impl fmt::Display for MilestoneStatuses<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No milestones to analyze.");
        }
        writeln!(
            f,
            "| Milestone | Status | Expected Progress | Actual Progress | Start Date | End Date |"
        )?;
        writeln!(f, "|---|---|---:|---:|---|---|")?;
        for milestone in self.0 {
            writeln!(
                f,
                "| {} | {} | {:.2}% | {}% | {} | {} |",
                table_cell(&milestone.name),
                milestone.status.with_icon(),
                milestone.expected_progress,
                milestone.actual_progress,
                OptionalDate(Some(milestone.start_date)),
                OptionalDate(Some(milestone.end_date)),
            )?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying a list of warnings.
pub struct Warnings<'a>(pub &'a [String]);

impl fmt::Display for Warnings<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No warnings.");
        }
        for warning in self.0 {
            writeln!(f, "- ⚠ {warning}")?;
        }
        Ok(())
    }
}
