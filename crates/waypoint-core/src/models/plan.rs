//! Plan model definition and related functionality.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::Milestone;

/// Represents a complete project plan with its milestones.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    /// Name of the project
    pub name: String,

    /// Short free-text description of the project
    pub description: String,

    /// Key stakeholders, as typed by the user
    pub stakeholders: String,

    /// Date the whole project should be finished by
    pub target_end_date: Option<Date>,

    /// Milestones in display and file row order
    #[serde(default)]
    pub milestones: Vec<Milestone>,
}

impl Plan {
    /// Creates an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Position of the first milestone with the given name.
    pub fn milestone_index(&self, name: &str) -> Option<usize> {
        self.milestones.iter().position(|m| m.name == name)
    }

    /// Removes the first milestone with the given name.
    ///
    /// Later milestones that share the name are left in place and the
    /// relative order of the remaining milestones is preserved.
    pub fn remove_milestone(&mut self, name: &str) -> Option<Milestone> {
        let index = self.milestone_index(name)?;
        Some(self.milestones.remove(index))
    }

    /// Names of all milestones, in order.
    pub fn milestone_names(&self) -> Vec<String> {
        self.milestones.iter().map(|m| m.name.clone()).collect()
    }

    /// File name offered when the plan is downloaded.
    ///
    /// Path separators and other characters that are not allowed in file
    /// names become `_`, so the name never leaves the download directory.
    pub fn suggested_file_name(&self) -> String {
        let stem: String = self
            .name
            .trim()
            .chars()
            .map(|c| match c {
                '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
                c if c.is_control() => '_',
                c => c,
            })
            .collect();
        if stem.is_empty() || stem.chars().all(|c| c == '.') {
            "project_plan.csv".to_string()
        } else {
            format!("{stem}.csv")
        }
    }
}
