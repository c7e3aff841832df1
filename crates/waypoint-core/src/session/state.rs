//! Per-conversation state.

use std::path::PathBuf;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{EditMode, Step};
use crate::{
    display::OperationStatus,
    models::{Milestone, Plan},
};

/// Dependency intake form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DependencyDraft {
    pub portfolio: Option<String>,
    pub sub_portfolio: Option<String>,
    pub project: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub progress: u8,
}

/// Everything one conversation remembers between actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub current_step: Step,
    pub plan: Plan,

    /// File the plan was loaded from; saves go back here
    pub source_path: Option<PathBuf>,

    /// Last file the plan was downloaded to
    pub exported_to: Option<PathBuf>,

    /// Number of milestones asked for at the count step, 0 while unset
    pub milestone_count: usize,

    /// Milestone currently shown by the entry loop
    pub milestone_index: usize,

    pub edit_mode: EditMode,

    /// Milestone picked for modify or delete
    pub selected_milestone: Option<usize>,

    /// Add-new form of the milestone actions step
    pub draft: Milestone,

    pub dependency: DependencyDraft,

    /// Set once a dependency milestone was added at the current intake
    pub dependency_added: bool,

    pub rating: u8,
    pub suggestion: String,

    /// Reason the last save at the auto-save step failed
    pub save_error: Option<String>,

    /// Notices for the next rendered view
    pub(crate) notices: Vec<OperationStatus>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            current_step: Step::default(),
            plan: Plan::new(),
            source_path: None,
            exported_to: None,
            milestone_count: 0,
            milestone_index: 0,
            edit_mode: EditMode::default(),
            selected_milestone: None,
            draft: Milestone::default(),
            dependency: DependencyDraft::default(),
            dependency_added: false,
            rating: 3,
            suggestion: String::new(),
            save_error: None,
            notices: Vec::new(),
        }
    }
}

impl SessionState {
    /// The milestone picked for modify or delete, if it still exists.
    pub fn selected(&self) -> Option<&Milestone> {
        self.selected_milestone
            .and_then(|index| self.plan.milestones.get(index))
    }

    pub(crate) fn notify(&mut self, status: OperationStatus) {
        self.notices.push(status);
    }

    /// Notices queued since the last view, oldest first.
    pub fn pending_notices(&self) -> &[OperationStatus] {
        &self.notices
    }
}
