//! User actions the session reacts to.

use std::{fmt, path::PathBuf};

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, WaypointError},
    store::sheet::parse_date,
};

/// Input fields, bound to plan or session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    ProjectName,
    Description,
    Stakeholders,
    TargetEndDate,
    MilestoneCount,
    MilestoneName,
    MilestoneStartDate,
    MilestoneEndDate,
    MilestoneOwner,
    MilestoneProgress,
    MilestoneStatus,
    SelectedMilestone,
    Portfolio,
    SubPortfolio,
    DependentProject,
    DependencyStartDate,
    DependencyEndDate,
    DependencyProgress,
    Rating,
    Suggestion,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::ProjectName => "What is the name of your project?",
            Field::Description => "Can you describe your project briefly?",
            Field::Stakeholders => "Who are the key stakeholders involved in this project?",
            Field::TargetEndDate => "What is the target end date for your project? (YYYY-MM-DD)",
            Field::MilestoneCount => "How many milestones would you like to set up?",
            Field::MilestoneName => "Milestone Name",
            Field::MilestoneStartDate => "Start Date (YYYY-MM-DD)",
            Field::MilestoneEndDate => "End Date (YYYY-MM-DD)",
            Field::MilestoneOwner => "Milestone Owner",
            Field::MilestoneProgress => "Progress (0-100)",
            Field::MilestoneStatus => "Status",
            Field::SelectedMilestone => "Select Milestone",
            Field::Portfolio => "Portfolio",
            Field::SubPortfolio => "Sub-Portfolio",
            Field::DependentProject => "Dependent Project Plan Name",
            Field::DependencyStartDate => "Dependency Start Date (YYYY-MM-DD)",
            Field::DependencyEndDate => "Dependency End Date (YYYY-MM-DD)",
            Field::DependencyProgress => "Dependency Progress (0-100)",
            Field::Rating => "Rating (1-5)",
            Field::Suggestion => "Your Suggestions",
        }
    }

    /// Short name used in validation messages.
    pub fn name(&self) -> &'static str {
        match self {
            Field::ProjectName => "Project Name",
            Field::Description => "Description",
            Field::Stakeholders => "Stakeholders",
            Field::TargetEndDate => "Target End Date",
            Field::MilestoneCount => "Number of Milestones",
            Field::MilestoneName => "Milestone Name",
            Field::MilestoneStartDate => "Start Date",
            Field::MilestoneEndDate => "End Date",
            Field::MilestoneOwner => "Milestone Owner",
            Field::MilestoneProgress => "Progress",
            Field::MilestoneStatus => "Status",
            Field::SelectedMilestone => "Milestone",
            Field::Portfolio => "Portfolio",
            Field::SubPortfolio => "Sub-Portfolio",
            Field::DependentProject => "Dependent Project",
            Field::DependencyStartDate => "Dependency Start Date",
            Field::DependencyEndDate => "Dependency End Date",
            Field::DependencyProgress => "Dependency Progress",
            Field::Rating => "Rating",
            Field::Suggestion => "Suggestions",
        }
    }

    /// Parses an optional `YYYY-MM-DD` date; blank input clears the date.
    pub(crate) fn parse_date(self, value: &str) -> Result<Option<Date>> {
        let value = value.trim();
        if value.is_empty() {
            return Ok(None);
        }
        parse_date(value).map(Some).ok_or_else(|| {
            WaypointError::invalid_input(self.name())
                .with_reason(format!("'{value}' is not a date, use YYYY-MM-DD"))
        })
    }

    /// Parses a whole number within `min..=max`.
    pub(crate) fn parse_number(self, value: &str, min: u8, max: u8) -> Result<u8> {
        value
            .trim()
            .parse::<u8>()
            .ok()
            .filter(|n| (min..=max).contains(n))
            .ok_or_else(|| {
                WaypointError::invalid_input(self.name()).with_reason(format!(
                    "'{}' is not a whole number from {min} to {max}",
                    value.trim()
                ))
            })
    }
}

/// Radio choice of the milestone actions step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditMode {
    #[default]
    Add,
    Modify,
    Delete,
}

impl EditMode {
    pub fn label(&self) -> &'static str {
        match self {
            EditMode::Add => "Add New Milestone",
            EditMode::Modify => "Modify Existing Milestone",
            EditMode::Delete => "Delete Milestone",
        }
    }
}

/// Buttons; what a button does can depend on the step it is pressed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Button {
    CreateNew,
    AnalyzeExisting,
    ModifyExisting,
    Next,
    AddAnother,
    Proceed,
    ChooseEditMode(EditMode),
    AddMilestone,
    SaveMilestoneChanges,
    ConfirmDelete,
    AddDependency,
    Yes,
    No,
    AnalyzeIt,
    ProvideFeedback,
    LetsModify,
    AnalyzeModified,
    GoToFeedback,
    SubmitFeedback,
    RetrySave,
}

impl Button {
    pub fn label(&self) -> &'static str {
        match self {
            Button::CreateNew => "Create New Plan",
            Button::AnalyzeExisting => "Analyze Existing Plan",
            Button::ModifyExisting => "Modify Existing Plan",
            Button::Next => "Next",
            Button::AddAnother => "Add Another Milestone",
            Button::Proceed => "Proceed",
            Button::ChooseEditMode(mode) => mode.label(),
            Button::AddMilestone => "Add Milestone",
            Button::SaveMilestoneChanges => "Save Milestone Changes",
            Button::ConfirmDelete => "Confirm Delete",
            Button::AddDependency => "Add Dependency",
            Button::Yes => "Yes",
            Button::No => "No",
            Button::AnalyzeIt => "Analyze it",
            Button::ProvideFeedback => "Provide Feedback",
            Button::LetsModify => "Let's Modify it!",
            Button::AnalyzeModified => "Analyze Modified Plan",
            Button::GoToFeedback => "Go to Feedback",
            Button::SubmitFeedback => "Submit Feedback",
            Button::RetrySave => "Retry Save",
        }
    }
}

/// A single user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Typed or selected value for a field, committed immediately
    Input { field: Field, value: String },
    /// A button press
    Press(Button),
    /// A plan file handed in at an upload point
    Upload(PathBuf),
    /// Where to write the plan at the download point
    Download(PathBuf),
}

impl Action {
    pub fn input(field: Field, value: impl Into<String>) -> Self {
        Action::Input {
            field,
            value: value.into(),
        }
    }
}

impl From<Button> for Action {
    fn from(button: Button) -> Self {
        Action::Press(button)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Input { field, value } => write!(f, "{} = '{value}'", field.name()),
            Action::Press(button) => write!(f, "{}", button.label()),
            Action::Upload(path) => write!(f, "upload {}", path.display()),
            Action::Download(path) => write!(f, "download to {}", path.display()),
        }
    }
}
