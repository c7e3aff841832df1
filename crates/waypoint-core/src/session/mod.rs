//! Step controller for the planning conversation.
//!
//! A [`Session`] owns one conversation: the current [`Step`], the plan
//! being built or edited and the form state of the current step. Callers
//! drive it with two calls:
//!
//! - [`Session::view`] describes what to show: prompts, notices, the plan
//!   or its analysis, editable fields and the buttons on offer.
//! - [`Session::dispatch`] applies one [`Action`] and reports the
//!   [`Transition`] it caused.
//!
//! ```text
//!  0 ─┬─ Create ──▶ 3 ─▶ 3.1 ─▶ 4 (×N) ─▶ 5 ─▶ 6 ─▶ 6.1 ─▶ 7 ─▶ 7.1 ─▶ 8 ─▶ 13
//!     ├─ Analyze ─▶ 2 ─(upload)─▶ 7.1
//!     └─ Modify ──▶ 11 ─▶ 5 ─▶ 6 ─▶ 12 ─▶ 11.1 ─▶ 13
//!                         5 ─▶ 8.1 ─▶ 7 | 12
//!  13 ─ Submit ─▶ 0
//! ```
//!
//! A rejected action returns an error and leaves the step unchanged.
//! Input actions commit their value immediately, so nothing typed at a
//! step is lost when a button is pressed later.
//!
//! # Examples
//!
//! ```rust
//! use waypoint_core::{
//!     session::{Action, Button, Field, SessionBuilder, Step},
//!     store::MemoryPlanStore,
//! };
//!
//! let mut session = SessionBuilder::new()
//!     .with_store(MemoryPlanStore::new())
//!     .build();
//!
//! session.dispatch(Action::Press(Button::CreateNew))?;
//! session.dispatch(Action::input(Field::ProjectName, "Website Relaunch"))?;
//! let transition = session.dispatch(Action::Press(Button::Next))?;
//!
//! assert_eq!(transition.to, Step::MilestoneCount);
//! assert_eq!(session.plan().name, "Website Relaunch");
//! # Ok::<(), waypoint_core::WaypointError>(())
//! ```

use std::path::{Path, PathBuf};

use jiff::{civil::Date, Zoned};
use log::{debug, info, warn};

use crate::{
    catalog::Catalog,
    display::OperationStatus,
    error::{Result, WaypointError},
    models::{Milestone, Plan},
    schedule::AnalysisSettings,
    store::PlanStore,
};

pub mod action;
pub mod builder;
pub mod state;
pub mod step;
pub mod view;

mod edit_handlers;
mod intake_handlers;
mod wrapup_handlers;


pub use action::{Action, Button, EditMode, Field};
pub use builder::SessionBuilder;
pub use state::{DependencyDraft, SessionState};
pub use step::Step;
pub use view::{FieldSpec, FileExchange, View, ViewBody};

/// Step change caused by one dispatched action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: Step,
    pub to: Step,
}

impl Transition {
    /// Whether the action moved the conversation to another step.
    pub fn moved(&self) -> bool {
        self.from != self.to
    }
}

/// One planning conversation.
pub struct Session {
    state: SessionState,
    store: Box<dyn PlanStore>,
    catalog: Catalog,
    settings: AnalysisSettings,
    today: Option<Date>,
}

impl Session {
    pub(crate) fn new(
        store: Box<dyn PlanStore>,
        catalog: Catalog,
        settings: AnalysisSettings,
        today: Option<Date>,
    ) -> Self {
        Self {
            state: SessionState::default(),
            store,
            catalog,
            settings,
            today,
        }
    }

    pub fn step(&self) -> Step {
        self.state.current_step
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn plan(&self) -> &Plan {
        &self.state.plan
    }

    /// The day milestones are evaluated against: the fixed day given to the
    /// builder, otherwise the local calendar date.
    pub fn today(&self) -> Date {
        self.today.unwrap_or_else(|| Zoned::now().date())
    }

    /// Applies one action at the current step.
    ///
    /// # Errors
    ///
    /// Returns `WaypointError::ActionUnavailable` when the step does not
    /// offer the action, `WaypointError::InvalidInput` when a value or a
    /// form fails validation, and file errors when loading or saving fails.
    /// The step is left unchanged in every case.
    pub fn dispatch(&mut self, action: Action) -> Result<Transition> {
        let from = self.state.current_step;
        debug!("Step {from}: {action}");

        let outcome = match from {
            Step::Welcome => self.on_welcome(action),
            Step::AnalyzeUpload => self.on_analyze_upload(action),
            Step::NewPlan => self.on_new_plan(action),
            Step::MilestoneCount => self.on_milestone_count(action),
            Step::MilestoneEntry => self.on_milestone_entry(action),
            Step::ModifyUpload => self.on_modify_upload(action),
            Step::EditMilestones => self.on_edit_milestones(action),
            Step::ReviewPrompt => self.on_review_prompt(action),
            Step::ReviewMilestones => self.on_review_milestones(action),
            Step::DependencyIntake => self.on_dependency_intake(action),
            Step::Download => self.on_download(action),
            Step::Analysis => self.on_analysis(action),
            Step::AnalysisComplete => self.on_analysis_complete(action),
            Step::ModifiedAnalysis => self.on_modified_analysis(action),
            Step::AutoSave => self.on_auto_save(action),
            Step::Feedback => self.on_feedback(action),
        };

        match outcome {
            Ok(()) => {
                let to = self.state.current_step;
                if to != from {
                    info!("Moved from step {from} to step {to}");
                }
                Ok(Transition { from, to })
            }
            Err(e) => {
                warn!("Rejected action at step {from}: {e}");
                Err(e)
            }
        }
    }

    /// Buttons offered at the current step.
    pub fn choices(&self) -> Vec<Button> {
        let state = &self.state;
        match state.current_step {
            Step::Welcome => vec![
                Button::CreateNew,
                Button::AnalyzeExisting,
                Button::ModifyExisting,
            ],
            Step::AnalyzeUpload => Vec::new(),
            Step::NewPlan => vec![Button::Next],
            Step::MilestoneCount => {
                if state.milestone_count > 0 {
                    vec![Button::Next]
                } else {
                    Vec::new()
                }
            }
            Step::MilestoneEntry => {
                if self.is_last_entry() {
                    vec![Button::Proceed]
                } else {
                    vec![Button::AddAnother]
                }
            }
            Step::ModifyUpload => {
                if state.source_path.is_some() {
                    vec![Button::LetsModify]
                } else {
                    Vec::new()
                }
            }
            Step::EditMilestones => {
                let mut buttons: Vec<Button> = [EditMode::Add, EditMode::Modify, EditMode::Delete]
                    .into_iter()
                    .filter(|mode| *mode != state.edit_mode)
                    .map(Button::ChooseEditMode)
                    .collect();
                match state.edit_mode {
                    EditMode::Add => buttons.push(Button::AddMilestone),
                    EditMode::Modify if state.selected().is_some() => {
                        buttons.push(Button::SaveMilestoneChanges)
                    }
                    EditMode::Delete if state.selected().is_some() => {
                        buttons.push(Button::ConfirmDelete)
                    }
                    _ => {}
                }
                buttons.push(Button::AddDependency);
                buttons.push(Button::Next);
                buttons
            }
            Step::ReviewPrompt | Step::ReviewMilestones => vec![Button::Yes, Button::No],
            Step::DependencyIntake => {
                if state.dependency_added {
                    vec![Button::AddDependency, Button::Next]
                } else {
                    vec![Button::AddDependency]
                }
            }
            Step::Download => vec![Button::AnalyzeIt, Button::ProvideFeedback],
            Step::Analysis => vec![Button::Next],
            Step::AnalysisComplete => vec![Button::ProvideFeedback],
            Step::ModifiedAnalysis => vec![Button::GoToFeedback],
            Step::AutoSave => {
                if state.save_error.is_some() {
                    vec![Button::RetrySave]
                } else {
                    vec![Button::AnalyzeModified, Button::ProvideFeedback]
                }
            }
            Step::Feedback => vec![Button::SubmitFeedback],
        }
    }

    /// Moves to `step` and runs whatever happens on arrival there.
    fn go_to(&mut self, step: Step) {
        self.state.current_step = step;
        match step {
            Step::MilestoneEntry => self.ensure_entry_milestone(),
            Step::EditMilestones => self.prepare_edit_milestones(),
            Step::DependencyIntake => self.prepare_dependency_intake(),
            Step::AutoSave => self.auto_save(),
            _ => {}
        }
    }

    fn unavailable(&self, action: Action) -> WaypointError {
        WaypointError::unavailable(self.state.current_step, action)
    }

    fn is_last_entry(&self) -> bool {
        self.state.milestone_index + 1 >= self.state.milestone_count
    }

    /// Reads a plan through the store and makes it the session plan.
    ///
    /// The current plan is kept when loading fails.
    fn load_plan(&mut self, path: PathBuf) -> Result<()> {
        let plan = self.store.load(&path)?;
        debug!("Session plan replaced by {}", path.display());
        self.state.plan = plan;
        self.state.source_path = Some(path);
        self.state.selected_milestone = None;
        self.state
            .notify(OperationStatus::success("Project plan loaded successfully!"));
        Ok(())
    }

    fn save_plan(&mut self, path: &Path) -> Result<()> {
        self.store.save(&self.state.plan, path)?;
        self.state.notify(OperationStatus::success(format!(
            "Project plan saved to '{}'!",
            path.display()
        )));
        Ok(())
    }

    /// Saves to the file the plan was loaded from, if there is one.
    fn save_to_source(&mut self) -> Result<bool> {
        match self.state.source_path.clone() {
            Some(path) => self.save_plan(&path).map(|()| true),
            None => Ok(false),
        }
    }

    fn blank_milestone(&self) -> Milestone {
        Milestone::blank(self.today())
    }
}

/// Checks that a milestone can be committed to the plan.
fn validate_milestone(milestone: &Milestone) -> Result<()> {
    if milestone.name.trim().is_empty() {
        return Err(WaypointError::invalid_input(Field::MilestoneName.name())
            .with_reason("please enter a milestone name"));
    }
    if let Some((start, end)) = milestone.dates() {
        if start > end {
            return Err(WaypointError::invalid_input(Field::MilestoneEndDate.name())
                .with_reason(format!(
                    "milestone '{}' ends on {end}, before it starts on {start}",
                    milestone.name
                )));
        }
    }
    Ok(())
}

/// Writes one milestone form field. Blank dates fall back to `today`.
fn apply_milestone_field(
    milestone: &mut Milestone,
    field: Field,
    value: &str,
    today: Date,
) -> Result<()> {
    match field {
        Field::MilestoneName => milestone.name = value.trim().to_string(),
        Field::MilestoneStartDate => {
            milestone.start_date = Some(field.parse_date(value)?.unwrap_or(today))
        }
        Field::MilestoneEndDate => {
            milestone.end_date = Some(field.parse_date(value)?.unwrap_or(today))
        }
        Field::MilestoneOwner => milestone.owner = value.to_string(),
        Field::MilestoneProgress => milestone.progress = field.parse_number(value, 0, 100)?,
        Field::MilestoneStatus => milestone.status = value.trim().to_string(),
        _ => {
            return Err(WaypointError::invalid_input(field.name())
                .with_reason("this field is not part of a milestone"))
        }
    }
    Ok(())
}
