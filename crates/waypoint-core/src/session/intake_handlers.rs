//! Handlers for the opening steps: the welcome menu, the upload points and
//! the guided entry of a new plan.

use log::debug;

use super::{
    apply_milestone_field, validate_milestone, Action, Button, Field, Session, SessionState, Step,
};
use crate::{
    display::OperationStatus,
    error::{Result, WaypointError},
};

impl Session {
    pub(super) fn on_welcome(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Press(Button::CreateNew) => {
                self.start_over();
                self.go_to(Step::NewPlan);
            }
            Action::Press(Button::AnalyzeExisting) => {
                self.start_over();
                self.go_to(Step::AnalyzeUpload);
            }
            Action::Press(Button::ModifyExisting) => {
                self.start_over();
                self.go_to(Step::ModifyUpload);
            }
            other => return Err(self.unavailable(other)),
        }
        Ok(())
    }

    /// Forgets the plan of a previous round. Feedback answers are kept.
    fn start_over(&mut self) {
        let rating = self.state.rating;
        let suggestion = std::mem::take(&mut self.state.suggestion);
        let notices = std::mem::take(&mut self.state.notices);
        self.state = SessionState {
            rating,
            suggestion,
            notices,
            ..SessionState::default()
        };
    }

    pub(super) fn on_analyze_upload(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Upload(path) => {
                self.load_plan(path)?;
                self.go_to(Step::Analysis);
                Ok(())
            }
            other => Err(self.unavailable(other)),
        }
    }

    pub(super) fn on_modify_upload(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Upload(path) => self.load_plan(path),
            Action::Press(Button::LetsModify) => {
                if self.state.source_path.is_none() {
                    return Err(WaypointError::NoSourceFile);
                }
                self.go_to(Step::EditMilestones);
                Ok(())
            }
            other => Err(self.unavailable(other)),
        }
    }

    pub(super) fn on_new_plan(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Input { field, value } => {
                let plan = &mut self.state.plan;
                match field {
                    Field::ProjectName => plan.name = value.trim().to_string(),
                    Field::Description => plan.description = value,
                    Field::Stakeholders => plan.stakeholders = value,
                    Field::TargetEndDate => plan.target_end_date = field.parse_date(&value)?,
                    _ => return Err(self.unavailable(Action::Input { field, value })),
                }
                Ok(())
            }
            Action::Press(Button::Next) => {
                if self.state.plan.name.is_empty() {
                    return Err(WaypointError::invalid_input(Field::ProjectName.name())
                        .with_reason("please enter a project name"));
                }
                self.go_to(Step::MilestoneCount);
                Ok(())
            }
            other => Err(self.unavailable(other)),
        }
    }

    pub(super) fn on_milestone_count(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Input {
                field: Field::MilestoneCount,
                value,
            } => {
                // A rejected entry clears the count so Next stays unavailable.
                self.state.milestone_count = 0;
                let count: i64 = value.trim().parse().map_err(|_| {
                    self.warn_invalid_count("Please enter a valid integer.")
                })?;
                if count <= 0 {
                    return Err(self.warn_invalid_count("Please enter a positive integer."));
                }
                let count = usize::try_from(count)
                    .map_err(|_| self.warn_invalid_count("Please enter a smaller number."))?;
                self.state.milestone_count = count;
                Ok(())
            }
            Action::Press(Button::Next) => {
                if self.state.milestone_count == 0 {
                    return Err(WaypointError::invalid_input(Field::MilestoneCount.name())
                        .with_reason("please enter how many milestones you need"));
                }
                self.state.milestone_index = 0;
                self.go_to(Step::MilestoneEntry);
                Ok(())
            }
            other => Err(self.unavailable(other)),
        }
    }

    fn warn_invalid_count(&mut self, message: &str) -> WaypointError {
        self.state.notify(OperationStatus::warning(message));
        WaypointError::invalid_input(Field::MilestoneCount.name()).with_reason(message)
    }

    pub(super) fn on_milestone_entry(&mut self, action: Action) -> Result<()> {
        match action {
            // Status is only edited later, from the milestone actions step
            Action::Input { field, value } if field != Field::MilestoneStatus => {
                let today = self.today();
                let index = self.state.milestone_index;
                match self.state.plan.milestones.get_mut(index) {
                    Some(milestone) => apply_milestone_field(milestone, field, &value, today),
                    None => Err(self.unavailable(Action::Input { field, value })),
                }
            }
            Action::Press(Button::AddAnother) if !self.is_last_entry() => {
                self.validate_entry_milestone()?;
                self.state.milestone_index += 1;
                self.go_to(Step::MilestoneEntry);
                Ok(())
            }
            Action::Press(Button::Proceed) if self.is_last_entry() => {
                self.validate_entry_milestone()?;
                self.go_to(Step::EditMilestones);
                Ok(())
            }
            other => Err(self.unavailable(other)),
        }
    }

    fn validate_entry_milestone(&self) -> Result<()> {
        match self.state.plan.milestones.get(self.state.milestone_index) {
            Some(milestone) => validate_milestone(milestone),
            None => Ok(()),
        }
    }

    /// Makes sure the milestone shown by the entry loop exists in the plan.
    pub(super) fn ensure_entry_milestone(&mut self) {
        let index = self.state.milestone_index;
        while self.state.plan.milestones.len() <= index {
            let blank = self.blank_milestone();
            self.state.plan.milestones.push(blank);
        }
        debug!(
            "Entering milestone {} of {}",
            index + 1,
            self.state.milestone_count
        );
    }
}
