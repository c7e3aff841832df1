//! Handlers for editing a plan: milestone actions, the review prompts and
//! dependency intake.

use log::info;

use super::{
    apply_milestone_field, validate_milestone, Action, Button, DependencyDraft, EditMode, Field,
    Session, Step,
};
use crate::{
    display::OperationStatus,
    error::{Result, WaypointError},
    models::Milestone,
};

impl Session {
    /// Keeps the modify/delete selection pointing at an existing milestone,
    /// defaulting to the first one.
    pub(super) fn prepare_edit_milestones(&mut self) {
        let len = self.state.plan.milestones.len();
        self.state.selected_milestone = match self.state.selected_milestone {
            Some(index) if index < len => Some(index),
            _ if len > 0 => Some(0),
            _ => None,
        };
        if self.state.draft.name.is_empty() {
            self.state.draft = self.blank_milestone();
        }
    }

    pub(super) fn on_edit_milestones(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Press(Button::ChooseEditMode(mode)) => {
                self.state.edit_mode = mode;
                self.prepare_edit_milestones();
                Ok(())
            }
            Action::Input {
                field: Field::SelectedMilestone,
                value,
            } if self.state.edit_mode != EditMode::Add => self.select_milestone(&value),
            Action::Input { field, value } => {
                let today = self.today();
                let target = match self.state.edit_mode {
                    EditMode::Add => Some(&mut self.state.draft),
                    EditMode::Modify => self
                        .state
                        .selected_milestone
                        .and_then(|index| self.state.plan.milestones.get_mut(index)),
                    EditMode::Delete => None,
                };
                match target {
                    Some(milestone) => apply_milestone_field(milestone, field, &value, today),
                    None => Err(self.unavailable(Action::Input { field, value })),
                }
            }
            Action::Press(Button::AddMilestone) if self.state.edit_mode == EditMode::Add => {
                validate_milestone(&self.state.draft)?;
                let blank = self.blank_milestone();
                let milestone = std::mem::replace(&mut self.state.draft, blank);
                info!("Added milestone '{}'", milestone.name);
                self.state.plan.milestones.push(milestone);
                self.state.notify(OperationStatus::success("Milestone added!"));
                Ok(())
            }
            Action::Press(Button::SaveMilestoneChanges)
                if self.state.edit_mode == EditMode::Modify =>
            {
                let milestone = self
                    .state
                    .selected()
                    .ok_or_else(|| self.unavailable(Action::Press(Button::SaveMilestoneChanges)))?;
                validate_milestone(milestone)?;
                self.state.notify(OperationStatus::success("Milestone modified!"));
                Ok(())
            }
            Action::Press(Button::ConfirmDelete) if self.state.edit_mode == EditMode::Delete => {
                let name = self
                    .state
                    .selected()
                    .map(|m| m.name.clone())
                    .ok_or_else(|| self.unavailable(Action::Press(Button::ConfirmDelete)))?;
                self.state.plan.remove_milestone(&name);
                info!("Deleted milestone '{name}'");
                self.state.selected_milestone = None;
                self.prepare_edit_milestones();
                self.state
                    .notify(OperationStatus::success(format!("Milestone '{name}' deleted!")));
                Ok(())
            }
            Action::Press(Button::AddDependency) => {
                self.validate_plan_milestones()?;
                self.go_to(Step::DependencyIntake);
                Ok(())
            }
            Action::Press(Button::Next) => {
                self.validate_plan_milestones()?;
                self.save_to_source()?;
                self.go_to(Step::ReviewPrompt);
                Ok(())
            }
            other => Err(self.unavailable(other)),
        }
    }

    /// Modify edits are committed as they are typed, so every milestone is
    /// checked again before the plan leaves the milestone actions step.
    fn validate_plan_milestones(&self) -> Result<()> {
        self.state
            .plan
            .milestones
            .iter()
            .try_for_each(validate_milestone)
    }

    /// Picks the first milestone called `name` for modify or delete.
    fn select_milestone(&mut self, name: &str) -> Result<()> {
        let index = self.state.plan.milestone_index(name).ok_or_else(|| {
            WaypointError::invalid_input(Field::SelectedMilestone.name())
                .with_reason(format!("there is no milestone called '{name}'"))
        })?;
        self.state.selected_milestone = Some(index);
        Ok(())
    }

    pub(super) fn on_review_prompt(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Press(Button::Yes) => self.go_to(Step::ReviewMilestones),
            Action::Press(Button::No) => self.go_to(Step::AutoSave),
            other => return Err(self.unavailable(other)),
        }
        Ok(())
    }

    pub(super) fn on_review_milestones(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Press(Button::Yes) => self.go_to(Step::EditMilestones),
            Action::Press(Button::No) => self.go_to(Step::Download),
            other => return Err(self.unavailable(other)),
        }
        Ok(())
    }

    /// Starts a fresh intake form with the first catalog entry selected.
    pub(super) fn prepare_dependency_intake(&mut self) {
        self.state.dependency = DependencyDraft::default();
        self.state.dependency_added = false;
        let portfolio = self.catalog.portfolios().into_iter().next();
        self.select_portfolio(portfolio);
    }

    fn select_portfolio(&mut self, portfolio: Option<String>) {
        let sub_portfolio = portfolio
            .as_deref()
            .and_then(|p| self.catalog.sub_portfolios(p).into_iter().next());
        self.state.dependency.portfolio = portfolio;
        self.select_sub_portfolio(sub_portfolio);
    }

    fn select_sub_portfolio(&mut self, sub_portfolio: Option<String>) {
        let draft = &self.state.dependency;
        let project = match (draft.portfolio.as_deref(), sub_portfolio.as_deref()) {
            (Some(p), Some(s)) => self.catalog.projects(p, s).into_iter().next(),
            _ => None,
        };
        self.state.dependency.sub_portfolio = sub_portfolio;
        self.state.dependency.project = project;
    }

    /// Options for a cascading catalog field, given the current selection.
    pub(super) fn catalog_options(&self, field: Field) -> Vec<String> {
        let draft = &self.state.dependency;
        match field {
            Field::Portfolio => self.catalog.portfolios(),
            Field::SubPortfolio => draft
                .portfolio
                .as_deref()
                .map(|p| self.catalog.sub_portfolios(p))
                .unwrap_or_default(),
            Field::DependentProject => {
                match (draft.portfolio.as_deref(), draft.sub_portfolio.as_deref()) {
                    (Some(p), Some(s)) => self.catalog.projects(p, s),
                    _ => Vec::new(),
                }
            }
            _ => Vec::new(),
        }
    }

    fn choose_catalog_option(&self, field: Field, value: &str) -> Result<String> {
        let value = value.trim();
        if self.catalog_options(field).iter().any(|option| option == value) {
            Ok(value.to_string())
        } else {
            Err(WaypointError::invalid_input(field.name())
                .with_reason(format!("'{value}' is not one of the listed options")))
        }
    }

    pub(super) fn on_dependency_intake(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Input { field, value } => {
                match field {
                    Field::Portfolio => {
                        let portfolio = self.choose_catalog_option(field, &value)?;
                        self.select_portfolio(Some(portfolio));
                    }
                    Field::SubPortfolio => {
                        let sub_portfolio = self.choose_catalog_option(field, &value)?;
                        self.select_sub_portfolio(Some(sub_portfolio));
                    }
                    Field::DependentProject => {
                        let project = self.choose_catalog_option(field, &value)?;
                        self.state.dependency.project = Some(project);
                    }
                    Field::DependencyStartDate => {
                        self.state.dependency.start_date = field.parse_date(&value)?
                    }
                    Field::DependencyEndDate => {
                        self.state.dependency.end_date = field.parse_date(&value)?
                    }
                    Field::DependencyProgress => {
                        self.state.dependency.progress = field.parse_number(&value, 0, 100)?
                    }
                    _ => return Err(self.unavailable(Action::Input { field, value })),
                }
                Ok(())
            }
            Action::Press(Button::AddDependency) => self.add_dependency(),
            Action::Press(Button::Next) if self.state.dependency_added => {
                if self.state.source_path.is_some() {
                    self.go_to(Step::AutoSave);
                } else {
                    self.go_to(Step::Download);
                }
                Ok(())
            }
            other => Err(self.unavailable(other)),
        }
    }

    fn add_dependency(&mut self) -> Result<()> {
        let draft = &self.state.dependency;
        let (Some(project), Some(start), Some(end)) =
            (draft.project.as_deref(), draft.start_date, draft.end_date)
        else {
            return Err(WaypointError::invalid_input("Dependency").with_reason(
                "Please fill in all the dependent project plan details before adding the milestone.",
            ));
        };

        let milestone = Milestone::dependency(project, start, end, draft.progress);
        validate_milestone(&milestone)?;
        info!("Added dependency milestone '{}'", milestone.name);
        self.state.plan.milestones.push(milestone);
        self.state.dependency_added = true;
        let message = format!(
            "Dependency milestone added to '{}'!",
            self.state.plan.name
        );
        self.state.notify(OperationStatus::success(message));
        Ok(())
    }
}
