//! What the front end should show at the current step.

use jiff::civil::Date;

use super::{Button, EditMode, Field, Session, Step};
use crate::{
    display::OperationStatus,
    models::{Milestone, Plan, PlanAnalysis},
};

/// Main content below the prompts.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewBody {
    Empty,
    /// Position in the milestone entry loop, 1-based
    MilestoneHeader { number: usize, count: usize },
    PlanDetails(Plan),
    Analysis(PlanAnalysis),
    /// The plan could not be analyzed; holds the reason
    AnalysisUnavailable(String),
}

/// One editable field and its current value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub field: Field,
    pub value: String,
    /// Allowed values; empty for free text
    pub options: Vec<String>,
    /// Other fields depend on this one, so the view should be rebuilt
    /// after it changes
    pub refresh: bool,
}

impl FieldSpec {
    fn text(field: Field, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
            options: Vec::new(),
            refresh: false,
        }
    }

    fn select(field: Field, value: Option<&str>, options: Vec<String>) -> Self {
        Self {
            field,
            value: value.unwrap_or_default().to_string(),
            options,
            refresh: true,
        }
    }

    pub fn label(&self) -> &'static str {
        self.field.label()
    }
}

/// File hand-over offered at the step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileExchange {
    Upload,
    Download { suggested_name: String },
}

/// Everything needed to render the current step.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub step: Step,
    pub prompts: Vec<String>,
    pub notices: Vec<OperationStatus>,
    pub body: ViewBody,
    pub fields: Vec<FieldSpec>,
    pub file_exchange: Option<FileExchange>,
    pub choices: Vec<Button>,
}

fn date_text(date: Option<Date>) -> String {
    date.map(|d| d.to_string()).unwrap_or_default()
}

fn milestone_fields(milestone: &Milestone, with_status: bool) -> Vec<FieldSpec> {
    let mut fields = vec![
        FieldSpec::text(Field::MilestoneName, milestone.name.as_str()),
        FieldSpec::text(Field::MilestoneStartDate, date_text(milestone.start_date)),
        FieldSpec::text(Field::MilestoneEndDate, date_text(milestone.end_date)),
        FieldSpec::text(Field::MilestoneOwner, milestone.owner.as_str()),
        FieldSpec::text(Field::MilestoneProgress, milestone.progress.to_string()),
    ];
    if with_status {
        fields.push(FieldSpec::text(Field::MilestoneStatus, milestone.status.as_str()));
    }
    fields
}

impl Session {
    /// Describes the current step and takes the queued notices.
    pub fn view(&mut self) -> View {
        let notices = std::mem::take(&mut self.state.notices);
        let step = self.state.current_step;
        let mut view = View {
            step,
            prompts: Vec::new(),
            notices,
            body: ViewBody::Empty,
            fields: Vec::new(),
            file_exchange: None,
            choices: self.choices(),
        };
        self.fill_view(&mut view);
        view
    }

    fn fill_view(&self, view: &mut View) {
        let state = &self.state;
        let plan = &state.plan;
        let mut prompts: Vec<String> = Vec::new();
        let mut say = |text: &str| prompts.push(text.to_string());

        match state.current_step {
            Step::Welcome => {
                say("Welcome! I'm your friendly project planning assistant. How can I help you today?");
                say("Do you want to create a new project plan, analyze an existing project plan, or modify an existing project plan?");
            }
            Step::AnalyzeUpload => {
                say("Great! Let's analyze your existing project plan.");
                say("Please upload your project plan (.csv file).");
                view.file_exchange = Some(FileExchange::Upload);
            }
            Step::NewPlan => {
                say("Great! Let's get started.");
                view.fields = vec![
                    FieldSpec::text(Field::ProjectName, plan.name.as_str()),
                    FieldSpec::text(Field::Description, plan.description.as_str()),
                    FieldSpec::text(Field::Stakeholders, plan.stakeholders.as_str()),
                    FieldSpec::text(Field::TargetEndDate, date_text(plan.target_end_date)),
                ];
            }
            Step::MilestoneCount => {
                say("Let's set up the milestones of your project.");
                let count = match state.milestone_count {
                    0 => String::new(),
                    n => n.to_string(),
                };
                view.fields = vec![FieldSpec::text(Field::MilestoneCount, count)];
            }
            Step::MilestoneEntry => {
                say("Let's define the milestones for your project. Please provide the following details for each milestone:");
                view.body = ViewBody::MilestoneHeader {
                    number: state.milestone_index + 1,
                    count: state.milestone_count,
                };
                if let Some(milestone) = plan.milestones.get(state.milestone_index) {
                    view.fields = milestone_fields(milestone, false);
                }
            }
            Step::ModifyUpload => {
                say("Great! Let's modify your plan.");
                match &state.source_path {
                    Some(path) => {
                        say(&format!("Your project plan '{}' is loaded.", path.display()));
                        view.body = ViewBody::PlanDetails(plan.clone());
                    }
                    None => say("Please upload your project plan (.csv file)."),
                }
                view.file_exchange = Some(FileExchange::Upload);
            }
            Step::EditMilestones => {
                say("Let's modify your project milestones.");
                say(&format!("Action: {}", state.edit_mode.label()));
                view.body = ViewBody::PlanDetails(plan.clone());
                view.fields = self.edit_fields();
            }
            Step::ReviewPrompt => say("Would you like to review your milestones?"),
            Step::ReviewMilestones => {
                say("Here are your current milestones:");
                say("Would you like to make any changes to your milestones?");
                view.body = ViewBody::PlanDetails(plan.clone());
            }
            Step::DependencyIntake => {
                say("Please select the portfolio and sub-portfolio for the dependent project.");
                if !state.dependency_added {
                    say("Please fill in all the dependent project plan details before adding the milestone.");
                }
                let draft = &state.dependency;
                view.fields = vec![
                    FieldSpec::select(
                        Field::Portfolio,
                        draft.portfolio.as_deref(),
                        self.catalog_options(Field::Portfolio),
                    ),
                    FieldSpec::select(
                        Field::SubPortfolio,
                        draft.sub_portfolio.as_deref(),
                        self.catalog_options(Field::SubPortfolio),
                    ),
                    FieldSpec::select(
                        Field::DependentProject,
                        draft.project.as_deref(),
                        self.catalog_options(Field::DependentProject),
                    ),
                    FieldSpec::text(Field::DependencyStartDate, date_text(draft.start_date)),
                    FieldSpec::text(Field::DependencyEndDate, date_text(draft.end_date)),
                    FieldSpec::text(Field::DependencyProgress, draft.progress.to_string()),
                ];
            }
            Step::Download => {
                say("Great! Let's save your project plan. I'll create a file for you to download.");
                if let Some(path) = &state.exported_to {
                    say(&format!("Your project plan was downloaded to '{}'.", path.display()));
                }
                say("Your project plan is ready for download! What would you like to do next?");
                view.file_exchange = Some(FileExchange::Download {
                    suggested_name: plan.suggested_file_name(),
                });
            }
            Step::Analysis | Step::ModifiedAnalysis => {
                if state.current_step == Step::Analysis {
                    say("Let's analyze your project plan!");
                } else {
                    say("Let's analyze your modified project plan!");
                }
                view.body = match self.analysis() {
                    Ok(analysis) => ViewBody::Analysis(analysis),
                    Err(e) => ViewBody::AnalysisUnavailable(e.to_string()),
                };
            }
            Step::AnalysisComplete => say("Analysis complete! What would you like to do next?"),
            Step::AutoSave => match &state.save_error {
                None => {
                    say("Your modified project plan has been saved!");
                    say("What would you like to do next?");
                }
                Some(_) => say("Your project plan could not be saved. You can try again."),
            },
            Step::Feedback => {
                say("Thanks! How would you rate your experience with this assistant on a scale of 1 to 5?");
                say("Do you have any suggestions for improvement?");
                view.fields = vec![
                    FieldSpec {
                        field: Field::Rating,
                        value: state.rating.to_string(),
                        options: (1..=5).map(|n: u8| n.to_string()).collect(),
                        refresh: false,
                    },
                    FieldSpec::text(Field::Suggestion, state.suggestion.as_str()),
                ];
            }
        }
        view.prompts = prompts;
    }

    fn edit_fields(&self) -> Vec<FieldSpec> {
        let state = &self.state;
        match state.edit_mode {
            EditMode::Add => milestone_fields(&state.draft, true),
            EditMode::Modify | EditMode::Delete => {
                let Some(selected) = state.selected() else {
                    return Vec::new();
                };
                let mut fields = vec![FieldSpec::select(
                    Field::SelectedMilestone,
                    Some(selected.name.as_str()),
                    state.plan.milestone_names(),
                )];
                if state.edit_mode == EditMode::Modify {
                    fields.extend(milestone_fields(selected, true));
                }
                fields
            }
        }
    }
}
