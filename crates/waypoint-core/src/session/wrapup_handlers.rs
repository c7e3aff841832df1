//! Handlers for the closing steps: download, analysis, auto-save and
//! feedback.

use log::{info, warn};

use super::{Action, Button, Field, Session, Step};
use crate::{
    display::OperationStatus,
    error::{Result, WaypointError},
    models::PlanAnalysis,
    schedule::analyze_plan,
};

impl Session {
    pub(super) fn on_download(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Download(path) => {
                self.save_plan(&path)?;
                self.state.exported_to = Some(path);
                Ok(())
            }
            Action::Press(Button::AnalyzeIt) => {
                self.go_to(Step::Analysis);
                Ok(())
            }
            Action::Press(Button::ProvideFeedback) => {
                self.go_to(Step::Feedback);
                Ok(())
            }
            other => Err(self.unavailable(other)),
        }
    }

    /// Analyzes the session plan as of today.
    ///
    /// # Errors
    ///
    /// Returns `WaypointError::EmptySchedule` or
    /// `WaypointError::MissingDates` when the plan cannot be placed on a
    /// timeline.
    pub fn analysis(&self) -> Result<PlanAnalysis> {
        analyze_plan(&self.state.plan, self.today(), &self.settings)
    }

    pub(super) fn on_analysis(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Press(Button::Next) => {
                self.go_to(Step::AnalysisComplete);
                Ok(())
            }
            other => Err(self.unavailable(other)),
        }
    }

    pub(super) fn on_analysis_complete(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Press(Button::ProvideFeedback) => {
                self.go_to(Step::Feedback);
                Ok(())
            }
            other => Err(self.unavailable(other)),
        }
    }

    pub(super) fn on_modified_analysis(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Press(Button::GoToFeedback) => {
                self.go_to(Step::Feedback);
                Ok(())
            }
            other => Err(self.unavailable(other)),
        }
    }

    /// Saves the plan back to the file it was loaded from. The outcome is
    /// reported through notices; a failed save leaves only a retry on offer.
    ///
    /// Without a file there is nothing to save to and the conversation
    /// returns to the modify upload step.
    pub(super) fn auto_save(&mut self) {
        match self.save_to_source() {
            Ok(true) => self.state.save_error = None,
            Ok(false) => {
                self.state.save_error = None;
                self.state
                    .notify(OperationStatus::failure(WaypointError::NoSourceFile.to_string()));
                self.state.current_step = Step::ModifyUpload;
            }
            Err(e) => {
                warn!("Auto-save failed: {e}");
                self.state
                    .notify(OperationStatus::failure(format!("Error saving: {e}")));
                self.state.save_error = Some(e.to_string());
            }
        }
    }

    pub(super) fn on_auto_save(&mut self, action: Action) -> Result<()> {
        let saved = self.state.save_error.is_none();
        match action {
            Action::Press(Button::RetrySave) if !saved => {
                self.auto_save();
                Ok(())
            }
            Action::Press(Button::AnalyzeModified) if saved => {
                self.go_to(Step::ModifiedAnalysis);
                Ok(())
            }
            Action::Press(Button::ProvideFeedback) if saved => {
                self.go_to(Step::Feedback);
                Ok(())
            }
            other => Err(self.unavailable(other)),
        }
    }

    pub(super) fn on_feedback(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Input {
                field: Field::Rating,
                value,
            } => {
                self.state.rating = Field::Rating.parse_number(&value, 1, 5)?;
                Ok(())
            }
            Action::Input {
                field: Field::Suggestion,
                value,
            } => {
                self.state.suggestion = value;
                Ok(())
            }
            Action::Press(Button::SubmitFeedback) => {
                info!(
                    "Feedback submitted: rating {}, {} characters of suggestions",
                    self.state.rating,
                    self.state.suggestion.chars().count()
                );
                self.state.notify(OperationStatus::success(
                    "Thank you for your feedback! It helps us improve.",
                ));
                self.go_to(Step::Welcome);
                Ok(())
            }
            other => Err(self.unavailable(other)),
        }
    }
}
