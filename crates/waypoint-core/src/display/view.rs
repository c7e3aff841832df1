//! Display implementations for session views.

use std::fmt;

use crate::session::{View, ViewBody};

impl fmt::Display for ViewBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewBody::Empty => Ok(()),
            ViewBody::MilestoneHeader { number, count } => {
                writeln!(f, "### Milestone {number} of {count}")
            }
            ViewBody::PlanDetails(plan) => write!(f, "{plan}"),
            ViewBody::Analysis(analysis) => write!(f, "{analysis}"),
            ViewBody::AnalysisUnavailable(reason) => {
                writeln!(f, "The project plan cannot be analyzed: {reason}")
            }
        }
    }
}

/// Prompts as quoted chat lines, then notices, then the body. Fields and
/// buttons are left to the front end.
impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for prompt in &self.prompts {
            writeln!(f, "> {prompt}")?;
            writeln!(f)?;
        }
        for notice in &self.notices {
            write!(f, "{notice}")?;
        }
        if !matches!(self.body, ViewBody::Empty) {
            if !self.notices.is_empty() {
                writeln!(f)?;
            }
            write!(f, "{}", self.body)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        display::OperationStatus,
        session::{Step, View, ViewBody},
    };

    #[test]
    fn test_view_display() {
        let view = View {
            step: Step::MilestoneEntry,
            prompts: vec!["Let's define the milestones for your project.".to_string()],
            notices: vec![OperationStatus::warning("Please enter a positive integer.")],
            body: ViewBody::MilestoneHeader {
                number: 2,
                count: 3,
            },
            fields: Vec::new(),
            file_exchange: None,
            choices: Vec::new(),
        };

        let output = view.to_string();
        assert!(output.starts_with("> Let's define the milestones for your project.\n"));
        assert!(output.contains("Warning: Please enter a positive integer."));
        assert!(output.contains("### Milestone 2 of 3"));
    }

    #[test]
    fn test_analysis_error_body() {
        let body = ViewBody::AnalysisUnavailable("The project plan has no milestones to analyze".to_string());
        assert_eq!(
            body.to_string(),
            "The project plan cannot be analyzed: The project plan has no milestones to analyze\n"
        );
    }
}
