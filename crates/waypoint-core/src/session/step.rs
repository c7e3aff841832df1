//! Steps of the conversation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One node of the conversation state machine.
///
/// Every step keeps the number it is known by in the conversation script
/// ([`Step::number`]); sub-steps carry a fractional number but are plain
/// variants here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// 0: choose between new, analyze and modify
    #[default]
    Welcome,
    /// 2: upload a plan to analyze
    AnalyzeUpload,
    /// 3: name, description, stakeholders and target date of a new plan
    NewPlan,
    /// 3.1: how many milestones to enter
    MilestoneCount,
    /// 4: one milestone of the entry loop
    MilestoneEntry,
    /// 5: add, modify and delete milestones
    EditMilestones,
    /// 6: offer a review
    ReviewPrompt,
    /// 6.1: show the milestones, offer more edits
    ReviewMilestones,
    /// 7: download a plan that has no file yet
    Download,
    /// 7.1: analysis of a new or loaded plan
    Analysis,
    /// 8: after analysis
    AnalysisComplete,
    /// 8.1: record a dependency on another project
    DependencyIntake,
    /// 13: rating and suggestions
    Feedback,
    /// 11: upload a plan to modify
    ModifyUpload,
    /// 11.1: analysis of a modified plan
    ModifiedAnalysis,
    /// 12: save a modified plan back to its file
    AutoSave,
}

impl Step {
    /// Script number of the step.
    pub fn number(&self) -> &'static str {
        match self {
            Step::Welcome => "0",
            Step::AnalyzeUpload => "2",
            Step::NewPlan => "3",
            Step::MilestoneCount => "3.1",
            Step::MilestoneEntry => "4",
            Step::EditMilestones => "5",
            Step::ReviewPrompt => "6",
            Step::ReviewMilestones => "6.1",
            Step::Download => "7",
            Step::Analysis => "7.1",
            Step::AnalysisComplete => "8",
            Step::DependencyIntake => "8.1",
            Step::Feedback => "13",
            Step::ModifyUpload => "11",
            Step::ModifiedAnalysis => "11.1",
            Step::AutoSave => "12",
        }
    }

    /// Short description of the step.
    pub fn title(&self) -> &'static str {
        match self {
            Step::Welcome => "welcome",
            Step::AnalyzeUpload => "upload plan to analyze",
            Step::NewPlan => "new plan",
            Step::MilestoneCount => "milestone count",
            Step::MilestoneEntry => "milestone entry",
            Step::EditMilestones => "milestone actions",
            Step::ReviewPrompt => "review prompt",
            Step::ReviewMilestones => "review milestones",
            Step::Download => "download",
            Step::Analysis => "analysis",
            Step::AnalysisComplete => "analysis complete",
            Step::DependencyIntake => "dependency intake",
            Step::Feedback => "feedback",
            Step::ModifyUpload => "upload plan to modify",
            Step::ModifiedAnalysis => "modified plan analysis",
            Step::AutoSave => "save modified plan",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.number(), self.title())
    }
}
