//! Command handlers
//!
//! One-shot commands load a plan file, format it through the core display
//! types and hand the markdown to the terminal renderer. The conversation
//! itself lives in [`crate::chat`].

use std::path::Path;

use anyhow::{Context, Result};
use jiff::{civil::Date, Zoned};
use log::debug;
use waypoint_core::{
    operations::analyze_plan_file, Config, CsvPlanStore, PlanStore, Session, SessionBuilder,
};

use crate::{chat::Chat, renderer::TerminalRenderer};

/// Command dispatcher holding the loaded configuration and the renderer
pub struct Cli {
    config: Config,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(config: Config, renderer: TerminalRenderer) -> Self {
        Self { config, renderer }
    }

    fn session(&self, today: Option<Date>) -> Session {
        SessionBuilder::new()
            .with_store(CsvPlanStore::new())
            .with_catalog(self.config.catalog())
            .with_settings(self.config.analysis_settings())
            .with_today(today)
            .build()
    }

    /// Run the guided conversation until the user quits
    pub fn chat(&self, today: Option<Date>) -> Result<()> {
        let session = self.session(today);
        Chat::new(session, &self.renderer, &self.config)?.run()
    }

    /// Print the schedule analysis of a plan file
    pub fn analyze(&self, file: &Path, today: Option<Date>) -> Result<()> {
        let today = today.unwrap_or_else(|| Zoned::now().date());
        debug!("Analyzing {} as of {today}", file.display());
        let (plan, analysis) = analyze_plan_file(
            &CsvPlanStore::new(),
            file,
            today,
            &self.config.analysis_settings(),
        )
        .with_context(|| format!("Failed to analyze '{}'", file.display()))?;

        self.renderer.render(&format!("# {}\n\n{analysis}", plan.name))
    }

    /// Print a plan file
    pub fn show(&self, file: &Path) -> Result<()> {
        let plan = CsvPlanStore::new()
            .load(file)
            .with_context(|| format!("Failed to load '{}'", file.display()))?;
        self.renderer.render(&plan.to_string())
    }
}
