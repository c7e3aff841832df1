//! Interactive front end for the planning conversation.
//!
//! Each turn renders the current view, asks for a file when the step
//! offers one, walks the editable fields and finally lists the buttons as
//! numbered choices. Enter keeps a field's current value; Ctrl-D or `quit`
//! at the choice prompt ends the conversation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use log::{debug, info};
use rustyline::{error::ReadlineError, DefaultEditor};
use waypoint_core::{
    display::OperationStatus,
    operations::default_download_path,
    session::{FieldSpec, FileExchange},
    Action, Config, Session, View,
};

use crate::renderer::TerminalRenderer;

enum Flow {
    Continue,
    Quit,
}

/// One interactive conversation on the terminal
pub struct Chat<'a> {
    session: Session,
    renderer: &'a TerminalRenderer,
    config: &'a Config,
    editor: DefaultEditor,
}

impl<'a> Chat<'a> {
    pub fn new(session: Session, renderer: &'a TerminalRenderer, config: &'a Config) -> Result<Self> {
        let editor = DefaultEditor::new().context("Failed to initialize line editor")?;
        Ok(Self {
            session,
            renderer,
            config,
            editor,
        })
    }

    /// Run turns until the user quits
    pub fn run(mut self) -> Result<()> {
        info!("Conversation started");
        loop {
            let view = self.session.view();
            println!();
            self.renderer.render(&view.to_string())?;
            if let Flow::Quit = self.turn(&view)? {
                break;
            }
        }
        info!("Conversation ended at step {}", self.session.step());
        Ok(())
    }

    fn turn(&mut self, view: &View) -> Result<Flow> {
        if let Some(exchange) = &view.file_exchange {
            let Some(path) = self.ask_path(exchange)? else {
                return Ok(Flow::Quit);
            };
            if let Some(path) = path {
                let action = match exchange {
                    FileExchange::Upload => Action::Upload(path),
                    FileExchange::Download { .. } => Action::Download(path),
                };
                if self.dispatch(action)? && self.session.step() != view.step {
                    return Ok(Flow::Continue);
                }
            }
        }

        for entry in &view.fields {
            let Some(value) = self.ask_field(entry)? else {
                return Ok(Flow::Quit);
            };
            if value == entry.value {
                continue;
            }
            let accepted = self.dispatch(Action::Input {
                field: entry.field,
                value,
            })?;
            if accepted && entry.refresh {
                // Later fields depend on this one
                return Ok(Flow::Continue);
            }
        }

        self.choose()
    }

    /// Returns `None` on end of input and `Some(None)` when the user
    /// skipped the file prompt.
    fn ask_path(&mut self, exchange: &FileExchange) -> Result<Option<Option<PathBuf>>> {
        let (prompt, initial) = match exchange {
            FileExchange::Upload => ("Plan file to upload (.csv): ".to_string(), String::new()),
            FileExchange::Download { suggested_name } => {
                let initial = default_download_path(self.config, self.session.plan())
                    .map(|path| path.display().to_string())
                    .unwrap_or_else(|_| suggested_name.clone());
                ("Save the plan to (leave empty to skip): ".to_string(), initial)
            }
        };
        let Some(line) = self.read_line(&prompt, &initial)? else {
            return Ok(None);
        };
        let line = line.trim();
        Ok(Some((!line.is_empty()).then(|| PathBuf::from(line))))
    }

    fn ask_field(&mut self, entry: &FieldSpec) -> Result<Option<String>> {
        let prompt = if entry.options.is_empty() {
            format!("{}: ", entry.label())
        } else {
            format!("{} [{}]: ", entry.label(), entry.options.join(" / "))
        };
        self.read_line(&prompt, &entry.value)
    }

    fn choose(&mut self) -> Result<Flow> {
        let choices = self.session.choices();
        if choices.is_empty() {
            return Ok(Flow::Continue);
        }

        let menu: String = choices
            .iter()
            .enumerate()
            .map(|(i, button)| format!("{}. {}\n", i + 1, button.label()))
            .collect();
        self.renderer.render(&menu)?;

        let Some(answer) = self.read_line("Choose an option: ", "")? else {
            return Ok(Flow::Quit);
        };
        match answer.trim() {
            "" => Ok(Flow::Continue),
            "q" | "quit" | "exit" => Ok(Flow::Quit),
            answer => {
                match answer
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|i| choices.get(i))
                {
                    Some(button) => {
                        self.dispatch(Action::Press(*button))?;
                    }
                    None => self.renderer.status(&OperationStatus::warning(format!(
                        "Please enter a number from 1 to {}.",
                        choices.len()
                    )))?,
                }
                Ok(Flow::Continue)
            }
        }
    }

    /// Dispatch an action, reporting a rejection to the user
    fn dispatch(&mut self, action: Action) -> Result<bool> {
        debug!("Dispatching {action}");
        match self.session.dispatch(action) {
            Ok(_) => Ok(true),
            Err(e) => {
                self.renderer
                    .status(&OperationStatus::failure(e.to_string()))?;
                Ok(false)
            }
        }
    }

    /// Read one line, pre-filled with `initial`; `None` on end of input
    fn read_line(&mut self, prompt: &str, initial: &str) -> Result<Option<String>> {
        match self.editor.readline_with_initial(prompt, (initial, "")) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) => Ok(Some(initial.to_string())),
            Err(ReadlineError::Eof) => Ok(None),
            Err(e) => Err(e).context("Failed to read input"),
        }
    }
}
