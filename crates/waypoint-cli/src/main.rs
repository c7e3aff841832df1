//! Waypoint CLI Application
//!
//! Command-line front end for the waypoint project planning assistant.

mod args;
mod chat;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use waypoint_core::Config;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        config,
        no_color,
        today,
        command,
    } = Args::parse();

    let config = Config::load(config.as_deref()).context("Failed to load configuration")?;
    let renderer = TerminalRenderer::new(!no_color);

    info!("Waypoint started");

    let cli = Cli::new(config, renderer);
    match command {
        Some(Analyze { file }) => cli.analyze(&file, today),
        Some(Show { file }) => cli.show(&file),
        Some(Chat) | None => cli.chat(today),
    }
}
