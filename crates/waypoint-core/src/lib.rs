//! Core library for the Waypoint project planning assistant.
//!
//! Waypoint walks a user through creating, analyzing and modifying a
//! milestone-based project plan. This crate holds everything except the
//! terminal front end: the conversation state machine, schedule analysis,
//! plan files, configuration and error handling.
//!
//! # Display Architecture
//!
//! - **Domain Models** ([`models`]): plans, milestones and analysis records
//! - **Display** ([`display`]): markdown tables, text charts and session
//!   views, rendered by the CLI's terminal renderer
//!
//! # Quick Start
//!
//! ```rust
//! use jiff::civil::date;
//! use waypoint_core::{
//!     session::{Action, Button, Field, SessionBuilder, Step},
//!     store::MemoryPlanStore,
//! };
//!
//! let mut session = SessionBuilder::new()
//!     .with_store(MemoryPlanStore::new())
//!     .with_today(Some(date(2024, 1, 6)))
//!     .build();
//!
//! session.dispatch(Action::Press(Button::CreateNew))?;
//! session.dispatch(Action::input(Field::ProjectName, "Website Relaunch"))?;
//! session.dispatch(Action::Press(Button::Next))?;
//! session.dispatch(Action::input(Field::MilestoneCount, "2"))?;
//! session.dispatch(Action::Press(Button::Next))?;
//!
//! assert_eq!(session.step(), Step::MilestoneEntry);
//! println!("{}", session.view());
//! # Ok::<(), waypoint_core::WaypointError>(())
//! ```

pub mod catalog;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod operations;
pub mod schedule;
pub mod session;
pub mod store;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogEntry};
pub use config::Config;
pub use display::OperationStatus;
pub use error::{Result, WaypointError};
pub use models::{Milestone, MilestoneStatus, Plan, PlanAnalysis};
pub use schedule::{analyze_plan, AnalysisSettings};
pub use session::{Action, Button, Field, Session, SessionBuilder, Step, Transition, View};
pub use store::{CsvPlanStore, MemoryPlanStore, PlanStore};
