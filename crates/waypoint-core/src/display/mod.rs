//! Display formatting for plans, analyses and session views.
//!
//! Domain models implement `Display` directly; collections and charts are
//! wrapped in newtypes so each context picks the rendering it needs.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │    Newtype      │    │    Markdown     │
//! │ (Plan, Analysis)│───▶│    Wrappers     │───▶│     Output      │
//! │                 │    │ (tables, charts)│    │   (terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: milestone and warning tables
//! - [`charts`]: Gantt chart and progress bars
//! - [`status`]: notices (`OperationStatus`)
//! - [`datetime`]: date formatting
//! - [`models`]: `Display` for domain models
//! - [`view`]: `Display` for session views
//!
//! ### Status Messages
//!
//! ```rust
//! use waypoint_core::display::OperationStatus;
//!
//! let saved = OperationStatus::success("Project plan saved to 'plan.csv'!");
//! assert_eq!(saved.to_string(), "Success: Project plan saved to 'plan.csv'!\n");
//! ```

pub mod charts;
pub mod collections;
pub mod datetime;
pub mod models;
pub mod status;
pub mod view;

pub use charts::{GanttChart, ProgressChart};
pub use collections::{MilestoneStatuses, Milestones, Warnings};
pub use datetime::OptionalDate;
pub use status::{OperationStatus, StatusLevel};
