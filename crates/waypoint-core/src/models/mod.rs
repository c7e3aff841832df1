//! Data models for project plans and milestones.
//!
//! This module contains the domain records the conversation edits and the
//! analyzer reads. Display implementations live in
//! [`crate::display::models`] so the records stay plain data.
//!
//! # Model Overview
//!
//! - [`Plan`]: the project record (name, description, stakeholders, target
//!   end date) owning an ordered list of milestones
//! - [`Milestone`]: a named deliverable with start/end dates, an owner, a
//!   0-100 progress value and a free-text cached status
//! - [`MilestoneStatus`]: the schedule classification the analyzer derives
//! - [`MilestoneAnalysis`] / [`PlanAnalysis`]: analyzer output, computed
//!   fresh for every analysis view and never stored
//!
//! # Examples
//!
//! ```rust
//! use jiff::civil::date;
//! use waypoint_core::models::{Milestone, Plan};
//!
//! let mut plan = Plan::new();
//! plan.name = "Apollo".to_string();
//! plan.milestones.push(Milestone {
//!     name: "Design".to_string(),
//!     start_date: Some(date(2024, 1, 1)),
//!     end_date: Some(date(2024, 1, 11)),
//!     owner: "Ana".to_string(),
//!     progress: 40,
//!     status: String::new(),
//! });
//!
//! assert_eq!(plan.milestone_index("Design"), Some(0));
//! ```

pub mod analysis;
pub mod milestone;
pub mod plan;
pub mod status;

#[cfg(test)]
mod tests;

pub use analysis::{MilestoneAnalysis, PlanAnalysis, ProgramDuration};
pub use milestone::Milestone;
pub use plan::Plan;
pub use status::{MilestoneStatus, TimelineState};
