use std::{fs, path::PathBuf};

use jiff::civil::date;
use tempfile::TempDir;
use waypoint_core::{Session, SessionBuilder};

/// A plan file in the fixed layout, as a spreadsheet program would export it
pub const SAMPLE_PLAN_CSV: &str = "\
Project Name:,Website Relaunch,,,,
Description:,New marketing site,,,,
Stakeholders:,\"Marketing, IT\",,,,
Target End Date:,2024-03-31,,,,
,,,,,
Milestone Name,Start Date,End Date,Milestone Owner,Progress,Status
Design,2024-01-01,2024-01-11,Ana,40,
Build,2023-12-01 00:00:00,2023-12-20 00:00:00,Ben,50,On Track
Launch,2024-03-01,2024-04-15,Cleo,0,
";

/// Helper function to create a temporary directory holding the sample plan
pub fn create_plan_file() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("website.csv");
    fs::write(&path, SAMPLE_PLAN_CSV).expect("Failed to write plan file");
    (temp_dir, path)
}

/// Helper function to create a session that reads and writes real files
pub fn create_test_session() -> Session {
    SessionBuilder::new()
        .with_today(Some(date(2024, 1, 6)))
        .build()
}
