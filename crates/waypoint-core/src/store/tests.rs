//! Tests for plan persistence.

use jiff::civil::date;
use tempfile::TempDir;

use super::*;
use crate::models::Milestone;

fn sample_plan() -> Plan {
    Plan {
        name: "Apollo".to_string(),
        description: "Land on the moon, safely".to_string(),
        stakeholders: "NASA, Congress".to_string(),
        target_end_date: Some(date(2024, 6, 1)),
        milestones: vec![
            Milestone {
                name: "Design".to_string(),
                start_date: Some(date(2024, 1, 1)),
                end_date: Some(date(2024, 1, 11)),
                owner: "Ana".to_string(),
                progress: 40,
                status: "On Track".to_string(),
            },
            Milestone {
                name: "Build".to_string(),
                start_date: None,
                end_date: Some(date(2024, 3, 1)),
                owner: String::new(),
                progress: 0,
                status: String::new(),
            },
            Milestone {
                name: "Design".to_string(),
                start_date: Some(date(2024, 3, 2)),
                end_date: Some(date(2024, 5, 30)),
                owner: "Bo".to_string(),
                progress: 100,
                status: String::new(),
            },
        ],
    }
}

#[test]
fn test_cell_ref_parse_and_display() {
    let b4 = CellRef::parse("B4").expect("valid reference");
    assert_eq!(b4, CellRef::new(4, 1));
    assert_eq!(b4.to_string(), "B4");
    assert_eq!(CellRef::parse("aa10"), Some(CellRef::new(10, 26)));
    assert_eq!(CellRef::new(10, 26).to_string(), "AA10");
    assert_eq!(CellRef::parse("A0"), None);
    assert_eq!(CellRef::parse("12"), None);
    assert_eq!(CellRef::parse("B"), None);
}

#[test]
fn test_cell_inference() {
    assert_eq!(Cell::infer(""), Cell::Empty);
    assert_eq!(Cell::infer("2024-01-05"), Cell::Date(date(2024, 1, 5)));
    assert_eq!(Cell::infer("2024-01-05 13:45:00"), Cell::Date(date(2024, 1, 5)));
    assert_eq!(Cell::infer("2024-01-05T00:00:00"), Cell::Date(date(2024, 1, 5)));
    assert_eq!(Cell::infer("40"), Cell::Number(40.0));
    assert_eq!(Cell::infer("007"), Cell::Text("007".to_string()));
    assert_eq!(Cell::infer("N/A"), Cell::Text("N/A".to_string()));
    assert_eq!(Cell::infer("2024-13-45"), Cell::Text("2024-13-45".to_string()));
}

#[test]
fn test_layout_places_fixed_cells() {
    let sheet = plan_to_sheet(&sample_plan()).expect("Failed to lay out plan");
    let at = |r: &str| sheet.get(CellRef::parse(r).expect("valid reference")).to_text();

    assert_eq!(at("A1"), "Project Name:");
    assert_eq!(at("B1"), "Apollo");
    assert_eq!(at("A4"), "Target End Date:");
    assert_eq!(at("B4"), "2024-06-01");
    assert_eq!(at("A6"), "Milestone Name");
    assert_eq!(at("F6"), "Status");
    assert_eq!(at("A7"), "Design");
    assert_eq!(at("B8"), "N/A");
    assert_eq!(at("E9"), "100");
    assert_eq!(at("A10"), "");
}

#[test]
fn test_save_then_load_round_trips() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("nested").join("apollo.csv");
    let store = CsvPlanStore::new();
    let plan = sample_plan();

    store.save(&plan, &path).expect("Failed to save plan");
    let loaded = store.load(&path).expect("Failed to load plan");

    assert_eq!(loaded, plan);
}

#[test]
fn test_missing_target_date_round_trips_to_none() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("plan.csv");
    let store = CsvPlanStore::new();
    let mut plan = sample_plan();
    plan.target_end_date = None;

    store.save(&plan, &path).expect("Failed to save plan");
    let raw = std::fs::read_to_string(&path).expect("Failed to read file");
    assert!(raw.contains("Target End Date:,N/A"));

    let loaded = store.load(&path).expect("Failed to load plan");
    assert_eq!(loaded.target_end_date, None);
}

#[test]
fn test_text_cells_round_trip_verbatim() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("plan.csv");
    let store = CsvPlanStore::new();
    let mut plan = sample_plan();
    plan.name = "2025".to_string();
    plan.description = "2024-01-01 09:30:00".to_string();
    plan.stakeholders = "2024-01-01 ".to_string();
    plan.milestones[0].name = "2024-02-03".to_string();
    plan.milestones[0].owner = "007".to_string();
    plan.milestones[0].status = "1.50".to_string();
    plan.milestones[1].owner = " 12 ".to_string();

    store.save(&plan, &path).expect("Failed to save plan");
    let loaded = store.load(&path).expect("Failed to load plan");

    assert_eq!(loaded, plan);
}

#[test]
fn test_read_csv_keeps_raw_text() {
    let sheet = Sheet::read_csv("2024-01-01 09:30:00,40,,N/A\n".as_bytes())
        .expect("Failed to read sheet");

    assert_eq!(
        sheet.get(CellRef::new(1, 0)),
        &Cell::Text("2024-01-01 09:30:00".to_string())
    );
    assert_eq!(sheet.get(CellRef::new(1, 1)), &Cell::Text("40".to_string()));
    assert!(sheet.get(CellRef::new(1, 2)).is_empty());
    assert_eq!(sheet.get(CellRef::new(1, 3)).to_text(), "N/A");
}

#[test]
fn test_save_rejects_blank_milestone_name() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("plan.csv");
    let store = CsvPlanStore::new();
    let mut plan = sample_plan();
    store.save(&plan, &path).expect("Failed to save plan");

    plan.milestones[1].name = "  ".to_string();
    let result = store.save(&plan, &path);

    assert!(matches!(
        result,
        Err(WaypointError::InvalidInput { field, .. }) if field == "Milestone Name"
    ));
    let loaded = store.load(&path).expect("Failed to load plan");
    assert_eq!(loaded, sample_plan());

    let memory = MemoryPlanStore::new();
    assert!(memory.save(&plan, Path::new("plan.csv")).is_err());
    assert!(memory.sheet(Path::new("plan.csv")).is_none());
}

#[test]
fn test_save_overwrites_existing_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("plan.csv");
    let store = CsvPlanStore::new();
    let mut plan = sample_plan();

    store.save(&plan, &path).expect("Failed to save plan");
    plan.milestones.truncate(1);
    store.save(&plan, &path).expect("Failed to save plan");

    let loaded = store.load(&path).expect("Failed to load plan");
    assert_eq!(loaded.milestones.len(), 1);
}

#[test]
fn test_load_accepts_datetime_cells_and_stops_at_empty_name() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("edited.csv");
    std::fs::write(
        &path,
        "Project Name:,Edited\n\
         Description:,From a spreadsheet app\n\
         Stakeholders:,Ops\n\
         Target End Date:,2024-06-01 00:00:00\n\
         ,,,,,\n\
         Milestone Name,Start Date,End Date,Milestone Owner,Progress,Status\n\
         Kickoff,2024-01-01 00:00:00,2024-01-02T00:00:00,Ana,100,\n\
         ,,,,,\n\
         Ignored,2024-01-01,2024-01-02,Bo,0,\n",
    )
    .expect("Failed to write file");

    let plan = CsvPlanStore::new().load(&path).expect("Failed to load plan");
    assert_eq!(plan.target_end_date, Some(date(2024, 6, 1)));
    assert_eq!(plan.milestones.len(), 1);
    assert_eq!(plan.milestones[0].start_date, Some(date(2024, 1, 1)));
    assert_eq!(plan.milestones[0].end_date, Some(date(2024, 1, 2)));
    assert_eq!(plan.milestones[0].progress, 100);
}

#[test]
fn test_load_reports_malformed_dates() {
    let mut sheet = plan_to_sheet(&sample_plan()).expect("Failed to lay out plan");
    sheet.set(CellRef::new(4, 1), "June 1st");
    match plan_from_sheet(&sheet) {
        Err(WaypointError::InvalidDate { cell, value }) => {
            assert_eq!(cell, "B4");
            assert_eq!(value, "June 1st");
        }
        other => panic!("expected InvalidDate, got {other:?}"),
    }

    let mut sheet = plan_to_sheet(&sample_plan()).expect("Failed to lay out plan");
    sheet.set(CellRef::new(8, 2), "2024/03/01");
    assert!(matches!(
        plan_from_sheet(&sheet),
        Err(WaypointError::InvalidDate { cell, .. }) if cell == "C8"
    ));
}

#[test]
fn test_load_rejects_bad_progress_and_missing_name() {
    let mut sheet = plan_to_sheet(&sample_plan()).expect("Failed to lay out plan");
    sheet.set(CellRef::new(7, 4), Cell::Number(140.0));
    assert!(matches!(
        plan_from_sheet(&sheet),
        Err(WaypointError::InvalidInput { field, .. }) if field == "Progress"
    ));

    let mut sheet = plan_to_sheet(&sample_plan()).expect("Failed to lay out plan");
    sheet.set(CellRef::new(1, 1), Cell::Empty);
    assert!(matches!(
        plan_from_sheet(&sheet),
        Err(WaypointError::InvalidInput { field, .. }) if field == "Project Name"
    ));
}

#[test]
fn test_load_missing_file_is_file_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let err = CsvPlanStore::new()
        .load(&temp_dir.path().join("absent.csv"))
        .expect_err("missing file must fail");
    assert!(err.is_file_error());
}

#[test]
fn test_memory_store_shares_files_between_clones() {
    let store = MemoryPlanStore::new();
    let handle = store.clone();
    let path = Path::new("plans/apollo.csv");

    store.save(&sample_plan(), path).expect("Failed to save plan");
    assert!(handle.sheet(path).is_some());
    assert_eq!(handle.load(path).expect("Failed to load plan"), sample_plan());

    handle.set_read_only(true);
    assert!(store.save(&sample_plan(), path).is_err());
}
