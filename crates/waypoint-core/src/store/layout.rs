//! Fixed cell layout of a plan file.
//!
//! ```text
//!      A                  B            C          D                 E          F
//!  1   Project Name:      <name>
//!  2   Description:       <text>
//!  3   Stakeholders:      <text>
//!  4   Target End Date:   YYYY-MM-DD | N/A
//!  5
//!  6   Milestone Name     Start Date   End Date   Milestone Owner   Progress   Status
//!  7+  one milestone per row; the table ends at the first empty name cell
//! ```

use jiff::civil::Date;

use super::sheet::{Cell, CellRef, Sheet};
use crate::{
    error::{Result, WaypointError},
    models::{Milestone, Plan},
};

/// Text written for a date that is not set.
pub const NOT_APPLICABLE: &str = "N/A";

const PROJECT_NAME: CellRef = CellRef::new(1, 1);
const DESCRIPTION: CellRef = CellRef::new(2, 1);
const STAKEHOLDERS: CellRef = CellRef::new(3, 1);
const TARGET_END_DATE: CellRef = CellRef::new(4, 1);

const LABELS: [(CellRef, &str); 4] = [
    (CellRef::new(1, 0), "Project Name:"),
    (CellRef::new(2, 0), "Description:"),
    (CellRef::new(3, 0), "Stakeholders:"),
    (CellRef::new(4, 0), "Target End Date:"),
];

const HEADER_ROW: usize = 6;
const FIRST_MILESTONE_ROW: usize = 7;

/// Column headers of the milestone table, in column order.
pub const MILESTONE_HEADERS: [&str; 6] = [
    "Milestone Name",
    "Start Date",
    "End Date",
    "Milestone Owner",
    "Progress",
    "Status",
];

const NAME_COL: usize = 0;
const START_COL: usize = 1;
const END_COL: usize = 2;
const OWNER_COL: usize = 3;
const PROGRESS_COL: usize = 4;
const STATUS_COL: usize = 5;

fn date_cell(date: Option<Date>) -> Cell {
    date.map_or_else(|| Cell::from(NOT_APPLICABLE), Cell::Date)
}

/// Lays a plan out on a fresh sheet.
///
/// # Errors
///
/// Returns `WaypointError::InvalidInput` when a milestone has a blank
/// name. Reading stops at the first empty name cell, so such a row would
/// hide every milestone below it.
pub fn plan_to_sheet(plan: &Plan) -> Result<Sheet> {
    if let Some(position) = plan.milestones.iter().position(|m| m.name.trim().is_empty()) {
        return Err(WaypointError::invalid_input("Milestone Name").with_reason(format!(
            "milestone {} of '{}' has no name",
            position + 1,
            plan.name
        )));
    }

    let mut sheet = Sheet::new();
    for (at, label) in LABELS {
        sheet.set(at, label);
    }
    sheet.set(PROJECT_NAME, plan.name.as_str());
    sheet.set(DESCRIPTION, plan.description.as_str());
    sheet.set(STAKEHOLDERS, plan.stakeholders.as_str());
    sheet.set(TARGET_END_DATE, date_cell(plan.target_end_date));

    for (col, header) in MILESTONE_HEADERS.iter().enumerate() {
        sheet.set(CellRef::new(HEADER_ROW, col), *header);
    }

    for (offset, milestone) in plan.milestones.iter().enumerate() {
        let row = FIRST_MILESTONE_ROW + offset;
        sheet.set(CellRef::new(row, NAME_COL), milestone.name.as_str());
        sheet.set(CellRef::new(row, START_COL), date_cell(milestone.start_date));
        sheet.set(CellRef::new(row, END_COL), date_cell(milestone.end_date));
        sheet.set(CellRef::new(row, OWNER_COL), milestone.owner.as_str());
        sheet.set(CellRef::new(row, PROGRESS_COL), milestone.progress);
        sheet.set(CellRef::new(row, STATUS_COL), milestone.status.as_str());
    }

    Ok(sheet)
}

/// Types a cell of a date or progress column. Cells read from a file are
/// raw text; cells laid out by [`plan_to_sheet`] are already typed.
fn typed(sheet: &Sheet, at: CellRef) -> Cell {
    match sheet.get(at) {
        Cell::Text(text) => Cell::infer(text),
        other => other.clone(),
    }
}

fn read_date(sheet: &Sheet, at: CellRef) -> Result<Option<Date>> {
    match typed(sheet, at) {
        Cell::Empty => Ok(None),
        Cell::Date(date) => Ok(Some(date)),
        Cell::Text(text) if text.trim().is_empty() || text.trim() == NOT_APPLICABLE => Ok(None),
        other => Err(WaypointError::InvalidDate {
            cell: at.to_string(),
            value: other.to_text(),
        }),
    }
}

fn read_progress(sheet: &Sheet, at: CellRef) -> Result<u8> {
    let cell = typed(sheet, at);
    let value = match &cell {
        Cell::Empty => return Ok(0),
        Cell::Number(n) if n.fract() == 0.0 && (0.0..=100.0).contains(n) => Some(*n as u8),
        Cell::Text(text) => text.trim().parse::<u8>().ok().filter(|n| *n <= 100),
        _ => None,
    };
    value.ok_or_else(|| {
        WaypointError::invalid_input("Progress").with_reason(format!(
            "cell {at} holds '{}', expected a whole number from 0 to 100",
            cell.to_text()
        ))
    })
}

/// Reads a plan back from the fixed layout.
///
/// # Errors
///
/// Returns `WaypointError::InvalidInput` when the project name is missing
/// or a progress cell is not a whole number from 0 to 100, and
/// `WaypointError::InvalidDate` for date cells that are neither dates,
/// `YYYY-MM-DD` text nor `N/A`.
pub fn plan_from_sheet(sheet: &Sheet) -> Result<Plan> {
    let name = sheet.get(PROJECT_NAME).to_text();
    if name.trim().is_empty() {
        return Err(WaypointError::invalid_input("Project Name")
            .with_reason(format!("cell {PROJECT_NAME} is empty")));
    }

    let mut milestones = Vec::new();
    let mut row = FIRST_MILESTONE_ROW;
    while !sheet.get(CellRef::new(row, NAME_COL)).is_empty() {
        milestones.push(Milestone {
            name: sheet.get(CellRef::new(row, NAME_COL)).to_text(),
            start_date: read_date(sheet, CellRef::new(row, START_COL))?,
            end_date: read_date(sheet, CellRef::new(row, END_COL))?,
            owner: sheet.get(CellRef::new(row, OWNER_COL)).to_text(),
            progress: read_progress(sheet, CellRef::new(row, PROGRESS_COL))?,
            status: sheet.get(CellRef::new(row, STATUS_COL)).to_text(),
        });
        row += 1;
    }

    Ok(Plan {
        name,
        description: sheet.get(DESCRIPTION).to_text(),
        stakeholders: sheet.get(STAKEHOLDERS).to_text(),
        target_end_date: read_date(sheet, TARGET_END_DATE)?,
        milestones,
    })
}
