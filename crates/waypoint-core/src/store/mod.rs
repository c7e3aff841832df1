//! Plan persistence.
//!
//! A plan file holds exactly one plan in the fixed cell layout described in
//! [`layout`]. The [`PlanStore`] trait is the seam the session talks to;
//! [`CsvPlanStore`] keeps plans on disk and [`MemoryPlanStore`] keeps them
//! in memory.

use std::{
    cell::RefCell,
    collections::HashMap,
    fs::{self, File},
    io,
    path::{Path, PathBuf},
    rc::Rc,
};

use log::info;

use crate::{
    error::{FileResultExt, Result, SpreadsheetResultExt, WaypointError},
    models::Plan,
};

pub mod layout;
pub mod sheet;

#[cfg(test)]
mod tests;

pub use layout::{plan_from_sheet, plan_to_sheet, NOT_APPLICABLE};
pub use sheet::{Cell, CellRef, Sheet};

/// Loads and saves whole plans.
pub trait PlanStore {
    /// Reads the plan stored at `source`.
    fn load(&self, source: &Path) -> Result<Plan>;

    /// Writes `plan` to `destination`, replacing what was there.
    ///
    /// A plan that cannot be laid out is rejected before anything is
    /// written.
    fn save(&self, plan: &Plan, destination: &Path) -> Result<()>;
}

/// Stores plans as CSV spreadsheets.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvPlanStore;

impl CsvPlanStore {
    pub fn new() -> Self {
        Self
    }
}

impl PlanStore for CsvPlanStore {
    fn load(&self, source: &Path) -> Result<Plan> {
        let file = File::open(source).fs_context(source)?;
        let sheet = Sheet::read_csv(file).sheet_context(source)?;
        let plan = plan_from_sheet(&sheet)?;
        info!(
            "Loaded plan '{}' with {} milestones from {}",
            plan.name,
            plan.milestones.len(),
            source.display()
        );
        Ok(plan)
    }

    fn save(&self, plan: &Plan, destination: &Path) -> Result<()> {
        let sheet = plan_to_sheet(plan)?;
        if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).fs_context(parent)?;
        }
        let file = File::create(destination).fs_context(destination)?;
        sheet.write_csv(file).sheet_context(destination)?;
        info!("Saved plan '{}' to {}", plan.name, destination.display());
        Ok(())
    }
}

#[derive(Debug, Default)]
struct MemoryFiles {
    sheets: HashMap<PathBuf, Sheet>,
    read_only: bool,
}

/// Keeps plan sheets in memory, keyed by path.
///
/// Clones share the same files, so a caller can hand one clone to a session
/// and inspect what was saved through another.
#[derive(Debug, Clone, Default)]
pub struct MemoryPlanStore {
    files: Rc<RefCell<MemoryFiles>>,
}

impl MemoryPlanStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places a raw sheet at `path`.
    pub fn insert_sheet(&self, path: impl Into<PathBuf>, sheet: Sheet) {
        self.files.borrow_mut().sheets.insert(path.into(), sheet);
    }

    /// The raw sheet stored at `path`, if any.
    pub fn sheet(&self, path: &Path) -> Option<Sheet> {
        self.files.borrow().sheets.get(path).cloned()
    }

    /// Makes every following save fail with a permission error.
    pub fn set_read_only(&self, read_only: bool) {
        self.files.borrow_mut().read_only = read_only;
    }
}

impl PlanStore for MemoryPlanStore {
    fn load(&self, source: &Path) -> Result<Plan> {
        let files = self.files.borrow();
        let sheet = files
            .sheets
            .get(source)
            .ok_or_else(|| WaypointError::FileSystem {
                path: source.to_path_buf(),
                source: io::Error::new(io::ErrorKind::NotFound, "no such plan file"),
            })?;
        plan_from_sheet(sheet)
    }

    fn save(&self, plan: &Plan, destination: &Path) -> Result<()> {
        let sheet = plan_to_sheet(plan)?;
        let mut files = self.files.borrow_mut();
        if files.read_only {
            return Err(WaypointError::FileSystem {
                path: destination.to_path_buf(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "store is read-only"),
            });
        }
        files
            .sheets
            .insert(destination.to_path_buf(), sheet);
        Ok(())
    }
}
