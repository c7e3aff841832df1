//! Common operations shared by the one-shot commands and the chat front
//! end.

use std::path::{Path, PathBuf};

use jiff::civil::Date;

use crate::{
    config::Config,
    error::{Result, WaypointError},
    models::{Plan, PlanAnalysis},
    schedule::{analyze_plan, AnalysisSettings},
    store::{sheet::parse_date, PlanStore},
};

/// Parse a `YYYY-MM-DD` day given on the command line.
///
/// # Examples
///
/// ```rust
/// # use waypoint_core::operations::parse_day;
/// let day = parse_day("2024-01-06")?;
/// assert_eq!(day.to_string(), "2024-01-06");
///
/// assert!(parse_day("06/01/2024").is_err());
/// # Result::<(), waypoint_core::WaypointError>::Ok(())
/// ```
pub fn parse_day(value: &str) -> Result<Date> {
    parse_date(value.trim()).ok_or_else(|| {
        WaypointError::invalid_input("date")
            .with_reason(format!("'{value}' is not a date, use YYYY-MM-DD"))
    })
}

/// Load a plan file and analyze it as of `today`.
///
/// # Errors
///
/// * File and format errors from loading the plan
/// * `WaypointError::EmptySchedule` or `WaypointError::MissingDates` when
///   the plan cannot be analyzed
pub fn analyze_plan_file(
    store: &dyn PlanStore,
    path: &Path,
    today: Date,
    settings: &AnalysisSettings,
) -> Result<(Plan, PlanAnalysis)> {
    let plan = store.load(path)?;
    let analysis = analyze_plan(&plan, today, settings)?;
    Ok((plan, analysis))
}

/// Default download location for a plan: the configured plans directory
/// joined with the suggested file name.
pub fn default_download_path(config: &Config, plan: &Plan) -> Result<PathBuf> {
    Ok(config.plans_dir()?.join(plan.suggested_file_name()))
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use tempfile::TempDir;

    use super::*;
    use crate::{
        models::Milestone,
        store::{CsvPlanStore, MemoryPlanStore},
    };

    #[test]
    fn test_parse_day() {
        assert_eq!(parse_day(" 2024-02-29 ").ok(), Some(date(2024, 2, 29)));
        assert!(parse_day("2024-02-30").is_err());
        assert!(parse_day("").is_err());
    }

    #[test]
    fn test_analyze_plan_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("plan.csv");
        let plan = Plan {
            name: "Launch".to_string(),
            milestones: vec![Milestone {
                name: "Design".to_string(),
                start_date: Some(date(2024, 1, 1)),
                end_date: Some(date(2024, 1, 11)),
                owner: "Ana".to_string(),
                progress: 40,
                status: String::new(),
            }],
            ..Plan::default()
        };
        let store = CsvPlanStore::new();
        store.save(&plan, &path).expect("save plan");

        let (loaded, analysis) =
            analyze_plan_file(&store, &path, date(2024, 1, 6), &AnalysisSettings::default())
                .expect("analyze plan");

        assert_eq!(loaded.name, "Launch");
        assert_eq!(analysis.duration.days, 10);
        assert_eq!(analysis.milestones[0].expected_progress, 50.0);
    }

    #[test]
    fn test_analyze_plan_file_without_milestones() {
        let store = MemoryPlanStore::new();
        let plan = Plan {
            name: "Empty".to_string(),
            ..Plan::default()
        };
        store.save(&plan, Path::new("empty.csv")).expect("save plan");

        let result = analyze_plan_file(
            &store,
            Path::new("empty.csv"),
            date(2024, 1, 6),
            &AnalysisSettings::default(),
        );
        assert!(matches!(result, Err(WaypointError::EmptySchedule)));
    }

    #[test]
    fn test_default_download_path() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config = Config {
            plans_dir: Some(temp_dir.path().join("plans")),
            ..Config::default()
        };
        let plan = Plan {
            name: "Launch".to_string(),
            ..Plan::default()
        };

        let path = default_download_path(&config, &plan).expect("plans dir");
        assert_eq!(path, temp_dir.path().join("plans").join("Launch.csv"));

        let escaping = Plan {
            name: "../../outside".to_string(),
            ..Plan::default()
        };
        let path = default_download_path(&config, &escaping).expect("plans dir");
        assert_eq!(path.parent(), Some(temp_dir.path().join("plans").as_path()));
    }
}
