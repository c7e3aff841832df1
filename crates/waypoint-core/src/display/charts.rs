//! Text charts for schedule analyses.
//!
//! Both charts are plain text meant for a monospace block: the Gantt chart
//! places every milestone on the program timeline and marks today, the
//! progress chart compares actual progress with the time-elapsed
//! benchmark.

use std::fmt;

use jiff::civil::Date;

use crate::{
    models::{PlanAnalysis, TimelineState},
    schedule::days_between,
};

/// Columns used for the timeline of the Gantt chart.
pub const GANTT_WIDTH: usize = 40;

/// Columns used for one progress bar.
pub const PROGRESS_WIDTH: usize = 20;

const MAX_LABEL: usize = 24;

/// Shortens `name` to `width` characters, marking the cut.
fn fit(name: &str, width: usize) -> String {
    if name.chars().count() <= width {
        name.to_string()
    } else {
        let mut short: String = name.chars().take(width.saturating_sub(1)).collect();
        short.push('…');
        short
    }
}

fn label_width(analysis: &PlanAnalysis) -> usize {
    analysis
        .milestones
        .iter()
        .map(|m| m.name.chars().count())
        .max()
        .unwrap_or(0)
        .clamp(9, MAX_LABEL)
}

/// Gantt chart of a plan analysis.
///
/// # Examples
///
/// ```rust
/// use jiff::civil::date;
/// use waypoint_core::{
///     display::GanttChart,
///     models::{Milestone, Plan},
///     schedule::{analyze_plan, AnalysisSettings},
/// };
///
/// let plan = Plan {
///     name: "Launch".to_string(),
///     milestones: vec![Milestone {
///         name: "Design".to_string(),
///         start_date: Some(date(2024, 1, 1)),
///         end_date: Some(date(2024, 1, 11)),
///         owner: "Ana".to_string(),
///         progress: 40,
///         status: String::new(),
///     }],
///     ..Plan::default()
/// };
/// let analysis = analyze_plan(&plan, date(2024, 1, 6), &AnalysisSettings::default())?;
///
/// let chart = GanttChart(&analysis).to_string();
/// assert!(chart.contains("Design"));
/// assert!(chart.contains('▒'));
/// # Ok::<(), waypoint_core::WaypointError>(())
/// ```
pub struct GanttChart<'a>(pub &'a PlanAnalysis);

impl GanttChart<'_> {
    /// Timeline column of `date`, clamped to the program span.
    fn column(&self, date: Date) -> usize {
        let duration = &self.0.duration;
        if duration.days <= 0 {
            return 0;
        }
        let offset = days_between(duration.start, date).clamp(0, duration.days);
        let column = offset * (GANTT_WIDTH as i64 - 1) / duration.days;
        usize::try_from(column).unwrap_or(0)
    }

    fn today_column(&self) -> Option<usize> {
        let duration = &self.0.duration;
        let today = self.0.today;
        (duration.start <= today && today <= duration.end).then(|| self.column(today))
    }
}

impl fmt::Display for GanttChart<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let analysis = self.0;
        let label = label_width(analysis);
        let today = self.today_column();
        let start = analysis.duration.start.to_string();
        let end = analysis.duration.end.to_string();
        let gap = GANTT_WIDTH.saturating_sub(start.len() + end.len());
        writeln!(f, "{:<label$}  {start}{}{end}", "", " ".repeat(gap))?;

        for milestone in &analysis.milestones {
            let mut row = vec![' '; GANTT_WIDTH];
            let from = self.column(milestone.start_date);
            let to = self.column(milestone.end_date);
            for cell in row.iter_mut().take(to + 1).skip(from) {
                *cell = milestone.timeline.bar_char();
            }
            if let Some(column) = today {
                if row[column] == ' ' {
                    row[column] = '┆';
                }
            }
            let bars: String = row.into_iter().collect();
            writeln!(
                f,
                "{:<label$}  {bars}  {}%",
                fit(&milestone.name, label),
                milestone.actual_progress
            )?;
        }

        if let Some(column) = today {
            writeln!(
                f,
                "{:<label$}  {}▲ today ({})",
                "",
                " ".repeat(column),
                analysis.today
            )?;
        }
        write!(f, "{:<label$}  ", "")?;
        let states = [
            TimelineState::Completed,
            TimelineState::InProgress,
            TimelineState::Delayed,
            TimelineState::Upcoming,
        ];
        for (i, state) in states.iter().enumerate() {
            if i > 0 {
                write!(f, "  ")?;
            }
            write!(f, "{} {}", state.bar_char(), state.as_str())?;
        }
        writeln!(f)
    }
}

/// Progress bars of a plan analysis, with the expected progress shown for
/// milestones that lag it.
pub struct ProgressChart<'a>(pub &'a PlanAnalysis);

impl fmt::Display for ProgressChart<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let analysis = self.0;
        let label = label_width(analysis);
        for milestone in &analysis.milestones {
            let filled = (usize::from(milestone.actual_progress) * PROGRESS_WIDTH + 50) / 100;
            let filled = filled.min(PROGRESS_WIDTH);
            write!(
                f,
                "{:<label$}  {}{} {:>3}%",
                fit(&milestone.name, label),
                "█".repeat(filled),
                "░".repeat(PROGRESS_WIDTH - filled),
                milestone.actual_progress
            )?;
            if milestone.expected_progress > f64::from(milestone.actual_progress) {
                write!(f, "  (expected {:.2}%)", milestone.expected_progress)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::{
        models::{Milestone, Plan},
        schedule::{analyze_plan, AnalysisSettings},
    };

    fn milestone(name: &str, start: Date, end: Date, progress: u8) -> Milestone {
        Milestone {
            name: name.to_string(),
            start_date: Some(start),
            end_date: Some(end),
            owner: "Ana".to_string(),
            progress,
            status: String::new(),
        }
    }

    fn sample_analysis(today: Date) -> PlanAnalysis {
        let plan = Plan {
            name: "Launch".to_string(),
            milestones: vec![
                milestone("Design", date(2024, 1, 1), date(2024, 1, 11), 100),
                milestone("Build", date(2024, 1, 11), date(2024, 2, 10), 10),
                milestone("Release", date(2024, 2, 10), date(2024, 2, 20), 0),
            ],
            ..Plan::default()
        };
        analyze_plan(&plan, today, &AnalysisSettings::default()).expect("plan has dates")
    }

    #[test]
    fn test_gantt_rows_follow_timeline_states() {
        let analysis = sample_analysis(date(2024, 1, 20));
        let chart = GanttChart(&analysis).to_string();
        let lines: Vec<&str> = chart.lines().collect();

        assert!(lines[0].contains("2024-01-01"));
        assert!(lines[0].contains("2024-02-20"));
        assert!(lines[1].starts_with("Design"));
        assert!(lines[1].contains('█'));
        assert!(lines[2].starts_with("Build"));
        assert!(lines[2].contains('▓'));
        assert!(lines[3].starts_with("Release"));
        assert!(lines[3].contains('░'));
        assert!(chart.contains("▲ today (2024-01-20)"));
    }

    #[test]
    fn test_gantt_omits_today_outside_program() {
        let analysis = sample_analysis(date(2025, 1, 1));
        let chart = GanttChart(&analysis).to_string();
        assert!(!chart.contains("today ("));
    }

    #[test]
    fn test_gantt_single_day_program() {
        let plan = Plan {
            milestones: vec![milestone("Kickoff", date(2024, 1, 1), date(2024, 1, 1), 0)],
            ..Plan::default()
        };
        let analysis = analyze_plan(&plan, date(2024, 1, 1), &AnalysisSettings::default())
            .expect("plan has dates");
        let chart = GanttChart(&analysis).to_string();
        assert!(chart.contains("Kickoff"));
    }

    #[test]
    fn test_progress_chart_shows_expected_when_lagging() {
        let analysis = sample_analysis(date(2024, 1, 26));
        let chart = ProgressChart(&analysis).to_string();
        let lines: Vec<&str> = chart.lines().collect();

        assert!(lines[0].contains(&format!("{} 100%", "█".repeat(20))));
        assert!(!lines[0].contains("expected"));
        assert!(lines[1].contains(&format!("{}{}  10%", "█".repeat(2), "░".repeat(18))));
        assert!(lines[1].contains("(expected 50.00%)"));
        assert!(!lines[2].contains("expected"));
    }

    #[test]
    fn test_long_names_are_shortened() {
        assert_eq!(fit("Short", 9), "Short");
        assert_eq!(fit("A very long milestone name indeed", 10), "A very lo…");
    }
}
