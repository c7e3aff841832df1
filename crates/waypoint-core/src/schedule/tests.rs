//! Tests for the schedule analyzer.

use jiff::civil::{date, Date};

use super::*;

fn milestone(name: &str, start: Date, end: Date, progress: u8) -> Milestone {
    Milestone {
        name: name.to_string(),
        start_date: Some(start),
        end_date: Some(end),
        owner: "Owner".to_string(),
        progress,
        status: String::new(),
    }
}

fn assess(m: &Milestone, target: Option<Date>, today: Date) -> ProgressAssessment {
    analyze_milestone_progress(m, target, today, &AnalysisSettings::default())
        .expect("milestone has dates")
}

#[test]
fn test_mid_window_at_tolerance_is_on_track() {
    let m = milestone("Design", date(2024, 1, 1), date(2024, 1, 11), 40);
    let result = assess(&m, None, date(2024, 1, 6));

    assert_eq!(result.expected_progress, 50.0);
    assert_eq!(result.status, MilestoneStatus::OnTrack);
    assert!(result.warning.is_none());
}

#[test]
fn test_mid_window_lagging_is_behind_schedule() {
    let m = milestone("Design", date(2024, 1, 1), date(2024, 1, 11), 20);
    let result = assess(&m, None, date(2024, 1, 6));

    assert_eq!(result.status, MilestoneStatus::BehindSchedule);
    assert_eq!(
        result.warning.as_deref(),
        Some("Milestone 'Design' is behind schedule! It should be at about 50.00% progress.")
    );
    // Future end date: never a significant delay
    assert!(!is_significant_delay(
        result.status,
        date(2024, 1, 11),
        date(2024, 1, 6),
        &AnalysisSettings::default()
    ));
}

#[test]
fn test_past_due_and_done_is_completed() {
    let m = milestone("Launch", date(2023, 12, 1), date(2024, 1, 1), 100);
    let result = assess(&m, None, date(2024, 2, 1));

    assert_eq!(result.status, MilestoneStatus::Completed);
    assert!(result.warning.is_none());
    assert_eq!(result.expected_progress, 100.0);
}

#[test]
fn test_past_due_and_unfinished_is_significant_delay() {
    let m = milestone("Launch", date(2023, 12, 1), date(2024, 1, 1), 90);
    let today = date(2024, 2, 1);
    let result = assess(&m, None, today);

    assert_eq!(result.status, MilestoneStatus::BehindSchedule);
    assert_eq!(
        result.warning.as_deref(),
        Some("Milestone 'Launch' is past its end date and not 100% complete.")
    );
    assert!(is_significant_delay(
        result.status,
        date(2024, 1, 1),
        today,
        &AnalysisSettings::default()
    ));
}

#[test]
fn test_recently_past_due_is_not_significant() {
    let settings = AnalysisSettings::default();
    assert!(!is_significant_delay(
        MilestoneStatus::BehindSchedule,
        date(2024, 1, 1),
        date(2024, 1, 7),
        &settings
    ));
    assert!(is_significant_delay(
        MilestoneStatus::BehindSchedule,
        date(2024, 1, 1),
        date(2024, 1, 8),
        &settings
    ));
    assert!(!is_significant_delay(
        MilestoneStatus::Completed,
        date(2024, 1, 1),
        date(2024, 3, 1),
        &settings
    ));
}

#[test]
fn test_after_target_is_critical_regardless_of_progress() {
    let target = Some(date(2024, 6, 1));
    for progress in [0, 50, 100] {
        let m = milestone("Rollout", date(2024, 5, 1), date(2024, 7, 1), progress);
        for today in [date(2024, 4, 1), date(2024, 6, 15), date(2024, 8, 1)] {
            let result = assess(&m, target, today);
            assert_eq!(result.status, MilestoneStatus::Critical);
            assert_eq!(
                result.warning.as_deref(),
                Some("Milestone 'Rollout' end date is after the project target end date.")
            );
        }
    }
}

#[test]
fn test_ending_on_target_is_not_critical() {
    let m = milestone("Rollout", date(2024, 5, 1), date(2024, 6, 1), 100);
    let result = assess(&m, Some(date(2024, 6, 1)), date(2024, 5, 20));
    assert_eq!(result.status, MilestoneStatus::OnTrack);
}

#[test]
fn test_expected_progress_is_capped_and_zero_length_is_complete() {
    assert_eq!(
        expected_progress(date(2024, 1, 1), date(2024, 1, 11), date(2025, 1, 1)),
        100.0
    );
    assert_eq!(
        expected_progress(date(2024, 1, 1), date(2024, 1, 1), date(2023, 1, 1)),
        100.0
    );
    assert!(expected_progress(date(2024, 1, 1), date(2024, 1, 11), date(2023, 12, 27)) < 0.0);
}

#[test]
fn test_future_milestone_is_on_track() {
    let m = milestone("Later", date(2024, 3, 1), date(2024, 4, 1), 0);
    let result = assess(&m, None, date(2024, 1, 1));
    assert_eq!(result.status, MilestoneStatus::OnTrack);
}

#[test]
fn test_custom_tolerance() {
    let settings = AnalysisSettings {
        behind_tolerance: 0.0,
        significant_delay_days: 7,
    };
    let m = milestone("Design", date(2024, 1, 1), date(2024, 1, 11), 45);
    let result = analyze_milestone_progress(&m, None, date(2024, 1, 6), &settings)
        .expect("milestone has dates");
    assert_eq!(result.status, MilestoneStatus::BehindSchedule);
}

#[test]
fn test_program_duration_spans_all_milestones() {
    let milestones = vec![
        milestone("B", date(2024, 2, 1), date(2024, 3, 1), 0),
        milestone("A", date(2024, 1, 1), date(2024, 1, 15), 0),
        milestone("C", date(2024, 1, 20), date(2024, 4, 10), 0),
    ];
    let duration = calculate_program_duration(&milestones).expect("dates present");

    assert_eq!(duration.start, date(2024, 1, 1));
    assert_eq!(duration.end, date(2024, 4, 10));
    assert_eq!(duration.days, 100);
}

#[test]
fn test_program_duration_rejects_missing_dates() {
    let mut undated = milestone("Undated", date(2024, 1, 1), date(2024, 1, 2), 0);
    undated.end_date = None;
    let milestones = vec![milestone("Ok", date(2024, 1, 1), date(2024, 1, 2), 0), undated];

    match calculate_program_duration(&milestones) {
        Err(WaypointError::MissingDates { milestone }) => assert_eq!(milestone, "Undated"),
        other => panic!("expected MissingDates, got {other:?}"),
    }
}

#[test]
fn test_program_duration_rejects_empty_schedule() {
    assert!(matches!(
        calculate_program_duration(&[]),
        Err(WaypointError::EmptySchedule)
    ));
}

#[test]
fn test_analyze_plan_collects_only_significant_warnings() {
    let plan = Plan {
        name: "Apollo".to_string(),
        description: "Moon".to_string(),
        stakeholders: "NASA".to_string(),
        target_end_date: Some(date(2024, 6, 1)),
        milestones: vec![
            // 31 days late
            milestone("Late", date(2023, 12, 1), date(2024, 1, 1), 90),
            // lagging, window still open
            milestone("Lagging", date(2024, 1, 25), date(2024, 2, 4), 0),
            milestone("Done", date(2023, 12, 1), date(2024, 1, 10), 100),
            milestone("Beyond", date(2024, 3, 1), date(2024, 7, 1), 0),
        ],
    };
    let analysis =
        analyze_plan(&plan, date(2024, 2, 1), &AnalysisSettings::default()).expect("analysis");

    let statuses: Vec<_> = analysis.milestones.iter().map(|m| m.status).collect();
    assert_eq!(
        statuses,
        vec![
            MilestoneStatus::BehindSchedule,
            MilestoneStatus::BehindSchedule,
            MilestoneStatus::Completed,
            MilestoneStatus::Critical,
        ]
    );
    assert_eq!(
        analysis.delay_warnings,
        vec!["Milestone 'Late' is past its end date and not 100% complete.".to_string()]
    );
    assert!(analysis.milestones[0].significant_delay);
    assert!(!analysis.milestones[1].significant_delay);
    assert_eq!(analysis.milestones[0].timeline, TimelineState::Delayed);
    assert_eq!(analysis.milestones[2].timeline, TimelineState::Completed);
    assert_eq!(analysis.milestones[3].timeline, TimelineState::Upcoming);
    assert_eq!(analysis.count(MilestoneStatus::BehindSchedule), 2);
    assert_eq!(analysis.duration.start, date(2023, 12, 1));
    assert_eq!(analysis.duration.end, date(2024, 7, 1));
}

#[test]
fn test_timeline_in_progress() {
    let m = milestone("Now", date(2024, 1, 1), date(2024, 1, 31), 50);
    let state = timeline_state(
        MilestoneStatus::OnTrack,
        &m,
        date(2024, 1, 1),
        date(2024, 1, 31),
        date(2024, 1, 15),
    );
    assert_eq!(state, TimelineState::InProgress);
}
