#[cfg(test)]
mod model_tests {
    use jiff::civil::date;

    use crate::models::{
        milestone::DEPENDENCY_PREFIX, Milestone, MilestoneStatus, Plan, TimelineState,
    };

    fn create_test_milestone(name: &str) -> Milestone {
        Milestone {
            name: name.to_string(),
            start_date: Some(date(2024, 1, 1)),
            end_date: Some(date(2024, 1, 31)),
            owner: "Ana".to_string(),
            progress: 25,
            status: String::new(),
        }
    }

    fn create_test_plan() -> Plan {
        Plan {
            name: "Website Relaunch".to_string(),
            description: "New marketing site".to_string(),
            stakeholders: "Marketing, IT".to_string(),
            target_end_date: Some(date(2024, 6, 30)),
            milestones: vec![
                create_test_milestone("Design"),
                create_test_milestone("Build"),
                create_test_milestone("Design"),
            ],
        }
    }

    #[test]
    fn test_blank_milestone_defaults_dates_to_today() {
        let milestone = Milestone::blank(date(2024, 3, 15));

        assert!(milestone.name.is_empty());
        assert_eq!(milestone.start_date, Some(date(2024, 3, 15)));
        assert_eq!(milestone.end_date, Some(date(2024, 3, 15)));
        assert_eq!(milestone.progress, 0);
    }

    #[test]
    fn test_dependency_milestone() {
        let milestone = Milestone::dependency("Project 2", date(2024, 2, 1), date(2024, 2, 20), 30);

        assert_eq!(milestone.name, "d - Dependency on Project 2");
        assert!(milestone.name.starts_with(DEPENDENCY_PREFIX));
        assert_eq!(milestone.owner, "N/A");
        assert_eq!(milestone.progress, 30);
        assert_eq!(
            milestone.dates(),
            Some((date(2024, 2, 1), date(2024, 2, 20)))
        );
    }

    #[test]
    fn test_dates_requires_both_ends() {
        let mut milestone = create_test_milestone("Design");
        milestone.end_date = None;
        assert_eq!(milestone.dates(), None);
    }

    #[test]
    fn test_remove_milestone_removes_first_match_only() {
        let mut plan = create_test_plan();
        plan.milestones[2].owner = "Ben".to_string();

        let removed = plan.remove_milestone("Design").expect("milestone exists");

        assert_eq!(removed.owner, "Ana");
        assert_eq!(plan.milestone_names(), vec!["Build", "Design"]);
        assert_eq!(plan.milestones[1].owner, "Ben");
        assert!(plan.remove_milestone("Launch").is_none());
    }

    #[test]
    fn test_milestone_index_finds_first_match() {
        let plan = create_test_plan();

        assert_eq!(plan.milestone_index("Design"), Some(0));
        assert_eq!(plan.milestone_index("Build"), Some(1));
        assert_eq!(plan.milestone_index("design"), None);
    }

    #[test]
    fn test_suggested_file_name() {
        let plan = create_test_plan();
        assert_eq!(plan.suggested_file_name(), "Website Relaunch.csv");

        let unnamed = Plan::new();
        assert_eq!(unnamed.suggested_file_name(), "project_plan.csv");
    }

    #[test]
    fn test_suggested_file_name_stays_a_plain_file_name() {
        let named = |name: &str| Plan {
            name: name.to_string(),
            ..Plan::new()
        };

        assert_eq!(named("../../etc/passwd").suggested_file_name(), ".._.._etc_passwd.csv");
        assert_eq!(named("/tmp/plan").suggested_file_name(), "_tmp_plan.csv");
        assert_eq!(named(r"Q1\Q2: launch?").suggested_file_name(), "Q1_Q2_ launch_.csv");
        assert_eq!(named("..").suggested_file_name(), "project_plan.csv");
    }

    #[test]
    fn test_milestone_status_parsing() {
        assert_eq!("On Track".parse::<MilestoneStatus>(), Ok(MilestoneStatus::OnTrack));
        assert_eq!("behind_schedule".parse::<MilestoneStatus>(), Ok(MilestoneStatus::BehindSchedule));
        assert_eq!("COMPLETED".parse::<MilestoneStatus>(), Ok(MilestoneStatus::Completed));
        assert_eq!("critical".parse::<MilestoneStatus>(), Ok(MilestoneStatus::Critical));
        assert!("late".parse::<MilestoneStatus>().is_err());
    }

    #[test]
    fn test_milestone_status_labels() {
        assert_eq!(MilestoneStatus::BehindSchedule.as_str(), "Behind Schedule");
        assert_eq!(MilestoneStatus::OnTrack.with_icon(), "➤ On Track");
        assert_eq!(TimelineState::Completed.bar_char(), '█');
        assert_eq!(TimelineState::Upcoming.as_str(), "upcoming");
    }

    #[test]
    fn test_plan_serialization_round_trip() {
        let plan = create_test_plan();
        let json = serde_json::to_string(&plan).expect("serialize plan");
        let decoded: Plan = serde_json::from_str(&json).expect("deserialize plan");
        assert_eq!(decoded, plan);
    }
}
