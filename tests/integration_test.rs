use std::io::Write;

use mockall::mock;
use tempfile::NamedTempFile;

use rift_badges::{
    catalog::BadgeCatalog,
    models::{BadgeCategory, BadgeEngineError, BadgeTier, Metric, Result, Role, StatsSnapshot},
    scoring::{self, BadgeCalculator},
    sources::{evaluate_source, SnapshotFileSource, StatsSource},
};

/// A strong laning performance: earns cs_dominator, lane_bully and
/// first_blood_contributor, leaves gold_efficiency_expert and
/// visionary_architect as near misses, everything else far off.
fn farming_snapshot() -> StatsSnapshot {
    [
        (Metric::CsPerMinute, 8.5),
        (Metric::CsDifferentialAt10, 12.0),
        (Metric::CsDifferentialAt20, 16.0),
        (Metric::GoldDifferentialAt10, 350.0),
        (Metric::KillParticipationInLane, 65.0),
        (Metric::SoloKillRate, 25.0),
        (Metric::PressureScore, 80.0),
        (Metric::FirstBloodParticipationRate, 45.0),
        (Metric::VisionScorePerMinute, 2.0),
        (Metric::ControlWardEfficiency, 70.0),
        (Metric::VisionDenial, 9.0),
        (Metric::GoldPerMinute, 380.0),
        (Metric::GoldToDamageConversion, 1.0),
        (Metric::ItemCompletionSpeed, 80.0),
    ]
    .into_iter()
    .collect()
}

#[test]
fn full_evaluation_of_a_farming_snapshot() {
    let calculator = BadgeCalculator::new(BadgeCatalog::builtin());
    let result = calculator.evaluate_player(&farming_snapshot());

    let earned: Vec<&str> = result.earned_badges.iter().map(|e| e.badge.id.as_str()).collect();
    assert_eq!(
        earned,
        ["cs_dominator", "lane_bully", "first_blood_contributor"]
    );

    // Earned and in-progress together cover the catalog exactly once.
    assert_eq!(result.total_badges(), calculator.catalog().len());
    for badge in calculator.catalog().iter() {
        assert!(result.is_earned(&badge.id) != result.badge_progress.contains_key(&badge.id));
    }

    assert_eq!(scoring::completion_percentage(&result), 20);

    let distribution = scoring::category_distribution(&result);
    assert_eq!(distribution.len(), 2);
    assert_eq!(distribution[&BadgeCategory::ResourceManagement], 1);
    assert_eq!(distribution[&BadgeCategory::EarlyGameLaning], 2);
}

#[test]
fn suggestions_surface_the_closest_badges() {
    let calculator = BadgeCalculator::new(BadgeCatalog::builtin());
    let stats = farming_snapshot();

    let suggestions = calculator.suggest_badges(&stats, 3);
    let ids: Vec<&str> = suggestions.iter().map(|s| s.badge.id.as_str()).collect();
    assert_eq!(ids, ["gold_efficiency_expert", "visionary_architect"]);

    for suggestion in &suggestions {
        assert!(suggestion.progress > 50.0);
        assert!(!suggestion.missing_requirements.is_empty());
    }

    // All three gold efficiency requirements are just short of their marks.
    assert_eq!(suggestions[0].missing_requirements.len(), 3);
    assert!(suggestions[0].progress > suggestions[1].progress);
}

#[test]
fn tier_ladder_for_cs_dominator() {
    let calculator = BadgeCalculator::new(BadgeCatalog::builtin());
    let stats = farming_snapshot();

    let base = calculator.catalog().get("cs_dominator").unwrap();
    let ladder = scoring::project_tiers(base);
    assert_eq!(ladder.len(), 5);
    assert_eq!(ladder[0].id, "cs_dominator_bronze");
    assert_eq!(ladder[4].id, "cs_dominator_diamond");

    // 8.5 cs/min clears the gold threshold (7.5) but not platinum (9.0).
    assert_eq!(
        calculator.highest_earned_tier("cs_dominator", &stats),
        Some(BadgeTier::Gold)
    );
}

#[test]
fn snapshot_files_feed_the_same_evaluation() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "csPerMinute": 8.5,
            "csDifferentialAt10": 12.0,
            "csDifferentialAt20": 16.0,
            "firstBloodParticipationRate": 45.0
        }}"#
    )
    .unwrap();

    let calculator = BadgeCalculator::new(BadgeCatalog::builtin());
    let source = SnapshotFileSource::new(file.path());
    let result = evaluate_source(&source, &calculator).unwrap();

    let earned: Vec<&str> = result.earned_badges.iter().map(|e| e.badge.id.as_str()).collect();
    assert_eq!(earned, ["cs_dominator", "first_blood_contributor"]);
}

#[test]
fn evaluation_results_serialize_with_wire_metric_names() {
    let calculator = BadgeCalculator::new(BadgeCatalog::builtin());
    let result = calculator.evaluate_player(&farming_snapshot());

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["earned_badges"][0]["badge"]["id"], "cs_dominator");
    assert!(json["earned_badges"][0]["achieved_at"].is_string());
    assert_eq!(json["source_stats"]["csPerMinute"], 8.5);
    assert!(json["badge_progress"]["gold_efficiency_expert"].is_number());

    // Requirements keep the frontend's operator and period codes.
    let requirement = &json["earned_badges"][0]["badge"]["requirements"][0];
    assert_eq!(requirement["metric"], "csPerMinute");
    assert_eq!(requirement["operator"], "gte");
    assert_eq!(requirement["period"], "last_10_games");
}

mock! {
    Source {}

    impl StatsSource for Source {
        fn describe(&self) -> String;
        fn fetch_snapshot(&self) -> Result<StatsSnapshot>;
    }
}

#[test]
fn mocked_sources_drive_the_full_pipeline() {
    let mut source = MockSource::new();
    source.expect_describe().return_const("mocked stats".to_string());
    source
        .expect_fetch_snapshot()
        .times(1)
        .returning(|| Ok(farming_snapshot()));

    let calculator = BadgeCalculator::new(BadgeCatalog::builtin());
    let result = evaluate_source(&source, &calculator).unwrap();
    assert_eq!(result.earned_badges.len(), 3);
}

#[test]
fn source_failures_propagate_to_the_caller() {
    let mut source = MockSource::new();
    source.expect_describe().return_const("broken source".to_string());
    source.expect_fetch_snapshot().returning(|| {
        Err(BadgeEngineError::SnapshotIo(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "snapshot missing",
        )))
    });

    let calculator = BadgeCalculator::new(BadgeCatalog::builtin());
    let err = evaluate_source(&source, &calculator).unwrap_err();
    assert!(matches!(err, BadgeEngineError::SnapshotIo(_)));
}

#[test]
fn role_parsing_accepts_the_common_aliases() {
    assert_eq!(Role::from_str("top"), Some(Role::Top));
    assert_eq!(Role::from_str("jungle"), Some(Role::Jungle));
    assert_eq!(Role::from_str("jg"), Some(Role::Jungle));
    assert_eq!(Role::from_str("mid"), Some(Role::Mid));
    assert_eq!(Role::from_str("adc"), Some(Role::Adc));
    assert_eq!(Role::from_str("bot"), Some(Role::Adc));
    assert_eq!(Role::from_str("support"), Some(Role::Support));
    assert_eq!(Role::from_str("invalid"), None);
}
