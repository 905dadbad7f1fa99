/// Integration tests for recommendation selection
///
/// Selection is random, so each property is checked across many seeds.

use std::collections::HashSet;
use stress_detector::{
    models::StressLevel,
    recommendations::{catalog, Recommender, URGENT_NOTICE},
};

const SCORES: [f64; 8] = [0.0, 0.15, 0.3, 0.45, 0.6, 0.75, 0.8, 1.0];

#[test]
fn test_bundle_entries_come_from_tier_tables() {
    for seed in 0..200 {
        let mut recommender = Recommender::with_seed(seed);

        for score in SCORES {
            let level = StressLevel::from_probability(score);
            let bundle = recommender.generate_recommendations(score);

            assert_eq!(bundle.stress_level, level);
            assert!(catalog::BREATHING_EXERCISES.contains(&bundle.breathing_exercise.as_str()));
            assert!(catalog::physical_activities(level)
                .contains(&bundle.physical_activity.as_str()));
            assert!(catalog::mindfulness_activities(level).contains(&bundle.mindfulness.as_str()));
            assert!(catalog::lifestyle_changes(level).contains(&bundle.lifestyle_change.as_str()));
            assert!(catalog::social_support(level).contains(&bundle.social_support.as_str()));
        }
    }
}

#[test]
fn test_immediate_actions_are_two_distinct_tier_entries() {
    for seed in 0..200 {
        let mut recommender = Recommender::with_seed(seed);

        for score in SCORES {
            let level = StressLevel::from_probability(score);
            let bundle = recommender.generate_recommendations(score);

            assert_eq!(bundle.immediate_actions.len(), 2);
            let distinct: HashSet<&String> = bundle.immediate_actions.iter().collect();
            assert_eq!(distinct.len(), 2, "duplicate actions for seed {}", seed);

            for action in &bundle.immediate_actions {
                assert!(catalog::immediate_actions(level).contains(&action.as_str()));
            }
        }
    }
}

#[test]
fn test_urgent_notice_only_for_severe() {
    for seed in 0..50 {
        let mut recommender = Recommender::with_seed(seed);

        for score in SCORES {
            let bundle = recommender.generate_recommendations(score);
            if score >= 0.8 {
                assert_eq!(bundle.urgent_notice.as_deref(), Some(URGENT_NOTICE));
            } else {
                assert!(bundle.urgent_notice.is_none());
            }
        }
    }
}

#[test]
fn test_severe_reuses_high_activity_tables() {
    let high = StressLevel::High;

    for seed in 0..200 {
        let bundle = Recommender::with_seed(seed).generate_recommendations(0.95);

        assert_eq!(bundle.stress_level, StressLevel::Severe);
        assert!(catalog::physical_activities(high).contains(&bundle.physical_activity.as_str()));
        assert!(catalog::mindfulness_activities(high).contains(&bundle.mindfulness.as_str()));
        assert!(catalog::lifestyle_changes(high).contains(&bundle.lifestyle_change.as_str()));
        assert!(catalog::social_support(high).contains(&bundle.social_support.as_str()));

        // Immediate actions keep their own severe list
        for action in &bundle.immediate_actions {
            assert!(catalog::immediate_actions(StressLevel::Severe).contains(&action.as_str()));
        }
    }
}

#[test]
fn test_same_seed_gives_same_bundle() {
    let a = Recommender::with_seed(42).generate_recommendations(0.5);
    let b = Recommender::with_seed(42).generate_recommendations(0.5);
    assert_eq!(a, b);
}

#[test]
fn test_detailed_plan_wraps_bundle() {
    let plan = Recommender::with_seed(7).detailed_plan(0.65);

    assert_eq!(plan.stress_level, StressLevel::High);
    assert_eq!(plan.specific_recommendations.stress_level, StressLevel::High);
    assert_eq!(plan.morning_routine.len(), catalog::MORNING_ROUTINE.len());
    assert_eq!(plan.afternoon_routine.len(), catalog::AFTERNOON_ROUTINE.len());
    assert_eq!(plan.evening_routine.len(), catalog::EVENING_ROUTINE.len());
}

#[test]
fn test_bundle_serializes_without_absent_notice() {
    let bundle = Recommender::with_seed(1).generate_recommendations(0.2);
    let json = serde_json::to_value(&bundle).unwrap();

    assert_eq!(json["stress_level"], "low");
    assert!(json.get("urgent_notice").is_none());
}
