//! Fixed self-care tables.
//!
//! Activity tables have three intensities (low, moderate, high); the severe
//! tier reads the high tables. Immediate actions have a list per tier,
//! severe included.

use crate::models::StressLevel;

/// Tier-independent breathing exercises
pub const BREATHING_EXERCISES: &[&str] = &[
    // Box Breathing
    "Inhale for 4 counts, hold for 4, exhale for 4, hold for 4. Repeat.",
    // 4-7-8 Breathing
    "Inhale for 4 counts, hold for 7, exhale for 8 counts.",
    // Deep Belly Breathing
    "Place hand on belly, breathe deeply making your belly rise and fall.",
    // Alternate Nostril Breathing
    "Alternate breathing through left and right nostrils.",
    // Progressive Relaxation
    "Tense and relax each muscle group progressively.",
];

const PHYSICAL_LOW: &[&str] = &[
    "Take a gentle 10-minute walk",
    "Basic stretching exercises",
    "Light gardening",
    "Gentle yoga poses",
    "Short walk around your workspace",
];

const PHYSICAL_MODERATE: &[&str] = &[
    "30-minute brisk walk",
    "Bike ride",
    "Swimming",
    "Dynamic stretching",
    "Dancing to favorite music",
];

const PHYSICAL_HIGH: &[&str] = &[
    "High-intensity workout",
    "Running",
    "Boxing exercise",
    "Jump rope",
    "Competitive sports",
];

const MINDFULNESS_LOW: &[&str] = &[
    "5-minute meditation",
    "Mindful observation of surroundings",
    "Gratitude journaling",
    "Mindful walking",
    "Body scan meditation",
];

const MINDFULNESS_MODERATE: &[&str] = &[
    "15-minute guided meditation",
    "Mindful drawing or coloring",
    "Nature meditation",
    "Progressive muscle relaxation",
    "Mindful eating practice",
];

const MINDFULNESS_HIGH: &[&str] = &[
    "30-minute deep meditation",
    "Yoga nidra",
    "Extended journaling session",
    "Visualization exercises",
    "Sound bath meditation",
];

const LIFESTYLE_LOW: &[&str] = &[
    "Take regular breaks during work",
    "Maintain a consistent sleep schedule",
    "Stay hydrated throughout the day",
    "Practice digital detox for 30 minutes",
    "Organize your workspace",
];

const LIFESTYLE_MODERATE: &[&str] = &[
    "Establish a morning routine",
    "Create a balanced daily schedule",
    "Set boundaries with work and personal time",
    "Improve sleep hygiene",
    "Regular meal times",
];

const LIFESTYLE_HIGH: &[&str] = &[
    "Seek professional counseling",
    "Join stress management workshops",
    "Consider work-life balance adjustments",
    "Create a support system",
    "Regular health check-ups",
];

const SOCIAL_LOW: &[&str] = &[
    "Call a friend for a quick chat",
    "Share your feelings with family",
    "Join online communities",
    "Participate in group activities",
    "Connect with colleagues",
];

const SOCIAL_MODERATE: &[&str] = &[
    "Schedule regular social activities",
    "Join support groups",
    "Plan social gatherings",
    "Engage in team sports or group exercises",
    "Regular family meetings",
];

const SOCIAL_HIGH: &[&str] = &[
    "Seek professional counseling",
    "Join therapy groups",
    "Regular support group meetings",
    "Family therapy sessions",
    "Build a strong support network",
];

const IMMEDIATE_LOW: &[&str] = &[
    "Take a few deep breaths",
    "Stretch at your desk",
    "Drink some water",
    "Take a short break",
];

const IMMEDIATE_MODERATE: &[&str] = &[
    "Step outside for fresh air",
    "Do a quick breathing exercise",
    "Call a friend",
    "Listen to calming music",
];

const IMMEDIATE_HIGH: &[&str] = &[
    "Find a quiet space",
    "Practice box breathing",
    "Call your support person",
    "Use a stress relief app",
];

const IMMEDIATE_SEVERE: &[&str] = &[
    "Contact a mental health professional",
    "Use crisis helpline if needed",
    "Reach out to your support system",
    "Remove yourself from stressful situation if possible",
];

/// Appended to every severe bundle
pub const URGENT_NOTICE: &str = "Your stress levels appear to be severe. Consider speaking with a mental health \
professional or counselor. If you're having thoughts of self-harm, please contact \
emergency services or a crisis helpline immediately.";

pub const MORNING_ROUTINE: &[&str] = &[
    "Start with deep breathing exercises",
    "Light stretching or yoga",
    "Healthy breakfast",
    "Review your day's priorities",
];

pub const AFTERNOON_ROUTINE: &[&str] = &[
    "Take regular breaks",
    "Practice mindfulness during lunch",
    "Short walk if possible",
    "Stay hydrated",
];

pub const EVENING_ROUTINE: &[&str] = &[
    "Wind down activities",
    "Limited screen time",
    "Relaxation exercises",
    "Regular sleep schedule",
];

pub fn physical_activities(level: StressLevel) -> &'static [&'static str] {
    match level.activity_tier() {
        StressLevel::Low => PHYSICAL_LOW,
        StressLevel::Moderate => PHYSICAL_MODERATE,
        _ => PHYSICAL_HIGH,
    }
}

pub fn mindfulness_activities(level: StressLevel) -> &'static [&'static str] {
    match level.activity_tier() {
        StressLevel::Low => MINDFULNESS_LOW,
        StressLevel::Moderate => MINDFULNESS_MODERATE,
        _ => MINDFULNESS_HIGH,
    }
}

pub fn lifestyle_changes(level: StressLevel) -> &'static [&'static str] {
    match level.activity_tier() {
        StressLevel::Low => LIFESTYLE_LOW,
        StressLevel::Moderate => LIFESTYLE_MODERATE,
        _ => LIFESTYLE_HIGH,
    }
}

pub fn social_support(level: StressLevel) -> &'static [&'static str] {
    match level.activity_tier() {
        StressLevel::Low => SOCIAL_LOW,
        StressLevel::Moderate => SOCIAL_MODERATE,
        _ => SOCIAL_HIGH,
    }
}

pub fn immediate_actions(level: StressLevel) -> &'static [&'static str] {
    match level {
        StressLevel::Low => IMMEDIATE_LOW,
        StressLevel::Moderate => IMMEDIATE_MODERATE,
        StressLevel::High => IMMEDIATE_HIGH,
        StressLevel::Severe => IMMEDIATE_SEVERE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_tier_has_enough_entries() {
        for level in StressLevel::iter() {
            assert!(!physical_activities(level).is_empty());
            assert!(!mindfulness_activities(level).is_empty());
            assert!(!lifestyle_changes(level).is_empty());
            assert!(!social_support(level).is_empty());
            assert!(immediate_actions(level).len() >= 2);
        }
        assert_eq!(BREATHING_EXERCISES.len(), 5);
    }

    #[test]
    fn test_severe_shares_high_activity_tables() {
        assert_eq!(
            physical_activities(StressLevel::Severe),
            physical_activities(StressLevel::High)
        );
        assert_eq!(
            mindfulness_activities(StressLevel::Severe),
            mindfulness_activities(StressLevel::High)
        );
        assert_eq!(
            lifestyle_changes(StressLevel::Severe),
            lifestyle_changes(StressLevel::High)
        );
        assert_eq!(
            social_support(StressLevel::Severe),
            social_support(StressLevel::High)
        );
        assert_ne!(
            physical_activities(StressLevel::High),
            physical_activities(StressLevel::Moderate)
        );
        assert_ne!(
            immediate_actions(StressLevel::Severe),
            immediate_actions(StressLevel::High)
        );
    }

    #[test]
    fn test_immediate_action_entries_are_distinct() {
        for level in StressLevel::iter() {
            let actions = immediate_actions(level);
            let unique: std::collections::HashSet<_> = actions.iter().collect();
            assert_eq!(unique.len(), actions.len());
        }
    }
}
