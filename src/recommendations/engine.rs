use crate::models::{DetailedPlan, RecommendationBundle, StressLevel};
use crate::recommendations::catalog;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use tracing::debug;

/// Picks self-care suggestions from the fixed tables
pub struct Recommender {
    rng: StdRng,
}

impl Recommender {
    /// Create a recommender seeded from the operating system
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a recommender with deterministic selection
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Build a recommendation bundle for a stress probability
    pub fn generate_recommendations(&mut self, stress_score: f64) -> RecommendationBundle {
        let level = StressLevel::from_probability(stress_score);

        let bundle = RecommendationBundle {
            stress_level: level,
            immediate_actions: self.immediate_actions(level),
            breathing_exercise: self.pick(catalog::BREATHING_EXERCISES),
            physical_activity: self.pick(catalog::physical_activities(level)),
            mindfulness: self.pick(catalog::mindfulness_activities(level)),
            lifestyle_change: self.pick(catalog::lifestyle_changes(level)),
            social_support: self.pick(catalog::social_support(level)),
            urgent_notice: level
                .is_urgent()
                .then(|| catalog::URGENT_NOTICE.to_string()),
        };

        debug!(stress_score, level = level.as_str(), "Recommendations generated");

        bundle
    }

    /// Build a full daily plan for a stress probability
    pub fn detailed_plan(&mut self, stress_score: f64) -> DetailedPlan {
        let specific_recommendations = self.generate_recommendations(stress_score);

        DetailedPlan {
            stress_level: specific_recommendations.stress_level,
            morning_routine: to_owned(catalog::MORNING_ROUTINE),
            afternoon_routine: to_owned(catalog::AFTERNOON_ROUTINE),
            evening_routine: to_owned(catalog::EVENING_ROUTINE),
            specific_recommendations,
        }
    }

    /// Two distinct entries from the tier's own list
    fn immediate_actions(&mut self, level: StressLevel) -> Vec<String> {
        catalog::immediate_actions(level)
            .choose_multiple(&mut self.rng, 2)
            .map(|action| action.to_string())
            .collect()
    }

    fn pick(&mut self, options: &[&str]) -> String {
        // Tables are non-empty constants
        options
            .choose(&mut self.rng)
            .map(|option| option.to_string())
            .unwrap_or_default()
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::new()
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}
