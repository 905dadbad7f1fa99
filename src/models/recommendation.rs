use crate::models::StressLevel;
use serde::{Deserialize, Serialize};

/// Self-care suggestions selected for a single prediction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationBundle {
    /// Tier the bundle was selected for
    pub stress_level: StressLevel,

    /// Two distinct actions to take right away
    pub immediate_actions: Vec<String>,

    /// Breathing exercise instructions
    pub breathing_exercise: String,

    pub physical_activity: String,

    pub mindfulness: String,

    pub lifestyle_change: String,

    pub social_support: String,

    /// Only present for the severe tier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urgent_notice: Option<String>,
}

/// Fixed daily routines wrapped around a recommendation bundle
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DetailedPlan {
    pub stress_level: StressLevel,
    pub morning_routine: Vec<String>,
    pub afternoon_routine: Vec<String>,
    pub evening_routine: Vec<String>,
    pub specific_recommendations: RecommendationBundle,
}
