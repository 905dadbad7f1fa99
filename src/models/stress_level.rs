use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Probability at which a text stops being `Low`
pub const MODERATE_THRESHOLD: f64 = 0.3;
/// Probability at which a text becomes `High`
pub const HIGH_THRESHOLD: f64 = 0.6;
/// Probability at which a text becomes `Severe`
pub const SEVERE_THRESHOLD: f64 = 0.8;

/// Four ordered stress severity tiers
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumString,
    Display,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum StressLevel {
    Low,
    Moderate,
    High,
    Severe,
}

impl StressLevel {
    /// Map a stress probability onto a tier.
    ///
    /// Lower bounds are inclusive: 0.3 is `Moderate`, 0.6 is `High`,
    /// 0.8 is `Severe`. NaN compares false everywhere and lands in `Severe`.
    pub fn from_probability(probability: f64) -> Self {
        if probability < MODERATE_THRESHOLD {
            StressLevel::Low
        } else if probability < HIGH_THRESHOLD {
            StressLevel::Moderate
        } else if probability < SEVERE_THRESHOLD {
            StressLevel::High
        } else {
            StressLevel::Severe
        }
    }

    /// Lowercase key used in templates and metric labels
    pub fn as_str(&self) -> &'static str {
        match self {
            StressLevel::Low => "low",
            StressLevel::Moderate => "moderate",
            StressLevel::High => "high",
            StressLevel::Severe => "severe",
        }
    }

    /// Tier whose activity tables are used; `Severe` shares the `High` lists
    pub fn activity_tier(&self) -> StressLevel {
        match self {
            StressLevel::Severe => StressLevel::High,
            other => *other,
        }
    }

    /// Check if the tier calls for the urgent notice
    pub fn is_urgent(&self) -> bool {
        matches!(self, StressLevel::Severe)
    }
}
