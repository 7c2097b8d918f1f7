//! Pure classification of a risk score into a tier.
//!
//! Tiers are closed on the upper end:
//! - Low: score <= 3
//! - Moderate: 3 < score <= 6
//! - High: score > 6

use serde::{Deserialize, Serialize};

use crate::score::RiskScore;

/// Upper bound (inclusive) of the Low tier.
pub const LOW_MAX: f64 = 3.0;
/// Upper bound (inclusive) of the Moderate tier.
pub const MODERATE_MAX: f64 = 6.0;

/// Discrete burnout risk tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

/// Display color of a tier label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TierColor {
    Sage,
    Orange,
    Red,
}

impl TierColor {
    /// Hex value for renderers that need a concrete color.
    pub fn hex(self) -> &'static str {
        match self {
            TierColor::Sage => "#68D391",
            TierColor::Orange => "#F6AD55",
            TierColor::Red => "#FC8181",
        }
    }
}

impl RiskTier {
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s <= LOW_MAX => RiskTier::Low,
            s if s <= MODERATE_MAX => RiskTier::Moderate,
            _ => RiskTier::High,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Moderate => "Moderate",
            RiskTier::High => "High",
        }
    }

    /// Estimated time to burnout onset if nothing changes.
    pub fn window(self) -> &'static str {
        match self {
            RiskTier::Low => "Low risk - maintain current balance",
            RiskTier::Moderate => "4-8 weeks if patterns continue",
            RiskTier::High => "2-4 weeks if patterns continue",
        }
    }

    pub fn color(self) -> TierColor {
        match self {
            RiskTier::Low => TierColor::Sage,
            RiskTier::Moderate => TierColor::Orange,
            RiskTier::High => TierColor::Red,
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Tier plus its presentation attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub tier: RiskTier,
    pub color: TierColor,
    pub window: String,
}

/// Classify a score.
pub fn classify(score: RiskScore) -> Classification {
    let tier = RiskTier::from_score(score.value());
    Classification {
        tier,
        color: tier.color(),
        window: tier.window().to_string(),
    }
}
