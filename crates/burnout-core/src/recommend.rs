//! Recommendation generator.
//!
//! Recommendations are keyed off raw input thresholds, not off the score.
//! Output order is significant:
//!
//! 1. Risk-tier escalation (urgent workload + document impact, or a single
//!    proactive communication entry)
//! 2. Per-metric advice, one entry per breached threshold
//! 3. The "maintain balance" fallback, only when nothing else applies
//!
//! Tier escalation and per-metric checks are independent, so related
//! entries may appear together.

use serde::{Deserialize, Serialize};

use crate::assessment::AssessmentInputs;

/// Work hours above this mark high risk.
pub const HIGH_RISK_WORK_HOURS: f64 = 50.0;
/// Sleep below this marks high risk.
pub const HIGH_RISK_SLEEP_HOURS: f64 = 6.0;
/// Self-care below this marks high risk.
pub const HIGH_RISK_SELF_CARE_HOURS: f64 = 4.0;

/// Work hours above this mark moderate risk and trigger work-hours advice.
pub const WORK_HOURS_LIMIT: f64 = 45.0;
/// Sleep below this marks moderate risk and triggers sleep advice.
pub const SLEEP_HOURS_TARGET: f64 = 7.0;
/// Self-care below this marks moderate risk and triggers self-care advice.
pub const SELF_CARE_HOURS_TARGET: f64 = 7.0;

/// Which rule produced a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    UrgentWorkload,
    DocumentImpact,
    ProactiveCommunication,
    ReduceWorkHours,
    ImproveSleep,
    IncreaseSelfCare,
    MaintainBalance,
}

impl RecommendationKind {
    pub fn title(self) -> &'static str {
        match self {
            Self::UrgentWorkload => "Discuss Your Workload Urgently",
            Self::DocumentImpact => "Document the Impact",
            Self::ProactiveCommunication => "Communicate Proactively",
            Self::ReduceWorkHours => "Reduce Work Hours",
            Self::ImproveSleep => "Improve Sleep Habits",
            Self::IncreaseSelfCare => "Increase Self-Care",
            Self::MaintainBalance => "Maintain Current Balance",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::UrgentWorkload => {
                "Your current patterns put you at high risk. Schedule a conversation with your \
                 manager this week about workload, priorities and what can be deferred."
            }
            Self::DocumentImpact => {
                "Keep a short log of hours, missed rest and how you feel. Concrete notes make it \
                 easier to ask for changes and to notice when things improve."
            }
            Self::ProactiveCommunication => {
                "You are showing early warning signs. Raise capacity concerns with your team \
                 before they become urgent and agree on clear priorities."
            }
            Self::ReduceWorkHours => {
                "Consider delegating tasks or discussing workload with your supervisor. Long \
                 hours significantly increase burnout risk."
            }
            Self::ImproveSleep => {
                "Aim for 7-9 hours of sleep. Create a bedtime routine and maintain consistent \
                 sleep schedule."
            }
            Self::IncreaseSelfCare => {
                "Schedule regular breaks and dedicate time for activities you enjoy. Even small \
                 self-care moments matter."
            }
            Self::MaintainBalance => {
                "You're maintaining good habits! Continue your current routine while staying \
                 mindful of any changes."
            }
        }
    }
}

/// An advisory message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub title: String,
    pub description: String,
}

impl From<RecommendationKind> for Recommendation {
    fn from(kind: RecommendationKind) -> Self {
        Self {
            kind,
            title: kind.title().to_string(),
            description: kind.description().to_string(),
        }
    }
}

/// Any single input in the high-risk zone.
pub fn is_high_risk(inputs: &AssessmentInputs) -> bool {
    inputs.hours_worked > HIGH_RISK_WORK_HOURS
        || inputs.sleep_hours < HIGH_RISK_SLEEP_HOURS
        || inputs.self_care_hours < HIGH_RISK_SELF_CARE_HOURS
}

/// Any single input in the moderate-risk zone (includes high risk).
pub fn is_moderate_risk(inputs: &AssessmentInputs) -> bool {
    inputs.hours_worked > WORK_HOURS_LIMIT
        || inputs.sleep_hours < SLEEP_HOURS_TARGET
        || inputs.self_care_hours < SELF_CARE_HOURS_TARGET
}

/// Ordered, non-empty list of recommendations for `inputs`.
pub fn recommend(inputs: &AssessmentInputs) -> Vec<Recommendation> {
    use RecommendationKind::*;

    let mut kinds = Vec::new();

    if is_high_risk(inputs) {
        kinds.push(UrgentWorkload);
        kinds.push(DocumentImpact);
    } else if is_moderate_risk(inputs) {
        kinds.push(ProactiveCommunication);
    }

    if inputs.hours_worked > WORK_HOURS_LIMIT {
        kinds.push(ReduceWorkHours);
    }
    if inputs.sleep_hours < SLEEP_HOURS_TARGET {
        kinds.push(ImproveSleep);
    }
    if inputs.self_care_hours < SELF_CARE_HOURS_TARGET {
        kinds.push(IncreaseSelfCare);
    }

    if kinds.is_empty() {
        kinds.push(MaintainBalance);
    }

    kinds.into_iter().map(Recommendation::from).collect()
}
