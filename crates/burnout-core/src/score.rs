//! Burnout risk score engine.
//!
//! A fixed-weight linear model over three normalized factors:
//!
//! ```text
//! work_load         = hours_worked / 40
//! sleep_deficit     = (8 - sleep_hours) / 8
//! self_care_deficit = (10 - self_care_hours) / 10
//!
//! normalized = (4 * work_load + 3 * sleep_deficit + 3 * self_care_deficit) / 10
//! score      = clamp(normalized, 0, 1) * 10
//! ```
//!
//! Deficits are signed: sleeping more than 8 hours or spending more than 10
//! hours on self-care pushes the factor below zero and lowers the score.
//! The clamp is applied to the normalized value before scaling.

use serde::{Deserialize, Serialize};

use crate::assessment::AssessmentInputs;

/// Weight of the work load factor.
pub const WORK_WEIGHT: f64 = 4.0;
/// Weight of the sleep deficit factor.
pub const SLEEP_WEIGHT: f64 = 3.0;
/// Weight of the self-care deficit factor.
pub const SELF_CARE_WEIGHT: f64 = 3.0;
/// Sum of all weights; divides the weighted sum into [0, 1] territory.
pub const WEIGHT_TOTAL: f64 = WORK_WEIGHT + SLEEP_WEIGHT + SELF_CARE_WEIGHT;

/// A standard full-time week. `work_load == 1.0` at this many hours.
pub const STANDARD_WORK_WEEK_HOURS: f64 = 40.0;
/// Recommended nightly sleep.
pub const RECOMMENDED_SLEEP_HOURS: f64 = 8.0;
/// Recommended weekly self-care.
pub const RECOMMENDED_SELF_CARE_HOURS: f64 = 10.0;

/// Upper bound of the score scale.
pub const MAX_SCORE: f64 = 10.0;

/// Burnout risk on a 0-10 scale.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RiskScore(f64);

impl RiskScore {
    /// Wrap an arbitrary value, clamping it into [0, 10].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, MAX_SCORE))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Score rounded to one decimal for display.
    pub fn display(self) -> String {
        format!("{:.1}", self.0)
    }

    /// Score on a 0-100 scale, as drawn by the radial gauge.
    pub fn as_percent(self) -> f64 {
        self.0 * 10.0
    }
}

impl std::fmt::Display for RiskScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

impl From<RiskScore> for f64 {
    fn from(score: RiskScore) -> Self {
        score.0
    }
}

/// One weighted factor of the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreTerm {
    /// Factor name
    pub name: String,
    /// Fixed weight
    pub weight: f64,
    /// Signed normalized factor (unbounded)
    pub factor: f64,
    /// `weight * factor / WEIGHT_TOTAL`
    pub contribution: f64,
}

impl ScoreTerm {
    fn new(name: &str, weight: f64, factor: f64) -> Self {
        Self {
            name: name.to_string(),
            weight,
            factor,
            contribution: weight * factor / WEIGHT_TOTAL,
        }
    }
}

/// Explainable breakdown of a score computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Work load, sleep deficit and self-care deficit terms, in that order
    pub terms: Vec<ScoreTerm>,
    /// Weighted sum before clamping
    pub normalized: f64,
    /// Final score
    pub score: RiskScore,
}

impl ScoreBreakdown {
    pub fn work_load(&self) -> f64 {
        self.terms[0].factor
    }

    pub fn sleep_deficit(&self) -> f64 {
        self.terms[1].factor
    }

    pub fn self_care_deficit(&self) -> f64 {
        self.terms[2].factor
    }

    /// Whether the clamp changed the outcome.
    pub fn was_clamped(&self) -> bool {
        !(0.0..=1.0).contains(&self.normalized)
    }
}

/// Compute the full breakdown for `inputs`.
pub fn breakdown(inputs: &AssessmentInputs) -> ScoreBreakdown {
    let work_load = inputs.hours_worked / STANDARD_WORK_WEEK_HOURS;
    let sleep_deficit = (RECOMMENDED_SLEEP_HOURS - inputs.sleep_hours) / RECOMMENDED_SLEEP_HOURS;
    let self_care_deficit =
        (RECOMMENDED_SELF_CARE_HOURS - inputs.self_care_hours) / RECOMMENDED_SELF_CARE_HOURS;

    let normalized = (work_load * WORK_WEIGHT
        + sleep_deficit * SLEEP_WEIGHT
        + self_care_deficit * SELF_CARE_WEIGHT)
        / WEIGHT_TOTAL;

    // clamp first, then scale
    let score = RiskScore(normalized.clamp(0.0, 1.0) * MAX_SCORE);

    ScoreBreakdown {
        terms: vec![
            ScoreTerm::new("work_load", WORK_WEIGHT, work_load),
            ScoreTerm::new("sleep_deficit", SLEEP_WEIGHT, sleep_deficit),
            ScoreTerm::new("self_care_deficit", SELF_CARE_WEIGHT, self_care_deficit),
        ],
        normalized,
        score,
    }
}

/// Compute the burnout risk score for `inputs`.
pub fn compute_risk_score(inputs: &AssessmentInputs) -> RiskScore {
    breakdown(inputs).score
}
