//! Assessment inputs: the three weekly lifestyle figures the user reports.
//!
//! Inputs are a plain value object. The engine accepts any finite value,
//! including negative or out-of-range numbers; range checks here are
//! advisory for hosts that want to warn or clamp like a slider would.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Bounds and step of a slider-style input control.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InputRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl InputRange {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

/// Hours worked per week.
pub const HOURS_WORKED_RANGE: InputRange = InputRange::new(0.0, 100.0, 1.0);
/// Average sleep per night.
pub const SLEEP_HOURS_RANGE: InputRange = InputRange::new(0.0, 12.0, 0.5);
/// Self-care hours per week.
pub const SELF_CARE_HOURS_RANGE: InputRange = InputRange::new(0.0, 40.0, 0.5);

/// Raw inputs for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssessmentInputs {
    /// Hours worked per week
    #[serde(alias = "hoursWorked")]
    pub hours_worked: f64,
    /// Average sleep per night, in hours
    #[serde(alias = "sleepHours")]
    pub sleep_hours: f64,
    /// Self-care hours per week
    #[serde(alias = "selfCareHours")]
    pub self_care_hours: f64,
}

impl Default for AssessmentInputs {
    /// The initial (and reset) state of a fresh assessment.
    fn default() -> Self {
        Self {
            hours_worked: 40.0,
            sleep_hours: 7.0,
            self_care_hours: 5.0,
        }
    }
}

impl AssessmentInputs {
    pub fn new(hours_worked: f64, sleep_hours: f64, self_care_hours: f64) -> Self {
        Self {
            hours_worked,
            sleep_hours,
            self_care_hours,
        }
    }

    fn fields(&self) -> [(&'static str, f64, InputRange); 3] {
        [
            ("hours_worked", self.hours_worked, HOURS_WORKED_RANGE),
            ("sleep_hours", self.sleep_hours, SLEEP_HOURS_RANGE),
            ("self_care_hours", self.self_care_hours, SELF_CARE_HOURS_RANGE),
        ]
    }

    /// Reject values the scoring arithmetic cannot give meaning to.
    ///
    /// Only NaN and infinities are rejected. Negative and oversized values
    /// have a defined score.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidValue`] naming the first non-finite field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value, _) in self.fields() {
            if !value.is_finite() {
                return Err(ValidationError::InvalidValue {
                    field: field.to_string(),
                    message: format!("must be a finite number, got {value}"),
                });
            }
        }
        Ok(())
    }

    /// Names of fields that fall outside their slider range.
    pub fn out_of_range_fields(&self) -> Vec<&'static str> {
        self.fields()
            .into_iter()
            .filter(|(_, value, range)| !range.contains(*value))
            .map(|(field, _, _)| field)
            .collect()
    }

    /// Copy with every field clamped into its slider range.
    pub fn clamped_to_ranges(&self) -> Self {
        Self {
            hours_worked: HOURS_WORKED_RANGE.clamp(self.hours_worked),
            sleep_hours: SLEEP_HOURS_RANGE.clamp(self.sleep_hours),
            self_care_hours: SELF_CARE_HOURS_RANGE.clamp(self.self_care_hours),
        }
    }
}
