//! Input flags shared by every command that evaluates an assessment.

use clap::Args;

use burnout_core::{AssessmentInputs, Config};

#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Hours worked per week (0-100)
    #[arg(long = "hours-worked", visible_alias = "work", allow_negative_numbers = true)]
    pub hours_worked: Option<f64>,
    /// Average sleep per night in hours (0-12)
    #[arg(long = "sleep", allow_negative_numbers = true)]
    pub sleep_hours: Option<f64>,
    /// Self-care hours per week (0-40)
    #[arg(long = "self-care", allow_negative_numbers = true)]
    pub self_care_hours: Option<f64>,
    /// Clamp inputs into their usual ranges before scoring
    #[arg(long)]
    pub clamp: bool,
}

impl InputArgs {
    /// Fill omitted flags from the configured defaults.
    pub fn resolve(&self, config: &Config) -> AssessmentInputs {
        let defaults = config.default_inputs();
        let inputs = AssessmentInputs::new(
            self.hours_worked.unwrap_or(defaults.hours_worked),
            self.sleep_hours.unwrap_or(defaults.sleep_hours),
            self.self_care_hours.unwrap_or(defaults.self_care_hours),
        );
        if self.clamp {
            inputs.clamped_to_ranges()
        } else {
            inputs
        }
    }
}
