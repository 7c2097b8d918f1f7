//! Assessment report: the full result of one evaluation plus renderers.
//!
//! An [`Assessment`] is recomputed eagerly from its inputs and never
//! updated in place. Share and export effects only read it.

use chrono::{DateTime, Utc};
use indoc::formatdoc;
use serde::{Deserialize, Serialize};

use crate::assessment::AssessmentInputs;
use crate::classify::{classify, Classification};
use crate::error::Result;
use crate::recommend::{recommend, Recommendation};
use crate::score::{
    breakdown, RiskScore, ScoreBreakdown, RECOMMENDED_SELF_CARE_HOURS, STANDARD_WORK_WEEK_HOURS,
};

/// Footer shown under every results card.
pub const DISCLAIMER: &str =
    "Your data is not stored or shared. This assessment is for informational purposes only.";

/// Baseline used for the sleep bar (the top of the recommended 7-9h range).
pub const SLEEP_CHART_BASELINE_HOURS: f64 = 9.0;

const BAR_WIDTH: usize = 30;

/// Chart inputs: the three lifestyle figures as percentages of their baselines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeyMetrics {
    /// Work load, capped at 100
    pub work_load_pct: f64,
    /// Sleep relative to 9h (may exceed 100)
    pub sleep_pct: f64,
    /// Self-care relative to 10h (may exceed 100)
    pub self_care_pct: f64,
}

impl KeyMetrics {
    pub fn from_inputs(inputs: &AssessmentInputs) -> Self {
        Self {
            work_load_pct: (inputs.hours_worked / STANDARD_WORK_WEEK_HOURS * 100.0).min(100.0),
            sleep_pct: inputs.sleep_hours / SLEEP_CHART_BASELINE_HOURS * 100.0,
            self_care_pct: inputs.self_care_hours / RECOMMENDED_SELF_CARE_HOURS * 100.0,
        }
    }

    /// Labelled rows in display order.
    pub fn rows(&self) -> [(&'static str, f64); 3] {
        [
            ("Work Load", self.work_load_pct),
            ("Sleep Quality", self.sleep_pct),
            ("Self-Care", self.self_care_pct),
        ]
    }
}

/// Complete outcome of evaluating one set of inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    pub inputs: AssessmentInputs,
    pub score: RiskScore,
    pub breakdown: ScoreBreakdown,
    pub classification: Classification,
    pub recommendations: Vec<Recommendation>,
    pub metrics: KeyMetrics,
    pub generated_at: DateTime<Utc>,
}

impl Assessment {
    /// Run every computation for `inputs`.
    pub fn evaluate(inputs: AssessmentInputs) -> Self {
        let breakdown = breakdown(&inputs);
        let score = breakdown.score;
        let classification = classify(score);
        let recommendations = recommend(&inputs);

        tracing::debug!(
            score = score.value(),
            tier = %classification.tier,
            recommendations = recommendations.len(),
            "assessment evaluated"
        );

        Self {
            inputs,
            score,
            breakdown,
            classification,
            recommendations,
            metrics: KeyMetrics::from_inputs(&inputs),
            generated_at: Utc::now(),
        }
    }

    /// Validate host-provided inputs, then evaluate.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CoreError::Validation`] for non-finite inputs.
    pub fn try_evaluate(inputs: AssessmentInputs) -> Result<Self> {
        inputs.validate()?;
        for field in inputs.out_of_range_fields() {
            tracing::warn!(field, "input outside the usual range; scoring it as given");
        }
        Ok(Self::evaluate(inputs))
    }

    /// "<Tier> Risk" headline.
    pub fn headline(&self) -> String {
        format!("{} Risk", self.classification.tier)
    }

    /// Short message for social posts and clipboard sharing.
    pub fn share_text(&self) -> String {
        format!(
            "I just checked my burnout risk level using the Burnout Calculator. \
             My risk level is {}. Check yours too!",
            self.classification.tier
        )
    }

    /// Plain-text results card.
    pub fn render_text(&self) -> String {
        let mut lines: Vec<String> = Vec::new();

        lines.push("Your Results".to_string());
        lines.push("=".repeat(40));
        lines.push(format!("{}  {}", self.score.display(), self.headline()));
        lines.push(self.classification.window.clone());
        lines.push(String::new());

        lines.push(format!(
            "Inputs: {}h worked/week, {}h sleep/night, {}h self-care/week",
            self.inputs.hours_worked, self.inputs.sleep_hours, self.inputs.self_care_hours
        ));
        lines.push(String::new());

        lines.push("Personalized Recommendations".to_string());
        for rec in &self.recommendations {
            lines.push(format!("- {}", rec.title));
            lines.push(format!("  {}", rec.description));
        }
        lines.push(String::new());
        lines.push(DISCLAIMER.to_string());

        lines.join("\n")
    }

    /// Gauge and key metrics as terminal bars.
    pub fn render_ascii_chart(&self) -> String {
        let mut output = String::from("\nRisk Score:\n");
        output.push_str(&"─".repeat(50));
        output.push('\n');
        output.push_str(&format!(
            "{:<14}{} {}\n",
            "Score",
            bar(self.score.as_percent()),
            self.score.display()
        ));
        output.push_str(&"─".repeat(50));
        output.push_str("\nKey Metrics:\n");
        for (label, value) in self.metrics.rows() {
            output.push_str(&format!("{:<14}{} {:.0}%\n", label, bar(value), value.round()));
        }
        output.push_str(&"─".repeat(50));
        output.push('\n');
        output
    }

    /// Markdown summary, used for file export and email bodies.
    pub fn render_markdown(&self) -> String {
        let recs: Vec<String> = self
            .recommendations
            .iter()
            .map(|r| format!("- **{}**: {}", r.title, r.description))
            .collect();
        let metrics: Vec<String> = self
            .metrics
            .rows()
            .iter()
            .map(|(label, value)| format!("| {} | {:.0}% |", label, value.round()))
            .collect();

        formatdoc! {"
            # Burnout Risk Assessment

            **Score:** {score} / 10 ({headline})

            {window}

            ## Key Metrics

            | Metric | Value |
            |--------|-------|
            {metrics}

            ## Recommendations

            {recs}

            _{disclaimer}_
            ",
            score = self.score.display(),
            headline = self.headline(),
            window = self.classification.window,
            metrics = metrics.join("\n"),
            recs = recs.join("\n"),
            disclaimer = DISCLAIMER,
        }
    }

    /// Results card as a standalone SVG image.
    pub fn render_svg(&self) -> String {
        let color = self.classification.color.hex();
        let mut svg = String::new();
        svg.push_str(
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="480" height="300" viewBox="0 0 480 300">"##,
        );
        svg.push('\n');
        svg.push_str(r##"  <rect width="480" height="300" rx="16" fill="#FFFFFF"/>"##);
        svg.push('\n');
        svg.push_str(&format!(
            r##"  <text x="24" y="48" font-family="sans-serif" font-size="22" fill="#7E69AB">Burnout Risk: {}</text>"##,
            self.score.display()
        ));
        svg.push('\n');
        svg.push_str(&format!(
            r##"  <text x="24" y="80" font-family="sans-serif" font-size="18" fill="{}">{}</text>"##,
            color,
            xml_escape(&self.headline())
        ));
        svg.push('\n');
        svg.push_str(&format!(
            r##"  <text x="24" y="106" font-family="sans-serif" font-size="13" fill="#8E9196">{}</text>"##,
            xml_escape(&self.classification.window)
        ));
        svg.push('\n');

        let metric_colors = ["#9b87f5", "#7E69AB", "#6E59A5"];
        for (i, ((label, value), fill)) in self.metrics.rows().iter().zip(metric_colors).enumerate() {
            let y = 140 + i * 48;
            let width = value.clamp(0.0, 100.0) * 4.32;
            svg.push_str(&format!(
                r##"  <text x="24" y="{}" font-family="sans-serif" font-size="13" fill="#8E9196">{} {:.0}%</text>"##,
                y,
                label,
                value.round()
            ));
            svg.push('\n');
            svg.push_str(&format!(
                r##"  <rect x="24" y="{}" width="432" height="8" rx="4" fill="#F1F0FB"/>"##,
                y + 10
            ));
            svg.push('\n');
            svg.push_str(&format!(
                r##"  <rect x="24" y="{}" width="{:.1}" height="8" rx="4" fill="{}"/>"##,
                y + 10,
                width,
                fill
            ));
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }
}

fn bar(percent: f64) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
