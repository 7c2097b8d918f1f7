//! Scoring commands: the full results card and direct access to the
//! score, classifier and recommender.

use clap::Args;
use colored::{Color, Colorize};

use burnout_core::{classify, recommend, Assessment, Config, RiskScore, TierColor};

use super::inputs::InputArgs;

#[derive(Args)]
pub struct AssessArgs {
    #[command(flatten)]
    pub inputs: InputArgs,
    /// Print the assessment as JSON
    #[arg(long)]
    pub json: bool,
    /// Skip the terminal chart
    #[arg(long)]
    pub no_chart: bool,
}

#[derive(Args)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub inputs: InputArgs,
    /// Print JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct ClassifyArgs {
    /// Risk score (0-10; values outside are clamped)
    #[arg(allow_negative_numbers = true)]
    pub score: f64,
    /// Print JSON
    #[arg(long)]
    pub json: bool,
}

fn terminal_color(color: TierColor) -> Color {
    match color {
        TierColor::Sage => Color::Green,
        TierColor::Orange => Color::Yellow,
        TierColor::Red => Color::Red,
    }
}

fn evaluate(inputs: &InputArgs, config: &Config) -> Result<Assessment, Box<dyn std::error::Error>> {
    Ok(Assessment::try_evaluate(inputs.resolve(config))?)
}

pub fn run_assess(args: AssessArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let assessment = evaluate(&args.inputs, &config)?;

    if args.json || config.output.json {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
        return Ok(());
    }

    if !config.output.color {
        colored::control::set_override(false);
    }
    let text = assessment.render_text();
    let headline = assessment.headline();
    let painted = headline
        .as_str()
        .color(terminal_color(assessment.classification.color))
        .bold();
    println!("{}", text.replacen(&headline, &painted.to_string(), 1));

    if config.output.chart && !args.no_chart {
        println!("{}", assessment.render_ascii_chart());
    }
    Ok(())
}

pub fn run_score(args: ScoreArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let assessment = evaluate(&args.inputs, &config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&assessment.breakdown)?);
    } else {
        println!("{}", assessment.score.display());
    }
    Ok(())
}

pub fn run_classify(args: ClassifyArgs) -> Result<(), Box<dyn std::error::Error>> {
    if !args.score.is_finite() {
        return Err(format!("score must be a finite number, got {}", args.score).into());
    }
    let classification = classify(RiskScore::new(args.score));

    if args.json {
        println!("{}", serde_json::to_string_pretty(&classification)?);
    } else {
        println!("{}", classification.tier);
        println!("{}", classification.window);
    }
    Ok(())
}

pub fn run_recommend(args: ScoreArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let inputs = args.inputs.resolve(&config);
    inputs.validate()?;
    let recommendations = recommend(&inputs);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&recommendations)?);
    } else {
        for (i, rec) in recommendations.iter().enumerate() {
            println!("{}. {}", i + 1, rec.title);
            println!("   {}", rec.description);
        }
    }
    Ok(())
}
