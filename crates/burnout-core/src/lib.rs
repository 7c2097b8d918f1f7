//! # burnoutcheck Core Library
//!
//! This library provides the core logic of the burnout risk self-assessment.
//! Every operation is available to the standalone CLI binary, which is a thin
//! shell over this crate.
//!
//! ## Architecture
//!
//! - **Score Engine**: fixed-weight linear model turning weekly work, sleep and
//!   self-care hours into a 0-10 risk score
//! - **Risk Classifier**: maps the score to a tier and a time-to-burnout window
//! - **Recommendation Generator**: threshold-driven advisory messages
//! - **Report**: the evaluated assessment and its text/markdown/SVG renderings
//! - **Share**: fire-and-forget export effects (clipboard, social intents,
//!   email, webhook, file) with fallback
//!
//! The three core computations are pure and total; only configuration and
//! share effects can fail.
//!
//! ## Key Components
//!
//! - [`compute_risk_score`], [`classify`], [`recommend`]: the scoring core
//! - [`Assessment`]: one fully evaluated result
//! - [`ShareTarget`]: trait for export/share effects
//! - [`Config`]: application configuration management

pub mod assessment;
pub mod classify;
pub mod config;
pub mod error;
pub mod recommend;
pub mod report;
pub mod score;
pub mod share;

pub use assessment::AssessmentInputs;
pub use classify::{classify, Classification, RiskTier, TierColor};
pub use config::{Config, ExportFormat};
pub use error::{ConfigError, CoreError, ShareError, ValidationError};
pub use recommend::{recommend, Recommendation, RecommendationKind};
pub use report::{Assessment, KeyMetrics};
pub use score::{compute_risk_score, RiskScore, ScoreBreakdown};
pub use share::{Notification, NotificationKind, ShareTarget};
