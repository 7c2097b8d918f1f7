//! Share and export effects for a finished assessment.
//!
//! Every effect is attempted independently and reports its outcome as a
//! [`Notification`]. Effects only read the [`Assessment`]; a failed share
//! never alters or resets the displayed result.

mod clipboard;
pub mod credentials;
mod email;
mod file;
mod social;
mod terminal;
mod webhook;

pub use clipboard::Clipboard;
pub use email::Email;
pub use file::FileExport;
pub use social::{SocialNetwork, SocialShare};
pub use terminal::{TerminalShare, TerminalStream};
pub use webhook::Webhook;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ShareError;
use crate::report::Assessment;

/// Every share/export destination implements this trait.
#[async_trait]
pub trait ShareTarget: Send + Sync {
    /// Unique identifier (e.g. "clipboard", "x", "webhook").
    fn name(&self) -> &str;

    /// Human-readable display name.
    fn display_name(&self) -> &str;

    /// Perform the effect.
    async fn share(&self, assessment: &Assessment) -> Result<(), ShareError>;

    /// Title and description reported on success.
    fn success_message(&self) -> (String, String) {
        (
            "Shared".to_string(),
            format!("Results shared via {}", self.display_name()),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Failure,
}

/// User-facing outcome of a share/export attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    /// Target that produced this outcome
    pub target: String,
    pub title: String,
    pub description: String,
}

impl Notification {
    fn success(target: &dyn ShareTarget) -> Self {
        let (title, description) = target.success_message();
        Self {
            kind: NotificationKind::Success,
            target: target.name().to_string(),
            title,
            description,
        }
    }

    fn failure(target: &dyn ShareTarget, err: &ShareError) -> Self {
        Self {
            kind: NotificationKind::Failure,
            target: target.name().to_string(),
            title: format!("{} failed", target.display_name()),
            description: err.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == NotificationKind::Success
    }
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}

/// Attempt a single effect.
pub async fn share(target: &dyn ShareTarget, assessment: &Assessment) -> Notification {
    match target.share(assessment).await {
        Ok(()) => {
            tracing::info!(target = target.name(), "share succeeded");
            Notification::success(target)
        }
        Err(e) => {
            tracing::warn!(target = target.name(), "share failed: {e}");
            Notification::failure(target, &e)
        }
    }
}

/// Attempt `primary`, then each fallback in order until one succeeds.
///
/// Returns the notification of the first success. When everything fails
/// the primary's failure is returned, with the fallbacks' errors appended.
pub async fn share_with_fallback(
    primary: &dyn ShareTarget,
    fallbacks: &[&dyn ShareTarget],
    assessment: &Assessment,
) -> Notification {
    let first = share(primary, assessment).await;
    if first.is_success() {
        return first;
    }

    let mut failures = vec![first.description.clone()];
    for fallback in fallbacks {
        tracing::info!(
            from = primary.name(),
            to = fallback.name(),
            "falling back to secondary share path"
        );
        let next = share(*fallback, assessment).await;
        if next.is_success() {
            return next;
        }
        failures.push(format!("{}: {}", fallback.display_name(), next.description));
    }

    Notification {
        description: failures.join("; "),
        ..first
    }
}
