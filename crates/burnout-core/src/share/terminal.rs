//! Last-resort share path: print the share text for manual copying.

use async_trait::async_trait;
use std::io::Write;

use super::ShareTarget;
use crate::error::ShareError;
use crate::report::Assessment;

/// Stream the share text is printed to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TerminalStream {
    #[default]
    Stdout,
    /// Keeps stdout free for machine-readable output
    Stderr,
}

#[derive(Debug, Default)]
pub struct TerminalShare {
    stream: TerminalStream,
}

impl TerminalShare {
    pub fn new(stream: TerminalStream) -> Self {
        Self { stream }
    }

    pub fn stream(&self) -> TerminalStream {
        self.stream
    }

    fn print(&self, mut out: impl Write, text: &str) -> Result<(), ShareError> {
        let label = match self.stream {
            TerminalStream::Stdout => "<stdout>",
            TerminalStream::Stderr => "<stderr>",
        };
        writeln!(out, "{text}").map_err(|source| ShareError::WriteFailed {
            path: label.into(),
            source,
        })
    }
}

#[async_trait]
impl ShareTarget for TerminalShare {
    fn name(&self) -> &str {
        "terminal"
    }

    fn display_name(&self) -> &str {
        "Terminal"
    }

    async fn share(&self, assessment: &Assessment) -> Result<(), ShareError> {
        let text = assessment.share_text();
        match self.stream {
            TerminalStream::Stdout => self.print(std::io::stdout(), &text),
            TerminalStream::Stderr => self.print(std::io::stderr(), &text),
        }
    }

    fn success_message(&self) -> (String, String) {
        (
            "Printed share text".to_string(),
            "Copy the printed text to share your results".to_string(),
        )
    }
}
