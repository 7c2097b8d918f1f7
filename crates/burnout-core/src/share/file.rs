//! Save the results card to a file.
//!
//! SVG output is the image export: a self-contained snapshot of the
//! results card.

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use super::ShareTarget;
use crate::config::ExportFormat;
use crate::error::ShareError;
use crate::report::Assessment;

pub struct FileExport {
    path: PathBuf,
    format: ExportFormat,
}

impl FileExport {
    pub fn new(path: impl Into<PathBuf>, format: ExportFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    /// `burnout-assessment.<ext>` inside `dir`.
    pub fn in_dir(dir: &Path, format: ExportFormat) -> Self {
        Self::new(
            dir.join(format!("burnout-assessment.{}", format.extension())),
            format,
        )
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn render(&self, assessment: &Assessment) -> Result<String, ShareError> {
        Ok(match self.format {
            ExportFormat::Text => assessment.render_text(),
            ExportFormat::Markdown => assessment.render_markdown(),
            ExportFormat::Json => serde_json::to_string_pretty(assessment)?,
            ExportFormat::Svg => assessment.render_svg(),
        })
    }
}

#[async_trait]
impl ShareTarget for FileExport {
    fn name(&self) -> &str {
        "file"
    }

    fn display_name(&self) -> &str {
        "File export"
    }

    async fn share(&self, assessment: &Assessment) -> Result<(), ShareError> {
        let content = self.render(assessment)?;
        tokio::fs::write(&self.path, content)
            .await
            .map_err(|source| ShareError::WriteFailed {
                path: self.path.clone(),
                source,
            })
    }

    fn success_message(&self) -> (String, String) {
        (
            "Export saved".to_string(),
            format!("Saved to {}", self.path.display()),
        )
    }
}
