//! Copy the share text to the system clipboard through the platform helper.

use async_trait::async_trait;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use super::ShareTarget;
use crate::error::ShareError;
use crate::report::Assessment;

/// Clipboard writer backed by an external command reading stdin.
pub struct Clipboard {
    program: Option<(String, Vec<String>)>,
}

impl Default for Clipboard {
    fn default() -> Self {
        Self::detect()
    }
}

impl Clipboard {
    /// Pick the clipboard helper for the current platform.
    pub fn detect() -> Self {
        let program = if cfg!(target_os = "macos") {
            Some(("pbcopy", vec![]))
        } else if cfg!(target_os = "windows") {
            Some(("clip", vec![]))
        } else if std::env::var_os("WAYLAND_DISPLAY").is_some() {
            Some(("wl-copy", vec![]))
        } else if std::env::var_os("DISPLAY").is_some() {
            Some(("xclip", vec!["-selection", "clipboard"]))
        } else {
            None
        };

        Self {
            program: program.map(|(p, args)| {
                (p.to_string(), args.into_iter().map(String::from).collect())
            }),
        }
    }

    /// Use an explicit command instead of platform detection.
    pub fn with_command(program: &str, args: &[&str]) -> Self {
        Self {
            program: Some((
                program.to_string(),
                args.iter().map(|a| a.to_string()).collect(),
            )),
        }
    }

    /// Write `text` to the clipboard.
    pub async fn copy(&self, text: &str) -> Result<(), ShareError> {
        let (program, args) = self.program.as_ref().ok_or_else(|| {
            ShareError::ClipboardUnavailable("no clipboard helper for this environment".into())
        })?;
        let failed = |e: std::io::Error| ShareError::ClipboardUnavailable(format!("{program}: {e}"));

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(failed)?;

        // stdin is dropped at the end of this block so the helper sees EOF
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes()).await.map_err(failed)?;
        }

        let status = child.wait().await.map_err(failed)?;
        if status.success() {
            Ok(())
        } else {
            Err(ShareError::ClipboardUnavailable(format!(
                "{program} exited with {status}"
            )))
        }
    }
}

#[async_trait]
impl ShareTarget for Clipboard {
    fn name(&self) -> &str {
        "clipboard"
    }

    fn display_name(&self) -> &str {
        "Clipboard"
    }

    async fn share(&self, assessment: &Assessment) -> Result<(), ShareError> {
        self.copy(&assessment.share_text()).await
    }

    fn success_message(&self) -> (String, String) {
        (
            "Copied to clipboard".to_string(),
            "Share text has been copied to your clipboard".to_string(),
        )
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::assessment::AssessmentInputs;

    #[tokio::test]
    async fn copy_pipes_text_to_helper() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("clip.txt");
        let script = format!("cat > '{}'", out.display());
        let clipboard = Clipboard::with_command("sh", &["-c", script.as_str()]);

        clipboard.copy("hello clipboard").await.unwrap();
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "hello clipboard");
    }

    #[tokio::test]
    async fn missing_helper_is_reported() {
        let clipboard = Clipboard::with_command("definitely-not-a-clipboard-helper", &[]);
        assert!(matches!(
            clipboard.copy("x").await,
            Err(ShareError::ClipboardUnavailable(_))
        ));
    }

    #[tokio::test]
    async fn failing_helper_is_reported() {
        let clipboard = Clipboard::with_command("sh", &["-c", "cat > /dev/null; exit 3"]);
        assert!(matches!(
            clipboard.copy("x").await,
            Err(ShareError::ClipboardUnavailable(_))
        ));
    }

    #[tokio::test]
    async fn share_copies_share_text() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("clip.txt");
        let script = format!("cat > '{}'", out.display());
        let clipboard = Clipboard::with_command("sh", &["-c", script.as_str()]);
        let assessment = Assessment::evaluate(AssessmentInputs::new(20.0, 8.0, 10.0));

        clipboard.share(&assessment).await.unwrap();
        let copied = std::fs::read_to_string(&out).unwrap();
        assert!(copied.contains("My risk level is Low"));
    }
}
