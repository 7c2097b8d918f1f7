//! Compose an email with the results through a `mailto:` link.

use async_trait::async_trait;

use super::social::{open_with_system, Opener};
use super::ShareTarget;
use crate::error::ShareError;
use crate::report::Assessment;

pub struct Email {
    to: String,
    subject: String,
    opener: Opener,
}

impl Email {
    pub fn new(to: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            opener: open_with_system,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_opener(mut self, opener: Opener) -> Self {
        self.opener = opener;
        self
    }

    /// Prefilled `mailto:` link. Spaces are percent-encoded, not `+`.
    pub fn mailto_url(&self, assessment: &Assessment) -> String {
        let body = format!("{}\n\n{}", assessment.share_text(), assessment.render_text());
        format!(
            "mailto:{}?subject={}&body={}",
            urlencoding::encode(&self.to),
            urlencoding::encode(&self.subject),
            urlencoding::encode(&body)
        )
    }
}

#[async_trait]
impl ShareTarget for Email {
    fn name(&self) -> &str {
        "email"
    }

    fn display_name(&self) -> &str {
        "Email"
    }

    async fn share(&self, assessment: &Assessment) -> Result<(), ShareError> {
        let url = self.mailto_url(assessment);
        (self.opener)(&url).map_err(|source| ShareError::OpenFailed { url, source })
    }

    fn success_message(&self) -> (String, String) {
        (
            "Email draft opened".to_string(),
            "Your mail app has a prefilled draft with your results".to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::AssessmentInputs;

    fn failing_opener(_: &str) -> std::io::Result<()> {
        Err(std::io::Error::other("no mail client"))
    }

    #[test]
    fn mailto_encodes_subject_and_body() {
        let email = Email::new("", "Burnout Risk Assessment");
        let assessment = Assessment::evaluate(AssessmentInputs::new(60.0, 5.0, 2.0));
        let url = email.mailto_url(&assessment);
        assert!(url.starts_with("mailto:?subject=Burnout%20Risk%20Assessment&body="));
        assert!(url.contains("High%20Risk"));
        assert!(!url.contains(' '));
        assert!(!url.contains('\n'));
    }

    #[test]
    fn mailto_includes_recipient() {
        let email = Email::new("coach@example.com", "Results");
        let url = email.mailto_url(&Assessment::evaluate(AssessmentInputs::default()));
        assert!(url.starts_with("mailto:coach%40example.com?subject=Results"));
    }

    #[tokio::test]
    async fn open_failure_surfaces() {
        let email = Email::new("", "Results").with_opener(failing_opener);
        let result = email
            .share(&Assessment::evaluate(AssessmentInputs::default()))
            .await;
        assert!(matches!(result, Err(ShareError::OpenFailed { .. })));
    }
}
