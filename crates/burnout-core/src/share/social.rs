//! Social share intents: build a prefilled post URL and open it in the browser.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use url::Url;

use super::ShareTarget;
use crate::error::ShareError;
use crate::report::Assessment;

/// Opens a URL with the host's default handler.
pub(crate) type Opener = fn(&str) -> std::io::Result<()>;

pub(crate) fn open_with_system(url: &str) -> std::io::Result<()> {
    open::that(url)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SocialNetwork {
    X,
    LinkedIn,
    Facebook,
}

impl SocialNetwork {
    pub fn name(self) -> &'static str {
        match self {
            SocialNetwork::X => "x",
            SocialNetwork::LinkedIn => "linkedin",
            SocialNetwork::Facebook => "facebook",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            SocialNetwork::X => "X",
            SocialNetwork::LinkedIn => "LinkedIn",
            SocialNetwork::Facebook => "Facebook",
        }
    }

    /// Prefilled share intent for `text` linking to `page_url`.
    pub fn intent_url(self, text: &str, page_url: &str) -> Result<Url, ShareError> {
        let url = match self {
            SocialNetwork::X => Url::parse_with_params(
                "https://twitter.com/intent/tweet",
                &[("text", text), ("url", page_url)],
            )?,
            SocialNetwork::LinkedIn => Url::parse_with_params(
                "https://www.linkedin.com/sharing/share-offsite/",
                &[("url", page_url)],
            )?,
            SocialNetwork::Facebook => Url::parse_with_params(
                "https://www.facebook.com/sharer/sharer.php",
                &[("u", page_url), ("quote", text)],
            )?,
        };
        Ok(url)
    }
}

/// Share to a social network through its web intent.
pub struct SocialShare {
    network: SocialNetwork,
    page_url: String,
    opener: Opener,
}

impl SocialShare {
    pub fn new(network: SocialNetwork, page_url: impl Into<String>) -> Self {
        Self {
            network,
            page_url: page_url.into(),
            opener: open_with_system,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_opener(mut self, opener: Opener) -> Self {
        self.opener = opener;
        self
    }
}

#[async_trait]
impl ShareTarget for SocialShare {
    fn name(&self) -> &str {
        self.network.name()
    }

    fn display_name(&self) -> &str {
        self.network.display_name()
    }

    async fn share(&self, assessment: &Assessment) -> Result<(), ShareError> {
        let url = self
            .network
            .intent_url(&assessment.share_text(), &self.page_url)?;
        tracing::debug!(network = self.network.name(), %url, "opening share intent");
        (self.opener)(url.as_str()).map_err(|source| ShareError::OpenFailed {
            url: url.to_string(),
            source,
        })
    }

    fn success_message(&self) -> (String, String) {
        (
            "Share window opened".to_string(),
            format!("Finish your post in {}", self.network.display_name()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::AssessmentInputs;

    fn ok_opener(_: &str) -> std::io::Result<()> {
        Ok(())
    }

    fn failing_opener(_: &str) -> std::io::Result<()> {
        Err(std::io::Error::new(std::io::ErrorKind::NotFound, "no browser"))
    }

    #[test]
    fn x_intent_carries_text_and_url() {
        let url = SocialNetwork::X
            .intent_url("My risk level is Low.", "https://example.com/calc")
            .unwrap();
        assert_eq!(url.host_str(), Some("twitter.com"));
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert!(pairs.contains(&("text".into(), "My risk level is Low.".into())));
        assert!(pairs.contains(&("url".into(), "https://example.com/calc".into())));
    }

    #[test]
    fn linkedin_intent_only_links_page() {
        let url = SocialNetwork::LinkedIn
            .intent_url("ignored", "https://example.com")
            .unwrap();
        assert_eq!(url.query(), Some("url=https%3A%2F%2Fexample.com"));
    }

    #[tokio::test]
    async fn share_reports_open_failure() {
        let target = SocialShare::new(SocialNetwork::Facebook, "https://example.com")
            .with_opener(failing_opener);
        let assessment = Assessment::evaluate(AssessmentInputs::default());
        let err = target.share(&assessment).await.unwrap_err();
        assert!(matches!(err, ShareError::OpenFailed { .. }));
    }

    #[tokio::test]
    async fn share_opens_intent() {
        let target =
            SocialShare::new(SocialNetwork::X, "https://example.com").with_opener(ok_opener);
        let assessment = Assessment::evaluate(AssessmentInputs::default());
        assert!(target.share(&assessment).await.is_ok());
        assert_eq!(target.name(), "x");
    }
}
