//! Post results to a chat webhook (Discord or Slack incoming webhooks).

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

use super::credentials::{self, CredentialStore};
use super::ShareTarget;
use crate::error::ShareError;
use crate::report::Assessment;

pub struct Webhook {
    url: String,
    client: Client,
}

impl Webhook {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: Client::new(),
        }
    }

    /// Use `configured` when set, otherwise the URL held by `store`.
    pub fn from_config_or_store(configured: &str, store: &dyn CredentialStore) -> Self {
        Self::new(credentials::resolve_webhook_url(configured, store))
    }

    /// Slack expects `text`, Discord expects `content`.
    fn payload(&self, message: &str) -> serde_json::Value {
        if self.url.contains("hooks.slack.com") {
            json!({ "text": message })
        } else {
            json!({ "content": message })
        }
    }

    fn message(assessment: &Assessment) -> String {
        let titles: Vec<&str> = assessment
            .recommendations
            .iter()
            .map(|r| r.title.as_str())
            .collect();
        format!(
            "Burnout risk: {} / 10 ({})\n{}\nFocus on: {}",
            assessment.score.display(),
            assessment.headline(),
            assessment.classification.window,
            titles.join(", ")
        )
    }
}

#[async_trait]
impl ShareTarget for Webhook {
    fn name(&self) -> &str {
        "webhook"
    }

    fn display_name(&self) -> &str {
        "Webhook"
    }

    async fn share(&self, assessment: &Assessment) -> Result<(), ShareError> {
        if self.url.is_empty() {
            return Err(ShareError::NotConfigured {
                target: "Webhook".into(),
                message: "set share.webhook_url or store one in the keyring".into(),
            });
        }

        let body = self.payload(&Self::message(assessment));
        let resp = self.client.post(&self.url).json(&body).send().await?;

        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            let text = resp.text().await.unwrap_or_default();
            Err(ShareError::WebhookRejected {
                status: status.as_u16(),
                body: text,
            })
        }
    }

    fn success_message(&self) -> (String, String) {
        (
            "Posted".to_string(),
            "Results posted to your webhook channel".to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::AssessmentInputs;
    use mockito::Matcher;

    fn assessment() -> Assessment {
        Assessment::evaluate(AssessmentInputs::new(60.0, 5.0, 2.0))
    }

    #[tokio::test]
    async fn posts_content_payload() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/webhooks/1/abc")
            .match_body(Matcher::Regex(r#""content":"Burnout risk: 9.5 / 10 \(High Risk\)"#.into()))
            .with_status(204)
            .create_async()
            .await;

        let webhook = Webhook::new(format!("{}/api/webhooks/1/abc", server.url()));
        webhook.share(&assessment()).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn rejection_carries_status_and_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/hook")
            .with_status(400)
            .with_body("invalid payload")
            .create_async()
            .await;

        let webhook = Webhook::new(format!("{}/hook", server.url()));
        match webhook.share(&assessment()).await {
            Err(ShareError::WebhookRejected { status, body }) => {
                assert_eq!(status, 400);
                assert_eq!(body, "invalid payload");
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_url_is_not_configured() {
        let webhook = Webhook::new("");
        assert!(matches!(
            webhook.share(&assessment()).await,
            Err(ShareError::NotConfigured { .. })
        ));
    }

    #[test]
    fn slack_urls_use_text_field() {
        let webhook = Webhook::new("https://hooks.slack.com/services/T/B/X");
        let payload = webhook.payload("hi");
        assert_eq!(payload["text"], "hi");
        assert!(payload.get("content").is_none());
    }

    #[tokio::test]
    async fn stored_url_is_used_for_posting() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/stored")
            .with_status(204)
            .create_async()
            .await;

        let store = credentials::MemoryStore::default();
        store
            .set(credentials::WEBHOOK_URL_KEY, &format!("{}/stored", server.url()))
            .unwrap();
        let webhook = Webhook::from_config_or_store("", &store);
        webhook.share(&assessment()).await.unwrap();
        mock.assert_async().await;
    }
}
