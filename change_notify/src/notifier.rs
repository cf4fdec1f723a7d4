use reqwest::{Client, StatusCode};
use tracing::{error, info};

use crate::error::NotifyError;
use crate::message::NotificationMessage;

/// Posts notification messages to a Slack incoming webhook.
#[derive(Debug, Clone)]
pub struct WebhookNotifier {
    client: Client,
    endpoint: Option<String>,
}

impl WebhookNotifier {
    pub fn new(endpoint: Option<String>) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    pub fn with_client(client: Client, endpoint: Option<String>) -> Self {
        WebhookNotifier { client, endpoint }
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    pub async fn send(&self, message: &NotificationMessage) -> Result<StatusCode, NotifyError> {
        let endpoint = self.endpoint().ok_or(NotifyError::MissingEndpoint)?;
        let response = self
            .client
            .post(endpoint)
            .header("Content-Type", "application/json")
            .json(&message.payload())
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable>".to_string());
            return Err(NotifyError::Status { status, body });
        }
        Ok(status)
    }

    /// Best-effort delivery: failures are logged and dropped.
    pub async fn deliver(&self, message: &NotificationMessage) {
        match self.send(message).await {
            Ok(status) => info!("Slack notification sent, response code: {}", status.as_u16()),
            Err(NotifyError::MissingEndpoint) => {
                error!("SLACK_WEBHOOK_URL not set in environment variables")
            }
            Err(e) => error!("error sending Slack notification: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::NormalizedFields;
    use crate::message::build_message;
    use crate::resource::ResourcePair;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn message() -> NotificationMessage {
        build_message(
            NormalizedFields {
                actor: "alice@xyz.com".to_string(),
                event_name: "CreateRole".to_string(),
                region: "us-west-2".to_string(),
                time: "2024-06-01T12:00:00Z".to_string(),
                source: "iam.amazonaws.com".to_string(),
            },
            ResourcePair::new("Role", "deployer"),
        )
    }

    #[tokio::test]
    async fn posts_json_text() {
        let server = MockServer::start().await;
        let msg = message();
        Mock::given(method("POST"))
            .and(path("/services/hook"))
            .and(header("content-type", "application/json"))
            .and(body_json(serde_json::json!({ "text": msg.text() })))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .expect(1)
            .mount(&server)
            .await;

        let notifier = WebhookNotifier::new(Some(format!("{}/services/hook", server.uri())));
        let status = notifier.send(&msg).await.unwrap();
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn missing_endpoint_is_an_error() {
        let notifier = WebhookNotifier::new(None);
        let err = notifier.send(&message()).await.unwrap_err();
        assert!(matches!(err, NotifyError::MissingEndpoint));
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(404).set_body_string("no_service"))
            .mount(&server)
            .await;

        let notifier = WebhookNotifier::new(Some(server.uri()));
        match notifier.send(&message()).await {
            Err(NotifyError::Status { status, body }) => {
                assert_eq!(status, StatusCode::NOT_FOUND);
                assert_eq!(body, "no_service");
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn deliver_swallows_failures() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        WebhookNotifier::new(Some(server.uri())).deliver(&message()).await;
        WebhookNotifier::new(None).deliver(&message()).await;
    }
}
