pub mod config;
pub mod error;
pub mod event;
pub mod filter;
pub mod message;
pub mod notifier;
pub mod resource;

use lambda_runtime::{Error, LambdaEvent};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, error, info};

use crate::config::Config;
use crate::error::EventError;
use crate::event::{normalize, ChangeEvent};
use crate::filter::{ActorFilter, SubstringFilter};
use crate::message::{build_message, NotificationMessage};
use crate::notifier::WebhookNotifier;
use crate::resource::extract;

pub const SUPPRESSED_BODY: &str = "User not in notify list.";

/// What the function hands back to the Lambda host.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HandlerResponse {
    pub status_code: u16,
    pub body: String,
}

impl HandlerResponse {
    fn ok<T: Into<String>>(body: T) -> Self {
        HandlerResponse {
            status_code: 200,
            body: body.into(),
        }
    }

    fn failed(e: &EventError) -> Self {
        HandlerResponse {
            status_code: 500,
            body: format!("Error processing event: {}", e),
        }
    }
}

#[derive(Debug)]
pub enum Outcome {
    Suppressed { actor: String },
    Delivered(NotificationMessage),
}

pub struct ChangeNotifier {
    filter: Box<dyn ActorFilter>,
    notifier: WebhookNotifier,
}

impl ChangeNotifier {
    pub fn new(filter: Box<dyn ActorFilter>, notifier: WebhookNotifier) -> Self {
        ChangeNotifier { filter, notifier }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Box::new(SubstringFilter::new(config.actor_substring.clone())),
            WebhookNotifier::new(config.webhook_url.clone()),
        )
    }

    pub async fn process(&self, payload: Value) -> Result<Outcome, EventError> {
        let event = ChangeEvent::from_value(payload)?;
        let fields = normalize(&event);

        if !self.filter.matches(&fields.actor) {
            info!("User {} does not match notification criteria. Skipping.", fields.actor);
            return Ok(Outcome::Suppressed { actor: fields.actor });
        }

        let resource = extract(&fields.event_name, &event.detail);
        debug!("resource for {}: {:?}", fields.event_name, resource);
        let message = build_message(fields, resource);
        info!("Sending Slack alert: {}", message.text());
        self.notifier.deliver(&message).await;
        Ok(Outcome::Delivered(message))
    }

    pub async fn respond(&self, payload: Value) -> HandlerResponse {
        match self.process(payload).await {
            Ok(Outcome::Suppressed { .. }) => HandlerResponse::ok(SUPPRESSED_BODY),
            Ok(Outcome::Delivered(message)) => HandlerResponse::ok(
                json!({
                    "message": "Notification sent",
                    "slack_message": message.payload(),
                })
                .to_string(),
            ),
            Err(e) => {
                error!("Error processing event: {}", e);
                HandlerResponse::failed(&e)
            }
        }
    }
}

pub async fn function_handler(
    notifier: &ChangeNotifier,
    event: LambdaEvent<Value>,
) -> Result<HandlerResponse, Error> {
    info!("Received event: {}", event.payload);
    Ok(notifier.respond(event.payload).await)
}
