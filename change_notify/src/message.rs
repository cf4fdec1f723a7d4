use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::event::NormalizedFields;
use crate::resource::ResourcePair;

const HEADLINE: &str = "*AWS Infrastructure Change Detected! 🚨*";

/// The chat message for one change event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationMessage {
    pub actor: String,
    pub source: String,
    pub event_name: String,
    pub resource: Option<ResourcePair>,
    pub region: String,
    pub time: String,
}

/// Body accepted by Slack incoming webhooks.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SlackPayload {
    pub text: String,
}

pub fn build_message(fields: NormalizedFields, resource: ResourcePair) -> NotificationMessage {
    NotificationMessage {
        actor: fields.actor,
        source: fields.source,
        event_name: fields.event_name,
        resource: if resource.is_empty() { None } else { Some(resource) },
        region: fields.region,
        time: fields.time,
    }
}

impl NotificationMessage {
    pub fn text(&self) -> String {
        self.to_string()
    }

    pub fn payload(&self) -> SlackPayload {
        SlackPayload { text: self.text() }
    }
}

impl Display for NotificationMessage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", HEADLINE)?;
        writeln!(f, "👤 User: `{}`", self.actor)?;
        writeln!(f, "🛠 Event Source: `{}`", self.source)?;
        writeln!(f, "🛠 Event: `{}`", self.event_name)?;
        if let Some(resource) = &self.resource {
            writeln!(f, "🛠 {}: `{}`", resource.label, resource.value)?;
        }
        writeln!(f, "🌍 Region: `{}`", self.region)?;
        writeln!(f, "🕒 Time: `{}`", self.time)
    }
}
