use serde::Deserialize;
use serde_json::Value;

use crate::error::EventError;

pub const UNKNOWN_EVENT: &str = "UnknownEvent";
pub const UNKNOWN_USER: &str = "UnknownUser";
pub const UNKNOWN: &str = "Unknown";

/// An EventBridge envelope around a CloudTrail API call. Only `detail` is
/// required; the rest of the envelope is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ChangeEvent {
    pub detail: EventDetail,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetail {
    #[serde(default)]
    pub event_name: Option<String>,
    #[serde(default)]
    pub user_identity: Option<UserIdentity>,
    #[serde(default)]
    pub aws_region: Option<String>,
    #[serde(default)]
    pub event_time: Option<String>,
    #[serde(default)]
    pub event_source: Option<String>,
    #[serde(default)]
    pub response_elements: Value,
    #[serde(default)]
    pub request_parameters: Value,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdentity {
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub principal_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedFields {
    pub actor: String,
    pub event_name: String,
    pub region: String,
    pub time: String,
    pub source: String,
}

impl ChangeEvent {
    pub fn from_value(payload: Value) -> Result<ChangeEvent, EventError> {
        Ok(serde_json::from_value(payload)?)
    }
}

pub fn normalize(event: &ChangeEvent) -> NormalizedFields {
    let detail = &event.detail;
    NormalizedFields {
        actor: resolve_actor(detail.user_identity.as_ref()),
        event_name: or_default(&detail.event_name, UNKNOWN_EVENT),
        region: or_default(&detail.aws_region, UNKNOWN),
        time: or_default(&detail.event_time, UNKNOWN),
        source: or_default(&detail.event_source, UNKNOWN),
    }
}

/// Picks `userName`, then `principalId`, and strips any `prefix:` namespace
/// (assumed-role sessions look like `AROAEXAMPLE:alice@xyz.com`).
pub fn resolve_actor(identity: Option<&UserIdentity>) -> String {
    let actor = identity
        .and_then(|id| {
            non_empty(&id.user_name).or_else(|| non_empty(&id.principal_id))
        })
        .unwrap_or(UNKNOWN_USER);
    match actor.rsplit_once(':') {
        Some((_, tail)) => tail.to_string(),
        None => actor.to_string(),
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn or_default(value: &Option<String>, default: &str) -> String {
    value.clone().unwrap_or_else(|| default.to_string())
}
