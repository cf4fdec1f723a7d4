use serde_json::Value;

use crate::event::EventDetail;

use self::Source::{RequestParameters, ResponseElements};
use self::Step::{First, Key};

/// Label and identifier of the resource an event touched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourcePair {
    pub label: String,
    pub value: String,
}

impl ResourcePair {
    pub fn new(label: &str, value: &str) -> Self {
        ResourcePair {
            label: label.to_string(),
            value: value.to_string(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.label.is_empty() || self.value.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    ResponseElements,
    RequestParameters,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Key(&'static str),
    /// First element of a list.
    First,
}

#[derive(Debug)]
pub struct ResourceRule {
    pub events: &'static [&'static str],
    pub source: Source,
    pub path: &'static [Step],
    pub label: &'static str,
}

pub static RULES: &[ResourceRule] = &[
    ResourceRule {
        events: &["RunInstances", "TerminateInstances"],
        source: ResponseElements,
        path: &[Key("instancesSet"), Key("items"), First, Key("instanceId")],
        label: "Instance_ID",
    },
    ResourceRule {
        events: &["CreateDBInstance", "DeleteDBInstance"],
        source: ResponseElements,
        path: &[Key("dBInstanceIdentifier")],
        label: "DB_Instance_ID",
    },
    ResourceRule {
        events: &["CreateLoadBalancer", "DeleteLoadBalancer"],
        source: ResponseElements,
        path: &[Key("loadBalancers"), First, Key("loadBalancerName")],
        label: "LoadBalancer_ID",
    },
    ResourceRule {
        events: &["CreateUser", "DeleteUser"],
        source: ResponseElements,
        path: &[Key("user"), Key("userName")],
        label: "User_ID",
    },
    ResourceRule {
        events: &["CreateGroup", "DeleteGroup"],
        source: ResponseElements,
        path: &[Key("group"), Key("groupName")],
        label: "Group",
    },
    ResourceRule {
        events: &["CreateRole", "DeleteRole"],
        source: ResponseElements,
        path: &[Key("role"), Key("roleName")],
        label: "Role",
    },
    ResourceRule {
        events: &["CreatePolicy", "DeletePolicy"],
        source: ResponseElements,
        path: &[Key("policy"), Key("policyName")],
        label: "Policy",
    },
    ResourceRule {
        events: &["CreateCluster", "DeleteCluster"],
        source: ResponseElements,
        path: &[Key("cluster"), Key("clusterName")],
        label: "Cluster",
    },
    ResourceRule {
        events: &["CreateRestApi", "DeleteRestApi"],
        source: ResponseElements,
        path: &[Key("id")],
        label: "RestApi",
    },
    ResourceRule {
        events: &["CreatePipeline", "DeletePipeline"],
        source: ResponseElements,
        path: &[Key("pipeline"), Key("pipelineName")],
        label: "Pipeline",
    },
    ResourceRule {
        events: &["CreateProject", "DeleteProject", "UpdateProject"],
        source: ResponseElements,
        path: &[Key("project"), Key("projectName")],
        label: "Project",
    },
    ResourceRule {
        events: &["CreateApplication", "DeleteApplication"],
        source: ResponseElements,
        path: &[Key("application"), Key("applicationName")],
        label: "Application",
    },
    ResourceRule {
        events: &["CreateHostedZone", "DeleteHostedZone"],
        source: ResponseElements,
        path: &[Key("hostedZone"), Key("id")],
        label: "HostedZone",
    },
    // The secret name is only echoed back on delete.
    ResourceRule {
        events: &["CreateSecret"],
        source: RequestParameters,
        path: &[Key("name")],
        label: "Secret_ID",
    },
    ResourceRule {
        events: &["DeleteSecret"],
        source: ResponseElements,
        path: &[Key("name")],
        label: "Secret_ID",
    },
    ResourceRule {
        events: &["CreateRepository", "DeleteRepository"],
        source: ResponseElements,
        path: &[Key("repository"), Key("repositoryName")],
        label: "Repository Name",
    },
    ResourceRule {
        events: &["CreateAutoScalingGroup", "DeleteAutoScalingGroup"],
        source: ResponseElements,
        path: &[Key("autoScalingGroupName")],
        label: "AutoScalingGroup",
    },
];

pub fn find_rule(event_name: &str) -> Option<&'static ResourceRule> {
    RULES
        .iter()
        .find(|rule| rule.events.iter().any(|name| *name == event_name))
}

impl ResourceRule {
    /// Walks the rule's path. Any miss along the way gives the empty pair.
    pub fn apply(&self, detail: &EventDetail) -> ResourcePair {
        let root = match self.source {
            ResponseElements => &detail.response_elements,
            RequestParameters => &detail.request_parameters,
        };
        let leaf = self.path.iter().try_fold(root, |node, step| match step {
            Key(key) => node.get(*key),
            First => node.as_array().and_then(|items| items.first()),
        });
        match leaf.and_then(leaf_text) {
            Some(value) if !value.is_empty() => ResourcePair {
                label: self.label.to_string(),
                value,
            },
            _ => ResourcePair::empty(),
        }
    }
}

fn leaf_text(leaf: &Value) -> Option<String> {
    match leaf {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

pub fn extract(event_name: &str, detail: &EventDetail) -> ResourcePair {
    match find_rule(event_name) {
        Some(rule) => rule.apply(detail),
        None => ResourcePair::empty(),
    }
}
