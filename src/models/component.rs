// Network component models (mock SDN inventory)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Variant tag; also how the config file names a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Controller,
    Switch,
    Function,
}

impl ComponentKind {
    /// Label used as the block title in text reports.
    pub fn label(self) -> &'static str {
        match self {
            ComponentKind::Controller => "SDNController",
            ComponentKind::Switch => "NetworkSwitch",
            ComponentKind::Function => "NetworkFunction",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Gauges every component exposes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceUtilization {
    pub cpu_percent: f64,
    pub memory_percent: f64,
    pub bandwidth_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SdnController {
    pub id: String,
}

impl SdnController {
    pub fn utilization(&self) -> ResourceUtilization {
        ResourceUtilization {
            cpu_percent: 50.0,
            memory_percent: 60.0,
            bandwidth_percent: 20.0,
        }
    }

    pub fn control_plane_latency_ms(&self) -> f64 {
        0.5
    }

    pub fn flow_rules_installed(&self) -> u32 {
        1000
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkSwitch {
    pub id: String,
}

impl NetworkSwitch {
    pub fn utilization(&self) -> ResourceUtilization {
        ResourceUtilization {
            cpu_percent: 30.0,
            memory_percent: 40.0,
            bandwidth_percent: 80.0,
        }
    }

    pub fn packets_forwarded(&self) -> u64 {
        100_000
    }

    pub fn packets_dropped(&self) -> u64 {
        100
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkFunction {
    pub id: String,
}

impl NetworkFunction {
    pub fn utilization(&self) -> ResourceUtilization {
        ResourceUtilization {
            cpu_percent: 70.0,
            memory_percent: 80.0,
            bandwidth_percent: 40.0,
        }
    }
}

/// Closed set of reportable components. Adding a variant means extending
/// every report kind's match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NetworkComponent {
    Controller(SdnController),
    Switch(NetworkSwitch),
    Function(NetworkFunction),
}

impl NetworkComponent {
    pub fn controller(id: impl Into<String>) -> Self {
        NetworkComponent::Controller(SdnController { id: id.into() })
    }

    pub fn switch(id: impl Into<String>) -> Self {
        NetworkComponent::Switch(NetworkSwitch { id: id.into() })
    }

    pub fn function(id: impl Into<String>) -> Self {
        NetworkComponent::Function(NetworkFunction { id: id.into() })
    }

    /// Build a component from its config tag.
    pub fn new(kind: ComponentKind, id: impl Into<String>) -> Self {
        match kind {
            ComponentKind::Controller => Self::controller(id),
            ComponentKind::Switch => Self::switch(id),
            ComponentKind::Function => Self::function(id),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            NetworkComponent::Controller(c) => &c.id,
            NetworkComponent::Switch(s) => &s.id,
            NetworkComponent::Function(f) => &f.id,
        }
    }

    pub fn kind(&self) -> ComponentKind {
        match self {
            NetworkComponent::Controller(_) => ComponentKind::Controller,
            NetworkComponent::Switch(_) => ComponentKind::Switch,
            NetworkComponent::Function(_) => ComponentKind::Function,
        }
    }

    pub fn utilization(&self) -> ResourceUtilization {
        match self {
            NetworkComponent::Controller(c) => c.utilization(),
            NetworkComponent::Switch(s) => s.utilization(),
            NetworkComponent::Function(f) => f.utilization(),
        }
    }
}

/// The fixed inventory the demo reports on.
pub fn default_inventory() -> Vec<NetworkComponent> {
    vec![
        NetworkComponent::controller("Controller1"),
        NetworkComponent::switch("Switch1"),
        NetworkComponent::switch("Switch2"),
        NetworkComponent::function("Firewall-NF"),
    ]
}
