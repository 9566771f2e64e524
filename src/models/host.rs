// Hypervisor host models

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Host connection state; serializes to camelCase JSON (e.g. "notResponding").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConnectionState {
    Connected,
    Disconnected,
    NotResponding,
    #[default]
    #[serde(other)]
    Unknown,
}

impl ConnectionState {
    /// Parse from an API state string. Accepts both REST ("NOT_RESPONDING")
    /// and vim25 ("notResponding") spellings.
    pub fn from_api(s: &str) -> Self {
        match s.replace('_', "").to_lowercase().as_str() {
            "connected" => ConnectionState::Connected,
            "disconnected" => ConnectionState::Disconnected,
            "notresponding" => ConnectionState::NotResponding,
            _ => ConnectionState::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionState::Connected => "connected",
            ConnectionState::Disconnected => "disconnected",
            ConnectionState::NotResponding => "notResponding",
            ConnectionState::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostSnapshot {
    /// Managed object id, e.g. "host-10".
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub connection_state: ConnectionState,
}

/// Host id to display name, built once per report cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostIndex {
    names: HashMap<String, String>,
}

impl HostIndex {
    /// Insert a mapping, returning the name it replaced (if any).
    pub fn insert(&mut self, id: String, name: String) -> Option<String> {
        self.names.insert(id, name)
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    /// Resolved display name for a host reference; empty when the host is not
    /// part of this index.
    pub fn resolve(&self, id: &str) -> &str {
        self.get(id).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.names.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
