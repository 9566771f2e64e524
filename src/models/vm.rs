// Virtual machine models

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// VM power state; serializes with the vim25 spelling (e.g. "poweredOn").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PowerState {
    PoweredOn,
    PoweredOff,
    Suspended,
    #[default]
    #[serde(other)]
    Unknown,
}

impl PowerState {
    /// Parse from an API state string ("POWERED_ON", "poweredOn", ...).
    pub fn from_api(s: &str) -> Self {
        match s.replace('_', "").to_lowercase().as_str() {
            "poweredon" => PowerState::PoweredOn,
            "poweredoff" => PowerState::PoweredOff,
            "suspended" => PowerState::Suspended,
            _ => PowerState::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PowerState::PoweredOn => "poweredOn",
            PowerState::PoweredOff => "poweredOff",
            PowerState::Suspended => "suspended",
            PowerState::Unknown => "unknown",
        }
    }
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw per-VM properties as fetched from the endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VmSnapshot {
    /// Stable unique id (BIOS UUID when the endpoint reports one).
    pub uuid: String,
    pub name: String,
    #[serde(rename = "memoryMB")]
    pub memory_mb: u32,
    #[serde(rename = "numCPU")]
    pub num_cpu: u32,
    /// Opaque id of the owning host; empty when the VM is not placed.
    #[serde(default)]
    pub host_ref: String,
    #[serde(default)]
    pub power_state: PowerState,
    #[serde(default)]
    pub annotation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guest_full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guest_id: Option<String>,
}

/// User-facing VM record: the snapshot with its host reference resolved to
/// the host's display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VmRecord {
    pub unique_id: String,
    pub name: String,
    #[serde(rename = "memoryMB")]
    pub memory_mb: u32,
    #[serde(rename = "numCPU")]
    pub num_cpu: u32,
    /// Empty when the host is outside the current view.
    pub resolved_host_name: String,
    pub power_state: PowerState,
    pub annotation: String,
    #[serde(default)]
    pub guest_full_name: Option<String>,
    #[serde(default)]
    pub guest_id: Option<String>,
}

impl VmRecord {
    pub fn from_snapshot(vm: &VmSnapshot, resolved_host_name: &str) -> Self {
        Self {
            unique_id: vm.uuid.clone(),
            name: vm.name.clone(),
            memory_mb: vm.memory_mb,
            num_cpu: vm.num_cpu,
            resolved_host_name: resolved_host_name.to_string(),
            power_state: vm.power_state,
            annotation: vm.annotation.clone(),
            guest_full_name: vm.guest_full_name.clone(),
            guest_id: vm.guest_id.clone(),
        }
    }
}

/// VM records keyed by unique id. Iteration order is arbitrary.
pub type VmIndex = HashMap<String, VmRecord>;
