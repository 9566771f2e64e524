// vSphere Automation REST payloads and their projection into snapshots

use crate::models::{ConnectionState, HostSnapshot, PowerState, VmSnapshot};
use serde::Deserialize;

/// Item of `GET /api/vcenter/host`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct HostSummary {
    pub host: String,
    pub name: String,
    #[serde(default)]
    pub connection_state: Option<String>,
}

/// Item of `GET /api/vcenter/vm`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct VmSummary {
    pub vm: String,
    pub name: String,
    #[serde(default)]
    pub power_state: Option<String>,
    #[serde(default)]
    pub cpu_count: Option<u32>,
    #[serde(default, rename = "memory_size_MiB")]
    pub memory_size_mib: Option<u32>,
}

/// Subset of `GET /api/vcenter/vm/{vm}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct VmInfo {
    #[serde(default)]
    pub identity: Option<VmIdentity>,
    #[serde(default, rename = "guest_OS")]
    pub guest_os: Option<String>,
    #[serde(default)]
    pub cpu: Option<VmCpu>,
    #[serde(default)]
    pub memory: Option<VmMemory>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct VmIdentity {
    #[serde(default)]
    pub bios_uuid: Option<String>,
    #[serde(default)]
    pub instance_uuid: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct VmCpu {
    pub count: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct VmMemory {
    #[serde(rename = "size_MiB")]
    pub size_mib: u32,
}

/// `GET /api/vcenter/vm/{vm}/guest/identity`; only available while tools run.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct GuestIdentity {
    #[serde(default)]
    pub full_name: Option<LocalizableMessage>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct LocalizableMessage {
    pub default_message: String,
}

pub(crate) fn host_snapshot(summary: HostSummary) -> HostSnapshot {
    HostSnapshot {
        connection_state: summary
            .connection_state
            .as_deref()
            .map(ConnectionState::from_api)
            .unwrap_or_default(),
        id: summary.host,
        name: summary.name,
    }
}

fn non_empty(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|v| !v.is_empty())
}

/// Merge list summary, detail and (optional) guest identity into one snapshot.
/// The unique id prefers the BIOS UUID, then the instance UUID, then the
/// managed object id.
pub(crate) fn vm_snapshot(
    summary: &VmSummary,
    info: &VmInfo,
    guest: Option<&GuestIdentity>,
    host_ref: Option<&str>,
) -> VmSnapshot {
    let uuid = info
        .identity
        .as_ref()
        .and_then(|id| non_empty(&id.bios_uuid).or(non_empty(&id.instance_uuid)))
        .unwrap_or(&summary.vm)
        .to_string();

    let memory_mb = summary
        .memory_size_mib
        .or_else(|| info.memory.as_ref().map(|m| m.size_mib))
        .unwrap_or(0);
    let num_cpu = summary
        .cpu_count
        .or_else(|| info.cpu.as_ref().map(|c| c.count))
        .unwrap_or(0);

    let guest_full_name = guest
        .and_then(|g| g.full_name.as_ref())
        .map(|m| m.default_message.clone())
        .filter(|s| !s.is_empty());
    let guest_id = guest
        .and_then(|g| non_empty(&g.name))
        .or(non_empty(&info.guest_os))
        .map(str::to_string);

    VmSnapshot {
        uuid,
        name: summary.name.clone(),
        memory_mb,
        num_cpu,
        host_ref: host_ref.unwrap_or_default().to_string(),
        power_state: summary
            .power_state
            .as_deref()
            .map(PowerState::from_api)
            .unwrap_or_default(),
        // Not exposed by the REST API.
        annotation: String::new(),
        guest_full_name,
        guest_id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> VmSummary {
        serde_json::from_str(
            r#"{"vm":"vm-42","name":"web01","power_state":"POWERED_ON","cpu_count":2,"memory_size_MiB":2048}"#,
        )
        .unwrap()
    }

    #[test]
    fn host_snapshot_maps_connection_state() {
        let h: HostSummary = serde_json::from_str(
            r#"{"host":"host-10","name":"esx01.local","connection_state":"NOT_RESPONDING","power_state":"POWERED_ON"}"#,
        )
        .unwrap();
        let out = host_snapshot(h);
        assert_eq!(out.id, "host-10");
        assert_eq!(out.name, "esx01.local");
        assert_eq!(out.connection_state, ConnectionState::NotResponding);
    }

    #[test]
    fn vm_snapshot_prefers_bios_uuid() {
        let info: VmInfo = serde_json::from_str(
            r#"{"guest_OS":"UBUNTU_64","identity":{"bios_uuid":"4217-aa","instance_uuid":"5017-bb","name":"web01"}}"#,
        )
        .unwrap();
        let out = vm_snapshot(&summary(), &info, None, Some("host-10"));
        assert_eq!(out.uuid, "4217-aa");
        assert_eq!(out.name, "web01");
        assert_eq!(out.memory_mb, 2048);
        assert_eq!(out.num_cpu, 2);
        assert_eq!(out.host_ref, "host-10");
        assert_eq!(out.power_state, PowerState::PoweredOn);
        assert_eq!(out.guest_id.as_deref(), Some("UBUNTU_64"));
        assert!(out.guest_full_name.is_none());
    }

    #[test]
    fn vm_snapshot_falls_back_to_instance_uuid_then_moid() {
        let info: VmInfo =
            serde_json::from_str(r#"{"identity":{"bios_uuid":"","instance_uuid":"5017-bb"}}"#).unwrap();
        assert_eq!(vm_snapshot(&summary(), &info, None, None).uuid, "5017-bb");

        let out = vm_snapshot(&summary(), &VmInfo::default(), None, None);
        assert_eq!(out.uuid, "vm-42");
        assert_eq!(out.host_ref, "");
    }

    #[test]
    fn vm_snapshot_uses_detail_sizes_when_summary_lacks_them() {
        let s: VmSummary = serde_json::from_str(r#"{"vm":"vm-7","name":"db"}"#).unwrap();
        let info: VmInfo =
            serde_json::from_str(r#"{"cpu":{"count":8},"memory":{"size_MiB":16384}}"#).unwrap();
        let out = vm_snapshot(&s, &info, None, None);
        assert_eq!(out.num_cpu, 8);
        assert_eq!(out.memory_mb, 16384);
        assert_eq!(out.power_state, PowerState::Unknown);
    }

    #[test]
    fn vm_snapshot_takes_guest_identity() {
        let guest: GuestIdentity = serde_json::from_str(
            r#"{"full_name":{"default_message":"Ubuntu Linux (64-bit)","id":"x","args":[]},"name":"UBUNTU_64","family":"LINUX"}"#,
        )
        .unwrap();
        let info: VmInfo = serde_json::from_str(r#"{"guest_OS":"OTHER_LINUX_64"}"#).unwrap();
        let out = vm_snapshot(&summary(), &info, Some(&guest), None);
        assert_eq!(out.guest_full_name.as_deref(), Some("Ubuntu Linux (64-bit)"));
        assert_eq!(out.guest_id.as_deref(), Some("UBUNTU_64"));
    }
}
