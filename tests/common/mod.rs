// Shared test helpers
#![allow(dead_code)]

use goverview::models::*;

pub fn host(id: &str, name: &str) -> HostSnapshot {
    HostSnapshot {
        id: id.into(),
        name: name.into(),
        connection_state: ConnectionState::Connected,
    }
}

pub fn vm(uuid: &str, name: &str, memory_mb: u32, num_cpu: u32, host_ref: &str) -> VmSnapshot {
    VmSnapshot {
        uuid: uuid.into(),
        name: name.into(),
        memory_mb,
        num_cpu,
        host_ref: host_ref.into(),
        power_state: PowerState::PoweredOn,
        annotation: String::new(),
        guest_full_name: None,
        guest_id: None,
    }
}
