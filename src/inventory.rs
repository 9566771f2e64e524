// Host/VM cross-reference: resolves each VM's host reference to a host name

use crate::models::{HostIndex, HostSnapshot, VmIndex, VmRecord, VmSnapshot};
use tracing::warn;

/// Map every host id to its display name. A repeated id keeps the name of the
/// last snapshot that carries it.
pub fn build_host_index(hosts: &[HostSnapshot]) -> HostIndex {
    let mut index = HostIndex::default();
    for host in hosts {
        if let Some(previous) = index.insert(host.id.clone(), host.name.clone()) {
            warn!(
                host_id = %host.id,
                previous = %previous,
                current = %host.name,
                "duplicate host id, keeping the later name"
            );
        }
    }
    index
}

/// Project VM snapshots into records keyed by unique id, with host references
/// resolved through `hosts`. Unknown hosts resolve to an empty name. A
/// repeated unique id keeps the later VM.
pub fn build_vm_index(vms: &[VmSnapshot], hosts: &HostIndex) -> VmIndex {
    let mut index = VmIndex::with_capacity(vms.len());
    for vm in vms {
        let record = VmRecord::from_snapshot(vm, hosts.resolve(&vm.host_ref));
        if let Some(previous) = index.insert(vm.uuid.clone(), record) {
            warn!(
                uuid = %vm.uuid,
                previous = %previous.name,
                current = %vm.name,
                "duplicate VM uuid, keeping the later record"
            );
        }
    }
    index
}
