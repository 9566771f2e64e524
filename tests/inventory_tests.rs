// Cross-reference builder tests (host index, VM index)

mod common;

use common::{host, vm};
use goverview::inventory::{build_host_index, build_vm_index};
use goverview::models::{HostIndex, PowerState};

#[test]
fn host_index_has_one_entry_per_distinct_id() {
    let hosts = vec![
        host("host-1", "esx01.local"),
        host("host-2", "esx02.local"),
        host("host-3", "esx01.local"),
    ];
    let index = build_host_index(&hosts);
    assert_eq!(index.len(), 3);
    for h in &hosts {
        assert_eq!(index.get(&h.id), Some(h.name.as_str()));
    }
}

#[test]
fn host_index_duplicate_id_keeps_last_name() {
    let index = build_host_index(&[
        host("host-1", "first"),
        host("host-2", "other"),
        host("host-1", "second"),
    ]);
    assert_eq!(index.len(), 2);
    assert_eq!(index.get("host-1"), Some("second"));
}

#[test]
fn host_index_of_no_hosts_is_empty() {
    let index = build_host_index(&[]);
    assert!(index.is_empty());
    assert_eq!(index.resolve("host-1"), "");
}

#[test]
fn vm_index_resolves_known_host() {
    let hosts = build_host_index(&[host("host-1", "esx01.local")]);
    let index = build_vm_index(&[vm("vm-a", "web01", 2048, 2, "host-1")], &hosts);

    assert_eq!(index.len(), 1);
    let rec = &index["vm-a"];
    assert_eq!(rec.unique_id, "vm-a");
    assert_eq!(rec.name, "web01");
    assert_eq!(rec.memory_mb, 2048);
    assert_eq!(rec.num_cpu, 2);
    assert_eq!(rec.resolved_host_name, "esx01.local");
    assert_eq!(rec.power_state, PowerState::PoweredOn);
}

#[test]
fn vm_index_unknown_host_resolves_to_empty_name() {
    let hosts = build_host_index(&[]);
    let index = build_vm_index(&[vm("vm-b", "orphan", 512, 1, "host-9")], &hosts);
    assert_eq!(index["vm-b"].resolved_host_name, "");
    assert_eq!(index["vm-b"].name, "orphan");
}

#[test]
fn vm_index_resolved_name_matches_host_index_for_every_vm() {
    let hosts = build_host_index(&[host("host-1", "esx01"), host("host-2", "esx02")]);
    let vms = vec![
        vm("u1", "a", 1024, 1, "host-1"),
        vm("u2", "b", 1024, 1, "host-2"),
        vm("u3", "c", 1024, 1, "host-2"),
        vm("u4", "d", 1024, 1, "host-7"),
    ];
    let index = build_vm_index(&vms, &hosts);
    assert_eq!(index.len(), 4);
    for v in &vms {
        assert_eq!(index[&v.uuid].resolved_host_name, hosts.resolve(&v.host_ref));
    }
}

#[test]
fn vm_index_duplicate_uuid_keeps_last_vm() {
    let hosts = build_host_index(&[host("host-1", "esx01")]);
    let index = build_vm_index(
        &[
            vm("dup", "first", 1024, 1, "host-1"),
            vm("dup", "second", 4096, 4, "host-1"),
        ],
        &hosts,
    );
    assert_eq!(index.len(), 1);
    assert_eq!(index["dup"].name, "second");
    assert_eq!(index["dup"].memory_mb, 4096);
}

#[test]
fn vm_names_need_not_be_unique() {
    let hosts = HostIndex::default();
    let index = build_vm_index(
        &[vm("u1", "same", 1, 1, ""), vm("u2", "same", 1, 1, "")],
        &hosts,
    );
    assert_eq!(index.len(), 2);
}

#[test]
fn rebuilding_from_same_inputs_is_identical() {
    let hosts = vec![host("host-1", "esx01"), host("host-2", "esx02")];
    let vms = vec![
        vm("u1", "a", 1024, 1, "host-1"),
        vm("u2", "b", 2048, 2, "host-3"),
    ];

    let h1 = build_host_index(&hosts);
    let h2 = build_host_index(&hosts);
    assert_eq!(h1, h2);

    let v1 = build_vm_index(&vms, &h1);
    let v2 = build_vm_index(&vms, &h2);
    assert_eq!(v1, v2);
    assert_eq!(
        serde_json::to_value(&v1).unwrap(),
        serde_json::to_value(&v2).unwrap()
    );
}
