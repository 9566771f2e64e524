// Rendering of a collected inventory (text table, JSON, raw snapshot)

use crate::collector::Inventory;
use crate::config::{OutputFormat, ReportConfig, SortKey};
use crate::models::{ConnectionState, VmRecord};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HostEntry {
    pub id: String,
    pub name: String,
    pub connection_state: ConnectionState,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryReport {
    pub generated_at: String,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hosts: Option<Vec<HostEntry>>,
    pub vms: Vec<VmRecord>,
}

impl InventoryReport {
    pub fn new(inventory: &Inventory, config: &ReportConfig, generated_at: String) -> Self {
        let hosts = config.include_hosts.then(|| sorted_hosts(inventory));
        Self {
            generated_at,
            source: inventory.source.clone(),
            hosts,
            vms: sorted_vms(inventory, config.sort_by),
        }
    }
}

/// Hosts by name, then id; one entry per indexed id.
pub fn sorted_hosts(inventory: &Inventory) -> Vec<HostEntry> {
    let mut hosts: Vec<HostEntry> = inventory
        .host_index
        .iter()
        .map(|(id, name)| HostEntry {
            id: id.to_string(),
            name: name.to_string(),
            connection_state: inventory
                .hosts
                .iter()
                .rev()
                .find(|h| h.id == id)
                .map(|h| h.connection_state)
                .unwrap_or_default(),
        })
        .collect();
    hosts.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
    hosts
}

/// VM records in a deterministic order; every key falls back to the unique id.
pub fn sorted_vms(inventory: &Inventory, key: SortKey) -> Vec<VmRecord> {
    let mut vms: Vec<VmRecord> = inventory.vm_index.values().cloned().collect();
    match key {
        SortKey::Name => vms.sort_by(|a, b| {
            a.name
                .cmp(&b.name)
                .then_with(|| a.unique_id.cmp(&b.unique_id))
        }),
        SortKey::Uuid => vms.sort_by(|a, b| a.unique_id.cmp(&b.unique_id)),
        SortKey::Host => vms.sort_by(|a, b| {
            a.resolved_host_name
                .cmp(&b.resolved_host_name)
                .then_with(|| a.name.cmp(&b.name))
                .then_with(|| a.unique_id.cmp(&b.unique_id))
        }),
    }
    vms
}

/// Render the whole report to a string; nothing is written until this succeeds.
pub fn render(inventory: &Inventory, config: &ReportConfig) -> anyhow::Result<String> {
    let generated_at = chrono::Local::now().to_rfc3339();
    match config.format {
        OutputFormat::Json => {
            let report = InventoryReport::new(inventory, config, generated_at);
            Ok(serde_json::to_string_pretty(&report)? + "\n")
        }
        OutputFormat::Snapshot => Ok(serde_json::to_string_pretty(&inventory.to_snapshot())? + "\n"),
        OutputFormat::Text => Ok(render_text(&InventoryReport::new(inventory, config, generated_at))),
    }
}

const VM_HEADER: [&str; 8] = [
    "NAME",
    "UUID",
    "CPU",
    "MEMORY_MB",
    "POWER",
    "HOST",
    "GUEST",
    "ANNOTATION",
];

pub fn render_text(report: &InventoryReport) -> String {
    let mut out = String::new();

    if let Some(hosts) = &report.hosts {
        out.push_str(&format!("Hosts ({}):\n", hosts.len()));
        let rows: Vec<Vec<String>> = hosts
            .iter()
            .map(|h| {
                vec![
                    h.id.clone(),
                    h.name.clone(),
                    h.connection_state.as_str().to_string(),
                ]
            })
            .collect();
        push_table(&mut out, &["ID", "NAME", "STATE"], &rows);
        out.push('\n');
    }

    out.push_str(&format!("Virtual machines ({}):\n", report.vms.len()));
    let rows: Vec<Vec<String>> = report.vms.iter().map(vm_row).collect();
    push_table(&mut out, &VM_HEADER, &rows);
    out
}

fn or_dash(s: &str) -> String {
    if s.is_empty() { "-".into() } else { s.to_string() }
}

fn vm_row(vm: &VmRecord) -> Vec<String> {
    let guest = vm
        .guest_full_name
        .as_deref()
        .or(vm.guest_id.as_deref())
        .unwrap_or_default();
    // Keep multi-line annotations on one row.
    let annotation = vm.annotation.split_whitespace().collect::<Vec<_>>().join(" ");
    vec![
        or_dash(&vm.name),
        vm.unique_id.clone(),
        vm.num_cpu.to_string(),
        vm.memory_mb.to_string(),
        vm.power_state.to_string(),
        or_dash(&vm.resolved_host_name),
        or_dash(guest),
        annotation,
    ]
}

/// Left-aligned columns separated by two spaces; trailing padding trimmed.
fn push_table(out: &mut String, header: &[&str], rows: &[Vec<String>]) {
    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }
    let mut push_row = |cells: Vec<&str>| {
        let mut line = String::new();
        for (i, (cell, w)) in cells.iter().zip(&widths).enumerate() {
            if i > 0 {
                line.push_str("  ");
            }
            line.push_str(cell);
            line.extend(std::iter::repeat_n(' ', w.saturating_sub(cell.chars().count())));
        }
        out.push_str("  ");
        out.push_str(line.trim_end());
        out.push('\n');
    };
    push_row(header.to_vec());
    for row in rows {
        push_row(row.iter().map(String::as_str).collect());
    }
}
