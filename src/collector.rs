// One report cycle: fetch hosts, fetch VMs, cross-reference them.

use crate::config::{AppConfig, SourceKind};
use crate::error::InventoryError;
use crate::inventory::{build_host_index, build_vm_index};
use crate::models::{HostIndex, HostSnapshot, InventorySnapshot, VmIndex, VmSnapshot};
use crate::snapshot_repo::SnapshotRepo;
use crate::vsphere_repo::VsphereRepo;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// Upper bound on session release, independent of the report deadline.
const LOGOUT_TIMEOUT: Duration = Duration::from_secs(5);

/// Anything that can hand out host and VM snapshots for one cycle.
#[allow(async_fn_in_trait)]
pub trait InventorySource {
    /// Short human-readable origin (endpoint host or file path).
    fn describe(&self) -> String;

    async fn fetch_hosts(&self) -> Result<Vec<HostSnapshot>, InventoryError>;

    async fn fetch_vms(&self) -> Result<Vec<VmSnapshot>, InventoryError>;
}

/// Result of a cycle: the raw snapshots plus both indices built from them.
#[derive(Debug, Clone)]
pub struct Inventory {
    pub source: String,
    pub hosts: Vec<HostSnapshot>,
    pub vms: Vec<VmSnapshot>,
    pub host_index: HostIndex,
    pub vm_index: VmIndex,
}

impl Inventory {
    pub fn from_snapshots(source: String, hosts: Vec<HostSnapshot>, vms: Vec<VmSnapshot>) -> Self {
        let host_index = build_host_index(&hosts);
        let vm_index = build_vm_index(&vms, &host_index);
        Self {
            source,
            hosts,
            vms,
            host_index,
            vm_index,
        }
    }

    /// VMs whose host reference did not resolve.
    pub fn unresolved_count(&self) -> usize {
        self.vm_index
            .values()
            .filter(|vm| vm.resolved_host_name.is_empty())
            .count()
    }

    pub fn to_snapshot(&self) -> InventorySnapshot {
        InventorySnapshot {
            hosts: self.hosts.clone(),
            vms: self.vms.clone(),
        }
    }
}

/// Hosts first, then VMs; any error aborts the cycle without a partial result.
pub async fn collect<S: InventorySource>(source: &S) -> Result<Inventory, InventoryError> {
    let origin = source.describe();
    let hosts = source.fetch_hosts().await?;
    debug!(source = %origin, hosts = hosts.len(), "hosts retrieved");
    let vms = source.fetch_vms().await?;
    debug!(source = %origin, vms = vms.len(), "VMs retrieved");

    let inventory = Inventory::from_snapshots(origin, hosts, vms);
    info!(
        source = %inventory.source,
        hosts = inventory.host_index.len(),
        vms = inventory.vm_index.len(),
        unresolved = inventory.unresolved_count(),
        "inventory collected"
    );
    Ok(inventory)
}

/// Run one full cycle for the configured source under the report deadline.
/// An endpoint session is released before returning, whether retrieval
/// succeeded, failed or ran out of time.
pub async fn run(config: &AppConfig) -> anyhow::Result<Inventory> {
    let budget = Duration::from_secs(config.report.timeout_secs);
    let deadline = Instant::now() + budget;
    match config.source()? {
        SourceKind::Snapshot(path) => {
            let repo = within(deadline, budget, SnapshotRepo::open(&path)).await?;
            Ok(within(deadline, budget, collect(&repo)).await?)
        }
        SourceKind::Endpoint(url) => {
            let repo = within(
                deadline,
                budget,
                VsphereRepo::connect(&url, &config.endpoint, &config.scope),
            )
            .await?;
            let result = within(deadline, budget, collect(&repo)).await;
            if tokio::time::timeout(LOGOUT_TIMEOUT, repo.logout())
                .await
                .is_err()
            {
                warn!(timeout = ?LOGOUT_TIMEOUT, "logout did not complete");
            }
            Ok(result?)
        }
    }
}

/// Await `fut` until `deadline`; running out of time is reported against `budget`.
async fn within<T>(
    deadline: Instant,
    budget: Duration,
    fut: impl Future<Output = Result<T, InventoryError>>,
) -> Result<T, InventoryError> {
    tokio::time::timeout_at(deadline, fut)
        .await
        .unwrap_or(Err(InventoryError::Timeout(budget)))
}
