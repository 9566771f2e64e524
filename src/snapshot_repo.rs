// Offline inventory source backed by a JSON snapshot file

use crate::collector::InventorySource;
use crate::error::InventoryError;
use crate::models::{HostSnapshot, InventorySnapshot, VmSnapshot};
use tracing::instrument;

pub struct SnapshotRepo {
    path: String,
    snapshot: InventorySnapshot,
}

impl SnapshotRepo {
    #[instrument(fields(repo = "snapshot", operation = "open"))]
    pub async fn open(path: &str) -> Result<Self, InventoryError> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| InventoryError::SnapshotIo {
                path: path.to_string(),
                source,
            })?;
        let snapshot = Self::parse(path, &raw)?;
        Ok(Self {
            path: path.to_string(),
            snapshot,
        })
    }

    /// Parse snapshot JSON; `path` only labels errors. Host ids must be
    /// non-empty, otherwise unplaced VMs (empty host reference) would resolve
    /// to that host.
    pub fn parse(path: &str, raw: &str) -> Result<InventorySnapshot, InventoryError> {
        let parse_error = |source: serde_json::Error| InventoryError::SnapshotParse {
            path: path.to_string(),
            source,
        };
        let snapshot: InventorySnapshot = serde_json::from_str(raw).map_err(parse_error)?;
        if let Some(pos) = snapshot.hosts.iter().position(|h| h.id.trim().is_empty()) {
            return Err(parse_error(serde::de::Error::custom(format!(
                "hosts[{}] has an empty id",
                pos
            ))));
        }
        Ok(snapshot)
    }
}

impl InventorySource for SnapshotRepo {
    fn describe(&self) -> String {
        self.path.clone()
    }

    async fn fetch_hosts(&self) -> Result<Vec<HostSnapshot>, InventoryError> {
        Ok(self.snapshot.hosts.clone())
    }

    async fn fetch_vms(&self) -> Result<Vec<VmSnapshot>, InventoryError> {
        Ok(self.snapshot.vms.clone())
    }
}
