// On-disk inventory snapshot (offline source and `snapshot` report format)

use serde::{Deserialize, Serialize};

use super::{HostSnapshot, VmSnapshot};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventorySnapshot {
    #[serde(default)]
    pub hosts: Vec<HostSnapshot>,
    #[serde(default)]
    pub vms: Vec<VmSnapshot>,
}
