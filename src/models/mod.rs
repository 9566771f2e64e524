// Inventory domain models

mod host;
mod snapshot;
mod vm;

pub use host::{ConnectionState, HostIndex, HostSnapshot};
pub use snapshot::InventorySnapshot;
pub use vm::{PowerState, VmIndex, VmRecord, VmSnapshot};
