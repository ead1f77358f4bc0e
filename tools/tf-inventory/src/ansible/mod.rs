mod inventory;

pub use inventory::{AnsibleInventory, HostTemplate, InventoryGroup, InventoryHost};
