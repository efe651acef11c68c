//! Adventure-mode world snapshot and the compact adventure context strip.
//!
//! Both are read-only reflections of backend data. Each update replaces the
//! previous value wholesale; nothing here merges or diffs.

#[cfg(test)]
#[path = "world_test.rs"]
mod world_test;

/// Maximum health shown on the adventure panel.
pub const MAX_HEALTH: u32 = 100;

/// Label rendered in place of inventory badges when the inventory is empty.
pub const EMPTY_INVENTORY_LABEL: &str = "Empty";

/// Location shown when the backend supplies no name.
pub const UNKNOWN_LOCATION: &str = "Unknown";

/// World snapshot rendered by the adventure panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorldState {
    pub current_location: String,
    pub inventory: Vec<String>,
    /// Always within `0..=MAX_HEALTH`.
    pub health: u32,
    pub level: u32,
}

impl WorldState {
    /// Build a snapshot from raw backend numbers, clamping them into range.
    pub fn new(current_location: String, inventory: Vec<String>, health: i64, level: i64) -> Self {
        Self {
            current_location,
            inventory,
            health: u32::try_from(health.clamp(0, i64::from(MAX_HEALTH))).unwrap_or(0),
            level: u32::try_from(level.max(0)).unwrap_or(u32::MAX),
        }
    }

    /// Health as `"current/100"`.
    pub fn health_label(&self) -> String {
        format!("{}/{MAX_HEALTH}", self.health)
    }

    /// Inventory item names as display labels (`old_key` -> `old key`).
    pub fn inventory_labels(&self) -> Vec<String> {
        self.inventory.iter().map(|item| item.replace('_', " ")).collect()
    }
}

/// Adventure context strip from the `context` block of a chat reply.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdventureContext {
    pub active: bool,
    pub location: Option<String>,
    pub inventory: Vec<String>,
}

impl AdventureContext {
    pub fn location_label(&self) -> &str {
        self.location.as_deref().unwrap_or(UNKNOWN_LOCATION)
    }

    /// Item count as `"{n} items"`.
    pub fn item_count_label(&self) -> String {
        format!("{} items", self.inventory.len())
    }

    /// Comma-separated items, or `"None"` when empty.
    pub fn items_label(&self) -> String {
        if self.inventory.is_empty() {
            "None".to_owned()
        } else {
            self.inventory.join(", ")
        }
    }

    /// Sidebar status line.
    pub fn status_label(&self) -> &'static str {
        if self.active { "Adventure Active" } else { "Real World" }
    }

    /// Sidebar location line; outside adventures the companion is "at home".
    pub fn sidebar_location_label(&self) -> &str {
        if self.active { self.location_label() } else { "Cozy Space" }
    }
}
