//! Item instances in transit.
//!
//! Every item is owned by exactly one segment slot (or a spawner's buffer,
//! which is the same slot mechanism) at any tick boundary. Ownership moves
//! atomically when a transfer completes; an item is never referenced by two
//! slots at once.

use crate::id::ItemTypeId;
use serde::{Deserialize, Serialize};

/// A unit of product in transit on the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub item_type: ItemTypeId,
}

impl Item {
    pub fn new(item_type: ItemTypeId) -> Self {
        Self { item_type }
    }
}
