//! Layout snapshots.
//!
//! A snapshot is the committed layout plus a per-segment occupancy flag,
//! enough to rebuild an equivalent world: in-flight timing detail
//! (transfer progress, conversion timers) intentionally does not survive
//! the round trip. Bytes are `bitcode` through serde, the same codec used
//! for everything else that leaves the process.

use crate::config::ConfigError;
use crate::grid::{GridCell, Orientation};
use crate::id::ItemTypeId;
use crate::segment::{SegmentKind, Shape};
use serde::{Deserialize, Serialize};

pub const SNAPSHOT_VERSION: u16 = 1;

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot version {found} unsupported (expected {SNAPSHOT_VERSION})")]
    VersionMismatch { found: u16 },
    #[error("snapshot codec: {0}")]
    Codec(#[from] bitcode::Error),
    #[error("snapshot layout invalid for this config: {0}")]
    Config(#[from] ConfigError),
}

/// One placed segment, in placement order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotEntry {
    pub cell: GridCell,
    pub kind: SegmentKind,
    pub shape: Shape,
    pub orientation: Orientation,
    /// Item type held by the slot at capture time, any state.
    pub occupant: Option<ItemTypeId>,
}

/// A captured layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    version: u16,
    entries: Vec<SnapshotEntry>,
}

impl LayoutSnapshot {
    pub fn from_entries(entries: Vec<SnapshotEntry>) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            entries,
        }
    }

    pub fn entries(&self) -> &[SnapshotEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn check_version(&self) -> Result<(), SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::VersionMismatch {
                found: self.version,
            });
        }
        Ok(())
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bitcode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: LayoutSnapshot = bitcode::deserialize(bytes)?;
        snapshot.check_version()?;
        Ok(snapshot)
    }
}

// ===========================================================================
// Tests
// ===========================================================================
