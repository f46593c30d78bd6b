//! JSON save/load of committed layouts.
//!
//! Uses the core snapshot form so a saved file and a binary snapshot
//! describe the same thing. JSON here is for hand-editable level files;
//! runtime state transfer stays on the `bitcode` path.

use beltline_core::engine::Engine;
use beltline_core::snapshot::{LayoutSnapshot, SnapshotError};
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum LayoutIoError {
    #[error("layout io: {0}")]
    Io(#[from] std::io::Error),
    #[error("layout json: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

/// Serialize a snapshot as pretty JSON.
pub fn to_json(snapshot: &LayoutSnapshot) -> Result<String, LayoutIoError> {
    Ok(serde_json::to_string_pretty(snapshot)?)
}

/// Parse a snapshot from JSON and check its version.
pub fn from_json(json: &str) -> Result<LayoutSnapshot, LayoutIoError> {
    let snapshot: LayoutSnapshot = serde_json::from_str(json)?;
    snapshot.check_version()?;
    Ok(snapshot)
}

/// Write the engine's current layout to a JSON file.
pub fn save(engine: &Engine, path: &Path) -> Result<(), LayoutIoError> {
    let json = to_json(&engine.snapshot())?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Load a JSON layout file into the engine, replacing its world.
pub fn load(engine: &mut Engine, path: &Path) -> Result<(), LayoutIoError> {
    let json = std::fs::read_to_string(path)?;
    let snapshot = from_json(&json)?;
    engine.restore(&snapshot)?;
    Ok(())
}

// ===========================================================================
// Tests
// ===========================================================================
