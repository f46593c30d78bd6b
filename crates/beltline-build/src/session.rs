//! Build session state machine.
//!
//! Translates tool-level input into queued engine edits. The session owns
//! the active drag and its ghost previews; previews never reserve slots or
//! touch the network, so cancelling a drag leaves no trace anywhere. A
//! commit queues one placement per path cell and the engine resolves the
//! authoritative shapes against live connectivity at its next tick.

use crate::path::{self, GhostPiece};
use beltline_core::config::ConfigError;
use beltline_core::engine::Engine;
use beltline_core::grid::{GridCell, Orientation};
use beltline_core::segment::SegmentKind;

// ---------------------------------------------------------------------------
// DragSession
// ---------------------------------------------------------------------------

/// An in-progress belt drag with its ghost previews.
#[derive(Debug, Clone)]
pub struct DragSession {
    start: GridCell,
    end: GridCell,
    path: Vec<GridCell>,
    ghosts: Vec<GhostPiece>,
}

impl DragSession {
    pub fn begin(start: GridCell) -> Self {
        let path = vec![start];
        let ghosts = path::classify(&path);
        Self {
            start,
            end: start,
            path,
            ghosts,
        }
    }

    /// Extend the drag to a new endpoint. Ghosts are recomputed only when
    /// the path actually changed; returns whether it did.
    pub fn extend(&mut self, end: GridCell) -> bool {
        if end == self.end {
            return false;
        }
        self.end = end;
        let path = path::rasterize(self.start, end);
        if path == self.path {
            return false;
        }
        self.ghosts = path::classify(&path);
        self.path = path;
        true
    }

    pub fn start(&self) -> GridCell {
        self.start
    }

    pub fn end(&self) -> GridCell {
        self.end
    }

    pub fn path(&self) -> &[GridCell] {
        &self.path
    }

    pub fn ghosts(&self) -> &[GhostPiece] {
        &self.ghosts
    }

    /// Queue one belt placement per path cell, carrying each ghost's
    /// orientation as the placement heading. Returns the number queued.
    pub fn commit(self, engine: &mut Engine) -> Result<usize, ConfigError> {
        let count = self.ghosts.len();
        for ghost in self.ghosts {
            engine.queue_place(ghost.cell, SegmentKind::Belt, ghost.orientation)?;
        }
        Ok(count)
    }

    /// Drop the drag. Previews were never visible to the simulation, so
    /// there is nothing to release.
    pub fn cancel(self) {}
}

// ---------------------------------------------------------------------------
// BuildSession
// ---------------------------------------------------------------------------

/// Player-facing build actions.
#[derive(Debug, Clone, PartialEq)]
pub enum BuildAction {
    ToggleBuildMode,
    /// Select the template placed by `PlaceAt`.
    SelectTool(SegmentKind),
    RotatePreview,
    PlaceAt(GridCell),
    DeleteAt(GridCell),
    BeginDrag(GridCell),
    ExtendDrag(GridCell),
    EndDrag,
}

/// Holds the build mode flag, the selected tool, the preview rotation,
/// and the active drag, and routes actions to the engine's edit queue.
#[derive(Debug)]
pub struct BuildSession {
    build_mode: bool,
    tool: SegmentKind,
    preview_orientation: Orientation,
    drag: Option<DragSession>,
}

impl Default for BuildSession {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildSession {
    pub fn new() -> Self {
        Self {
            build_mode: false,
            tool: SegmentKind::Belt,
            preview_orientation: Orientation::Deg0,
            drag: None,
        }
    }

    pub fn is_build_mode(&self) -> bool {
        self.build_mode
    }

    pub fn tool(&self) -> &SegmentKind {
        &self.tool
    }

    pub fn preview_orientation(&self) -> Orientation {
        self.preview_orientation
    }

    pub fn drag(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    /// Apply one action. Outside build mode everything except the mode
    /// toggle is ignored.
    pub fn apply(&mut self, engine: &mut Engine, action: BuildAction) -> Result<(), ConfigError> {
        if !self.build_mode {
            if action == BuildAction::ToggleBuildMode {
                self.build_mode = true;
            }
            return Ok(());
        }
        match action {
            BuildAction::ToggleBuildMode => {
                // Leaving build mode abandons the active drag.
                self.build_mode = false;
                self.drag = None;
            }
            BuildAction::SelectTool(kind) => {
                self.tool = kind;
            }
            BuildAction::RotatePreview => {
                self.preview_orientation = self.preview_orientation.rotate_cw();
            }
            BuildAction::PlaceAt(cell) => {
                engine.queue_place(cell, self.tool.clone(), self.preview_orientation)?;
            }
            BuildAction::DeleteAt(cell) => {
                engine.queue_remove(cell);
            }
            BuildAction::BeginDrag(cell) => {
                self.drag = Some(DragSession::begin(cell));
            }
            BuildAction::ExtendDrag(cell) => {
                if let Some(drag) = self.drag.as_mut() {
                    drag.extend(cell);
                }
            }
            BuildAction::EndDrag => {
                if let Some(drag) = self.drag.take() {
                    drag.commit(engine)?;
                }
            }
        }
        Ok(())
    }
}

// ===========================================================================
// Tests
// ===========================================================================
