//! Queued topology edits.
//!
//! Build tools never touch the network directly. They submit commands
//! here, and the engine drains the queue at the top of each tick, before
//! spawn and transport run. Placements are validated against the config
//! at submission time, so by the time a command executes it cannot fail.

use crate::config::{ConfigError, SimConfig};
use crate::grid::{GridCell, Orientation};
use crate::segment::SegmentKind;
use std::collections::VecDeque;

/// A topology mutation to apply at the next tick boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum EditCommand {
    Place {
        cell: GridCell,
        kind: SegmentKind,
        orientation: Orientation,
    },
    Remove {
        cell: GridCell,
    },
}

/// FIFO of pending edits.
#[derive(Debug, Default)]
pub struct EditQueue {
    pending: VecDeque<EditCommand>,
}

impl EditQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Queue a placement. Rejects misconfigured kinds up front.
    pub fn submit_place(
        &mut self,
        config: &SimConfig,
        cell: GridCell,
        kind: SegmentKind,
        orientation: Orientation,
    ) -> Result<(), ConfigError> {
        kind.validate(config)?;
        self.pending.push_back(EditCommand::Place {
            cell,
            kind,
            orientation,
        });
        Ok(())
    }

    /// Queue a removal. Removing an empty cell is a no-op at execution.
    pub fn submit_remove(&mut self, cell: GridCell) {
        self.pending.push_back(EditCommand::Remove { cell });
    }

    /// Take every pending command, in submission order.
    pub fn take(&mut self) -> Vec<EditCommand> {
        self.pending.drain(..).collect()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
