//! The belt network: cell index, segment arena, and topology maintenance.
//!
//! Placement and removal are the only topology mutations. Each one
//! recomputes the shape of the touched cell and its four neighbors, so the
//! network is always consistent with the connectivity rules after a single
//! edit, never in between. Segments carry a monotone `placed_seq`; the
//! transport phase walks segments in ascending sequence, which makes tick
//! order deterministic and independent of map iteration order.

use crate::grid::{Direction, GridCell, Orientation};
use crate::id::SegmentId;
use crate::segment::{self, ConnectivityMask, SegmentKind, Shape};
use serde::{Deserialize, Serialize};
use slotmap::SlotMap;
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Segment
// ---------------------------------------------------------------------------

/// A placed segment. Shape and orientation are derived for belts and fixed
/// at placement for every other kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub cell: GridCell,
    pub kind: SegmentKind,
    pub shape: Shape,
    pub orientation: Orientation,
    /// Monotone placement sequence number. Survives shape recomputation;
    /// a segment only gets a new one by being removed and placed again.
    pub placed_seq: u64,
}

impl Segment {
    /// The cell this segment sends items toward.
    pub fn output_cell(&self) -> GridCell {
        self.cell.neighbor(self.orientation.facing())
    }
}

// ---------------------------------------------------------------------------
// Mutation results
// ---------------------------------------------------------------------------

/// A neighbor whose derived shape changed during an edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reshaped {
    pub id: SegmentId,
    pub cell: GridCell,
    pub shape: Shape,
    pub orientation: Orientation,
}

/// Outcome of [`BeltNetwork::place`].
#[derive(Debug)]
pub struct PlaceResult {
    pub id: SegmentId,
    /// The segment this placement displaced, if the cell was occupied.
    /// The caller is responsible for any item the old occupant carried.
    pub replaced: Option<(SegmentId, Segment)>,
    pub reshaped: Vec<Reshaped>,
}

/// Outcome of [`BeltNetwork::remove`].
#[derive(Debug)]
pub struct RemoveResult {
    pub id: SegmentId,
    pub segment: Segment,
    pub reshaped: Vec<Reshaped>,
}

// ---------------------------------------------------------------------------
// BeltNetwork
// ---------------------------------------------------------------------------

/// Grid-indexed segment storage.
#[derive(Debug, Default, Clone)]
pub struct BeltNetwork {
    segments: SlotMap<SegmentId, Segment>,
    cells: BTreeMap<GridCell, SegmentId>,
    order: BTreeMap<u64, SegmentId>,
    next_seq: u64,
}

impl BeltNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The segment occupying a cell, if any.
    pub fn get(&self, cell: GridCell) -> Option<SegmentId> {
        self.cells.get(&cell).copied()
    }

    pub fn segment(&self, id: SegmentId) -> Option<&Segment> {
        self.segments.get(id)
    }

    /// Neighboring segment ids in connectivity order [+z, +x, -z, -x].
    pub fn neighbors(&self, cell: GridCell) -> [Option<SegmentId>; 4] {
        Direction::all().map(|dir| self.get(cell.neighbor(dir)))
    }

    /// Neighbor-occupancy mask for a cell. Every segment kind counts as a
    /// connection; only how the *center* reacts differs by kind.
    pub fn connectivity(&self, cell: GridCell) -> ConnectivityMask {
        ConnectivityMask::from_flags(
            Direction::all().map(|dir| self.cells.contains_key(&cell.neighbor(dir))),
        )
    }

    /// Segments in ascending placement order. This is the tick order.
    pub fn iter_ordered(&self) -> impl Iterator<Item = (SegmentId, &Segment)> {
        self.order
            .values()
            .filter_map(|&id| self.segments.get(id).map(|seg| (id, seg)))
    }

    /// Place a segment, displacing any existing occupant, and rebuild the
    /// derived shapes of the cell and its neighbors.
    pub fn place(&mut self, cell: GridCell, kind: SegmentKind, orientation: Orientation) -> PlaceResult {
        let replaced = self.detach(cell);
        let seq = self.next_seq;
        self.next_seq += 1;
        let id = self.segments.insert(Segment {
            cell,
            kind,
            shape: Shape::Straight,
            orientation,
            placed_seq: seq,
        });
        self.cells.insert(cell, id);
        self.order.insert(seq, id);

        self.recompute(cell);
        let reshaped = self.recompute_neighbors(cell);
        PlaceResult { id, replaced, reshaped }
    }

    /// Remove the segment at a cell and rebuild its neighbors' shapes.
    pub fn remove(&mut self, cell: GridCell) -> Option<RemoveResult> {
        let (id, segment) = self.detach(cell)?;
        let reshaped = self.recompute_neighbors(cell);
        Some(RemoveResult { id, segment, reshaped })
    }

    /// Re-derive the shape of the segment at `cell`. Returns the new values
    /// only when they differ from what was stored. Idempotent.
    pub fn recompute(&mut self, cell: GridCell) -> Option<Reshaped> {
        let id = self.get(cell)?;
        let mask = self.connectivity(cell);
        let seg = self.segments.get_mut(id)?;
        if !seg.kind.is_belt() {
            return None;
        }
        let (shape, orientation) = if mask == ConnectivityMask::EMPTY {
            // An isolated belt keeps the heading it was placed with.
            (Shape::Straight, seg.orientation)
        } else {
            segment::resolve(mask)
        };
        if shape == seg.shape && orientation == seg.orientation {
            return None;
        }
        seg.shape = shape;
        seg.orientation = orientation;
        Some(Reshaped {
            id,
            cell,
            shape,
            orientation,
        })
    }

    fn recompute_neighbors(&mut self, cell: GridCell) -> Vec<Reshaped> {
        let mut reshaped = Vec::new();
        for dir in Direction::all() {
            if let Some(change) = self.recompute(cell.neighbor(dir)) {
                reshaped.push(change);
            }
        }
        reshaped
    }

    /// Unlink a cell's occupant without touching neighbors.
    fn detach(&mut self, cell: GridCell) -> Option<(SegmentId, Segment)> {
        let id = self.cells.remove(&cell)?;
        let segment = self.segments.remove(id)?;
        self.order.remove(&segment.placed_seq);
        Some((id, segment))
    }
}

// ===========================================================================
// Tests
// ===========================================================================
