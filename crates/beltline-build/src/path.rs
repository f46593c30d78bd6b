//! Drag-path rasterization and ghost classification.
//!
//! A drag between two cells always rasterizes to an L: the dominant axis
//! runs first (ties go to x), then the remaining axis. Classification is
//! preview-only; the authoritative shapes are re-derived from live
//! connectivity when the drag commits, so a committed path can differ
//! from its ghosts where it touches existing segments.

use beltline_core::grid::{Direction, GridCell, Orientation};
use beltline_core::segment::Shape;

/// A preview piece for one cell of a drag path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GhostPiece {
    pub cell: GridCell,
    pub shape: Shape,
    pub orientation: Orientation,
}

/// Rasterize the L-path from `start` to `end`, inclusive. When |dx| >= |dz|
/// the x run comes first. Exactly `manhattan + 1` cells, unit steps, no
/// duplicates.
pub fn rasterize(start: GridCell, end: GridCell) -> Vec<GridCell> {
    let dx = end.x - start.x;
    let dz = end.z - start.z;
    let mut cells = Vec::with_capacity((dx.unsigned_abs() + dz.unsigned_abs() + 1) as usize);
    let mut cursor = start;
    cells.push(cursor);

    let step_x = |cursor: &mut GridCell, cells: &mut Vec<GridCell>| {
        let sx = dx.signum();
        for _ in 0..dx.unsigned_abs() {
            cursor.x += sx;
            cells.push(*cursor);
        }
    };
    let step_z = |cursor: &mut GridCell, cells: &mut Vec<GridCell>| {
        let sz = dz.signum();
        for _ in 0..dz.unsigned_abs() {
            cursor.z += sz;
            cells.push(*cursor);
        }
    };

    if dx.unsigned_abs() >= dz.unsigned_abs() {
        step_x(&mut cursor, &mut cells);
        step_z(&mut cursor, &mut cells);
    } else {
        step_z(&mut cursor, &mut cells);
        step_x(&mut cursor, &mut cells);
    }
    cells
}

/// Classify a rasterized path into ghost pieces. Endpoints are straights
/// aligned with their single step; the elbow (where the step direction
/// turns) becomes a corner.
pub fn classify(path: &[GridCell]) -> Vec<GhostPiece> {
    match path {
        [] => Vec::new(),
        [cell] => vec![GhostPiece {
            cell: *cell,
            shape: Shape::Straight,
            orientation: Orientation::Deg0,
        }],
        _ => path
            .iter()
            .enumerate()
            .map(|(i, &cell)| classify_cell(path, i, cell))
            .collect(),
    }
}

fn classify_cell(path: &[GridCell], i: usize, cell: GridCell) -> GhostPiece {
    let incoming = (i > 0).then(|| step_direction(path[i - 1], cell));
    let outgoing = (i + 1 < path.len()).then(|| step_direction(cell, path[i + 1]));
    let (shape, orientation) = match (incoming, outgoing) {
        (Some(inc), Some(out)) if inc != out => (Shape::Corner, corner_orientation(inc, out)),
        (Some(dir), _) | (_, Some(dir)) => (Shape::Straight, Orientation::from_direction(dir)),
        (None, None) => (Shape::Straight, Orientation::Deg0),
    };
    GhostPiece {
        cell,
        shape,
        orientation,
    }
}

/// Step direction between consecutive path cells. The rasterizer only
/// produces unit steps.
fn step_direction(from: GridCell, to: GridCell) -> Direction {
    Direction::between(from, to).unwrap_or(Direction::Forward)
}

/// Corner rotation for a turn from `incoming` to `outgoing`.
fn corner_orientation(incoming: Direction, outgoing: Direction) -> Orientation {
    use Direction::{Back, Forward, Left, Right};
    match (incoming, outgoing) {
        (Forward, Right) | (Left, Back) => Orientation::Deg0,
        (Right, Back) | (Forward, Left) => Orientation::Deg90,
        (Back, Left) | (Right, Forward) => Orientation::Deg180,
        (Left, Forward) | (Back, Right) => Orientation::Deg270,
        // Same or opposite directions never reach here from an L-path.
        _ => Orientation::Deg0,
    }
}

// ===========================================================================
// Tests
// ===========================================================================
