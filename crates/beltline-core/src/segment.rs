//! Segment definitions and connectivity-driven shape resolution.
//!
//! A segment's geometric shape is never chosen directly: it is a pure
//! function of which of its four neighbors are occupied. [`resolve`] maps
//! every 4-bit connectivity mask to exactly one (shape, orientation) pair,
//! so re-deriving an unchanged neighborhood is always a no-op.

use crate::config::{ConfigError, SimConfig};
use crate::fixedmath::{Fixed64, Seconds};
use crate::grid::{Direction, Orientation};
use crate::id::{ItemTypeId, ProductType};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Shape
// ---------------------------------------------------------------------------

/// Geometric form of a segment, derived from neighbor connectivity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Shape {
    /// Two openings on one axis (or a stub with 0-1 neighbors).
    #[default]
    Straight,
    /// Two openings on adjacent sides.
    Corner,
    /// Three openings; the orientation points at the closed side.
    Tee,
    /// Four openings.
    Cross,
}

// ---------------------------------------------------------------------------
// Segment kinds
// ---------------------------------------------------------------------------

/// Recipe and ejection settings for a converter segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// Item type accepted for conversion.
    pub input: ItemTypeId,
    /// Item type produced.
    pub output: ItemTypeId,
    /// Product credited to the objective board on completion.
    pub product: ProductType,
    /// Seconds a conversion takes.
    pub conversion_time: Seconds,
    /// Impulse magnitude handed to the removal collaborator on ejection.
    pub eject_impulse: Fixed64,
}

/// Disposal settings for a trash segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrashConfig {
    /// Seconds an item dwells before being detached.
    pub disposal_delay: Seconds,
    /// Impulse magnitude handed to the removal collaborator.
    pub throw_impulse: Fixed64,
}

/// Production settings for a spawner segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnerConfig {
    /// Item type created.
    pub item_type: ItemTypeId,
    /// Product credited to the objective board on each spawn.
    pub product: ProductType,
    /// Seconds between spawn attempts.
    pub interval: Seconds,
}

/// What a placed segment is. Behavior is dispatched over this tag by the
/// transport state machine; there is no per-kind subtype.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SegmentKind {
    /// Plain conveyor; sends toward its facing direction.
    Belt,
    /// Converts matching items per its recipe, ejects the rest.
    Converter(ConverterConfig),
    /// Alternates sends between its facing and opposite neighbors.
    Splitter,
    /// Terminal sink; detaches received items after a delay.
    Trash(TrashConfig),
    /// External item source with a buffer slot and back-pressure halt.
    Spawner(SpawnerConfig),
}

impl SegmentKind {
    /// Whether this kind's shape is re-derived from connectivity.
    /// Only belts morph; the other kinds keep their placed orientation.
    pub fn is_belt(&self) -> bool {
        matches!(self, SegmentKind::Belt)
    }

    /// Validate the kind's configuration against the registry.
    /// Misconfiguration is fatal at edit-submission time; it never
    /// surfaces inside a tick.
    pub fn validate(&self, config: &SimConfig) -> Result<(), ConfigError> {
        match self {
            SegmentKind::Belt | SegmentKind::Splitter => Ok(()),
            SegmentKind::Converter(c) => {
                config.require_item(c.input)?;
                config.require_item(c.output)?;
                config.require_product(c.product)?;
                if c.input == c.output {
                    return Err(ConfigError::IdentityRecipe);
                }
                if c.conversion_time <= Fixed64::ZERO {
                    return Err(ConfigError::NonPositiveDuration {
                        what: "conversion_time",
                    });
                }
                Ok(())
            }
            SegmentKind::Trash(t) => {
                if t.disposal_delay < Fixed64::ZERO {
                    return Err(ConfigError::NonPositiveDuration {
                        what: "disposal_delay",
                    });
                }
                Ok(())
            }
            SegmentKind::Spawner(s) => {
                config.require_item(s.item_type)?;
                config.require_product(s.product)?;
                if s.interval <= Fixed64::ZERO {
                    return Err(ConfigError::NonPositiveDuration { what: "interval" });
                }
                Ok(())
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Connectivity mask
// ---------------------------------------------------------------------------

/// Presence of a neighboring segment in each cardinal direction, packed
/// into the low 4 bits in connectivity order [forward, right, back, left].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ConnectivityMask(u8);

impl ConnectivityMask {
    pub const EMPTY: ConnectivityMask = ConnectivityMask(0);

    /// Build a mask from per-direction presence flags in connectivity order.
    pub fn from_flags(flags: [bool; 4]) -> Self {
        let mut bits = 0u8;
        for (i, &set) in flags.iter().enumerate() {
            if set {
                bits |= 1 << i;
            }
        }
        ConnectivityMask(bits)
    }

    /// Raw bits (low 4 bits only).
    pub fn bits(&self) -> u8 {
        self.0
    }

    /// Mask from raw bits; high bits are discarded.
    pub fn from_bits(bits: u8) -> Self {
        ConnectivityMask(bits & 0b1111)
    }

    /// Whether the neighbor in `dir` is present.
    pub fn has(&self, dir: Direction) -> bool {
        self.0 & (1 << dir.index()) != 0
    }

    /// Number of occupied neighbor directions.
    pub fn count(&self) -> u32 {
        self.0.count_ones()
    }

    /// Whether the two set bits form an opposite pair (requires count == 2).
    fn is_opposite_pair(&self) -> bool {
        (self.has(Direction::Forward) && self.has(Direction::Back))
            || (self.has(Direction::Right) && self.has(Direction::Left))
    }
}

// ---------------------------------------------------------------------------
// Resolver
// ---------------------------------------------------------------------------

/// Derive the shape and orientation for a cell from its connectivity mask.
///
/// Pure and total over all 16 masks; resolving twice yields the same pair.
pub fn resolve(mask: ConnectivityMask) -> (Shape, Orientation) {
    match mask.count() {
        0 | 1 => (Shape::Straight, straight_orientation(mask)),
        2 if mask.is_opposite_pair() => (Shape::Straight, straight_orientation(mask)),
        2 => (Shape::Corner, corner_orientation(mask)),
        3 => (Shape::Tee, tee_orientation(mask)),
        _ => (Shape::Cross, Orientation::Deg0),
    }
}

/// Straight pieces align to the forward/back axis when any neighbor sits
/// on it (or none at all), and to the right/left axis otherwise.
fn straight_orientation(mask: ConnectivityMask) -> Orientation {
    if mask.has(Direction::Forward) || mask.has(Direction::Back) {
        Orientation::Deg0
    } else if mask.has(Direction::Right) || mask.has(Direction::Left) {
        Orientation::Deg90
    } else {
        Orientation::Deg0
    }
}

fn corner_orientation(mask: ConnectivityMask) -> Orientation {
    if mask.has(Direction::Forward) && mask.has(Direction::Right) {
        Orientation::Deg0
    } else if mask.has(Direction::Right) && mask.has(Direction::Back) {
        Orientation::Deg90
    } else if mask.has(Direction::Back) && mask.has(Direction::Left) {
        Orientation::Deg180
    } else {
        // left + forward
        Orientation::Deg270
    }
}

/// A tee's orientation is keyed to its single absent direction.
fn tee_orientation(mask: ConnectivityMask) -> Orientation {
    if !mask.has(Direction::Forward) {
        Orientation::Deg0
    } else if !mask.has(Direction::Right) {
        Orientation::Deg90
    } else if !mask.has(Direction::Back) {
        Orientation::Deg180
    } else {
        Orientation::Deg270
    }
}

// ===========================================================================
// Tests
// ===========================================================================
