//! Spawner production timers and back-pressure.
//!
//! Spawners run in their own phase before transport, so an item spawned
//! this tick can start moving this tick. Each spawner counts down toward
//! its interval; an expiry with an occupied buffer halts production
//! instead of dropping the spawn. A halted spawner stops its timer and
//! spawns again the moment its buffer frees up.

use crate::event::Event;
use crate::fixedmath::{Fixed64, Seconds};
use crate::grid::GridCell;
use crate::id::SegmentId;
use crate::item::Item;
use crate::segment::{SegmentKind, SpawnerConfig};
use crate::transport::{SlotState, TransportCtx};

/// Per-spawner production state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnerState {
    /// Time until the next spawn attempt. Frozen while halted.
    pub countdown: Seconds,
    /// Set when an expiry found the buffer occupied.
    pub halted: bool,
}

impl SpawnerState {
    pub fn new(config: &SpawnerConfig) -> Self {
        Self {
            countdown: config.interval,
            halted: false,
        }
    }
}

/// Advance one spawner by one tick.
pub fn step(ctx: &mut TransportCtx<'_>, id: SegmentId) {
    let Some(seg) = ctx.network.segment(id) else {
        return;
    };
    let SegmentKind::Spawner(cfg) = &seg.kind else {
        return;
    };
    let cfg = cfg.clone();
    let cell = seg.cell;
    let Some(state) = ctx.spawners.get(id).copied() else {
        return;
    };
    let buffer_empty = ctx.slots.get(id) == Some(&SlotState::Empty);

    if state.halted {
        if buffer_empty {
            ctx.spawners.insert(
                id,
                SpawnerState {
                    countdown: cfg.interval,
                    halted: false,
                },
            );
            ctx.bus.emit(Event::SpawnerResumed {
                id,
                cell,
                tick: ctx.tick,
            });
            spawn(ctx, id, &cfg, cell);
        }
        return;
    }

    let mut countdown = state.countdown - ctx.dt;
    if countdown > Fixed64::ZERO {
        ctx.spawners.insert(
            id,
            SpawnerState {
                countdown,
                halted: false,
            },
        );
        return;
    }
    countdown += cfg.interval;

    if buffer_empty {
        ctx.spawners.insert(
            id,
            SpawnerState {
                countdown,
                halted: false,
            },
        );
        spawn(ctx, id, &cfg, cell);
    } else {
        ctx.spawners.insert(
            id,
            SpawnerState {
                countdown,
                halted: true,
            },
        );
        ctx.bus.emit(Event::SpawnerStalled {
            id,
            cell,
            tick: ctx.tick,
        });
    }
}

fn spawn(ctx: &mut TransportCtx<'_>, id: SegmentId, cfg: &SpawnerConfig, cell: GridCell) {
    let item = ctx.items.insert(Item::new(cfg.item_type));
    ctx.slots.insert(id, SlotState::Occupied { item });
    ctx.bus.emit(Event::ItemSpawned {
        item,
        item_type: cfg.item_type,
        cell,
        tick: ctx.tick,
    });
    ctx.bus.emit(Event::UnitProduced {
        product: cfg.product,
        tick: ctx.tick,
    });
}

// ===========================================================================
// Tests
// ===========================================================================
