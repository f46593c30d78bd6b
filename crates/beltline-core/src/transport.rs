//! Per-segment transport state machine.
//!
//! Every segment owns exactly one slot. The slot either holds nothing, a
//! reservation written by an upstream sender, or one item in some stage of
//! handling. Reservations are the only mutual exclusion in the system:
//! they are written synchronously at decision time, so two senders stepped
//! in the same tick can never target the same empty slot. Items move by
//! ownership transfer at transfer completion and are never referenced by
//! two slots at once.
//!
//! Transport never fails a tick. The two abnormal conditions (a transfer
//! target that vanished, a reservation that no longer names the sender)
//! self-heal by snapping the item back to its owner; they are counted in
//! [`TransportStats`] and surfaced as `TransferAborted` events.

use crate::config::SimConfig;
use crate::event::{Event, EventBus};
use crate::fixedmath::{f64_to_fixed64, Fixed64, Seconds, Ticks};
use crate::grid::GridCell;
use crate::id::{ItemId, SegmentId};
use crate::item::Item;
use crate::network::{BeltNetwork, Segment};
use crate::segment::SegmentKind;
use crate::spawner::SpawnerState;
use slotmap::{SecondaryMap, SlotMap};

/// Completion threshold slack. A transfer completes when its progress is
/// within this distance of a full cell.
pub fn transfer_epsilon() -> Fixed64 {
    f64_to_fixed64(0.01)
}

// ---------------------------------------------------------------------------
// Slot state
// ---------------------------------------------------------------------------

/// What a segment's slot is doing this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlotState {
    /// Nothing held, nothing promised.
    Empty,
    /// An upstream sender has claimed this slot for an in-flight item.
    Reserved { by: SegmentId },
    /// One item at rest, eligible for kind-specific handling.
    Occupied { item: ItemId },
    /// Item in flight toward `to`; progress runs 0 to 1 cell.
    Transferring {
        item: ItemId,
        to: GridCell,
        progress: Fixed64,
    },
    /// Converter working on a matching input.
    Converting { item: ItemId, remaining: Seconds },
    /// Trash holding an item until its disposal delay expires.
    Disposing { item: ItemId, remaining: Seconds },
}

impl SlotState {
    /// The item this slot owns, in any state.
    pub fn item(&self) -> Option<ItemId> {
        match self {
            SlotState::Empty | SlotState::Reserved { .. } => None,
            SlotState::Occupied { item }
            | SlotState::Transferring { item, .. }
            | SlotState::Converting { item, .. }
            | SlotState::Disposing { item, .. } => Some(*item),
        }
    }
}

/// Splitter alternation. `prefer_primary` selects the facing direction;
/// a flip is armed when a preferred send starts and lands when it
/// completes, so an aborted send never advances the alternation.
#[derive(Debug, Clone, Copy)]
pub struct SplitterState {
    pub prefer_primary: bool,
    pub flip_pending: bool,
}

impl Default for SplitterState {
    fn default() -> Self {
        Self {
            prefer_primary: true,
            flip_pending: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Errors and counters
// ---------------------------------------------------------------------------

/// Abnormal transport conditions. Self-healing; never propagated out of
/// a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// A transfer's target cell no longer holds a receiving segment.
    #[error("transfer target segment is gone")]
    InvalidTopology,
    /// A transfer's reservation no longer names the sender.
    #[error("reservation lost to another sender")]
    ReservationConflict,
}

/// Running counters for the abnormal and blocked paths.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TransportStats {
    pub blocked_sends: u64,
    pub aborted_transfers: u64,
    pub reservation_conflicts: u64,
}

// ---------------------------------------------------------------------------
// Step context
// ---------------------------------------------------------------------------

/// Borrowed world state for one transport phase. Topology is frozen while
/// transport runs; only slots, items, and alternation state mutate.
pub struct TransportCtx<'a> {
    pub network: &'a BeltNetwork,
    pub config: &'a SimConfig,
    pub slots: &'a mut SecondaryMap<SegmentId, SlotState>,
    pub splitters: &'a mut SecondaryMap<SegmentId, SplitterState>,
    pub spawners: &'a mut SecondaryMap<SegmentId, SpawnerState>,
    pub items: &'a mut SlotMap<ItemId, Item>,
    pub bus: &'a mut EventBus,
    pub stats: &'a mut TransportStats,
    pub tick: Ticks,
    pub dt: Seconds,
}

/// Advance one segment's slot by one tick. Called in ascending placement
/// order by the engine.
pub fn step(ctx: &mut TransportCtx<'_>, id: SegmentId) {
    let Some(seg) = ctx.network.segment(id) else {
        return;
    };
    let Some(state) = ctx.slots.get(id).copied() else {
        return;
    };
    match state {
        SlotState::Empty | SlotState::Reserved { .. } => {}
        SlotState::Occupied { item } => step_occupied(ctx, id, seg, item),
        SlotState::Transferring { item, to, progress } => {
            advance_transfer(ctx, id, seg, item, to, progress)
        }
        SlotState::Converting { item, remaining } => {
            advance_conversion(ctx, id, seg, item, remaining - ctx.dt)
        }
        SlotState::Disposing { item, remaining } => {
            advance_disposal(ctx, id, seg, item, remaining - ctx.dt)
        }
    }
}

// ---------------------------------------------------------------------------
// Occupied: kind-specific handling
// ---------------------------------------------------------------------------

fn step_occupied(ctx: &mut TransportCtx<'_>, id: SegmentId, seg: &Segment, item: ItemId) {
    match &seg.kind {
        SegmentKind::Belt | SegmentKind::Spawner(_) => {
            if !try_send(ctx, id, seg, item, seg.output_cell()) {
                ctx.stats.blocked_sends += 1;
            }
        }
        SegmentKind::Splitter => step_splitter(ctx, id, seg, item),
        SegmentKind::Converter(c) => {
            let c = c.clone();
            let Some(held) = ctx.items.get(item).copied() else {
                ctx.slots.insert(id, SlotState::Empty);
                return;
            };
            if held.item_type == c.input {
                // Timed states begin advancing the tick they are entered,
                // matching transfer starts.
                advance_conversion(ctx, id, seg, item, c.conversion_time - ctx.dt);
            } else if held.item_type == c.output {
                if !try_send(ctx, id, seg, item, seg.output_cell()) {
                    ctx.stats.blocked_sends += 1;
                }
            } else {
                eject(ctx, id, seg, item, c.eject_impulse);
            }
        }
        SegmentKind::Trash(t) => {
            let remaining = t.disposal_delay - ctx.dt;
            advance_disposal(ctx, id, seg, item, remaining);
        }
    }
}

fn step_splitter(ctx: &mut TransportCtx<'_>, id: SegmentId, seg: &Segment, item: ItemId) {
    let prefer_primary = ctx
        .splitters
        .get(id)
        .map(|s| s.prefer_primary)
        .unwrap_or(true);
    let primary = seg.output_cell();
    let secondary = seg.cell.neighbor(seg.orientation.facing().opposite());
    let (preferred, fallback) = if prefer_primary {
        (primary, secondary)
    } else {
        (secondary, primary)
    };

    if try_send(ctx, id, seg, item, preferred) {
        if let Some(s) = ctx.splitters.get_mut(id) {
            s.flip_pending = true;
        }
    } else if try_send(ctx, id, seg, item, fallback) {
        // Fallback sends never advance the alternation.
    } else {
        ctx.stats.blocked_sends += 1;
    }
}

// ---------------------------------------------------------------------------
// Sending and transfers
// ---------------------------------------------------------------------------

/// Whether a segment kind receives items from neighbors. Spawners are pure
/// sources; their slot is their own output buffer.
fn accepts_input(kind: &SegmentKind) -> bool {
    !matches!(kind, SegmentKind::Spawner(_))
}

/// Attempt to begin a transfer toward `to`. On success the downstream slot
/// is reserved synchronously and the transfer starts advancing this tick.
fn try_send(ctx: &mut TransportCtx<'_>, id: SegmentId, seg: &Segment, item: ItemId, to: GridCell) -> bool {
    let Some(target_id) = ctx.network.get(to) else {
        return false;
    };
    let Some(target) = ctx.network.segment(target_id) else {
        return false;
    };
    if !accepts_input(&target.kind) {
        return false;
    }
    if ctx.slots.get(target_id) != Some(&SlotState::Empty) {
        return false;
    }
    ctx.slots.insert(target_id, SlotState::Reserved { by: id });
    ctx.bus.emit(Event::TransferStarted {
        item,
        from: seg.cell,
        to,
        tick: ctx.tick,
    });
    advance_transfer(ctx, id, seg, item, to, Fixed64::ZERO);
    true
}

/// Check that a transfer's reservation is still in place.
fn validate_target(
    ctx: &TransportCtx<'_>,
    id: SegmentId,
    to: GridCell,
) -> Result<SegmentId, TransportError> {
    let Some(target_id) = ctx.network.get(to) else {
        return Err(TransportError::InvalidTopology);
    };
    match ctx.slots.get(target_id) {
        Some(SlotState::Reserved { by }) if *by == id => Ok(target_id),
        Some(_) => Err(TransportError::ReservationConflict),
        None => Err(TransportError::InvalidTopology),
    }
}

fn advance_transfer(
    ctx: &mut TransportCtx<'_>,
    id: SegmentId,
    seg: &Segment,
    item: ItemId,
    to: GridCell,
    progress: Fixed64,
) {
    let target_id = match validate_target(ctx, id, to) {
        Ok(target_id) => target_id,
        Err(err) => {
            match err {
                TransportError::InvalidTopology => ctx.stats.aborted_transfers += 1,
                TransportError::ReservationConflict => ctx.stats.reservation_conflicts += 1,
            }
            // Snap back. The item stays with its owner; the route is
            // re-resolved from scratch next tick.
            ctx.slots.insert(id, SlotState::Occupied { item });
            if let Some(s) = ctx.splitters.get_mut(id) {
                s.flip_pending = false;
            }
            ctx.bus.emit(Event::TransferAborted {
                item,
                at: seg.cell,
                tick: ctx.tick,
            });
            return;
        }
    };

    let progress = progress + ctx.config.belt_speed * ctx.dt;
    if progress >= Fixed64::ONE - transfer_epsilon() {
        ctx.slots.insert(id, SlotState::Empty);
        ctx.slots.insert(target_id, SlotState::Occupied { item });
        if let Some(s) = ctx.splitters.get_mut(id) {
            if s.flip_pending {
                s.prefer_primary = !s.prefer_primary;
                s.flip_pending = false;
            }
        }
        ctx.bus.emit(Event::TransferCompleted {
            item,
            from: seg.cell,
            to,
            tick: ctx.tick,
        });
    } else {
        ctx.slots.insert(
            id,
            SlotState::Transferring { item, to, progress },
        );
    }
}

// ---------------------------------------------------------------------------
// Timed states
// ---------------------------------------------------------------------------

fn advance_conversion(
    ctx: &mut TransportCtx<'_>,
    id: SegmentId,
    seg: &Segment,
    item: ItemId,
    remaining: Fixed64,
) {
    let SegmentKind::Converter(c) = &seg.kind else {
        return;
    };
    if remaining > Fixed64::ZERO {
        ctx.slots.insert(id, SlotState::Converting { item, remaining });
        return;
    }
    ctx.items.remove(item);
    let output = ctx.items.insert(Item::new(c.output));
    ctx.slots.insert(id, SlotState::Occupied { item: output });
    ctx.bus.emit(Event::UnitProduced {
        product: c.product,
        tick: ctx.tick,
    });
}

fn advance_disposal(
    ctx: &mut TransportCtx<'_>,
    id: SegmentId,
    seg: &Segment,
    item: ItemId,
    remaining: Fixed64,
) {
    let SegmentKind::Trash(t) = &seg.kind else {
        return;
    };
    if remaining > Fixed64::ZERO {
        ctx.slots.insert(id, SlotState::Disposing { item, remaining });
        return;
    }
    if let Some(held) = ctx.items.remove(item) {
        ctx.bus.emit(Event::ItemDisposed {
            item_type: held.item_type,
            cell: seg.cell,
            tick: ctx.tick,
        });
        ctx.bus.emit(Event::DetachItem {
            item_type: held.item_type,
            cell: seg.cell,
            impulse: t.throw_impulse,
            tick: ctx.tick,
        });
    }
    ctx.slots.insert(id, SlotState::Empty);
}

/// Converter rejection path for a non-matching input.
fn eject(ctx: &mut TransportCtx<'_>, id: SegmentId, seg: &Segment, item: ItemId, impulse: Fixed64) {
    if let Some(held) = ctx.items.remove(item) {
        ctx.bus.emit(Event::ItemEjected {
            item_type: held.item_type,
            cell: seg.cell,
            tick: ctx.tick,
        });
        ctx.bus.emit(Event::DetachItem {
            item_type: held.item_type,
            cell: seg.cell,
            impulse,
            tick: ctx.tick,
        });
    }
    ctx.slots.insert(id, SlotState::Empty);
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventKind;
    use crate::grid::Orientation;
    use crate::id::{ItemTypeId, ProductType};
    use crate::segment::{ConverterConfig, TrashConfig};

    struct World {
        network: BeltNetwork,
        config: SimConfig,
        slots: SecondaryMap<SegmentId, SlotState>,
        splitters: SecondaryMap<SegmentId, SplitterState>,
        spawners: SecondaryMap<SegmentId, SpawnerState>,
        items: SlotMap<ItemId, Item>,
        bus: EventBus,
        stats: TransportStats,
        tick: Ticks,
    }

    impl World {
        fn new() -> Self {
            let mut config = SimConfig::new(f64_to_fixed64(2.0), f64_to_fixed64(0.05));
            config.register_item("egg");
            config.register_item("chicken");
            config.register_product("eggs");
            Self {
                network: BeltNetwork::new(),
                config,
                slots: SecondaryMap::new(),
                splitters: SecondaryMap::new(),
                spawners: SecondaryMap::new(),
                items: SlotMap::with_key(),
                bus: EventBus::new(),
                stats: TransportStats::default(),
                tick: 0,
            }
        }

        fn place(&mut self, x: i32, z: i32, kind: SegmentKind, orientation: Orientation) -> SegmentId {
            let id = self.network.place(GridCell::new(x, z), kind, orientation).id;
            self.slots.insert(id, SlotState::Empty);
            if self
                .network
                .segment(id)
                .is_some_and(|s| matches!(s.kind, SegmentKind::Splitter))
            {
                self.splitters.insert(id, SplitterState::default());
            }
            id
        }

        fn load(&mut self, id: SegmentId, item_type: ItemTypeId) -> ItemId {
            let item = self.items.insert(Item::new(item_type));
            self.slots.insert(id, SlotState::Occupied { item });
            item
        }

        fn tick_all(&mut self) {
            let order: Vec<SegmentId> = self.network.iter_ordered().map(|(id, _)| id).collect();
            let mut ctx = TransportCtx {
                network: &self.network,
                config: &self.config,
                slots: &mut self.slots,
                splitters: &mut self.splitters,
                spawners: &mut self.spawners,
                items: &mut self.items,
                bus: &mut self.bus,
                stats: &mut self.stats,
                tick: self.tick,
                dt: self.config.tick_dt,
            };
            for id in order {
                step(&mut ctx, id);
            }
            self.bus.deliver();
            self.tick += 1;
        }

        fn kinds(&mut self) -> Vec<EventKind> {
            self.bus.take_events().iter().map(|e| e.kind()).collect()
        }
    }

    fn trash_kind() -> SegmentKind {
        SegmentKind::Trash(TrashConfig {
            disposal_delay: f64_to_fixed64(0.5),
            throw_impulse: f64_to_fixed64(8.0),
        })
    }

    // -----------------------------------------------------------------------
    // Test 1: an item crosses one cell in the expected number of ticks
    // -----------------------------------------------------------------------
    #[test]
    fn single_hop_timing() {
        let mut w = World::new();
        // Facing +x so the pair stays aligned to the x axis.
        let a = w.place(0, 0, SegmentKind::Belt, Orientation::Deg90);
        let b = w.place(1, 0, SegmentKind::Belt, Orientation::Deg90);
        let item = w.load(a, ItemTypeId(0));

        // speed 2.0, dt 0.05: 0.1 cells per tick, completion at >= 0.99.
        w.tick_all();
        assert!(matches!(w.slots[a], SlotState::Transferring { .. }));
        assert!(matches!(w.slots[b], SlotState::Reserved { by } if by == a));

        for _ in 0..9 {
            w.tick_all();
        }
        assert_eq!(w.slots[a], SlotState::Empty);
        assert_eq!(w.slots[b], SlotState::Occupied { item });
    }

    // -----------------------------------------------------------------------
    // Test 2: a blocked sender stays put and is counted
    // -----------------------------------------------------------------------
    #[test]
    fn blocked_sender_stays_occupied() {
        let mut w = World::new();
        let a = w.place(0, 0, SegmentKind::Belt, Orientation::Deg90);
        let b = w.place(1, 0, SegmentKind::Belt, Orientation::Deg90);
        let front = w.load(b, ItemTypeId(0));
        let back = w.load(a, ItemTypeId(0));

        // b's own send is blocked (nothing at (2,0) accepts), so b holds
        // its item and a cannot move either.
        w.tick_all();
        assert_eq!(w.slots[a], SlotState::Occupied { item: back });
        assert_eq!(w.slots[b], SlotState::Occupied { item: front });
        assert_eq!(w.stats.blocked_sends, 2);
    }

    // -----------------------------------------------------------------------
    // Test 3: reservation prevents a second sender from targeting the slot
    // -----------------------------------------------------------------------
    #[test]
    fn reservation_is_first_writer_wins() {
        use crate::segment::SpawnerConfig;
        let mut w = World::new();
        // Two fixed-heading senders aimed at the same empty middle belt.
        let src = SpawnerConfig {
            item_type: ItemTypeId(0),
            product: ProductType(0),
            interval: f64_to_fixed64(1.0),
        };
        let left = w.place(0, 0, SegmentKind::Spawner(src.clone()), Orientation::Deg90);
        let mid = w.place(1, 0, SegmentKind::Belt, Orientation::Deg90);
        let right = w.place(2, 0, SegmentKind::Spawner(src), Orientation::Deg270);
        w.load(left, ItemTypeId(0));
        w.load(right, ItemTypeId(0));

        w.tick_all();
        // left was placed first, so it steps first and wins the slot.
        assert!(matches!(w.slots[left], SlotState::Transferring { .. }));
        assert!(matches!(w.slots[mid], SlotState::Reserved { by } if by == left));
        assert!(matches!(w.slots[right], SlotState::Occupied { .. }));
        assert_eq!(w.stats.blocked_sends, 1);
    }

    // -----------------------------------------------------------------------
    // Test 4: removing the target mid-transfer aborts without losing the item
    // -----------------------------------------------------------------------
    #[test]
    fn lost_target_aborts_transfer() {
        let mut w = World::new();
        let a = w.place(0, 0, SegmentKind::Belt, Orientation::Deg90);
        w.place(1, 0, SegmentKind::Belt, Orientation::Deg90);
        let item = w.load(a, ItemTypeId(0));

        w.tick_all();
        assert!(matches!(w.slots[a], SlotState::Transferring { .. }));

        w.network.remove(GridCell::new(1, 0)).unwrap();
        w.tick_all();
        assert_eq!(w.slots[a], SlotState::Occupied { item });
        assert_eq!(w.stats.aborted_transfers, 1);
        assert!(w.items.contains_key(item));
        assert!(w.kinds().contains(&EventKind::TransferAborted));
    }

    // -----------------------------------------------------------------------
    // Test 5: trash disposes after its delay and detaches the item
    // -----------------------------------------------------------------------
    #[test]
    fn trash_disposes_with_delay() {
        let mut w = World::new();
        let t = w.place(0, 0, trash_kind(), Orientation::Deg0);
        let item = w.load(t, ItemTypeId(0));

        // delay 0.5, dt 0.05: ten ticks from entry to detach.
        for _ in 0..9 {
            w.tick_all();
            assert!(matches!(w.slots[t], SlotState::Disposing { .. }));
        }
        w.tick_all();
        assert_eq!(w.slots[t], SlotState::Empty);
        assert!(!w.items.contains_key(item));
        let kinds = w.kinds();
        assert!(kinds.contains(&EventKind::ItemDisposed));
        assert!(kinds.contains(&EventKind::DetachItem));
    }

    // -----------------------------------------------------------------------
    // Test 6: converter transforms matching input and ejects the rest
    // -----------------------------------------------------------------------
    #[test]
    fn converter_matching_and_mismatch() {
        let egg = ItemTypeId(0);
        let chicken = ItemTypeId(1);
        let kind = SegmentKind::Converter(ConverterConfig {
            input: egg,
            output: chicken,
            product: ProductType(0),
            conversion_time: f64_to_fixed64(0.2),
            eject_impulse: f64_to_fixed64(5.0),
        });

        let mut w = World::new();
        let c = w.place(0, 0, kind.clone(), Orientation::Deg0);
        w.load(c, egg);
        // 0.2 seconds at dt 0.05: four ticks.
        for _ in 0..3 {
            w.tick_all();
            assert!(matches!(w.slots[c], SlotState::Converting { .. }));
        }
        w.tick_all();
        let SlotState::Occupied { item } = w.slots[c] else {
            panic!("conversion should finish into an occupied slot");
        };
        assert_eq!(w.items[item].item_type, chicken);
        assert!(w.kinds().contains(&EventKind::UnitProduced));

        // A foreign item type is ejected immediately.
        let mut w = World::new();
        w.config.register_item("stone");
        let c = w.place(0, 0, kind, Orientation::Deg0);
        let item = w.load(c, ItemTypeId(2));
        w.tick_all();
        assert_eq!(w.slots[c], SlotState::Empty);
        assert!(!w.items.contains_key(item));
        let kinds = w.kinds();
        assert!(kinds.contains(&EventKind::ItemEjected));
        assert!(kinds.contains(&EventKind::DetachItem));
    }

    // -----------------------------------------------------------------------
    // Test 7: splitter alternates on success, falls back without flipping
    // -----------------------------------------------------------------------
    #[test]
    fn splitter_alternation() {
        let mut w = World::new();
        // Splitter faces +x; primary (1,0), secondary (-1,0).
        let s = w.place(0, 0, SegmentKind::Splitter, Orientation::Deg90);
        let p = w.place(1, 0, trash_kind(), Orientation::Deg0);
        let q = w.place(-1, 0, trash_kind(), Orientation::Deg0);

        let run_one = |w: &mut World, s: SegmentId| {
            w.load(s, ItemTypeId(0));
            while !matches!(w.slots[s], SlotState::Empty) {
                w.tick_all();
            }
        };

        run_one(&mut w, s);
        assert!(matches!(w.slots[p], SlotState::Occupied { .. } | SlotState::Disposing { .. }));
        run_one(&mut w, s);
        assert!(matches!(w.slots[q], SlotState::Occupied { .. } | SlotState::Disposing { .. }));
        assert!(w.splitters[s].prefer_primary);
    }

    // -----------------------------------------------------------------------
    // Test 8: blocked preferred side falls back and keeps the preference
    // -----------------------------------------------------------------------
    #[test]
    fn splitter_fallback_keeps_preference() {
        let mut w = World::new();
        let s = w.place(0, 0, SegmentKind::Splitter, Orientation::Deg90);
        let p = w.place(1, 0, trash_kind(), Orientation::Deg0);
        w.place(-1, 0, trash_kind(), Orientation::Deg0);

        // Occupy the primary so the first send must fall back.
        w.load(p, ItemTypeId(0));
        w.load(s, ItemTypeId(0));
        w.tick_all();
        let SlotState::Transferring { to, .. } = w.slots[s] else {
            panic!("splitter should fall back to the secondary");
        };
        assert_eq!(to, GridCell::new(-1, 0));
        // Preference unchanged: the next send still aims at the primary.
        assert!(w.splitters[s].prefer_primary);
        assert!(!w.splitters[s].flip_pending);
    }

    // -----------------------------------------------------------------------
    // Test 9: spawners never accept input
    // -----------------------------------------------------------------------
    #[test]
    fn spawner_rejects_incoming() {
        use crate::segment::SpawnerConfig;
        let mut w = World::new();
        let a = w.place(0, 0, SegmentKind::Belt, Orientation::Deg90);
        w.place(
            1,
            0,
            SegmentKind::Spawner(SpawnerConfig {
                item_type: ItemTypeId(0),
                product: ProductType(0),
                interval: f64_to_fixed64(1.0),
            }),
            Orientation::Deg90,
        );
        let item = w.load(a, ItemTypeId(0));
        w.tick_all();
        assert_eq!(w.slots[a], SlotState::Occupied { item });
        assert_eq!(w.stats.blocked_sends, 1);
    }
}
