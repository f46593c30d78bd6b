//! The simulation engine: phase ordering, time control, and state hashing.
//!
//! One `step()` runs five phases in a fixed order:
//!
//! 1. **Edits** — drain the queue, mutate topology, recompute shapes.
//! 2. **Spawn** — advance spawner timers, fill buffers.
//! 3. **Transport** — advance every slot, ascending placement order.
//! 4. **Post-tick** — deliver buffered events; the objective board
//!    consumes `UnitProduced` here.
//! 5. **Bookkeeping** — tick counter and FNV-1a state hash.
//!
//! Nothing observes a half-ticked world and no failure escapes a tick;
//! misconfiguration is rejected when an edit is submitted, and the two
//! abnormal transport conditions self-heal in place.

use crate::config::{ConfigError, SimConfig};
use crate::edit::{EditCommand, EditQueue};
use crate::event::{Event, EventBus, EventListener};
use crate::fixedmath::{Fixed64, Ticks};
use crate::grid::{GridCell, Orientation};
use crate::id::{ItemId, SegmentId};
use crate::item::Item;
use crate::network::{BeltNetwork, PlaceResult, Reshaped, Segment};
use crate::objective::ObjectiveBoard;
use crate::segment::SegmentKind;
use crate::snapshot::{LayoutSnapshot, SnapshotEntry, SnapshotError};
use crate::spawner::{self, SpawnerState};
use crate::transport::{self, SlotState, SplitterState, TransportCtx, TransportStats};
use slotmap::{SecondaryMap, SlotMap};

// ---------------------------------------------------------------------------
// Time control
// ---------------------------------------------------------------------------

/// How `advance` maps wall time onto ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SimulationStrategy {
    /// Every `advance` call runs exactly one tick; the dt argument is
    /// ignored. For lockstep hosts and tests.
    #[default]
    Tick,
    /// Accumulate real seconds and run as many fixed ticks as fit.
    Delta,
}

/// Simulation clock state.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimState {
    pub tick: Ticks,
    pub accumulator: Fixed64,
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct Engine {
    network: BeltNetwork,
    config: SimConfig,
    slots: SecondaryMap<SegmentId, SlotState>,
    splitters: SecondaryMap<SegmentId, SplitterState>,
    spawners: SecondaryMap<SegmentId, SpawnerState>,
    items: SlotMap<ItemId, Item>,
    edits: EditQueue,
    bus: EventBus,
    objectives: ObjectiveBoard,
    stats: TransportStats,
    state: SimState,
    strategy: SimulationStrategy,
    paused: bool,
    last_state_hash: u64,
}

impl Engine {
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            network: BeltNetwork::new(),
            config,
            slots: SecondaryMap::new(),
            splitters: SecondaryMap::new(),
            spawners: SecondaryMap::new(),
            items: SlotMap::with_key(),
            edits: EditQueue::new(),
            bus: EventBus::new(),
            objectives: ObjectiveBoard::new(3),
            stats: TransportStats::default(),
            state: SimState::default(),
            strategy: SimulationStrategy::default(),
            paused: false,
            last_state_hash: 0,
        })
    }

    pub fn with_strategy(mut self, strategy: SimulationStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    // -- accessors ----------------------------------------------------------

    pub fn network(&self) -> &BeltNetwork {
        &self.network
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn slot(&self, id: SegmentId) -> Option<&SlotState> {
        self.slots.get(id)
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.get(id)
    }

    /// Items currently alive anywhere in the network.
    pub fn items_in_flight(&self) -> usize {
        self.items.len()
    }

    pub fn objectives(&self) -> &ObjectiveBoard {
        &self.objectives
    }

    pub fn objectives_mut(&mut self) -> &mut ObjectiveBoard {
        &mut self.objectives
    }

    pub fn stats(&self) -> TransportStats {
        self.stats
    }

    pub fn tick(&self) -> Ticks {
        self.state.tick
    }

    /// Hash of the full simulation state after the last tick. Two engines
    /// fed identical inputs produce identical hash sequences.
    pub fn state_hash(&self) -> u64 {
        self.last_state_hash
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn register_listener(&mut self, listener: Box<dyn EventListener>) {
        self.bus.register_listener(listener);
    }

    /// Drain events delivered since the last call.
    pub fn take_events(&mut self) -> Vec<Event> {
        self.bus.take_events()
    }

    // -- edit submission ----------------------------------------------------

    /// Queue a placement for the next tick.
    pub fn queue_place(
        &mut self,
        cell: GridCell,
        kind: SegmentKind,
        orientation: Orientation,
    ) -> Result<(), ConfigError> {
        self.edits.submit_place(&self.config, cell, kind, orientation)
    }

    /// Queue a removal for the next tick.
    pub fn queue_remove(&mut self, cell: GridCell) {
        self.edits.submit_remove(cell);
    }

    pub fn pending_edits(&self) -> usize {
        self.edits.len()
    }

    // -- time ---------------------------------------------------------------

    /// Advance by `dt` seconds of real time, per the strategy. A paused
    /// engine discards the time entirely.
    pub fn advance(&mut self, dt: Fixed64) {
        if self.paused {
            return;
        }
        match self.strategy {
            SimulationStrategy::Tick => self.step(),
            SimulationStrategy::Delta => {
                self.state.accumulator += dt;
                while self.state.accumulator >= self.config.tick_dt {
                    self.state.accumulator -= self.config.tick_dt;
                    self.step();
                }
            }
        }
    }

    /// Run exactly one tick, regardless of strategy or pause state.
    pub fn step(&mut self) {
        self.apply_edits();
        self.run_movement_phases();
        self.bus.deliver_with(&mut self.objectives);
        self.state.tick += 1;
        self.last_state_hash = self.compute_state_hash();
    }

    // -- phase 1: edits -----------------------------------------------------

    fn apply_edits(&mut self) {
        for command in self.edits.take() {
            match command {
                EditCommand::Place {
                    cell,
                    kind,
                    orientation,
                } => self.apply_place(cell, kind, orientation),
                EditCommand::Remove { cell } => self.apply_remove(cell),
            }
        }
    }

    fn apply_place(&mut self, cell: GridCell, kind: SegmentKind, orientation: Orientation) {
        let PlaceResult {
            id,
            replaced,
            reshaped,
        } = self.network.place(cell, kind, orientation);

        if let Some((old_id, old_seg)) = replaced {
            self.release_segment(old_id, &old_seg);
            self.bus.emit(Event::SegmentRemoved {
                id: old_id,
                cell,
                tick: self.state.tick,
            });
        }

        self.slots.insert(id, SlotState::Empty);
        match self.network.segment(id).map(|s| &s.kind) {
            Some(SegmentKind::Splitter) => {
                self.splitters.insert(id, SplitterState::default());
            }
            Some(SegmentKind::Spawner(cfg)) => {
                let state = SpawnerState::new(cfg);
                self.spawners.insert(id, state);
            }
            _ => {}
        }

        self.bus.emit(Event::SegmentPlaced {
            id,
            cell,
            tick: self.state.tick,
        });
        self.emit_reshaped(&reshaped);
    }

    fn apply_remove(&mut self, cell: GridCell) {
        let Some(result) = self.network.remove(cell) else {
            return;
        };
        self.release_segment(result.id, &result.segment);
        self.bus.emit(Event::SegmentRemoved {
            id: result.id,
            cell,
            tick: self.state.tick,
        });
        self.emit_reshaped(&result.reshaped);
    }

    fn emit_reshaped(&mut self, reshaped: &[Reshaped]) {
        for change in reshaped {
            self.bus.emit(Event::ShapeChanged {
                id: change.id,
                cell: change.cell,
                shape: change.shape,
                orientation: change.orientation,
                tick: self.state.tick,
            });
        }
    }

    /// Drop every side-table entry of a removed segment. A carried item is
    /// detached in place with no launch impulse; a reservation it held
    /// downstream is released. Senders aimed *at* the removed segment heal
    /// themselves when their transfer validates next tick.
    fn release_segment(&mut self, id: SegmentId, segment: &Segment) {
        if let Some(state) = self.slots.remove(id) {
            if let SlotState::Transferring { to, .. } = state {
                if let Some(target_id) = self.network.get(to) {
                    if self.slots.get(target_id) == Some(&SlotState::Reserved { by: id }) {
                        self.slots.insert(target_id, SlotState::Empty);
                    }
                }
            }
            if let Some(item) = state.item() {
                if let Some(held) = self.items.remove(item) {
                    self.bus.emit(Event::DetachItem {
                        item_type: held.item_type,
                        cell: segment.cell,
                        impulse: Fixed64::ZERO,
                        tick: self.state.tick,
                    });
                }
            }
        }
        self.splitters.remove(id);
        self.spawners.remove(id);
    }

    // -- snapshots ----------------------------------------------------------

    /// Capture the committed layout and slot occupancy.
    pub fn snapshot(&self) -> LayoutSnapshot {
        let entries = self
            .network
            .iter_ordered()
            .map(|(id, seg)| SnapshotEntry {
                cell: seg.cell,
                kind: seg.kind.clone(),
                shape: seg.shape,
                orientation: seg.orientation,
                occupant: self
                    .slots
                    .get(id)
                    .and_then(|s| s.item())
                    .and_then(|item| self.items.get(item))
                    .map(|item| item.item_type),
            })
            .collect();
        LayoutSnapshot::from_entries(entries)
    }

    /// Replace the current world with a snapshot's layout. In-flight
    /// timing does not survive: occupants come back at rest, spawner
    /// timers restart, pending edits are discarded.
    pub fn restore(&mut self, snapshot: &LayoutSnapshot) -> Result<(), SnapshotError> {
        snapshot.check_version()?;
        for entry in snapshot.entries() {
            entry.kind.validate(&self.config)?;
        }

        self.network = BeltNetwork::new();
        self.slots.clear();
        self.splitters.clear();
        self.spawners.clear();
        self.items = SlotMap::with_key();
        self.edits = EditQueue::new();

        for entry in snapshot.entries() {
            let result = self
                .network
                .place(entry.cell, entry.kind.clone(), entry.orientation);
            self.slots.insert(result.id, SlotState::Empty);
            match self.network.segment(result.id).map(|s| &s.kind) {
                Some(SegmentKind::Splitter) => {
                    self.splitters.insert(result.id, SplitterState::default());
                }
                Some(SegmentKind::Spawner(cfg)) => {
                    let state = SpawnerState::new(cfg);
                    self.spawners.insert(result.id, state);
                }
                _ => {}
            }
            if let Some(item_type) = entry.occupant {
                let item = self.items.insert(Item::new(item_type));
                self.slots.insert(result.id, SlotState::Occupied { item });
            }
        }
        Ok(())
    }

    // -- phases 2 and 3: spawn, transport ------------------------------------

    fn run_movement_phases(&mut self) {
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
            tick: self.state.tick,
            dt: self.config.tick_dt,
        };
        for &id in &order {
            spawner::step(&mut ctx, id);
        }
        for &id in &order {
            transport::step(&mut ctx, id);
        }
    }

    // -- phase 5: state hash --------------------------------------------------

    fn compute_state_hash(&self) -> u64 {
        let mut hasher = Fnv1a::new();
        hasher.write_u64(self.state.tick);
        for (id, seg) in self.network.iter_ordered() {
            hasher.write_i64(seg.cell.x as i64);
            hasher.write_i64(seg.cell.z as i64);
            hasher.write_u8(kind_tag(&seg.kind));
            hasher.write_u8(seg.shape as u8);
            hasher.write_u8(seg.orientation as u8);
            hasher.write_u64(seg.placed_seq);
            self.hash_slot(&mut hasher, id);
        }
        hasher.finish()
    }

    fn hash_slot(&self, hasher: &mut Fnv1a, id: SegmentId) {
        let Some(state) = self.slots.get(id) else {
            hasher.write_u8(0xff);
            return;
        };
        match state {
            SlotState::Empty => hasher.write_u8(0),
            SlotState::Reserved { by } => {
                hasher.write_u8(1);
                let seq = self
                    .network
                    .segment(*by)
                    .map(|s| s.placed_seq)
                    .unwrap_or(u64::MAX);
                hasher.write_u64(seq);
            }
            SlotState::Occupied { item } => {
                hasher.write_u8(2);
                self.hash_item(hasher, *item);
            }
            SlotState::Transferring { item, to, progress } => {
                hasher.write_u8(3);
                self.hash_item(hasher, *item);
                hasher.write_i64(to.x as i64);
                hasher.write_i64(to.z as i64);
                hasher.write_u64(progress.to_bits() as u64);
            }
            SlotState::Converting { item, remaining } => {
                hasher.write_u8(4);
                self.hash_item(hasher, *item);
                hasher.write_u64(remaining.to_bits() as u64);
            }
            SlotState::Disposing { item, remaining } => {
                hasher.write_u8(5);
                self.hash_item(hasher, *item);
                hasher.write_u64(remaining.to_bits() as u64);
            }
        }
    }

    fn hash_item(&self, hasher: &mut Fnv1a, item: ItemId) {
        let tag = self
            .items
            .get(item)
            .map(|i| i.item_type.0 as u64)
            .unwrap_or(u64::MAX);
        hasher.write_u64(tag);
    }
}

fn kind_tag(kind: &SegmentKind) -> u8 {
    match kind {
        SegmentKind::Belt => 0,
        SegmentKind::Converter(_) => 1,
        SegmentKind::Splitter => 2,
        SegmentKind::Trash(_) => 3,
        SegmentKind::Spawner(_) => 4,
    }
}

// ---------------------------------------------------------------------------
// FNV-1a
// ---------------------------------------------------------------------------

struct Fnv1a(u64);

impl Fnv1a {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    fn new() -> Self {
        Self(Self::OFFSET)
    }

    fn write_u8(&mut self, byte: u8) {
        self.0 ^= byte as u64;
        self.0 = self.0.wrapping_mul(Self::PRIME);
    }

    fn write_u64(&mut self, value: u64) {
        for byte in value.to_le_bytes() {
            self.write_u8(byte);
        }
    }

    fn write_i64(&mut self, value: i64) {
        self.write_u64(value as u64);
    }

    fn finish(&self) -> u64 {
        self.0
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventKind;
    use crate::fixedmath::f64_to_fixed64;
    use crate::segment::{SpawnerConfig, TrashConfig};

    fn config() -> SimConfig {
        let mut config = SimConfig::new(f64_to_fixed64(2.0), f64_to_fixed64(0.05));
        config.register_item("egg");
        config.register_item("chicken");
        config.register_product("eggs");
        config
    }

    fn spawner_kind(config: &SimConfig, interval: f64) -> SegmentKind {
        SegmentKind::Spawner(SpawnerConfig {
            item_type: config.item_id("egg").unwrap(),
            product: config.product_id("eggs").unwrap(),
            interval: f64_to_fixed64(interval),
        })
    }

    fn trash_kind() -> SegmentKind {
        SegmentKind::Trash(TrashConfig {
            disposal_delay: f64_to_fixed64(0.5),
            throw_impulse: f64_to_fixed64(8.0),
        })
    }

    // -----------------------------------------------------------------------
    // Test 1: edits apply at the next step and emit placement events
    // -----------------------------------------------------------------------
    #[test]
    fn edits_apply_at_tick_boundary() {
        let mut engine = Engine::new(config()).unwrap();
        engine
            .queue_place(GridCell::new(0, 0), SegmentKind::Belt, Orientation::Deg0)
            .unwrap();
        assert!(engine.network().is_empty());
        assert_eq!(engine.pending_edits(), 1);

        engine.step();
        assert_eq!(engine.network().len(), 1);
        let kinds: Vec<_> = engine.take_events().iter().map(|e| e.kind()).collect();
        assert_eq!(kinds, vec![EventKind::SegmentPlaced]);
    }

    // -----------------------------------------------------------------------
    // Test 2: a spawner feeds a belt into trash end to end
    // -----------------------------------------------------------------------
    #[test]
    fn spawner_belt_trash_pipeline() {
        let config = config();
        let mut engine = Engine::new(config.clone()).unwrap();
        engine
            .queue_place(
                GridCell::new(0, 0),
                spawner_kind(&config, 0.1),
                Orientation::Deg90,
            )
            .unwrap();
        engine
            .queue_place(GridCell::new(1, 0), SegmentKind::Belt, Orientation::Deg90)
            .unwrap();
        engine
            .queue_place(GridCell::new(2, 0), trash_kind(), Orientation::Deg90)
            .unwrap();

        let mut disposed = 0;
        for _ in 0..400 {
            engine.step();
            for event in engine.take_events() {
                if event.kind() == EventKind::ItemDisposed {
                    disposed += 1;
                }
            }
        }
        assert!(disposed >= 2, "pipeline should dispose items continuously");
        // Conservation: whatever is still alive is owned by exactly one slot.
        let held: usize = engine
            .network()
            .iter_ordered()
            .filter_map(|(id, _)| engine.slot(id).and_then(|s| s.item()))
            .count();
        assert_eq!(held, engine.items_in_flight());
    }

    // -----------------------------------------------------------------------
    // Test 3: removing an occupied segment detaches its item
    // -----------------------------------------------------------------------
    #[test]
    fn removal_detaches_carried_item() {
        let config = config();
        let mut engine = Engine::new(config.clone()).unwrap();
        engine
            .queue_place(
                GridCell::new(0, 0),
                spawner_kind(&config, 0.05),
                Orientation::Deg90,
            )
            .unwrap();
        // First expiry fires on the first step.
        engine.step();
        assert_eq!(engine.items_in_flight(), 1);

        engine.queue_remove(GridCell::new(0, 0));
        engine.step();
        assert_eq!(engine.items_in_flight(), 0);
        assert!(engine.network().is_empty());
        let kinds: Vec<_> = engine.take_events().iter().map(|e| e.kind()).collect();
        assert!(kinds.contains(&EventKind::DetachItem));
        assert!(kinds.contains(&EventKind::SegmentRemoved));
    }

    // -----------------------------------------------------------------------
    // Test 4: identical command streams hash identically
    // -----------------------------------------------------------------------
    #[test]
    fn state_hash_is_deterministic() {
        let run = || {
            let config = config();
            let mut engine = Engine::new(config.clone()).unwrap();
            engine
                .queue_place(
                    GridCell::new(0, 0),
                    spawner_kind(&config, 0.1),
                    Orientation::Deg90,
                )
                .unwrap();
            engine
                .queue_place(GridCell::new(1, 0), SegmentKind::Belt, Orientation::Deg90)
                .unwrap();
            engine
                .queue_place(GridCell::new(2, 0), trash_kind(), Orientation::Deg90)
                .unwrap();
            let mut hashes = Vec::new();
            for _ in 0..50 {
                engine.step();
                hashes.push(engine.state_hash());
            }
            hashes
        };
        assert_eq!(run(), run());
    }

    // -----------------------------------------------------------------------
    // Test 5: delta strategy accumulates partial frames
    // -----------------------------------------------------------------------
    #[test]
    fn delta_strategy_accumulates() {
        let mut engine = Engine::new(config())
            .unwrap()
            .with_strategy(SimulationStrategy::Delta);
        // dt 0.05: a 0.03 frame is not enough for a tick, two are.
        engine.advance(f64_to_fixed64(0.03));
        assert_eq!(engine.tick(), 0);
        engine.advance(f64_to_fixed64(0.03));
        assert_eq!(engine.tick(), 1);
        // A long frame runs several ticks at once.
        engine.advance(f64_to_fixed64(0.2));
        assert_eq!(engine.tick(), 5);
    }

    // -----------------------------------------------------------------------
    // Test 6: pause discards advance time
    // -----------------------------------------------------------------------
    #[test]
    fn pause_blocks_advance() {
        let mut engine = Engine::new(config()).unwrap();
        engine.set_paused(true);
        engine.advance(f64_to_fixed64(1.0));
        assert_eq!(engine.tick(), 0);
        engine.set_paused(false);
        engine.advance(f64_to_fixed64(1.0));
        assert_eq!(engine.tick(), 1);
    }

    // -----------------------------------------------------------------------
    // Test 7: objectives complete from produced units
    // -----------------------------------------------------------------------
    #[test]
    fn objectives_progress_from_production() {
        let config = config();
        let product = config.product_id("eggs").unwrap();
        let mut engine = Engine::new(config.clone()).unwrap();
        engine.objectives_mut().add(product, 2);
        engine
            .queue_place(
                GridCell::new(0, 0),
                spawner_kind(&config, 0.05),
                Orientation::Deg90,
            )
            .unwrap();
        engine
            .queue_place(GridCell::new(1, 0), trash_kind(), Orientation::Deg90)
            .unwrap();

        for _ in 0..200 {
            engine.step();
            if engine.objectives().completed_count() > 0 {
                break;
            }
        }
        assert_eq!(engine.objectives().completed_count(), 1);
    }

    // -----------------------------------------------------------------------
    // Test 8: replacing an occupied cell detaches the old occupant's item
    // -----------------------------------------------------------------------
    #[test]
    fn replacement_displaces_old_segment() {
        let config = config();
        let mut engine = Engine::new(config.clone()).unwrap();
        engine
            .queue_place(
                GridCell::new(0, 0),
                spawner_kind(&config, 0.05),
                Orientation::Deg90,
            )
            .unwrap();
        engine.step();
        assert_eq!(engine.items_in_flight(), 1);

        engine
            .queue_place(GridCell::new(0, 0), SegmentKind::Belt, Orientation::Deg0)
            .unwrap();
        engine.step();
        assert_eq!(engine.items_in_flight(), 0);
        assert_eq!(engine.network().len(), 1);
        let kinds: Vec<_> = engine.take_events().iter().map(|e| e.kind()).collect();
        assert!(kinds.contains(&EventKind::SegmentRemoved));
        assert!(kinds.contains(&EventKind::SegmentPlaced));
        assert!(kinds.contains(&EventKind::DetachItem));
    }

    // -----------------------------------------------------------------------
    // Test 9: snapshot round trip rebuilds layout and occupancy
    // -----------------------------------------------------------------------
    #[test]
    fn snapshot_round_trip() {
        let config = config();
        let mut engine = Engine::new(config.clone()).unwrap();
        engine
            .queue_place(
                GridCell::new(0, 0),
                spawner_kind(&config, 0.05),
                Orientation::Deg90,
            )
            .unwrap();
        engine
            .queue_place(GridCell::new(1, 0), SegmentKind::Belt, Orientation::Deg90)
            .unwrap();
        engine
            .queue_place(GridCell::new(2, 0), trash_kind(), Orientation::Deg90)
            .unwrap();
        for _ in 0..5 {
            engine.step();
        }

        let snapshot = engine.snapshot();
        let bytes = snapshot.to_bytes().unwrap();
        let decoded = crate::snapshot::LayoutSnapshot::from_bytes(&bytes).unwrap();

        let mut restored = Engine::new(config).unwrap();
        restored.restore(&decoded).unwrap();
        assert_eq!(restored.network().len(), engine.network().len());
        assert_eq!(restored.items_in_flight(), engine.items_in_flight());
        for (x, z) in [(0, 0), (1, 0), (2, 0)] {
            let cell = GridCell::new(x, z);
            let a = engine.network().get(cell).unwrap();
            let b = restored.network().get(cell).unwrap();
            let sa = engine.network().segment(a).unwrap();
            let sb = restored.network().segment(b).unwrap();
            assert_eq!(sa.kind, sb.kind);
            assert_eq!(sa.shape, sb.shape);
            assert_eq!(sa.orientation, sb.orientation);
        }
    }

    #[test]
    fn invalid_config_rejected_at_construction() {
        let config = SimConfig::new(Fixed64::ZERO, f64_to_fixed64(0.05));
        assert!(Engine::new(config).is_err());
    }
}
