//! Typed simulation events with buffered post-tick delivery.
//!
//! Phases emit into the bus freely while the tick runs; nothing observes
//! an event until the post-tick delivery pass, so listeners always see a
//! consistent world. Events also land in a bounded outbox that embedders
//! drain between ticks (presentation, audio, physics handoff). When the
//! outbox is full the oldest events are dropped and counted.

use crate::fixedmath::{Fixed64, Ticks};
use crate::grid::{GridCell, Orientation};
use crate::id::{ItemId, ItemTypeId, ProductType, SegmentId};
use crate::segment::Shape;
use std::collections::VecDeque;

// ---------------------------------------------------------------------------
// Event
// ---------------------------------------------------------------------------

/// Everything observable that happens inside a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    SegmentPlaced {
        id: SegmentId,
        cell: GridCell,
        tick: Ticks,
    },
    SegmentRemoved {
        id: SegmentId,
        cell: GridCell,
        tick: Ticks,
    },
    /// A neighbor edit changed a belt's derived shape in place.
    ShapeChanged {
        id: SegmentId,
        cell: GridCell,
        shape: Shape,
        orientation: Orientation,
        tick: Ticks,
    },
    ItemSpawned {
        item: ItemId,
        item_type: ItemTypeId,
        cell: GridCell,
        tick: Ticks,
    },
    TransferStarted {
        item: ItemId,
        from: GridCell,
        to: GridCell,
        tick: Ticks,
    },
    TransferCompleted {
        item: ItemId,
        from: GridCell,
        to: GridCell,
        tick: Ticks,
    },
    /// A transfer's target vanished mid-flight; the item snapped back to
    /// its owner.
    TransferAborted {
        item: ItemId,
        at: GridCell,
        tick: Ticks,
    },
    UnitProduced {
        product: ProductType,
        tick: Ticks,
    },
    /// A converter rejected a non-matching input.
    ItemEjected {
        item_type: ItemTypeId,
        cell: GridCell,
        tick: Ticks,
    },
    /// A trash segment finished disposing an item.
    ItemDisposed {
        item_type: ItemTypeId,
        cell: GridCell,
        tick: Ticks,
    },
    /// Handoff to the removal collaborator: the item has left the
    /// simulation and should be re-expressed as a free-moving prop with
    /// this launch impulse.
    DetachItem {
        item_type: ItemTypeId,
        cell: GridCell,
        impulse: Fixed64,
        tick: Ticks,
    },
    SpawnerStalled {
        id: SegmentId,
        cell: GridCell,
        tick: Ticks,
    },
    SpawnerResumed {
        id: SegmentId,
        cell: GridCell,
        tick: Ticks,
    },
}

/// Discriminant of an [`Event`], for filtering without matching payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EventKind {
    SegmentPlaced,
    SegmentRemoved,
    ShapeChanged,
    ItemSpawned,
    TransferStarted,
    TransferCompleted,
    TransferAborted,
    UnitProduced,
    ItemEjected,
    ItemDisposed,
    DetachItem,
    SpawnerStalled,
    SpawnerResumed,
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::SegmentPlaced { .. } => EventKind::SegmentPlaced,
            Event::SegmentRemoved { .. } => EventKind::SegmentRemoved,
            Event::ShapeChanged { .. } => EventKind::ShapeChanged,
            Event::ItemSpawned { .. } => EventKind::ItemSpawned,
            Event::TransferStarted { .. } => EventKind::TransferStarted,
            Event::TransferCompleted { .. } => EventKind::TransferCompleted,
            Event::TransferAborted { .. } => EventKind::TransferAborted,
            Event::UnitProduced { .. } => EventKind::UnitProduced,
            Event::ItemEjected { .. } => EventKind::ItemEjected,
            Event::ItemDisposed { .. } => EventKind::ItemDisposed,
            Event::DetachItem { .. } => EventKind::DetachItem,
            Event::SpawnerStalled { .. } => EventKind::SpawnerStalled,
            Event::SpawnerResumed { .. } => EventKind::SpawnerResumed,
        }
    }

    pub fn tick(&self) -> Ticks {
        match self {
            Event::SegmentPlaced { tick, .. }
            | Event::SegmentRemoved { tick, .. }
            | Event::ShapeChanged { tick, .. }
            | Event::ItemSpawned { tick, .. }
            | Event::TransferStarted { tick, .. }
            | Event::TransferCompleted { tick, .. }
            | Event::TransferAborted { tick, .. }
            | Event::UnitProduced { tick, .. }
            | Event::ItemEjected { tick, .. }
            | Event::ItemDisposed { tick, .. }
            | Event::DetachItem { tick, .. }
            | Event::SpawnerStalled { tick, .. }
            | Event::SpawnerResumed { tick, .. } => *tick,
        }
    }
}

// ---------------------------------------------------------------------------
// Listener
// ---------------------------------------------------------------------------

/// Passive observer notified once per event at post-tick. Listeners must
/// not mutate the simulation; they see events strictly after the tick that
/// produced them.
pub trait EventListener: std::fmt::Debug {
    fn on_event(&mut self, event: &Event);
}

// ---------------------------------------------------------------------------
// EventBus
// ---------------------------------------------------------------------------

const DEFAULT_OUTBOX_CAPACITY: usize = 1024;

/// Buffers events during the tick, delivers at post-tick.
#[derive(Debug)]
pub struct EventBus {
    pending: Vec<Event>,
    listeners: Vec<Box<dyn EventListener>>,
    outbox: VecDeque<Event>,
    outbox_capacity: usize,
    dropped: u64,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            listeners: Vec::new(),
            outbox: VecDeque::new(),
            outbox_capacity: DEFAULT_OUTBOX_CAPACITY,
            dropped: 0,
        }
    }

    pub fn with_outbox_capacity(capacity: usize) -> Self {
        Self {
            outbox_capacity: capacity,
            ..Self::new()
        }
    }

    pub fn register_listener(&mut self, listener: Box<dyn EventListener>) {
        self.listeners.push(listener);
    }

    /// Queue an event for post-tick delivery.
    pub fn emit(&mut self, event: Event) {
        self.pending.push(event);
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Deliver every pending event to the listeners and the outbox, in
    /// emission order.
    pub fn deliver(&mut self) {
        self.deliver_internal(None);
    }

    /// Deliver with an additional sink that is notified before the
    /// registered listeners. The engine routes its own observers (the
    /// objective board) through this without boxing them.
    pub fn deliver_with(&mut self, sink: &mut dyn EventListener) {
        self.deliver_internal(Some(sink));
    }

    fn deliver_internal(&mut self, mut sink: Option<&mut dyn EventListener>) {
        for event in self.pending.drain(..) {
            if let Some(s) = sink.as_mut() {
                s.on_event(&event);
            }
            for listener in &mut self.listeners {
                listener.on_event(&event);
            }
            if self.outbox.len() >= self.outbox_capacity {
                self.outbox.pop_front();
                self.dropped += 1;
            }
            self.outbox.push_back(event);
        }
    }

    /// Drain the outbox. Embedder-facing; call between ticks.
    pub fn take_events(&mut self) -> Vec<Event> {
        self.outbox.drain(..).collect()
    }

    /// Events lost to outbox overflow since construction.
    pub fn dropped_events(&self) -> u64 {
        self.dropped
    }
}

// ===========================================================================
// Tests
// ===========================================================================
