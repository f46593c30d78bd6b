//! Production objectives.
//!
//! The board is a pure observer: it counts `UnitProduced` events against a
//! bounded window of active objectives and never influences transport.
//! Objectives activate in submission order as earlier ones complete.

use crate::event::{Event, EventListener};
use crate::id::ProductType;
use std::collections::VecDeque;

/// One production goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Objective {
    pub product: ProductType,
    pub target: u32,
    pub current: u32,
    pub completed: bool,
}

impl Objective {
    pub fn new(product: ProductType, target: u32) -> Self {
        Self {
            product,
            target,
            current: 0,
            completed: false,
        }
    }
}

/// Tracks objective progression from produced units.
#[derive(Debug)]
pub struct ObjectiveBoard {
    pending: VecDeque<Objective>,
    active: Vec<Objective>,
    active_window: usize,
    completed: u64,
}

impl ObjectiveBoard {
    pub fn new(active_window: usize) -> Self {
        Self {
            pending: VecDeque::new(),
            active: Vec::new(),
            active_window: active_window.max(1),
            completed: 0,
        }
    }

    /// Queue an objective. Activates immediately if the window has room.
    pub fn add(&mut self, product: ProductType, target: u32) {
        self.pending.push_back(Objective::new(product, target));
        self.refill();
    }

    /// Currently active objectives, in activation order.
    pub fn active(&self) -> &[Objective] {
        &self.active
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Objectives completed since construction.
    pub fn completed_count(&self) -> u64 {
        self.completed
    }

    pub fn is_all_complete(&self) -> bool {
        self.pending.is_empty() && self.active.is_empty()
    }

    /// Credit one produced unit against every active objective for its
    /// product.
    pub fn record_unit(&mut self, product: ProductType) {
        for objective in &mut self.active {
            if objective.product == product && !objective.completed {
                objective.current += 1;
                if objective.current >= objective.target {
                    objective.completed = true;
                    self.completed += 1;
                }
            }
        }
        self.active.retain(|o| !o.completed);
        self.refill();
    }

    fn refill(&mut self) {
        while self.active.len() < self.active_window {
            match self.pending.pop_front() {
                Some(objective) => self.active.push(objective),
                None => break,
            }
        }
    }
}

impl EventListener for ObjectiveBoard {
    fn on_event(&mut self, event: &Event) {
        if let Event::UnitProduced { product, .. } = event {
            self.record_unit(*product);
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
