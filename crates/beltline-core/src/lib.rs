//! Beltline Core -- the simulation engine for conveyor-network games.
//!
//! This crate provides the belt network (a grid of placed segments whose
//! shapes are inferred from neighbor connectivity), the transport state
//! machine that moves items along the network, typed simulation events,
//! objectives, and deterministic fixed-point arithmetic.
//!
//! # Five-Phase Tick Pipeline
//!
//! Each call to [`engine::Engine::step`] advances the simulation by one tick
//! through the following phases:
//!
//! 1. **Edits** -- Apply queued network edits (place/remove segments) and
//!    re-derive affected segment shapes. Topology is never mutated after
//!    this phase within the same tick.
//! 2. **Spawn** -- Spawners advance their timers and create new items.
//! 3. **Transport** -- Every segment's slot state advances by one tick's
//!    movement, in ascending placement order.
//! 4. **Post-tick** -- Buffered events are delivered to listeners and the
//!    objective board.
//! 5. **Bookkeeping** -- Increment tick counter and compute the state hash.
//!
//! # Key Types
//!
//! - [`engine::Engine`] -- Main simulation engine and pipeline orchestrator.
//! - [`network::BeltNetwork`] -- Authoritative cell-to-segment index with
//!   connectivity-driven shape derivation.
//! - [`segment::ConnectivityMask`] -- 4-bit neighbor mask resolved to a
//!   (shape, orientation) pair; pure and total over all 16 masks.
//! - [`transport::SlotState`] -- Per-segment occupancy state machine
//!   (Empty / Reserved / Occupied / Transferring / Converting / Disposing).
//! - [`event::EventBus`] -- Typed event bus with buffered post-tick delivery.
//! - [`fixedmath::Fixed64`] -- Q32.32 fixed-point type for deterministic math.

pub mod config;
pub mod edit;
pub mod engine;
pub mod event;
pub mod fixedmath;
pub mod grid;
pub mod id;
pub mod item;
pub mod network;
pub mod objective;
pub mod segment;
pub mod snapshot;
pub mod spawner;
pub mod transport;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
