//! Shared helpers for tests. Compiled for this crate's own tests and for
//! downstream crates through the `test-utils` feature.

use crate::config::SimConfig;
use crate::engine::Engine;
use crate::event::EventKind;
use crate::fixedmath::f64_to_fixed64;
use crate::grid::{Direction, GridCell, Orientation};
use crate::segment::{ConverterConfig, SegmentKind, SpawnerConfig, TrashConfig};

/// Standard test registry: items "egg" and "chicken", products "eggs" and
/// "chickens", belt speed 2.0, timestep 0.05. One cell crosses in ten
/// ticks at these settings.
pub fn test_config() -> SimConfig {
    let mut config = SimConfig::new(f64_to_fixed64(2.0), f64_to_fixed64(0.05));
    config.register_item("egg");
    config.register_item("chicken");
    config.register_product("eggs");
    config.register_product("chickens");
    config
}

pub fn test_engine() -> Engine {
    Engine::new(test_config()).expect("test config is valid")
}

pub fn spawner_kind(config: &SimConfig, item: &str, product: &str, interval: f64) -> SegmentKind {
    SegmentKind::Spawner(SpawnerConfig {
        item_type: config.item_id(item).expect("registered item"),
        product: config.product_id(product).expect("registered product"),
        interval: f64_to_fixed64(interval),
    })
}

pub fn converter_kind(
    config: &SimConfig,
    input: &str,
    output: &str,
    product: &str,
    conversion_time: f64,
) -> SegmentKind {
    SegmentKind::Converter(ConverterConfig {
        input: config.item_id(input).expect("registered item"),
        output: config.item_id(output).expect("registered item"),
        product: config.product_id(product).expect("registered product"),
        conversion_time: f64_to_fixed64(conversion_time),
        eject_impulse: f64_to_fixed64(5.0),
    })
}

pub fn trash_kind() -> SegmentKind {
    SegmentKind::Trash(TrashConfig {
        disposal_delay: f64_to_fixed64(0.5),
        throw_impulse: f64_to_fixed64(8.0),
    })
}

/// Queue a run of belts from `start`, stepping once to commit them.
/// Returns the cells in placement order.
pub fn place_chain(engine: &mut Engine, start: GridCell, dir: Direction, len: usize) -> Vec<GridCell> {
    let mut cells = Vec::with_capacity(len);
    let mut cell = start;
    for _ in 0..len {
        engine
            .queue_place(cell, SegmentKind::Belt, Orientation::from_direction(dir))
            .expect("belt placement cannot fail validation");
        cells.push(cell);
        cell = cell.neighbor(dir);
    }
    engine.step();
    cells
}

pub fn run_ticks(engine: &mut Engine, n: u64) {
    for _ in 0..n {
        engine.step();
    }
}

/// Event kinds delivered since the last drain.
pub fn drain_kinds(engine: &mut Engine) -> Vec<EventKind> {
    engine.take_events().iter().map(|e| e.kind()).collect()
}

/// Items currently owned by some slot. Equal to `items_in_flight` whenever
/// single ownership holds.
pub fn held_items(engine: &Engine) -> usize {
    engine
        .network()
        .iter_ordered()
        .filter_map(|(id, _)| engine.slot(id).and_then(|s| s.item()))
        .count()
}
