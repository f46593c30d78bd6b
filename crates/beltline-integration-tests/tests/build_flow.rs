//! Build tooling against the live engine: drags, ghosts versus committed
//! shapes, and layout files.

use beltline_build::layout;
use beltline_build::path;
use beltline_build::session::{BuildAction, BuildSession};
use beltline_core::event::EventKind;
use beltline_core::grid::{GridCell, Orientation};
use beltline_core::segment::Shape;
use beltline_core::test_utils::{drain_kinds, run_ticks, spawner_kind, test_engine, trash_kind};

#[test]
fn drag_commit_builds_a_working_line() {
    let mut engine = test_engine();
    let spawner = spawner_kind(engine.config(), "egg", "eggs", 0.2);
    engine
        .queue_place(GridCell::new(-1, 0), spawner, Orientation::Deg90)
        .unwrap();
    engine
        .queue_place(GridCell::new(4, 0), trash_kind(), Orientation::Deg90)
        .unwrap();
    engine.step();

    let mut session = BuildSession::new();
    session.apply(&mut engine, BuildAction::ToggleBuildMode).unwrap();
    session
        .apply(&mut engine, BuildAction::BeginDrag(GridCell::new(0, 0)))
        .unwrap();
    session
        .apply(&mut engine, BuildAction::ExtendDrag(GridCell::new(3, 0)))
        .unwrap();
    session.apply(&mut engine, BuildAction::EndDrag).unwrap();
    engine.step();
    assert_eq!(engine.network().len(), 6);

    // The committed line carries items end to end.
    let mut disposed = false;
    for _ in 0..600 {
        engine.step();
        if drain_kinds(&mut engine).contains(&EventKind::ItemDisposed) {
            disposed = true;
            break;
        }
    }
    assert!(disposed, "drag-built line should reach the trash");
}

#[test]
fn committed_shapes_come_from_live_connectivity() {
    // Ghosts are previews; the committed elbow's orientation comes from
    // the connectivity resolver, not from the ghost table.
    let mut engine = test_engine();
    let ghost_path = path::rasterize(GridCell::new(0, 0), GridCell::new(2, 2));
    let ghosts = path::classify(&ghost_path);
    let elbow = ghosts
        .iter()
        .find(|g| g.shape == Shape::Corner)
        .expect("an L drag has an elbow");
    assert_eq!(elbow.cell, GridCell::new(2, 0));

    let mut session = BuildSession::new();
    session.apply(&mut engine, BuildAction::ToggleBuildMode).unwrap();
    session
        .apply(&mut engine, BuildAction::BeginDrag(GridCell::new(0, 0)))
        .unwrap();
    session
        .apply(&mut engine, BuildAction::ExtendDrag(GridCell::new(2, 2)))
        .unwrap();
    session.apply(&mut engine, BuildAction::EndDrag).unwrap();
    engine.step();

    let id = engine.network().get(elbow.cell).unwrap();
    let seg = engine.network().segment(id).unwrap();
    assert_eq!(seg.shape, Shape::Corner);
    // Neighbors sit left and forward of the elbow.
    assert_eq!(seg.orientation, Orientation::Deg270);
}

#[test]
fn layout_file_survives_a_session() {
    let mut engine = test_engine();
    let spawner = spawner_kind(engine.config(), "egg", "eggs", 0.2);
    engine
        .queue_place(GridCell::new(0, 0), spawner, Orientation::Deg90)
        .unwrap();
    engine
        .queue_place(GridCell::new(1, 0), trash_kind(), Orientation::Deg90)
        .unwrap();
    engine.step();
    run_ticks(&mut engine, 30);

    let json = layout::to_json(&engine.snapshot()).unwrap();
    let mut restored = test_engine();
    restored.restore(&layout::from_json(&json).unwrap()).unwrap();
    assert_eq!(restored.network().len(), 2);

    // The reloaded factory still produces.
    let mut disposed = false;
    for _ in 0..200 {
        restored.step();
        if drain_kinds(&mut restored).contains(&EventKind::ItemDisposed) {
            disposed = true;
            break;
        }
    }
    assert!(disposed);
}
