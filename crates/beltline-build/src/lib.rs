//! Beltline Build -- placement tooling on top of the simulation core.
//!
//! This crate turns pointer-style input into queued engine edits: an
//! L-shaped drag rasterizer with ghost previews, a build session state
//! machine, and (behind the `layout-io` feature) JSON save/load of
//! committed layouts. Ghosts are pure previews; nothing here touches the
//! network directly, and nothing is reserved or simulated until the
//! engine applies the queued edits at its next tick.

pub mod path;
pub mod session;

#[cfg(feature = "layout-io")]
pub mod layout;
