//! Redline annotation core - drawing surface and snapshot history
//!
//! This crate provides the pieces behind the feedback annotation canvas:
//! - [`surface::CpuSurface`] - RGBA8 raster the annotations are painted into
//! - [`drawing::DrawingSurface`] - pointer-driven freehand strokes with a draw style
//! - [`history::History`] - bounded undo/redo stacks of encoded snapshots
//! - [`annotator::Annotator`] - drawing surface and history wired together
//! - [`coords`] - client to surface coordinate mapping
//! - [`palette`] - the fixed colour palette offered to users
//! - [`snapshot`] - PNG snapshot encoding and decoding

pub mod annotator;
pub mod constants;
pub mod coords;
pub mod drawing;
pub mod history;
pub mod palette;
pub mod raster;
pub mod snapshot;
pub mod surface;
pub mod types;

pub use annotator::*;
pub use constants::*;
pub use coords::*;
pub use drawing::*;
pub use history::*;
pub use palette::*;
pub use raster::*;
pub use snapshot::*;
pub use surface::*;
pub use types::*;
