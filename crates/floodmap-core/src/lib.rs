//! **floodmap-core** — integer grid geometry.
//!
//! [`Point`] names a tile and [`Range`] names the rectangle of tiles a grid
//! covers. Both are plain `Copy` values; everything that stores per-tile
//! data lives in `floodmap-paths`.

pub mod geom;

pub use geom::{Point, Range, RangeIter};
