//! Flood-fill distance maps for grid-based games.
//!
//! A [`DistanceGrid`] stores, for every tile of a `width × height` grid, the
//! accumulated travel cost to the nearest goal tile. [`FloodFill`] fills it
//! with a multi-source Dijkstra expansion driven by a caller-supplied
//! [`Walkable`] predicate:
//!
//! ```
//! use floodmap_core::Point;
//! use floodmap_paths::{DistanceGrid, FloodFill, Metric};
//!
//! let mut grid = DistanceGrid::new(10, 10, Metric::Orthogonal);
//! let mut ff = FloodFill::new();
//! ff.generate(&mut grid, &[Point::new(5, 5)], &|_: Point| true);
//! assert_eq!(grid.get(Point::new(0, 0)), 10);
//! ```
//!
//! # Metrics
//!
//! The grid's [`Metric`] picks both the step cost and the movement
//! neighbourhood:
//!
//! | Metric | Neighbourhood | Step cost |
//! |---|---|---|
//! | [`Metric::Orthogonal`] | 4-way | `abs(dx) + abs(dy)` |
//! | [`Metric::ChebyshevLike`] | 8-way | `max(abs(dx), abs(dy))` |
//! | [`Metric::StraightLine`] | 4-way | `round(sqrt(dx² + dy²))` |
//!
//! No operation in this crate fails: out-of-bounds reads report
//! [`UNREACHABLE`], out-of-bounds writes and unusable goals are ignored.

mod floodfill;
mod grid;
mod metric;
mod neighbors;
mod traits;

pub use floodfill::{FloodFill, find_unreachable_tiles, generate, generate_from_single_goal};
pub use grid::{DistanceGrid, UNREACHABLE};
pub use metric::{Metric, chebyshev, manhattan, straight_line};
pub use neighbors::Neighbors;
pub use traits::Walkable;
