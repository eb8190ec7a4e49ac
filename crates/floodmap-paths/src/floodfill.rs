use std::collections::BinaryHeap;

use floodmap_core::Point;

use crate::grid::{DistanceGrid, UNREACHABLE};
use crate::neighbors::Neighbors;
use crate::traits::Walkable;

/// Open-list entry, ordered so that `BinaryHeap` (a max-heap) pops the
/// smallest distance first.
#[derive(Clone, Copy, PartialEq, Eq)]
struct QueueEntry {
    dist: i32,
    pos: Point,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .dist
            .cmp(&self.dist)
            .then_with(|| other.pos.cmp(&self.pos))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Multi-source flood fill over a [`DistanceGrid`].
///
/// `FloodFill` owns its open list and neighbour buffer so that repeated
/// generations reuse their allocations. It keeps no other state between
/// runs: separate instances on separate grids are fully independent.
#[derive(Default)]
pub struct FloodFill {
    open: BinaryHeap<QueueEntry>,
    nbuf: Neighbors,
}

impl FloodFill {
    /// Create an empty flood-fill generator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill `grid` with the cost from every tile to its nearest goal.
    ///
    /// The grid is cleared first. Goals outside the grid or on unwalkable
    /// tiles are skipped, as are duplicates. Expansion follows the grid's
    /// metric: 8-way for [`Metric::ChebyshevLike`], 4-way otherwise, each
    /// step costing [`DistanceGrid::pairwise_cost`]. Tiles with no walkable
    /// path to a goal keep [`UNREACHABLE`].
    ///
    /// [`Metric::ChebyshevLike`]: crate::Metric::ChebyshevLike
    pub fn generate<W: Walkable + ?Sized>(
        &mut self,
        grid: &mut DistanceGrid,
        goals: &[Point],
        walkable: &W,
    ) {
        grid.clear();
        self.open.clear();

        let mut seeded = 0usize;
        for &g in goals {
            if !grid.within_bounds(g) || !walkable.is_walkable(g) {
                log::trace!("flood fill: dropping goal {g}");
                continue;
            }
            if grid.get(g) == 0 {
                continue;
            }
            grid.set(g, 0);
            self.open.push(QueueEntry { dist: 0, pos: g });
            seeded += 1;
        }

        let settled = self.relax(grid, walkable);

        let (w, h) = grid.dimensions();
        let metric = grid.metric();
        log::debug!(
            "flood fill {w}x{h} {metric:?}: {seeded}/{} goals seeded, {settled} tiles settled",
            goals.len()
        );
    }

    /// Drain the open list into `grid`. Returns the number of tiles settled.
    fn relax<W: Walkable + ?Sized>(&mut self, grid: &mut DistanceGrid, walkable: &W) -> usize {
        let metric = grid.metric();
        let mut settled = 0usize;

        while let Some(QueueEntry { dist, pos }) = self.open.pop() {
            // Stale: a shorter path was recorded after this entry was pushed.
            if dist > grid.get(pos) {
                continue;
            }
            settled += 1;

            let keep = |n: Point| grid.within_bounds(n) && walkable.is_walkable(n);
            for &n in self.nbuf.for_metric(metric, pos, keep) {
                let nd = dist.saturating_add(grid.pairwise_cost(pos, n));
                if nd < grid.get(n) {
                    grid.set(n, nd);
                    self.open.push(QueueEntry { dist: nd, pos: n });
                }
            }
        }
        settled
    }

    /// Same as [`generate`](Self::generate) with the single goal `goal`.
    pub fn generate_from_single_goal<W: Walkable + ?Sized>(
        &mut self,
        grid: &mut DistanceGrid,
        goal: Point,
        walkable: &W,
    ) {
        self.generate(grid, &[goal], walkable);
    }
}

/// Run a one-off [`FloodFill::generate`].
pub fn generate<W: Walkable + ?Sized>(grid: &mut DistanceGrid, goals: &[Point], walkable: &W) {
    FloodFill::new().generate(grid, goals, walkable);
}

/// Run a one-off [`FloodFill::generate_from_single_goal`].
pub fn generate_from_single_goal<W: Walkable + ?Sized>(
    grid: &mut DistanceGrid,
    goal: Point,
    walkable: &W,
) {
    FloodFill::new().generate_from_single_goal(grid, goal, walkable);
}

/// Walkable tiles that hold no distance, in row-major order.
///
/// Unwalkable tiles are never reported. The grid is only read.
pub fn find_unreachable_tiles<W: Walkable + ?Sized>(
    grid: &DistanceGrid,
    walkable: &W,
) -> Vec<Point> {
    grid.iter()
        .filter(|&(p, d)| d == UNREACHABLE && walkable.is_walkable(p))
        .map(|(p, _)| p)
        .collect()
}
