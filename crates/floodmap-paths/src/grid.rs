//! The [`DistanceGrid`] type — a dense per-tile distance store.

use floodmap_core::{Point, Range};

use crate::Metric;

/// Sentinel distance meaning "no path to any goal".
///
/// The flood fill never adds to this value, so no accumulated distance can
/// collide with it.
pub const UNREACHABLE: i32 = i32::MAX;

/// A `width × height` grid of distances to the nearest goal.
///
/// Every in-bounds tile holds exactly one value, initially [`UNREACHABLE`].
/// Out-of-bounds reads report [`UNREACHABLE`] and out-of-bounds writes are
/// ignored, so no accessor can fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceGrid {
    rng: Range,
    width: usize,
    metric: Metric,
    cells: Vec<i32>,
}

impl DistanceGrid {
    /// Create a grid with every tile unreachable.
    ///
    /// Non-positive dimensions are clamped to zero, which yields an empty
    /// grid where every coordinate is out of bounds.
    pub fn new(width: i32, height: i32, metric: Metric) -> Self {
        let rng = Range::new(0, 0, width.max(0), height.max(0));
        Self::with_cells(rng, metric, vec![UNREACHABLE; rng.len()])
    }

    /// Wrap `cells`, which must hold exactly `rng.len()` values.
    fn with_cells(rng: Range, metric: Metric, cells: Vec<i32>) -> Self {
        Self {
            rng,
            width: if rng.is_empty() { 0 } else { rng.width() as usize },
            metric,
            cells,
        }
    }

    /// Stored distance at `p`, or [`UNREACHABLE`] outside the grid.
    #[inline]
    pub fn get(&self, p: Point) -> i32 {
        match self.idx(p) {
            Some(i) => self.cells[i],
            None => UNREACHABLE,
        }
    }

    /// Store `distance` at `p`. No-op outside the grid.
    #[inline]
    pub fn set(&mut self, p: Point, distance: i32) {
        if let Some(i) = self.idx(p) {
            self.cells[i] = distance;
        }
    }

    /// Whether `p` is a tile of this grid.
    #[inline]
    pub fn within_bounds(&self, p: Point) -> bool {
        self.rng.contains(p)
    }

    /// Whether `p` holds a real distance.
    #[inline]
    pub fn is_reachable(&self, p: Point) -> bool {
        self.get(p) != UNREACHABLE
    }

    /// `(width, height)` of the grid.
    #[inline]
    pub fn dimensions(&self) -> (i32, i32) {
        (self.rng.width(), self.rng.height())
    }

    /// The rectangle of tiles covered by the grid.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    #[inline]
    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// Change the metric. Stored distances are left untouched; the new
    /// metric applies from the next generation on.
    #[inline]
    pub fn set_metric(&mut self, metric: Metric) {
        self.metric = metric;
    }

    /// Reset every tile to [`UNREACHABLE`].
    pub fn clear(&mut self) {
        self.cells.fill(UNREACHABLE);
    }

    /// Step cost between two tiles under the grid's metric.
    #[inline]
    pub fn pairwise_cost(&self, a: Point, b: Point) -> i32 {
        self.metric.cost(a, b)
    }

    /// Number of tiles holding a real distance.
    pub fn reachable_count(&self) -> usize {
        self.cells.iter().filter(|&&d| d != UNREACHABLE).count()
    }

    /// Row-major iterator over `(Point, distance)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, i32)> + '_ {
        self.rng.iter().zip(self.cells.iter().copied())
    }

    /// Flat index of `p`, or `None` outside the grid.
    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        Some(p.y as usize * self.width + p.x as usize)
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::*;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize)]
    struct GridRef<'a> {
        width: i32,
        height: i32,
        metric: Metric,
        cells: &'a [i32],
    }

    #[derive(Deserialize)]
    struct GridOwned {
        width: i32,
        height: i32,
        metric: Metric,
        cells: Vec<i32>,
    }

    impl Serialize for DistanceGrid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let (width, height) = self.dimensions();
            GridRef {
                width,
                height,
                metric: self.metric,
                cells: &self.cells,
            }
            .serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for DistanceGrid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let raw = GridOwned::deserialize(deserializer)?;
            let (w, h) = (raw.width.max(0), raw.height.max(0));
            // Checked before anything is allocated for the declared size.
            let expected = (w as usize).checked_mul(h as usize);
            if expected != Some(raw.cells.len()) {
                return Err(serde::de::Error::custom(format!(
                    "{} cells do not fill a {}x{} grid",
                    raw.cells.len(),
                    raw.width,
                    raw.height
                )));
            }
            let rng = Range::new(0, 0, w, h);
            Ok(DistanceGrid::with_cells(rng, raw.metric, raw.cells))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_fully_unreachable() {
        let g = DistanceGrid::new(4, 3, Metric::Orthogonal);
        assert_eq!(g.dimensions(), (4, 3));
        for p in g.range() {
            assert_eq!(g.get(p), UNREACHABLE);
            assert!(!g.is_reachable(p));
        }
        assert_eq!(g.reachable_count(), 0);
    }

    #[test]
    fn set_and_get() {
        let mut g = DistanceGrid::new(4, 3, Metric::Orthogonal);
        g.set(Point::new(3, 2), 7);
        assert_eq!(g.get(Point::new(3, 2)), 7);
        assert!(g.is_reachable(Point::new(3, 2)));
        // neighbours untouched
        assert_eq!(g.get(Point::new(2, 2)), UNREACHABLE);
        assert_eq!(g.get(Point::new(3, 1)), UNREACHABLE);
    }

    #[test]
    fn out_of_bounds_reads_and_writes() {
        let mut g = DistanceGrid::new(4, 3, Metric::Orthogonal);
        for p in [
            Point::new(-1, 0),
            Point::new(0, -1),
            Point::new(4, 0),
            Point::new(0, 3),
            Point::new(i32::MAX, i32::MIN),
        ] {
            assert!(!g.within_bounds(p));
            g.set(p, 1);
            assert_eq!(g.get(p), UNREACHABLE);
            assert!(!g.is_reachable(p));
        }
        assert_eq!(g.reachable_count(), 0);
    }

    #[test]
    fn clear_resets_every_cell() {
        let mut g = DistanceGrid::new(5, 5, Metric::ChebyshevLike);
        for (i, p) in g.range().iter().enumerate() {
            g.set(p, i as i32);
        }
        assert_eq!(g.reachable_count(), 25);
        g.clear();
        assert!(g.iter().all(|(_, d)| d == UNREACHABLE));
    }

    #[test]
    fn metric_can_change_without_touching_cells() {
        let mut g = DistanceGrid::new(3, 3, Metric::Orthogonal);
        g.set(Point::new(1, 1), 4);
        g.set_metric(Metric::ChebyshevLike);
        assert_eq!(g.metric(), Metric::ChebyshevLike);
        assert_eq!(g.get(Point::new(1, 1)), 4);
        assert_eq!(g.pairwise_cost(Point::new(0, 0), Point::new(2, 1)), 2);
        g.set_metric(Metric::Orthogonal);
        assert_eq!(g.pairwise_cost(Point::new(0, 0), Point::new(2, 1)), 3);
    }

    #[test]
    fn iter_is_row_major() {
        let mut g = DistanceGrid::new(3, 2, Metric::Orthogonal);
        g.set(Point::new(0, 1), 9);
        let cells: Vec<_> = g.iter().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[3], (Point::new(0, 1), 9));
        assert_eq!(cells[2], (Point::new(2, 0), UNREACHABLE));
    }

    #[test]
    fn degenerate_dimensions_clamp_to_empty() {
        for (w, h) in [(0, 0), (0, 5), (5, 0), (-3, 4), (-1, -1)] {
            let mut g = DistanceGrid::new(w, h, Metric::default());
            assert_eq!(g.dimensions(), (w.max(0), h.max(0)));
            assert!(!g.within_bounds(Point::ZERO));
            g.set(Point::ZERO, 0);
            assert_eq!(g.get(Point::ZERO), UNREACHABLE);
            g.clear();
            assert_eq!(g.iter().count(), 0);
        }
    }
}
