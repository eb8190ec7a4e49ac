use floodmap_core::Point;

use crate::Metric;

/// Reusable neighbour enumeration buffer.
///
/// Returns the orthogonal (4-way) or full (8-way) neighbours of a tile,
/// filtered by a predicate, without allocating after construction.
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// 4-way neighbours of `p` for which `keep` returns `true`.
    pub fn cardinal(&mut self, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        self.buf.extend(p.neighbors_4().into_iter().filter(|&n| keep(n)));
        &self.buf
    }

    /// 8-way neighbours of `p` for which `keep` returns `true`.
    pub fn all(&mut self, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        self.buf.extend(p.neighbors_8().into_iter().filter(|&n| keep(n)));
        &self.buf
    }

    /// Neighbours of `p` in the movement neighbourhood of `metric`.
    #[inline]
    pub fn for_metric(
        &mut self,
        metric: Metric,
        p: Point,
        keep: impl Fn(Point) -> bool,
    ) -> &[Point] {
        if metric.allows_diagonal() {
            self.all(p, keep)
        } else {
            self.cardinal(p, keep)
        }
    }
}
