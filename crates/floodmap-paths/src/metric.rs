use floodmap_core::Point;

/// Distance metric of a [`DistanceGrid`](crate::DistanceGrid).
///
/// Besides the cost formula, the metric decides the movement neighbourhood
/// used by the flood fill: only [`Metric::ChebyshevLike`] allows diagonal
/// steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Metric {
    /// Manhattan (L1) cost, 4-way movement.
    Orthogonal,
    /// Chebyshev (L∞) cost, 8-way movement.
    ChebyshevLike,
    /// Euclidean cost rounded to the nearest integer, 4-way movement.
    #[default]
    StraightLine,
}

impl Metric {
    /// Cost between `a` and `b` under this metric.
    #[inline]
    pub fn cost(self, a: Point, b: Point) -> i32 {
        match self {
            Metric::Orthogonal => manhattan(a, b),
            Metric::ChebyshevLike => chebyshev(a, b),
            Metric::StraightLine => straight_line(a, b),
        }
    }

    /// Whether the flood fill may step diagonally under this metric.
    #[inline]
    pub fn allows_diagonal(self) -> bool {
        matches!(self, Metric::ChebyshevLike)
    }
}

#[inline]
fn deltas(a: Point, b: Point) -> (i64, i64) {
    (
        (i64::from(b.x) - i64::from(a.x)).abs(),
        (i64::from(b.y) - i64::from(a.y)).abs(),
    )
}

#[inline]
fn clamp_i32(v: i64) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    let (dx, dy) = deltas(a, b);
    clamp_i32(dx + dy)
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    let (dx, dy) = deltas(a, b);
    clamp_i32(dx.max(dy))
}

/// Euclidean distance between two points, rounded half away from zero.
///
/// The square root of an integer is never exactly `k + 0.5`, so the rounding
/// direction of ties cannot be observed here.
#[inline]
pub fn straight_line(a: Point, b: Point) -> i32 {
    let (dx, dy) = deltas(a, b);
    let (dx, dy) = (dx as f64, dy as f64);
    // `as` saturates at i32::MAX.
    (dx * dx + dy * dy).sqrt().round() as i32
}
