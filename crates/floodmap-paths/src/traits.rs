use floodmap_core::Point;

/// Walkability query used by the flood fill.
///
/// Implementations must be pure: the same point always yields the same
/// answer, and a query has no side effects. Any `Fn(Point) -> bool` is a
/// `Walkable`.
pub trait Walkable {
    /// Whether a unit may stand on `p`.
    fn is_walkable(&self, p: Point) -> bool;
}

impl<F> Walkable for F
where
    F: Fn(Point) -> bool,
{
    #[inline]
    fn is_walkable(&self, p: Point) -> bool {
        self(p)
    }
}
