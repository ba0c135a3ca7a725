use crate::{
    error::{Error, Result},
    point::{Axis, Point, Position},
    search::Classification,
};

/// A line segment between two points.
pub type Segment = [Point; 2];

/// An axis-aligned rectangle with positive area.
///
/// Rectangles are half-open: a point `p` lies inside iff `min_x < p.x <= max_x` and
/// `min_y < p.y <= max_y`. Two rectangles sharing an edge therefore never both contain a point
/// lying on that edge, which is what lets sibling tree regions partition their parent exactly.
///
/// The bounds are always strictly increasing; operations that would produce an empty or degenerate
/// rectangle return [`None`] instead. Upper bounds are always finite. A lower bound is finite too,
/// except in the regions of trees holding a point at `-f64::MAX`, whose excluded lower bound is
/// `-∞`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rectangle {
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
}

impl Rectangle {
    /// Creates a new [`Rectangle`] from its bounds.
    ///
    /// Returns [`Error::InvalidRegion`] if a bound is not finite or if `min_x >= max_x` or
    /// `min_y >= max_y`.
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Result<Self> {
        (min_x.is_finite() && min_y.is_finite())
            .then(|| Self::checked(min_x, max_x, min_y, max_y))
            .flatten()
            .ok_or(Error::InvalidRegion {
                min_x,
                max_x,
                min_y,
                max_y,
            })
    }

    // Finite upper bounds strictly above the lower ones, which are then either finite or `-∞`.
    #[inline]
    fn checked(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Option<Self> {
        let finite = max_x.is_finite() && max_y.is_finite();

        (finite && min_x < max_x && min_y < max_y).then_some(Self {
            min_x,
            max_x,
            min_y,
            max_y,
        })
    }

    /// Creates the closed bounding box of the given points as a [`Rectangle`].
    ///
    /// Returns [`None`] if there are no points or if they all share the same `x` or `y`
    /// coordinate, as the box would have no area.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator,
        I::Item: Position,
    {
        let [min_x, max_x, min_y, max_y] = bounds(points)?;
        Self::checked(min_x, max_x, min_y, max_y)
    }

    /// Creates the smallest [`Rectangle`] containing every given point under the half-open rule.
    ///
    /// Its upper bounds are the greatest coordinates and its lower bounds the largest values
    /// strictly below the smallest coordinates, so the result has positive area even for a single
    /// point. A lower bound is `-∞` when the smallest coordinate is `-f64::MAX`. Returns [`None`] if
    /// there are no points or a coordinate is not finite.
    pub fn enclosing<I>(points: I) -> Option<Self>
    where
        I: IntoIterator,
        I::Item: Position,
    {
        let [min_x, max_x, min_y, max_y] = bounds(points)?;
        Self::checked(min_x.next_down(), max_x, min_y.next_down(), max_y)
    }

    /// Lower `x` bound, excluded.
    #[inline]
    pub const fn min_x(&self) -> f64 {
        self.min_x
    }

    /// Upper `x` bound, included.
    #[inline]
    pub const fn max_x(&self) -> f64 {
        self.max_x
    }

    /// Lower `y` bound, excluded.
    #[inline]
    pub const fn min_y(&self) -> f64 {
        self.min_y
    }

    /// Upper `y` bound, included.
    #[inline]
    pub const fn max_y(&self) -> f64 {
        self.max_y
    }

    /// Lower bound along the given axis.
    #[inline]
    pub const fn min(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.min_x,
            Axis::Y => self.min_y,
        }
    }

    /// Upper bound along the given axis.
    #[inline]
    pub const fn max(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.max_x,
            Axis::Y => self.max_y,
        }
    }

    /// Width of the rectangle, infinite if its lower `x` bound is `-∞`.
    #[inline]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height of the rectangle, infinite if its lower `y` bound is `-∞`.
    #[inline]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Center of the rectangle.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(
            self.min_x.midpoint(self.max_x),
            self.min_y.midpoint(self.max_y),
        )
    }

    /// Returns true if the point lies inside this rectangle.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        self.min_x < point.x
            && point.x <= self.max_x
            && self.min_y < point.y
            && point.y <= self.max_y
    }

    /// Returns the largest rectangle contained in both `self` and `other`, or [`None`] if they do
    /// not overlap with positive area.
    #[inline]
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        Self::checked(
            self.min_x.max(other.min_x),
            self.max_x.min(other.max_x),
            self.min_y.max(other.min_y),
            self.max_y.min(other.max_y),
        )
    }

    /// Returns true if every point inside `self` is also inside `other`.
    #[inline]
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.intersect(other) == Some(*self)
    }

    /// Classifies this rectangle against a query rectangle.
    #[inline]
    pub fn classify(&self, query: &Self) -> Classification {
        match self.intersect(query) {
            None => Classification::Disjoint,
            Some(overlap) if overlap == *self => Classification::Contained,
            Some(_) => Classification::Partial,
        }
    }

    /// Clips this rectangle to the half-plane of points whose coordinate along `axis` is at most
    /// `line`.
    pub fn split_below(&self, line: f64, axis: Axis) -> Option<Self> {
        if self.max(axis) <= line {
            Some(*self)
        } else if self.min(axis) >= line {
            None
        } else {
            Some(self.with_bounds(axis, self.min(axis), line))
        }
    }

    /// Clips this rectangle to the half-plane of points whose coordinate along `axis` is strictly
    /// greater than `line`.
    pub fn split_above(&self, line: f64, axis: Axis) -> Option<Self> {
        if self.min(axis) >= line {
            Some(*self)
        } else if self.max(axis) <= line {
            None
        } else {
            Some(self.with_bounds(axis, line, self.max(axis)))
        }
    }

    // Only called with `min < max`, both taken from or strictly inside the current bounds.
    #[inline]
    fn with_bounds(&self, axis: Axis, min: f64, max: f64) -> Self {
        match axis {
            Axis::X => Self {
                min_x: min,
                max_x: max,
                ..*self
            },
            Axis::Y => Self {
                min_y: min,
                max_y: max,
                ..*self
            },
        }
    }

    /// Splits this rectangle at its center into four quadrants ordered north-east, north-west,
    /// south-west and south-east.
    ///
    /// Returns [`None`] when the rectangle is too small for its center to fall strictly between
    /// its bounds on both axes.
    pub fn quarter(&self) -> Option<[Self; 4]> {
        let Point { x: cx, y: cy } = self.center();
        if !(self.min_x < cx && cx < self.max_x && self.min_y < cy && cy < self.max_y) {
            return None;
        }

        Some([
            Self::checked(cx, self.max_x, cy, self.max_y)?,
            Self::checked(self.min_x, cx, cy, self.max_y)?,
            Self::checked(self.min_x, cx, self.min_y, cy)?,
            Self::checked(cx, self.max_x, self.min_y, cy)?,
        ])
    }

    /// Returns the square [`Rectangle`] sharing this rectangle's lower corner whose side is the
    /// larger of its width and height, or this rectangle if that square is not representable.
    pub fn squared(&self) -> Self {
        let side = self.width().max(self.height());

        Self::checked(
            self.min_x,
            (self.min_x + side).max(self.max_x),
            self.min_y,
            (self.min_y + side).max(self.max_y),
        )
        .unwrap_or(*self)
    }

    /// Restricts a query to the extent of indexed data.
    ///
    /// `extent` is the [enclosing](Self::enclosing) rectangle of the data. Upper bounds are
    /// clipped to the data maxima. A lower bound at or below the smallest coordinate of the data
    /// is widened to the extent's own lower bound, so that data on its lowest row or column is
    /// reported, as if the extent were the closed bounding box of the data.
    pub fn clip_to_extent(&self, extent: &Self) -> Option<Self> {
        let lower = |axis: Axis| {
            if self.min(axis) <= extent.min(axis).next_up() {
                extent.min(axis)
            } else {
                self.min(axis)
            }
        };

        Self::checked(
            lower(Axis::X),
            self.max_x.min(extent.max_x),
            lower(Axis::Y),
            self.max_y.min(extent.max_y),
        )
    }

    /// Returns the four edges of the rectangle, in counter-clockwise order starting with the
    /// bottom one.
    pub fn edges(&self) -> [Segment; 4] {
        let bottom_left = Point::new(self.min_x, self.min_y);
        let bottom_right = Point::new(self.max_x, self.min_y);
        let top_right = Point::new(self.max_x, self.max_y);
        let top_left = Point::new(self.min_x, self.max_y);

        [
            [bottom_left, bottom_right],
            [bottom_right, top_right],
            [top_right, top_left],
            [top_left, bottom_left],
        ]
    }
}

// Returns `[min_x, max_x, min_y, max_y]` of the points, or `None` if there are none or one is not
// finite.
fn bounds<I>(points: I) -> Option<[f64; 4]>
where
    I: IntoIterator,
    I::Item: Position,
{
    let mut points = points.into_iter().map(|p| p.position());
    let first = points.next().filter(|p| p.is_finite())?;

    points.try_fold([first.x, first.x, first.y, first.y], |[min_x, max_x, min_y, max_y], p| {
        p.is_finite()
            .then(|| [min_x.min(p.x), max_x.max(p.x), min_y.min(p.y), max_y.max(p.y)])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Rectangle {
        Rectangle::new(min_x, max_x, min_y, max_y).unwrap()
    }

    #[test]
    fn rejects_degenerate_bounds() {
        assert!(matches!(
            Rectangle::new(1.0, 1.0, 0.0, 2.0),
            Err(Error::InvalidRegion { .. })
        ));
        assert!(Rectangle::new(0.0, 2.0, 3.0, -1.0).is_err());
        assert!(Rectangle::new(f64::NAN, 1.0, 0.0, 1.0).is_err());
        assert!(Rectangle::new(0.0, f64::INFINITY, 0.0, 1.0).is_err());
        assert!(Rectangle::new(f64::NEG_INFINITY, 1.0, 0.0, 1.0).is_err());
    }

    #[test]
    fn half_open_membership() {
        let r = rect(0.0, 1.0, 0.0, 1.0);

        assert!(r.contains(Point::new(1.0, 1.0)));
        assert!(r.contains(Point::new(0.5, 1.0)));
        assert!(!r.contains(Point::new(0.0, 0.5)));
        assert!(!r.contains(Point::new(0.5, 0.0)));
        assert!(!r.contains(Point::new(1.0 + 1e-12, 0.5)));
    }

    #[test]
    fn intersection() {
        let a = rect(0.0, 4.0, 0.0, 4.0);
        let b = rect(2.0, 6.0, -1.0, 3.0);

        assert_eq!(a.intersect(&b), Some(rect(2.0, 4.0, 0.0, 3.0)));
        assert_eq!(a.intersect(&b), b.intersect(&a));
        // Touching along an edge has no area.
        assert_eq!(a.intersect(&rect(4.0, 5.0, 0.0, 4.0)), None);
        assert_eq!(a.intersect(&rect(5.0, 6.0, 5.0, 6.0)), None);
    }

    #[test]
    fn subset_ordering() {
        let outer = rect(0.0, 10.0, 0.0, 10.0);
        let inner = rect(2.0, 3.0, 2.0, 10.0);

        assert!(inner.is_subset_of(&outer));
        assert!(!outer.is_subset_of(&inner));
        assert!(outer.is_subset_of(&outer));
        assert!(!rect(-1.0, 3.0, 2.0, 3.0).is_subset_of(&outer));
    }

    #[test]
    fn classification() {
        let query = rect(0.0, 10.0, 0.0, 10.0);

        assert_eq!(rect(1.0, 2.0, 1.0, 2.0).classify(&query), Classification::Contained);
        assert_eq!(rect(11.0, 12.0, 1.0, 2.0).classify(&query), Classification::Disjoint);
        assert_eq!(rect(9.0, 12.0, 1.0, 2.0).classify(&query), Classification::Partial);
        assert_eq!(rect(10.0, 12.0, 1.0, 2.0).classify(&query), Classification::Disjoint);
    }

    #[test]
    fn half_plane_splits() {
        let r = rect(0.0, 4.0, 0.0, 2.0);

        assert_eq!(r.split_below(1.0, Axis::X), Some(rect(0.0, 1.0, 0.0, 2.0)));
        assert_eq!(r.split_above(1.0, Axis::X), Some(rect(1.0, 4.0, 0.0, 2.0)));
        assert_eq!(r.split_below(0.5, Axis::Y), Some(rect(0.0, 4.0, 0.0, 0.5)));
        assert_eq!(r.split_above(0.5, Axis::Y), Some(rect(0.0, 4.0, 0.5, 2.0)));

        // Entirely on one side.
        assert_eq!(r.split_below(4.0, Axis::X), Some(r));
        assert_eq!(r.split_above(4.0, Axis::X), None);
        assert_eq!(r.split_below(0.0, Axis::Y), None);
        assert_eq!(r.split_above(-3.0, Axis::Y), Some(r));
    }

    #[test]
    fn point_on_split_line_goes_to_one_side() {
        let r = rect(0.0, 4.0, 0.0, 4.0);
        let on_line = Point::new(2.0, 1.0);

        let below = r.split_below(2.0, Axis::X).unwrap();
        let above = r.split_above(2.0, Axis::X).unwrap();

        assert!(below.contains(on_line));
        assert!(!above.contains(on_line));
    }

    #[test]
    fn bounding_boxes() {
        assert_eq!(Rectangle::from_points([(2.0, 2.0), (2.0, 5.0)]), None);
        assert_eq!(
            Rectangle::from_points([(1.0, 4.0), (3.0, 2.0), (2.0, 7.0)]),
            Some(rect(1.0, 3.0, 2.0, 7.0))
        );
        assert_eq!(Rectangle::from_points(Vec::<Point>::new()), None);
        assert_eq!(Rectangle::from_points([(f64::NAN, 0.0), (1.0, 1.0)]), None);
    }

    #[test]
    fn enclosing_contains_every_point() {
        let points = [Point::new(2.0, 2.0), Point::new(2.0, 5.0), Point::new(-1.0, 5.0)];
        let r = Rectangle::enclosing(points).unwrap();

        assert!(points.iter().all(|&p| r.contains(p)));
        assert_eq!(r.max_x(), 2.0);
        assert_eq!(r.min_x(), (-1.0f64).next_down());

        let single = Rectangle::enclosing([Point::new(3.0, 3.0)]).unwrap();
        assert!(single.contains(Point::new(3.0, 3.0)));
        assert!(Rectangle::enclosing([(f64::INFINITY, 0.0)]).is_none());
    }

    #[test]
    fn enclosing_the_lowest_finite_value() {
        let low = Point::new(-f64::MAX, 0.0);
        let r = Rectangle::enclosing([low, Point::new(0.0, 1.0)]).unwrap();

        assert_eq!(r.min_x(), f64::NEG_INFINITY);
        assert!(r.contains(low));
        assert_eq!(r.quarter(), None);

        let below = r.split_below(-1.0, Axis::X).unwrap();
        assert!(below.contains(low));
        assert_eq!(below.min_x(), f64::NEG_INFINITY);

        let query = rect(-f64::MAX, 1.0, -1.0, 1.0);
        let clipped = query.clip_to_extent(&r).unwrap();
        assert!(clipped.contains(low));
        assert_eq!(r.classify(&clipped), Classification::Contained);
        assert!(!query.contains(low));
    }

    #[test]
    fn quarters_partition_the_rectangle() {
        let r = rect(0.0, 4.0, 0.0, 2.0);
        let [ne, nw, sw, se] = r.quarter().unwrap();

        assert_eq!(ne, rect(2.0, 4.0, 1.0, 2.0));
        assert_eq!(nw, rect(0.0, 2.0, 1.0, 2.0));
        assert_eq!(sw, rect(0.0, 2.0, 0.0, 1.0));
        assert_eq!(se, rect(2.0, 4.0, 0.0, 1.0));

        for p in [(2.0, 1.0), (2.0, 2.0), (4.0, 1.0), (0.5, 1.0), (3.0, 0.5)] {
            let p = Point::from(p);
            let holders = [ne, nw, sw, se].iter().filter(|q| q.contains(p)).count();
            assert_eq!(holders, 1, "{p:?}");
        }

        let tiny = rect(1.0, 1.0f64.next_up(), 0.0, 1.0);
        assert_eq!(tiny.quarter(), None);
    }

    #[test]
    fn squaring_keeps_lower_corner() {
        let r = rect(0.0, 4.0, 1.0, 2.0);
        let s = r.squared();

        assert_eq!(s, rect(0.0, 4.0, 1.0, 5.0));
        assert!(r.is_subset_of(&s));
    }

    #[test]
    fn extent_clipping() {
        let extent = Rectangle::enclosing([(1.0, 1.0), (3.0, 3.0)]).unwrap();

        let clipped = rect(1.0, 4.0, 1.0, 4.0).clip_to_extent(&extent).unwrap();
        assert!(clipped.contains(Point::new(1.0, 1.0)));
        assert!(clipped.contains(Point::new(3.0, 3.0)));

        let clipped = rect(2.0, 4.0, 0.0, 1.0).clip_to_extent(&extent).unwrap();
        assert!(!clipped.contains(Point::new(2.0, 1.0)));
        assert!(clipped.contains(Point::new(3.0, 1.0)));

        assert_eq!(rect(4.0, 5.0, 0.0, 5.0).clip_to_extent(&extent), None);
    }

    #[test]
    fn edges_form_a_closed_loop() {
        let edges = rect(0.0, 2.0, 0.0, 1.0).edges();

        for i in 0..4 {
            assert_eq!(edges[i][1], edges[(i + 1) % 4][0]);
        }
        assert_eq!(edges[0], [Point::new(0.0, 0.0), Point::new(2.0, 0.0)]);
    }
}
