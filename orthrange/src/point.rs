use std::fmt;

/// A location in the plane.
///
/// Points carry no identity beyond their coordinates: two equal points inserted in an index are
/// two distinct entries and are both reported by queries covering them.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a new [`Point`].
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the coordinate of this point along the given axis.
    #[inline]
    pub const fn coordinate(self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Returns true if both coordinates are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Point {
    #[inline]
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (f64, f64) {
    #[inline]
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl From<Point> for [f64; 2] {
    #[inline]
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

/// One of the two coordinate axes of the plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal axis.
    X,
    /// Vertical axis.
    Y,
}

impl Axis {
    /// Returns the axis split on at the given depth of an alternating k-d tree, `X` for even depths
    /// and `Y` for odd ones.
    #[inline]
    pub const fn of(depth: usize) -> Self {
        if depth % 2 == 0 {
            Self::X
        } else {
            Self::Y
        }
    }

    /// Returns the other axis.
    #[inline]
    pub const fn other(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}

/// Trait for types that can be located in the plane and stored in an index.
///
/// It is implemented for [`Point`], tuples and arrays of two `f64`, references to implementing
/// types and, with the corresponding features, the 2D double precision vectors of `glam`,
/// `nalgebra` and `ultraviolet`. For structs with a `position` field, it can be derived:
///
/// ```
/// use orthrange::prelude::*;
///
/// #[derive(Position, Clone)]
/// struct City {
///     name: &'static str,
///     position: (f64, f64),
/// }
///
/// let city = City { name: "Lyon", position: (4.83, 45.76) };
/// assert_eq!(city.position(), Point::new(4.83, 45.76));
/// ```
pub trait Position {
    /// Returns the location of this value.
    fn position(&self) -> Point;
}

impl Position for Point {
    #[inline]
    fn position(&self) -> Point {
        *self
    }
}

impl Position for (f64, f64) {
    #[inline]
    fn position(&self) -> Point {
        Point::from(*self)
    }
}

impl Position for [f64; 2] {
    #[inline]
    fn position(&self) -> Point {
        Point::from(*self)
    }
}

impl<P: Position + ?Sized> Position for &P {
    #[inline]
    fn position(&self) -> Point {
        P::position(self)
    }
}
