#![warn(missing_docs)]
//! # Orthrange
//!
//! Orthrange is a crate providing static indexes answering orthogonal range queries over points
//! of the plane in Rust: given a set of points, build an index once, then ask it for every point
//! inside any axis-aligned rectangle much faster than by scanning all of them.
//!
//! ## Goals
//!
//! The main goal of this crate is to provide two classic spatial indexes with exact and
//! predictable semantics, so that they can be compared against each other and dropped into
//! existing applications that need rectangle queries over a fixed set of locations. Indexes are
//! immutable once built: there is no insertion, removal or nearest-neighbour search.
//!
//! ### Indexes
//!
//! There are currently 2 indexes:
//! a [k-d tree](https://en.wikipedia.org/wiki/K-d_tree) ([`KdTree`]) and a
//! [region quadtree](https://en.wikipedia.org/wiki/Quadtree) ([`Quadtree`]).
//!
//! The k-d tree bisects its points at the median of one coordinate at each level and tracks the
//! region each subtree is responsible for, which lets it report whole subtrees lying inside a query
//! without visiting them. The quadtree recursively quarters a square around the points; its shape
//! only depends on where the points are, not on how many share a region.
//!
//! Both use the same [`Rectangle`] algebra and the same pruning rule, described by
//! [`Classification`]: a subtree whose region lies inside the query is reported as a whole, one
//! whose region misses the query is skipped and any other is visited.
//!
//! Orthrange uses [rayon](https://github.com/rayon-rs/rayon) to answer batches of queries in
//! parallel. Enable the `parallel` feature to access the [`parallel`] module.
//!
//! ## Using Orthrange
//!
//! ### Half-open rectangles
//!
//! A point `p` lies inside a [`Rectangle`] iff `min_x < p.x <= max_x` and `min_y < p.y <= max_y`.
//! Points on the lower edges of a query are not reported, points on its upper edges are. This is
//! what makes the regions of sibling nodes partition their parent without sharing the points on
//! the line between them.
//!
//! ### Building and searching
//!
//! Trees can be built from anything implementing [`Position`]. It is implemented for [`Point`],
//! tuples and arrays of two `f64` and, with the `glam`, `nalgebra` and `ultraviolet` features,
//! for the 2D double precision vectors of those crates. It can be derived for structs with a
//! `position` field:
//!
//! ```
//! use orthrange::prelude::*;
//!
//! #[derive(Position, Clone, Debug, PartialEq)]
//! struct Station {
//!     id: u32,
//!     position: Point,
//! }
//!
//! let stations = vec![
//!     Station { id: 0, position: Point::new(2.0, 3.0) },
//!     Station { id: 1, position: Point::new(8.0, 1.0) },
//!     Station { id: 2, position: Point::new(5.0, 5.0) },
//! ];
//!
//! let tree = KdTree::new(stations.clone())?;
//! let found = tree.search(0.0, 5.0, 0.0, 5.0)?;
//!
//! assert_eq!(found.len(), 2);
//! assert!(found.iter().all(|s| s.id != 1));
//! # Ok::<(), orthrange::Error>(())
//! ```
//!
//! The `search` methods of the trees clip the query to the extent of the indexed points first,
//! treating it as a closed box: a query whose lower edge lies at or below the smallest
//! coordinate of the data reports the points lying on that coordinate. The [`RangeSearch`]
//! trait implemented by both trees applies the half-open rule as is.
//!
//! ```
//! use orthrange::prelude::*;
//!
//! let grid: Vec<_> = (1..=3)
//!     .flat_map(|x| (1..=3).map(move |y| Point::new(x as f64, y as f64)))
//!     .collect();
//! let query = Rectangle::new(1.0, 4.0, 1.0, 4.0)?;
//!
//! let tree = Quadtree::new(grid.iter().copied())?;
//! assert_eq!(tree.search(&query).len(), 9);
//! assert_eq!(tree.query(&query).len(), 4);
//! assert_eq!(BruteForce(&grid[..]).query(&query).len(), 4);
//! # Ok::<(), orthrange::Error>(())
//! ```

/// Errors returned by this crate.
pub mod error;

/// Random test data.
pub mod generate;

/// K-d tree index.
pub mod kdtree;

/// Range queries answered in parallel.
#[cfg(feature = "parallel")]
pub mod parallel;

/// Points, axes and the [`Position`] trait.
pub mod point;

/// Quadtree index.
pub mod quadtree;

/// Axis-aligned rectangles.
pub mod rectangle;

/// Range search trait and shared query logic.
pub mod search;

/// Arena tree storage.
pub mod tree;

mod impls;

#[cfg(test)]
pub(crate) mod tests;

pub use error::{Error, Result};
pub use kdtree::{KdTree, SplitPolicy};
pub use point::{Axis, Point, Position};
pub use quadtree::{Quadrant, Quadtree};
pub use rectangle::{Rectangle, Segment};
pub use search::{BruteForce, Classification, RangeSearch};

/// Derive macro for types with a `position` field.
pub mod orthrange_derive {
    pub use orthrange_derive::Position;
}

/// Everything needed to use the crate.
pub mod prelude {
    pub use crate::orthrange_derive::*;
    pub use crate::{
        Axis, BruteForce, Classification, Error, KdTree, Point, Position, Quadrant, Quadtree,
        RangeSearch, Rectangle, Segment, SplitPolicy,
    };
}
