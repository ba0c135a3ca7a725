use crate::{
    error::{Error, Result},
    point::{Axis, Point, Position},
    rectangle::{Rectangle, Segment},
    search::{self, RangeSearch},
    tree::{Branch, Cell, Node, NodeID, Tree},
};

/// Rule choosing the axis a [`KdTree`] node splits its points along.
///
/// The same policy is used for every node of a tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SplitPolicy {
    /// Split along `x` at even depths and along `y` at odd depths.
    #[default]
    Alternate,
    /// Split along the axis over which the node's points are the most spread out, preferring `x`
    /// on ties. Keeps the tree balanced on skewed data.
    WidestSpread,
}

impl SplitPolicy {
    fn axis<P: Position>(self, points: &[P], depth: usize) -> Axis {
        match self {
            Self::Alternate => Axis::of(depth),
            Self::WidestSpread => {
                if spread(points, Axis::X) >= spread(points, Axis::Y) {
                    Axis::X
                } else {
                    Axis::Y
                }
            }
        }
    }
}

fn spread<P: Position>(points: &[P], axis: Axis) -> f64 {
    let (min, max) = points.iter().map(|p| p.position().coordinate(axis)).fold(
        (f64::INFINITY, f64::NEG_INFINITY),
        |(min, max), c| (min.min(c), max.max(c)),
    );
    max - min
}

/// Split of an internal [`KdTree`] node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KdSplit {
    /// Axis the points are split along.
    pub axis: Axis,
    /// Coordinate of the splitting line along `axis`.
    pub line: f64,
    /// Child holding the points at or below the line, then child holding the points above it.
    pub children: [NodeID; 2],
}

impl Branch for KdSplit {
    #[inline]
    fn children(&self) -> &[NodeID] {
        &self.children
    }
}

/// Arena of the nodes of a [`KdTree`].
pub type KdNodes = Tree<Node<KdSplit>, Cell>;

/// Sorts `points` along `axis` and returns the coordinate of the line splitting them in two
/// non-empty halves, the ones at or below it coming first.
///
/// The line is the median coordinate, the mean of the two middle ones for an even number of points.
/// When no point lies strictly above the median, the line is lowered to the largest coordinate
/// below the maximum. Fails with [`Error::InvalidInput`] if a coordinate along `axis` is not
/// finite and with [`Error::DegenerateSplit`] if all points share the same coordinate along `axis`.
pub fn split_line<P: Position>(points: &mut [P], axis: Axis) -> Result<f64> {
    let coordinate = |p: &P| p.position().coordinate(axis);
    points.sort_by(|a, b| coordinate(a).total_cmp(&coordinate(b)));

    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return Err(Error::DegenerateSplit { axis });
    };
    let (min, max) = (coordinate(first), coordinate(last));
    // Sorted by `total_cmp`, any NaN or infinity ends up first or last.
    if !(min.is_finite() && max.is_finite()) {
        return Err(Error::NON_FINITE_INPUT);
    }
    if min == max {
        return Err(Error::DegenerateSplit { axis });
    }

    let len = points.len();
    let median = if len % 2 == 1 {
        coordinate(&points[len / 2])
    } else {
        coordinate(&points[len / 2 - 1]).midpoint(coordinate(&points[len / 2]))
    };

    if median < max {
        Ok(median)
    } else {
        // `min < max` so at least the first point lies below the maximum.
        let below = points.partition_point(|p| coordinate(p) < max);
        Ok(coordinate(&points[below - 1]))
    }
}

impl KdNodes {
    fn build_kd<P: Position>(
        &mut self,
        points: &mut [P],
        offset: usize,
        region: Rectangle,
        depth: usize,
        policy: SplitPolicy,
    ) -> Result<NodeID> {
        let range = offset..offset + points.len();
        let id = self.push(Node::External, Cell { region, range });

        if points
            .windows(2)
            .all(|p| p[0].position() == p[1].position())
        {
            return Ok(id);
        }

        let preferred = policy.axis(points, depth);
        let (axis, line) = match split_line(points, preferred) {
            Ok(line) => (preferred, line),
            Err(error) => {
                tracing::trace!(%error, depth, "splitting along the other axis");
                let axis = preferred.other();
                (axis, split_line(points, axis)?)
            }
        };

        let (Some(below), Some(above)) = (
            region.split_below(line, axis),
            region.split_above(line, axis),
        ) else {
            return Err(Error::DegenerateSplit { axis });
        };

        let mid = points.partition_point(|p| p.position().coordinate(axis) <= line);
        let (left, right) = points.split_at_mut(mid);

        let children = [
            self.build_kd(left, offset, below, depth + 1, policy)?,
            self.build_kd(right, offset + mid, above, depth + 1, policy)?,
        ];
        self.nodes[id as usize] = Node::Internal(KdSplit {
            axis,
            line,
            children,
        });

        Ok(id)
    }
}

/// A static k-d tree over points of the plane.
///
/// Each internal node splits its points in two along one axis at their median coordinate and
/// remembers the [`Rectangle`] its subtree is responsible for. Child regions are derived from the
/// parent's by clipping it at the splitting line, so the regions of siblings tile their parent
/// exactly. Range queries report whole subtrees whose region lies inside the query without
/// visiting them and skip subtrees whose region misses it.
///
/// A leaf holds one point, or every copy of a point inserted several times.
///
/// # Example
///
/// ```
/// use orthrange::prelude::*;
///
/// let points = (1..=3).flat_map(|x| (1..=3).map(move |y| Point::new(x as f64, y as f64)));
/// let tree = KdTree::new(points)?;
///
/// assert_eq!(tree.search(0.0, 1.0, 0.0, 1.0)?, vec![Point::new(1.0, 1.0)]);
/// assert_eq!(tree.search(1.0, 4.0, 1.0, 4.0)?.len(), 9);
/// # Ok::<(), orthrange::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct KdTree<P = Point> {
    nodes: KdNodes,
    points: Vec<P>,
    extent: Rectangle,
    policy: SplitPolicy,
}

impl<P: Position> KdTree<P> {
    const ROOT: NodeID = 0;

    /// Builds a [`KdTree`] alternating split axes with depth.
    ///
    /// Fails with [`Error::InvalidInput`] if there are no points or a coordinate is not finite.
    #[inline]
    pub fn new<I>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
    {
        Self::with_policy(points, SplitPolicy::default())
    }

    /// Builds a [`KdTree`] choosing split axes with the given [`SplitPolicy`].
    ///
    /// Fails with [`Error::InvalidInput`] if there are no points or a coordinate is not finite.
    pub fn with_policy<I>(points: I, policy: SplitPolicy) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
    {
        let mut points: Vec<P> = points.into_iter().collect();
        if points.is_empty() {
            return Err(Error::EMPTY_INPUT);
        }
        let extent = Rectangle::enclosing(&points).ok_or(Error::NON_FINITE_INPUT)?;

        let mut nodes = KdNodes::with_capacity(2 * points.len());
        nodes.build_kd(&mut points, 0, extent, 0, policy)?;

        tracing::debug!(
            points = points.len(),
            nodes = nodes.len(),
            ?policy,
            "built k-d tree"
        );

        Ok(Self {
            nodes,
            points,
            extent,
            policy,
        })
    }

    /// Returns every point inside the rectangle with the given bounds.
    ///
    /// The query is first clipped to the extent of the indexed points as described in
    /// [`Rectangle::clip_to_extent`]: lower bounds at or below the smallest coordinates also
    /// report the points lying on them. Fails with [`Error::InvalidRegion`] if the bounds do not
    /// form a valid [`Rectangle`].
    pub fn search(&self, min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Result<Vec<P>>
    where
        P: Clone,
    {
        let query = Rectangle::new(min_x, max_x, min_y, max_y)?;

        Ok(query
            .clip_to_extent(&self.extent)
            .map(|query| self.query(&query))
            .unwrap_or_default())
    }

    /// Returns the [`NodeID`] of the root node.
    #[inline]
    pub const fn root(&self) -> NodeID {
        Self::ROOT
    }

    /// Returns the region of the root node, the smallest rectangle enclosing every point.
    #[inline]
    pub const fn region(&self) -> Rectangle {
        self.extent
    }

    /// Returns the [`SplitPolicy`] the tree was built with.
    #[inline]
    pub const fn policy(&self) -> SplitPolicy {
        self.policy
    }

    /// Returns the arena of nodes of the tree.
    #[inline]
    pub const fn nodes(&self) -> &KdNodes {
        &self.nodes
    }

    /// Returns the indexed points, in the order the [`Cell`] ranges of the nodes refer to.
    #[inline]
    pub fn points(&self) -> &[P] {
        &self.points
    }

    /// Returns the number of indexed points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false, a tree holds at least one point.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the number of nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of levels of the tree.
    #[inline]
    pub fn depth(&self) -> usize {
        self.nodes.depth(Self::ROOT)
    }

    /// Returns the region of every node, parents before children.
    pub fn regions(&self) -> Vec<Rectangle> {
        self.nodes
            .preorder(Self::ROOT)
            .into_iter()
            .map(|cell| cell.region)
            .collect()
    }

    /// Returns the splitting line of every internal node, clipped to the node's region.
    pub fn dividers(&self) -> Vec<Segment> {
        self.nodes
            .nodes
            .iter()
            .zip(&self.nodes.data)
            .filter_map(|(node, cell)| match node {
                Node::Internal(KdSplit { axis, line, .. }) => {
                    let r = cell.region;
                    Some(match axis {
                        Axis::X => [
                            Point::new(*line, r.min_y()),
                            Point::new(*line, r.max_y()),
                        ],
                        Axis::Y => [
                            Point::new(r.min_x(), *line),
                            Point::new(r.max_x(), *line),
                        ],
                    })
                }
                Node::External => None,
            })
            .collect()
    }
}

impl<P: Position + Clone> RangeSearch<P> for KdTree<P> {
    fn query_into(&self, query: &Rectangle, result: &mut Vec<P>) {
        if let Some(query) = query.intersect(&self.extent) {
            search::collect(&self.nodes, &self.points, Self::ROOT, &query, result);
        }
    }
}
