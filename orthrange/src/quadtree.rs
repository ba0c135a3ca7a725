use crate::{
    error::{Error, Result},
    point::{Point, Position},
    rectangle::Rectangle,
    search::{self, RangeSearch},
    tree::{Cell, Node, NodeID, Tree},
};

/// One of the four quarters of a quadtree node.
///
/// A point lying on the vertical line through the center of a node belongs to a western
/// quadrant, and one lying on the horizontal line to a southern quadrant, so that every point
/// belongs to exactly one quadrant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// `x > cx` and `y > cy`.
    NE = 0,
    /// `x <= cx` and `y > cy`.
    NW = 1,
    /// `x <= cx` and `y <= cy`.
    SW = 2,
    /// `x > cx` and `y <= cy`.
    SE = 3,
}

impl Quadrant {
    /// Every quadrant, in the order children are stored in.
    pub const ALL: [Self; 4] = [Self::NE, Self::NW, Self::SW, Self::SE];

    /// Returns the quadrant around `center` the given point belongs to.
    #[inline]
    pub fn of(point: Point, center: Point) -> Self {
        let east = point.x > center.x;
        let north = point.y > center.y;

        match (east, north) {
            (true, true) => Self::NE,
            (false, true) => Self::NW,
            (false, false) => Self::SW,
            (true, false) => Self::SE,
        }
    }
}

/// Children of an internal quadtree node, indexed by [`Quadrant`].
pub type Quadrants = [NodeID; 4];

/// Arena of the nodes of a [`Quadtree`].
pub type QuadNodes = Tree<Node<Quadrants>, Cell>;

impl QuadNodes {
    fn build_quad<P: Position>(
        &mut self,
        points: &mut [P],
        offset: usize,
        region: Rectangle,
    ) -> NodeID {
        let id = self.push(
            Node::External,
            Cell {
                region,
                range: offset..offset + points.len(),
            },
        );

        if points
            .windows(2)
            .all(|p| p[0].position() == p[1].position())
        {
            return id;
        }

        let Some(quarters) = region.quarter() else {
            tracing::trace!(?region, points = points.len(), "region too small to subdivide");
            return id;
        };

        let center = region.center();
        let quadrant = |p: &P| Quadrant::of(p.position(), center) as usize;
        points.sort_by_key(quadrant);

        let mut children = [0; 4];
        let mut start = 0;
        for (i, quarter) in quarters.into_iter().enumerate() {
            let end = start + points[start..].partition_point(|p| quadrant(p) == i);
            children[i] = self.build_quad(&mut points[start..end], offset + start, quarter);
            start = end;
        }
        self.nodes[id as usize] = Node::Internal(children);

        id
    }
}

/// A static region quadtree over points of the plane.
///
/// The root covers a square enclosing every point. Each internal node quarters its square at the
/// center and always owns four children, empty ones included, so the shape of the tree follows the
/// subdivision of the plane rather than the distribution of the points. A node holding a single
/// point, copies of a single point, or whose square can no longer be divided in floating point is
/// a leaf.
///
/// # Example
///
/// ```
/// use orthrange::prelude::*;
///
/// let points = [(0.0, 1.0), (5.0, 2.0), (2.0, 2.0), (5.0, 3.0), (2.0, 3.0), (6.0, 2.0)];
/// let tree = Quadtree::new(points)?;
///
/// let mut found = tree.search(&Rectangle::new(1.0, 4.0, 1.0, 3.0)?);
/// found.sort_by(|a, b| a.1.total_cmp(&b.1));
/// assert_eq!(found, vec![(2.0, 2.0), (2.0, 3.0)]);
/// # Ok::<(), orthrange::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct Quadtree<P = Point> {
    nodes: QuadNodes,
    points: Vec<P>,
    extent: Rectangle,
}

impl<P: Position> Quadtree<P> {
    const ROOT: NodeID = 0;

    /// Builds a [`Quadtree`] from the given points.
    ///
    /// Fails with [`Error::InvalidInput`] if there are no points or a coordinate is not finite.
    pub fn new<I>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
    {
        let mut points: Vec<P> = points.into_iter().collect();
        if points.is_empty() {
            return Err(Error::EMPTY_INPUT);
        }
        let extent = Rectangle::enclosing(&points).ok_or(Error::NON_FINITE_INPUT)?;

        let mut nodes = QuadNodes::with_capacity(points.len());
        nodes.build_quad(&mut points, 0, extent.squared());

        tracing::debug!(
            points = points.len(),
            nodes = nodes.len(),
            "built quadtree"
        );

        Ok(Self {
            nodes,
            points,
            extent,
        })
    }

    /// Returns every point inside the given rectangle.
    ///
    /// The query is first clipped to the extent of the indexed points as described in
    /// [`Rectangle::clip_to_extent`]: lower bounds at or below the smallest coordinates also
    /// report the points lying on them.
    pub fn search(&self, rectangle: &Rectangle) -> Vec<P>
    where
        P: Clone,
    {
        rectangle
            .clip_to_extent(&self.extent)
            .map(|query| self.query(&query))
            .unwrap_or_default()
    }

    /// Returns the [`NodeID`] of the root node.
    #[inline]
    pub const fn root(&self) -> NodeID {
        Self::ROOT
    }

    /// Returns the square covered by the root node.
    #[inline]
    pub fn bounds(&self) -> Rectangle {
        self.nodes.data[Self::ROOT as usize].region
    }

    /// Returns the smallest rectangle enclosing every point.
    #[inline]
    pub const fn extent(&self) -> Rectangle {
        self.extent
    }

    /// Returns the child of a node in the given quadrant, or [`None`] if the node is a leaf or
    /// does not exist.
    #[inline]
    pub fn child(&self, id: NodeID, quadrant: Quadrant) -> Option<NodeID> {
        match self.nodes.get(id)? {
            (Node::Internal(children), _) => Some(children[quadrant as usize]),
            (Node::External, _) => None,
        }
    }

    /// Returns the arena of nodes of the tree.
    #[inline]
    pub const fn nodes(&self) -> &QuadNodes {
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

    /// Returns the square of every node, parents before children.
    pub fn boundaries(&self) -> Vec<Rectangle> {
        self.nodes
            .preorder(Self::ROOT)
            .into_iter()
            .map(|cell| cell.region)
            .collect()
    }
}

impl<P: Position + Clone> RangeSearch<P> for Quadtree<P> {
    fn query_into(&self, query: &Rectangle, result: &mut Vec<P>) {
        if let Some(query) = query.intersect(&self.bounds()) {
            search::collect(&self.nodes, &self.points, Self::ROOT, &query, result);
        }
    }
}
