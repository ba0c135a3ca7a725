use crate::{
    point::Position,
    rectangle::Rectangle,
    tree::{Branch, Cell, Node, NodeID, Tree},
};

/// Position of a node's region relative to a query rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Classification {
    /// The region lies entirely inside the query: every point of the subtree is reported without
    /// visiting it.
    Contained,
    /// The region and the query do not overlap: the subtree is skipped.
    Disjoint,
    /// The region overlaps the query only in part: the subtree has to be visited.
    Partial,
}

/// Trait for indexes answering orthogonal range queries.
///
/// Queries use the half-open membership rule of [`Rectangle::contains`]. Results are unordered and
/// contain every indexed value inside the query once per occurrence in the input.
///
/// # Example
///
/// ```
/// # use orthrange::prelude::*;
/// let points = [(1.0, 1.0), (2.0, 5.0), (4.0, 4.0)];
/// let query = Rectangle::new(0.0, 4.0, 0.0, 4.0)?;
///
/// let tree = KdTree::new(points)?;
/// assert_eq!(tree.query(&query).len(), 2);
/// assert_eq!(BruteForce(&points[..]).query(&query).len(), 2);
/// # Ok::<(), orthrange::Error>(())
/// ```
pub trait RangeSearch<P> {
    /// Appends every indexed value lying inside `query` to `result`.
    fn query_into(&self, query: &Rectangle, result: &mut Vec<P>);

    /// Returns every indexed value lying inside `query`.
    #[inline]
    fn query(&self, query: &Rectangle) -> Vec<P> {
        let mut result = Vec::new();
        self.query_into(query, &mut result);
        result
    }
}

impl<P, T: RangeSearch<P> + ?Sized> RangeSearch<P> for &T {
    #[inline]
    fn query_into(&self, query: &Rectangle, result: &mut Vec<P>) {
        T::query_into(self, query, result)
    }
}

/// Range search testing every value of a slice.
///
/// Linear in the number of values, it needs no construction and serves as the reference the
/// trees are checked against.
#[derive(Clone, Copy, Debug)]
pub struct BruteForce<'a, P>(pub &'a [P]);

impl<P: Position + Clone> RangeSearch<P> for BruteForce<'_, P> {
    #[inline]
    fn query_into(&self, query: &Rectangle, result: &mut Vec<P>) {
        result.extend(
            self.0
                .iter()
                .filter(|p| query.contains(p.position()))
                .cloned(),
        );
    }
}

/// Collects the points of the subtree rooted at `id` lying inside `query`.
///
/// `points` is the storage the [`Cell`] ranges of the tree refer to. A subtree whose region is
/// contained in the query is copied as a whole, a disjoint one is skipped and a partially
/// overlapping one is descended into, down to the leaves where points are tested one by one.
pub(crate) fn collect<N, P>(
    tree: &Tree<Node<N>, Cell>,
    points: &[P],
    id: NodeID,
    query: &Rectangle,
    result: &mut Vec<P>,
) where
    N: Branch,
    P: Position + Clone,
{
    let cell = &tree.data[id as usize];

    match cell.region.classify(query) {
        Classification::Contained => result.extend_from_slice(&points[cell.range.clone()]),
        Classification::Disjoint => {}
        Classification::Partial => match &tree.nodes[id as usize] {
            Node::Internal(branch) => {
                for &child in branch.children() {
                    collect(tree, points, child, query, result);
                }
            }
            Node::External => result.extend(
                points[cell.range.clone()]
                    .iter()
                    .filter(|p| query.contains(p.position()))
                    .cloned(),
            ),
        },
    }
}
