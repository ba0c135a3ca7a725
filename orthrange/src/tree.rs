use std::ops::Range;

use crate::rectangle::Rectangle;

/// Index of a [`Node`] in a [`Tree`].
pub type NodeID = u32;

/// Generic arena-allocated tree data structure.
///
/// Nodes never point back to their parent; a node refers to its children by [`NodeID`] and the
/// tree owns every node, so dropping the tree drops the whole structure at once.
#[derive(Clone, Debug)]
pub struct Tree<Node, Data> {
    /// Vector of `Node` objects that define the structure of the tree.
    pub nodes: Vec<Node>,

    /// Vector of generic `Data` objects that contain information about the associated `Node`.
    ///
    /// The `data` vector is parallel to the `nodes` vector, so the `i`-th element of the `data`
    /// vector corresponds to the `i`-th element of the `nodes` vector.
    pub data: Vec<Data>,
}

impl<Node, Data> Tree<Node, Data> {
    /// Creates a new empty [`Tree`].
    #[inline]
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            data: Vec::new(),
        }
    }

    /// Creates a new empty [`Tree`] with at least the specified capacity in the `nodes` and
    /// `data` vectors.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            data: Vec::with_capacity(capacity),
        }
    }

    /// Appends a node and its data, returning its [`NodeID`].
    #[inline]
    pub fn push(&mut self, node: Node, data: Data) -> NodeID {
        let id = self.nodes.len();
        self.nodes.push(node);
        self.data.push(data);
        id as NodeID
    }

    /// Returns the node with the given [`NodeID`] and its data.
    #[inline]
    pub fn get(&self, id: NodeID) -> Option<(&Node, &Data)> {
        let id = id as usize;
        Some((self.nodes.get(id)?, self.data.get(id)?))
    }

    /// Returns the number of nodes in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the tree has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<N: Branch, Data> Tree<Node<N>, Data> {
    /// Returns the number of levels below and including the given node.
    pub fn depth(&self, id: NodeID) -> usize {
        match &self.nodes[id as usize] {
            Node::External => 1,
            Node::Internal(branch) => {
                1 + branch
                    .children()
                    .iter()
                    .map(|&child| self.depth(child))
                    .max()
                    .unwrap_or(0)
            }
        }
    }

    /// Returns the data of the given node and of all its descendants, parents before children.
    pub fn preorder(&self, id: NodeID) -> Vec<&Data> {
        let mut result = Vec::new();
        let mut stack = vec![id];

        while let Some(id) = stack.pop() {
            result.push(&self.data[id as usize]);
            if let Node::Internal(branch) = &self.nodes[id as usize] {
                stack.extend(branch.children().iter().rev());
            }
        }

        result
    }
}

impl<Node, Data> Default for Tree<Node, Data> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Node that can either be internal and own child nodes or external and have none.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Node<N> {
    /// Node with child nodes.
    Internal(N),
    /// Node without children.
    External,
}

/// Trait for the payload of an internal [`Node`], giving access to its children.
pub trait Branch {
    /// Returns the children of the node.
    fn children(&self) -> &[NodeID];
}

impl<const X: usize> Branch for [NodeID; X] {
    #[inline]
    fn children(&self) -> &[NodeID] {
        self
    }
}

/// Data attached to every node of the spatial trees of this crate.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    /// Region of the plane the node is responsible for. Every point of the subtree lies inside it.
    pub region: Rectangle,
    /// Range of the tree's point storage holding the points of the subtree.
    pub range: Range<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arena_traversal() {
        let mut tree = Tree::<Node<[NodeID; 2]>, char>::default();
        let root = tree.push(Node::External, 'a');
        let left = tree.push(Node::External, 'b');
        let right = tree.push(Node::External, 'c');
        let grandchild = tree.push(Node::External, 'd');
        let right_leaf = tree.push(Node::External, 'e');

        tree.nodes[root as usize] = Node::Internal([left, right]);
        tree.nodes[right as usize] = Node::Internal([grandchild, right_leaf]);

        assert_eq!(tree.len(), 5);
        assert_eq!(tree.depth(root), 3);
        assert_eq!(tree.depth(left), 1);
        assert_eq!(tree.preorder(root).into_iter().collect::<String>(), "abcde");
        assert_eq!(tree.get(grandchild), Some((&Node::External, &'d')));
        assert_eq!(tree.get(10), None);
    }
}
