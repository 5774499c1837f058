//! Implementation of a strictly binary,
//! [arena allocated](https://en.wikipedia.org/wiki/Region-based_memory_management)
//! tree. Every node is owned by the arena and linked top-down by its parent only, so a
//! node index together with the tree is the subtree rooted at that node.

use crate::BinaryTreeError;
use core::fmt;
use itertools::Itertools;
use tracing::trace;

/// Handle of a node in the arena of a [BinaryTree]
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub struct ArenaIndex(pub usize);

/// A node of a [BinaryTree]. Holds an optional value and at most two children.
#[derive(Debug, Clone)]
pub struct BinaryNode<T> {
    /// The user-defined value; absent for empty nodes
    pub(super) value: Option<T>,
    /// Index in the arena allocation
    pub(super) index: ArenaIndex,
    pub(super) left: Option<ArenaIndex>,
    pub(super) right: Option<ArenaIndex>,
}

impl<T> BinaryNode<T> {
    fn new(value: Option<T>, index: ArenaIndex, left: Option<ArenaIndex>, right: Option<ArenaIndex>) -> Self {
        BinaryNode {
            value,
            index,
            left,
            right,
        }
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn index(&self) -> ArenaIndex {
        self.index
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub(crate) fn left(&self) -> Option<ArenaIndex> {
        self.left
    }

    pub(crate) fn right(&self) -> Option<ArenaIndex> {
        self.right
    }
}

impl<T> fmt::Display for BinaryNode<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{value}"),
            None => write!(f, "-"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Side {
    Left,
    Right,
}

/// Binary tree that uses arena allocation. The root is always present (possibly
/// without a value) and lives at `ArenaIndex(0)`. Nodes are never removed, hence
/// any index handed out by a tree stays valid for that tree.
#[derive(Debug, Clone)]
pub struct BinaryTree<T> {
    /// Memory allocated area for nodes
    pub(crate) nodes: Vec<BinaryNode<T>>,

    /// Initial capacity of the cursors' frontiers
    pub(crate) max_depth: usize,
}

impl<T> BinaryTree<T> {
    /// Contructor. Creates a tree consisting of a root without a value.
    pub fn new() -> Self {
        Self::with_capacity(1)
    }

    /// Contructor. Creates a tree consisting of a root holding `value`.
    pub fn with_root(value: T) -> Self {
        let mut tree = Self::new();
        tree.nodes[0].value = Some(value);
        tree
    }

    /// Contructor. Reserves memory for `capacity` nodes; the root has no value.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(BinaryNode::new(None, ArenaIndex(0), None, None));
        BinaryTree { nodes, max_depth: 42 }
    }

    pub fn root(&self) -> &BinaryNode<T> {
        &self.nodes[0]
    }

    /// Handle for chained attachment starting at the root
    pub fn root_mut(&mut self) -> NodeMut<'_, T> {
        NodeMut {
            tree: self,
            index: ArenaIndex(0),
        }
    }

    pub fn node(&self, index: ArenaIndex) -> Result<&BinaryNode<T>, BinaryTreeError> {
        self.nodes
            .get(index.0)
            .ok_or(BinaryTreeError::ReferenceOutOfBound(index.0))
    }

    /// Handle for chained attachment starting at `index`
    pub fn node_mut(&mut self, index: ArenaIndex) -> Result<NodeMut<'_, T>, BinaryTreeError> {
        self.node(index)?;
        Ok(NodeMut { tree: self, index })
    }

    pub fn value(&self, index: ArenaIndex) -> Result<Option<&T>, BinaryTreeError> {
        Ok(self.node(index)?.value())
    }

    /// Replaces the value of a node and returns the previous one
    pub fn set_value(&mut self, index: ArenaIndex, value: T) -> Result<Option<T>, BinaryTreeError> {
        let node = self
            .nodes
            .get_mut(index.0)
            .ok_or(BinaryTreeError::ReferenceOutOfBound(index.0))?;
        Ok(node.value.replace(value))
    }

    /// Adds a node holding `value` as the left child of `parent`. A previous left child is
    /// not discarded but becomes the left child of the new node.
    pub fn insert_left(&mut self, parent: ArenaIndex, value: T) -> Result<ArenaIndex, BinaryTreeError> {
        self.node(parent)?;
        Ok(self.attach(parent, value, Side::Left))
    }

    /// Adds a node holding `value` as the right child of `parent`. A previous right child is
    /// not discarded but becomes the right child of the new node.
    pub fn insert_right(&mut self, parent: ArenaIndex, value: T) -> Result<ArenaIndex, BinaryTreeError> {
        self.node(parent)?;
        Ok(self.attach(parent, value, Side::Right))
    }

    /// `parent` must have been checked by the caller
    fn attach(&mut self, parent: ArenaIndex, value: T, side: Side) -> ArenaIndex {
        let index = ArenaIndex(self.nodes.len());
        let (left, right) = match side {
            Side::Left => (self.nodes[parent.0].left.replace(index), None),
            Side::Right => (None, self.nodes[parent.0].right.replace(index)),
        };
        trace!(?parent, ?index, ?side, "Attaching node");
        self.nodes.push(BinaryNode::new(Some(value), index, left, right));
        index
    }

    /// Number of nodes including the root
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false, the root cannot be removed
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[BinaryNode<T>] {
        &self.nodes
    }

    /// Number of nodes on the longest path from `root` down to a leaf
    pub fn height(&self, root: ArenaIndex) -> Result<usize, BinaryTreeError> {
        self.node(root)?;
        Ok(self.height_below(Some(root)))
    }

    fn height_below(&self, index: Option<ArenaIndex>) -> usize {
        match index {
            Some(index) => {
                let node = &self.nodes[index.0];
                1 + self.height_below(node.left).max(self.height_below(node.right))
            }
            None => 0,
        }
    }
}

impl<T> Default for BinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Display for BinaryTree<T>
where
    T: fmt::Display,
{
    /// One line per node in arena order: `index: value (left, right)`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let link = |child: Option<ArenaIndex>| child.map_or("-".to_string(), |c| c.0.to_string());
        let lines = self
            .nodes
            .iter()
            .map(|n| format!("{}: {} ({}, {})", n.index.0, n, link(n.left), link(n.right)))
            .join("\n");
        write!(f, "{lines}")
    }
}

/// Mutable handle on a node used to build a tree downward, e.g.,
/// `tree.root_mut().insert_right(10).insert_right(14).insert_left(13)`.
pub struct NodeMut<'a, T> {
    tree: &'a mut BinaryTree<T>,
    index: ArenaIndex,
}

impl<'a, T> NodeMut<'a, T> {
    pub fn index(&self) -> ArenaIndex {
        self.index
    }

    pub fn insert_left(self, value: T) -> NodeMut<'a, T> {
        let index = self.tree.attach(self.index, value, Side::Left);
        NodeMut { tree: self.tree, index }
    }

    pub fn insert_right(self, value: T) -> NodeMut<'a, T> {
        let index = self.tree.attach(self.index, value, Side::Right);
        NodeMut { tree: self.tree, index }
    }

    /// Replaces the value of the node and returns the previous one
    pub fn set_value(&mut self, value: T) -> Option<T> {
        self.tree.nodes[self.index.0].value.replace(value)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use itertools::Itertools;
    use test_log;

    #[test_log::test]
    fn test_construction() {
        let tree = BinaryTree::<i32>::new();
        assert_eq!(tree.len(), 1);
        assert!(!tree.is_empty());
        assert_eq!(tree.root().value(), None);
        assert!(tree.root().is_leaf());

        let tree = BinaryTree::with_root(8);
        assert_eq!(tree.root().value(), Some(&8));
        assert_eq!(tree.root().index(), ArenaIndex(0));
    }

    #[test_log::test]
    fn test_insert_threads_previous_child() {
        // Layout after the second insertion
        //     0
        //    /
        //   2
        //  /
        // 1
        let mut tree = BinaryTree::with_root(0);
        let root = tree.root().index();

        let first = tree.insert_left(root, 1).unwrap();
        let second = tree.insert_left(root, 2).unwrap();

        assert_eq!(tree.root().left(), Some(second));
        assert_eq!(tree.node(second).unwrap().left(), Some(first));
        assert_eq!(tree.node(second).unwrap().right(), None);
        assert!(tree.node(first).unwrap().is_leaf());

        // Symmetric on the right side
        let third = tree.insert_right(root, 3).unwrap();
        let fourth = tree.insert_right(root, 4).unwrap();
        assert_eq!(tree.root().right(), Some(fourth));
        assert_eq!(tree.node(fourth).unwrap().right(), Some(third));
        assert_eq!(tree.node(fourth).unwrap().left(), None);

        assert_eq!(tree.len(), 5);
        assert_eq!(tree.height(root).unwrap(), 3);
    }

    #[test_log::test]
    fn test_chained_attachment() {
        let mut tree = BinaryTree::with_root(8);
        let thirteen = tree.root_mut().insert_right(10).insert_right(14).insert_left(13).index();

        assert_eq!(tree.value(thirteen).unwrap(), Some(&13));
        assert_eq!(tree.nodes().iter().map(|n| *n.value().unwrap()).collect_vec(), &[8, 10, 14, 13]);
        assert_eq!(tree.height(tree.root().index()).unwrap(), 4);
    }

    #[test_log::test]
    fn test_values() {
        let mut tree = BinaryTree::new();
        let root = tree.root().index();
        assert_eq!(tree.set_value(root, "a").unwrap(), None);
        assert_eq!(tree.set_value(root, "b").unwrap(), Some("a"));

        let mut child = tree.node_mut(root).unwrap().insert_left("c");
        assert_eq!(child.set_value("d"), Some("c"));
        let child = child.index();
        assert_eq!(tree.value(child).unwrap(), Some(&"d"));

        assert_eq!(format!("{tree}"), "0: b (1, -)\n1: d (-, -)");
    }

    #[test_log::test]
    fn test_foreign_index() {
        let mut tree = BinaryTree::with_root(1);
        let result = tree.insert_left(ArenaIndex(7), 2);
        assert!(matches!(result, Err(BinaryTreeError::ReferenceOutOfBound(7))));
        assert!(tree.node_mut(ArenaIndex(1)).is_err());
        assert!(tree.set_value(ArenaIndex(3), 4).is_err());
        assert_eq!(tree.len(), 1);
    }
}
