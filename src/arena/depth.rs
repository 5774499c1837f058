//! Depth-first cursors (in-, pre- and post-order) driven by an explicit stack

use super::{iterables::Cursor, ArenaIndex, BinaryNode, BinaryTree};
use tracing::debug;

/// In-order cursor. The stack mirrors the call stack of the recursive traversal: it
/// holds the ancestors whose left subtree is being descended.
pub struct InOrderCursor<'a, T> {
    tree: &'a BinaryTree<T>,
    root: ArenaIndex,
    stack: Vec<ArenaIndex>,
    /// Next node whose left spine has to be pushed
    descend: Option<ArenaIndex>,
    started: bool,
}

impl<'a, T> InOrderCursor<'a, T> {
    pub(crate) fn new(tree: &'a BinaryTree<T>, root: ArenaIndex) -> Self {
        InOrderCursor {
            tree,
            root,
            stack: Vec::with_capacity(tree.max_depth),
            descend: None,
            started: false,
        }
    }
}

impl<'a, T> Iterator for InOrderCursor<'a, T> {
    type Item = &'a BinaryNode<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        if !self.started {
            debug!(root = ?self.root, "Starting in-order pass");
            self.stack.clear();
            self.descend = Some(self.root);
            self.started = true;
        }
        while let Some(index) = self.descend {
            self.stack.push(index);
            self.descend = tree.nodes[index.0].left;
        }
        match self.stack.pop() {
            Some(index) => {
                let node = &tree.nodes[index.0];
                self.descend = node.right;
                Some(node)
            }
            None => {
                debug!(root = ?self.root, "In-order pass exhausted");
                self.started = false;
                None
            }
        }
    }
}

impl<'a, T> Cursor<'a, T> for InOrderCursor<'a, T> {
    fn reset(&mut self) {
        self.stack.clear();
        self.descend = None;
        self.started = false;
    }

    fn root(&self) -> ArenaIndex {
        self.root
    }
}

/// Pre-order cursor. The right child is pushed before the left one so that the left
/// subtree is popped first.
pub struct PreOrderCursor<'a, T> {
    tree: &'a BinaryTree<T>,
    root: ArenaIndex,
    stack: Vec<ArenaIndex>,
    started: bool,
}

impl<'a, T> PreOrderCursor<'a, T> {
    pub(crate) fn new(tree: &'a BinaryTree<T>, root: ArenaIndex) -> Self {
        PreOrderCursor {
            tree,
            root,
            stack: Vec::with_capacity(tree.max_depth),
            started: false,
        }
    }
}

impl<'a, T> Iterator for PreOrderCursor<'a, T> {
    type Item = &'a BinaryNode<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        if !self.started {
            debug!(root = ?self.root, "Starting pre-order pass");
            self.stack.clear();
            self.stack.push(self.root);
            self.started = true;
        }
        match self.stack.pop() {
            Some(index) => {
                let node = &tree.nodes[index.0];
                self.stack.extend(node.right);
                self.stack.extend(node.left);
                Some(node)
            }
            None => {
                debug!(root = ?self.root, "Pre-order pass exhausted");
                self.started = false;
                None
            }
        }
    }
}

impl<'a, T> Cursor<'a, T> for PreOrderCursor<'a, T> {
    fn reset(&mut self) {
        self.stack.clear();
        self.started = false;
    }

    fn root(&self) -> ArenaIndex {
        self.root
    }
}

/// Post-order cursor. The whole pass is materialized on its first call (two-stack
/// method): the result stack then holds the subtree in reverse post-order and each
/// call pops one node.
pub struct PostOrderCursor<'a, T> {
    tree: &'a BinaryTree<T>,
    root: ArenaIndex,
    stack: Vec<ArenaIndex>,
    started: bool,
}

impl<'a, T> PostOrderCursor<'a, T> {
    pub(crate) fn new(tree: &'a BinaryTree<T>, root: ArenaIndex) -> Self {
        PostOrderCursor {
            tree,
            root,
            stack: Vec::new(),
            started: false,
        }
    }

    fn materialize(&mut self) {
        let tree = self.tree;
        self.stack.clear();
        let mut scratch = Vec::with_capacity(tree.max_depth);
        scratch.push(self.root);
        while let Some(index) = scratch.pop() {
            self.stack.push(index);
            let node = &tree.nodes[index.0];
            scratch.extend(node.left);
            scratch.extend(node.right);
        }
        debug!(root = ?self.root, nodes = self.stack.len(), "Materialized post-order pass");
    }
}

impl<'a, T> Iterator for PostOrderCursor<'a, T> {
    type Item = &'a BinaryNode<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.materialize();
            self.started = true;
        }
        match self.stack.pop() {
            Some(index) => Some(&self.tree.nodes[index.0]),
            None => {
                debug!(root = ?self.root, "Post-order pass exhausted");
                self.started = false;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.started {
            (self.stack.len(), Some(self.stack.len()))
        } else {
            (0, None)
        }
    }
}

impl<'a, T> Cursor<'a, T> for PostOrderCursor<'a, T> {
    fn reset(&mut self) {
        self.stack.clear();
        self.started = false;
    }

    fn root(&self) -> ArenaIndex {
        self.root
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::*;
    use itertools::Itertools;
    use test_log;

    // Layout of the tree
    //       1
    //      / \
    //     2   5
    //    / \   \
    //   3   4   6
    //          /
    //         7
    fn setup_tree() -> BinaryTree<usize> {
        let mut tree = BinaryTree::with_root(1);
        let two = tree.root_mut().insert_left(2).index();
        tree.insert_left(two, 3).unwrap();
        tree.insert_right(two, 4).unwrap();
        tree.root_mut().insert_right(5).insert_right(6).insert_left(7);
        tree
    }

    fn values<'a>(cursor: impl Iterator<Item = &'a BinaryNode<usize>>) -> Vec<usize> {
        cursor.map(|n| *n.value().unwrap()).collect_vec()
    }

    #[test_log::test]
    fn test_in_order() {
        let tree = setup_tree();
        let mut cursor = tree.iter_in_order(tree.root().index()).unwrap();
        assert_eq!(values(cursor.by_ref()), &[3, 2, 4, 1, 5, 7, 6]);
        // a new pass starts after exhaustion
        assert_eq!(values(cursor.by_ref()), &[3, 2, 4, 1, 5, 7, 6]);
    }

    #[test_log::test]
    fn test_pre_order() {
        let tree = setup_tree();
        let mut cursor = tree.iter_pre_order(tree.root().index()).unwrap();
        assert_eq!(values(cursor.by_ref()), &[1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(values(cursor.by_ref()), &[1, 2, 3, 4, 5, 6, 7]);
    }

    #[test_log::test]
    fn test_post_order() {
        let tree = setup_tree();
        let mut cursor = tree.iter_post_order(tree.root().index()).unwrap();
        assert_eq!(cursor.size_hint(), (0, None));
        assert_eq!(cursor.next().map(|n| *n.value().unwrap()), Some(3));
        // The remaining pass is already materialized
        assert_eq!(cursor.size_hint(), (6, Some(6)));
        assert_eq!(values(cursor.by_ref()), &[4, 2, 7, 6, 5, 1]);
        assert_eq!(values(cursor.by_ref()), &[3, 4, 2, 7, 6, 5, 1]);
    }

    #[test_log::test]
    fn test_reset_mid_pass() {
        let tree = setup_tree();
        let root = tree.root().index();
        let mut in_order = tree.iter_in_order(root).unwrap();
        let mut pre_order = tree.iter_pre_order(root).unwrap();
        let mut post_order = tree.iter_post_order(root).unwrap();

        in_order.next();
        in_order.next();
        pre_order.next();
        post_order.next();

        in_order.reset();
        pre_order.reset();
        post_order.reset();

        assert_eq!(values(in_order), &[3, 2, 4, 1, 5, 7, 6]);
        assert_eq!(values(pre_order), &[1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(values(post_order), &[3, 4, 2, 7, 6, 5, 1]);
    }

    #[test_log::test]
    fn test_interleaved_cursors() {
        let tree = setup_tree();
        let root = tree.root().index();
        let mut in_order = tree.iter_in_order(root).unwrap();
        let mut pre_order = tree.iter_pre_order(root).unwrap();

        let mut result = vec![];
        while let (Some(a), Some(b)) = (in_order.next(), pre_order.next()) {
            result.push((*a.value().unwrap(), *b.value().unwrap()));
        }
        assert_eq!(
            result,
            &[(3, 1), (2, 2), (4, 3), (1, 4), (5, 5), (7, 6), (6, 7)]
        );
    }

    #[test_log::test]
    fn test_subtree() {
        let tree = setup_tree();
        let five = tree.root().right().unwrap();
        assert_eq!(values(tree.iter_in_order(five).unwrap()), &[5, 7, 6]);
        assert_eq!(values(tree.iter_pre_order(five).unwrap()), &[5, 6, 7]);
        assert_eq!(values(tree.iter_post_order(five).unwrap()), &[7, 6, 5]);
    }

    #[test_log::test]
    fn test_single_node() {
        let tree = BinaryTree::with_root(42);
        let root = tree.root().index();
        assert_eq!(values(tree.iter_in_order(root).unwrap()), &[42]);
        assert_eq!(values(tree.iter_pre_order(root).unwrap()), &[42]);
        assert_eq!(values(tree.iter_post_order(root).unwrap()), &[42]);
    }
}
