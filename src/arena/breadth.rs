//! Breadth-first (level-order) cursor

use super::{iterables::Cursor, ArenaIndex, BinaryNode, BinaryTree};
use std::collections::VecDeque;
use tracing::debug;

/// Level-order cursor. The queue holds the discovered but not yet yielded nodes,
/// `current` always is the node at its front.
pub struct LevelOrderCursor<'a, T> {
    tree: &'a BinaryTree<T>,
    root: ArenaIndex,
    queue: VecDeque<ArenaIndex>,
    current: Option<ArenaIndex>,
    started: bool,
}

impl<'a, T> LevelOrderCursor<'a, T> {
    pub(crate) fn new(tree: &'a BinaryTree<T>, root: ArenaIndex) -> Self {
        LevelOrderCursor {
            tree,
            root,
            queue: VecDeque::with_capacity(tree.max_depth),
            current: None,
            started: false,
        }
    }
}

impl<'a, T> Iterator for LevelOrderCursor<'a, T> {
    type Item = &'a BinaryNode<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        if !self.started {
            debug!(root = ?self.root, "Starting level-order pass");
            self.queue.clear();
            self.queue.push_back(self.root);
            self.current = Some(self.root);
            self.started = true;
        }

        let current = match self.current {
            Some(current) if !self.queue.is_empty() => current,
            _ => {
                debug!(root = ?self.root, "Level-order pass exhausted");
                self.current = None;
                self.started = false;
                return None;
            }
        };

        let node = &tree.nodes[current.0];
        self.queue.extend(node.left);
        self.queue.extend(node.right);
        if let Some(next) = self.queue.get(1) {
            self.current = Some(*next);
        }
        self.queue.pop_front();
        Some(node)
    }
}

impl<'a, T> Cursor<'a, T> for LevelOrderCursor<'a, T> {
    fn reset(&mut self) {
        self.queue.clear();
        self.current = None;
        self.started = false;
    }

    fn root(&self) -> ArenaIndex {
        self.root
    }
}
