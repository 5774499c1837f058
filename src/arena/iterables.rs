//! Definition of the interfaces for tree traversal

use super::{
    ArenaIndex, BinaryNode, BinaryTree, InOrderCursor, LevelOrderCursor, PostOrderCursor, PreOrderCursor,
};
use crate::BinaryTreeError;

/// Order of traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// Left subtree, node, right subtree
    InOrder,
    /// Node, left subtree, right subtree
    PreOrder,
    /// Left subtree, right subtree, node
    PostOrder,
    /// Breadth-first, left to right within a depth
    LevelOrder,
}

/// Resumable traversal over a subtree of a [BinaryTree] that yields one node per call.
///
/// A cursor holds its own frontier and only borrows the tree, so cursors of any order
/// can be interleaved. After a pass is exhausted `next` returns `None` once; the following
/// call starts a new pass from the root. Consequently, cursors are not fused.
pub trait Cursor<'a, T: 'a>: Iterator<Item = &'a BinaryNode<T>> {
    /// Restarts the traversal at the root on the next call to `next`
    fn reset(&mut self);

    /// Root of the traversed subtree
    fn root(&self) -> ArenaIndex;
}

impl<T> BinaryTree<T> {
    /// Cursor of the given order over the subtree at `root` (use
    /// [the concrete constructors](BinaryTree::iter_in_order) to avoid the allocation)
    pub fn traverse<'a>(
        &'a self,
        order: Order,
        root: ArenaIndex,
    ) -> Result<Box<dyn Cursor<'a, T> + 'a>, BinaryTreeError> {
        let cursor: Box<dyn Cursor<'a, T> + 'a> = match order {
            Order::InOrder => Box::new(self.iter_in_order(root)?),
            Order::PreOrder => Box::new(self.iter_pre_order(root)?),
            Order::PostOrder => Box::new(self.iter_post_order(root)?),
            Order::LevelOrder => Box::new(self.iter_level_order(root)?),
        };
        Ok(cursor)
    }

    pub fn iter_in_order(&self, root: ArenaIndex) -> Result<InOrderCursor<'_, T>, BinaryTreeError> {
        self.node(root)?;
        Ok(InOrderCursor::new(self, root))
    }

    pub fn iter_pre_order(&self, root: ArenaIndex) -> Result<PreOrderCursor<'_, T>, BinaryTreeError> {
        self.node(root)?;
        Ok(PreOrderCursor::new(self, root))
    }

    pub fn iter_post_order(&self, root: ArenaIndex) -> Result<PostOrderCursor<'_, T>, BinaryTreeError> {
        self.node(root)?;
        Ok(PostOrderCursor::new(self, root))
    }

    pub fn iter_level_order(&self, root: ArenaIndex) -> Result<LevelOrderCursor<'_, T>, BinaryTreeError> {
        self.node(root)?;
        Ok(LevelOrderCursor::new(self, root))
    }
}
