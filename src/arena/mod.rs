//! [Arena memory allocated](https://en.wikipedia.org/wiki/Region-based_memory_management)
//! binary tree with resumable depth-first (in-, pre-, post-order) and breadth-first
//! (level-order) cursors.

pub mod binary;
pub mod breadth;
pub mod depth;
pub mod iterables;

pub use binary::{ArenaIndex, BinaryNode, BinaryTree, NodeMut};
pub use breadth::LevelOrderCursor;
pub use depth::{InOrderCursor, PostOrderCursor, PreOrderCursor};
pub use iterables::{Cursor, Order};
