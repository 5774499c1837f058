//! ## About
//!
//! This crate contains an [arena allocated](arena) binary tree together with the classic
//! traversal algorithms. Every order is available in two flavours:
//!
//! * recursive visits (in-, pre- and post-order) that run to completion and hand each
//!   node to a [Visitor] (a closure or the default [Printer]),
//! * resumable cursors (in-, pre-, post- and level-order) that yield one node per call
//!   and start over after a pass is exhausted.
//!
//! See the [BinaryTree] struct to get started.
//!
//! ```
//! use bintrav::{BinaryTree, Order};
//!
//! let mut tree = BinaryTree::with_root(8);
//! tree.root_mut().insert_left(3);
//! tree.root_mut().insert_right(10).insert_right(14);
//!
//! let root = tree.root().index();
//! let values: Vec<_> = tree
//!     .traverse(Order::InOrder, root)
//!     .unwrap()
//!     .map(|node| *node.value().unwrap())
//!     .collect();
//! assert_eq!(values, [3, 8, 10, 14]);
//! ```
//!
//! ## Naming conventions
//! * Traits – adjectives or agent nouns that indicate capability and behavior
//! * Structs – substantives that indicate entities implementing a behavior
//! * Methods – imperative forms with the exception of getters and factories, which
//!             use substantives (i.e., omit a `get_` prefix) much like the standard library.
//!             Callback methods have a `on_` prefix

pub mod arena;
pub mod errors;
pub mod visiting;

pub use arena::{
    ArenaIndex, BinaryNode, BinaryTree, Cursor, InOrderCursor, LevelOrderCursor, NodeMut, Order,
    Order::{InOrder, LevelOrder, PostOrder, PreOrder},
    PostOrderCursor, PreOrderCursor,
};
pub use errors::BinaryTreeError;
pub use visiting::{Printer, Visitor};
