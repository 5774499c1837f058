/*! Recursive traversal. In contrast to the cursors in [crate::arena], a visit runs to
 * completion in a single call and hands every node to a [Visitor].
 */

use crate::{ArenaIndex, BinaryNode, BinaryTree, BinaryTreeError};
use std::{
    fmt::Display,
    io::{self, Write},
};
use tracing_attributes::instrument;

/// Callback invoked for every node of a recursive traversal. Implemented for closures
/// and for the default [Printer].
pub trait Visitor<T> {
    fn on_visit(&mut self, node: &BinaryNode<T>) -> Result<(), BinaryTreeError>;
}

impl<T, F> Visitor<T> for F
where
    F: FnMut(&BinaryNode<T>),
{
    fn on_visit(&mut self, node: &BinaryNode<T>) -> Result<(), BinaryTreeError> {
        self(node);
        Ok(())
    }
}

/// Default visitor. Writes each value prefixed by a space (`-` for nodes without a value).
pub struct Printer<W> {
    writer: W,
}

impl Printer<io::Stdout> {
    pub fn stdout() -> Self {
        Printer { writer: io::stdout() }
    }
}

impl<W: Write> Printer<W> {
    pub fn new(writer: W) -> Self {
        Printer { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<T, W> Visitor<T> for Printer<W>
where
    T: Display,
    W: Write,
{
    fn on_visit(&mut self, node: &BinaryNode<T>) -> Result<(), BinaryTreeError> {
        write!(self.writer, " {node}")?;
        Ok(())
    }
}

impl<T> BinaryTree<T> {
    /// Visits the subtree at `root` in-order. Stops at the first error of the visitor.
    #[instrument(skip_all, fields(root = root.0))]
    pub fn visit_in_order<V>(&self, root: ArenaIndex, visitor: &mut V) -> Result<(), BinaryTreeError>
    where
        V: Visitor<T> + ?Sized,
    {
        self.node(root)?;
        self.in_order(Some(root), visitor)
    }

    /// Visits the subtree at `root` in pre-order. Stops at the first error of the visitor.
    #[instrument(skip_all, fields(root = root.0))]
    pub fn visit_pre_order<V>(&self, root: ArenaIndex, visitor: &mut V) -> Result<(), BinaryTreeError>
    where
        V: Visitor<T> + ?Sized,
    {
        self.node(root)?;
        self.pre_order(Some(root), visitor)
    }

    /// Visits the subtree at `root` in post-order. Stops at the first error of the visitor.
    #[instrument(skip_all, fields(root = root.0))]
    pub fn visit_post_order<V>(&self, root: ArenaIndex, visitor: &mut V) -> Result<(), BinaryTreeError>
    where
        V: Visitor<T> + ?Sized,
    {
        self.node(root)?;
        self.post_order(Some(root), visitor)
    }

    fn in_order<V>(&self, index: Option<ArenaIndex>, visitor: &mut V) -> Result<(), BinaryTreeError>
    where
        V: Visitor<T> + ?Sized,
    {
        let Some(index) = index else { return Ok(()) };
        let node = &self.nodes[index.0];
        self.in_order(node.left(), visitor)?;
        visitor.on_visit(node)?;
        self.in_order(node.right(), visitor)
    }

    fn pre_order<V>(&self, index: Option<ArenaIndex>, visitor: &mut V) -> Result<(), BinaryTreeError>
    where
        V: Visitor<T> + ?Sized,
    {
        let Some(index) = index else { return Ok(()) };
        let node = &self.nodes[index.0];
        visitor.on_visit(node)?;
        self.pre_order(node.left(), visitor)?;
        self.pre_order(node.right(), visitor)
    }

    fn post_order<V>(&self, index: Option<ArenaIndex>, visitor: &mut V) -> Result<(), BinaryTreeError>
    where
        V: Visitor<T> + ?Sized,
    {
        let Some(index) = index else { return Ok(()) };
        let node = &self.nodes[index.0];
        self.post_order(node.left(), visitor)?;
        self.post_order(node.right(), visitor)?;
        visitor.on_visit(node)
    }
}

impl<T: Display> BinaryTree<T> {
    /// Writes the subtree at `root` in-order to stdout using the [Printer]
    pub fn print_in_order(&self, root: ArenaIndex) -> Result<(), BinaryTreeError> {
        let mut printer = Printer::stdout();
        self.visit_in_order(root, &mut printer)?;
        printer.writer.flush()?;
        Ok(())
    }

    pub fn print_pre_order(&self, root: ArenaIndex) -> Result<(), BinaryTreeError> {
        let mut printer = Printer::stdout();
        self.visit_pre_order(root, &mut printer)?;
        printer.writer.flush()?;
        Ok(())
    }

    pub fn print_post_order(&self, root: ArenaIndex) -> Result<(), BinaryTreeError> {
        let mut printer = Printer::stdout();
        self.visit_post_order(root, &mut printer)?;
        printer.writer.flush()?;
        Ok(())
    }
}
