// SPDX-License-Identifier: MPL-2.0

//! A binary tree whose shape is built by the caller and which is visited in one of the three
//! classic orders.
//!
//! ## Properties:
//! - Caller-shaped: there is no insertion or removal API. Trees are assembled bottom-up from
//!   [`TreeNode`]s and only traversed afterwards.
//! - Shared nodes: a [`TreeNodeRef`] is a reference counted handle, so the same subtree may be
//!   linked into several trees at once.
//! - Acyclic: nodes cannot be modified after construction, hence no node can become its own
//!   descendant and every traversal terminates.
//!
//! ## Traversal
//! [`BinaryTree::preorder`], [`BinaryTree::inorder`] and [`BinaryTree::postorder`] call a
//! [`Visit`] implementation on every node, passing the node itself so the visitor can look at
//! its value and children. Any `FnMut(&TreeNode<T>) -> Result<(), E>` closure is a visitor. The
//! first visitor error stops the walk and is returned as [`TraversalError::Visitor`].
//!
//! ## Example
//! This tree
//!
//! ```txt
//!        A
//!      /   \
//!     B     C
//! ```
//!
//! is visited in order like so:
//!
//! ```
//! use std::convert::Infallible;
//! use knuth::binary_tree::{BinaryTree, TreeNode};
//!
//! let tree = BinaryTree::new(Some(TreeNode::new(
//!     'A',
//!     Some(TreeNode::leaf('B')),
//!     Some(TreeNode::leaf('C')),
//! )));
//!
//! let mut order = Vec::new();
//! tree.inorder(|node: &TreeNode<char>| {
//!     order.push(*node.value());
//!     Ok::<_, Infallible>(())
//! })
//! .unwrap();
//! assert_eq!(order, ['B', 'A', 'C']);
//! ```

use std::rc::Rc;

use tracing::trace;

/// Errors triggered by tree traversals.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TraversalError<E> {
    /// The visitor reported that it cannot be invoked. No node was visited.
    #[error("visit parameter must be callable")]
    InvalidArgument,
    /// The visitor failed on a node. Nodes after it were not visited.
    #[error("visitor failed: {0}")]
    Visitor(E),
}

/// Shared handle to a [`TreeNode`].
pub type TreeNodeRef<T> = Rc<TreeNode<T>>;

/// Represents a node of a binary tree: a value and two optional children.
#[derive(Debug)]
pub struct TreeNode<T> {
    value: T,
    left: Option<TreeNodeRef<T>>,
    right: Option<TreeNodeRef<T>>,
}

impl<T> TreeNode<T> {
    /// Creates a node with the given children and returns a shareable handle to it.
    pub fn new(
        value: T,
        left: Option<TreeNodeRef<T>>,
        right: Option<TreeNodeRef<T>>,
    ) -> TreeNodeRef<T> {
        Rc::new(Self { value, left, right })
    }

    /// Creates a node without children.
    pub fn leaf(value: T) -> TreeNodeRef<T> {
        Self::new(value, None, None)
    }

    /// The value stored in the node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The left child of the node.
    pub fn left(&self) -> Option<&TreeNodeRef<T>> {
        self.left.as_ref()
    }

    /// The right child of the node.
    pub fn right(&self) -> Option<&TreeNodeRef<T>> {
        self.right.as_ref()
    }

    /// Returns true if the node has neither a left nor a right child.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

// Detach children onto a work-list so deep trees are freed without recursion. A child still
// held elsewhere keeps its subtree.
impl<T> Drop for TreeNode<T> {
    fn drop(&mut self) {
        let mut pending: Vec<TreeNodeRef<T>> =
            self.left.take().into_iter().chain(self.right.take()).collect();
        while let Some(node) = pending.pop() {
            if let Ok(mut node) = Rc::try_unwrap(node) {
                pending.extend(node.left.take());
                pending.extend(node.right.take());
            }
        }
    }
}

/// A callback invoked on each node of a traversal.
pub trait Visit<T> {
    /// Error returned by [`Visit::visit`]. It aborts the traversal.
    type Error;

    /// Called once per node, in traversal order.
    fn visit(&mut self, node: &TreeNode<T>) -> Result<(), Self::Error>;

    /// Whether this visitor can be invoked at all.
    ///
    /// Traversals check this once, before visiting anything. Visitors backed by a dynamically
    /// typed host value override it to report values that are not callable.
    fn is_callable(&self) -> bool {
        true
    }
}

impl<T, E, F> Visit<T> for F
where
    F: FnMut(&TreeNode<T>) -> Result<(), E>,
{
    type Error = E;

    fn visit(&mut self, node: &TreeNode<T>) -> Result<(), E> {
        self(node)
    }
}

/// The three depth-first visiting orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// Node, then left subtree, then right subtree.
    Pre,
    /// Left subtree, then node, then right subtree.
    In,
    /// Left subtree, then right subtree, then node.
    Post,
}

/// Represents a binary tree through its (optional) root node.
#[derive(Debug)]
pub struct BinaryTree<T> {
    root: Option<TreeNodeRef<T>>,
}

impl<T> BinaryTree<T> {
    /// Wraps an existing node. `None` denotes the empty tree.
    pub fn new(root: Option<TreeNodeRef<T>>) -> Self {
        Self { root }
    }

    /// The root node of the tree.
    pub fn root(&self) -> Option<&TreeNodeRef<T>> {
        self.root.as_ref()
    }

    /// Replaces the root, returning the previous one.
    pub fn set_root(&mut self, root: Option<TreeNodeRef<T>>) -> Option<TreeNodeRef<T>> {
        std::mem::replace(&mut self.root, root)
    }

    /// Detaches the root, leaving the tree empty.
    pub fn take_root(&mut self) -> Option<TreeNodeRef<T>> {
        self.root.take()
    }

    /// Returns true if the tree has no root.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Visits the nodes of the tree pre-order.
    pub fn preorder<V: Visit<T>>(&self, visit: V) -> Result<(), TraversalError<V::Error>> {
        self.traverse(Order::Pre, visit)
    }

    /// Visits the nodes of the tree in-order.
    pub fn inorder<V: Visit<T>>(&self, visit: V) -> Result<(), TraversalError<V::Error>> {
        self.traverse(Order::In, visit)
    }

    /// Visits the nodes of the tree post-order.
    pub fn postorder<V: Visit<T>>(&self, visit: V) -> Result<(), TraversalError<V::Error>> {
        self.traverse(Order::Post, visit)
    }

    /// Visits the nodes of the tree in the given order.
    ///
    /// The traversal is recursive, so its depth is bounded by the height of the tree. Very deep
    /// trees can exhaust the call stack; see [`BinaryTree::inorder_with_stack`].
    pub fn traverse<V: Visit<T>>(
        &self,
        order: Order,
        mut visit: V,
    ) -> Result<(), TraversalError<V::Error>> {
        if !visit.is_callable() {
            return Err(TraversalError::InvalidArgument);
        }

        trace!(?order, empty = self.is_empty(), "starting traversal");
        let root = self.root.as_ref();
        let result = match order {
            Order::Pre => preorder_from(root, &mut visit),
            Order::In => inorder_from(root, &mut visit),
            Order::Post => postorder_from(root, &mut visit),
        };
        result.map_err(TraversalError::Visitor)
    }

    /// Visits the nodes of the tree in-order, keeping pending nodes on an explicit stack
    /// instead of the call stack.
    ///
    /// The visiting order and error behaviour are those of [`BinaryTree::inorder`]: descend
    /// along left links pushing each node, pop and visit, then continue from the right child.
    pub fn inorder_with_stack<V: Visit<T>>(
        &self,
        mut visit: V,
    ) -> Result<(), TraversalError<V::Error>> {
        if !visit.is_callable() {
            return Err(TraversalError::InvalidArgument);
        }

        trace!(empty = self.is_empty(), "starting stack-based in-order traversal");
        let mut stack: Vec<&TreeNodeRef<T>> = Vec::new();
        let mut current = self.root.as_ref();
        loop {
            while let Some(node) = current {
                stack.push(node);
                current = node.left.as_ref();
            }

            let Some(node) = stack.pop() else {
                return Ok(());
            };
            visit.visit(node).map_err(TraversalError::Visitor)?;
            current = node.right.as_ref();
        }
    }
}

impl<T> Default for BinaryTree<T> {
    fn default() -> Self {
        Self { root: None }
    }
}

impl<T> From<TreeNodeRef<T>> for BinaryTree<T> {
    fn from(root: TreeNodeRef<T>) -> Self {
        Self::new(Some(root))
    }
}

fn preorder_from<T, V: Visit<T>>(
    node: Option<&TreeNodeRef<T>>,
    visit: &mut V,
) -> Result<(), V::Error> {
    let Some(node) = node else {
        return Ok(());
    };
    visit.visit(node)?;
    preorder_from(node.left.as_ref(), visit)?;
    preorder_from(node.right.as_ref(), visit)
}

fn inorder_from<T, V: Visit<T>>(
    node: Option<&TreeNodeRef<T>>,
    visit: &mut V,
) -> Result<(), V::Error> {
    let Some(node) = node else {
        return Ok(());
    };
    inorder_from(node.left.as_ref(), visit)?;
    visit.visit(node)?;
    inorder_from(node.right.as_ref(), visit)
}

fn postorder_from<T, V: Visit<T>>(
    node: Option<&TreeNodeRef<T>>,
    visit: &mut V,
) -> Result<(), V::Error> {
    let Some(node) = node else {
        return Ok(());
    };
    postorder_from(node.left.as_ref(), visit)?;
    postorder_from(node.right.as_ref(), visit)?;
    visit.visit(node)
}

#[cfg(feature = "test-util")]
impl<T: core::fmt::Display> core::fmt::Display for TreeNode<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let child = |c: Option<&TreeNodeRef<T>>| {
            c.map_or_else(|| "-".to_string(), |node| node.value.to_string())
        };
        write!(f, "{} L: {} R: {}", self.value, child(self.left()), child(self.right()))
    }
}

#[cfg(feature = "test-util")]
impl<T: core::fmt::Display> core::fmt::Display for BinaryTree<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "--- Begin Tree ---")?;
        self.preorder(|node: &TreeNode<T>| writeln!(f, "{node}"))
            .map_err(|_| core::fmt::Error)?;
        write!(f, "--- End Tree ---")
    }
}
