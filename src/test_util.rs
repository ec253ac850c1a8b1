// SPDX-License-Identifier: MPL-2.0

//! Fixtures shared by the tests and benchmarks of this crate.

use crate::{
    binary_tree::{BinaryTree, TreeNode},
    linked_list::ListNode,
};

/// Pre-order of [`sample_tree`].
pub const SAMPLE_PREORDER: &str = "ABDCEGFHJ";
/// In-order of [`sample_tree`].
pub const SAMPLE_INORDER: &str = "DBAEGCHFJ";
/// Post-order of [`sample_tree`].
pub const SAMPLE_POSTORDER: &str = "DBGEHJFCA";

/// Returns this nine node tree:
///
/// ```txt
///           A
///        /     \
///       B       C
///      /      /   \
///     D      E     F
///             \   / \
///              G H   J
/// ```
pub fn sample_tree() -> BinaryTree<char> {
    let leaf = TreeNode::leaf;
    let b = TreeNode::new('B', Some(leaf('D')), None);
    let e = TreeNode::new('E', None, Some(leaf('G')));
    let f = TreeNode::new('F', Some(leaf('H')), Some(leaf('J')));
    let c = TreeNode::new('C', Some(e), Some(f));
    BinaryTree::from(TreeNode::new('A', Some(b), Some(c)))
}

/// Returns the complete tree of depth 2 holding `1..=7` in level order.
pub fn balanced_tree() -> BinaryTree<u32> {
    let subtree = |value: u32| {
        TreeNode::new(
            value,
            Some(TreeNode::leaf(2 * value)),
            Some(TreeNode::leaf(2 * value + 1)),
        )
    };
    BinaryTree::from(TreeNode::new(1, Some(subtree(2)), Some(subtree(3))))
}

/// Returns a tree of `depth` nodes where each node is the left child of the previous one. The
/// root holds 0 and the deepest node holds `depth - 1`.
pub fn left_spine(depth: usize) -> BinaryTree<usize> {
    let root = (0..depth)
        .rev()
        .fold(None, |child, value| Some(TreeNode::new(value, child, None)));
    BinaryTree::new(root)
}

/// Links `values` into a chain whose head holds the first value.
pub fn chain<T, I>(values: I) -> Option<Box<ListNode<T>>>
where
    I: IntoIterator<Item = T>,
    I::IntoIter: DoubleEndedIterator,
{
    values
        .into_iter()
        .rev()
        .fold(None, |next, value| Some(ListNode::new(value, next)))
}
