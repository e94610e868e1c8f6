//! Recursive metrics and level-order expansion
//!
//! [`level_order`] flattens a tree view into the padded snapshot the
//! renderer consumes: a sequence sized 2^h - 1 where position p's children
//! live at 2p+1 and 2p+2, and children of absent slots stay absent. The
//! snapshot always has complete-binary-tree shape even when the tree
//! behind the views does not.

use super::BinaryTreeView;

/// Height of the tree rooted at `node`
///
/// 0 for an absent node, 1 for a single node, otherwise one more than the
/// taller child.
pub fn height<V: BinaryTreeView>(node: Option<V>) -> usize {
    match node {
        None => 0,
        Some(node) => 1 + height(node.left()).max(height(node.right())),
    }
}

/// Number of nodes in the tree rooted at `node`
pub fn count<V: BinaryTreeView>(node: Option<V>) -> usize {
    match node {
        None => 0,
        Some(node) => 1 + count(node.left()) + count(node.right()),
    }
}

/// Expand a tree into a padded level-order snapshot of its values
///
/// The result holds 2^h - 1 slots for a tree of height h, top-to-bottom
/// and left-to-right, with `None` padding wherever the tree has no node.
/// An absent root yields an empty snapshot.
pub fn level_order<V: BinaryTreeView + Clone>(root: Option<V>) -> Vec<Option<V::Value>> {
    let levels = height(root.clone());
    if levels == 0 {
        return Vec::new();
    }

    let mut nodes: Vec<Option<V>> = Vec::with_capacity((1 << levels) - 1);
    nodes.push(root);

    // Level d occupies indices [2^d - 1, 2^(d+1) - 1); expand each parent
    // slot of the previous level into two child slots.
    for level in 1..levels {
        let start = (1 << (level - 1)) - 1;
        let end = (1 << level) - 1;
        for parent in start..end {
            let (left, right) = match &nodes[parent] {
                Some(node) => (node.left(), node.right()),
                None => (None, None),
            };
            nodes.push(left);
            nodes.push(right);
        }
    }

    nodes
        .into_iter()
        .map(|slot| slot.map(|node| node.value()))
        .collect()
}
