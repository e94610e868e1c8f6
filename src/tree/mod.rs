//! Borrowed node views and level-order traversal
//!
//! The renderer never touches the heap's array directly. It walks a
//! [`BinaryTreeView`] - any value that can report its children and its
//! value - so it works over arbitrary node-navigable trees, not just
//! the heap's implicit one.

mod node;
mod traversal;

pub use node::{BinaryTreeView, HeapNode};
pub use traversal::{count, height, level_order};
