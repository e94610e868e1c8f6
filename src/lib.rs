//! # Array-backed max-heap with a tree-diagram visualizer
//!
//! This library implements a binary max-heap stored as a dense array,
//! together with a renderer that draws the heap's implicit binary tree
//! as a 2-D ASCII diagram.
//!
//! ## Components
//!
//! 1. **Heap engine**: insert, peek-max, remove-max, and O(n) bulk build,
//!    maintained via sink/bubble passes over the array
//! 2. **Tree view**: a borrowed cursor over (heap, index) that navigates
//!    the array as a binary tree
//! 3. **Renderer**: expands a tree view into a padded level-order snapshot
//!    and lays it out with boxed values and connecting edges
//!
//! ## Usage Example
//!
//! ```
//! use heapviz::{MaxHeap, HeapNode, level_order, render_diagram};
//!
//! let mut heap = MaxHeap::from_vec(vec![3, 1, 4, 1, 5]);
//! heap.insert(9);
//! assert_eq!(heap.peek_max(), Ok(&9));
//!
//! let snapshot = level_order(HeapNode::root(&heap));
//! println!("{}", render_diagram(&snapshot));
//! ```

#![warn(missing_docs, missing_debug_implementations)]
#![allow(clippy::new_without_default)]

// Core modules - each implements one component of the visualizer
pub mod heap;   // Max-heap engine over a dense array
pub mod tree;   // Borrowed node views and level-order traversal
pub mod render; // ASCII tree-diagram layout
pub mod repl;   // Interactive command loop over injected I/O

// Re-exports for convenience
pub use heap::MaxHeap;
pub use render::render_diagram;
pub use tree::{count, height, level_order, BinaryTreeView, HeapNode};

use thiserror::Error;

/// Errors that can occur during heap operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The heap holds no elements, so there is no maximum to return
    #[error("heap is empty")]
    Empty,
}
