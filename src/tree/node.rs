//! Read-only tree cursors
//!
//! A node view is a logical position, not a structural object: it owns
//! nothing and borrows the tree it navigates. [`HeapNode`] is the view
//! over a heap's implicit tree, a (heap reference, index) pair.

use crate::heap::MaxHeap;

/// A navigable, read-only view of a binary tree node
///
/// Implementors expose their children as further views and their value by
/// copy. Absent children are `None`; a view itself always points at a
/// real node.
pub trait BinaryTreeView: Sized {
    /// Value carried by the node this view points at
    type Value;

    /// View of the left child, if present
    fn left(&self) -> Option<Self>;

    /// View of the right child, if present
    fn right(&self) -> Option<Self>;

    /// Value at this node
    fn value(&self) -> Self::Value;
}

/// Cursor over one position of a heap's implicit binary tree
///
/// Just an index plus a borrow of the heap; cheap to copy, constructed
/// per traversal and discarded after.
#[derive(Debug)]
pub struct HeapNode<'a, E, K> {
    heap: &'a MaxHeap<E, K>,
    index: usize,
}

impl<'a, E, K> Clone for HeapNode<'a, E, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, E, K> Copy for HeapNode<'a, E, K> {}

impl<'a, E, K: Ord> HeapNode<'a, E, K> {
    /// View of the heap's root, or `None` for an empty heap
    pub fn root(heap: &'a MaxHeap<E, K>) -> Option<Self> {
        (!heap.is_empty()).then_some(Self { heap, index: 0 })
    }

    /// Index this view points at
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }
}

impl<'a, E, K: Ord> BinaryTreeView for HeapNode<'a, E, K> {
    type Value = K;

    fn left(&self) -> Option<Self> {
        self.heap.left_of(self.index).map(|index| Self {
            heap: self.heap,
            index,
        })
    }

    fn right(&self) -> Option<Self> {
        self.heap.right_of(self.index).map(|index| Self {
            heap: self.heap,
            index,
        })
    }

    fn value(&self) -> K {
        // Views only ever point inside the heap
        self.heap.key_of(self.index)
    }
}
