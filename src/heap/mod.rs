//! Max-heap engine over a dense array
//!
//! A complete binary tree stored in a `Vec`, ordered so that every parent's
//! key is >= both children's keys. Navigation is pure index arithmetic:
//!   parent(i) = (i-1)/2, left(i) = 2i+1, right(i) = 2i+2
//!
//! The tree is always complete because insert appends at the end and
//! remove-max swaps the root with the last slot before truncating.

use tracing::debug;

use crate::HeapError;

/// Binary max-heap with an optional key-extraction hook
///
/// Elements are ordered by the key the hook extracts. The direct
/// constructors ([`MaxHeap::new`], [`MaxHeap::from_vec`]) use a clone of the
/// element itself as its key, so they require `E: Ord + Clone`. The keyed
/// constructors accept any `fn(&E) -> K` and place no bounds on `E`.
#[derive(Debug, Clone)]
pub struct MaxHeap<E, K = E> {
    /// Heap order holds over this array at every public-method boundary
    data: Vec<E>,

    /// Maps an element to the key it is ordered by
    key: fn(&E) -> K,
}

impl<E: Ord + Clone> MaxHeap<E> {
    /// Create an empty heap whose elements are compared directly
    pub fn new() -> Self {
        Self::with_key(Clone::clone)
    }

    /// Build a heap from elements compared directly
    ///
    /// Repairs heap order bottom-up in O(n). An empty vector yields an
    /// empty, valid heap.
    pub fn from_vec(elements: Vec<E>) -> Self {
        Self::from_vec_with_key(elements, Clone::clone)
    }
}

impl<E, K: Ord> MaxHeap<E, K> {
    /// Create an empty heap ordered by the keys `key` extracts
    pub fn with_key(key: fn(&E) -> K) -> Self {
        Self {
            data: Vec::new(),
            key,
        }
    }

    /// Build a heap from elements ordered by the keys `key` extracts
    pub fn from_vec_with_key(elements: Vec<E>, key: fn(&E) -> K) -> Self {
        let mut heap = Self {
            data: elements,
            key,
        };
        heap.heapify();
        heap
    }

    /// Number of elements in the heap
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when the heap holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Insert an element, restoring heap order by bubbling it up
    pub fn insert(&mut self, element: E) {
        self.data.push(element);
        let last = self.data.len() - 1;
        self.bubble(last);
        debug!(len = self.data.len(), "inserted element");
    }

    /// Element with the maximum key, without removing it
    pub fn peek_max(&self) -> Result<&E, HeapError> {
        self.data.first().ok_or(HeapError::Empty)
    }

    /// Remove and return the element with the maximum key
    ///
    /// Swaps the root with the last slot, truncates, then sinks the new
    /// root back into place. Fails without mutating when the heap is empty.
    pub fn remove_max(&mut self) -> Result<E, HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::Empty);
        }

        let last = self.data.len() - 1;
        self.data.swap(0, last);
        let max = self.data.pop().ok_or(HeapError::Empty)?;

        if !self.data.is_empty() {
            self.sink(0);
        }
        debug!(len = self.data.len(), "removed max element");
        Ok(max)
    }

    /// Copy of the backing array in level order (never a live alias)
    pub fn snapshot(&self) -> Vec<E>
    where
        E: Clone,
    {
        self.data.clone()
    }

    /// Index of `index`'s parent
    ///
    /// Total over all inputs: the root and any index outside the heap
    /// return `None`.
    #[inline]
    pub fn parent_of(&self, index: usize) -> Option<usize> {
        if index == 0 || index >= self.data.len() {
            None
        } else {
            Some((index - 1) / 2)
        }
    }

    /// Index of `index`'s left child, if it exists
    #[inline]
    pub fn left_of(&self, index: usize) -> Option<usize> {
        if index >= self.data.len() {
            return None;
        }
        let child = 2 * index + 1;
        (child < self.data.len()).then_some(child)
    }

    /// Index of `index`'s right child, if it exists
    #[inline]
    pub fn right_of(&self, index: usize) -> Option<usize> {
        if index >= self.data.len() {
            return None;
        }
        let child = 2 * index + 2;
        (child < self.data.len()).then_some(child)
    }

    /// Key of the element at `index`, or `None` outside the heap
    pub fn key_at(&self, index: usize) -> Option<K> {
        self.data.get(index).map(|element| (self.key)(element))
    }

    /// Key at a known-valid index
    #[inline]
    pub(crate) fn key_of(&self, index: usize) -> K {
        (self.key)(&self.data[index])
    }

    /// Repair heap order bottom-up, from the parent of the last index to 0
    ///
    /// Only called at construction; every leaf subtree is already a valid
    /// heap, so sinking each interior index suffices.
    fn heapify(&mut self) {
        if self.data.len() < 2 {
            return;
        }
        let last_parent = (self.data.len() - 2) / 2;
        for index in (0..=last_parent).rev() {
            self.sink(index);
        }
    }

    /// Push the value at `index` down until no child's key exceeds it
    fn sink(&mut self, mut index: usize) {
        while let Some(child) = self.greater_child(index) {
            self.data.swap(index, child);
            index = child;
        }
    }

    /// Push the value at `index` up while its key exceeds its parent's
    fn bubble(&mut self, mut index: usize) {
        while let Some(parent) = self.parent_of(index) {
            if self.key_of(index) > self.key_of(parent) {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Child of `index` whose key strictly exceeds `index`'s key
    ///
    /// Equal keys never trigger a swap (the invariant is >=, not >).
    /// When both children exceed the parent with equal keys, the left one
    /// wins, keeping drain order deterministic.
    fn greater_child(&self, index: usize) -> Option<usize> {
        let mut best = index;
        let mut best_key = self.key_of(index);

        if let Some(left) = self.left_of(index) {
            let left_key = self.key_of(left);
            if left_key > best_key {
                best = left;
                best_key = left_key;
            }
        }
        if let Some(right) = self.right_of(index) {
            let right_key = self.key_of(right);
            if right_key > best_key {
                best = right;
            }
        }

        (best != index).then_some(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_heap_order<E, K: Ord>(heap: &MaxHeap<E, K>) {
        for index in 0..heap.len() {
            for child in [heap.left_of(index), heap.right_of(index)].into_iter().flatten() {
                assert!(
                    heap.key_at(index) >= heap.key_at(child),
                    "heap order violated between {index} and {child}"
                );
            }
        }
    }

    #[test]
    fn test_insert_and_peek() {
        let mut heap = MaxHeap::new();
        for value in [3, 1, 4, 1, 5] {
            heap.insert(value);
            assert_heap_order(&heap);
        }
        assert_eq!(heap.peek_max(), Ok(&5));
        assert_eq!(heap.len(), 5);
    }

    #[test]
    fn test_from_vec_heapifies() {
        let heap = MaxHeap::from_vec(vec![92, 48, 94, 37, 32, 76, 14, 84, 50, 79]);
        assert_heap_order(&heap);
        assert_eq!(heap.peek_max(), Ok(&94));
    }

    #[test]
    fn test_remove_max_drains_sorted() {
        let mut heap = MaxHeap::from_vec(vec![92, 48, 94, 37, 32, 76, 14, 84, 50, 79]);
        let mut drained = Vec::new();
        while let Ok(max) = heap.remove_max() {
            assert_heap_order(&heap);
            drained.push(max);
        }
        assert_eq!(drained, vec![94, 92, 84, 79, 76, 50, 48, 37, 32, 14]);
    }

    #[test]
    fn test_empty_heap_errors() {
        let mut heap: MaxHeap<i64> = MaxHeap::new();
        assert_eq!(heap.peek_max(), Err(HeapError::Empty));
        assert_eq!(heap.remove_max(), Err(HeapError::Empty));
    }

    #[test]
    fn test_single_element() {
        let mut heap = MaxHeap::from_vec(vec![7]);
        assert_eq!(heap.remove_max(), Ok(7));
        assert!(heap.is_empty());
        assert_eq!(heap.remove_max(), Err(HeapError::Empty));
    }

    #[test]
    fn test_navigation_totality() {
        let heap = MaxHeap::from_vec(vec![5, 3, 1]);
        assert_eq!(heap.parent_of(0), None);
        assert_eq!(heap.parent_of(2), Some(0));
        assert_eq!(heap.left_of(0), Some(1));
        assert_eq!(heap.right_of(0), Some(2));
        assert_eq!(heap.left_of(1), None);

        // Out-of-range indices are absent, never a panic
        assert_eq!(heap.parent_of(3), None);
        assert_eq!(heap.left_of(17), None);
        assert_eq!(heap.right_of(17), None);
        assert_eq!(heap.key_at(3), None);
    }

    #[test]
    fn test_key_extraction_hook() {
        // Order pairs by their second field only
        let mut heap = MaxHeap::from_vec_with_key(
            vec![("low", 1), ("high", 9), ("mid", 4)],
            |pair: &(&str, i32)| pair.1,
        );
        assert_eq!(heap.peek_max(), Ok(&("high", 9)));
        assert_eq!(heap.remove_max(), Ok(("high", 9)));
        assert_eq!(heap.remove_max(), Ok(("mid", 4)));
        assert_eq!(heap.remove_max(), Ok(("low", 1)));
    }

    #[test]
    fn test_equal_keys_do_not_swap() {
        // All-equal keys: build and removals must stay valid
        let mut heap = MaxHeap::from_vec(vec![2, 2, 2, 2]);
        assert_heap_order(&heap);
        for _ in 0..4 {
            assert_eq!(heap.remove_max(), Ok(2));
            assert_heap_order(&heap);
        }
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let mut heap = MaxHeap::from_vec(vec![5, 3, 1]);
        let before = heap.snapshot();
        heap.insert(9);
        assert_eq!(before, vec![5, 3, 1]);
        assert_eq!(heap.snapshot().len(), 4);
    }
}
