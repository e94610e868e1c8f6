//! Concrete heap-engine scenarios

use heapviz::{HeapError, MaxHeap};
use test_case::test_case;

#[test_case(&[92, 48, 94, 37, 32, 76, 14, 84, 50, 79], &[94, 92, 84, 79, 76, 50, 48, 37, 32, 14]; "assignment example")]
#[test_case(&[1, 2, 3, 4, 5], &[5, 4, 3, 2, 1]; "ascending input")]
#[test_case(&[5, 4, 3, 2, 1], &[5, 4, 3, 2, 1]; "descending input")]
#[test_case(&[2, 2, 2], &[2, 2, 2]; "all equal keys")]
#[test_case(&[7], &[7]; "single element")]
#[test_case(&[], &[]; "empty input")]
fn drains_in_non_increasing_order(input: &[i64], expected: &[i64]) {
    let mut heap = MaxHeap::from_vec(input.to_vec());
    let mut drained = Vec::new();
    while let Ok(max) = heap.remove_max() {
        drained.push(max);
    }
    assert_eq!(drained, expected);
}

#[test]
fn inserts_track_size_and_max() {
    let mut heap = MaxHeap::new();
    for value in [3, 1, 4, 1, 5] {
        heap.insert(value);
    }
    assert_eq!(heap.len(), 5);
    assert_eq!(heap.peek_max(), Ok(&5));
}

#[test]
fn remove_decrements_size_by_one() {
    let mut heap = MaxHeap::from_vec(vec![10, 20, 30]);
    assert_eq!(heap.len(), 3);
    heap.remove_max().expect("heap is non-empty");
    assert_eq!(heap.len(), 2);
}

#[test]
fn rebuilding_a_valid_heap_changes_nothing() {
    let heap = MaxHeap::from_vec(vec![92, 48, 94, 37, 32, 76, 14, 84, 50, 79]);
    let array = heap.snapshot();
    let rebuilt = MaxHeap::from_vec(array.clone());
    assert_eq!(rebuilt.snapshot(), array);
}

#[test]
fn empty_heap_surfaces_errors() {
    let mut heap: MaxHeap<i64> = MaxHeap::new();
    assert_eq!(heap.peek_max(), Err(HeapError::Empty));
    assert_eq!(heap.remove_max(), Err(HeapError::Empty));
    // A failed removal must not have mutated anything
    assert_eq!(heap.len(), 0);
}

#[test]
fn build_then_drain_with_key_hook() {
    let mut heap = MaxHeap::from_vec_with_key(
        vec![("a", 3), ("b", 9), ("c", 1), ("d", 9)],
        |pair: &(&str, i32)| pair.1,
    );
    let mut keys = Vec::new();
    while let Ok((_, key)) = heap.remove_max() {
        keys.push(key);
    }
    assert_eq!(keys, vec![9, 9, 3, 1]);
}
