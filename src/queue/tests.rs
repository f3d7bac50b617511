use super::*;
use crate::error::ErrorKind;

/// Checks element[parent(i)] <= element[i] over the heap-array order
fn assert_heap_order<T: Ord + fmt::Debug>(queue: &PriorityQueue<T>) {
    let items: Vec<&T> = queue.iter().collect();
    assert_eq!(items.len(), queue.len());
    for i in 2..=items.len() {
        let child = items[i - 1];
        let parent = items[i / 2 - 1];
        assert!(
            parent <= child,
            "heap order broken at {}: parent {:?} > child {:?}",
            i,
            parent,
            child
        );
    }
}

/// Deterministic pseudo-random values (LCG)
fn scrambled(n: usize, seed: u64) -> Vec<i64> {
    let mut state = seed;
    (0..n)
        .map(|_| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            ((state >> 33) % 1000) as i64 - 500
        })
        .collect()
}

fn drain<T: Ord>(queue: &mut PriorityQueue<T>) -> Vec<T> {
    let mut out = Vec::new();
    while !queue.is_empty() {
        out.push(queue.dequeue().unwrap());
    }
    out
}

#[test]
fn test_new_queue_is_empty() {
    let queue: PriorityQueue<i32> = PriorityQueue::new();
    assert_eq!(queue.len(), 0);
    assert!(queue.is_empty());
    assert_eq!(queue.capacity_depth(), INITIAL_DEPTH);
    assert_eq!(queue.capacity(), 3);
}

#[test]
fn test_count_tracks_inserts() {
    for values in [vec![1, 2, 3, 4], vec![1, 2, 3, 4, -1, 45], vec![-5], vec![]] {
        let mut queue = PriorityQueue::new();
        for value in &values {
            queue.insert(*value);
        }
        assert_eq!(queue.len(), values.len());
    }
}

#[test]
fn test_depth_and_capacity_grow_one_level_at_a_time() {
    let cases = [(3, 2, 3), (4, 3, 7), (7, 3, 7), (8, 4, 15), (15, 4, 15), (16, 5, 31)];
    for (count, expected_depth, expected_capacity) in cases {
        let mut queue = PriorityQueue::new();
        for i in 0..count {
            queue.insert(i);
        }
        assert_eq!(queue.capacity_depth(), expected_depth, "count {}", count);
        assert_eq!(queue.capacity(), expected_capacity, "count {}", count);
    }
}

#[test]
fn test_insert_into_full_queue_resizes_once() {
    let mut queue = PriorityQueue::new();
    for i in 0..3 {
        queue.insert(i);
    }
    assert_eq!(queue.capacity(), queue.len());

    queue.insert(3);
    assert_eq!(queue.capacity_depth(), INITIAL_DEPTH + 1);
    assert_eq!(queue.capacity(), 7);
}

#[test]
fn test_single_insert_then_dequeue() {
    for value in [-5, 0, 5] {
        let mut queue = PriorityQueue::new();
        queue.insert(value);
        assert_eq!(queue.dequeue().unwrap(), value);
        assert!(queue.is_empty());
    }
}

#[test]
fn test_peek_returns_minimum() {
    for values in [vec![1, 2, 3, 4], vec![1, 2, 3, 4, -1, 45], vec![-5]] {
        let mut queue = PriorityQueue::new();
        queue.extend(values.iter().copied());
        let expected = *values.iter().min().unwrap();
        assert_eq!(*queue.peek().unwrap(), expected);
        assert_eq!(queue.len(), values.len());
    }
}

#[test]
fn test_peek_on_empty_queue_fails() {
    let queue: PriorityQueue<i32> = PriorityQueue::new();
    let err = queue.peek().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::EmptyCollection);
}

#[test]
fn test_dequeue_on_empty_queue_fails() {
    let mut queue: PriorityQueue<i32> = PriorityQueue::new();
    let err = queue.dequeue().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::EmptyCollection);

    queue.insert(1);
    queue.dequeue().unwrap();
    assert_eq!(
        queue.dequeue().unwrap_err().kind(),
        ErrorKind::EmptyCollection
    );
}

#[test]
fn test_build_heap_then_dequeue_is_sorted() {
    let values = vec![92, 47, 21, 20, 12, 45, 63, 61, 17, 55, 37, 25, 64, 83, 73];
    let mut queue = PriorityQueue::new();
    queue.build_heap(values.clone());
    assert_heap_order(&queue);
    assert_eq!(queue.capacity_depth(), 4);

    let mut expected = values;
    expected.sort();
    assert_eq!(drain(&mut queue), expected);
}

#[test]
fn test_build_heap_sizes_for_non_power_lengths() {
    for len in [0usize, 1, 2, 6, 14, 17, 100] {
        let values = scrambled(len, len as u64 + 7);
        let mut queue = PriorityQueue::new();
        queue.build_heap(values.clone());
        assert!(queue.capacity() >= len, "len {}", len);
        assert_heap_order(&queue);

        let mut expected = values;
        expected.sort();
        assert_eq!(drain(&mut queue), expected);
    }
}

#[test]
fn test_build_heap_never_shrinks_depth() {
    let mut queue = PriorityQueue::with_depth(6);
    queue.build_heap(vec![3, 1, 2]);
    assert_eq!(queue.capacity_depth(), 6);
    assert_eq!(queue.len(), 3);
    assert_eq!(*queue.peek().unwrap(), 1);
}

#[test]
fn test_build_heap_replaces_contents() {
    let mut queue = PriorityQueue::new();
    queue.extend([10, 11, 12]);
    queue.build_heap(vec![5, 4]);
    assert_eq!(drain(&mut queue), vec![4, 5]);
}

#[test]
fn test_heap_order_holds_across_mixed_operations() {
    let mut queue = PriorityQueue::new();
    let values = scrambled(200, 42);
    let mut removed = Vec::new();

    for (i, value) in values.iter().enumerate() {
        queue.insert(*value);
        if i % 3 == 2 {
            removed.push(queue.dequeue().unwrap());
        }
        assert_heap_order(&queue);
    }

    let remaining = drain(&mut queue);
    assert!(remaining.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(removed.len() + remaining.len(), values.len());
}

#[test]
fn test_duplicates_are_kept() {
    let mut queue: PriorityQueue<i32> = [2, 1, 2, 1, 2].into_iter().collect();
    assert_eq!(drain(&mut queue), vec![1, 1, 2, 2, 2]);
}

#[test]
fn test_depth_never_shrinks_after_dequeue() {
    let mut queue = PriorityQueue::new();
    queue.extend(0..20);
    let depth = queue.capacity_depth();
    drain(&mut queue);
    assert_eq!(queue.capacity_depth(), depth);
}

#[test]
fn test_clear_keeps_capacity() {
    let mut queue = PriorityQueue::new();
    queue.extend(0..10);
    let capacity = queue.capacity();
    queue.clear();
    assert!(queue.is_empty());
    assert_eq!(queue.capacity(), capacity);
    assert!(queue.peek().is_err());
}

#[test]
fn test_with_depth_clamps() {
    let queue: PriorityQueue<u8> = PriorityQueue::with_depth(0);
    assert_eq!(queue.capacity_depth(), 1);
    assert_eq!(queue.capacity(), 1);
}

#[test]
fn test_from_config_validates() {
    let config = QueueConfig { initial_depth: 5 };
    let queue: PriorityQueue<u8> = PriorityQueue::from_config(&config).unwrap();
    assert_eq!(queue.capacity(), 31);

    let bad = QueueConfig { initial_depth: 0 };
    let err = PriorityQueue::<u8>::from_config(&bad).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidValue);
}

#[test]
fn test_display_lists_heap_array() {
    let mut queue = PriorityQueue::new();
    queue.extend([3, 1, 2]);
    assert_eq!(queue.to_string(), "1, 3, 2");
}
