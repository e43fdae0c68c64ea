//! Integration test: the append-then-remove scenario the demo runs.
//!
//! Initialize with capacity 10, append 0..19, remove position 10, release.

use growarr::{ArrayError, GrowableArray, ShrinkOutcome};
use growarr_test_utils::sequential_array;

#[test]
fn append_twenty_then_remove_middle() {
    let mut arr = GrowableArray::initialize(10).unwrap();
    for i in 0..20 {
        arr.append(i).unwrap();
    }

    assert_eq!(arr.size(), 20);
    // 10 -> 20 at size 9, 20 -> 40 at size 19.
    assert_eq!(arr.capacity(), 40);
    assert!(arr.capacity() >= 20);
    let expected: Vec<i32> = (0..20).collect();
    assert_eq!(arr.as_slice(), expected.as_slice());

    let removal = arr.remove(10).unwrap();
    assert_eq!(removal.value, 10);
    assert_eq!(removal.shrink, ShrinkOutcome::Shrunk { from: 40, to: 39 });
    assert_eq!(arr.size(), 19);
    let expected: Vec<i32> = (0..10).chain(11..20).collect();
    assert_eq!(arr.as_slice(), expected.as_slice());

    arr.release();
    arr.release();
    assert!(arr.is_released());
}

#[test]
fn position_equal_to_size_is_rejected() {
    let mut arr = sequential_array(10, 5).unwrap();
    assert_eq!(
        arr.remove(5),
        Err(ArrayError::OutOfBounds {
            position: 5,
            size: 5
        })
    );
    assert_eq!(arr.as_slice(), &[0, 1, 2, 3, 4]);
    assert_eq!(arr.capacity(), 10);
}

#[test]
fn repeated_removals_shrink_one_slot_each() {
    let mut arr = sequential_array(10, 8).unwrap();
    let start = arr.capacity();
    for n in 1..=8 {
        arr.remove(0).unwrap();
        assert_eq!(arr.capacity(), start - n);
        assert!(arr.size() <= arr.capacity());
    }
    assert!(arr.is_empty());
}

#[test]
fn reinitialize_after_release_gives_fresh_array() {
    let mut arr = sequential_array(4, 3).unwrap();
    arr.release();
    assert_eq!(arr.append(1), Err(ArrayError::Released));

    arr = GrowableArray::initialize(4).unwrap();
    assert!(!arr.is_released());
    assert!(arr.is_empty());
    arr.append(1).unwrap();
    assert_eq!(arr.as_slice(), &[1]);
}

#[test]
fn memory_bytes_tracks_capacity() {
    let arr = sequential_array(10, 20).unwrap();
    assert_eq!(arr.memory_bytes(), arr.capacity() * 4);
}
