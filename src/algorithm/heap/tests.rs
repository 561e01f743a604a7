#![cfg(all(test, feature = "contiguous"))]

use std::cell::Cell;

use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

use super::sift::{left, parent, right};
use super::*;
use crate::algorithm::compare::Greater;
use crate::collections::contiguous::Vector;

const RANDOM_ARRAY: [i32; 20] = [
    74, -42, 48, -44, 14, 5, 96, -98, -80, 18, 64, -38, -31, -36, 73, 25, -18, -45, -42, 30,
];

fn random_values(rng: &mut XorShiftRng, len: usize) -> Vector<i32> {
    (0..len).map(|_| rng.gen_range(-1000..1000)).collect()
}

fn is_sorted<T: PartialOrd>(values: &[T]) -> bool {
    values.windows(2).all(|pair| pair[0] <= pair[1])
}

#[test]
fn test_index_helpers() {
    assert_eq!((left(0), right(0)), (1, 2));
    assert_eq!((left(3), right(3)), (7, 8));
    assert_eq!(parent(1), 0);
    assert_eq!(parent(2), 0);
    assert_eq!(parent(8), 3);
    assert_eq!(parent(0), 0, "The root has no parent and shouldn't underflow.");
}

#[test]
fn test_boundaries() {
    let mut empty: [i32; 0] = [];
    make_heap(&mut empty);
    push_heap(&mut empty);
    pop_heap(&mut empty);
    sort_heap(&mut empty);
    assert!(is_heap(&empty), "An empty range should be a heap.");

    let mut single = [7];
    make_heap(&mut single);
    push_heap(&mut single);
    pop_heap(&mut single);
    sort_heap(&mut single);
    assert_eq!(single, [7], "A single element range should be left untouched.");
    assert!(is_heap(&single));
}

#[test]
fn test_end_to_end() {
    let mut vec = Vector::empty();
    for value in [74, -42, 48, -44, 14] {
        vec.push_back(value);
    }

    make_heap(&mut vec);
    assert!(is_heap(&vec));
    assert_eq!(vec.front(), Ok(&74), "The maximum should be at the root.");

    let mut popped = Vector::new();
    while !vec.is_empty() {
        pop_heap(&mut vec);
        popped.push_back(vec.pop_back().unwrap());
        assert!(is_heap(&vec), "Popping should leave a valid heap behind.");
    }

    assert_eq!(&*popped, &[74, 48, 14, -42, -44]);
}

#[test]
fn test_make_and_sort_fixed_array() {
    let mut values = RANDOM_ARRAY;
    assert!(!is_heap(&values));

    make_heap(&mut values);
    assert!(is_heap(&values));
    assert_eq!(values[0], 96);

    sort_heap(&mut values);
    assert!(is_sorted(&values));

    let mut expected = RANDOM_ARRAY;
    expected.sort();
    assert_eq!(values, expected);

    assert!(!is_heap(&values), "A sorted range generally isn't a max-heap anymore.");
}

#[test]
fn test_duplicate_elements() {
    let mut values = [1; 20];
    assert!(is_heap(&values), "Equal elements should already form a heap.");

    make_heap(&mut values);
    push_heap(&mut values);
    pop_heap(&mut values);
    assert!(is_heap(&values));
    sort_heap(&mut values);
    assert_eq!(values, [1; 20]);
}

#[test]
fn test_tie_break_prefers_parent_then_left() {
    let by_key = |a: &(i32, u8), b: &(i32, u8)| a.0 < b.0;

    let mut values = [(1, 0), (2, 1), (2, 2)];
    make_heap_by(&mut values, by_key);
    assert_eq!(values, [(2, 1), (1, 0), (2, 2)], "Equal children should prefer the left one.");

    let mut values = [(2, 0), (2, 1), (2, 2)];
    make_heap_by(&mut values, by_key);
    assert_eq!(values, [(2, 0), (2, 1), (2, 2)], "Equal children shouldn't replace the parent.");

    let mut values = [(3, 0), (2, 1), (1, 2), (2, 3)];
    push_heap_by(&mut values, by_key);
    assert_eq!(values[1], (2, 1), "An equal child shouldn't be pushed past its parent.");
}

#[test]
fn test_make_heap_is_linear() {
    let mut rng = XorShiftRng::seed_from_u64(0x5EED);

    for len in [10, 100, 1000, 5000] {
        let mut values = random_values(&mut rng, len);
        let count = Cell::new(0_usize);

        make_heap_by(&mut values, |a: &i32, b: &i32| {
            count.set(count.get() + 1);
            a < b
        });

        assert!(is_heap(&values));
        assert!(
            count.get() <= 2 * len,
            "make_heap used {} comparisons for {} elements.",
            count.get(),
            len
        );
    }
}

#[test]
fn test_push_pop_round_trip() {
    let mut rng = XorShiftRng::seed_from_u64(42);

    for _ in 0..50 {
        let len = rng.gen_range(0..200);
        let values = random_values(&mut rng, len);

        let mut heap = Vector::empty();
        for &value in values.iter() {
            heap.push_back(value);
            push_heap(&mut heap);
            assert!(is_heap(&heap));
        }

        let mut popped = Vector::with_cap(len);
        while !heap.is_empty() {
            pop_heap(&mut heap);
            popped.push_back(heap.pop_back().unwrap());
        }

        let mut expected = values.clone();
        expected.sort_by(|a, b| b.cmp(a));
        assert_eq!(popped, expected, "Popping should yield values in descending order.");
    }
}

#[test]
fn test_random_make_and_sort() {
    let mut rng = XorShiftRng::seed_from_u64(7);

    for _ in 0..50 {
        let len = rng.gen_range(0..300);
        let mut values = random_values(&mut rng, len);

        make_heap(&mut values);
        assert_eq!(is_heap_until(&values), len);

        sort_heap(&mut values);
        assert!(is_sorted(&values));
    }
}

#[test]
fn test_min_heap() {
    let mut values = RANDOM_ARRAY;
    make_heap_by(&mut values, Greater);
    assert!(is_heap_by(&values, Greater));
    assert_eq!(values[0], -98, "A min-heap should have the minimum at the root.");

    sort_heap_by(&mut values, Greater);
    assert!(values.windows(2).all(|pair| pair[0] >= pair[1]), "Should be sorted descending.");
}

#[test]
fn test_is_heap_is_pure() {
    let values = [9, 5, 4, 1, 6, 3];
    let before = values;

    let first = is_heap(&values);
    let second = is_heap(&values);

    assert_eq!(first, second);
    assert!(!first);
    assert_eq!(values, before, "is_heap shouldn't modify the range.");
    assert_eq!(is_heap_until(&values), 4);
}

#[test]
fn test_sub_range_of_vector() {
    let mut vec = Vector::from([100, 3, 1, 4, 1, 5, -100]);
    let first = vec.begin() + 1;
    let last = vec.end() - 1;

    let range = vec.range_mut(first, last).unwrap();
    make_heap(range);
    sort_heap(range);

    assert_eq!(&*vec, &[100, 1, 1, 3, 4, 5, -100], "Only the selected range should change.");
}

#[test]
fn test_stateful_comparator_reuse() {
    let calls = Cell::new(0);
    let mut counting = |a: &u32, b: &u32| {
        calls.set(calls.get() + 1);
        a < b
    };

    let mut values = [5, 2, 8, 1, 9, 3];
    make_heap_by(&mut values, &mut counting);
    let after_make = calls.get();
    sort_heap_by(&mut values, &mut counting);

    assert_eq!(values, [1, 2, 3, 5, 8, 9]);
    assert!(calls.get() > after_make, "The same comparator should be used by both calls.");
}
