#![cfg(test)]

use std::hash::{BuildHasher, RandomState};
use std::iter;

use super::*;
use crate::collections::contiguous::storage::Global;
use crate::util::alloc::{CountedDrop, FailingAlloc, ZeroSizedType};
use crate::util::error::{EmptyCollection, IndexOutOfBounds, ReserveError};
use crate::util::panic::assert_panics;
use crate::vector;

#[test]
fn test_construction_capacities() {
    let vec: Vector<u8> = Vector::new();
    assert_eq!((vec.len(), vec.cap()), (0, 10), "A new Vector should have the default capacity.");

    let vec: Vector<u8> = Vector::empty();
    assert_eq!((vec.len(), vec.cap()), (0, 0), "An empty Vector shouldn't allocate.");

    let vec: Vector<u8> = Vector::with_cap(3);
    assert_eq!((vec.len(), vec.cap()), (0, 3));

    let vec = Vector::from_elem(7_u16, 4);
    assert_eq!(&*vec, &[7, 7, 7, 7]);
    assert_eq!(vec.cap(), 4, "from_elem should allocate exactly the requested count.");

    let vec = Vector::from([1, 2, 3]);
    assert_eq!(vec.cap(), 10, "Short literal lists should use the default capacity.");

    let vec = Vector::from([0_u8; 12]);
    assert_eq!(vec.cap(), 12, "Long literal lists should use their own length.");

    let source = [1, 2, 3, 4, 5];
    let vec = Vector::from_range(&source[1..4]);
    assert_eq!(&*vec, &[2, 3, 4]);
    assert_eq!(vec.cap(), 3);
}

#[test]
fn test_macro() {
    let vec: Vector<i32> = vector![];
    assert!(vec.is_empty());
    assert_eq!(vec.cap(), 10);

    let vec = vector![1, 2, 3,];
    assert_eq!(&*vec, &[1, 2, 3]);

    let vec = vector![String::from("a"); 3];
    assert_eq!(&*vec, &["a", "a", "a"]);
    assert_eq!(vec.cap(), 3);
}

#[test]
fn test_push_back_growth() {
    let mut vec = Vector::new();
    let mut caps = Vector::new();
    for i in 0..25 {
        *vec.push_back(i) += 100;
        caps.push_back(vec.cap());
    }

    assert_eq!(vec.len(), 25);
    assert_eq!(vec[0], 100, "push_back should return a reference to the new element.");
    assert_eq!(vec[24], 124);
    assert_eq!(caps[9], 10, "Growth shouldn't happen before the Vector is full.");
    assert_eq!(caps[10], 20, "Capacity should double when full.");
    assert_eq!(caps[24], 40);

    let mut vec = Vector::empty();
    vec.push_back(1);
    assert_eq!(vec.cap(), 1, "Growth from zero capacity should go to one.");
    vec.push_back(2);
    assert_eq!(vec.cap(), 2);
    vec.push_back(3);
    assert_eq!(vec.cap(), 4);
}

#[test]
fn test_emplace_back() {
    let mut vec = Vector::with_cap(1);
    vec.push_back(String::from("a"));

    let value = vec.emplace_back(|| String::from("b"));
    value.push('c');

    assert_eq!(vec.cap(), 2, "Emplacing into a full Vector should grow it.");
    assert_eq!(&*vec, &["a", "bc"]);
}

#[test]
fn test_pop_back() {
    let mut vec = Vector::from([0, 1, 2]);
    assert_eq!(vec.pop_back(), Ok(2));
    assert_eq!(vec.pop_back(), Ok(1));
    assert_eq!(vec.pop_back(), Ok(0));
    assert_eq!(vec.pop_back(), Err(EmptyCollection), "Popping an empty Vector should fail.");
    assert_eq!(vec.cap(), 10, "Popping shouldn't affect the capacity.");
}

#[test]
fn test_checked_access() {
    let mut vec = Vector::from([10, 20, 30]);

    assert_eq!(vec.at(0), Ok(&10));
    assert_eq!(vec.at(3), Err(IndexOutOfBounds { index: 3, len: 3 }));
    *vec.at_mut(1).unwrap() = 21;
    assert_eq!(vec.at_mut(5), Err(IndexOutOfBounds { index: 5, len: 3 }));

    assert_eq!(vec.front(), Ok(&10));
    assert_eq!(vec.back(), Ok(&30));
    *vec.front_mut().unwrap() = 11;
    *vec.back_mut().unwrap() = 31;
    assert_eq!(&*vec, &[11, 21, 31]);

    let mut empty: Vector<u8> = Vector::new();
    assert_eq!(empty.front(), Err(EmptyCollection));
    assert_eq!(empty.back(), Err(EmptyCollection));
    assert_eq!(empty.front_mut(), Err(EmptyCollection));
    assert_eq!(empty.back_mut(), Err(EmptyCollection));

    assert_panics!({ vec[3] });
    // SAFETY: 2 < len.
    assert_eq!(unsafe { *vec.get_unchecked(2) }, 31);
}

#[test]
fn test_positions() {
    let mut vec = Vector::from([1, 2, 3, 4, 5]);
    let first = vec.begin();
    let last = vec.end();

    assert_eq!(last - first, 5);
    assert_eq!(first.distance_to(last), 5);
    assert_eq!(first - last, -5);
    assert_eq!(vec.get_at(first + 4), Ok(&5));
    assert_eq!(vec.get_at(last), Err(IndexOutOfBounds { index: 5, len: 5 }));
    assert_eq!(first.checked_sub(1), None);

    *vec.get_at_mut(last - 1).unwrap() = 50;
    assert_eq!(vec.range(first + 1, last), Ok(&[2, 3, 4, 50][..]));
    assert!(vec.range(last, first).is_err(), "Reversed ranges should be rejected.");
    assert!(vec.range(first, last + 1).is_err(), "Ranges past the end should be rejected.");

    vec.range_mut(first, first + 2).unwrap().reverse();
    assert_eq!(&*vec, &[2, 1, 3, 4, 50]);
}

#[test]
fn test_insert() {
    let mut vec = Vector::with_cap(4);
    vec.extend([1, 3, 5]);

    let pos = vec.insert(vec.begin() + 1, 2).unwrap();
    assert_eq!(pos.index(), 1);
    assert_eq!(&*vec, &[1, 2, 3, 5]);

    let pos = vec.insert(vec.end() - 1, 4).unwrap();
    assert_eq!(vec.cap(), 8, "Inserting into a full Vector should grow it.");
    assert_eq!(vec.get_at(pos), Ok(&4));

    vec.insert(vec.end(), 6).unwrap();
    vec.insert(vec.begin(), 0).unwrap();
    assert_eq!(&*vec, &[0, 1, 2, 3, 4, 5, 6]);

    assert_eq!(
        vec.insert(vec.end() + 1, 99),
        Err(IndexOutOfBounds { index: 8, len: 7 }),
        "Inserting past the end should fail."
    );
    assert_eq!(vec.len(), 7, "A failed insertion shouldn't change the Vector.");

    let mut vec: Vector<String> = Vector::empty();
    vec.emplace(vec.begin(), || String::from("b")).unwrap();
    vec.emplace(vec.begin(), || String::from("a")).unwrap();
    assert_eq!(&*vec, &["a", "b"]);
    assert!(vec.emplace(vec.end() + 3, || unreachable!()).is_err());
}

#[test]
fn test_insert_erase_round_trip() {
    let mut vec = Vector::from([1, 2, 4, 5]);

    let pos = vec.insert(vec.begin() + 2, 3).unwrap();
    assert_eq!(vec.len(), 5);
    assert_eq!(&*vec, &[1, 2, 3, 4, 5]);
    assert_eq!(vec.get_at(pos), Ok(&3), "The returned Position should refer to the new value.");

    assert_eq!(vec.erase(pos), Ok(3));
    assert_eq!(vec.len(), 4);
    assert_eq!(&*vec, &[1, 2, 4, 5], "Erasing the inserted value should restore the original.");
}

#[test]
fn test_erase() {
    let counter = CountedDrop::new(0);
    let mut vec: Vector<_> = iter::repeat_with(|| counter.clone()).take(5).collect();

    let removed = vec.erase(vec.begin() + 2).unwrap();
    assert_eq!(*counter.borrow(), 0, "Erase should move the value out, not drop it.");
    drop(removed);
    assert_eq!(*counter.borrow(), 1);
    assert_eq!(vec.len(), 4);

    assert!(vec.erase(vec.end()).is_err());

    let mut vec = Vector::from([0, 1, 2, 3, 4]);
    assert_eq!(vec.erase(vec.begin()), Ok(0));
    assert_eq!(vec.erase(vec.end() - 1), Ok(4));
    assert_eq!(&*vec, &[1, 2, 3]);
}

#[test]
fn test_erase_range() {
    let counter = CountedDrop::new(0);
    let mut vec: Vector<_> = iter::repeat_with(|| counter.clone()).take(8).collect();

    let next = vec.erase_range(vec.begin() + 2, vec.begin() + 5).unwrap();
    assert_eq!(next.index(), 2);
    assert_eq!(vec.len(), 5);
    assert_eq!(*counter.borrow(), 3, "Each erased value should be dropped once.");

    let next = vec.erase_range(vec.begin() + 1, vec.begin() + 1).unwrap();
    assert_eq!(next.index(), 1, "An empty range should be a no-op.");
    assert_eq!(vec.len(), 5);

    assert!(vec.erase_range(vec.begin() + 3, vec.begin() + 2).is_err());
    assert!(vec.erase_range(vec.begin(), vec.end() + 1).is_err());

    vec.erase_range(vec.begin(), vec.end()).unwrap();
    assert!(vec.is_empty());
    assert_eq!(*counter.borrow(), 8);

    let mut vec = Vector::from([0, 1, 2, 3, 4, 5]);
    vec.erase_range(vec.begin() + 4, vec.end()).unwrap();
    assert_eq!(&*vec, &[0, 1, 2, 3]);
}

#[test]
fn test_reserve_and_shrink() {
    let mut vec = Vector::from([1, 2, 3]);

    vec.reserve(5);
    assert_eq!(vec.cap(), 10, "Reserving less than the capacity should do nothing.");

    vec.reserve(25);
    assert_eq!(vec.cap(), 25, "Reserve should allocate exactly the requested capacity.");
    assert_eq!(&*vec, &[1, 2, 3], "Reserve should keep every element.");

    vec.shrink_to_fit();
    assert_eq!(vec.cap(), 3);
    assert_eq!(&*vec, &[1, 2, 3]);

    vec.clear();
    vec.shrink_to_fit();
    assert_eq!(vec.cap(), 0);

    assert_panics!({
        let mut vec: Vector<u8> = Vector::new();
        vec.reserve(isize::MAX as usize + 1)
    }, contains "Capacity overflow!");
}

#[test]
fn test_try_reserve_failure() {
    let alloc = FailingAlloc { limit: 16 * size_of::<u32>() };
    let mut vec: Vector<u32, FailingAlloc> = Vector::with_cap_in(4, alloc);
    vec.extend([1, 2, 3, 4]);
    let old_ptr = vec.as_ptr();

    let result = vec.try_reserve(32);
    assert!(matches!(result, Err(ReserveError::AllocFailure(_))));
    assert_eq!(vec.cap(), 4, "A failed reserve should leave the capacity untouched.");
    assert_eq!(vec.as_ptr(), old_ptr);
    assert_eq!(&*vec, &[1, 2, 3, 4]);

    assert_eq!(vec.try_reserve(16), Ok(()));
    assert_eq!(vec.cap(), 16);
    assert_eq!(&*vec, &[1, 2, 3, 4]);

    let mut vec: Vector<u64> = Vector::new();
    assert!(matches!(vec.try_reserve(usize::MAX), Err(ReserveError::CapacityOverflow(_))));
}

#[test]
fn test_resize_and_truncate() {
    let counter = CountedDrop::new(0);
    let mut vec = Vector::new();
    vec.resize(6, counter.clone());
    assert_eq!(vec.len(), 6);
    // Only the value passed to resize is dropped, after being cloned.
    assert_eq!(*counter.borrow(), 1);

    vec.truncate(10);
    assert_eq!(vec.len(), 6, "Truncating to a larger length should do nothing.");

    vec.truncate(2);
    assert_eq!(*counter.borrow(), 5);
    assert_eq!(vec.cap(), 10, "Truncation shouldn't change the capacity.");

    vec.resize(0, counter.clone());
    assert_eq!(*counter.borrow(), 8);

    let mut next = 0;
    let mut vec: Vector<i32> = Vector::empty();
    vec.resize_with(4, || {
        next += 1;
        next
    });
    assert_eq!(&*vec, &[1, 2, 3, 4]);
    assert_eq!(vec.cap(), 4);
}

#[test]
fn test_swap_and_take() {
    let mut a = Vector::from([1, 2, 3]);
    let mut b = Vector::with_cap(2);
    b.push_back(9);

    a.swap(&mut b);
    assert_eq!((&*a, a.cap()), (&[9][..], 2));
    assert_eq!((&*b, b.cap()), (&[1, 2, 3][..], 10));

    let taken = b.take();
    assert_eq!(&*taken, &[1, 2, 3]);
    assert_eq!((b.len(), b.cap()), (0, 0));
}

#[test]
fn test_clone() {
    let mut vec = Vector::with_cap(7);
    vec.extend(["a", "b"].map(String::from));

    let mut cloned = vec.clone();
    assert_eq!(cloned, vec);
    assert_eq!(cloned.cap(), 7, "A clone should keep the capacity.");
    assert_ne!(cloned.as_ptr(), vec.as_ptr());

    cloned[0].push('!');
    assert_eq!(vec[0], "a", "A clone should be independent.");
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let vec: Vector<_> = iter::repeat_with(|| counter.clone()).take(10).collect();

    drop(vec);

    assert_eq!(counter.take(), 10, "10 elements should have been dropped.");
}

#[test]
fn test_into_iter() {
    let vec = Vector::from([1, 2, 3, 4, 5]);
    let mut iter = vec.into_iter();

    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.next_back(), Some(5));
    assert_eq!(iter.as_slice(), &[2, 3, 4]);
    assert_eq!(iter.collect::<Vector<_>>(), Vector::from([2, 3, 4]));

    let counter = CountedDrop::new(0);
    let vec: Vector<_> = iter::repeat_with(|| counter.clone()).take(6).collect();
    let mut iter = vec.into_iter();
    drop(iter.next());
    drop(iter);
    assert_eq!(counter.take(), 6, "Unyielded values should be dropped with the iterator.");

    let mut vec = Vector::from([1, 2, 3]);
    for value in &mut vec {
        *value *= 2;
    }
    assert_eq!((&vec).into_iter().sum::<i32>(), 12);
}

#[test]
fn test_append_and_extend() {
    let mut vec = Vector::from([1, 2]);
    vec.append(Vector::from([3, 4]));
    vec.extend(&[5, 6]);
    vec.extend(7..=8);
    assert_eq!(&*vec, &[1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn test_equality_and_hash() {
    let vec: Vector<usize> = (0..5).collect();

    assert_eq!(
        vec,
        Vector::from([0, 1, 2, 3, 4]),
        "Different construction methods should produce equal results."
    );
    assert_ne!(Vector::from([0, 1, 2, 5, 4]), vec);

    let other: Vector<usize, Global> = Vector::with_cap_in(20, Global);
    assert_ne!(vec, other);

    let mut roomy = Vector::with_cap(50);
    roomy.extend(vec.iter().copied());
    assert_eq!(roomy, vec);
    assert_ne!(roomy.cap(), vec.cap());

    let state = RandomState::new();
    assert_eq!(
        state.hash_one(&vec),
        state.hash_one(&roomy),
        "Equal Vectors should hash equally regardless of capacity."
    );
}

#[test]
fn test_formatting() {
    let vec = Vector::from([1, 2]);
    assert_eq!(format!("{vec}"), "[1, 2]");
    assert_eq!(format!("{vec:?}"), "Vector { contents: [1, 2], len: 2, cap: 10 }");
}

#[test]
fn test_zst_support() {
    let mut vec = Vector::<ZeroSizedType>::new();
    for _ in 0..100 {
        vec.push_back(ZeroSizedType);
    }
    assert_eq!(vec.len(), 100);
    assert_eq!(vec[99], ZeroSizedType);
    assert_eq!(vec.erase(vec.begin()), Ok(ZeroSizedType));
    assert_eq!(vec.into_iter().count(), 99);
}
