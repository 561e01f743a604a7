#![cfg(test)]

use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

use super::*;
use crate::algorithm::compare::Greater;
use crate::algorithm::heap::{is_heap, is_heap_by};
use crate::collections::contiguous::Vector;
use crate::collections::linked::LinkedList;
use crate::util::alloc::CountedDrop;
use crate::util::error::EmptyCollection;

#[test]
fn test_stack_order() {
    let mut stack = Stack::new();
    assert_eq!(stack.top(), Err(EmptyCollection));
    assert_eq!(stack.pop(), Err(EmptyCollection));

    for i in 1..=5 {
        stack.push(i);
        assert_eq!(stack.top(), Ok(&i), "The last pushed element should be on top.");
    }
    stack.emplace(|| 6);
    *stack.top_mut().unwrap() *= 10;
    assert_eq!(stack.len(), 6);

    let mut popped = Vector::new();
    while let Ok(value) = stack.pop() {
        popped.push_back(value);
    }
    assert_eq!(&*popped, &[60, 5, 4, 3, 2, 1]);
    assert!(stack.is_empty());
}

#[test]
fn test_stack_over_linked_list() {
    let mut stack: Stack<_, LinkedList<_>> = Stack::default();
    stack.extend(['a', 'b', 'c']);

    assert_eq!(stack.pop(), Ok('c'));
    assert_eq!(stack.top(), Ok(&'b'));

    let list = stack.into_inner();
    assert_eq!(list, LinkedList::from_iter(['a', 'b']));
}

#[test]
fn test_stack_swap_and_clone() {
    let mut a: Stack<_> = (0..3).collect();
    let mut b = Stack::new();
    b.push(100);

    a.swap(&mut b);
    assert_eq!(a.len(), 1);
    assert_eq!(b.top(), Ok(&2));

    let c = b.clone();
    assert_eq!(c.into_inner(), b.into_inner());
    assert_eq!(
        format!("{:?}", a),
        "Stack { container: Vector { contents: [100], len: 1, cap: 10 } }"
    );
}

#[test]
fn test_queue_order() {
    let mut queue = Queue::new();
    assert_eq!(queue.front(), Err(EmptyCollection));
    assert_eq!(queue.back(), Err(EmptyCollection));
    assert_eq!(queue.pop(), Err(EmptyCollection));

    queue.push(1);
    queue.push(2);
    queue.emplace(|| 3);
    assert_eq!(queue.front(), Ok(&1));
    assert_eq!(queue.back(), Ok(&3));

    *queue.front_mut().unwrap() = 10;
    *queue.back_mut().unwrap() = 30;

    assert_eq!(queue.pop(), Ok(10), "The oldest element should be popped first.");
    assert_eq!(queue.pop(), Ok(2));
    queue.push(4);
    assert_eq!(queue.pop(), Ok(30));
    assert_eq!(queue.pop(), Ok(4));
    assert!(queue.is_empty());
}

#[test]
fn test_queue_swap_and_format() {
    let mut a: Queue<_> = (0..4).collect();
    let mut b = Queue::from_container(LinkedList::from_iter([9]));

    a.swap(&mut b);
    assert_eq!(a.len(), 1);
    assert_eq!(b.len(), 4);
    assert_eq!(b.front(), Ok(&0));
    assert_eq!(
        format!("{:?}", a),
        "Queue { container: LinkedList { contents: [9], len: 1 } }"
    );
}

#[test]
fn test_max_heap_queue() {
    let mut queue = PriorityQueue::new();
    assert_eq!(queue.top(), Err(EmptyCollection));
    assert_eq!(queue.pop(), Err(EmptyCollection));

    queue.push(1);
    assert_eq!(queue.top(), Ok(&1));
    queue.push(10);
    assert_eq!(queue.top(), Ok(&10));
    queue.push(5);
    assert_eq!(queue.top(), Ok(&10), "A smaller push shouldn't change the top.");
    assert_eq!(queue.len(), 3);

    assert_eq!(queue.pop(), Ok(10));
    assert_eq!(queue.len(), 2);
    assert_eq!(queue.pop(), Ok(5));
    assert_eq!(queue.pop(), Ok(1));
    assert!(queue.is_empty());
}

#[test]
fn test_min_heap_queue() {
    let mut queue = PriorityQueue::with_compare(Greater);

    queue.push(5);
    assert_eq!(queue.top(), Ok(&5));
    queue.push(10);
    assert_eq!(queue.top(), Ok(&5), "A larger push shouldn't change the top of a min-heap.");
    queue.emplace(|| 1);
    assert_eq!(queue.top(), Ok(&1));

    assert_eq!(queue.pop(), Ok(1));
    assert_eq!(queue.pop(), Ok(5));
    assert_eq!(queue.pop(), Ok(10));
    assert_eq!(queue.pop(), Err(EmptyCollection));
}

#[test]
fn test_closure_ordering() {
    let mut queue = PriorityQueue::with_compare(|a: &&str, b: &&str| a.len() < b.len());
    queue.extend(["ab", "a", "abcd", "abc"]);

    assert_eq!(queue.pop(), Ok("abcd"));
    assert_eq!(queue.pop(), Ok("abc"));
    assert_eq!(queue.len(), 2);
}

#[test]
fn test_from_container() {
    let container = Vector::from([3, 1, 4, 1, 5, 9, 2, 6]);
    let mut queue = PriorityQueue::from_container(Greater, container);

    assert!(is_heap_by(&queue.container, Greater));
    assert_eq!(queue.top(), Ok(&1));
    assert_eq!(queue.pop(), Ok(1));
    assert_eq!(queue.pop(), Ok(1));
    assert_eq!(queue.pop(), Ok(2));
}

#[test]
fn test_random_values() {
    let mut rng = XorShiftRng::seed_from_u64(0xC0FFEE);

    for _ in 0..20 {
        let len = rng.gen_range(0..500);
        let values: Vector<i32> = (0..len).map(|_| rng.gen_range(-1000..1000)).collect();

        let mut queue: PriorityQueue<i32> = values.iter().copied().collect();
        assert!(is_heap(&queue.container));
        assert_eq!(queue.len(), len);

        let mut expected = values.clone();
        expected.sort();

        let mut previous = None;
        while let Ok(value) = queue.pop() {
            if let Some(previous) = previous {
                assert!(value <= previous, "Values should be popped in descending order.");
            }
            previous = Some(value);
        }

        let queue: PriorityQueue<i32> = values.into_iter().collect();
        assert_eq!(queue.into_sorted(), expected);
    }
}

#[test]
fn test_swap_and_drop() {
    let by_key = |a: &(u8, CountedDrop), b: &(u8, CountedDrop)| a.0 < b.0;
    let counter = CountedDrop::new(0);
    {
        let mut a = PriorityQueue::with_compare(by_key);
        let mut b = PriorityQueue::with_compare(by_key);
        a.push((1, counter.clone()));
        a.push((2, counter.clone()));
        b.push((3, counter.clone()));

        drop(a.pop());
        assert_eq!(*counter.borrow(), 1);

        a.swap(&mut b);
        assert_eq!(a.top().map(|item| item.0), Ok(3));
        assert_eq!(b.top().map(|item| item.0), Ok(1));
    }
    assert_eq!(*counter.borrow(), 3, "Every remaining element should be dropped with its queue.");
}

#[test]
fn test_default_backings() {
    let stack: Stack<u8> = Stack::default();
    let vec: Vector<u8> = stack.into_inner();
    assert!(vec.is_empty());

    let queue: Queue<u8> = Queue::default();
    let list: LinkedList<u8> = queue.into_inner();
    assert!(list.is_empty());

    let heap: PriorityQueue<u8> = PriorityQueue::default();
    assert_eq!(heap.into_inner().cap(), 10, "The default PriorityQueue should sit on a Vector.");
}
