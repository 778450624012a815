//! Property-based tests using proptest.

use proptest::prelude::*;
use stable_priority_queue::PriorityQueue;

/// An operation applied both to the queue and to a sorted model.
#[derive(Clone, Debug)]
enum Op {
    Enqueue(u8),
    Dequeue,
    Remove(u8),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => any::<u8>().prop_map(Op::Enqueue),
        2 => Just(Op::Dequeue),
        1 => any::<u8>().prop_map(Op::Remove),
    ]
}

proptest! {
    #[test]
    fn dequeue_order_is_sorted(values in prop::collection::vec(any::<i32>(), 0..200)) {
        let mut queue = PriorityQueue::new();
        queue.extend(values.iter().copied());

        let mut expected = values;
        expected.sort();

        let mut pulled = Vec::new();
        while let Some(value) = queue.dequeue() {
            pulled.push(value);
        }
        prop_assert_eq!(pulled, expected);
    }

    #[test]
    fn equal_keys_are_stable(keys in prop::collection::vec(0u8..4, 0..200)) {
        // Tag each key with its insertion index and order by key only.
        let mut queue = PriorityQueue::by_key(|kv: &(u8, usize)| kv.0);
        queue.extend(keys.iter().copied().zip(0usize..));

        // A stable sort on the key alone gives the expected order.
        let mut expected: Vec<_> = keys.into_iter().zip(0usize..).collect();
        expected.sort_by_key(|kv| kv.0);

        prop_assert_eq!(queue.into_sorted_vec(), expected);
    }

    #[test]
    fn size_accounting(enqueues in 0usize..100, dequeues in 0usize..150) {
        let mut queue = PriorityQueue::new();
        for i in 0..enqueues {
            queue.enqueue(i);
        }
        for _ in 0..dequeues {
            queue.dequeue();
        }

        prop_assert_eq!(queue.len(), enqueues.saturating_sub(dequeues));
    }

    #[test]
    fn matches_sorted_model(ops in prop::collection::vec(op_strategy(), 0..300)) {
        let mut queue = PriorityQueue::new();
        let mut model: Vec<u8> = Vec::new();

        for op in ops {
            match op {
                Op::Enqueue(value) => {
                    queue.enqueue(value);
                    let idx = model.partition_point(|&v| v <= value);
                    model.insert(idx, value);
                }
                Op::Dequeue => {
                    let expected = if model.is_empty() { None } else { Some(model.remove(0)) };
                    prop_assert_eq!(queue.dequeue(), expected);
                }
                Op::Remove(value) => {
                    let len = queue.len();
                    let expected = match model.iter().position(|&v| v == value) {
                        Some(idx) => {
                            model.remove(idx);
                            true
                        }
                        None => false,
                    };
                    prop_assert_eq!(queue.remove(&value), expected);
                    prop_assert_eq!(queue.len(), if expected { len - 1 } else { len });
                }
            }
            prop_assert_eq!(queue.len(), model.len());
            prop_assert_eq!(queue.peek(), model.first());
        }
    }
}
