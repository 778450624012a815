//! Orderings used to prioritize queue elements.
//!
//! A [`PriorityQueue`](crate::PriorityQueue) is parametrized by a comparator
//! implementing [`Compare`]. The comparator must be a deterministic total
//! order for the whole lifetime of the queue: changing the ordering of a
//! populated queue is a logic error and results in unspecified (but memory
//! safe) pull order.
//!
//! Ties reported by the comparator are never an issue since the queue breaks
//! them by insertion order.

use std::cmp::Ordering;

/// A total order over values of type `T`.
///
/// This trait is implemented for all closures and functions with signature
/// `Fn(&T, &T) -> Ordering`, so custom orderings rarely need a dedicated type.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use stable_priority_queue::Compare;
///
/// let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
///
/// assert_eq!(by_len.compare(&"abc", &"de"), Ordering::Greater);
/// ```
pub trait Compare<T: ?Sized> {
    /// Compares `a` with `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// The natural order of a type implementing [`Ord`].
///
/// This is the default comparator of a `PriorityQueue`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Compare<T> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// A comparator for types that are only partially ordered, such as floats.
///
/// Pairs that cannot be ordered (e.g. involving a NaN) compare as equal, which
/// means that they are pulled in insertion order relatively to each other.
/// Note that this only yields a meaningful queue if incomparable values are
/// rare enough not to break transitivity, which holds e.g. for a float
/// sequence without NaNs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PartialOrder;

impl<T: PartialOrd + ?Sized> Compare<T> for PartialOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.partial_cmp(b).unwrap_or(Ordering::Equal)
    }
}

/// Orders values by a key extracted with a closure.
///
/// # Examples
///
/// ```
/// use stable_priority_queue::PriorityQueue;
///
/// struct Timer {
///     due_time: u64,
/// }
///
/// let mut queue = PriorityQueue::by_key(|t: &Timer| t.due_time);
/// queue.enqueue(Timer { due_time: 42 });
/// queue.enqueue(Timer { due_time: 41 });
///
/// assert_eq!(queue.dequeue().map(|t| t.due_time), Some(41));
/// ```
#[derive(Copy, Clone, Debug, Default)]
pub struct ByKey<F>(pub F);

impl<T: ?Sized, K: Ord, F> Compare<T> for ByKey<F>
where
    F: Fn(&T) -> K,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a).cmp(&(self.0)(b))
    }
}

/// Reverses the order of the wrapped comparator.
///
/// Wrapping a comparator in `Reverse` turns the queue into a max-queue. Ties
/// are still broken by insertion order, not by reverse insertion order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Reverse<C>(pub C);

impl<T: ?Sized, C: Compare<T>> Compare<T> for Reverse<C> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}
