//! Insertion-stable binary min-heap.

use std::cmp::Ordering;
use std::collections::TryReserveError;
use std::fmt;
use std::iter::FusedIterator;
use std::slice;

use crate::compare::{ByKey, Compare, NaturalOrder};
use crate::macros::trace_event;

/// A priority queue that always yields its lowest element first.
///
/// Elements are ordered with a comparator implementing [`Compare`], which
/// defaults to the natural order of `T`. Elements that the comparator reports
/// as equal are pulled in the order they were enqueued: each element is tagged
/// at insertion with a sequence number unique to the queue instance, and the
/// sequence number is used as a secondary sort key.
///
/// Under the hood, the queue is a conventional array-based binary heap with
/// the following complexity:
///
/// - [`enqueue`](Self::enqueue) and [`dequeue`](Self::dequeue): *O*(log(*N*)),
/// - [`peek`](Self::peek) and [`len`](Self::len): *O*(1),
/// - [`remove`](Self::remove) and [`remove_by`](Self::remove_by): *O*(*N*) for
///   the linear search, followed by an *O*(log(*N*)) fix-up of the heap.
///
/// There is no way to change the priority of an element once enqueued other
/// than removing it and enqueuing it anew, which gives it a new sequence
/// number.
///
/// # Examples
///
/// ```
/// use stable_priority_queue::PriorityQueue;
///
/// let mut queue = PriorityQueue::new();
/// queue.enqueue(42);
/// queue.enqueue(41);
/// queue.enqueue(44);
/// queue.enqueue(43);
///
/// assert_eq!(queue.len(), 4);
/// assert_eq!(queue.dequeue(), Some(41));
/// assert_eq!(queue.dequeue(), Some(42));
/// assert_eq!(queue.dequeue(), Some(43));
/// assert_eq!(queue.dequeue(), Some(44));
/// assert_eq!(queue.dequeue(), None);
/// ```
#[derive(Clone)]
pub struct PriorityQueue<T, C = NaturalOrder> {
    heap: Vec<Entry<T>>,
    cmp: C,
    next_seq: u64,
}

impl<T: Ord> PriorityQueue<T> {
    /// Creates an empty `PriorityQueue` using the natural order of `T`.
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }

    /// Creates an empty `PriorityQueue` using the natural order of `T`, with
    /// at least the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, NaturalOrder)
    }
}

impl<T, F> PriorityQueue<T, ByKey<F>> {
    /// Creates an empty `PriorityQueue` ordering its elements by the key
    /// returned by `f`.
    pub fn by_key<K>(f: F) -> Self
    where
        F: Fn(&T) -> K,
        K: Ord,
    {
        Self::with_comparator(ByKey(f))
    }
}

impl<T, C> PriorityQueue<T, C> {
    /// Creates an empty `PriorityQueue` ordered by the provided comparator.
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            heap: Vec::new(),
            cmp,
            next_seq: 0,
        }
    }

    /// Creates an empty `PriorityQueue` ordered by the provided comparator,
    /// with at least the specified capacity.
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            cmp,
            next_seq: 0,
        }
    }

    /// Returns the comparator used to order the elements.
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Returns the number of elements in the queue.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if the queue contains no elements.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns a reference to the lowest element, leaving it in the queue.
    ///
    /// If there are several equal lowest elements, a reference to the element
    /// which was enqueued first is returned.
    ///
    /// This operation has *O*(1) non-amortized theoretical complexity.
    pub fn peek(&self) -> Option<&T> {
        self.heap.first().map(|entry| &entry.value)
    }

    /// Returns the number of elements the queue can hold without
    /// reallocating.
    pub fn capacity(&self) -> usize {
        self.heap.capacity()
    }

    /// Reserves capacity for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        self.heap.reserve(additional);
    }

    /// Tries to reserve capacity for at least `additional` more elements.
    ///
    /// An error is returned if the capacity overflows or if the allocator
    /// reports a failure.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.heap.try_reserve(additional)
    }

    /// Shrinks the capacity of the queue as much as possible.
    pub fn shrink_to_fit(&mut self) {
        self.heap.shrink_to_fit();
    }

    /// Drops all elements.
    ///
    /// Sequence numbers are not recycled: elements enqueued after a `clear`
    /// still compare as younger than any element enqueued before it.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Returns an iterator visiting all elements in arbitrary order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.heap.iter(),
        }
    }
}

impl<T, C: Compare<T>> PriorityQueue<T, C> {
    /// Adds an element to the queue.
    ///
    /// This operation has *O*(log(*N*)) amortized worse-case theoretical
    /// complexity.
    ///
    /// # Panics
    ///
    /// Panics if the queue has run out of sequence numbers, which requires
    /// 2⁶⁴-1 insertions.
    pub fn enqueue(&mut self, value: T) {
        let seq = self.next_seq;
        assert_ne!(seq, u64::MAX);
        self.next_seq += 1;

        let heap_idx = self.heap.len();
        self.heap.push(Entry { seq, value });
        self.percolate_up(heap_idx);

        trace_event!(seq, len = self.heap.len(), "enqueued element");
    }

    /// Removes the lowest element and returns it.
    ///
    /// If there are several equal lowest elements, the element which was
    /// enqueued first is returned.
    ///
    /// This operation has *O*(log(*N*)) non-amortized theoretical complexity.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.heap.is_empty() {
            return None;
        }
        let entry = self.remove_at(0);

        trace_event!(seq = entry.seq, len = self.heap.len(), "dequeued element");

        Some(entry.value)
    }

    /// Removes the first element found equal to `value`.
    ///
    /// The search order is unspecified: if several elements are equal to
    /// `value`, any of them may be removed.
    ///
    /// This method returns `true` if an element was indeed removed and `false`
    /// otherwise, in which case the queue is left untouched.
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: PartialEq<Q>,
        Q: ?Sized,
    {
        self.remove_by(|v| v == value).is_some()
    }

    /// Removes and returns the first element found that satisfies the
    /// predicate.
    ///
    /// The search order is unspecified. This is the method of choice to remove
    /// an element by identity, e.g. by comparing a unique ID rather than the
    /// whole element.
    pub fn remove_by<P>(&mut self, mut predicate: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        let Some(heap_idx) = self.heap.iter().position(|entry| predicate(&entry.value)) else {
            trace_event!(len = self.heap.len(), "no element to remove");

            return None;
        };
        let entry = self.remove_at(heap_idx);

        trace_event!(
            seq = entry.seq,
            heap_idx,
            len = self.heap.len(),
            "removed element"
        );

        Some(entry.value)
    }

    /// Retains only the elements that satisfy the predicate.
    ///
    /// The relative order of the retained elements is preserved, including for
    /// equal elements. The heap is rebuilt in *O*(*N*) time.
    pub fn retain<P>(&mut self, mut predicate: P)
    where
        P: FnMut(&T) -> bool,
    {
        let len = self.heap.len();
        self.heap.retain(|entry| predicate(&entry.value));

        if self.heap.len() != len {
            self.rebuild();

            trace_event!(
                removed = len - self.heap.len(),
                len = self.heap.len(),
                "retained elements"
            );
        }
    }

    /// Consumes the queue and returns its elements in the order in which they
    /// would have been dequeued.
    pub fn into_sorted_vec(self) -> Vec<T> {
        let Self { mut heap, cmp, .. } = self;

        // Sequence numbers are unique so an unstable sort is deterministic.
        heap.sort_unstable_by(|a, b| a.order(b, &cmp));

        heap.into_iter().map(|entry| entry.value).collect()
    }

    /// Takes the entry at `heap_idx` out of the heap, fills the vacant slot
    /// with the last entry and restores the heap property.
    fn remove_at(&mut self, heap_idx: usize) -> Entry<T> {
        let removed = self.heap.swap_remove(heap_idx);

        // Unless the last entry was the removed one, it now sits at `heap_idx`
        // and must move up or down depending on how it compares with the entry
        // it replaced.
        if let Some(moved) = self.heap.get(heap_idx) {
            if moved.order(&removed, &self.cmp) == Ordering::Less {
                self.percolate_up(heap_idx);
            } else {
                self.sift_down(heap_idx);
            }
        }

        removed
    }

    /// Starting at `heap_idx`, moves an entry up the heap while it sorts
    /// before its parent.
    fn percolate_up(&mut self, mut heap_idx: usize) {
        while heap_idx != 0 {
            let parent_idx = (heap_idx - 1) / 2;

            // Stop when the entry sorts after its parent.
            if self.heap[heap_idx].order(&self.heap[parent_idx], &self.cmp) != Ordering::Less {
                break;
            }
            self.heap.swap(heap_idx, parent_idx);
            heap_idx = parent_idx;
        }
    }

    /// Starting at `heap_idx`, moves an entry down the heap while one of its
    /// children sorts before it.
    fn sift_down(&mut self, mut heap_idx: usize) {
        let len = self.heap.len();

        loop {
            let left_idx = 2 * heap_idx + 1;
            let right_idx = left_idx + 1;
            let mut first_idx = heap_idx;

            // The right child only takes over the left one if it sorts
            // strictly before it.
            if left_idx < len && self.is_before(left_idx, first_idx) {
                first_idx = left_idx;
            }
            if right_idx < len && self.is_before(right_idx, first_idx) {
                first_idx = right_idx;
            }
            if first_idx == heap_idx {
                return;
            }
            self.heap.swap(heap_idx, first_idx);
            heap_idx = first_idx;
        }
    }

    /// Restores the heap property over the whole array.
    fn rebuild(&mut self) {
        for heap_idx in (0..self.heap.len() / 2).rev() {
            self.sift_down(heap_idx);
        }
    }

    /// Checks whether the entry at `lhs_idx` sorts strictly before the entry
    /// at `rhs_idx`.
    #[inline]
    fn is_before(&self, lhs_idx: usize, rhs_idx: usize) -> bool {
        self.heap[lhs_idx].order(&self.heap[rhs_idx], &self.cmp) == Ordering::Less
    }
}

impl<T, C: Default> Default for PriorityQueue<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T: fmt::Debug, C> fmt::Debug for PriorityQueue<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("len", &self.heap.len())
            .field("values", &HeapValues(&self.heap))
            .finish_non_exhaustive()
    }
}

/// Formats the values of a heap in heap order, leaving out sequence numbers.
struct HeapValues<'a, T>(&'a [Entry<T>]);

impl<T: fmt::Debug> fmt::Debug for HeapValues<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.0.iter().map(|entry| &entry.value))
            .finish()
    }
}

impl<T, C: Compare<T>> Extend<T> for PriorityQueue<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.heap.reserve(iter.size_hint().0);
        for value in iter {
            self.enqueue(value);
        }
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for PriorityQueue<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::default();
        queue.extend(iter);

        queue
    }
}

impl<T, C: Compare<T>> IntoIterator for PriorityQueue<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T, C>;

    /// Consumes the queue into an iterator yielding its elements in dequeue
    /// order.
    fn into_iter(self) -> IntoIter<T, C> {
        IntoIter { queue: self }
    }
}

impl<'a, T, C> IntoIterator for &'a PriorityQueue<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// An iterator over the elements of a `PriorityQueue`, in arbitrary order.
///
/// This `struct` is created by [`PriorityQueue::iter`].
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    inner: slice::Iter<'a, Entry<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next().map(|entry| &entry.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// An owning iterator over the elements of a `PriorityQueue`, in dequeue
/// order.
///
/// This `struct` is created by the `into_iter` method on `PriorityQueue`.
#[derive(Clone, Debug)]
pub struct IntoIter<T, C> {
    queue: PriorityQueue<T, C>,
}

impl<T, C: Compare<T>> Iterator for IntoIter<T, C> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.queue.dequeue()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len();

        (len, Some(len))
    }
}

impl<T, C: Compare<T>> ExactSizeIterator for IntoIter<T, C> {}
impl<T, C: Compare<T>> FusedIterator for IntoIter<T, C> {}

/// A value stored in the heap along with its insertion sequence number.
#[derive(Clone, Debug)]
struct Entry<T> {
    /// A sequence number unique to the queue that gives the insertion order.
    seq: u64,
    /// The user-provided value.
    value: T,
}

impl<T> Entry<T> {
    /// Compares values with the queue comparator, falling back to the
    /// insertion order for equal values.
    ///
    /// Sequence numbers are unique within a queue, so this is a strict total
    /// order over the entries of a queue.
    #[inline]
    fn order<C: Compare<T>>(&self, other: &Self, cmp: &C) -> Ordering {
        cmp.compare(&self.value, &other.value)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}
