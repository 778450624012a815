//! An insertion-stable priority queue for scheduling.
//!
//! This crate provides [`PriorityQueue`], a binary min-heap that always yields
//! its lowest element first, according to a caller-supplied ordering. It is
//! typically used as a scheduling primitive, for instance to order timers or
//! tasks by due time.
//!
//! # Ordering
//!
//! The ordering is given by a comparator implementing [`Compare`]:
//!
//! * [`NaturalOrder`], the default, uses the [`Ord`] implementation of the
//!   elements; a queue of elements without a total order cannot be created
//!   with [`PriorityQueue::new`],
//! * [`ByKey`] orders elements by a key extracted with a closure, see
//!   [`PriorityQueue::by_key`],
//! * [`PartialOrder`] accommodates [`PartialOrd`] types such as floats,
//! * [`Reverse`] turns any comparator into its reverse,
//! * any closure or function with signature `Fn(&T, &T) -> Ordering` is a
//!   comparator too.
//!
//! # Stability
//!
//! Elements that compare as equal are pulled in insertion order. Each element
//! is tagged upon insertion with a sequence number that is unique to the
//! queue instance and breaks ties, so the queue never depends on the
//! comparator being able to tell apart elements of identical priority.
//!
//! # Example
//!
//! A list of timers ordered by due time:
//!
//! ```
//! use stable_priority_queue::PriorityQueue;
//!
//! #[derive(Debug, PartialEq)]
//! struct Timer {
//!     due_time: u64,
//!     name: &'static str,
//! }
//!
//! let mut timers = PriorityQueue::with_comparator(|a: &Timer, b: &Timer| {
//!     a.due_time.cmp(&b.due_time)
//! });
//!
//! timers.enqueue(Timer { due_time: 42, name: "poll" });
//! timers.enqueue(Timer { due_time: 41, name: "flush" });
//! timers.enqueue(Timer { due_time: 42, name: "sync" });
//!
//! // Cancel a timer.
//! assert!(timers.remove_by(|t| t.name == "poll").is_some());
//!
//! assert_eq!(timers.dequeue().map(|t| t.name), Some("flush"));
//! assert_eq!(timers.dequeue().map(|t| t.name), Some("sync"));
//! assert_eq!(timers.dequeue(), None);
//! ```
//!
//! # Feature flags
//!
//! * `tracing`: emits `trace`-level events for each queue mutation using the
//!   [`tracing`](https://docs.rs/tracing) crate, under the
//!   `stable_priority_queue` target.
//!
//! # Concurrency
//!
//! A `PriorityQueue` performs no internal synchronization. It is `Send` and
//! `Sync` whenever its elements and comparator are, and can be shared between
//! threads by wrapping it in a mutex.
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

pub mod compare;
pub(crate) mod macros;
mod queue;

pub use compare::{ByKey, Compare, NaturalOrder, PartialOrder, Reverse};
pub use queue::{IntoIter, Iter, PriorityQueue};
