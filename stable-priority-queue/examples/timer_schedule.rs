//! Example: timer scheduling.
//!
//! This example demonstrates in particular:
//!
//! * ordering timers by due time with a key extractor,
//! * cancellation of timers,
//! * firing timers with identical due times in scheduling order,
//! * structured logging of queue mutations.
//!
//! Run with:
//!
//! ```text
//! RUST_LOG=trace cargo run --example timer_schedule --features tracing
//! ```

use std::time::Duration;

use stable_priority_queue::PriorityQueue;
use tracing::info;

/// A timer with a due time relative to the start of the schedule.
#[derive(Debug)]
struct Timer {
    id: u32,
    due: Duration,
    action: &'static str,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut timers = PriorityQueue::by_key(|t: &Timer| t.due);

    let schedule = [
        (Duration::from_millis(300), "flush write buffer"),
        (Duration::from_millis(100), "poll sensors"),
        (Duration::from_millis(300), "send heartbeat"),
        (Duration::from_millis(200), "rotate logs"),
        (Duration::from_millis(100), "refresh display"),
    ];
    for (id, (due, action)) in (0..).zip(schedule) {
        timers.enqueue(Timer { id, due, action });
    }

    // Log rotation is no longer needed.
    if let Some(timer) = timers.remove_by(|t| t.action == "rotate logs") {
        info!(id = timer.id, "cancelled timer");
    }

    while let Some(timer) = timers.dequeue() {
        info!(id = timer.id, due = ?timer.due, "{}", timer.action);
    }
}
