/// Emits a `trace`-level event when the `tracing` feature is enabled and
/// compiles to nothing otherwise.
macro_rules! trace_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::trace!(target: "stable_priority_queue", $($arg)*);
        }
    };
}

pub(crate) use trace_event;
