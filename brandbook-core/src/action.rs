//! Action trait for named state transitions

use std::fmt::Debug;

/// Marker trait for values that can be dispatched to a [`Store`](crate::Store)
///
/// Actions are cloned for middleware, crossed into background tasks, and
/// named in traces, hence the bounds.
pub trait Action: Clone + Debug + Send + 'static {
    /// Stable name used in traces and tests
    fn name(&self) -> &'static str;
}
