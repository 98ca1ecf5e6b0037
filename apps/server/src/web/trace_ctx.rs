//! Task-local trace context for web requests.
//!
//! The request-trace middleware opens a scope around every request future,
//! so handlers, extractors and the problem-document renderer can read the
//! current trace id without threading it through arguments. Domain code
//! must not import this module.

use std::cell::RefCell;

use tokio::task_local;

/// Fallback returned outside a request scope (startup, detached tasks).
const UNKNOWN_TRACE: &str = "unknown";

task_local! {
    static TRACE_ID: RefCell<Option<String>>;
}

/// Get the trace_id for the current task, or "unknown" when no scope
/// is active.
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(|cell| {
            cell.borrow()
                .as_ref()
                .cloned()
                .unwrap_or_else(|| UNKNOWN_TRACE.to_string())
        })
        .unwrap_or_else(|_| UNKNOWN_TRACE.to_string())
}

/// Run a future within a trace context.
/// This is used by middleware to establish the task-local scope.
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: std::future::Future<Output = R>,
{
    TRACE_ID.scope(RefCell::new(Some(trace_id)), future).await
}
