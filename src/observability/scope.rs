//! QueryScope for automatic begin/complete logging
//!
//! - Logs `{name}_BEGIN` on creation
//! - Logs `{name}_COMPLETE` when completed, with row count and elapsed time
//! - Logs `{name}_FAILED` when failed
//! - Logs `{name}_INCOMPLETE` on drop if neither happened

use std::cell::Cell;
use std::time::Instant;

/// A scope that logs the lifecycle of one query run
///
/// # Usage
///
/// ```ignore
/// let scope = QueryScope::new("QUERY", "ranked_customers");
/// // ... evaluate ...
/// scope.complete(rows.len());
/// ```
pub struct QueryScope<'a> {
    name: &'a str,
    query: &'a str,
    started: Instant,
    completed: Cell<bool>,
}

impl<'a> QueryScope<'a> {
    /// Create a new scope; logs `{name}_BEGIN` immediately.
    pub fn new(name: &'a str, query: &'a str) -> Self {
        tracing::debug!(event = %format!("{}_BEGIN", name), query, "query scope opened");

        Self {
            name,
            query,
            started: Instant::now(),
            completed: Cell::new(false),
        }
    }

    /// Mark the scope as successfully completed
    pub fn complete(self, rows: usize) {
        self.completed.set(true);
        tracing::debug!(
            event = %format!("{}_COMPLETE", self.name),
            query = self.query,
            rows,
            elapsed_us = self.elapsed_us(),
            "query scope completed"
        );
    }

    /// Mark the scope as failed with a reason
    pub fn fail(self, reason: &str) {
        self.completed.set(true);
        tracing::warn!(
            event = %format!("{}_FAILED", self.name),
            query = self.query,
            reason,
            "query scope failed"
        );
    }

    /// Check if the scope has been completed
    pub fn is_completed(&self) -> bool {
        self.completed.get()
    }

    /// Microseconds since the scope was opened
    pub fn elapsed_us(&self) -> u64 {
        u64::try_from(self.started.elapsed().as_micros()).unwrap_or(u64::MAX)
    }
}

impl Drop for QueryScope<'_> {
    fn drop(&mut self) {
        if !self.completed.get() {
            tracing::warn!(
                event = %format!("{}_INCOMPLETE", self.name),
                query = self.query,
                "scope dropped without completion"
            );
        }
    }
}
