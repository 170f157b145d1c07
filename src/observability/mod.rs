//! Observability for storequery
//!
//! Structured events are emitted through `tracing`; the library never
//! installs a subscriber.
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on query results
//! 3. One event per lifecycle step

mod scope;

pub use scope::QueryScope;
