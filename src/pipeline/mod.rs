//! Query pipelines for storequery
//!
//! Each pipeline composes executor primitives into one query over a
//! [`DataStore`](crate::model::DataStore):
//!
//! - `customers`: order totals, local suppliers, large orders,
//!   registration dates, ranking and contact anomalies
//! - `products`: category/availability grouping and price buckets
//! - `statistics`: per-city averages and per-customer activity
//!
//! [`QueryEngine`] dispatches a [`QueryRequest`](crate::query::QueryRequest)
//! to its pipeline and hands the result to a [`ResultSink`].

pub mod customers;
mod engine;
pub mod products;
pub mod rows;
mod sink;
pub mod statistics;

pub use engine::{QueryEngine, QueryOutput};
pub use rows::*;
pub use sink::{CollectingSink, JsonLinesSink, ResultSink, SinkEntry};
