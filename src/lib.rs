//! storequery - A strict, deterministic, in-memory relational query engine
//!
//! Answers a fixed catalog of queries over customers, orders, products
//! and suppliers held in a read-only [`DataStore`].

pub mod executor;
pub mod model;
pub mod observability;
pub mod pipeline;
pub mod query;

pub use executor::{ExecutorError, ExecutorResult};
pub use model::{Customer, DataSet, DataStore, ModelError, ModelResult, Order, Product, Supplier};
pub use pipeline::{CollectingSink, QueryEngine, QueryOutput, ResultSink};
pub use query::{QueryId, QueryParams, QueryRequest};
