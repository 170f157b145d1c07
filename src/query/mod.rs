//! Query catalog, requests and parameters
//!
//! - [`QueryId`]: the runnable queries with their titles
//! - [`QueryRequest`]: one query plus all its parameters
//! - [`QueryParams`]: configured parameters for the whole suite

mod catalog;
mod params;
mod request;

pub use catalog::QueryId;
pub use params::QueryParams;
pub use request::QueryRequest;
