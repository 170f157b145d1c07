//! Entity model for storequery
//!
//! Customers (with their orders), products and suppliers, held in a
//! read-only [`DataStore`]. Queries only ever borrow from the store.

mod customer;
mod errors;
mod product;
mod store;

pub use customer::{Customer, Order};
pub use errors::{ModelError, ModelResult};
pub use product::{Product, Supplier};
pub use store::{DataSet, DataStore};
