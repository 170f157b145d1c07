//! Query evaluation primitives for storequery
//!
//! The executor holds the building blocks every query is composed from:
//!
//! 1. Predicates (`filters`, `pattern`)
//! 2. Key extractors (`keys`)
//! 3. Aggregates (`aggregate`)
//! 4. Grouping (`grouping`)
//! 5. Joins (`join`)
//! 6. Sorting (`sorter`)
//!
//! # Invariants
//!
//! - Every primitive is a pure function of its inputs
//! - Output order is deterministic: input order, first-seen key order or
//!   an explicit stable sort
//! - Empty aggregates are `None`, never a default value

pub mod aggregate;
mod errors;
mod filters;
pub mod grouping;
pub mod join;
pub mod keys;
pub mod pattern;
mod sorter;

pub use errors::{ExecutorError, ExecutorResult};
pub use filters::{CompareOp, Filter, PairFilter};
pub use grouping::{group_by, Group};
pub use join::{correlate, inner_join, semi_join, Correlated};
pub use keys::{Location, MonthYear, PriceBounds, PriceBucket};
pub use sorter::{ResultSorter, SortDirection, SortKey, SortSpec};
