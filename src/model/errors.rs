//! Model error types
//!
//! Error codes:
//! - STORE_DUPLICATE_CUSTOMER
//! - STORE_NEGATIVE_TOTAL
//! - STORE_NEGATIVE_PRICE
//! - STORE_TOTAL_OVERFLOW

use rust_decimal::Decimal;
use thiserror::Error;

/// Result type for store construction
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors raised while assembling the read-only store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Two customers share the same identifier
    #[error("duplicate customer id: {0}")]
    DuplicateCustomer(String),

    /// An order carries a negative total
    #[error("order {order_id} of customer {customer_id} has negative total {total}")]
    NegativeTotal {
        customer_id: String,
        order_id: u32,
        total: Decimal,
    },

    /// A product carries a negative unit price
    #[error("product {name} has negative unit price {price}")]
    NegativePrice { name: String, price: Decimal },

    /// A customer's order totals do not fit in one decimal sum
    #[error("order totals of customer {0} overflow")]
    TotalOverflow(String),
}

impl ModelError {
    /// Returns the string code for this error
    pub fn code(&self) -> &'static str {
        match self {
            ModelError::DuplicateCustomer(_) => "STORE_DUPLICATE_CUSTOMER",
            ModelError::NegativeTotal { .. } => "STORE_NEGATIVE_TOTAL",
            ModelError::NegativePrice { .. } => "STORE_NEGATIVE_PRICE",
            ModelError::TotalOverflow(_) => "STORE_TOTAL_OVERFLOW",
        }
    }
}
