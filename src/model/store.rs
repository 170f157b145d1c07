//! Read-only data store
//!
//! The store is assembled once and then only read. Construction validates
//! the dataset invariants:
//!
//! - customer ids are unique
//! - order totals are non-negative
//! - each customer's order totals sum within the `Decimal` range
//! - product unit prices are non-negative
//!
//! and links every order to its owning customer.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Deserialize;

use super::customer::Customer;
use super::errors::{ModelError, ModelResult};
use super::product::{Product, Supplier};
use crate::executor::aggregate;

/// Immutable, in-memory dataset queried by the pipelines
#[derive(Debug, Clone, Default)]
pub struct DataStore {
    customers: Vec<Customer>,
    products: Vec<Product>,
    suppliers: Vec<Supplier>,
    /// customer_id -> position in `customers`
    customer_index: HashMap<String, usize>,
}

/// Raw dataset shape accepted by [`DataStore::from_parts`]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataSet {
    #[serde(default)]
    pub customers: Vec<Customer>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub suppliers: Vec<Supplier>,
}

impl DataStore {
    /// Builds and validates a store.
    pub fn new(
        mut customers: Vec<Customer>,
        products: Vec<Product>,
        suppliers: Vec<Supplier>,
    ) -> ModelResult<Self> {
        let mut customer_index = HashMap::with_capacity(customers.len());

        for (position, customer) in customers.iter_mut().enumerate() {
            if customer_index
                .insert(customer.customer_id().to_string(), position)
                .is_some()
            {
                return Err(ModelError::DuplicateCustomer(
                    customer.customer_id().to_string(),
                ));
            }

            if let Some(order) = customer.orders().iter().find(|o| o.total() < Decimal::ZERO) {
                return Err(ModelError::NegativeTotal {
                    customer_id: customer.customer_id().to_string(),
                    order_id: order.order_id(),
                    total: order.total(),
                });
            }

            if aggregate::checked_sum(customer.orders().iter().map(|o| o.total())).is_none() {
                return Err(ModelError::TotalOverflow(customer.customer_id().to_string()));
            }

            customer.link_orders();
        }

        if let Some(product) = products.iter().find(|p| p.unit_price() < Decimal::ZERO) {
            return Err(ModelError::NegativePrice {
                name: product.name().to_string(),
                price: product.unit_price(),
            });
        }

        tracing::debug!(
            customers = customers.len(),
            products = products.len(),
            suppliers = suppliers.len(),
            "STORE_LOADED"
        );

        Ok(Self {
            customers,
            products,
            suppliers,
            customer_index,
        })
    }

    /// Builds a store from a deserialized dataset.
    pub fn from_parts(data: DataSet) -> ModelResult<Self> {
        Self::new(data.customers, data.products, data.suppliers)
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn suppliers(&self) -> &[Supplier] {
        &self.suppliers
    }

    /// Looks up a customer by id
    pub fn customer(&self, customer_id: &str) -> Option<&Customer> {
        self.customer_index
            .get(customer_id)
            .and_then(|&position| self.customers.get(position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Order;
    use chrono::NaiveDate;

    fn order(id: u32, total: i64) -> Order {
        Order::new(
            id,
            NaiveDate::from_ymd_opt(1997, 1, 1).unwrap(),
            Decimal::new(total, 0),
        )
    }

    #[test]
    fn test_duplicate_customer_rejected() {
        let customers = vec![
            Customer::new("A", "UK", "London"),
            Customer::new("A", "UK", "Cowes"),
        ];
        let err = DataStore::new(customers, vec![], vec![]).unwrap_err();
        assert_eq!(err, ModelError::DuplicateCustomer("A".into()));
    }

    #[test]
    fn test_negative_total_rejected() {
        let customers = vec![Customer::new("A", "UK", "London").with_orders(vec![order(1, -1)])];
        let err = DataStore::new(customers, vec![], vec![]).unwrap_err();
        assert_eq!(err.code(), "STORE_NEGATIVE_TOTAL");
    }

    #[test]
    fn test_overflowing_totals_rejected() {
        let huge = |id| Order::new(id, NaiveDate::from_ymd_opt(1997, 1, 1).unwrap(), Decimal::MAX);
        let customers =
            vec![Customer::new("A", "UK", "London").with_orders(vec![huge(1), huge(2)])];
        let err = DataStore::new(customers, vec![], vec![]).unwrap_err();
        assert_eq!(err, ModelError::TotalOverflow("A".into()));

        let single = vec![Customer::new("A", "UK", "London").with_orders(vec![huge(1)])];
        assert!(DataStore::new(single, vec![], vec![]).is_ok());
    }

    #[test]
    fn test_negative_price_rejected() {
        let products = vec![Product::new("Chai", "Beverages", Decimal::new(-1, 0), 1)];
        let err = DataStore::new(vec![], products, vec![]).unwrap_err();
        assert_eq!(err.code(), "STORE_NEGATIVE_PRICE");
    }

    #[test]
    fn test_lookup_by_id() {
        let customers = vec![
            Customer::new("A", "UK", "London"),
            Customer::new("B", "UK", "Cowes"),
        ];
        let store = DataStore::new(customers, vec![], vec![]).unwrap();
        assert_eq!(store.customer("B").map(Customer::city), Some("Cowes"));
        assert!(store.customer("Z").is_none());
    }

    #[test]
    fn test_from_parts_links_orders() {
        let json = r#"{
            "customers": [
                {"customer_id": "A", "country": "UK", "city": "London",
                 "orders": [{"order_id": 1, "order_date": "1997-01-01", "total": "10"}]}
            ]
        }"#;
        let data: DataSet = serde_json::from_str(json).unwrap();
        let store = DataStore::from_parts(data).unwrap();

        let customer = store.customer("A").unwrap();
        assert_eq!(customer.orders()[0].customer_id(), "A");
        assert!(store.products().is_empty());
        assert!(store.suppliers().is_empty());
    }
}
