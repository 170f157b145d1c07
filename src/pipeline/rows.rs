//! Result row shapes
//!
//! One fixed-shape record per query. Rows own their data so a result can
//! outlive the store borrow and be handed to any sink.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::executor::PriceBucket;
use crate::model::{Customer, Order, Product, Supplier};

/// Customer with the sum of its order totals
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerTotalRow {
    pub customer_id: String,
    pub total: Decimal,
}

/// Supplier as listed next to a customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupplierRef {
    pub name: String,
    pub country: String,
    pub city: String,
}

impl From<&Supplier> for SupplierRef {
    fn from(supplier: &Supplier) -> Self {
        Self {
            name: supplier.name().to_string(),
            country: supplier.country().to_string(),
            city: supplier.city().to_string(),
        }
    }
}

/// Customer with the suppliers located in the same country and city
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerSuppliersRow {
    pub customer_id: String,
    pub country: String,
    pub city: String,
    pub suppliers: Vec<SupplierRef>,
}

impl CustomerSuppliersRow {
    pub fn new<'a>(customer: &Customer, suppliers: impl IntoIterator<Item = &'a Supplier>) -> Self {
        Self {
            customer_id: customer.customer_id().to_string(),
            country: customer.country().to_string(),
            city: customer.city().to_string(),
            suppliers: suppliers.into_iter().map(SupplierRef::from).collect(),
        }
    }

    pub fn supplier_names(&self) -> Vec<&str> {
        self.suppliers.iter().map(|s| s.name.as_str()).collect()
    }
}

/// Order id and total
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderLine {
    pub order_id: u32,
    pub total: Decimal,
}

impl From<&Order> for OrderLine {
    fn from(order: &Order) -> Self {
        Self {
            order_id: order.order_id(),
            total: order.total(),
        }
    }
}

/// Customer with all of its orders
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerOrdersRow {
    pub customer_id: String,
    pub orders: Vec<OrderLine>,
}

/// Customer with the date of its first order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationRow {
    pub customer_id: String,
    pub registered: NaiveDate,
    pub month: u32,
    pub year: i32,
}

/// Customer with its first order date and order sum
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedCustomerRow {
    pub customer_id: String,
    pub total: Decimal,
    pub registered: NaiveDate,
    pub month: u32,
    pub year: i32,
}

/// Customer with at least one incomplete contact field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactAnomalyRow {
    pub customer_id: String,
    pub region: Option<String>,
    pub postal_code: String,
    pub phone: String,
    pub missing_region: bool,
    pub invalid_postal_code: bool,
    pub missing_area_code: bool,
}

/// Product name and price
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductLine {
    pub name: String,
    pub unit_price: Decimal,
}

impl From<&Product> for ProductLine {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name().to_string(),
            unit_price: product.unit_price(),
        }
    }
}

/// Products of one category sharing the same availability
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvailabilityGroup {
    pub in_stock: bool,
    pub products: Vec<ProductLine>,
}

/// A category and its availability groups
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryRow {
    pub category: String,
    pub availability: Vec<AvailabilityGroup>,
}

/// Products in one price class
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceBucketRow {
    pub bucket: PriceBucket,
    pub products: Vec<ProductLine>,
}

/// Per-city averages over customers with orders
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityStatisticsRow {
    pub city: String,
    /// Mean of each customer's mean order total
    pub average_income: Decimal,
    /// Mean number of orders per customer
    pub average_intensity: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthCount {
    pub month: u32,
    pub orders: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearCount {
    pub year: i32,
    pub orders: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthYearCount {
    pub month: u32,
    pub year: i32,
    pub orders: usize,
}

/// Order counts of one customer by month, by year and by both
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerActivityRow {
    pub customer_id: String,
    pub by_month: Vec<MonthCount>,
    pub by_year: Vec<YearCount>,
    pub by_month_and_year: Vec<MonthYearCount>,
}

impl CustomerActivityRow {
    /// Total orders counted; identical for all three breakdowns
    pub fn order_count(&self) -> usize {
        self.by_month.iter().map(|m| m.orders).sum()
    }
}
