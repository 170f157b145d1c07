//! Customer and order records
//!
//! A customer owns its orders; each order carries a read-only
//! back-reference to the owning customer's id. The association is
//! established when the store is built and never changes afterwards.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single order placed by a customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    order_id: u32,
    /// Owning customer, stamped at store construction
    #[serde(default)]
    customer_id: String,
    order_date: NaiveDate,
    total: Decimal,
}

impl Order {
    /// Creates an order not yet attached to a customer
    pub fn new(order_id: u32, order_date: NaiveDate, total: Decimal) -> Self {
        Self {
            order_id,
            customer_id: String::new(),
            order_date,
            total,
        }
    }

    pub fn order_id(&self) -> u32 {
        self.order_id
    }

    /// Id of the customer this order belongs to
    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn order_date(&self) -> NaiveDate {
        self.order_date
    }

    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Calendar month of the order date (1-12)
    pub fn month(&self) -> u32 {
        self.order_date.month()
    }

    /// Calendar year of the order date
    pub fn year(&self) -> i32 {
        self.order_date.year()
    }
}

/// A customer and the orders they placed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    customer_id: String,
    country: String,
    city: String,
    #[serde(default)]
    region: Option<String>,
    #[serde(default)]
    postal_code: String,
    #[serde(default)]
    phone: String,
    #[serde(default)]
    orders: Vec<Order>,
}

impl Customer {
    /// Creates a customer with no region, postal code, phone or orders
    pub fn new(
        customer_id: impl Into<String>,
        country: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            customer_id: customer_id.into(),
            country: country.into(),
            city: city.into(),
            region: None,
            postal_code: String::new(),
            phone: String::new(),
            orders: Vec::new(),
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = postal_code.into();
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Appends orders, attaching each one to this customer
    pub fn with_orders(mut self, orders: impl IntoIterator<Item = Order>) -> Self {
        self.orders.extend(orders);
        self.link_orders();
        self
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    /// Region as loaded; may be `None` or empty
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Returns true if the region is absent or empty
    pub fn region_missing(&self) -> bool {
        self.region.as_deref().map_or(true, str::is_empty)
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Orders in load order
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn has_orders(&self) -> bool {
        !self.orders.is_empty()
    }

    /// Stamps the back-reference on every owned order
    pub(crate) fn link_orders(&mut self) {
        for order in &mut self.orders {
            if order.customer_id != self.customer_id {
                order.customer_id.clone_from(&self.customer_id);
            }
        }
    }
}
