//! Key extractors
//!
//! Pure functions deriving comparison and grouping keys from entities.
//! Composite keys are plain structs compared field by field.

use rust_decimal::Decimal;
use serde::Serialize;

use super::errors::{ExecutorError, ExecutorResult};
use crate::model::{Customer, Order, Product, Supplier};

/// (country, city) pair used to match customers with suppliers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location<'a> {
    pub country: &'a str,
    pub city: &'a str,
}

/// (month, year) pair of an order date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct MonthYear {
    pub month: u32,
    pub year: i32,
}

pub fn customer_location(customer: &Customer) -> Location<'_> {
    Location {
        country: customer.country(),
        city: customer.city(),
    }
}

pub fn supplier_location(supplier: &Supplier) -> Location<'_> {
    Location {
        country: supplier.country(),
        city: supplier.city(),
    }
}

pub fn customer_city(customer: &Customer) -> &str {
    customer.city()
}

pub fn order_month(order: &Order) -> u32 {
    order.month()
}

pub fn order_year(order: &Order) -> i32 {
    order.year()
}

pub fn order_month_year(order: &Order) -> MonthYear {
    MonthYear {
        month: order.month(),
        year: order.year(),
    }
}

pub fn product_category(product: &Product) -> &str {
    product.category()
}

pub fn product_in_stock(product: &Product) -> bool {
    product.in_stock()
}

/// Price class assigned by [`PriceBounds::classify`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PriceBucket {
    Cheap,
    Middle,
    Expensive,
}

impl PriceBucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceBucket::Cheap => "Cheap",
            PriceBucket::Middle => "Middle",
            PriceBucket::Expensive => "Expensive",
        }
    }
}

/// Boundaries of the three price buckets.
///
/// Invariant: `cheap < middle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBounds {
    cheap: Decimal,
    middle: Decimal,
}

impl PriceBounds {
    /// Creates bucket boundaries, rejecting `cheap >= middle`
    pub fn new(cheap: Decimal, middle: Decimal) -> ExecutorResult<Self> {
        if cheap >= middle {
            return Err(ExecutorError::invalid_parameter(
                "cheap_boundary",
                format!("{} must be below middle_boundary {}", cheap, middle),
            ));
        }
        Ok(Self { cheap, middle })
    }

    pub fn middle(&self) -> Decimal {
        self.middle
    }

    /// `price < cheap` is Cheap, `price < middle` is Middle, else Expensive
    pub fn classify(&self, price: Decimal) -> PriceBucket {
        if price < self.cheap {
            PriceBucket::Cheap
        } else if price < self.middle {
            PriceBucket::Middle
        } else {
            PriceBucket::Expensive
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_price_bucket_boundaries() {
        let bounds = PriceBounds::new(Decimal::new(20, 0), Decimal::new(40, 0)).unwrap();
        assert_eq!(bounds.classify(Decimal::new(1999, 2)), PriceBucket::Cheap);
        assert_eq!(bounds.classify(Decimal::new(2000, 2)), PriceBucket::Middle);
        assert_eq!(bounds.classify(Decimal::new(3999, 2)), PriceBucket::Middle);
        assert_eq!(bounds.classify(Decimal::new(4000, 2)), PriceBucket::Expensive);
        assert_eq!(bounds.classify(Decimal::ZERO), PriceBucket::Cheap);
    }

    #[test]
    fn test_price_bounds_reject_inverted() {
        let err = PriceBounds::new(Decimal::new(40, 0), Decimal::new(20, 0)).unwrap_err();
        assert_eq!(err.code(), "QUERY_INVALID_PARAMETER");
        assert!(PriceBounds::new(Decimal::new(20, 0), Decimal::new(20, 0)).is_err());
    }

    #[test]
    fn test_location_is_structural() {
        let customer = Customer::new("A", "Germany", "Berlin");
        let supplier = Supplier::new("Heli", "Germany", "Berlin");
        let other = Supplier::new("Plutzer", "Germany", "Frankfurt");
        assert_eq!(customer_location(&customer), supplier_location(&supplier));
        assert_ne!(customer_location(&customer), supplier_location(&other));
    }

    #[test]
    fn test_month_year_key() {
        let order = Order::new(1, NaiveDate::from_ymd_opt(1997, 8, 25).unwrap(), Decimal::ONE);
        assert_eq!(order_month_year(&order), MonthYear { month: 8, year: 1997 });
        assert_eq!(order_month(&order), 8);
        assert_eq!(order_year(&order), 1997);
    }
}
