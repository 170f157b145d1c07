//! Product and supplier records

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    name: String,
    category: String,
    unit_price: Decimal,
    #[serde(default)]
    units_in_stock: u32,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        unit_price: Decimal,
        units_in_stock: u32,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            unit_price,
            units_in_stock,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    pub fn units_in_stock(&self) -> u32 {
        self.units_in_stock
    }

    /// Returns true if at least one unit is in stock
    pub fn in_stock(&self) -> bool {
        self.units_in_stock > 0
    }
}

/// A supplier and where it is located
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    name: String,
    country: String,
    city: String,
}

impl Supplier {
    pub fn new(
        name: impl Into<String>,
        country: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
            city: city.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}
