//! Catalog of runnable queries
//!
//! Every query has a stable snake_case id, a short title and a one-line
//! description. The catalog order is the order the suite runs in.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::executor::ExecutorError;

/// Identifier of a runnable query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryId {
    TotalAbove,
    SuppliersGrouped,
    SuppliersCorrelated,
    LargeOrders,
    RegistrationDates,
    RankedCustomers,
    ContactAnomalies,
    ProductsByCategory,
    PriceBuckets,
    CityStatistics,
    CustomerActivity,
}

impl QueryId {
    /// All queries in catalog order
    pub const ALL: [QueryId; 11] = [
        QueryId::TotalAbove,
        QueryId::SuppliersGrouped,
        QueryId::SuppliersCorrelated,
        QueryId::LargeOrders,
        QueryId::RegistrationDates,
        QueryId::RankedCustomers,
        QueryId::ContactAnomalies,
        QueryId::ProductsByCategory,
        QueryId::PriceBuckets,
        QueryId::CityStatistics,
        QueryId::CustomerActivity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QueryId::TotalAbove => "total_above",
            QueryId::SuppliersGrouped => "suppliers_grouped",
            QueryId::SuppliersCorrelated => "suppliers_correlated",
            QueryId::LargeOrders => "large_orders",
            QueryId::RegistrationDates => "registration_dates",
            QueryId::RankedCustomers => "ranked_customers",
            QueryId::ContactAnomalies => "contact_anomalies",
            QueryId::ProductsByCategory => "products_by_category",
            QueryId::PriceBuckets => "price_buckets",
            QueryId::CityStatistics => "city_statistics",
            QueryId::CustomerActivity => "customer_activity",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            QueryId::TotalAbove => "Customers by order total",
            QueryId::SuppliersGrouped => "Local suppliers (join)",
            QueryId::SuppliersCorrelated => "Local suppliers (sub-query)",
            QueryId::LargeOrders => "Customers with a large order",
            QueryId::RegistrationDates => "Registration dates",
            QueryId::RankedCustomers => "Ranked registration dates",
            QueryId::ContactAnomalies => "Incomplete contact details",
            QueryId::ProductsByCategory => "Products by category and stock",
            QueryId::PriceBuckets => "Products by price class",
            QueryId::CityStatistics => "Income and intensity by city",
            QueryId::CustomerActivity => "Customer activity by period",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            QueryId::TotalAbove => {
                "Customers whose orders sum to more than a threshold, with that sum."
            }
            QueryId::SuppliersGrouped => {
                "Customers with the suppliers in the same country and city, via equi-join."
            }
            QueryId::SuppliersCorrelated => {
                "Customers with the suppliers in the same country and city, via per-customer filter."
            }
            QueryId::LargeOrders => {
                "Customers having at least one order above a threshold, with all their orders."
            }
            QueryId::RegistrationDates => {
                "Month and year of each customer's first order."
            }
            QueryId::RankedCustomers => {
                "First order date and order sum, newest registration and biggest sum first."
            }
            QueryId::ContactAnomalies => {
                "Customers without a region, with a non-numeric postal code or without a phone area code."
            }
            QueryId::ProductsByCategory => {
                "Products grouped by category, then availability, cheapest first."
            }
            QueryId::PriceBuckets => "Products grouped into cheap, middle and expensive.",
            QueryId::CityStatistics => {
                "Average per-customer order value and average order count per city."
            }
            QueryId::CustomerActivity => {
                "Order counts per customer by month, by year and by month and year."
            }
        }
    }
}

impl fmt::Display for QueryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for QueryId {
    type Err = ExecutorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QueryId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| ExecutorError::invalid_request(format!("unknown query: {}", s)))
    }
}
