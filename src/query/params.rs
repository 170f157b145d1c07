//! Query parameter configuration
//!
//! Holds the parameters the query suite runs with. Every field has a
//! default, so a configuration file only needs the values it overrides.
//!
//! Defaults:
//! - `total_threshold`: 1000
//! - `total_threshold_high`: 10000 (second run of the total query)
//! - `large_order_threshold`: 8000
//! - `cheap_boundary` / `middle_boundary`: 20 / 40

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::catalog::QueryId;
use super::request::QueryRequest;
use crate::executor::{ExecutorError, ExecutorResult, PriceBounds};

/// Parameters for the query suite
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QueryParams {
    /// Order-total sum a customer must exceed
    pub total_threshold: Decimal,
    /// Threshold for the re-run of the order-total query
    pub total_threshold_high: Decimal,
    /// Single-order total a customer must exceed at least once
    pub large_order_threshold: Decimal,
    /// Prices strictly below this are cheap
    pub cheap_boundary: Decimal,
    /// Prices strictly below this (and not cheap) are middle
    pub middle_boundary: Decimal,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            total_threshold: Decimal::new(1000, 0),
            total_threshold_high: Decimal::new(10000, 0),
            large_order_threshold: Decimal::new(8000, 0),
            cheap_boundary: Decimal::new(20, 0),
            middle_boundary: Decimal::new(40, 0),
        }
    }
}

impl QueryParams {
    /// Load parameters from a JSON string, then validate them
    pub fn from_json(json: &str) -> ExecutorResult<Self> {
        let params: QueryParams = serde_json::from_str(json)
            .map_err(|e| ExecutorError::invalid_request(format!("Invalid parameters: {}", e)))?;
        params.validate()?;
        Ok(params)
    }

    /// Checks that the price bounds are ordered; thresholds take any value
    pub fn validate(&self) -> ExecutorResult<()> {
        self.price_bounds().map(|_| ())
    }

    pub fn price_bounds(&self) -> ExecutorResult<PriceBounds> {
        PriceBounds::new(self.cheap_boundary, self.middle_boundary)
    }

    /// Builds the request for one catalog entry
    pub fn request_for(&self, id: QueryId) -> QueryRequest {
        match id {
            QueryId::TotalAbove => QueryRequest::TotalAbove {
                threshold: self.total_threshold,
            },
            QueryId::SuppliersGrouped => QueryRequest::SuppliersGrouped,
            QueryId::SuppliersCorrelated => QueryRequest::SuppliersCorrelated,
            QueryId::LargeOrders => QueryRequest::LargeOrders {
                threshold: self.large_order_threshold,
            },
            QueryId::RegistrationDates => QueryRequest::RegistrationDates,
            QueryId::RankedCustomers => QueryRequest::RankedCustomers,
            QueryId::ContactAnomalies => QueryRequest::ContactAnomalies,
            QueryId::ProductsByCategory => QueryRequest::ProductsByCategory,
            QueryId::PriceBuckets => QueryRequest::PriceBuckets {
                cheap_boundary: self.cheap_boundary,
                middle_boundary: self.middle_boundary,
            },
            QueryId::CityStatistics => QueryRequest::CityStatistics,
            QueryId::CustomerActivity => QueryRequest::CustomerActivity,
        }
    }

    /// Every request of the suite in catalog order.
    ///
    /// The order-total query runs twice, once per threshold.
    pub fn requests(&self) -> Vec<QueryRequest> {
        let mut requests = Vec::with_capacity(QueryId::ALL.len() + 1);
        for id in QueryId::ALL {
            requests.push(self.request_for(id));
            if id == QueryId::TotalAbove {
                requests.push(QueryRequest::TotalAbove {
                    threshold: self.total_threshold_high,
                });
            }
        }
        requests
    }
}
