//! Query requests
//!
//! A request names one query and carries every parameter it needs, so a
//! request value can be run any number of times with the same result.
//!
//! JSON shape: `{"query": "total_above", "threshold": "1000"}`

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::catalog::QueryId;
use crate::executor::{ExecutorError, ExecutorResult, PriceBounds};

/// A fully parameterized query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "query", rename_all = "snake_case")]
pub enum QueryRequest {
    TotalAbove {
        threshold: Decimal,
    },
    SuppliersGrouped,
    SuppliersCorrelated,
    LargeOrders {
        threshold: Decimal,
    },
    RegistrationDates,
    RankedCustomers,
    ContactAnomalies,
    ProductsByCategory,
    PriceBuckets {
        cheap_boundary: Decimal,
        middle_boundary: Decimal,
    },
    CityStatistics,
    CustomerActivity,
}

impl QueryRequest {
    /// Parse and validate a request from a JSON string
    pub fn parse(json: &str) -> ExecutorResult<Self> {
        let request: QueryRequest = serde_json::from_str(json)
            .map_err(|e| ExecutorError::invalid_request(format!("Invalid JSON: {}", e)))?;
        request.validate()?;
        Ok(request)
    }

    /// Checks parameter preconditions.
    ///
    /// Thresholds are free: any value, negative included, is a valid bound.
    pub fn validate(&self) -> ExecutorResult<()> {
        match self {
            QueryRequest::PriceBuckets { .. } => self.price_bounds().map(|_| ()),
            _ => Ok(()),
        }
    }

    /// Price bounds of a `PriceBuckets` request
    pub fn price_bounds(&self) -> ExecutorResult<PriceBounds> {
        match self {
            QueryRequest::PriceBuckets {
                cheap_boundary,
                middle_boundary,
            } => PriceBounds::new(*cheap_boundary, *middle_boundary),
            other => Err(ExecutorError::invalid_request(format!(
                "{} has no price bounds",
                other.id()
            ))),
        }
    }

    /// The catalog entry this request runs
    pub fn id(&self) -> QueryId {
        match self {
            QueryRequest::TotalAbove { .. } => QueryId::TotalAbove,
            QueryRequest::SuppliersGrouped => QueryId::SuppliersGrouped,
            QueryRequest::SuppliersCorrelated => QueryId::SuppliersCorrelated,
            QueryRequest::LargeOrders { .. } => QueryId::LargeOrders,
            QueryRequest::RegistrationDates => QueryId::RegistrationDates,
            QueryRequest::RankedCustomers => QueryId::RankedCustomers,
            QueryRequest::ContactAnomalies => QueryId::ContactAnomalies,
            QueryRequest::ProductsByCategory => QueryId::ProductsByCategory,
            QueryRequest::PriceBuckets { .. } => QueryId::PriceBuckets,
            QueryRequest::CityStatistics => QueryId::CityStatistics,
            QueryRequest::CustomerActivity => QueryId::CustomerActivity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_threshold_request() {
        let request = QueryRequest::parse(r#"{"query": "total_above", "threshold": "1000"}"#).unwrap();
        assert_eq!(
            request,
            QueryRequest::TotalAbove {
                threshold: Decimal::new(1000, 0)
            }
        );
        assert_eq!(request.id(), QueryId::TotalAbove);
    }

    #[test]
    fn test_parse_unit_request() {
        let request = QueryRequest::parse(r#"{"query": "city_statistics"}"#).unwrap();
        assert_eq!(request, QueryRequest::CityStatistics);
    }

    #[test]
    fn test_parse_rejects_unknown_query() {
        let err = QueryRequest::parse(r#"{"query": "drop_everything"}"#).unwrap_err();
        assert_eq!(err.code(), "QUERY_INVALID_REQUEST");
    }

    #[test]
    fn test_parse_rejects_missing_parameter() {
        let err = QueryRequest::parse(r#"{"query": "large_orders"}"#).unwrap_err();
        assert_eq!(err.code(), "QUERY_INVALID_REQUEST");
    }

    #[test]
    fn test_parse_rejects_inverted_bounds() {
        let err = QueryRequest::parse(
            r#"{"query": "price_buckets", "cheap_boundary": "40", "middle_boundary": "20"}"#,
        )
        .unwrap_err();
        assert_eq!(err.code(), "QUERY_INVALID_PARAMETER");
    }

    #[test]
    fn test_negative_threshold_accepted() {
        let request = QueryRequest::parse(r#"{"query": "large_orders", "threshold": "-1"}"#).unwrap();
        assert_eq!(
            request,
            QueryRequest::LargeOrders {
                threshold: Decimal::new(-1, 0)
            }
        );
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_price_bounds_only_for_price_buckets() {
        assert!(QueryRequest::RankedCustomers.price_bounds().is_err());
        let request = QueryRequest::PriceBuckets {
            cheap_boundary: Decimal::new(20, 0),
            middle_boundary: Decimal::new(40, 0),
        };
        assert_eq!(request.price_bounds().unwrap().middle(), Decimal::new(40, 0));
    }
}
