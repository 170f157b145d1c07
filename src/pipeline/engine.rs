//! Query engine
//!
//! Dispatches a [`QueryRequest`] to its pipeline over a borrowed store.
//!
//! Per run:
//! 1. Validate the request parameters
//! 2. Evaluate the pipeline
//! 3. Log the outcome through a [`QueryScope`]
//!
//! Evaluation never mutates the store, so one engine can run any number
//! of requests, each as often as needed, with identical results.

use serde::Serialize;

use super::rows::{
    CategoryRow, CityStatisticsRow, ContactAnomalyRow, CustomerActivityRow, CustomerOrdersRow,
    CustomerSuppliersRow, CustomerTotalRow, PriceBucketRow, RankedCustomerRow, RegistrationRow,
};
use super::sink::ResultSink;
use super::{customers, products, statistics};
use crate::executor::ExecutorResult;
use crate::model::DataStore;
use crate::observability::QueryScope;
use crate::query::{QueryId, QueryRequest};

/// Rows produced by one query run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "query", content = "rows", rename_all = "snake_case")]
pub enum QueryOutput {
    TotalAbove(Vec<CustomerTotalRow>),
    SuppliersGrouped(Vec<CustomerSuppliersRow>),
    SuppliersCorrelated(Vec<CustomerSuppliersRow>),
    LargeOrders(Vec<CustomerOrdersRow>),
    RegistrationDates(Vec<RegistrationRow>),
    RankedCustomers(Vec<RankedCustomerRow>),
    ContactAnomalies(Vec<ContactAnomalyRow>),
    ProductsByCategory(Vec<CategoryRow>),
    PriceBuckets(Vec<PriceBucketRow>),
    CityStatistics(Vec<CityStatisticsRow>),
    CustomerActivity(Vec<CustomerActivityRow>),
}

impl QueryOutput {
    pub fn query_id(&self) -> QueryId {
        match self {
            QueryOutput::TotalAbove(_) => QueryId::TotalAbove,
            QueryOutput::SuppliersGrouped(_) => QueryId::SuppliersGrouped,
            QueryOutput::SuppliersCorrelated(_) => QueryId::SuppliersCorrelated,
            QueryOutput::LargeOrders(_) => QueryId::LargeOrders,
            QueryOutput::RegistrationDates(_) => QueryId::RegistrationDates,
            QueryOutput::RankedCustomers(_) => QueryId::RankedCustomers,
            QueryOutput::ContactAnomalies(_) => QueryId::ContactAnomalies,
            QueryOutput::ProductsByCategory(_) => QueryId::ProductsByCategory,
            QueryOutput::PriceBuckets(_) => QueryId::PriceBuckets,
            QueryOutput::CityStatistics(_) => QueryId::CityStatistics,
            QueryOutput::CustomerActivity(_) => QueryId::CustomerActivity,
        }
    }

    /// Number of top-level rows
    pub fn len(&self) -> usize {
        match self {
            QueryOutput::TotalAbove(rows) => rows.len(),
            QueryOutput::SuppliersGrouped(rows) | QueryOutput::SuppliersCorrelated(rows) => {
                rows.len()
            }
            QueryOutput::LargeOrders(rows) => rows.len(),
            QueryOutput::RegistrationDates(rows) => rows.len(),
            QueryOutput::RankedCustomers(rows) => rows.len(),
            QueryOutput::ContactAnomalies(rows) => rows.len(),
            QueryOutput::ProductsByCategory(rows) => rows.len(),
            QueryOutput::PriceBuckets(rows) => rows.len(),
            QueryOutput::CityStatistics(rows) => rows.len(),
            QueryOutput::CustomerActivity(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Runs query requests against one store
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine<'a> {
    store: &'a DataStore,
}

impl<'a> QueryEngine<'a> {
    pub fn new(store: &'a DataStore) -> Self {
        Self { store }
    }

    /// Validates and evaluates one request
    pub fn run(&self, request: &QueryRequest) -> ExecutorResult<QueryOutput> {
        let id = request.id();
        let scope = QueryScope::new("QUERY", id.as_str());

        match self.evaluate(request) {
            Ok(output) => {
                scope.complete(output.len());
                Ok(output)
            }
            Err(e) => {
                scope.fail(&e.to_string());
                Err(e)
            }
        }
    }

    /// Runs one request and hands the result to `sink`; returns the row count
    pub fn run_into<S>(&self, request: &QueryRequest, sink: &mut S) -> ExecutorResult<usize>
    where
        S: ResultSink + ?Sized,
    {
        let output = self.run(request)?;
        sink.write(request, &output)?;
        Ok(output.len())
    }

    /// Runs every request in order, stopping at the first failure
    pub fn run_all<S>(&self, requests: &[QueryRequest], sink: &mut S) -> ExecutorResult<usize>
    where
        S: ResultSink + ?Sized,
    {
        let mut rows = 0;
        for request in requests {
            rows += self.run_into(request, sink)?;
        }
        tracing::info!(queries = requests.len(), rows, "SUITE_COMPLETE");
        Ok(rows)
    }

    fn evaluate(&self, request: &QueryRequest) -> ExecutorResult<QueryOutput> {
        request.validate()?;
        let store = self.store;

        let output = match request {
            QueryRequest::TotalAbove { threshold } => {
                QueryOutput::TotalAbove(customers::customers_with_total_above(store, *threshold))
            }
            QueryRequest::SuppliersGrouped => {
                QueryOutput::SuppliersGrouped(customers::suppliers_by_location_join(store))
            }
            QueryRequest::SuppliersCorrelated => {
                QueryOutput::SuppliersCorrelated(customers::suppliers_by_location_subquery(store))
            }
            QueryRequest::LargeOrders { threshold } => {
                QueryOutput::LargeOrders(customers::customers_with_order_above(store, *threshold))
            }
            QueryRequest::RegistrationDates => {
                QueryOutput::RegistrationDates(customers::registration_dates(store))
            }
            QueryRequest::RankedCustomers => {
                QueryOutput::RankedCustomers(customers::ranked_customers(store))
            }
            QueryRequest::ContactAnomalies => {
                QueryOutput::ContactAnomalies(customers::contact_anomalies(store))
            }
            QueryRequest::ProductsByCategory => {
                QueryOutput::ProductsByCategory(products::products_by_category(store))
            }
            QueryRequest::PriceBuckets { .. } => QueryOutput::PriceBuckets(
                products::products_by_price_bucket(store, request.price_bounds()?),
            ),
            QueryRequest::CityStatistics => {
                QueryOutput::CityStatistics(statistics::city_statistics(store))
            }
            QueryRequest::CustomerActivity => {
                QueryOutput::CustomerActivity(statistics::customer_activity(store))
            }
        };

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::CollectingSink;
    use crate::query::QueryParams;
    use rust_decimal::Decimal;

    #[test]
    fn test_output_matches_request() {
        let store = DataStore::default();
        let engine = QueryEngine::new(&store);
        for request in QueryParams::default().requests() {
            let output = engine.run(&request).unwrap();
            assert_eq!(output.query_id(), request.id());
            assert!(output.is_empty());
        }
    }

    #[test]
    fn test_invalid_request_is_rejected() {
        let store = DataStore::default();
        let engine = QueryEngine::new(&store);
        let request = QueryRequest::PriceBuckets {
            cheap_boundary: Decimal::new(40, 0),
            middle_boundary: Decimal::new(40, 0),
        };
        let err = engine.run(&request).unwrap_err();
        assert_eq!(err.code(), "QUERY_INVALID_PARAMETER");
    }

    #[test]
    fn test_failed_run_writes_nothing() {
        let store = DataStore::default();
        let engine = QueryEngine::new(&store);
        let mut sink = CollectingSink::new();
        let request = QueryRequest::PriceBuckets {
            cheap_boundary: Decimal::new(50, 0),
            middle_boundary: Decimal::new(20, 0),
        };
        assert!(engine.run_into(&request, &mut sink).is_err());
        assert!(sink.is_empty());
    }
}
