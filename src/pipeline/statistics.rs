//! Statistics queries
//!
//! Per-city income and intensity averages, and per-customer order
//! activity broken down by month, by year and by month and year.

use rust_decimal::Decimal;

use super::rows::{CityStatisticsRow, CustomerActivityRow, MonthCount, MonthYearCount, YearCount};
use crate::executor::grouping::count_by;
use crate::executor::{aggregate, group_by, keys, Filter};
use crate::model::{Customer, DataStore, Order};

/// Mean order total of one customer
pub fn customer_income(customer: &Customer) -> Option<Decimal> {
    aggregate::average(customer.orders().iter().map(Order::total))
}

/// Average income and order count per city.
///
/// Only customers with orders contribute to either average. A city whose
/// customers have no orders at all is omitted. Cities appear in the order
/// their first ordering customer appears in the store.
pub fn city_statistics(store: &DataStore) -> Vec<CityStatisticsRow> {
    let active = Filter::new(Customer::has_orders).select(store.customers());
    let excluded = store.customers().len() - active.len();
    if excluded > 0 {
        tracing::trace!(excluded, "customers without orders left out of city averages");
    }

    group_by(active, |&customer| keys::customer_city(customer))
        .into_iter()
        .filter_map(|city| {
            let average_income =
                aggregate::average(city.members.iter().filter_map(|c| customer_income(c)))?;
            let average_intensity =
                aggregate::average_count(city.members.iter().map(|c| c.orders().len()))?;
            Some(CityStatisticsRow {
                city: city.key.to_string(),
                average_income,
                average_intensity,
            })
        })
        .collect()
}

/// Order counts of every customer, including those without orders.
///
/// Breakdowns list periods in first-seen order of the customer's orders.
pub fn customer_activity(store: &DataStore) -> Vec<CustomerActivityRow> {
    store.customers().iter().map(activity_of).collect()
}

fn activity_of(customer: &Customer) -> CustomerActivityRow {
    let orders = customer.orders();
    CustomerActivityRow {
        customer_id: customer.customer_id().to_string(),
        by_month: count_by(orders, |&order| keys::order_month(order))
            .into_iter()
            .map(|(month, orders)| MonthCount { month, orders })
            .collect(),
        by_year: count_by(orders, |&order| keys::order_year(order))
            .into_iter()
            .map(|(year, orders)| YearCount { year, orders })
            .collect(),
        by_month_and_year: count_by(orders, |&order| keys::order_month_year(order))
            .into_iter()
            .map(|(period, orders)| MonthYearCount {
                month: period.month,
                year: period.year,
                orders,
            })
            .collect(),
    }
}
