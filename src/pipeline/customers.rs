//! Customer queries
//!
//! Order-total filtering, local supplier lookup (both join strategies),
//! large orders, registration dates with ranking, and contact anomalies.
//!
//! Customers without orders have no registration date. Every query that
//! needs one drops them before projecting.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use super::rows::{
    ContactAnomalyRow, CustomerOrdersRow, CustomerSuppliersRow, CustomerTotalRow, OrderLine,
    RankedCustomerRow, RegistrationRow,
};
use crate::executor::{
    aggregate, group_by, inner_join, keys, pattern, semi_join, CompareOp, Filter, PairFilter,
    ResultSorter, SortDirection, SortSpec,
};
use crate::model::{Customer, DataStore, Order, Supplier};

/// Sum of the customer's order totals; zero without orders
pub fn order_total(customer: &Customer) -> Decimal {
    aggregate::sum(customer.orders().iter().map(Order::total))
}

/// Date of the customer's earliest order
pub fn registration_date(customer: &Customer) -> Option<NaiveDate> {
    aggregate::min(customer.orders().iter().map(Order::order_date))
}

/// Customers whose order sum is strictly above `threshold`
pub fn total_above(threshold: Decimal) -> Filter<'static, Customer> {
    Filter::compare(order_total, CompareOp::Gt, threshold)
}

/// Customers with at least one order strictly above `threshold`
pub fn has_order_above(threshold: Decimal) -> Filter<'static, Customer> {
    let large = Filter::compare(Order::total, CompareOp::Gt, threshold);
    Filter::new(move |customer: &Customer| customer.orders().iter().any(|o| large.matches(o)))
}

pub fn postal_code_invalid(customer: &Customer) -> bool {
    !pattern::is_digits_only(customer.postal_code())
}

pub fn area_code_missing(customer: &Customer) -> bool {
    !pattern::has_area_code_prefix(customer.phone())
}

/// Customers with at least one incomplete contact field
pub fn contact_anomaly() -> Filter<'static, Customer> {
    Filter::any_of([
        Filter::new(Customer::region_missing),
        Filter::new(postal_code_invalid),
        Filter::new(area_code_missing),
    ])
}

/// Customers whose order totals sum to more than `threshold`, in store order.
pub fn customers_with_total_above(store: &DataStore, threshold: Decimal) -> Vec<CustomerTotalRow> {
    total_above(threshold)
        .select(store.customers())
        .into_iter()
        .map(|customer| CustomerTotalRow {
            customer_id: customer.customer_id().to_string(),
            total: order_total(customer),
        })
        .collect()
}

/// Local suppliers via hash equi-join on (country, city), grouped by customer.
///
/// Customers without a local supplier do not appear.
pub fn suppliers_by_location_join(store: &DataStore) -> Vec<CustomerSuppliersRow> {
    let pairs = inner_join(
        store.customers(),
        store.suppliers(),
        keys::customer_location,
        keys::supplier_location,
    );

    group_by(pairs, |&(customer, _)| customer.customer_id())
        .into_iter()
        .filter_map(|group| {
            let (customer, _) = *group.members.first()?;
            Some(CustomerSuppliersRow::new(
                customer,
                group.members.iter().map(|&(_, supplier)| supplier),
            ))
        })
        .collect()
}

/// Local suppliers via a per-customer filter over the supplier list.
///
/// Relates exactly the same pairs as [`suppliers_by_location_join`].
pub fn suppliers_by_location_subquery(store: &DataStore) -> Vec<CustomerSuppliersRow> {
    let same_location = PairFilter::new(|customer: &Customer, supplier: &Supplier| {
        keys::customer_location(customer) == keys::supplier_location(supplier)
    });

    semi_join(store.customers(), store.suppliers(), &same_location)
        .into_iter()
        .map(|correlated| CustomerSuppliersRow::new(correlated.left, correlated.matches))
        .collect()
}

/// Customers with at least one order above `threshold`, listing all orders.
pub fn customers_with_order_above(store: &DataStore, threshold: Decimal) -> Vec<CustomerOrdersRow> {
    has_order_above(threshold)
        .select(store.customers())
        .into_iter()
        .map(|customer| CustomerOrdersRow {
            customer_id: customer.customer_id().to_string(),
            orders: customer.orders().iter().map(OrderLine::from).collect(),
        })
        .collect()
}

/// Month and year of every customer's first order, in store order.
pub fn registration_dates(store: &DataStore) -> Vec<RegistrationRow> {
    active_customers(store)
        .into_iter()
        .filter_map(|customer| {
            let registered = registration_date(customer)?;
            Some(RegistrationRow {
                customer_id: customer.customer_id().to_string(),
                registered,
                month: registered.month(),
                year: registered.year(),
            })
        })
        .collect()
}

/// Registration dates with order sums, ranked newest year, newest month,
/// then biggest sum first. Remaining ties fall back to customer id.
pub fn ranked_customers(store: &DataStore) -> Vec<RankedCustomerRow> {
    let rows: Vec<RankedCustomerRow> = active_customers(store)
        .into_iter()
        .filter_map(|customer| {
            let registered = registration_date(customer)?;
            Some(RankedCustomerRow {
                customer_id: customer.customer_id().to_string(),
                total: order_total(customer),
                registered,
                month: registered.month(),
                year: registered.year(),
            })
        })
        .collect();

    let ranking = SortSpec::desc(|row: &RankedCustomerRow| row.year)
        .then_desc(|row: &RankedCustomerRow| row.month)
        .then_desc(|row: &RankedCustomerRow| row.total)
        .then_by(
            |a: &RankedCustomerRow, b: &RankedCustomerRow| a.customer_id.cmp(&b.customer_id),
            SortDirection::Asc,
        );

    ResultSorter::sorted(rows, &ranking)
}

/// Customers without a region, with a non-numeric postal code, or whose
/// phone lacks a parenthesized area code.
pub fn contact_anomalies(store: &DataStore) -> Vec<ContactAnomalyRow> {
    contact_anomaly()
        .select(store.customers())
        .into_iter()
        .map(|customer| ContactAnomalyRow {
            customer_id: customer.customer_id().to_string(),
            region: customer.region().map(str::to_string),
            postal_code: customer.postal_code().to_string(),
            phone: customer.phone().to_string(),
            missing_region: customer.region_missing(),
            invalid_postal_code: postal_code_invalid(customer),
            missing_area_code: area_code_missing(customer),
        })
        .collect()
}

fn active_customers(store: &DataStore) -> Vec<&Customer> {
    let active = Filter::new(Customer::has_orders).select(store.customers());
    let excluded = store.customers().len() - active.len();
    if excluded > 0 {
        tracing::trace!(excluded, "customers without orders skipped");
    }
    active
}
