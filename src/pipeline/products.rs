//! Product queries
//!
//! Grouping by category and availability, and classification into price
//! buckets. Both keep the store's product order inside every group,
//! except the availability groups which list the cheapest product first.

use super::rows::{AvailabilityGroup, CategoryRow, PriceBucketRow, ProductLine};
use crate::executor::{group_by, keys, PriceBounds, ResultSorter, SortSpec};
use crate::model::{DataStore, Product};

/// Products grouped by category, then by in-stock status, cheapest first.
///
/// Categories and availability groups appear in first-seen order.
pub fn products_by_category(store: &DataStore) -> Vec<CategoryRow> {
    let by_price = SortSpec::asc(|product: &&Product| product.unit_price());

    group_by(store.products(), |&product| keys::product_category(product))
        .into_iter()
        .map(|category| category.regroup(|&product| keys::product_in_stock(product)))
        .map(|category| CategoryRow {
            category: category.key.to_string(),
            availability: category
                .members
                .into_iter()
                .map(|availability| AvailabilityGroup {
                    in_stock: availability.key,
                    products: ResultSorter::sorted(availability.members, &by_price)
                        .into_iter()
                        .map(ProductLine::from)
                        .collect(),
                })
                .collect(),
        })
        .collect()
}

/// Products classified into cheap, middle and expensive.
///
/// Only non-empty buckets appear, in first-seen order.
pub fn products_by_price_bucket(store: &DataStore, bounds: PriceBounds) -> Vec<PriceBucketRow> {
    group_by(store.products(), |product| bounds.classify(product.unit_price()))
        .into_iter()
        .map(|bucket| PriceBucketRow {
            bucket: bucket.key,
            products: bucket.members.into_iter().map(ProductLine::from).collect(),
        })
        .collect()
}
