//! Aggregate read-outs over an inventory: headline stats, value share per
//! category, most expensive items.
//!
//! Everything here is a pure function of the inventory value.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::inventory::Inventory;
use crate::item::Item;

/// How many items `top_expensive` returns unless told otherwise.
pub const DEFAULT_TOP_N: usize = 5;

/// Headline numbers for the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InventorySummary {
    /// Sum of quantities.
    pub total_items: u64,
    /// Sum of price × qty.
    pub total_value: f64,
    /// Number of records with qty below the low-stock threshold.
    pub low_stock_count: usize,
}

/// One category's share of the grand total value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: String,
    pub total_value: f64,
    /// 0..=100; always 0 when the grand total is 0.
    pub percent: f64,
}

impl Inventory {
    pub fn summary(&self) -> InventorySummary {
        let mut summary = InventorySummary {
            total_items: 0,
            total_value: 0.0,
            low_stock_count: 0,
        };
        for item in self.iter() {
            summary.total_items += u64::from(item.qty());
            summary.total_value += item.total_value();
            if item.is_low_stock() {
                summary.low_stock_count += 1;
            }
        }
        summary
    }

    /// Value per category, highest first; equal values sort by category name.
    pub fn category_value_distribution(&self) -> Vec<CategoryShare> {
        let mut by_category: BTreeMap<&str, f64> = BTreeMap::new();
        for item in self.iter() {
            *by_category.entry(item.category()).or_insert(0.0) += item.total_value();
        }

        let grand_total: f64 = by_category.values().sum();

        let mut shares: Vec<CategoryShare> = by_category
            .into_iter()
            .map(|(category, total_value)| CategoryShare {
                category: category.to_string(),
                total_value,
                percent: if grand_total > 0.0 {
                    total_value / grand_total * 100.0
                } else {
                    0.0
                },
            })
            .collect();

        // BTreeMap already yields names ascending; the stable sort keeps that for ties.
        shares.sort_by(|a, b| b.total_value.total_cmp(&a.total_value));
        shares
    }

    /// Up to `n` items by price, highest first. Equal prices keep inventory order.
    pub fn top_expensive(&self, n: usize) -> Vec<&Item> {
        let mut items: Vec<&Item> = self.iter().collect();
        items.sort_by(|a, b| b.price().amount().total_cmp(&a.price().amount()));
        items.truncate(n);
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Price;
    use electrovault_core::ItemId;

    fn test_item(id: u64, name: &str, category: &str, price: f64, qty: u32) -> Item {
        Item::new(ItemId::new(id), name, category, Price::new(price).unwrap(), qty)
    }

    fn test_inventory() -> Inventory {
        Inventory::from_items(vec![
            test_item(1, "RTX 4090", "GPU", 1599.99, 3),
            test_item(2, "Headset", "Accessory", 348.00, 25),
        ])
        .unwrap()
    }

    #[test]
    fn summary_of_empty_inventory_is_zero() {
        let summary = Inventory::new().summary();
        assert_eq!(
            summary,
            InventorySummary {
                total_items: 0,
                total_value: 0.0,
                low_stock_count: 0,
            }
        );
    }

    #[test]
    fn summary_of_sample_like_inventory() {
        let summary = test_inventory().summary();
        assert_eq!(summary.total_items, 28);
        assert!((summary.total_value - (1599.99 * 3.0 + 348.00 * 25.0)).abs() < 1e-6);
        assert!((summary.total_value - 13499.97).abs() < 1e-6);
        assert_eq!(summary.low_stock_count, 1);
    }

    #[test]
    fn zero_qty_items_count_as_low_stock() {
        let inv = Inventory::from_items(vec![test_item(1, "Fan", "Other", 12.0, 0)]).unwrap();
        let summary = inv.summary();
        assert_eq!(summary.total_items, 0);
        assert_eq!(summary.total_value, 0.0);
        assert_eq!(summary.low_stock_count, 1);
    }

    #[test]
    fn distribution_sorts_by_value_descending() {
        let shares = test_inventory().category_value_distribution();
        let categories: Vec<&str> = shares.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(categories, vec!["Accessory", "GPU"]);
        assert!((shares[0].total_value - 8700.0).abs() < 1e-9);
    }

    #[test]
    fn distribution_groups_items_of_one_category() {
        let inv = Inventory::from_items(vec![
            test_item(1, "RTX 4090", "GPU", 1000.0, 1),
            test_item(2, "RTX 4070", "GPU", 500.0, 2),
            test_item(3, "Ryzen 7", "CPU", 1000.0, 1),
        ])
        .unwrap();
        let shares = inv.category_value_distribution();
        assert_eq!(shares.len(), 2);
        assert_eq!(shares[0].category, "GPU");
        assert!((shares[0].total_value - 2000.0).abs() < 1e-9);
        assert!((shares[0].percent - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn distribution_breaks_ties_by_category_name() {
        let inv = Inventory::from_items(vec![
            test_item(1, "Z", "Mobile", 100.0, 1),
            test_item(2, "Y", "Laptop", 100.0, 1),
            test_item(3, "X", "CPU", 100.0, 1),
        ])
        .unwrap();
        let categories: Vec<String> = inv
            .category_value_distribution()
            .into_iter()
            .map(|s| s.category)
            .collect();
        assert_eq!(categories, vec!["CPU", "Laptop", "Mobile"]);
    }

    #[test]
    fn distribution_percent_is_zero_when_grand_total_is_zero() {
        let inv = Inventory::from_items(vec![
            test_item(1, "A", "GPU", 10.0, 0),
            test_item(2, "B", "CPU", 20.0, 0),
        ])
        .unwrap();
        let shares = inv.category_value_distribution();
        assert_eq!(shares.len(), 2);
        assert!(shares.iter().all(|s| s.percent == 0.0));
    }

    #[test]
    fn distribution_of_empty_inventory_is_empty() {
        assert!(Inventory::new().category_value_distribution().is_empty());
    }

    #[test]
    fn top_expensive_of_sample_like_inventory() {
        let inv = test_inventory();
        let top = inv.top_expensive(1);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].id(), ItemId::new(1));
    }

    #[test]
    fn top_expensive_keeps_insertion_order_on_ties() {
        let inv = Inventory::from_items(vec![
            test_item(5, "First", "GPU", 200.0, 1),
            test_item(3, "Cheap", "CPU", 50.0, 1),
            test_item(9, "Second", "GPU", 200.0, 1),
            test_item(1, "Top", "Laptop", 999.0, 1),
        ])
        .unwrap();
        let ids: Vec<u64> = inv
            .top_expensive(DEFAULT_TOP_N)
            .iter()
            .map(|i| i.id().get())
            .collect();
        assert_eq!(ids, vec![1, 5, 9, 3]);
    }

    #[test]
    fn top_expensive_caps_at_n() {
        let inv = Inventory::defaults();
        assert_eq!(inv.top_expensive(2).len(), 2);
        assert_eq!(inv.top_expensive(0).len(), 0);
        assert_eq!(inv.top_expensive(10).len(), 4);
        assert_eq!(inv.top_expensive(1)[0].name(), "MacBook Pro M2");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: non-empty inventories with value distribute exactly 100 percent.
            #[test]
            fn percentages_sum_to_one_hundred(
                rows in proptest::collection::vec(
                    ("(GPU|CPU|Mobile|Laptop|Accessory|Other)", 0.01f64..10_000.0, 1u32..500),
                    1..40,
                )
            ) {
                let items: Vec<Item> = rows
                    .into_iter()
                    .enumerate()
                    .map(|(i, (category, price, qty))| {
                        test_item(i as u64 + 1, "part", &category, price, qty)
                    })
                    .collect();
                let inv = Inventory::from_items(items).unwrap();

                let total: f64 = inv
                    .category_value_distribution()
                    .iter()
                    .map(|s| s.percent)
                    .sum();
                prop_assert!((total - 100.0).abs() < 1e-6, "sum was {}", total);
            }

            /// Property: the top-N list is sorted by price descending.
            #[test]
            fn top_expensive_is_sorted(
                prices in proptest::collection::vec(0.01f64..10_000.0, 0..40),
                n in 0usize..50,
            ) {
                let items: Vec<Item> = prices
                    .iter()
                    .enumerate()
                    .map(|(i, price)| test_item(i as u64 + 1, "part", "Other", *price, 1))
                    .collect();
                let inv = Inventory::from_items(items).unwrap();

                let top = inv.top_expensive(n);
                prop_assert_eq!(top.len(), n.min(prices.len()));
                for pair in top.windows(2) {
                    prop_assert!(pair[0].price().amount() >= pair[1].price().amount());
                }
            }
        }
    }
}
