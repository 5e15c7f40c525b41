// core/src/stats.rs

//! Dashboard aggregates. Everything here is a pure function of a snapshot;
//! nothing is cached between refreshes.

use crate::model::{DonationItem, DonationStatus};
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
  pub total_donations: usize,
  pub total_items: i64,
  pub pending_count: usize,
  pub unique_donors: usize,
}

impl DashboardSummary {
  pub fn from_donations(donations: &[DonationItem]) -> Self {
    let donors: HashSet<&str> = donations.iter().map(|d| d.donor_id.as_str()).collect();
    DashboardSummary {
      total_donations: donations.len(),
      total_items: donations.iter().map(|d| i64::from(d.quantity)).sum(),
      pending_count: donations
        .iter()
        .filter(|d| d.status == DonationStatus::Pending)
        .count(),
      unique_donors: donors.len(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStats {
  pub category: String,
  pub count: usize,
  pub total_items: i64,
}

/// Groups by category, largest `total_items` first. Ties are broken by
/// category name so the order is deterministic.
pub fn category_breakdown(donations: &[DonationItem]) -> Vec<CategoryStats> {
  let mut groups: BTreeMap<&str, (usize, i64)> = BTreeMap::new();
  for donation in donations {
    let entry = groups.entry(donation.category.as_str()).or_default();
    entry.0 += 1;
    entry.1 += i64::from(donation.quantity);
  }

  let mut stats: Vec<CategoryStats> = groups
    .into_iter()
    .map(|(category, (count, total_items))| CategoryStats {
      category: category.to_string(),
      count,
      total_items,
    })
    .collect();
  // BTreeMap already yields names ascending; a stable sort keeps that for ties.
  stats.sort_by(|a, b| b.total_items.cmp(&a.total_items));
  stats
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::Utc;

  fn donation(id: &str, category: &str, quantity: i32, donor: &str, status: DonationStatus) -> DonationItem {
    DonationItem {
      id: id.to_string(),
      item_name: format!("item {}", id),
      description: String::new(),
      quantity,
      category: category.to_string(),
      image_url: String::new(),
      donor_name: donor.to_string(),
      donor_id: donor.to_string(),
      donor_phone_number: String::new(),
      donor_address: String::new(),
      status,
      submitted_at: Utc::now(),
    }
  }

  #[test]
  fn food_outranks_clothing_by_total_items() {
    let donations = vec![
      donation("a", "Clothing", 5, "u1", DonationStatus::Pending),
      donation("b", "Clothing", 10, "u2", DonationStatus::Approved),
      donation("c", "Food", 20, "u1", DonationStatus::Pending),
    ];
    let stats = category_breakdown(&donations);
    assert_eq!(
      stats,
      vec![
        CategoryStats {
          category: "Food".to_string(),
          count: 1,
          total_items: 20
        },
        CategoryStats {
          category: "Clothing".to_string(),
          count: 2,
          total_items: 15
        },
      ]
    );
  }

  #[test]
  fn summary_counts_items_pending_and_distinct_donors() {
    let donations = vec![
      donation("a", "Clothing", 5, "u1", DonationStatus::Pending),
      donation("b", "Clothing", 10, "u2", DonationStatus::Approved),
      donation("c", "Food", 20, "u1", DonationStatus::Pending),
    ];
    let summary = DashboardSummary::from_donations(&donations);
    assert_eq!(
      summary,
      DashboardSummary {
        total_donations: 3,
        total_items: 35,
        pending_count: 2,
        unique_donors: 2,
      }
    );
  }

  #[test]
  fn empty_snapshot_is_all_zero() {
    assert_eq!(DashboardSummary::from_donations(&[]), DashboardSummary::default());
    assert!(category_breakdown(&[]).is_empty());
  }

  #[test]
  fn ties_order_by_category_name() {
    let donations = vec![
      donation("a", "Toys", 4, "u1", DonationStatus::Pending),
      donation("b", "Books", 4, "u1", DonationStatus::Pending),
    ];
    let names: Vec<String> = category_breakdown(&donations).into_iter().map(|s| s.category).collect();
    assert_eq!(names, vec!["Books", "Toys"]);
  }
}
