// core/src/store.rs

//! The in-memory donation store.
//!
//! The store is the sole owner of every [`DonationItem`]. It is synchronous:
//! each method takes the lock, does one assignment or one copy, and releases
//! it. Suspension (simulated latency) lives one layer up in
//! [`crate::service::DonationService`].

use crate::error::{CharityError, CharityResult};
use crate::model::{DonationItem, DonationStatus};
use crate::runtime::Shared;
use chrono::{DateTime, Duration, Utc};
use tracing::{event, Level};

#[derive(Debug, Clone, Default)]
pub struct DonationStore {
  records: Shared<Vec<DonationItem>>,
}

impl DonationStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn from_records(records: Vec<DonationItem>) -> Self {
    Self {
      records: Shared::new(records),
    }
  }

  /// A store pre-populated with the four demo donations, timestamped relative to `now`.
  pub fn with_demo_data(now: DateTime<Utc>) -> Self {
    Self::from_records(demo_donations(now))
  }

  pub fn len(&self) -> usize {
    self.records.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.records.read().is_empty()
  }

  /// All records, newest first. Equal timestamps keep their storage order.
  pub fn all_newest_first(&self) -> Vec<DonationItem> {
    let mut items = self.records.snapshot();
    sort_newest_first(&mut items);
    items
  }

  /// Records whose `donor_id` matches, newest first.
  pub fn by_donor_newest_first(&self, donor_id: &str) -> Vec<DonationItem> {
    let mut items: Vec<DonationItem> = self
      .records
      .read()
      .iter()
      .filter(|d| d.donor_id == donor_id)
      .cloned()
      .collect();
    sort_newest_first(&mut items);
    items
  }

  pub fn get(&self, id: &str) -> Option<DonationItem> {
    self.records.read().iter().find(|d| d.id == id).cloned()
  }

  /// Inserts `item` at the front of the store.
  pub fn prepend(&self, item: DonationItem) {
    event!(Level::TRACE, donation_id = %item.id, "Prepending donation to store.");
    self.records.update(|records| records.insert(0, item));
  }

  pub fn set_status(&self, id: &str, status: DonationStatus) -> CharityResult<DonationItem> {
    self.modify(id, |item| item.status = status)
  }

  pub fn set_quantity(&self, id: &str, quantity: i32) -> CharityResult<DonationItem> {
    self.modify(id, |item| item.quantity = quantity)
  }

  fn modify(&self, id: &str, change: impl FnOnce(&mut DonationItem)) -> CharityResult<DonationItem> {
    self.records.update(|records| {
      let item = records
        .iter_mut()
        .find(|d| d.id == id)
        .ok_or_else(|| CharityError::not_found(id))?;
      change(item);
      Ok(item.clone())
    })
  }
}

fn sort_newest_first(items: &mut [DonationItem]) {
  // `sort_by` is stable, so ties keep their relative order.
  items.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
}

fn demo_donations(now: DateTime<Utc>) -> Vec<DonationItem> {
  let jane = ("Jane Donor", "user-123", "555-0101", "123 Charity Lane, Kindness City, KS 12345");
  let record = |id: &str,
                item_name: &str,
                description: &str,
                quantity: i32,
                category: &str,
                seed: &str,
                donor: (&str, &str, &str, &str),
                status: DonationStatus,
                days_ago: i64| DonationItem {
    id: id.to_string(),
    item_name: item_name.to_string(),
    description: description.to_string(),
    quantity,
    category: category.to_string(),
    image_url: format!("https://picsum.photos/seed/{}/400/300", seed),
    donor_name: donor.0.to_string(),
    donor_id: donor.1.to_string(),
    donor_phone_number: donor.2.to_string(),
    donor_address: donor.3.to_string(),
    status,
    submitted_at: now - Duration::days(days_ago),
  };

  vec![
    record(
      "d1",
      "Winter Coats",
      "A collection of 10 gently used winter coats for adults.",
      10,
      "Clothing",
      "coats",
      jane,
      DonationStatus::Approved,
      2,
    ),
    record(
      "d2",
      "Canned Goods",
      "A box of assorted canned vegetables and soups.",
      24,
      "Food",
      "canned",
      ("John Smith", "user-789", "555-0102", "456 Giving St, Hopeville, CA 98765"),
      DonationStatus::Pending,
      1,
    ),
    record(
      "d3",
      "Children's Books",
      "50 books for ages 5-10.",
      50,
      "Education",
      "books",
      jane,
      DonationStatus::Delivered,
      10,
    ),
    record(
      "d4",
      "First Aid Kits",
      "20 new first aid kits.",
      20,
      "Medical",
      "aid",
      ("Helping Hands Org", "org-111", "555-0103", "789 Support Ave, Compassion Town, TX 54321"),
      DonationStatus::Rejected,
      5,
    ),
  ]
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn demo_data_lists_newest_first() {
    let store = DonationStore::with_demo_data(Utc::now());
    let ids: Vec<String> = store.all_newest_first().into_iter().map(|d| d.id).collect();
    assert_eq!(ids, vec!["d2", "d1", "d4", "d3"]);
    assert_eq!(store.len(), 4);
  }

  #[test]
  fn unknown_id_leaves_store_untouched() {
    let store = DonationStore::with_demo_data(Utc::now());
    let before = store.all_newest_first();
    let err = store.set_quantity("missing", 3).unwrap_err();
    assert_eq!(err, CharityError::NotFound { id: "missing".to_string() });
    assert_eq!(store.all_newest_first(), before);
  }

  #[test]
  fn ties_keep_storage_order() {
    let now = Utc::now();
    let mut a = demo_donations(now).remove(0);
    a.submitted_at = now;
    let mut b = a.clone();
    b.id = "d-second".to_string();
    let store = DonationStore::from_records(vec![a, b]);
    let ids: Vec<String> = store.all_newest_first().into_iter().map(|d| d.id).collect();
    assert_eq!(ids, vec!["d1", "d-second"]);
  }
}
