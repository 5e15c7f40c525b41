// core/src/service.rs

//! Asynchronous façade over the [`DonationStore`].
//!
//! Each operation first suspends on the configured [`Latency`] strategy and
//! then performs a single read or a single in-place assignment on the store.
//! The service returns owned snapshots; callers never hold references into
//! the store across an `.await`.

use crate::error::{CharityError, CharityResult};
use crate::model::{DonationItem, DonationStatus, NewDonation};
use crate::runtime::{Latency, NoLatency, Operation};
use crate::store::DonationStore;
use chrono::Utc;
use std::sync::Arc;
use tracing::{event, instrument, Level};
use uuid::Uuid;

#[derive(Clone)]
pub struct DonationService {
  store: DonationStore,
  latency: Arc<dyn Latency>,
}

impl std::fmt::Debug for DonationService {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("DonationService")
      .field("records", &self.store.len())
      .finish_non_exhaustive()
  }
}

impl DonationService {
  pub fn new(store: DonationStore, latency: Arc<dyn Latency>) -> Self {
    Self { store, latency }
  }

  /// A service that never suspends for long. Handy in tests.
  pub fn without_latency(store: DonationStore) -> Self {
    Self::new(store, Arc::new(NoLatency))
  }

  pub fn store(&self) -> &DonationStore {
    &self.store
  }

  /// All donations, newest first.
  #[instrument(name = "DonationService::list", skip(self))]
  pub async fn list(&self) -> CharityResult<Vec<DonationItem>> {
    self.latency.pause(Operation::ListDonations).await;
    let items = self.store.all_newest_first();
    event!(Level::DEBUG, count = items.len(), "Listed donations.");
    Ok(items)
  }

  /// The donations submitted by `donor_id`, newest first.
  #[instrument(name = "DonationService::list_by_donor", skip(self))]
  pub async fn list_by_donor(&self, donor_id: &str) -> CharityResult<Vec<DonationItem>> {
    self.latency.pause(Operation::ListDonorDonations).await;
    let items = self.store.by_donor_newest_first(donor_id);
    event!(Level::DEBUG, count = items.len(), "Listed donor donations.");
    Ok(items)
  }

  /// Records a new submission. The id, `Pending` status and timestamp are
  /// assigned here regardless of what the caller supplied. Negative
  /// quantities are rejected before the store is touched.
  #[instrument(
    name = "DonationService::create",
    skip(self, donation),
    fields(item_name = %donation.item_name, donor_id = %donation.donor_id),
    err(Display)
  )]
  pub async fn create(&self, donation: NewDonation) -> CharityResult<DonationItem> {
    self.latency.pause(Operation::CreateDonation).await;
    if donation.quantity < 0 {
      event!(Level::WARN, quantity = donation.quantity, "Rejected negative quantity.");
      return Err(CharityError::validation("quantity", "Quantity cannot be negative."));
    }
    let id = format!("d{}", Uuid::new_v4().simple());
    let item = donation.into_item(id, Utc::now());
    self.store.prepend(item.clone());
    event!(Level::INFO, donation_id = %item.id, "Donation submitted.");
    Ok(item)
  }

  /// Overwrites the status of `id`.
  ///
  /// No FROM-state check happens here; the admin dashboard decides which
  /// transitions it offers.
  #[instrument(name = "DonationService::set_status", skip(self), err(Display))]
  pub async fn set_status(&self, id: &str, status: DonationStatus) -> CharityResult<DonationItem> {
    self.latency.pause(Operation::SetStatus).await;
    let item = self.store.set_status(id, status)?;
    event!(Level::INFO, donation_id = %id, %status, "Donation status updated.");
    Ok(item)
  }

  /// Overwrites the quantity of `id`. Negative quantities are rejected
  /// before the store is touched.
  #[instrument(name = "DonationService::set_quantity", skip(self), err(Display))]
  pub async fn set_quantity(&self, id: &str, quantity: i32) -> CharityResult<DonationItem> {
    self.latency.pause(Operation::SetQuantity).await;
    if quantity < 0 {
      event!(Level::WARN, donation_id = %id, quantity, "Rejected negative quantity.");
      return Err(CharityError::validation("quantity", "Quantity cannot be negative."));
    }
    let item = self.store.set_quantity(id, quantity)?;
    event!(Level::INFO, donation_id = %id, quantity, "Donation quantity updated.");
    Ok(item)
  }
}
