// tests/common/mod.rs
#![allow(dead_code)] // Not every test file uses every helper

use async_trait::async_trait;
use charity_connect::{
  App, AppConfig, DonationService, DonationStore, Latency, NewDonation, NoLatency, Operation,
};
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::Notify;
use tracing::Level;

// --- Fixtures ---
pub fn new_donation(item_name: &str, category: &str, quantity: i32, donor_id: &str) -> NewDonation {
  NewDonation {
    item_name: item_name.to_string(),
    description: format!("{} for the shelter", item_name),
    quantity,
    category: category.to_string(),
    image_url: format!("https://picsum.photos/seed/{}/400/300", item_name),
    donor_name: format!("Donor {}", donor_id),
    donor_id: donor_id.to_string(),
    donor_phone_number: "555-0199".to_string(),
    donor_address: "1 Test Street".to_string(),
  }
}

pub fn empty_service() -> DonationService {
  DonationService::without_latency(DonationStore::new())
}

pub fn seeded_service() -> DonationService {
  DonationService::without_latency(DonationStore::with_demo_data(Utc::now()))
}

pub fn seeded_app() -> App {
  let config = AppConfig {
    seed_demo_data: true,
    ..AppConfig::for_tests()
  };
  App::start(config)
}

pub fn no_latency() -> Arc<dyn Latency> {
  Arc::new(NoLatency)
}

// --- Latency strategy that parks until the test releases it ---
/// Every `pause` announces itself on `entered` and then waits for `release`.
/// Lets a test observe the in-between state of a suspended operation.
#[derive(Default)]
pub struct GateLatency {
  pub entered: Notify,
  pub release: Notify,
}

#[async_trait]
impl Latency for GateLatency {
  async fn pause(&self, _op: Operation) {
    self.entered.notify_one();
    self.release.notified().await;
  }
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
