// tests/admin_dashboard_tests.rs
mod common;

use charity_connect::{AdminDashboard, CharityError, DonationStatus, ManageActions};
use common::*;
use serial_test::serial;

async fn loaded_dashboard() -> AdminDashboard {
  let mut dashboard = AdminDashboard::new(seeded_service());
  dashboard.refresh().await.unwrap();
  dashboard
}

#[tokio::test]
#[serial]
async fn test_refresh_computes_summary_and_categories() {
  setup_tracing();
  let dashboard = loaded_dashboard().await;
  assert!(!dashboard.is_loading());
  assert!(dashboard.error().is_none());

  let summary = dashboard.summary();
  assert_eq!(summary.total_donations, 4);
  assert_eq!(summary.total_items, 104);
  assert_eq!(summary.pending_count, 1);
  assert_eq!(summary.unique_donors, 3);

  let categories: Vec<(String, i64)> = dashboard
    .categories()
    .into_iter()
    .map(|c| (c.category, c.total_items))
    .collect();
  assert_eq!(
    categories,
    vec![
      ("Education".to_string(), 50),
      ("Food".to_string(), 24),
      ("Medical".to_string(), 20),
      ("Clothing".to_string(), 10),
    ]
  );
}

#[tokio::test]
#[serial]
async fn test_pending_donation_can_be_approved() {
  setup_tracing();
  let mut dashboard = loaded_dashboard().await;

  let panel = dashboard.open_manage("d2").unwrap();
  assert_eq!(panel.actions(), ManageActions::Review);

  let approved = dashboard.approve().await.unwrap();
  assert_eq!(approved.status, DonationStatus::Approved);
  assert!(dashboard.managing().is_none());
  assert_eq!(dashboard.summary().pending_count, 0);
  let refreshed = dashboard.donations().iter().find(|d| d.id == "d2").unwrap();
  assert_eq!(refreshed.status, DonationStatus::Approved);
}

#[tokio::test]
#[serial]
async fn test_pending_donation_can_be_rejected() {
  setup_tracing();
  let mut dashboard = loaded_dashboard().await;
  dashboard.open_manage("d2").unwrap();
  let rejected = dashboard.reject().await.unwrap();
  assert_eq!(rejected.status, DonationStatus::Rejected);
}

#[tokio::test]
#[serial]
async fn test_review_is_not_offered_outside_pending() {
  setup_tracing();
  let mut dashboard = loaded_dashboard().await;
  dashboard.open_manage("d1").unwrap(); // Approved

  let err = dashboard.reject().await.unwrap_err();
  assert_eq!(
    err,
    CharityError::ActionNotAllowed {
      action: "reject".to_string(),
      status: DonationStatus::Approved,
    }
  );
  // The panel stays open and nothing changed.
  assert!(dashboard.managing().is_some());
  assert_eq!(dashboard.donations().iter().find(|d| d.id == "d1").unwrap().status, DonationStatus::Approved);
}

#[tokio::test]
#[serial]
async fn test_rejected_donation_offers_nothing() {
  setup_tracing();
  let mut dashboard = loaded_dashboard().await;
  let panel = dashboard.open_manage("d4").unwrap();
  assert_eq!(panel.actions(), ManageActions::None);
  assert!(!dashboard.can_save_quantity());

  dashboard.set_edit_quantity(1).unwrap();
  assert!(matches!(
    dashboard.save_quantity().await,
    Err(CharityError::ActionNotAllowed { .. })
  ));
  assert!(matches!(dashboard.approve().await, Err(CharityError::ActionNotAllowed { .. })));
}

#[tokio::test]
#[serial]
async fn test_quantity_edit_for_delivered_donation() {
  setup_tracing();
  let mut dashboard = loaded_dashboard().await;
  dashboard.open_manage("d3").unwrap(); // Delivered, quantity 50

  // Unchanged value: save disabled.
  assert!(!dashboard.can_save_quantity());
  assert!(dashboard.save_quantity().await.unwrap_err().is_validation());

  dashboard.set_edit_quantity(45).unwrap();
  assert!(dashboard.can_save_quantity());
  let updated = dashboard.save_quantity().await.unwrap();
  assert_eq!(updated.quantity, 45);
  assert_eq!(updated.status, DonationStatus::Delivered);
  assert_eq!(dashboard.summary().total_items, 99);
}

#[tokio::test]
#[serial]
async fn test_negative_quantity_is_rejected_locally() {
  setup_tracing();
  let mut dashboard = loaded_dashboard().await;
  dashboard.open_manage("d1").unwrap();
  dashboard.set_edit_quantity(-4).unwrap();

  let err = dashboard.save_quantity().await.unwrap_err();
  assert!(err.is_validation());
  assert_eq!(dashboard.notice(), Some("Quantity cannot be negative."));
  assert_eq!(dashboard.donations().iter().find(|d| d.id == "d1").unwrap().quantity, 10);
}

#[tokio::test]
#[serial]
async fn test_manage_requires_a_known_selection() {
  setup_tracing();
  let mut dashboard = loaded_dashboard().await;
  assert_eq!(
    dashboard.open_manage("nope").unwrap_err(),
    CharityError::NotFound { id: "nope".to_string() }
  );
  assert_eq!(dashboard.approve().await.unwrap_err(), CharityError::NoDonationSelected);
  assert_eq!(dashboard.set_edit_quantity(3).unwrap_err(), CharityError::NoDonationSelected);

  dashboard.open_manage("d2").unwrap();
  dashboard.close_manage();
  assert!(dashboard.managing().is_none());
}
