// demos/charity_app/src/walkthrough.rs

//! A scripted session: a donor submits, an admin reviews.

use crate::errors::Result as AppResult;
use charity_connect::{App, DashboardSummary, DonationStatus, Page, Role, CATEGORIES};
use serde::Serialize;
use tracing::{info, instrument, warn};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReport {
  pub summary: DashboardSummary,
  pub categories: Vec<charity_connect::CategoryStats>,
  pub pending_ids: Vec<String>,
}

#[instrument(name = "walkthrough::donor", skip(app))]
pub async fn donor_submits(app: &mut App) -> AppResult<String> {
  let donor = app.sign_in(Role::Donor).await?;
  info!(user = %donor.name, view = ?app.view(), "Donor signed in.");

  app.navigate(Page::Donate);
  let mut form = app.donation_form()?;
  form.draft.item_name = "Blankets".to_string();
  form.draft.description = "Five warm wool blankets.".to_string();
  form.draft.quantity = 5;
  form.draft.category = CATEGORIES[0].to_string();
  form.draft.phone_number = "555-0101".to_string();
  form.draft.address = "123 Charity Lane, Kindness City, KS 12345".to_string();
  let created = form.submit(Some(&donor)).await?;
  info!(donation_id = %created.id, "Donation submitted.");

  app.navigate(Page::History);
  let mut history = app.history()?;
  let mine = history.load(Some(&donor)).await?;
  for donation in mine {
    info!(id = %donation.id, item = %donation.item_name, status = %donation.status, "History entry.");
  }

  app.sign_out().await?;
  Ok(created.id)
}

#[instrument(name = "walkthrough::admin", skip(app))]
pub async fn admin_reviews(app: &mut App, donation_id: &str) -> AppResult<DashboardReport> {
  app.sign_in(Role::Admin).await?;
  info!(view = ?app.view(), "Admin signed in.");

  let mut dashboard = app.admin_dashboard()?;
  dashboard.refresh().await?;
  dashboard.open_manage(donation_id)?;
  let approved = dashboard.approve().await?;
  info!(donation_id = %approved.id, status = %approved.status, "Donation reviewed.");

  // Correct the quantity of the approved donation, exercising the edit path.
  dashboard.open_manage(donation_id)?;
  dashboard.set_edit_quantity(approved.quantity + 1)?;
  if dashboard.can_save_quantity() {
    dashboard.save_quantity().await?;
  } else {
    warn!("Quantity edit unexpectedly unavailable.");
  }

  let report = DashboardReport {
    summary: dashboard.summary(),
    categories: dashboard.categories(),
    pending_ids: dashboard
      .donations()
      .iter()
      .filter(|d| d.status == DonationStatus::Pending)
      .map(|d| d.id.clone())
      .collect(),
  };

  app.sign_out().await?;
  Ok(report)
}

pub fn print_report(report: &DashboardReport, as_json: bool) -> AppResult<()> {
  if as_json {
    println!("{}", serde_json::to_string_pretty(report)?);
    return Ok(());
  }
  let s = &report.summary;
  println!(
    "Donations: {}  Items: {}  Pending: {}  Donors: {}",
    s.total_donations, s.total_items, s.pending_count, s.unique_donors
  );
  for category in &report.categories {
    println!("  {:<12} {:>5} items in {} donation(s)", category.category, category.total_items, category.count);
  }
  Ok(())
}
