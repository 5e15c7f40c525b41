// core/src/model/donation.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Categories offered by the donation form. The store itself accepts any label.
pub const CATEGORIES: [&str; 8] = [
  "Clothing",
  "Food",
  "Electronics",
  "Books",
  "Furniture",
  "Medical",
  "Toys",
  "Other",
];

pub const DEFAULT_CATEGORY: &str = "Clothing";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DonationStatus {
  Pending,
  Approved,
  Rejected,
  Delivered,
}

impl DonationStatus {
  pub fn as_str(self) -> &'static str {
    match self {
      DonationStatus::Pending => "Pending",
      DonationStatus::Approved => "Approved",
      DonationStatus::Rejected => "Rejected",
      DonationStatus::Delivered => "Delivered",
    }
  }
}

impl fmt::Display for DonationStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// A single item pledge and its lifecycle status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationItem {
  pub id: String,
  pub item_name: String,
  pub description: String,
  pub quantity: i32,
  pub category: String,
  pub image_url: String,
  pub donor_name: String,
  pub donor_id: String,
  pub donor_phone_number: String,
  pub donor_address: String,
  pub status: DonationStatus,
  pub submitted_at: DateTime<Utc>,
}

/// Everything a donor supplies when submitting. Identity, status and
/// timestamp are assigned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDonation {
  pub item_name: String,
  pub description: String,
  pub quantity: i32,
  pub category: String,
  pub image_url: String,
  pub donor_name: String,
  pub donor_id: String,
  pub donor_phone_number: String,
  pub donor_address: String,
}

impl NewDonation {
  pub(crate) fn into_item(self, id: String, submitted_at: DateTime<Utc>) -> DonationItem {
    DonationItem {
      id,
      item_name: self.item_name,
      description: self.description,
      quantity: self.quantity,
      category: self.category,
      image_url: self.image_url,
      donor_name: self.donor_name,
      donor_id: self.donor_id,
      donor_phone_number: self.donor_phone_number,
      donor_address: self.donor_address,
      status: DonationStatus::Pending,
      submitted_at,
    }
  }
}
