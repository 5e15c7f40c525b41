// core/src/controllers/donate.rs

//! The donor's submission form.

use crate::error::{CharityError, CharityResult};
use crate::model::{DonationItem, NewDonation, User, DEFAULT_CATEGORY};
use crate::service::DonationService;
use tracing::{event, instrument, Level};

/// Editable form fields. `image_url` is optional; a placeholder derived from
/// the item name is used when it is absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DonationDraft {
  pub item_name: String,
  pub description: String,
  pub quantity: i32,
  pub category: String,
  pub phone_number: String,
  pub address: String,
  pub image_url: Option<String>,
}

impl Default for DonationDraft {
  fn default() -> Self {
    Self {
      item_name: String::new(),
      description: String::new(),
      quantity: 1,
      category: DEFAULT_CATEGORY.to_string(),
      phone_number: String::new(),
      address: String::new(),
      image_url: None,
    }
  }
}

impl DonationDraft {
  /// Checks required fields before anything is sent to the service.
  pub fn validate(&self) -> CharityResult<()> {
    let required = [
      ("item_name", &self.item_name),
      ("description", &self.description),
      ("phone_number", &self.phone_number),
      ("address", &self.address),
    ];
    if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
      return Err(CharityError::validation(field, "Please fill in all required fields."));
    }
    if self.quantity < 1 {
      return Err(CharityError::validation("quantity", "Quantity must be at least 1."));
    }
    Ok(())
  }

  fn into_new_donation(self, donor: &User) -> NewDonation {
    let image_url = self
      .image_url
      .filter(|url| !url.trim().is_empty())
      .unwrap_or_else(|| format!("https://picsum.photos/seed/{}/400/300", self.item_name));
    NewDonation {
      item_name: self.item_name,
      description: self.description,
      quantity: self.quantity,
      category: self.category,
      image_url,
      donor_name: donor.name.clone(),
      donor_id: donor.id.clone(),
      donor_phone_number: self.phone_number,
      donor_address: self.address,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
  #[default]
  Idle,
  Submitting,
  Succeeded,
  Failed,
}

#[derive(Debug)]
pub struct DonationForm {
  service: DonationService,
  pub draft: DonationDraft,
  status: FormStatus,
  error: Option<String>,
}

impl DonationForm {
  pub fn new(service: DonationService) -> Self {
    Self {
      service,
      draft: DonationDraft::default(),
      status: FormStatus::Idle,
      error: None,
    }
  }

  pub fn status(&self) -> FormStatus {
    self.status
  }

  pub fn error(&self) -> Option<&str> {
    self.error.as_deref()
  }

  /// True while a submission is in flight; the submit button is disabled.
  pub fn is_submitting(&self) -> bool {
    self.status == FormStatus::Submitting
  }

  /// Validates the draft and submits it on behalf of `user`.
  ///
  /// Validation failures are reported inline and never reach the service.
  /// On success the draft resets to its defaults.
  #[instrument(name = "DonationForm::submit", skip_all, err(Display))]
  pub async fn submit(&mut self, user: Option<&User>) -> CharityResult<DonationItem> {
    let Some(user) = user else {
      let err = CharityError::Unauthorized("You must be logged in to donate.".to_string());
      self.error = Some(err.to_string());
      return Err(err);
    };
    if let Err(err) = self.draft.validate() {
      self.error = Some(err.to_string());
      return Err(err);
    }

    self.status = FormStatus::Submitting;
    self.error = None;
    let payload = self.draft.clone().into_new_donation(user);

    match self.service.create(payload).await {
      Ok(item) => {
        self.status = FormStatus::Succeeded;
        self.draft = DonationDraft::default();
        Ok(item)
      }
      Err(err) => {
        event!(Level::WARN, error = %err, "Donation submission failed.");
        self.status = FormStatus::Failed;
        self.error = Some("Failed to submit donation. Please try again.".to_string());
        Err(err)
      }
    }
  }
}
