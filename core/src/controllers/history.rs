// core/src/controllers/history.rs

use crate::error::{CharityError, CharityResult};
use crate::model::{DonationItem, User};
use crate::service::DonationService;
use tracing::{event, Level};

/// A donor's own submissions.
#[derive(Debug)]
pub struct DonationHistory {
  service: DonationService,
  donations: Vec<DonationItem>,
  loading: bool,
  error: Option<String>,
}

impl DonationHistory {
  pub fn new(service: DonationService) -> Self {
    Self {
      service,
      donations: Vec::new(),
      loading: true,
      error: None,
    }
  }

  pub fn donations(&self) -> &[DonationItem] {
    &self.donations
  }

  pub fn is_loading(&self) -> bool {
    self.loading
  }

  pub fn error(&self) -> Option<&str> {
    self.error.as_deref()
  }

  /// Loads the donations submitted by `user`. Without a user it returns
  /// `Unauthorized` and leaves the page untouched.
  pub async fn load(&mut self, user: Option<&User>) -> CharityResult<&[DonationItem]> {
    let Some(user) = user else {
      return Err(CharityError::Unauthorized("no user is logged in".to_string()));
    };
    self.loading = true;
    self.error = None;
    let result = self.service.list_by_donor(&user.id).await;
    self.loading = false;
    match result {
      Ok(donations) => {
        self.donations = donations;
        Ok(&self.donations)
      }
      Err(err) => {
        event!(Level::WARN, error = %err, "Failed to fetch donation history.");
        self.error = Some("Failed to fetch donation history.".to_string());
        Err(err)
      }
    }
  }
}
