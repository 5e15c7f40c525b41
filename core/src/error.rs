// core/src/error.rs
use crate::model::DonationStatus;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CharityError {
  #[error("Donation not found: {id}")]
  NotFound { id: String },

  #[error("Validation failed for '{field}': {message}")]
  Validation { field: String, message: String },

  #[error("Not authorized: {0}")]
  Unauthorized(String),

  #[error("Session is busy: {0}")]
  SessionBusy(String),

  #[error("Action '{action}' is not available for a donation with status {status}")]
  ActionNotAllowed { action: String, status: DonationStatus },

  #[error("No donation is selected for management")]
  NoDonationSelected,
}

impl CharityError {
  pub(crate) fn not_found(id: &str) -> Self {
    CharityError::NotFound { id: id.to_string() }
  }

  pub(crate) fn validation(field: &str, message: impl Into<String>) -> Self {
    CharityError::Validation {
      field: field.to_string(),
      message: message.into(),
    }
  }

  /// True for failures the caller caused with bad input, as opposed to a
  /// missing record or a session problem.
  pub fn is_validation(&self) -> bool {
    matches!(self, CharityError::Validation { .. })
  }
}

pub type CharityResult<T, E = CharityError> = std::result::Result<T, E>;
