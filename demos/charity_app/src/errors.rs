// demos/charity_app/src/errors.rs

use charity_connect::CharityError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Charity Connect Error: {source}")]
  Charity {
    #[from] // Allows conversion from charity_connect::CharityError
    source: CharityError,
  },

  #[error("Serialization Error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("Internal Error: {0}")]
  Internal(String),
}

// Lets `run` use anyhow::Result with `.context(..)` while main still
// recovers the typed error for its exit code.
impl From<anyhow::Error> for AppError {
  fn from(err: anyhow::Error) -> Self {
    let err = match err.downcast::<AppError>() {
      Ok(app_err) => return app_err,
      Err(other) => other,
    };
    match err.downcast::<CharityError>() {
      Ok(source) => AppError::Charity { source },
      Err(other) => AppError::Internal(format!("{:#}", other)),
    }
  }
}

impl AppError {
  /// Process exit code for this failure.
  pub fn exit_code(&self) -> i32 {
    match self {
      AppError::Config(_) => 2,
      AppError::Charity { .. } | AppError::Json(_) | AppError::Internal(_) => 1,
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
