// core/src/controllers/admin.rs

//! The administrator's dashboard: aggregates over every donation plus a
//! management panel for one selected donation.
//!
//! Which lifecycle actions are offered is decided here, from the selected
//! donation's status. The service underneath accepts any status write.

use crate::error::{CharityError, CharityResult};
use crate::model::{DonationItem, DonationStatus};
use crate::service::DonationService;
use crate::stats::{category_breakdown, CategoryStats, DashboardSummary};
use tracing::{event, instrument, Level};

/// Actions available for a donation, by status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManageActions {
  /// Pending: approve or reject.
  Review,
  /// Approved or delivered: the quantity may be corrected.
  EditQuantity,
  /// Nothing to do (rejected).
  None,
}

impl ManageActions {
  pub fn for_status(status: DonationStatus) -> Self {
    match status {
      DonationStatus::Pending => ManageActions::Review,
      DonationStatus::Approved | DonationStatus::Delivered => ManageActions::EditQuantity,
      DonationStatus::Rejected => ManageActions::None,
    }
  }
}

/// The donation being managed and the quantity typed into the edit field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagePanel {
  pub donation: DonationItem,
  pub edit_quantity: i32,
}

impl ManagePanel {
  pub fn actions(&self) -> ManageActions {
    ManageActions::for_status(self.donation.status)
  }

  /// Save is disabled while the edited value equals the current one.
  pub fn can_save_quantity(&self) -> bool {
    self.actions() == ManageActions::EditQuantity && self.edit_quantity != self.donation.quantity
  }
}

#[derive(Debug)]
pub struct AdminDashboard {
  service: DonationService,
  donations: Vec<DonationItem>,
  loading: bool,
  error: Option<String>,
  notice: Option<String>,
  managing: Option<ManagePanel>,
}

impl AdminDashboard {
  pub fn new(service: DonationService) -> Self {
    Self {
      service,
      donations: Vec::new(),
      loading: true,
      error: None,
      notice: None,
      managing: None,
    }
  }

  pub fn donations(&self) -> &[DonationItem] {
    &self.donations
  }

  pub fn is_loading(&self) -> bool {
    self.loading
  }

  /// Set when the list could not be fetched.
  pub fn error(&self) -> Option<&str> {
    self.error.as_deref()
  }

  /// Set when the last management action failed.
  pub fn notice(&self) -> Option<&str> {
    self.notice.as_deref()
  }

  pub fn summary(&self) -> DashboardSummary {
    DashboardSummary::from_donations(&self.donations)
  }

  pub fn categories(&self) -> Vec<CategoryStats> {
    category_breakdown(&self.donations)
  }

  pub fn managing(&self) -> Option<&ManagePanel> {
    self.managing.as_ref()
  }

  /// Reloads every donation.
  #[instrument(name = "AdminDashboard::refresh", skip(self), err(Display))]
  pub async fn refresh(&mut self) -> CharityResult<()> {
    self.loading = true;
    let result = self.service.list().await;
    self.loading = false;
    match result {
      Ok(donations) => {
        self.donations = donations;
        self.error = None;
        Ok(())
      }
      Err(err) => {
        self.error = Some("Failed to fetch donations.".to_string());
        Err(err)
      }
    }
  }

  /// Selects a donation from the current snapshot for management.
  pub fn open_manage(&mut self, id: &str) -> CharityResult<&ManagePanel> {
    let donation = self
      .donations
      .iter()
      .find(|d| d.id == id)
      .cloned()
      .ok_or_else(|| CharityError::not_found(id))?;
    self.notice = None;
    Ok(self.managing.insert(ManagePanel {
      edit_quantity: donation.quantity,
      donation,
    }))
  }

  pub fn close_manage(&mut self) {
    self.managing = None;
  }

  pub fn set_edit_quantity(&mut self, quantity: i32) -> CharityResult<()> {
    let panel = self.managing.as_mut().ok_or(CharityError::NoDonationSelected)?;
    panel.edit_quantity = quantity;
    Ok(())
  }

  pub fn can_save_quantity(&self) -> bool {
    self.managing.as_ref().is_some_and(ManagePanel::can_save_quantity)
  }

  pub async fn approve(&mut self) -> CharityResult<DonationItem> {
    self.review(DonationStatus::Approved, "approve").await
  }

  pub async fn reject(&mut self) -> CharityResult<DonationItem> {
    self.review(DonationStatus::Rejected, "reject").await
  }

  #[instrument(name = "AdminDashboard::review", skip(self), err(Display))]
  async fn review(&mut self, decision: DonationStatus, action: &'static str) -> CharityResult<DonationItem> {
    let id = self.selected_id_for(action, ManageActions::Review)?;
    let result = self.service.set_status(&id, decision).await;
    self.finish_action(result, "Failed to update status. Please try again.").await
  }

  /// Writes the edited quantity for an approved or delivered donation.
  #[instrument(name = "AdminDashboard::save_quantity", skip(self), err(Display))]
  pub async fn save_quantity(&mut self) -> CharityResult<DonationItem> {
    let id = self.selected_id_for("update quantity", ManageActions::EditQuantity)?;
    let (quantity, current) = match &self.managing {
      Some(panel) => (panel.edit_quantity, panel.donation.quantity),
      None => return Err(CharityError::NoDonationSelected),
    };
    if quantity < 0 {
      self.notice = Some("Quantity cannot be negative.".to_string());
      return Err(CharityError::validation("quantity", "Quantity cannot be negative."));
    }
    if quantity == current {
      return Err(CharityError::validation("quantity", "Quantity is unchanged."));
    }
    let result = self.service.set_quantity(&id, quantity).await;
    self.finish_action(result, "Failed to update quantity. Please try again.").await
  }

  fn selected_id_for(&self, action: &str, required: ManageActions) -> CharityResult<String> {
    let panel = self.managing.as_ref().ok_or(CharityError::NoDonationSelected)?;
    if panel.actions() != required {
      return Err(CharityError::ActionNotAllowed {
        action: action.to_string(),
        status: panel.donation.status,
      });
    }
    Ok(panel.donation.id.clone())
  }

  async fn finish_action(
    &mut self,
    result: CharityResult<DonationItem>,
    failure_notice: &str,
  ) -> CharityResult<DonationItem> {
    match result {
      Ok(updated) => {
        if let Err(err) = self.refresh().await {
          event!(Level::WARN, error = %err, "Refresh after update failed.");
        }
        self.close_manage();
        Ok(updated)
      }
      Err(err) => {
        self.notice = Some(failure_notice.to_string());
        Err(err)
      }
    }
  }
}
