// core/src/controllers/mod.rs

//! Page controllers. Each one owns its page-local state and takes `&mut self`
//! for anything that awaits the service, so a page cannot have two mutations
//! of its own in flight at once.

pub mod admin;
pub mod donate;
pub mod history;

pub use admin::{AdminDashboard, ManageActions, ManagePanel};
pub use donate::{DonationDraft, DonationForm, FormStatus};
pub use history::DonationHistory;
