// src/lib.rs

//! Charity Connect: the core of a donation-tracking application.
//!
//! Donors submit item donations, administrators review them, and both roles
//! see dashboards summarising activity. This crate provides:
//!  - An in-memory donation store and an async service over it with
//!    injectable, simulated backend latency.
//!  - An auth session state machine with two fixed accounts (donor, admin).
//!  - A view router gated by session presence and role.
//!  - Pure dashboard aggregates (totals, pending count, category breakdown).
//!  - Page controllers for the donation form, the donor history and the
//!    admin dashboard, including which lifecycle actions are offered.

pub mod app;
pub mod config;
pub mod controllers;
pub mod error;
pub mod model;
pub mod router;
pub mod runtime;
pub mod service;
pub mod session;
pub mod stats;
pub mod store;

// --- Re-exports for the Public API ---

pub use crate::app::App;
pub use crate::config::AppConfig;
pub use crate::controllers::{
  AdminDashboard, DonationDraft, DonationForm, DonationHistory, FormStatus, ManageActions, ManagePanel,
};
pub use crate::error::{CharityError, CharityResult};
pub use crate::model::{DonationItem, DonationStatus, NewDonation, Role, User, CATEGORIES, DEFAULT_CATEGORY};
pub use crate::router::{Page, Router, View};
pub use crate::runtime::{Latency, LatencyProfile, NoLatency, Operation, Shared, SimulatedLatency};
pub use crate::service::DonationService;
pub use crate::session::{AuthSession, SessionSnapshot, SessionState};
pub use crate::stats::{category_breakdown, CategoryStats, DashboardSummary};
pub use crate::store::DonationStore;

/*
    Typical flow:
    1. `App::start(AppConfig::default())` builds store, service, session, router.
    2. `app.sign_in(Role::Donor).await?` logs in and lands on the home page.
    3. `app.donation_form()?` gives a form; fill `form.draft`, then
       `form.submit(app.session().user().as_ref()).await?`.
    4. An admin calls `app.admin_dashboard()?`, `refresh().await?`,
       `open_manage(id)?`, then `approve().await?` / `reject().await?` or
       `set_edit_quantity(n)?` + `save_quantity().await?`.
    5. `app.view()` tells the presentation layer what to draw.
*/
