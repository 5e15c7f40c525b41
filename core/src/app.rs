// core/src/app.rs

//! The application context.
//!
//! `App` owns the service, the session and the router and hands them to the
//! page controllers. There are no process-wide singletons: two `App`s in the
//! same process are fully independent.

use crate::config::AppConfig;
use crate::controllers::{AdminDashboard, DonationForm, DonationHistory};
use crate::error::{CharityError, CharityResult};
use crate::model::{Role, User};
use crate::router::{Page, Router, View};
use crate::runtime::Latency;
use crate::service::DonationService;
use crate::session::{AuthSession, SessionSnapshot};
use crate::store::DonationStore;
use chrono::Utc;
use std::sync::Arc;
use tracing::{event, instrument, Level};

#[derive(Debug)]
pub struct App {
  config: AppConfig,
  service: DonationService,
  session: AuthSession,
  router: Router,
}

impl App {
  /// Builds a fresh application from `config`.
  #[instrument(name = "App::start", skip_all, fields(seed = config.seed_demo_data, simulate_latency = config.simulate_latency))]
  pub fn start(config: AppConfig) -> Self {
    let latency = config.latency_strategy();
    let store = if config.seed_demo_data {
      DonationStore::with_demo_data(Utc::now())
    } else {
      DonationStore::new()
    };
    let app = Self::with_parts(config, store, latency);
    event!(Level::INFO, records = app.service.store().len(), "Application started.");
    app
  }

  /// Builds an application around an existing store and latency strategy.
  pub fn with_parts(config: AppConfig, store: DonationStore, latency: Arc<dyn Latency>) -> Self {
    Self {
      service: DonationService::new(store, Arc::clone(&latency)),
      session: AuthSession::new(latency),
      router: Router::new(),
      config,
    }
  }

  /// Shuts the application down. All state is volatile and dropped here.
  pub fn stop(self) {
    event!(Level::INFO, records = self.service.store().len(), "Application stopped.");
  }

  pub fn config(&self) -> &AppConfig {
    &self.config
  }

  pub fn service(&self) -> &DonationService {
    &self.service
  }

  pub fn session(&self) -> &AuthSession {
    &self.session
  }

  pub fn router(&self) -> &Router {
    &self.router
  }

  pub fn current_page(&self) -> Page {
    self.router.current()
  }

  pub fn navigate(&mut self, target: Page) -> Page {
    let snapshot = self.session.snapshot();
    self.router.navigate(target, &snapshot)
  }

  pub fn view(&self) -> View {
    self.router.render(&self.session.snapshot())
  }

  pub fn nav_links(&self) -> Vec<Page> {
    Router::nav_links(&self.session.snapshot())
  }

  /// Logs in and lands on the admin panel or the home page depending on role.
  pub async fn sign_in(&mut self, role: Role) -> CharityResult<User> {
    let user = self.session.login(role).await?;
    let landing = if user.is_admin() { Page::Admin } else { Page::Home };
    self.navigate(landing);
    Ok(user)
  }

  /// Logs out and returns to the home page.
  pub async fn sign_out(&mut self) -> CharityResult<()> {
    self.session.logout().await?;
    self.navigate(Page::Home);
    Ok(())
  }

  pub fn donation_form(&self) -> CharityResult<DonationForm> {
    self.require_role(Role::Donor)?;
    Ok(DonationForm::new(self.service.clone()))
  }

  pub fn history(&self) -> CharityResult<DonationHistory> {
    self.require_user()?;
    Ok(DonationHistory::new(self.service.clone()))
  }

  pub fn admin_dashboard(&self) -> CharityResult<AdminDashboard> {
    self.require_role(Role::Admin)?;
    Ok(AdminDashboard::new(self.service.clone()))
  }

  fn require_user(&self) -> CharityResult<User> {
    let SessionSnapshot { user, loading } = self.session.snapshot();
    if loading {
      return Err(CharityError::SessionBusy("a sign-in or sign-out is in progress".to_string()));
    }
    user.ok_or_else(|| CharityError::Unauthorized("no user is logged in".to_string()))
  }

  fn require_role(&self, role: Role) -> CharityResult<User> {
    let user = self.require_user()?;
    if user.role != role {
      return Err(CharityError::Unauthorized(format!("requires the {} role", role)));
    }
    Ok(user)
  }
}
