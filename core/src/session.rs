// core/src/session.rs

//! The authenticated-identity state machine.
//!
//! ```text
//! Anonymous --login--> LoggingIn --(delay)--> Authenticated(user)
//! Authenticated --logout--> LoggingOut --(delay)--> Anonymous
//! ```
//!
//! There is no credential check: the role alone selects one of the two fixed
//! accounts. While a transition is in flight the session reports `loading`
//! and refuses a second transition. Abandoning a transition mid-delay
//! restores the state it started from.

use crate::error::{CharityError, CharityResult};
use crate::model::{Role, User};
use crate::runtime::{Latency, NoLatency, Operation, Shared};
use std::sync::Arc;
use tracing::{event, instrument, Level};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
  #[default]
  Anonymous,
  LoggingIn(Role),
  Authenticated(User),
  LoggingOut(User),
}

impl SessionState {
  pub fn is_loading(&self) -> bool {
    matches!(self, SessionState::LoggingIn(_) | SessionState::LoggingOut(_))
  }

  /// The signed-in user, only once authentication has completed.
  pub fn user(&self) -> Option<&User> {
    match self {
      SessionState::Authenticated(user) => Some(user),
      _ => None,
    }
  }

  fn label(&self) -> &'static str {
    match self {
      SessionState::Anonymous => "anonymous",
      SessionState::LoggingIn(_) => "logging_in",
      SessionState::Authenticated(_) => "authenticated",
      SessionState::LoggingOut(_) => "logging_out",
    }
  }
}

/// What the router and the pages read from the session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionSnapshot {
  pub user: Option<User>,
  pub loading: bool,
}

impl SessionSnapshot {
  pub fn role(&self) -> Option<Role> {
    self.user.as_ref().map(|u| u.role)
  }

  pub fn is_admin(&self) -> bool {
    self.role() == Some(Role::Admin)
  }
}

impl From<&SessionState> for SessionSnapshot {
  fn from(state: &SessionState) -> Self {
    SessionSnapshot {
      user: state.user().cloned(),
      loading: state.is_loading(),
    }
  }
}

/// Handle to the session. Clones share the same state.
#[derive(Clone)]
pub struct AuthSession {
  state: Shared<SessionState>,
  latency: Arc<dyn Latency>,
}

impl std::fmt::Debug for AuthSession {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("AuthSession")
      .field("state", &*self.state.read())
      .finish_non_exhaustive()
  }
}

impl AuthSession {
  pub fn new(latency: Arc<dyn Latency>) -> Self {
    Self {
      state: Shared::default(),
      latency,
    }
  }

  pub fn without_latency() -> Self {
    Self::new(Arc::new(NoLatency))
  }

  pub fn state(&self) -> SessionState {
    self.state.snapshot()
  }

  pub fn snapshot(&self) -> SessionSnapshot {
    SessionSnapshot::from(&*self.state.read())
  }

  pub fn user(&self) -> Option<User> {
    self.state.read().user().cloned()
  }

  pub fn is_loading(&self) -> bool {
    self.state.read().is_loading()
  }

  /// Signs in as the fixed account for `role`.
  ///
  /// Fails with `SessionBusy` unless the session is currently anonymous.
  #[instrument(name = "AuthSession::login", skip(self), err(Display))]
  pub async fn login(&self, role: Role) -> CharityResult<User> {
    self.state.update(|state| {
      if *state != SessionState::Anonymous {
        return Err(CharityError::SessionBusy(format!(
          "cannot log in while session is {}",
          state.label()
        )));
      }
      *state = SessionState::LoggingIn(role);
      Ok(())
    })?;
    let transition = Transition::begin(&self.state, SessionState::Anonymous);
    event!(Level::DEBUG, "Login started.");

    self.latency.pause(Operation::Login).await;

    let user = User::for_role(role);
    transition.complete(SessionState::Authenticated(user.clone()));
    event!(Level::INFO, user_id = %user.id, %role, "User logged in.");
    Ok(user)
  }

  /// Signs the current user out.
  ///
  /// Fails with `Unauthorized` when nobody is signed in and with
  /// `SessionBusy` while another transition is running.
  #[instrument(name = "AuthSession::logout", skip(self), err(Display))]
  pub async fn logout(&self) -> CharityResult<()> {
    let user = self.state.update(|state| {
      let user = match &*state {
        SessionState::Authenticated(user) => user.clone(),
        SessionState::Anonymous => return Err(CharityError::Unauthorized("no user is logged in".to_string())),
        other => {
          return Err(CharityError::SessionBusy(format!(
            "cannot log out while session is {}",
            other.label()
          )))
        }
      };
      *state = SessionState::LoggingOut(user.clone());
      Ok(user)
    })?;
    let transition = Transition::begin(&self.state, SessionState::Authenticated(user.clone()));
    event!(Level::DEBUG, user_id = %user.id, "Logout started.");

    self.latency.pause(Operation::Logout).await;

    transition.complete(SessionState::Anonymous);
    event!(Level::INFO, user_id = %user.id, "User logged out.");
    Ok(())
  }
}

/// An in-flight login or logout. Dropping it before `complete` (the caller
/// abandoned the future mid-delay) puts the session back where it started.
struct Transition<'a> {
  state: &'a Shared<SessionState>,
  rollback: Option<SessionState>,
}

impl<'a> Transition<'a> {
  fn begin(state: &'a Shared<SessionState>, previous: SessionState) -> Self {
    Self {
      state,
      rollback: Some(previous),
    }
  }

  fn complete(mut self, next: SessionState) {
    self.rollback = None;
    self.state.update(|state| *state = next);
  }
}

impl Drop for Transition<'_> {
  fn drop(&mut self) {
    if let Some(previous) = self.rollback.take() {
      let abandoned = self.state.update(|state| std::mem::replace(state, previous));
      event!(Level::WARN, from = abandoned.label(), "Session transition abandoned, state restored.");
    }
  }
}

impl Default for AuthSession {
  fn default() -> Self {
    Self::without_latency()
  }
}
