// core/src/router.rs

//! Page selection gated by the session.
//!
//! `navigate` decides which page is *current*; `render` decides which view is
//! actually shown for that page given who is signed in. The two are kept
//! apart so a donor who lands on `Admin` still has `Admin` as the current
//! page (the header highlights it) while seeing the home view.

use crate::session::SessionSnapshot;
use std::fmt;
use tracing::{event, Level};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
  #[default]
  Home,
  Donate,
  History,
  Admin,
  Login,
}

impl Page {
  /// Pages that can only be reached with a signed-in user.
  pub fn requires_session(self) -> bool {
    match self {
      Page::Donate | Page::History | Page::Admin => true,
      Page::Home | Page::Login => false,
    }
  }
}

impl fmt::Display for Page {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      Page::Home => "home",
      Page::Donate => "donate",
      Page::History => "history",
      Page::Admin => "admin",
      Page::Login => "login",
    };
    f.write_str(name)
  }
}

/// What actually gets shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
  Loading,
  Login,
  Home,
  DonationForm,
  History,
  AdminDashboard,
}

#[derive(Debug, Clone, Default)]
pub struct Router {
  current: Page,
}

impl Router {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn current(&self) -> Page {
    self.current
  }

  pub fn is_active(&self, page: Page) -> bool {
    self.current == page
  }

  /// Moves to `target`, or to `Login` when `target` needs a user and there is none.
  pub fn navigate(&mut self, target: Page, session: &SessionSnapshot) -> Page {
    let next = if session.user.is_none() && target.requires_session() {
      event!(Level::DEBUG, requested = %target, "No session; redirecting to login.");
      Page::Login
    } else {
      target
    };
    self.current = next;
    next
  }

  /// Resolves the view for the current page.
  pub fn render(&self, session: &SessionSnapshot) -> View {
    if session.loading {
      return View::Loading;
    }
    let Some(user) = &session.user else {
      return View::Login;
    };
    match self.current {
      Page::Home | Page::Login => View::Home,
      Page::Donate if user.is_admin() => View::AdminDashboard,
      Page::Donate => View::DonationForm,
      Page::History => View::History,
      Page::Admin if user.is_admin() => View::AdminDashboard,
      Page::Admin => View::Home,
    }
  }

  /// Header links for the session: admins get the admin panel, donors the
  /// donate and history pages, and signed-out visitors the sign-in page.
  pub fn nav_links(session: &SessionSnapshot) -> Vec<Page> {
    match &session.user {
      Some(user) if user.is_admin() => vec![Page::Admin],
      Some(_) => vec![Page::Donate, Page::History],
      None => vec![Page::Login],
    }
  }
}
