// core/src/runtime/latency.rs

//! Simulated backend latency.
//!
//! Every service and session operation is a suspension point. The delay in
//! front of each one is supplied by a [`Latency`] strategy so that
//! applications can mimic a slow backend while tests run with zero delay.

use async_trait::async_trait;
use std::fmt;
use std::time::Duration;
use tracing::{event, Level};

/// The suspending operations a latency strategy is consulted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
  ListDonations,
  ListDonorDonations,
  CreateDonation,
  SetStatus,
  SetQuantity,
  Login,
  Logout,
}

impl fmt::Display for Operation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      Operation::ListDonations => "list_donations",
      Operation::ListDonorDonations => "list_donor_donations",
      Operation::CreateDonation => "create_donation",
      Operation::SetStatus => "set_status",
      Operation::SetQuantity => "set_quantity",
      Operation::Login => "login",
      Operation::Logout => "logout",
    };
    f.write_str(name)
  }
}

/// Strategy deciding how long an operation suspends before it resolves.
///
/// Implementations must always resolve; there is no cancellation.
#[async_trait]
pub trait Latency: Send + Sync + 'static {
  async fn pause(&self, op: Operation);
}

/// Per-operation delays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatencyProfile {
  pub read: Duration,
  pub create: Duration,
  pub update: Duration,
  pub login: Duration,
  pub logout: Duration,
}

impl LatencyProfile {
  /// A profile where nothing waits.
  pub fn zero() -> Self {
    Self {
      read: Duration::ZERO,
      create: Duration::ZERO,
      update: Duration::ZERO,
      login: Duration::ZERO,
      logout: Duration::ZERO,
    }
  }

  pub fn delay_for(&self, op: Operation) -> Duration {
    match op {
      Operation::ListDonations | Operation::ListDonorDonations => self.read,
      Operation::CreateDonation => self.create,
      Operation::SetStatus | Operation::SetQuantity => self.update,
      Operation::Login => self.login,
      Operation::Logout => self.logout,
    }
  }
}

impl Default for LatencyProfile {
  fn default() -> Self {
    Self {
      read: Duration::from_millis(500),
      create: Duration::from_millis(1000),
      update: Duration::from_millis(500),
      login: Duration::from_millis(1000),
      logout: Duration::from_millis(500),
    }
  }
}

/// Sleeps on the Tokio timer for the profile's delay.
#[derive(Debug, Clone, Default)]
pub struct SimulatedLatency {
  profile: LatencyProfile,
}

impl SimulatedLatency {
  pub fn new(profile: LatencyProfile) -> Self {
    Self { profile }
  }

  pub fn profile(&self) -> &LatencyProfile {
    &self.profile
  }
}

#[async_trait]
impl Latency for SimulatedLatency {
  async fn pause(&self, op: Operation) {
    let delay = self.profile.delay_for(op);
    if delay.is_zero() {
      return;
    }
    event!(Level::TRACE, operation = %op, delay_ms = delay.as_millis() as u64, "Simulating backend latency.");
    tokio::time::sleep(delay).await;
  }
}

/// Resolves immediately. Used by tests and synchronous-feeling callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLatency;

#[async_trait]
impl Latency for NoLatency {
  async fn pause(&self, _op: Operation) {}
}
