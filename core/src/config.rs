// core/src/config.rs

use crate::runtime::{Latency, LatencyProfile, NoLatency, SimulatedLatency};
use std::sync::Arc;

/// Settings for building an [`crate::App`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
  pub latency: LatencyProfile,
  /// When false every operation resolves without waiting.
  pub simulate_latency: bool,
  /// Start the store with the four demo donations.
  pub seed_demo_data: bool,
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      latency: LatencyProfile::default(),
      simulate_latency: true,
      seed_demo_data: false,
    }
  }
}

impl AppConfig {
  /// No delays and an empty store.
  pub fn for_tests() -> Self {
    Self {
      latency: LatencyProfile::zero(),
      simulate_latency: false,
      seed_demo_data: false,
    }
  }

  pub fn latency_strategy(&self) -> Arc<dyn Latency> {
    if self.simulate_latency {
      Arc::new(SimulatedLatency::new(self.latency.clone()))
    } else {
      Arc::new(NoLatency)
    }
  }
}
