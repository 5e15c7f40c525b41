// demos/charity_app/src/config.rs

use crate::errors::{AppError, Result};
use charity_connect::{AppConfig, LatencyProfile};
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct DemoConfig {
  pub app: AppConfig,
  /// Print dashboard snapshots as JSON instead of a plain summary.
  pub output_json: bool,
}

impl DemoConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    let config = Self::from_lookup(|name| env::var(name).ok())?;
    tracing::info!("Demo configuration loaded successfully.");
    Ok(config)
  }

  /// Builds the configuration from any variable source. Unset variables fall
  /// back to the library defaults; malformed ones are configuration errors.
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
    let defaults = LatencyProfile::default();
    let millis = |name: &str, fallback: Duration| -> Result<Duration> {
      parse_or(&lookup, name, fallback.as_millis() as u64).map(Duration::from_millis)
    };

    let latency = LatencyProfile {
      read: millis("CHARITY_READ_LATENCY_MS", defaults.read)?,
      create: millis("CHARITY_CREATE_LATENCY_MS", defaults.create)?,
      update: millis("CHARITY_UPDATE_LATENCY_MS", defaults.update)?,
      login: millis("CHARITY_LOGIN_LATENCY_MS", defaults.login)?,
      logout: millis("CHARITY_LOGOUT_LATENCY_MS", defaults.logout)?,
    };

    Ok(Self {
      app: AppConfig {
        latency,
        simulate_latency: parse_or(&lookup, "CHARITY_SIMULATE_LATENCY", true)?,
        seed_demo_data: parse_or(&lookup, "CHARITY_SEED_DEMO_DATA", true)?,
      },
      output_json: parse_or(&lookup, "CHARITY_OUTPUT_JSON", false)?,
    })
  }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, name: &str, fallback: T) -> Result<T>
where
  T: FromStr,
  T::Err: std::fmt::Display,
{
  match lookup(name) {
    None => Ok(fallback),
    Some(raw) => raw
      .trim()
      .parse::<T>()
      .map_err(|e| AppError::Config(format!("Invalid {} value '{}': {}", name, raw, e))),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;

  fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    move |name| vars.get(name).cloned()
  }

  #[test]
  fn unset_variables_use_defaults() {
    let config = DemoConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(config.app.latency, LatencyProfile::default());
    assert!(config.app.simulate_latency);
    assert!(config.app.seed_demo_data);
    assert!(!config.output_json);
  }

  #[test]
  fn overrides_are_parsed() {
    let config = DemoConfig::from_lookup(lookup_from(&[
      ("CHARITY_READ_LATENCY_MS", "5"),
      ("CHARITY_LOGIN_LATENCY_MS", " 20 "),
      ("CHARITY_SIMULATE_LATENCY", "false"),
      ("CHARITY_OUTPUT_JSON", "true"),
    ]))
    .unwrap();
    assert_eq!(config.app.latency.read, Duration::from_millis(5));
    assert_eq!(config.app.latency.login, Duration::from_millis(20));
    assert_eq!(config.app.latency.create, Duration::from_millis(1000));
    assert!(!config.app.simulate_latency);
    assert!(config.output_json);
  }

  #[test]
  fn malformed_values_are_config_errors() {
    let err = DemoConfig::from_lookup(lookup_from(&[("CHARITY_UPDATE_LATENCY_MS", "soon")])).unwrap_err();
    assert!(matches!(err, AppError::Config(ref m) if m.contains("CHARITY_UPDATE_LATENCY_MS")));
  }
}
