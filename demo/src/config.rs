use std::env;

use thiserror::Error;
use tracing::debug;

use opt::Option;

#[derive(Debug, Error, Eq, PartialEq)]
pub enum ConfigError {
  #[error("Invalid number '{value}' for environment variable {key}")]
  InvalidNumber { key: &'static str, value: String },
}

/// Parameters of the demo pipeline: keep values above `threshold`, multiply them by `factor`, and use `fallback` for
/// anything that was filtered out or was not a number.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub struct DemoConfig {
  pub threshold: i64,
  pub factor: i64,
  pub fallback: i64,
}

impl Default for DemoConfig {
  fn default() -> Self {
    Self { threshold: 3, factor: 2, fallback: 0 }
  }
}

pub const THRESHOLD_KEY: &str = "OPT_DEMO_THRESHOLD";
pub const FACTOR_KEY: &str = "OPT_DEMO_FACTOR";
pub const FALLBACK_KEY: &str = "OPT_DEMO_FALLBACK";

impl DemoConfig {
  pub fn from_env() -> Result<Self, ConfigError> {
    Self::from_lookup(|key| env::var(key).ok().into())
  }

  /// Read the configuration through `lookup`, falling back to [defaults](Self::default) for absent keys.
  pub fn from_lookup(lookup: impl Fn(&'static str) -> Option<String>) -> Result<Self, ConfigError> {
    let default = Self::default();
    let config = Self {
      threshold: number(&lookup, THRESHOLD_KEY)?.unwrap_or(default.threshold),
      factor: number(&lookup, FACTOR_KEY)?.unwrap_or(default.factor),
      fallback: number(&lookup, FALLBACK_KEY)?.unwrap_or(default.fallback),
    };
    debug!(?config, "loaded demo configuration");
    Ok(config)
  }
}

fn number(lookup: impl Fn(&'static str) -> Option<String>, key: &'static str) -> Result<Option<i64>, ConfigError> {
  let value = lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
  match value {
    Option::Some(value) => value.parse()
      .map(Option::Some)
      .map_err(|_| ConfigError::InvalidNumber { key, value }),
    Option::None => Ok(Option::None),
  }
}


#[cfg(test)]
mod tests {
  use std::collections::HashMap;

  use test_log::test;

  use super::*;

  fn lookup_in(vars: &[(&'static str, &str)]) -> impl Fn(&'static str) -> Option<String> {
    let vars: HashMap<&'static str, String> = vars.iter().map(|(k, v)| (*k, v.to_string())).collect();
    move |key: &'static str| -> Option<String> { vars.get(key).cloned().into() }
  }

  #[test]
  fn defaults_when_unset() {
    assert_eq!(DemoConfig::from_lookup(lookup_in(&[])), Ok(DemoConfig::default()));
  }

  #[test]
  fn reads_all_keys() {
    let config = DemoConfig::from_lookup(lookup_in(&[
      (THRESHOLD_KEY, "10"),
      (FACTOR_KEY, " 3 "),
      (FALLBACK_KEY, "-1"),
    ]));
    assert_eq!(config, Ok(DemoConfig { threshold: 10, factor: 3, fallback: -1 }));
  }

  #[test]
  fn blank_value_uses_default() {
    let config = DemoConfig::from_lookup(lookup_in(&[(FACTOR_KEY, "  ")]));
    assert_eq!(config, Ok(DemoConfig::default()));
  }

  #[test]
  fn invalid_number() {
    let config = DemoConfig::from_lookup(lookup_in(&[(THRESHOLD_KEY, "three")]));
    assert_eq!(config, Err(ConfigError::InvalidNumber { key: THRESHOLD_KEY, value: "three".to_string() }));
  }
}
