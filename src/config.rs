//! Runtime configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{bail, Context, Result};

use crate::types::Variant;

pub const VARIANT_VAR: &str = "BLOCKFALL_VARIANT";
pub const SEED_VAR: &str = "BLOCKFALL_SEED";
pub const LOG_PATH_VAR: &str = "BLOCKFALL_LOG_PATH";
pub const EVENT_LOG_VAR: &str = "BLOCKFALL_EVENT_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub variant: Variant,
    pub seed: u32,
    /// Diagnostic log file. Logging is off when unset.
    pub log_path: Option<PathBuf>,
    /// JSONL file receiving one record per game event.
    pub event_log_path: Option<PathBuf>,
}

impl Config {
    /// Read configuration from the process environment. Invalid values are errors.
    pub fn try_from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let variant = match lookup(VARIANT_VAR) {
            Some(raw) => match Variant::from_str(raw.trim()) {
                Some(v) => v,
                None => bail!("{VARIANT_VAR}: unknown variant {raw:?} (expected keyboard or controls)"),
            },
            None => Variant::default(),
        };

        let seed = match lookup(SEED_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .with_context(|| format!("{SEED_VAR}: invalid seed {raw:?}"))?,
            None => clock_seed(),
        };

        Ok(Self {
            variant,
            seed,
            log_path: path_var(lookup(LOG_PATH_VAR)),
            event_log_path: path_var(lookup(EVENT_LOG_VAR)),
        })
    }
}

fn path_var(value: Option<String>) -> Option<PathBuf> {
    value
        .map(|s| s.trim().to_string())
        .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) })
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn missing_variables_use_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.variant, Variant::Keyboard);
        assert_eq!(config.log_path, None);
        assert_eq!(config.event_log_path, None);
    }

    #[test]
    fn reads_every_variable() {
        let config = Config::from_lookup(lookup(&[
            (VARIANT_VAR, "controls"),
            (SEED_VAR, " 42 "),
            (LOG_PATH_VAR, "/tmp/blockfall.log"),
            (EVENT_LOG_VAR, "events.jsonl"),
        ]))
        .unwrap();
        assert_eq!(config.variant, Variant::Controls);
        assert_eq!(config.seed, 42);
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/blockfall.log")));
        assert_eq!(config.event_log_path, Some(PathBuf::from("events.jsonl")));
    }

    #[test]
    fn blank_paths_disable_outputs() {
        let config = Config::from_lookup(lookup(&[(LOG_PATH_VAR, "  ")])).unwrap();
        assert_eq!(config.log_path, None);
    }

    #[test]
    fn invalid_values_are_errors() {
        let err = Config::from_lookup(lookup(&[(VARIANT_VAR, "touch")])).unwrap_err();
        assert!(err.to_string().contains(VARIANT_VAR));

        let err = Config::from_lookup(lookup(&[(SEED_VAR, "-3")])).unwrap_err();
        assert!(err.to_string().contains(SEED_VAR));
    }
}
