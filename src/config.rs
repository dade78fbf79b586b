use std::env;
use std::path::PathBuf;

pub const DEFAULT_DATASET: &str = "database/db.json";

/// Runtime settings for the tutor binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrillConfig {
    pub dataset_path: PathBuf,
    /// Fixed seed for reproducible sessions; entropy when `None`.
    pub rng_seed: Option<u64>,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_level: String,
    pub max_sessions: usize,
    /// Options shown by `/hint`, including the correct one.
    pub hint_options: usize,
}

impl Default for DrillConfig {
    fn default() -> Self {
        DrillConfig {
            dataset_path: PathBuf::from(DEFAULT_DATASET),
            rng_seed: None,
            log_level: "info".to_string(),
            max_sessions: 1000,
            hint_options: 4,
        }
    }
}

impl DrillConfig {
    /// Read `.env` (if any) and then the process environment.
    pub fn from_env() -> Self {
        // A missing .env file is normal.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset or unparsable values fall back to
    /// the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = DrillConfig::default();

        let dataset_path = lookup("DRILL_DATASET")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.dataset_path);

        let rng_seed = lookup("DRILL_SEED").and_then(|v| v.trim().parse().ok());

        let log_level = lookup("DRILL_LOG")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.log_level);

        let max_sessions = lookup("DRILL_MAX_SESSIONS")
            .and_then(|v| v.trim().parse().ok())
            .filter(|&n: &usize| n > 0)
            .unwrap_or(defaults.max_sessions);

        let hint_options = lookup("DRILL_HINT_OPTIONS")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(defaults.hint_options)
            .max(2);

        DrillConfig { dataset_path, rng_seed, log_level, max_sessions, hint_options }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(DrillConfig::from_lookup(lookup(&[])), DrillConfig::default());
    }

    #[test]
    fn values_are_read_and_clamped() {
        let cfg = DrillConfig::from_lookup(lookup(&[
            ("DRILL_DATASET", "words.json"),
            ("DRILL_SEED", " 42 "),
            ("DRILL_LOG", "debug"),
            ("DRILL_MAX_SESSIONS", "0"),
            ("DRILL_HINT_OPTIONS", "1"),
        ]));
        assert_eq!(cfg.dataset_path, PathBuf::from("words.json"));
        assert_eq!(cfg.rng_seed, Some(42));
        assert_eq!(cfg.log_level, "debug");
        assert_eq!(cfg.max_sessions, 1000);
        assert_eq!(cfg.hint_options, 2);
    }

    #[test]
    fn unparsable_seed_is_ignored() {
        let cfg = DrillConfig::from_lookup(lookup(&[("DRILL_SEED", "abc")]));
        assert_eq!(cfg.rng_seed, None);
    }
}
