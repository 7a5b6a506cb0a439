//! Runtime configuration for the terminal binary.
//!
//! Everything comes from environment variables; absent or unparsable values
//! fall back to defaults.
//!
//! | Variable | Meaning | Default |
//! |---|---|---|
//! | `BLOCKFALL_WIDTH` | board columns | 10 |
//! | `BLOCKFALL_HEIGHT` | board rows | 20 |
//! | `BLOCKFALL_FALL_MS` | gravity interval | 500 |
//! | `BLOCKFALL_SEED` | piece source seed | wall clock |
//! | `BLOCKFALL_LOG_PATH` | JSON-lines event log | off |

use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::core::GameConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub game: GameConfig,
    pub log_path: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = GameConfig::default();
        let game = GameConfig {
            width: parse(&lookup, "BLOCKFALL_WIDTH").unwrap_or(defaults.width),
            height: parse(&lookup, "BLOCKFALL_HEIGHT").unwrap_or(defaults.height),
            fall_interval_ms: parse(&lookup, "BLOCKFALL_FALL_MS")
                .unwrap_or(defaults.fall_interval_ms),
            seed: parse(&lookup, "BLOCKFALL_SEED").unwrap_or_else(clock_seed),
        };

        let log_path = lookup("BLOCKFALL_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self { game, log_path }
    }
}

fn parse<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|s| s.trim().parse().ok())
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

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn overrides_are_parsed() {
        let cfg = config(&[
            ("BLOCKFALL_WIDTH", "12"),
            ("BLOCKFALL_HEIGHT", " 24 "),
            ("BLOCKFALL_FALL_MS", "250"),
            ("BLOCKFALL_SEED", "42"),
            ("BLOCKFALL_LOG_PATH", "/tmp/blockfall.jsonl"),
        ]);
        assert_eq!(
            cfg.game,
            GameConfig {
                width: 12,
                height: 24,
                fall_interval_ms: 250,
                seed: 42
            }
        );
        assert_eq!(cfg.log_path.as_deref(), Some("/tmp/blockfall.jsonl"));
    }

    #[test]
    fn garbage_falls_back_to_defaults() {
        let cfg = config(&[
            ("BLOCKFALL_WIDTH", "wide"),
            ("BLOCKFALL_FALL_MS", "-3"),
            ("BLOCKFALL_LOG_PATH", "   "),
        ]);
        assert_eq!(cfg.game.width, 10);
        assert_eq!(cfg.game.height, 20);
        assert_eq!(cfg.game.fall_interval_ms, 500);
        assert_eq!(cfg.log_path, None);
    }

    #[test]
    fn zero_sizes_are_passed_through_for_validation() {
        let cfg = config(&[("BLOCKFALL_WIDTH", "0")]);
        assert!(cfg.game.validate().is_err());
    }
}
