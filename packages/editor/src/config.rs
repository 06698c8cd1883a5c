//! Editor tuning knobs, loaded from the `editor` section of the project config

use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_AUTOSAVE_DELAY_MS: u64 = 2000;
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorConfig {
    /// Quiet period after the last edit before autosave fires
    #[serde(default = "default_autosave_delay_ms")]
    pub autosave_delay_ms: u64,

    /// Undo levels kept (0 = unlimited)
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

fn default_autosave_delay_ms() -> u64 {
    DEFAULT_AUTOSAVE_DELAY_MS
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            autosave_delay_ms: DEFAULT_AUTOSAVE_DELAY_MS,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl EditorConfig {
    pub fn autosave_delay(&self) -> Duration {
        Duration::from_millis(self.autosave_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.autosave_delay(), Duration::from_secs(2));
        assert_eq!(config.history_limit, 100);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: EditorConfig = serde_json::from_str(r#"{ "historyLimit": 5 }"#).unwrap();
        assert_eq!(config.history_limit, 5);
        assert_eq!(config.autosave_delay_ms, 2000);
    }
}
