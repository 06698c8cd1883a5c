use serde::{Deserialize, Serialize};
use sitebuilder_editor::EditorConfig;
use sitebuilder_renderer::{RenderMode, RenderOptions};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "sitebuilder.config.json";

/// Sitebuilder project configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding page schemas (`<page-id>.json`)
    #[serde(default = "default_pages_dir")]
    pub pages_dir: String,

    /// Directory rendered HTML is written to
    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    #[serde(default)]
    pub render: RenderConfig,

    #[serde(default)]
    pub editor: EditorConfig,
}

fn default_pages_dir() -> String {
    "pages".to_string()
}

fn default_out_dir() -> String {
    "dist".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderConfig {
    #[serde(default = "default_pretty")]
    pub pretty: bool,

    /// Emit md/sm style overlays as media queries
    #[serde(default)]
    pub responsive: bool,
}

fn default_pretty() -> bool {
    true
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
            responsive: false,
        }
    }
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    pub fn get_pages_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.pages_dir)
    }

    pub fn get_out_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.out_dir)
    }

    /// Renderer options for `mode`, seeded from the `render` section
    pub fn render_options(&self, mode: RenderMode) -> RenderOptions {
        RenderOptions {
            mode,
            pretty: self.render.pretty,
            responsive: self.render.responsive,
            ..RenderOptions::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pages_dir: default_pages_dir(),
            out_dir: default_out_dir(),
            render: RenderConfig::default(),
            editor: EditorConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "pagesDir": "content",
            "outDir": "public",
            "render": { "pretty": false, "responsive": true },
            "editor": { "autosaveDelayMs": 500 }
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.pages_dir, "content");
        assert_eq!(config.out_dir, "public");
        assert!(!config.render.pretty);
        assert!(config.render.responsive);
        assert_eq!(config.editor.autosave_delay_ms, 500);
        assert_eq!(config.editor.history_limit, 100);
    }

    #[test]
    fn test_default_config() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.pages_dir, "pages");
        assert_eq!(config.out_dir, "dist");
        assert!(config.render.pretty);
        assert!(!config.render.responsive);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();
        let config = Config::load(&cwd).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.get_pages_dir(&cwd), dir.path().join("pages"));
    }

    #[test]
    fn test_render_options() {
        let mut config = Config::default();
        config.render.responsive = true;
        let options = config.render_options(RenderMode::Editable);
        assert!(options.is_editable());
        assert!(options.responsive);
        assert!(options.pretty);
    }
}
