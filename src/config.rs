use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Top-level mdpress.json schema.
///
/// Every field has a default so the file is optional; CLI flags override
/// whatever the file provides.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    #[serde(default = "default_content_dir")]
    pub content_dir: String,

    #[serde(default = "default_template")]
    pub template: String,

    #[serde(default = "default_static_dir")]
    pub static_dir: String,

    #[serde(default = "default_out_dir")]
    pub out_dir: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_dir: default_content_dir(),
            template: default_template(),
            static_dir: default_static_dir(),
            out_dir: default_out_dir(),
        }
    }
}

fn default_content_dir() -> String {
    "content".to_string()
}
fn default_template() -> String {
    "template.html".to_string()
}
fn default_static_dir() -> String {
    "static".to_string()
}
fn default_out_dir() -> String {
    "public".to_string()
}

/// Load config from an mdpress.json file, or return defaults if missing.
pub fn load_config(site_root: &Path) -> Result<SiteConfig> {
    let config_path = site_root.join("mdpress.json");

    if config_path.exists() {
        let raw = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;
        let config: SiteConfig = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;
        Ok(config)
    } else {
        Ok(SiteConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let json = r#"{
            "contentDir": "docs",
            "template": "layouts/page.html",
            "staticDir": "assets",
            "outDir": "dist"
        }"#;

        let config: SiteConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.content_dir, "docs");
        assert_eq!(config.template, "layouts/page.html");
        assert_eq!(config.static_dir, "assets");
        assert_eq!(config.out_dir, "dist");
    }

    #[test]
    fn test_parse_minimal_config() {
        let json = r#"{ "outDir": "build" }"#;
        let config: SiteConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.out_dir, "build");
        assert_eq!(config.content_dir, "content");
    }

    #[test]
    fn test_defaults() {
        let json = r#"{}"#;
        let config: SiteConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.content_dir, "content");
        assert_eq!(config.template, "template.html");
        assert_eq!(config.static_dir, "static");
        assert_eq!(config.out_dir, "public");
    }
}
