//! Site configuration module.
//!
//! Handles loading and validating `site.toml` from the content root. The
//! pipeline itself needs nothing from it — slugs and records are derived
//! purely from paths and front-matter — but downstream consumers do: the
//! syndication feed wants the site title, description, and absolute base
//! URL.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! title = "My Site"                    # Feed channel title
//! description = "Notes and tutorials"  # Feed channel description
//! base_url = "https://example.com"     # Absolute URL prefix for feed links
//! ```
//!
//! Unknown keys are rejected to catch typos early. A missing `site.toml`
//! falls back to the stock defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `site.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site title, used as the feed channel title.
    pub title: String,
    /// One-line site description, used as the feed channel description.
    pub description: String,
    /// Absolute URL the site is served from. Prefixed onto slugs in the
    /// feed. A trailing slash is tolerated and normalized away.
    pub base_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Site".to_string(),
            description: "Notes and tutorials".to_string(),
            base_url: "https://example.com".to_string(),
        }
    }
}

impl SiteConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::Validation("title must not be empty".into()));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::Validation(
                "base_url must start with http:// or https://".into(),
            ));
        }
        Ok(())
    }

    /// Base URL without a trailing slash, ready to prefix a rooted slug.
    pub fn base_url_trimmed(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

/// Load `site.toml` from the content root, falling back to defaults when
/// the file does not exist.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let path = root.join("site.toml");
    if !path.exists() {
        return Ok(SiteConfig::default());
    }
    let raw = fs::read_to_string(&path)?;
    let config: SiteConfig = toml::from_str(&raw)?;
    config.validate()?;
    Ok(config)
}

/// A stock `site.toml` with every option documented, for `gen-config`.
pub fn stock_config_toml() -> String {
    let defaults = SiteConfig::default();
    format!(
        r#"# contentfold site configuration.
# All options are optional - the values below are the stock defaults.

# Feed channel title.
title = "{}"

# Feed channel description.
description = "{}"

# Absolute URL the site is served from. Feed item links are this plus the
# document slug, e.g. {}/posts/hello-world
base_url = "{}"
"#,
        defaults.title, defaults.description, defaults.base_url, defaults.base_url
    )
}
