//! Site configuration (festival.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub url: String,

    // Directory
    pub content_dir: String,
    pub public_dir: String,

    // Locales
    pub locales: Vec<String>,
    pub default_locale: String,

    /// Festival opening, RFC 3339
    pub festival_start: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Pablo The Garden".to_string(),
            url: "https://pablothegarden.com".to_string(),

            content_dir: "content".to_string(),
            public_dir: "public".to_string(),

            locales: vec!["it".to_string(), "en".to_string()],
            default_locale: "it".to_string(),

            // 18:00 CEST
            festival_start: "2026-08-15T16:00:00Z".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// The requested locale, or the default locale when none was given
    pub fn locale_or_default<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        requested.unwrap_or(&self.default_locale)
    }

    /// Parse the festival start into a UTC timestamp
    pub fn festival_start_utc(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        crate::helpers::parse_date(&self.festival_start)
    }
}
