//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Environment variable that overrides `content.endpoint`
pub const ENDPOINT_ENV: &str = "GRAPHCMS_ENDPOINT";

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,

    // URL
    pub root: String,

    // Date / Time format (Moment.js style)
    pub date_format: String,

    // Content API
    #[serde(default)]
    pub content: ContentConfig,

    // Server
    #[serde(default)]
    pub server: ServerConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "GraphCMS".to_string(),
            description: String::new(),

            root: "/".to_string(),

            date_format: "MMM DD, YYYY".to_string(),

            content: ContentConfig::default(),
            server: ServerConfig::default(),
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

    /// Apply `GRAPHCMS_ENDPOINT` from the process environment, if set
    pub fn apply_env(&mut self) {
        self.override_endpoint(std::env::var(ENDPOINT_ENV).ok());
    }

    /// Replace the content endpoint when an override is given
    pub fn override_endpoint(&mut self, endpoint: Option<String>) {
        if let Some(endpoint) = endpoint.filter(|e| !e.trim().is_empty()) {
            tracing::debug!("Using content endpoint from environment");
            self.content.endpoint = endpoint;
        }
    }
}

/// Content API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// GraphQL endpoint of the CMS. Left empty, requests fail at call time.
    pub endpoint: String,
    /// Side-channel comment submission URL
    pub comments_url: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            comments_url: "http://localhost:3000/api/comments".to_string(),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            ip: "localhost".to_string(),
            port: 3000,
        }
    }
}
