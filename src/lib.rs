//! graphcms-blog: a blog front-end over a GraphCMS content API
//!
//! Posts, categories and comments live in the CMS and are fetched over
//! GraphQL through [`content::ContentSource`]. Pages are rendered to HTML
//! by the [`server`] or printed by the CLI commands.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod helpers;
pub mod pages;
pub mod server;
pub mod views;

use anyhow::Result;
use std::path::Path;

/// Name of the site configuration file in the base directory
pub const CONFIG_FILE: &str = "_config.yml";

/// The blog application
#[derive(Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
}

impl Blog {
    /// Create a blog from a directory, reading `_config.yml` when present.
    /// The environment is not consulted; see [`config::SiteConfig::apply_env`].
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self { config, base_dir })
    }

    /// A content client bound to the configured endpoint
    pub fn client(&self) -> content::ContentClient {
        content::ContentClient::new(&self.config.content)
    }
}
