//! Initialize a blog directory

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::CONFIG_FILE;

const DEFAULT_CONFIG: &str = r#"# Blog Configuration

# Site
title: GraphCMS
description: ''

# URL
root: /

# Date format (Moment.js style)
date_format: MMM DD, YYYY

# Content API
# GRAPHCMS_ENDPOINT overrides content.endpoint when set
content:
  endpoint: ''
  comments_url: http://localhost:3000/api/comments

# Server
server:
  ip: localhost
  port: 3000
"#;

/// Write a default `_config.yml` into `target_dir`
pub fn init_site(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir)?;

    let config_path = target_dir.join(CONFIG_FILE);
    if config_path.exists() {
        anyhow::bail!("{:?} already exists", config_path);
    }

    fs::write(&config_path, DEFAULT_CONFIG)?;
    tracing::info!("Created: {:?}", config_path);

    Ok(())
}
