//! Console configuration
//!
//! Loaded from `.xr-console.toml`:
//!
//! ```toml
//! max_messages = 200
//!
//! [panel]
//! pixel_width = 640
//! show_timestamp = false
//! message_type = "error"
//! error_color = "#FF0000"
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use xr_console_core::DEFAULT_CAPACITY;
use xr_console_render::{PartialRendererOptions, RendererOptions};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConsoleConfig {
    /// Store capacity, see [`ConsoleConfig::capacity`]
    pub max_messages: Option<usize>,

    /// Renderer overrides, unset fields use the renderer defaults
    pub panel: PartialRendererOptions,
}

impl ConsoleConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        Self::from_content(crate::load_config_file().as_deref())
    }

    /// Parse `content`, falling back to defaults when absent or invalid
    pub fn from_content(content: Option<&str>) -> Self {
        if let Some(content) = content {
            match Self::parse(content) {
                Ok(config) => {
                    log::info!("Loaded console config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("{:#}", e);
                }
            }
        }

        log::debug!("Using default console config");
        Self::default()
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config file")
    }

    /// Configured store capacity, defaulting to the store's default
    pub fn capacity(&self) -> usize {
        self.max_messages.unwrap_or(DEFAULT_CAPACITY)
    }

    pub fn renderer_options(&self) -> RendererOptions {
        RendererOptions::resolve(self.panel.clone())
    }
}
