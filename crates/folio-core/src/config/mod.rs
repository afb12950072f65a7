//! Configuration management with file persistence

use anyhow::{Context, anyhow};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::view::{DEFAULT_CONTAINER_ID, HtmlOptions, PageOptions};

/// Folio configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
    pub render: RenderConfig,
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub title: String,
    pub heading: String,
    pub stylesheet: String,
    pub container_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub pretty: bool,
    pub indent_width: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        let page = PageOptions::default();
        Self {
            site: SiteConfig {
                title: page.title,
                heading: page.heading.unwrap_or_default(),
                stylesheet: page.stylesheet.unwrap_or_default(),
                container_id: DEFAULT_CONTAINER_ID.to_string(),
            },
            render: RenderConfig {
                pretty: true,
                indent_width: 2,
            },
            catalog: CatalogConfig::default(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Config::default().site
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Config::default().render
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        let dir = if let Ok(custom_dir) = env::var("FOLIO_CONFIG_DIR") {
            PathBuf::from(custom_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| anyhow!("Could not determine config directory"))?
                .join("folio")
        };
        Ok(dir)
    }

    /// Get the config file path
    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load configuration from file, or defaults if it doesn't exist
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config = Self::from_toml_str(&contents)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            Ok(config)
        } else {
            // Return default config without creating file
            Ok(Config::default())
        }
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> anyhow::Result<()> {
        self.validate()?;

        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;

        let path = Self::config_path()?;
        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        validate_container_id(&self.site.container_id)?;
        validate_indent_width(self.render.indent_width)?;
        Ok(())
    }

    /// Get a configuration value by key
    pub fn get(&self, key: &str) -> anyhow::Result<String> {
        match key {
            // Site settings
            "site.title" => Ok(self.site.title.clone()),
            "site.heading" => Ok(self.site.heading.clone()),
            "site.stylesheet" => Ok(self.site.stylesheet.clone()),
            "site.container_id" => Ok(self.site.container_id.clone()),

            // Render settings
            "render.pretty" => Ok(self.render.pretty.to_string()),
            "render.indent_width" => Ok(self.render.indent_width.to_string()),

            // Catalog settings
            "catalog.path" => Ok(self
                .catalog
                .path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(built-in sample)".to_string())),

            _ => Err(unknown_key(key).into()),
        }
    }

    /// Set a configuration value by key
    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "site.title" => {
                self.site.title = value.to_string();
            }
            "site.heading" => {
                self.site.heading = value.trim().to_string();
            }
            "site.stylesheet" => {
                self.site.stylesheet = value.trim().to_string();
            }
            "site.container_id" => {
                validate_container_id(value)?;
                self.site.container_id = value.to_string();
            }
            "render.pretty" => {
                self.render.pretty = value.parse().map_err(|_| {
                    Error::ConfigError(format!("Invalid pretty value: {} (use true or false)", value))
                })?;
            }
            "render.indent_width" => {
                let width: usize = value.parse().map_err(|_| {
                    Error::ConfigError(format!("Invalid indent_width value: {}", value))
                })?;
                validate_indent_width(width)?;
                self.render.indent_width = width;
            }
            "catalog.path" => {
                let value = value.trim();
                self.catalog.path = if value.is_empty() {
                    None
                } else {
                    let path = std::path::absolute(value)
                        .with_context(|| format!("Invalid catalog path: {}", value))?;
                    Some(path)
                };
            }
            _ => return Err(unknown_key(key).into()),
        }
        Ok(())
    }

    /// List all configuration keys and their values
    pub fn list(&self) -> anyhow::Result<Vec<(String, String)>> {
        let keys = [
            "site.title",
            "site.heading",
            "site.stylesheet",
            "site.container_id",
            "render.pretty",
            "render.indent_width",
            "catalog.path",
        ];

        keys.into_iter()
            .map(|key| {
                let value = self.get(key)?;
                Ok((key.to_string(), value))
            })
            .collect()
    }

    /// Reset configuration to defaults
    pub fn reset() -> anyhow::Result<()> {
        let path = Self::config_path()?;
        if path.exists() {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to remove config file: {}", path.display()))?;
        }
        Ok(())
    }

    /// Page shell settings derived from the site section
    pub fn page_options(&self) -> PageOptions {
        PageOptions {
            title: self.site.title.clone(),
            heading: non_empty(&self.site.heading),
            stylesheet: non_empty(&self.site.stylesheet),
            container_id: self.site.container_id.clone(),
        }
    }

    /// HTML output settings derived from the render section
    pub fn html_options(&self) -> HtmlOptions {
        HtmlOptions {
            pretty: self.render.pretty,
            indent_width: self.render.indent_width,
        }
    }
}

fn unknown_key(key: &str) -> Error {
    Error::ConfigError(format!(
        "Unknown configuration key: {}. Use `folio config list` to see available keys.",
        key
    ))
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Check a container element id: non-empty, ASCII letters, digits, `-`, `_`, `:` or `.`
pub fn validate_container_id(id: &str) -> Result<()> {
    let valid_char = |c: char| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.');
    if id.is_empty() || !id.chars().all(valid_char) {
        return Err(Error::ConfigError(format!(
            "Invalid container id '{}': use letters, digits, '-', '_', ':' or '.'",
            id
        )));
    }
    Ok(())
}

/// Check the pretty-print indent width (1..=8)
pub fn validate_indent_width(width: usize) -> Result<()> {
    if !(1..=8).contains(&width) {
        return Err(Error::ConfigError(
            "Indent width must be between 1 and 8".to_string(),
        ));
    }
    Ok(())
}
