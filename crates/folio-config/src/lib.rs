//! Configuration management for Folio.
//!
//! Parses `folio.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ```toml
//! [render]
//! gfm = true
//!
//! [directives]
//! version = 3
//! full_size_link = true
//! placeholder_alt = "Photo"
//! ```

use std::path::{Path, PathBuf};

use folio_renderer::PreviewRenderer;
use folio_renderer::directive::{DirectiveFeatures, LATEST_VERSION};
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override GFM extensions.
    pub gfm: Option<bool>,
    /// Override directive syntax version.
    pub directive_version: Option<u8>,
    /// Override full-size link emission.
    pub full_size_link: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "folio.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Markdown rendering configuration.
    pub render: RenderConfig,
    /// Image directive configuration.
    pub directives: DirectivesConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Markdown rendering configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Enable GitHub Flavored Markdown extensions.
    pub gfm: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { gfm: true }
    }
}

/// Image directive configuration.
///
/// `version` selects a preset; the per-key flags override it.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DirectivesConfig {
    /// Directive syntax version (1 to 3).
    pub version: u8,
    /// Override `scale=` support.
    pub scale: Option<bool>,
    /// Override `caption=` support.
    pub caption: Option<bool>,
    /// Override `align=` support.
    pub align: Option<bool>,
    /// Emit full-size links on figure images.
    pub full_size_link: bool,
    /// Alt text used for images without one.
    pub placeholder_alt: Option<String>,
}

impl Default for DirectivesConfig {
    fn default() -> Self {
        Self {
            version: LATEST_VERSION,
            scale: None,
            caption: None,
            align: None,
            full_size_link: false,
            placeholder_alt: None,
        }
    }
}

impl DirectivesConfig {
    /// Resolve the directive features.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the version is unknown.
    pub fn features(&self) -> Result<DirectiveFeatures, ConfigError> {
        let mut features = DirectiveFeatures::for_version(self.version).ok_or_else(|| {
            ConfigError::Validation(format!(
                "directives.version must be between 1 and {LATEST_VERSION}, got {}",
                self.version
            ))
        })?;
        if let Some(scale) = self.scale {
            features.scale = scale;
        }
        if let Some(caption) = self.caption {
            features.caption = caption;
        }
        if let Some(align) = self.align {
            features.align = align;
        }
        features.full_size_link = self.full_size_link;
        if let Some(placeholder) = &self.placeholder_alt {
            features.placeholder_alt.clone_from(placeholder);
        }
        Ok(features)
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `folio.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to take
    /// precedence over config file values. The result is validated again.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the final configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = std::env::current_dir()
            .ok()
            .and_then(|cwd| Self::discover_from(&cwd))
        {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(gfm) = settings.gfm {
            self.render.gfm = gfm;
        }
        if let Some(version) = settings.directive_version {
            self.directives.version = version;
        }
        if let Some(full_size_link) = settings.full_size_link {
            self.directives.full_size_link = full_size_link;
        }
    }

    /// Search for config file in `start` and its parents.
    fn discover_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());

        // Validate configuration after loading
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.directives.features()?;
        if let Some(placeholder) = &self.directives.placeholder_alt
            && placeholder.trim().is_empty()
        {
            return Err(ConfigError::Validation(
                "directives.placeholder_alt cannot be empty".to_owned(),
            ));
        }
        Ok(())
    }

    /// Build a preview renderer from this configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the directive settings are invalid.
    pub fn preview_renderer(&self) -> Result<PreviewRenderer, ConfigError> {
        Ok(PreviewRenderer::new()
            .with_gfm(self.render.gfm)
            .with_features(self.directives.features()?))
    }
}
