use super::types::SiteConfig;
use crate::io::paths::VoiceSitePaths;
use crate::{Result, VoiceSiteError};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Where the effective configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicit --config path
    Explicit(PathBuf),
    /// Discovered in the platform config directory
    Discovered(PathBuf),
    /// Built-in defaults
    Defaults,
}

impl ConfigSource {
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigSource::Explicit(path) | ConfigSource::Discovered(path) => Some(path),
            ConfigSource::Defaults => None,
        }
    }
}

/// Configuration loader for config.yaml
pub struct ConfigLoader {
    paths: VoiceSitePaths,
}

impl ConfigLoader {
    /// Create new loader using the platform directories
    pub fn new() -> Self {
        Self {
            paths: VoiceSitePaths::default(),
        }
    }

    /// Create a loader that discovers config under the given paths
    pub fn with_paths(paths: VoiceSitePaths) -> Self {
        Self { paths }
    }

    /// Resolve the effective configuration.
    ///
    /// An explicit path must exist. Without one, the platform config file is
    /// used when present and the built-in defaults otherwise.
    pub fn load(&self, explicit: Option<&Path>) -> Result<(SiteConfig, ConfigSource)> {
        if let Some(path) = explicit {
            let config = self.load_file(path)?;
            return Ok((config, ConfigSource::Explicit(path.to_path_buf())));
        }

        let discovered = self.paths.config_file();
        if discovered.exists() {
            let config = self.load_file(&discovered)?;
            return Ok((config, ConfigSource::Discovered(discovered)));
        }

        debug!(path = %discovered.display(), "No config file found, using defaults");
        Ok((SiteConfig::default(), ConfigSource::Defaults))
    }

    /// Load and validate a config file
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<SiteConfig> {
        let path = path.as_ref();

        let contents = std::fs::read_to_string(path).map_err(|e| {
            VoiceSiteError::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        let config: SiteConfig = serde_yaml_ng::from_str(&contents).map_err(|e| {
            VoiceSiteError::Config(format!("Failed to parse config file {}: {}", path.display(), e))
        })?;

        validate(&config)?;
        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Reject configurations the wizard cannot work with
pub fn validate(config: &SiteConfig) -> Result<()> {
    let base = config.base_url.as_str();
    if base.trim().is_empty() {
        return Err(VoiceSiteError::Config("base_url must not be empty".to_string()));
    }
    if base.trim() != base {
        return Err(VoiceSiteError::Config(format!(
            "base_url '{}' must not have surrounding whitespace",
            base
        )));
    }
    if !(base.starts_with("https://") || base.starts_with("http://")) {
        return Err(VoiceSiteError::Config(format!(
            "base_url '{}' must start with http:// or https://",
            base
        )));
    }
    if base.ends_with('/') {
        return Err(VoiceSiteError::Config(format!(
            "base_url '{}' must not end with '/'",
            base
        )));
    }
    if config.min_query_len == 0 {
        return Err(VoiceSiteError::Config(
            "min_query_len must be at least 1".to_string(),
        ));
    }
    if config.cities.iter().any(|c| c.trim().is_empty()) {
        return Err(VoiceSiteError::Config(
            "cities must not contain empty entries".to_string(),
        ));
    }
    Ok(())
}
