use crate::{Result, VoiceSiteError};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Path management for VoiceSite configuration and log files
#[derive(Debug, Clone)]
pub struct VoiceSitePaths {
    /// Configuration directory (holds config.yaml)
    pub config_dir: PathBuf,
    /// Data directory (holds the interactive session log)
    pub data_dir: PathBuf,
}

impl VoiceSitePaths {
    /// Create new paths instance using standard directories
    pub fn new() -> Result<Self> {
        let dirs = ProjectDirs::from("in", "voicesite", "voicesite").ok_or_else(|| {
            VoiceSiteError::Path("Failed to determine project directories".to_string())
        })?;

        Ok(Self {
            config_dir: dirs.config_dir().to_path_buf(),
            data_dir: dirs.data_local_dir().to_path_buf(),
        })
    }

    /// Create paths rooted at a specific directory
    pub fn for_root(root: &Path) -> Self {
        let base = root.join(".voicesite");
        Self {
            config_dir: base.clone(),
            data_dir: base,
        }
    }

    /// Default configuration file path
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.yaml")
    }

    /// Default log file for interactive sessions
    pub fn log_file(&self) -> PathBuf {
        self.data_dir.join("voicesite.log")
    }
}

impl Default for VoiceSitePaths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if platform directories fail
            let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            Self::for_root(&current_dir)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_root_layout() {
        let paths = VoiceSitePaths::for_root(Path::new("/tmp/shop"));
        assert_eq!(paths.config_file(), PathBuf::from("/tmp/shop/.voicesite/config.yaml"));
        assert_eq!(paths.log_file(), PathBuf::from("/tmp/shop/.voicesite/voicesite.log"));
    }
}
