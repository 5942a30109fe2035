use super::CommandHandler;
use crate::config::{ConfigSource, SiteConfig};
use crate::Result;

/// Handler for the `config` command
pub struct ConfigCommand {
    pub path_only: bool,
    config: SiteConfig,
    source: ConfigSource,
}

impl ConfigCommand {
    pub fn new(path_only: bool, config: SiteConfig, source: ConfigSource) -> Self {
        Self {
            path_only,
            config,
            source,
        }
    }

    pub fn render(&self) -> Result<String> {
        if self.path_only {
            return Ok(match self.source.path() {
                Some(path) => path.display().to_string(),
                None => "(built-in defaults)".to_string(),
            });
        }

        let header = match self.source.path() {
            Some(path) => format!("# loaded from {}\n", path.display()),
            None => "# built-in defaults\n".to_string(),
        };
        Ok(format!("{}{}", header, serde_yaml_ng::to_string(&self.config)?))
    }
}

impl CommandHandler for ConfigCommand {
    fn execute(&self) -> Result<()> {
        println!("{}", self.render()?.trim_end());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "config"
    }
}
