use super::CommandHandler;
use crate::config::SiteConfig;
use crate::onboarding::Language;
use crate::Result;

/// How the interactive session should open
#[derive(Debug, Clone)]
pub struct LaunchOptions {
    pub description: Option<String>,
    pub language: Language,
    pub skip_intake: bool,
    pub config: SiteConfig,
}

/// Handler for the `start` command
pub struct StartCommand {
    pub options: LaunchOptions,
}

impl StartCommand {
    pub fn new(
        description: Option<String>,
        language: Option<Language>,
        skip_intake: bool,
        config: SiteConfig,
    ) -> Self {
        let language = language.unwrap_or(config.default_language);
        Self {
            options: LaunchOptions {
                description,
                language,
                skip_intake,
                config,
            },
        }
    }
}

impl CommandHandler for StartCommand {
    #[cfg(feature = "tui")]
    fn execute(&self) -> Result<()> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;
        runtime.block_on(crate::cli::tui::run_onboarding(self.options.clone()))
    }

    #[cfg(not(feature = "tui"))]
    fn execute(&self) -> Result<()> {
        Err(crate::VoiceSiteError::Cli(
            "voicesite was built without the `tui` feature; the interactive wizard is unavailable"
                .to_string(),
        ))
    }

    fn name(&self) -> &'static str {
        "start"
    }
}
