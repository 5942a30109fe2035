use clap::Parser;
use tracing::debug;
use voicesite::{
    cli::commands::{
        config::ConfigCommand, start::StartCommand, suggest::SuggestCommand, url::UrlCommand,
        CommandHandler,
    },
    cli::{Cli, Commands},
    config::ConfigLoader,
    io::paths::VoiceSitePaths,
    logging, Result,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The wizard draws on the terminal, so its logs go to a file
    let _log_guard = if cli.command.is_interactive() {
        let log_file = cli
            .log_file
            .clone()
            .unwrap_or_else(|| VoiceSitePaths::default().log_file());
        Some(logging::init_file(cli.log_level, &log_file)?)
    } else {
        logging::init_stderr(cli.log_level);
        None
    };

    let (config, source) = ConfigLoader::new().load(cli.config.as_deref())?;
    debug!(source = ?source, "Configuration loaded");

    let handler: Box<dyn CommandHandler> = match cli.command {
        Commands::Start {
            description,
            language,
            skip_intake,
        } => Box::new(StartCommand::new(description, language, skip_intake, config)),
        Commands::Suggest { query } => Box::new(SuggestCommand::new(query, &config)),
        Commands::Url { name } => Box::new(UrlCommand::new(name, config.base_url.clone())),
        Commands::Config { path } => Box::new(ConfigCommand::new(path, config, source)),
    };

    debug!(handler = handler.name(), "Executing");
    handler.execute()
}
