use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::logging::LogLevel;
use crate::onboarding::Language;

/// VoiceSite: describe your business, get a website
#[derive(Parser, Debug)]
#[command(name = "voicesite")]
#[command(version)]
#[command(about = "Create a website for your small business in five steps")]
#[command(
    long_about = "VoiceSite walks a shop owner through location, business details, products and contact info, then creates a website address and sends the details by e-mail."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (defaults to config.yaml in the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log file for the interactive wizard (defaults to the platform data directory)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive onboarding wizard
    Start {
        /// Business description to prefill on the intake screen
        #[arg(short, long)]
        description: Option<String>,

        /// Intake screen language
        #[arg(short, long, value_enum)]
        language: Option<Language>,

        /// Go straight to the wizard
        #[arg(long)]
        skip_intake: bool,
    },

    /// Print location suggestions for a query
    Suggest {
        /// City or area to look up
        query: String,
    },

    /// Print the website address a business name would get
    Url {
        /// Business name (may be given as several words)
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Show the effective configuration
    Config {
        /// Print only the path the configuration was loaded from
        #[arg(long)]
        path: bool,
    },
}

impl Commands {
    /// Get the command name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Start { .. } => "start",
            Commands::Suggest { .. } => "suggest",
            Commands::Url { .. } => "url",
            Commands::Config { .. } => "config",
        }
    }

    /// Whether the command takes over the terminal
    pub fn is_interactive(&self) -> bool {
        matches!(self, Commands::Start { .. })
    }
}
