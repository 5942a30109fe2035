use thiserror::Error;

#[derive(Error, Debug)]
pub enum VoiceSiteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Path error: {0}")]
    Path(String),

    #[error("Browser error: {0}")]
    Browser(String),

    #[error("CLI error: {0}")]
    Cli(String),

    #[error("Generic error: {0}")]
    Generic(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, VoiceSiteError>;
