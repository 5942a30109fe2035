pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod logging;
pub mod onboarding;

pub use error::{Result, VoiceSiteError};
