//! Configuration for the onboarding wizard
pub mod loader;
pub mod types;

pub use loader::{ConfigLoader, ConfigSource};
pub use types::SiteConfig;
