/// Terminal User Interface module for interactive commands
pub mod onboarding;

use crate::cli::commands::start::LaunchOptions;
use crate::Result;

/// Run the interactive onboarding wizard
pub async fn run_onboarding(options: LaunchOptions) -> Result<()> {
    onboarding::run(options).await
}
