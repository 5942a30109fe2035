/// Interactive onboarding wizard implementation
pub mod app;
pub mod events;
pub mod screens;
pub mod state;
pub mod theme;

use crate::cli::commands::start::LaunchOptions;
use crate::Result;

/// Entry point for the onboarding wizard
pub async fn run(options: LaunchOptions) -> Result<()> {
    let (event_tx, event_rx) = tokio::sync::mpsc::unbounded_channel();
    let app = app::App::new(options, event_tx);
    app.run(event_rx).await
}
