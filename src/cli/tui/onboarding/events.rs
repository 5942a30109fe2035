use ratatui::crossterm::event::KeyEvent;

use crate::onboarding::OnboardingEvent;

/// All possible events in the application
#[derive(Debug)]
pub enum AppEvent {
    // Input events
    Key(KeyEvent),
    Resize(u16, u16),

    // Background task results
    Onboarding(OnboardingEvent),

    // UI events
    Tick, // drives the loading spinners
}

impl From<OnboardingEvent> for AppEvent {
    fn from(event: OnboardingEvent) -> Self {
        AppEvent::Onboarding(event)
    }
}
