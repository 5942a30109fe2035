//! Step 4: how customers reach the owner

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::cli::tui::onboarding::state::WizardScreen;
use crate::cli::tui::onboarding::theme::Theme;
use crate::onboarding::FormField;

pub fn render(frame: &mut Frame, area: Rect, state: &WizardScreen, theme: &Theme, _tick: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Question
            Constraint::Length(3),      // Phone
            Constraint::Length(3),      // Email
            Constraint::Min(1),         // Note
        ])
        .split(area);

    let question = vec![
        Line::from(Span::styled("How can customers contact you?", theme.highlight)),
        Line::from(Span::styled(
            "We'll display this on your website so customers can reach you",
            theme.muted,
        )),
    ];
    frame.render_widget(Paragraph::new(question), chunks[0]);

    super::input::render_field(frame, chunks[1], theme, state, FormField::Contact);
    super::input::render_field(frame, chunks[2], theme, state, FormField::Email);

    let note = Paragraph::new(Span::styled(
        " Your website details will be sent to this email",
        theme.muted,
    ));
    frame.render_widget(note, chunks[3]);
}
