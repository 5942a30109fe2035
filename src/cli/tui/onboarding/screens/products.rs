//! Step 3: what the business sells

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
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
            Constraint::Length(3),      // Products
            Constraint::Min(1),         // Hint
        ])
        .split(area);

    let question = vec![
        Line::from(Span::styled("What do you sell or offer?", theme.highlight)),
        Line::from(Span::styled(
            "List your main products or services (separate with commas)",
            theme.muted,
        )),
    ];
    frame.render_widget(Paragraph::new(question), chunks[0]);

    super::input::render_field(frame, chunks[1], theme, state, FormField::Products);

    let examples = vec![
        Line::from(Span::styled(" Examples:", theme.muted)),
        Line::from(Span::styled(
            " For a fruit shop: Mangoes, Bananas, Apples, Fresh Juices",
            theme.muted,
        )),
        Line::from(Span::styled(
            " For a beauty parlor: Haircut, Facial, Bridal Makeup, Waxing",
            theme.muted,
        )),
    ];
    let hint = Paragraph::new(examples).wrap(Wrap { trim: false });
    frame.render_widget(hint, chunks[2]);
}
