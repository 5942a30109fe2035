//! Step 1: where the shop is

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::cli::tui::onboarding::state::WizardScreen;
use crate::cli::tui::onboarding::theme::Theme;
use crate::onboarding::FormField;

pub fn render(frame: &mut Frame, area: Rect, state: &WizardScreen, theme: &Theme, tick: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Question
            Constraint::Length(3),      // Input
            Constraint::Length(1),      // Lookup indicator
            Constraint::Min(3),         // Suggestions
        ])
        .split(area);

    let question = vec![
        Line::from(Span::styled("Where is your shop located?", theme.highlight)),
        Line::from(Span::styled(
            "Tell us your business location so customers can find you easily",
            theme.muted,
        )),
    ];
    frame.render_widget(Paragraph::new(question), chunks[0]);

    super::input::render_field(frame, chunks[1], theme, state, FormField::Location);

    if state.wizard.state().is_loading {
        let loading = Line::from(vec![
            Span::styled(format!(" {} ", Theme::spinner(tick)), theme.warning),
            Span::styled("Finding locations...", theme.muted),
        ]);
        frame.render_widget(Paragraph::new(loading), chunks[2]);
    }

    let suggestions = &state.wizard.state().location_suggestions;
    if suggestions.is_empty() {
        return;
    }

    let items: Vec<ListItem> = suggestions
        .iter()
        .enumerate()
        .map(|(idx, city)| {
            let item = ListItem::new(format!(" 📍 {}", city));
            if Some(idx) == state.suggestion_index {
                item.style(theme.selected)
            } else {
                item
            }
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Suggestions ")
            .borders(Borders::ALL),
    );
    frame.render_widget(list, chunks[3]);
}
