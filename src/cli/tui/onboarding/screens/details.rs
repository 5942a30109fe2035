//! Step 2: business name and type

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::cli::tui::onboarding::state::{Focus, WizardScreen};
use crate::cli::tui::onboarding::theme::Theme;
use crate::onboarding::{BusinessType, FormField};

pub fn render(frame: &mut Frame, area: Rect, state: &WizardScreen, theme: &Theme, _tick: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                                  // Question
            Constraint::Length(3),                                  // Name
            Constraint::Length(BusinessType::ALL.len() as u16 + 2), // Type selector
            Constraint::Min(0),
        ])
        .split(area);

    let question = vec![
        Line::from(Span::styled("Tell us about your business", theme.highlight)),
        Line::from(Span::styled(
            "This information will appear on your website homepage",
            theme.muted,
        )),
    ];
    frame.render_widget(Paragraph::new(question), chunks[0]);

    super::input::render_field(frame, chunks[1], theme, state, FormField::BusinessName);

    let focused = state.focus == Focus::BusinessType;
    let selected = state.wizard.form().business_type;
    let items: Vec<ListItem> = BusinessType::ALL
        .iter()
        .map(|kind| {
            if Some(*kind) == selected {
                ListItem::new(format!(" ● {}", kind.label())).style(theme.selected)
            } else {
                ListItem::new(format!(" ○ {}", kind.label()))
            }
        })
        .collect();

    let title = if selected.is_some() {
        " Type of Business ".to_string()
    } else {
        " Type of Business (select your business type) ".to_string()
    };
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(theme.input_border(focused)),
    );
    frame.render_widget(list, chunks[2]);
}
