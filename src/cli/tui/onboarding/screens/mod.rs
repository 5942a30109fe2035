/// Screen modules for the onboarding wizard
pub mod contact;
pub mod details;
pub mod input;
pub mod intake;
pub mod location;
pub mod products;
pub mod result;
pub mod wizard;

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::theme::Theme;

/// Render a help bar of `(key, action)` pairs
pub fn render_help_bar(frame: &mut Frame, area: Rect, theme: &Theme, keys: &[(&str, &str)]) {
    let mut spans = vec![Span::raw(" ")];
    for (idx, (key, action)) in keys.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*key, theme.highlight));
        spans.push(Span::raw(format!(" {}", action)));
    }

    let help = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Left)
        .style(theme.help_bar);
    frame.render_widget(help, area);
}

/// One-line status message, or nothing
pub fn render_status(frame: &mut Frame, area: Rect, status: Option<&str>, style: Style) {
    if let Some(message) = status {
        let line = Paragraph::new(Line::from(Span::styled(format!(" {}", message), style)));
        frame.render_widget(line, area);
    }
}
