//! Bordered single-line text input

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tui_input::Input;

use crate::cli::tui::onboarding::state::{Focus, WizardScreen};
use crate::cli::tui::onboarding::theme::Theme;
use crate::onboarding::FormField;

/// Draw `input` in a titled box. The terminal cursor is placed inside the
/// box when `focused`.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    title: &str,
    placeholder: &str,
    input: &Input,
    focused: bool,
) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(theme.input_border(focused));
    let inner = block.inner(area);

    let width = inner.width.max(1) as usize;
    let scroll = input.visual_scroll(width.saturating_sub(1));

    let paragraph = if input.value().is_empty() {
        Paragraph::new(Line::from(Span::styled(placeholder.to_string(), theme.muted)))
    } else {
        Paragraph::new(input.value()).scroll((0, scroll as u16))
    };
    frame.render_widget(paragraph.block(block), area);

    if focused {
        let offset = input.visual_cursor().saturating_sub(scroll) as u16;
        frame.set_cursor_position((inner.x + offset.min(inner.width.saturating_sub(1)), inner.y));
    }
}

/// Draw the input backing a wizard form field
pub fn render_field(frame: &mut Frame, area: Rect, theme: &Theme, state: &WizardScreen, field: FormField) {
    render(
        frame,
        area,
        theme,
        field.label(),
        field.placeholder(),
        state.inputs.get(field),
        state.focus == Focus::Field(field),
    );
}
