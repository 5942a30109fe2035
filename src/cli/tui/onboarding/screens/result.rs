//! Step 5: the generated website

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::cli::tui::onboarding::state::WizardScreen;
use crate::cli::tui::onboarding::theme::Theme;

const NEXT_STEPS: [&str; 4] = [
    "Visit your website and explore all pages",
    "Check your email for admin login details",
    "Update your business photos and offers",
    "Share your website with customers",
];

pub fn render(frame: &mut Frame, area: Rect, state: &WizardScreen, theme: &Theme, _tick: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Headline
            Constraint::Length(3),      // URL
            Constraint::Length(3),      // Email notice
            Constraint::Min(6),         // What's next
        ])
        .split(area);

    let business = state
        .wizard
        .form()
        .business_type
        .map(|kind| kind.as_str())
        .unwrap_or("new");
    let headline = vec![
        Line::from(Span::styled("Your Business Website is Ready!", theme.success)),
        Line::from(format!(
            "We've created a professional website for your {} business",
            business
        )),
    ];
    frame.render_widget(Paragraph::new(headline).alignment(Alignment::Center), chunks[0]);

    let url = state.wizard.state().website_url.as_deref().unwrap_or_default();
    let link = Paragraph::new(Span::styled(url.to_string(), theme.link))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Your website ")
                .borders(Borders::ALL),
        );
    frame.render_widget(link, chunks[1]);

    if state.wizard.state().email_sent {
        let notice = vec![
            Line::from(vec![
                Span::raw("✉ We've sent website details to "),
                Span::styled(state.wizard.form().email.clone(), theme.highlight),
            ]),
            Line::from(Span::styled(
                "Check your inbox (and spam folder) for login instructions",
                theme.muted,
            )),
        ];
        frame.render_widget(Paragraph::new(notice).wrap(Wrap { trim: true }), chunks[2]);
    }

    let items: Vec<ListItem> = NEXT_STEPS
        .iter()
        .enumerate()
        .map(|(idx, item)| ListItem::new(format!(" {}. {}", idx + 1, item)))
        .collect();
    let list = List::new(items).block(
        Block::default()
            .title(" What's Next? ")
            .borders(Borders::ALL),
    );
    frame.render_widget(list, chunks[3]);
}
