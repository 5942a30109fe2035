//! Intake screen: describe the business, then get started

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::cli::tui::onboarding::state::IntakeScreen;
use crate::cli::tui::onboarding::theme::Theme;
use crate::onboarding::IntakeTab;

const HOW_IT_WORKS: [(&str, &str); 3] = [
    ("Speak or Type", "Describe your business in your own language"),
    ("Get Your Website", "Our AI creates a professional website instantly"),
    ("Share & Grow", "Share on WhatsApp and get more customers"),
];

pub fn render(frame: &mut Frame, state: &IntakeScreen, theme: &Theme, tick: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),      // Brand + language
            Constraint::Length(4),      // Headline
            Constraint::Length(3),      // Tabs
            Constraint::Min(6),         // Tab content
            Constraint::Length(3),      // Get Started
            Constraint::Length(5),      // How it works
            Constraint::Length(1),      // Help bar
        ])
        .split(frame.area());

    render_nav(frame, chunks[0], state, theme);
    render_headline(frame, chunks[1]);
    render_tabs(frame, chunks[2], state, theme);
    render_tab_content(frame, chunks[3], state, theme);
    render_get_started(frame, chunks[4], state, theme, tick);
    render_how_it_works(frame, chunks[5], theme);

    super::render_help_bar(
        frame,
        chunks[6],
        theme,
        &[
            ("Tab", "switch speak/type"),
            ("Ctrl+L", "language"),
            ("Enter", "get started"),
            ("Esc", "quit"),
        ],
    );
}

fn render_nav(frame: &mut Frame, area: Rect, state: &IntakeScreen, theme: &Theme) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    frame.render_widget(Paragraph::new(Span::styled(" VoiceSite", theme.brand)), halves[0]);

    let language = Line::from(vec![
        Span::styled("Language: ", theme.muted),
        Span::styled(state.intake.language.label(), theme.highlight),
        Span::raw(" "),
    ]);
    frame.render_widget(Paragraph::new(language).alignment(Alignment::Right), halves[1]);
}

fn render_headline(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Your Business Website in Minutes",
            ratatui::style::Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("No coding. No English needed. Just speak about your business in your language."),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_tabs(frame: &mut Frame, area: Rect, state: &IntakeScreen, theme: &Theme) {
    let selected = match state.intake.tab {
        IntakeTab::Voice => 0,
        IntakeTab::Text => 1,
    };
    let tabs = Tabs::new(vec![IntakeTab::Voice.title(), IntakeTab::Text.title()])
        .select(selected)
        .highlight_style(theme.focused)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(tabs, area);
}

fn render_tab_content(frame: &mut Frame, area: Rect, state: &IntakeScreen, theme: &Theme) {
    match state.intake.tab {
        IntakeTab::Voice => {
            let lines = vec![
                Line::from(""),
                Line::from(Span::styled("🎤  Tap to speak about your business", theme.highlight)),
                Line::from(Span::styled("(in Telugu, Hindi, or any language)", theme.muted)),
                Line::from(""),
                Line::from(Span::styled(
                    "Voice capture is not available here yet. Press Tab to type instead.",
                    theme.warning,
                )),
            ];
            frame.render_widget(
                Paragraph::new(lines)
                    .alignment(Alignment::Center)
                    .block(Block::default().borders(Borders::ALL)),
                area,
            );
        }
        IntakeTab::Text => {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(3), Constraint::Min(1)])
                .split(area);

            super::input::render(
                frame,
                rows[0],
                theme,
                "Describe your business",
                "What do you sell? Where are you located? What makes you special?",
                &state.input,
                !state.intake.is_loading,
            );

            let hint = Paragraph::new(Span::styled(
                " Tip: mention your products, location, and what makes you special",
                theme.muted,
            ))
            .wrap(Wrap { trim: true });
            frame.render_widget(hint, rows[1]);
        }
    }
}

fn render_get_started(frame: &mut Frame, area: Rect, state: &IntakeScreen, theme: &Theme, tick: usize) {
    let label = if state.intake.is_loading {
        Line::from(vec![
            Span::styled(Theme::spinner(tick), theme.warning),
            Span::raw(" Loading..."),
        ])
    } else {
        Line::from(Span::styled("▶ Get Started", theme.success))
    };

    let button = Paragraph::new(label)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, area);
}

fn render_how_it_works(frame: &mut Frame, area: Rect, theme: &Theme) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    for (idx, (title, description)) in HOW_IT_WORKS.iter().enumerate() {
        let lines = vec![
            Line::from(Span::styled(format!("{}. {}", idx + 1, title), theme.highlight)),
            Line::from(Span::styled(*description, theme.muted)),
        ];
        let card = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(card, columns[idx]);
    }
}
