use ratatui::style::{Color, Modifier, Style};

use crate::onboarding::Step;

/// Consistent theme for the TUI
pub struct Theme {
    pub brand: Style,
    pub selected: Style,
    pub focused: Style,
    pub success: Style,
    pub warning: Style,
    pub muted: Style,
    pub highlight: Style,
    pub link: Style,
    pub help_bar: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            brand: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            selected: Style::default()
                .bg(Color::Rgb(50, 50, 80))
                .add_modifier(Modifier::BOLD),
            focused: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            success: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            warning: Style::default()
                .fg(Color::Yellow),
            muted: Style::default()
                .fg(Color::DarkGray),
            highlight: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            link: Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::UNDERLINED),
            help_bar: Style::default()
                .bg(Color::DarkGray),
        }
    }
}

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

impl Theme {
    /// Style for a step badge in the progress header
    pub fn step_style(&self, step: Step, current: Step) -> Style {
        if step == current {
            self.highlight
        } else if step < current {
            self.success
        } else {
            self.muted
        }
    }

    /// Border style for an input, depending on focus
    pub fn input_border(&self, focused: bool) -> Style {
        if focused {
            self.focused
        } else {
            Style::default()
        }
    }

    /// Spinner frame for the given tick
    pub fn spinner(tick: usize) -> &'static str {
        SPINNER[tick % SPINNER.len()]
    }
}
