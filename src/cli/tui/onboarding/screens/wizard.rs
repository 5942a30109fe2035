//! Wizard frame: progress header, current step, status and help bar

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::cli::tui::onboarding::state::{Focus, WizardScreen};
use crate::cli::tui::onboarding::theme::Theme;
use crate::onboarding::Step;

pub fn render(frame: &mut Frame, state: &WizardScreen, theme: &Theme, tick: usize) {
    let main_block = Block::default()
        .title(Span::styled(" VoiceSite ", theme.brand))
        .borders(Borders::ALL);
    let inner = main_block.inner(frame.area());
    frame.render_widget(main_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),      // Heading
            Constraint::Length(3),      // Progress
            Constraint::Min(8),         // Step content
            Constraint::Length(1),      // Status
            Constraint::Length(1),      // Help bar
        ])
        .split(inner);

    let heading = vec![
        Line::from(Span::styled("Create Your Business Website", theme.highlight)),
        Line::from(Span::styled(
            format!("Step {} of {}", displayed_step(state).number(), Step::ALL.len()),
            theme.muted,
        )),
    ];
    frame.render_widget(Paragraph::new(heading).alignment(Alignment::Center), chunks[0]);

    render_progress(frame, chunks[1], state, theme);

    if state.wizard.state().is_generating {
        render_generating(frame, chunks[2], theme, tick);
    } else {
        match state.wizard.current_step() {
            Step::Location => super::location::render(frame, chunks[2], state, theme, tick),
            Step::BusinessDetails => super::details::render(frame, chunks[2], state, theme, tick),
            Step::Products => super::products::render(frame, chunks[2], state, theme, tick),
            Step::ContactInfo => super::contact::render(frame, chunks[2], state, theme, tick),
            Step::CreateWebsite => super::result::render(frame, chunks[2], state, theme, tick),
        }
    }

    super::render_status(frame, chunks[3], state.status.as_deref(), theme.warning);
    super::render_help_bar(frame, chunks[4], theme, &help_keys(state));
}

/// Step shown in the header. Generation is drawn as part of the last step.
fn displayed_step(state: &WizardScreen) -> Step {
    if state.wizard.state().is_generating {
        Step::CreateWebsite
    } else {
        state.wizard.current_step()
    }
}

fn render_progress(frame: &mut Frame, area: Rect, state: &WizardScreen, theme: &Theme) {
    let current = displayed_step(state);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, Step::ALL.len() as u32); 5])
        .split(area);

    for (idx, step) in Step::ALL.iter().enumerate() {
        let style = theme.step_style(*step, current);
        let badge = if *step < current {
            "✓".to_string()
        } else {
            step.number().to_string()
        };
        let lines = vec![
            Line::from(Span::styled(format!("({})", badge), style)),
            Line::from(Span::styled(step.title(), style)),
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), columns[idx]);
    }
}

fn render_generating(frame: &mut Frame, area: Rect, theme: &Theme, tick: usize) {
    let lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(Theme::spinner(tick), theme.warning)),
        Line::from(""),
        Line::from(Span::styled("Creating your business website...", theme.highlight)),
        Line::from(Span::styled(
            "Please wait while we set up your online presence",
            theme.muted,
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL)),
        area,
    );
}

fn help_keys(state: &WizardScreen) -> Vec<(&'static str, &'static str)> {
    if state.wizard.state().is_generating {
        return vec![("Ctrl+C", "exit")];
    }

    match state.wizard.current_step() {
        Step::Location => {
            let mut keys = Vec::new();
            if !state.wizard.state().location_suggestions.is_empty() {
                keys.push(("↑↓", "choose"));
            }
            if state.suggestion_index.is_some() {
                keys.push(("Enter", "select"));
            } else {
                keys.push(("Enter", "continue"));
            }
            keys.push(("Esc", "back to start"));
            keys
        }
        Step::BusinessDetails if state.focus == Focus::BusinessType => vec![
            ("←→", "business type"),
            ("Tab", "next field"),
            ("Enter", "continue"),
            ("Esc", "back"),
            ("Ctrl+B", "start over"),
        ],
        Step::ContactInfo => vec![
            ("Tab", "next field"),
            ("Enter", "Create My Website"),
            ("Esc", "back"),
            ("Ctrl+B", "start over"),
        ],
        Step::CreateWebsite => vec![
            ("o", "open website"),
            ("Enter", "done"),
            ("Esc", "start over"),
        ],
        _ => vec![
            ("Tab", "next field"),
            ("Enter", "continue"),
            ("Esc", "back"),
            ("Ctrl+B", "start over"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::onboarding::{FormField, Wizard};

    #[test]
    fn test_contact_step_offers_generation() {
        let mut wizard = Wizard::new(1, "", 2);
        wizard.set_field(FormField::Location, "Pune");
        wizard.advance();
        wizard.set_field(FormField::BusinessName, "Asha Sarees");
        wizard.set_business_type(Some(crate::onboarding::BusinessType::Clothing));
        wizard.advance();
        wizard.set_field(FormField::Products, "Silk sarees");
        wizard.advance();

        let mut screen = WizardScreen::new(wizard);
        screen.reset_focus();
        let keys = help_keys(&screen);
        assert!(keys.contains(&("Enter", "Create My Website")));
    }

    #[test]
    fn test_generation_shows_last_step() {
        let mut wizard = Wizard::new(1, "", 2);
        wizard.set_field(FormField::Location, "Pune");
        wizard.advance();
        wizard.set_field(FormField::BusinessName, "Asha Sarees");
        wizard.set_business_type(Some(crate::onboarding::BusinessType::Clothing));
        wizard.advance();
        wizard.advance();
        wizard.set_field(FormField::Contact, "9876543210");
        wizard.set_field(FormField::Email, "asha@example.com");

        let mut screen = WizardScreen::new(wizard);
        assert_eq!(displayed_step(&screen), Step::ContactInfo);

        assert!(screen.wizard.begin_generation().is_some());
        assert_eq!(screen.wizard.current_step(), Step::ContactInfo);
        assert_eq!(displayed_step(&screen), Step::CreateWebsite);
    }

    #[test]
    fn test_location_help_depends_on_suggestions() {
        let screen = WizardScreen::new(Wizard::new(1, "", 2));
        assert!(help_keys(&screen).contains(&("Enter", "continue")));
    }
}
