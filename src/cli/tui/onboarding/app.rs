use std::time::{Duration, Instant};

use ratatui::{
    crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    DefaultTerminal, Frame,
};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio::time;
use tracing::{debug, info, warn};
use tui_input::backend::crossterm::EventHandler;

use super::events::AppEvent;
use super::state::*;
use super::theme::Theme;
use crate::cli::commands::start::LaunchOptions;
use crate::io::browser;
use crate::onboarding::{
    BackgroundTasks, BusinessType, FormField, IntakeTab, OnboardingEvent, Services, Step, Wizard,
};
use crate::Result;

/// Screen changes requested by event handlers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Mount a fresh wizard seeded with the description
    EnterWizard(String),
    /// Drop the wizard and show the intake screen again
    BackToIntake,
    Quit,
}

/// Main application struct
pub struct App {
    /// Current screen
    screen: ScreenState,
    /// Whether the app should quit
    should_quit: bool,
    /// Theme for styling
    theme: Theme,
    services: Services,
    options: LaunchOptions,
    /// Background work for the current screen
    tasks: BackgroundTasks<AppEvent>,
    event_tx: UnboundedSender<AppEvent>,
    /// Id handed to the next wizard session
    next_session: u64,
    /// Last time Ctrl+C was pressed
    last_ctrl_c: Option<Instant>,
    /// Animation counter for spinners
    tick: usize,
}

impl App {
    /// Create a new app instance
    pub fn new(options: LaunchOptions, event_tx: UnboundedSender<AppEvent>) -> Self {
        let services = Services::simulated(&options.config);
        let mut app = Self {
            screen: ScreenState::Intake(IntakeScreen::new(
                options.language,
                options.description.clone(),
            )),
            should_quit: false,
            theme: Theme::default(),
            services,
            options,
            tasks: BackgroundTasks::new(event_tx.clone()),
            event_tx,
            next_session: 1,
            last_ctrl_c: None,
            tick: 0,
        };

        if app.options.skip_intake {
            let description = app.options.description.clone().unwrap_or_default();
            app.apply_transition(ScreenTransition::EnterWizard(description));
        }
        app
    }

    pub fn screen(&self) -> &ScreenState {
        &self.screen
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Run the application
    pub async fn run(mut self, mut event_rx: UnboundedReceiver<AppEvent>) -> Result<()> {
        // Initialize terminal
        let mut terminal = ratatui::init();
        terminal.clear()?;

        // Spawn input handler; it stops once the receiver is dropped
        let input_tx = self.event_tx.clone();
        tokio::task::spawn_blocking(move || {
            while !input_tx.is_closed() {
                match event::poll(Duration::from_millis(100)) {
                    Ok(true) => match event::read() {
                        Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                            let _ = input_tx.send(AppEvent::Key(key));
                        }
                        Ok(Event::Resize(width, height)) => {
                            let _ = input_tx.send(AppEvent::Resize(width, height));
                        }
                        Ok(_) => {}
                        Err(e) => {
                            warn!(error = %e, "Terminal input error");
                            break;
                        }
                    },
                    Ok(false) => {}
                    Err(e) => {
                        warn!(error = %e, "Terminal poll error");
                        break;
                    }
                }
            }
        });

        info!(screen = self.screen.name(), "Onboarding started");

        // Main render loop
        let result = self.main_loop(&mut terminal, &mut event_rx).await;

        // Cleanup
        self.tasks.abort_all();
        ratatui::restore();
        result
    }

    /// Main event loop
    async fn main_loop(
        &mut self,
        terminal: &mut DefaultTerminal,
        event_rx: &mut UnboundedReceiver<AppEvent>,
    ) -> Result<()> {
        loop {
            // Draw UI
            terminal.draw(|frame| self.render(frame))?;

            // Handle events with timeout for animations
            match time::timeout(Duration::from_millis(80), event_rx.recv()).await {
                Ok(Some(event)) => self.handle(event),
                Ok(None) => break, // Channel closed
                Err(_) => self.handle(AppEvent::Tick),
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Render the current screen
    fn render(&mut self, frame: &mut Frame) {
        match &self.screen {
            ScreenState::Intake(state) => {
                super::screens::intake::render(frame, state, &self.theme, self.tick);
            }
            ScreenState::Wizard(state) => {
                super::screens::wizard::render(frame, state, &self.theme, self.tick);
            }
        }
    }

    /// Handle one event and apply any resulting screen change
    pub fn handle(&mut self, event: AppEvent) {
        if let Some(transition) = self.handle_event(event) {
            self.apply_transition(transition);
        }
    }

    fn handle_event(&mut self, event: AppEvent) -> Option<ScreenTransition> {
        match event {
            AppEvent::Tick => {
                self.tick = self.tick.wrapping_add(1);
                None
            }
            AppEvent::Resize(..) => None,
            AppEvent::Key(key) => {
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    return self.handle_ctrl_c();
                }
                match self.screen {
                    ScreenState::Intake(ref mut state) => {
                        Self::handle_intake_key(state, key, &mut self.tasks, &self.services)
                    }
                    ScreenState::Wizard(ref mut state) => {
                        Self::handle_wizard_key(state, key, &mut self.tasks, &self.services)
                    }
                }
            }
            AppEvent::Onboarding(event) => self.handle_background(event),
        }
    }

    /// Ctrl+C exits on double press
    fn handle_ctrl_c(&mut self) -> Option<ScreenTransition> {
        let now = Instant::now();
        if let Some(last) = self.last_ctrl_c {
            if now.duration_since(last) < Duration::from_millis(1000) {
                return Some(ScreenTransition::Quit);
            }
        }
        self.last_ctrl_c = Some(now);
        if let ScreenState::Wizard(ref mut state) = self.screen {
            state.status = Some("Press Ctrl+C again to exit".to_string());
        }
        None
    }

    fn apply_transition(&mut self, transition: ScreenTransition) {
        match transition {
            ScreenTransition::EnterWizard(description) => {
                // Results from the old screen must not reach the new session
                self.tasks.abort_all();
                let session = self.next_session;
                self.next_session += 1;
                info!(session, "Mounting wizard");
                let wizard = Wizard::new(session, description, self.services.min_query_len);
                self.screen = ScreenState::Wizard(WizardScreen::new(wizard));
            }
            ScreenTransition::BackToIntake => {
                self.tasks.abort_all();
                info!("Returning to intake screen");
                self.screen = ScreenState::Intake(IntakeScreen::new(self.options.language, None));
            }
            ScreenTransition::Quit => {
                self.should_quit = true;
            }
        }
    }

    fn handle_intake_key(
        state: &mut IntakeScreen,
        key: KeyEvent,
        tasks: &mut BackgroundTasks<AppEvent>,
        services: &Services,
    ) -> Option<ScreenTransition> {
        match key.code {
            KeyCode::Esc => return Some(ScreenTransition::Quit),
            KeyCode::Tab | KeyCode::BackTab => state.intake.toggle_tab(),
            KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                state.intake.cycle_language();
            }
            KeyCode::Enter => {
                if let Some(description) = state.intake.begin_submit() {
                    debug!(chars = description.chars().count(), "Intake submitted");
                    tasks.spawn_intake(services.intake_delay, description);
                }
            }
            _ => {
                if state.intake.tab == IntakeTab::Text && !state.intake.is_loading {
                    state.input.handle_event(&Event::Key(key));
                    state.intake.set_description(state.input.value());
                }
            }
        }
        None
    }

    fn handle_wizard_key(
        state: &mut WizardScreen,
        key: KeyEvent,
        tasks: &mut BackgroundTasks<AppEvent>,
        services: &Services,
    ) -> Option<ScreenTransition> {
        state.status = None;

        // Nothing to do until generation finishes
        if state.wizard.state().is_generating {
            return None;
        }

        let step = state.wizard.current_step();

        match key.code {
            KeyCode::Esc => {
                if step == Step::Location || step == Step::CreateWebsite {
                    return Some(ScreenTransition::BackToIntake);
                }
                if state.wizard.retreat() {
                    tasks.cancel_lookup();
                    state.reset_focus();
                }
                return None;
            }
            KeyCode::Char('b') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Some(ScreenTransition::BackToIntake);
            }
            KeyCode::Tab => {
                state.cycle_focus(true);
                return None;
            }
            KeyCode::BackTab => {
                state.cycle_focus(false);
                return None;
            }
            _ => {}
        }

        match step {
            Step::Location => Self::handle_location_key(state, key, tasks, services),
            Step::BusinessDetails if state.focus == Focus::BusinessType => {
                Self::handle_business_type_key(state, key)
            }
            Step::ContactInfo if key.code == KeyCode::Enter => {
                match state.wizard.begin_generation() {
                    Some(request) => tasks.spawn_generation(services.publisher.clone(), request),
                    None => {
                        state.status = Some("Enter your phone number and email to continue".to_string())
                    }
                }
                None
            }
            Step::CreateWebsite => Self::handle_result_key(state, key),
            _ if key.code == KeyCode::Enter => {
                Self::try_advance(state, tasks);
                None
            }
            _ => {
                Self::edit_focused_field(state, key, tasks, services);
                None
            }
        }
    }

    fn handle_location_key(
        state: &mut WizardScreen,
        key: KeyEvent,
        tasks: &mut BackgroundTasks<AppEvent>,
        services: &Services,
    ) -> Option<ScreenTransition> {
        match key.code {
            KeyCode::Up => state.move_highlight(false),
            KeyCode::Down => state.move_highlight(true),
            KeyCode::Enter => {
                let picked = state
                    .suggestion_index
                    .and_then(|index| state.wizard.select_suggestion(index));
                if picked.is_some() {
                    tasks.cancel_lookup();
                    state.sync_location_input();
                    state.reset_focus();
                } else {
                    // Nothing highlighted: keep what was typed
                    Self::try_advance(state, tasks);
                }
            }
            _ => Self::edit_focused_field(state, key, tasks, services),
        }
        None
    }

    fn handle_business_type_key(state: &mut WizardScreen, key: KeyEvent) -> Option<ScreenTransition> {
        let current = state.wizard.form().business_type;
        match key.code {
            KeyCode::Up | KeyCode::Left => {
                state.wizard.set_business_type(Some(BusinessType::cycle(current, false)));
            }
            KeyCode::Down | KeyCode::Right | KeyCode::Char(' ') => {
                state.wizard.set_business_type(Some(BusinessType::cycle(current, true)));
            }
            KeyCode::Backspace | KeyCode::Delete => state.wizard.set_business_type(None),
            KeyCode::Enter => {
                if state.wizard.advance() {
                    state.reset_focus();
                } else {
                    state.status = Some("Enter a business name and pick a type".to_string());
                }
            }
            _ => {}
        }
        None
    }

    fn handle_result_key(state: &mut WizardScreen, key: KeyEvent) -> Option<ScreenTransition> {
        match key.code {
            KeyCode::Char('o') | KeyCode::Char('O') => {
                if let Some(url) = state.wizard.state().website_url.clone() {
                    state.status = Some(match browser::open_url(&url) {
                        Ok(()) => format!("Opened {}", url),
                        Err(e) => {
                            warn!(error = %e, "Could not open website");
                            e.to_string()
                        }
                    });
                }
                None
            }
            KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('Q') => Some(ScreenTransition::Quit),
            _ => None,
        }
    }

    fn try_advance(state: &mut WizardScreen, tasks: &mut BackgroundTasks<AppEvent>) {
        let from = state.wizard.current_step();
        if state.wizard.advance() {
            if from == Step::Location {
                tasks.cancel_lookup();
            }
            state.reset_focus();
        } else {
            state.status = Some(match from {
                Step::Location => "Enter your location to continue".to_string(),
                Step::BusinessDetails => "Enter a business name and pick a type".to_string(),
                _ => "Fill in the required fields to continue".to_string(),
            });
        }
    }

    /// Feed a key to the focused text input and record the edit
    fn edit_focused_field(
        state: &mut WizardScreen,
        key: KeyEvent,
        tasks: &mut BackgroundTasks<AppEvent>,
        services: &Services,
    ) {
        let Focus::Field(field) = state.focus else {
            return;
        };

        let input = state.inputs.get_mut(field);
        let before = input.value().to_string();
        input.handle_event(&Event::Key(key));
        let after = input.value().to_string();
        if before == after {
            return;
        }

        match state.wizard.set_field(field, after) {
            Some(request) => {
                state.suggestion_index = None;
                tasks.spawn_lookup(services.locations.clone(), request);
            }
            None if field == FormField::Location => {
                state.suggestion_index = None;
                tasks.cancel_lookup();
            }
            None => {}
        }
    }

    fn handle_background(&mut self, event: OnboardingEvent) -> Option<ScreenTransition> {
        match event {
            OnboardingEvent::IntakeReady { description } => match self.screen {
                ScreenState::Intake(ref mut state) => {
                    state.intake.finish_submit();
                    Some(ScreenTransition::EnterWizard(description))
                }
                ScreenState::Wizard(_) => None,
            },
            OnboardingEvent::SuggestionsReady { request, suggestions } => {
                if let ScreenState::Wizard(ref mut state) = self.screen {
                    if request.session == state.wizard.session()
                        && state.wizard.apply_suggestions(request, suggestions)
                    {
                        state.suggestion_index = None;
                    }
                }
                None
            }
            OnboardingEvent::WebsiteGenerated { ticket, url } => {
                if let ScreenState::Wizard(ref mut state) = self.screen {
                    state.wizard.record_website(ticket, url);
                }
                None
            }
            OnboardingEvent::ConfirmationSent { ticket } => {
                if let ScreenState::Wizard(ref mut state) = self.screen {
                    if state.wizard.complete_generation(ticket) {
                        state.reset_focus();
                    }
                }
                None
            }
        }
    }
}
