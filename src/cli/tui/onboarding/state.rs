use tui_input::Input;

use crate::onboarding::{FormField, IntakeState, Language, Step, Wizard};

/// Which screen is showing
#[derive(Debug)]
pub enum ScreenState {
    Intake(IntakeScreen),
    Wizard(WizardScreen),
}

impl ScreenState {
    /// Get the name of the current screen
    pub fn name(&self) -> &'static str {
        match self {
            ScreenState::Intake(_) => "Intake",
            ScreenState::Wizard(_) => "Wizard",
        }
    }

    pub fn as_wizard(&self) -> Option<&WizardScreen> {
        match self {
            ScreenState::Wizard(screen) => Some(screen),
            ScreenState::Intake(_) => None,
        }
    }

    pub fn as_intake(&self) -> Option<&IntakeScreen> {
        match self {
            ScreenState::Intake(screen) => Some(screen),
            ScreenState::Wizard(_) => None,
        }
    }
}

/// State for the intake (landing) screen
#[derive(Debug)]
pub struct IntakeScreen {
    pub intake: IntakeState,
    pub input: Input,
}

impl IntakeScreen {
    pub fn new(language: Language, description: Option<String>) -> Self {
        let mut intake = IntakeState::new(language);
        let input = match description {
            Some(text) => {
                intake.toggle_tab();
                intake.set_description(text.clone());
                Input::new(text)
            }
            None => Input::default(),
        };
        Self { intake, input }
    }
}

/// Element that receives keystrokes on a wizard step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FormField),
    BusinessType,
    None,
}

impl Focus {
    /// Focus order for a step
    pub fn order(step: Step) -> &'static [Focus] {
        match step {
            Step::Location => &[Focus::Field(FormField::Location)],
            Step::BusinessDetails => &[Focus::Field(FormField::BusinessName), Focus::BusinessType],
            Step::Products => &[Focus::Field(FormField::Products)],
            Step::ContactInfo => &[Focus::Field(FormField::Contact), Focus::Field(FormField::Email)],
            Step::CreateWebsite => &[Focus::None],
        }
    }
}

/// Text inputs backing each form field
#[derive(Debug, Default)]
pub struct FieldInputs {
    pub location: Input,
    pub business_name: Input,
    pub products: Input,
    pub contact: Input,
    pub email: Input,
}

impl FieldInputs {
    pub fn get(&self, field: FormField) -> &Input {
        match field {
            FormField::Location => &self.location,
            FormField::BusinessName => &self.business_name,
            FormField::Products => &self.products,
            FormField::Contact => &self.contact,
            FormField::Email => &self.email,
        }
    }

    pub fn get_mut(&mut self, field: FormField) -> &mut Input {
        match field {
            FormField::Location => &mut self.location,
            FormField::BusinessName => &mut self.business_name,
            FormField::Products => &mut self.products,
            FormField::Contact => &mut self.contact,
            FormField::Email => &mut self.email,
        }
    }
}

/// State for the wizard screen
#[derive(Debug)]
pub struct WizardScreen {
    pub wizard: Wizard,
    pub inputs: FieldInputs,
    pub focus: Focus,
    /// Highlighted row in the suggestion list. `None` keeps the typed text.
    pub suggestion_index: Option<usize>,
    /// One-line feedback shown above the help bar
    pub status: Option<String>,
}

impl WizardScreen {
    pub fn new(wizard: Wizard) -> Self {
        Self {
            wizard,
            inputs: FieldInputs::default(),
            focus: Focus::Field(FormField::Location),
            suggestion_index: None,
            status: None,
        }
    }

    /// Put focus on the first element of the current step
    pub fn reset_focus(&mut self) {
        self.focus = Focus::order(self.wizard.current_step())[0];
        self.suggestion_index = None;
    }

    /// Move the suggestion highlight. Moving up from the first row returns
    /// to the input.
    pub fn move_highlight(&mut self, down: bool) {
        let count = self.wizard.state().location_suggestions.len();
        if count == 0 {
            self.suggestion_index = None;
            return;
        }
        self.suggestion_index = match (self.suggestion_index, down) {
            (None, true) => Some(0),
            (None, false) => Some(count - 1),
            (Some(idx), true) => Some((idx + 1) % count),
            (Some(0), false) => None,
            (Some(idx), false) => Some(idx.min(count) - 1),
        };
    }

    /// Cycle focus within the current step
    pub fn cycle_focus(&mut self, forward: bool) {
        let order = Focus::order(self.wizard.current_step());
        let idx = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = if forward {
            (idx + 1) % order.len()
        } else {
            (idx + order.len() - 1) % order.len()
        };
        self.focus = order[next];
    }

    /// Keep the input showing the selected suggestion
    pub fn sync_location_input(&mut self) {
        let location = self.wizard.form().location.clone();
        if self.inputs.location.value() != location {
            self.inputs.location = Input::new(location);
        }
    }
}
