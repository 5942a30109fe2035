//! Intake (landing) screen state

use serde::{Deserialize, Serialize};

/// Interface language offered on the intake screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum Language {
    #[default]
    #[serde(rename = "en-IN")]
    #[value(name = "en-IN")]
    English,
    #[serde(rename = "hi-IN")]
    #[value(name = "hi-IN")]
    Hindi,
    #[serde(rename = "te-IN")]
    #[value(name = "te-IN")]
    Telugu,
    #[serde(rename = "ta-IN")]
    #[value(name = "ta-IN")]
    Tamil,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::English,
        Language::Hindi,
        Language::Telugu,
        Language::Tamil,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en-IN",
            Language::Hindi => "hi-IN",
            Language::Telugu => "te-IN",
            Language::Tamil => "ta-IN",
        }
    }

    /// Native name
    pub fn label(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "हिंदी",
            Language::Telugu => "తెలుగు",
            Language::Tamil => "தமிழ்",
        }
    }

    pub fn next(&self) -> Language {
        let idx = Self::ALL.iter().position(|l| l == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

/// Input mode tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntakeTab {
    /// Placeholder, no speech capture happens
    #[default]
    Voice,
    Text,
}

impl IntakeTab {
    pub fn title(&self) -> &'static str {
        match self {
            IntakeTab::Voice => "Speak",
            IntakeTab::Text => "Type",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct IntakeState {
    pub language: Language,
    pub tab: IntakeTab,
    pub description: String,
    pub is_loading: bool,
}

impl IntakeState {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            ..Self::default()
        }
    }

    pub fn cycle_language(&mut self) {
        self.language = self.language.next();
    }

    pub fn toggle_tab(&mut self) {
        self.tab = match self.tab {
            IntakeTab::Voice => IntakeTab::Text,
            IntakeTab::Text => IntakeTab::Voice,
        };
    }

    /// Only the text tab accepts typed descriptions
    pub fn set_description(&mut self, value: impl Into<String>) -> bool {
        if self.tab != IntakeTab::Text || self.is_loading {
            return false;
        }
        self.description = value.into();
        true
    }

    /// "Get Started". Returns the description to hand to the wizard, or
    /// `None` while a previous submission is still loading.
    pub fn begin_submit(&mut self) -> Option<String> {
        if self.is_loading {
            return None;
        }
        self.is_loading = true;
        Some(self.description.clone())
    }

    pub fn finish_submit(&mut self) {
        self.is_loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_cycle() {
        let mut state = IntakeState::default();
        assert_eq!(state.language, Language::English);
        state.cycle_language();
        assert_eq!(state.language, Language::Hindi);
        state.cycle_language();
        state.cycle_language();
        state.cycle_language();
        assert_eq!(state.language, Language::English);
    }

    #[test]
    fn test_voice_tab_rejects_typing() {
        let mut state = IntakeState::default();
        assert_eq!(state.tab, IntakeTab::Voice);
        assert!(!state.set_description("fruit stall"));
        state.toggle_tab();
        assert!(state.set_description("fruit stall"));
        assert_eq!(state.description, "fruit stall");
    }

    #[test]
    fn test_submit_ignored_while_loading() {
        let mut state = IntakeState::default();
        state.toggle_tab();
        state.set_description("Ramu sells mangoes");
        assert_eq!(state.begin_submit().as_deref(), Some("Ramu sells mangoes"));
        assert!(state.is_loading);
        assert_eq!(state.begin_submit(), None);
        assert!(!state.set_description("changed"));
        state.finish_submit();
        assert!(!state.is_loading);
    }

    #[test]
    fn test_language_serde_codes() {
        let lang: Language = serde_yaml_ng::from_str("ta-IN").unwrap();
        assert_eq!(lang, Language::Tamil);
        assert_eq!(Language::Telugu.code(), "te-IN");
    }
}
