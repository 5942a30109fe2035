//! Onboarding flow: intake, the five-step wizard, and the simulated
//! services behind it. Nothing here touches the terminal.
pub mod form;
pub mod generation;
pub mod intake;
pub mod lookup;
pub mod step;
pub mod tasks;
pub mod wizard;

use std::sync::Arc;
use std::time::Duration;

use crate::config::SiteConfig;
use generation::{SimulatedPublisher, SitePublisher};
use lookup::{LocationDirectory, LocationSource, SimulatedLocationSource};

pub use form::{BusinessType, FormField, FormState};
pub use intake::{IntakeState, IntakeTab, Language};
pub use step::Step;
pub use tasks::{BackgroundTasks, OnboardingEvent};
pub use wizard::{Wizard, WizardState};

/// Services the screens call into
#[derive(Clone)]
pub struct Services {
    pub locations: Arc<dyn LocationSource>,
    pub publisher: Arc<dyn SitePublisher>,
    pub intake_delay: Duration,
    pub min_query_len: usize,
}

impl Services {
    /// Local simulations driven by the configured delays
    pub fn simulated(config: &SiteConfig) -> Self {
        let directory = LocationDirectory::new(config.cities.clone());
        Self {
            locations: Arc::new(SimulatedLocationSource::new(
                directory,
                Duration::from_millis(config.lookup_delay_ms),
            )),
            publisher: Arc::new(SimulatedPublisher::new(
                config.base_url.clone(),
                Duration::from_millis(config.generation_delay_ms),
                Duration::from_millis(config.email_delay_ms),
            )),
            intake_delay: Duration::from_millis(config.intake_delay_ms),
            min_query_len: config.min_query_len,
        }
    }
}
