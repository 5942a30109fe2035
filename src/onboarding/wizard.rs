//! Step navigation state machine
//!
//! [`Wizard`] owns one session's [`FormState`] and [`WizardState`]. Both are
//! read-only from outside; every change goes through a named transition.
//! Background results (suggestions, generation progress) are applied only
//! when they carry the id the wizard is currently waiting for.

use tracing::{debug, info};

use super::form::{BusinessType, FormField, FormState};
use super::generation::{GenerationRequest, GenerationTicket};
use super::lookup::{should_lookup, LookupRequest, RequestId};
use super::step::Step;

/// Progress of one wizard session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardState {
    pub current_step: Step,
    pub location_suggestions: Vec<String>,
    /// A location lookup is in flight
    pub is_loading: bool,
    /// Website generation is in flight
    pub is_generating: bool,
    pub website_url: Option<String>,
    pub email_sent: bool,
}

#[derive(Debug)]
pub struct Wizard {
    session: u64,
    min_query_len: usize,
    form: FormState,
    state: WizardState,
    lookup_seq: u64,
    pending_lookup: Option<RequestId>,
    generation: Option<GenerationTicket>,
}

impl Wizard {
    pub fn new(session: u64, business_description: impl Into<String>, min_query_len: usize) -> Self {
        Self {
            session,
            min_query_len,
            form: FormState::with_description(business_description),
            state: WizardState::default(),
            lookup_seq: 0,
            pending_lookup: None,
            generation: None,
        }
    }

    pub fn session(&self) -> u64 {
        self.session
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn current_step(&self) -> Step {
        self.state.current_step
    }

    /// Whether the step's required fields are filled
    pub fn can_advance(&self) -> bool {
        let form = &self.form;
        match self.state.current_step {
            Step::Location => !form.location.is_empty(),
            Step::BusinessDetails => {
                !form.business_name.is_empty() && form.business_type.is_some()
            }
            Step::Products => true,
            Step::ContactInfo => !form.contact.is_empty() && !form.email.is_empty(),
            Step::CreateWebsite => false,
        }
    }

    /// Move forward one step if the current step's gate is open
    pub fn advance(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        self.step_forward()
    }

    /// Move back one step. Refused on step 1, while generating, and once a
    /// site exists.
    pub fn retreat(&mut self) -> bool {
        if !self.can_retreat() {
            return false;
        }
        match self.state.current_step.prev() {
            Some(prev) => {
                self.state.current_step = prev;
                debug!(step = prev.number(), "Wizard retreated");
                true
            }
            None => false,
        }
    }

    pub fn can_retreat(&self) -> bool {
        self.state.current_step.prev().is_some()
            && !self.state.is_generating
            && self.state.website_url.is_none()
    }

    /// Record an edit. A location edit long enough to look up returns the
    /// lookup to run; any other edit clears suggestions.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) -> Option<LookupRequest> {
        let value = value.into();
        self.form.set(field, value.clone());

        if field == FormField::Location && should_lookup(&value, self.min_query_len) {
            self.lookup_seq += 1;
            let id = RequestId {
                session: self.session,
                seq: self.lookup_seq,
            };
            self.pending_lookup = Some(id);
            self.state.is_loading = true;
            return Some(LookupRequest { id, query: value });
        }

        self.invalidate_lookup();
        None
    }

    pub fn set_business_type(&mut self, business_type: Option<BusinessType>) {
        self.form.business_type = business_type;
        self.invalidate_lookup();
    }

    /// The lookup the wizard is waiting on, if any
    pub fn pending_lookup(&self) -> Option<RequestId> {
        self.pending_lookup
    }

    /// Apply lookup results. Stale results are dropped.
    pub fn apply_suggestions(&mut self, id: RequestId, suggestions: Vec<String>) -> bool {
        if self.pending_lookup != Some(id) {
            debug!(session = id.session, seq = id.seq, "Discarding stale location suggestions");
            return false;
        }
        self.pending_lookup = None;
        self.state.is_loading = false;
        self.state.location_suggestions = suggestions;
        true
    }

    /// Pick a suggestion. Sets the location and moves forward one step
    /// without consulting the step-1 gate.
    pub fn select_suggestion(&mut self, index: usize) -> Option<String> {
        let chosen = self.state.location_suggestions.get(index)?.clone();
        self.form.location = chosen.clone();
        self.invalidate_lookup();
        self.step_forward();
        info!(location = %chosen, "Location selected");
        Some(chosen)
    }

    /// "Create My Website". Only from step 4 with its gate open, and only
    /// once per session.
    pub fn begin_generation(&mut self) -> Option<GenerationRequest> {
        if self.state.current_step != Step::ContactInfo
            || !self.can_advance()
            || self.state.is_generating
            || self.generation.is_some()
        {
            return None;
        }

        let ticket = GenerationTicket {
            session: self.session,
        };
        self.generation = Some(ticket);
        self.state.is_generating = true;
        info!(business = %self.form.business_name, "Website generation started");

        Some(GenerationRequest {
            ticket,
            business_name: self.form.business_name.clone(),
            email: self.form.email.clone(),
        })
    }

    /// Store the generated address
    pub fn record_website(&mut self, ticket: GenerationTicket, url: impl Into<String>) -> bool {
        if !self.is_active_generation(ticket) || self.state.website_url.is_some() {
            return false;
        }
        let url = url.into();
        info!(url = %url, "Website generated");
        self.state.website_url = Some(url);
        true
    }

    /// Confirmation sent: mark the e-mail, end generation, show the result
    pub fn complete_generation(&mut self, ticket: GenerationTicket) -> bool {
        if !self.is_active_generation(ticket) || self.state.website_url.is_none() {
            return false;
        }
        self.state.email_sent = true;
        self.state.is_generating = false;
        self.step_forward();
        info!("Website generation complete");
        true
    }

    fn is_active_generation(&self, ticket: GenerationTicket) -> bool {
        self.state.is_generating && self.generation == Some(ticket)
    }

    fn step_forward(&mut self) -> bool {
        match self.state.current_step.next() {
            Some(next) => {
                if self.state.current_step == Step::Location {
                    self.invalidate_lookup();
                }
                self.state.current_step = next;
                debug!(step = next.number(), "Wizard advanced");
                true
            }
            None => false,
        }
    }

    fn invalidate_lookup(&mut self) {
        self.pending_lookup = None;
        self.state.is_loading = false;
        self.state.location_suggestions.clear();
    }
}
