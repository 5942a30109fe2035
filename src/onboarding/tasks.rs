//! Background work for the onboarding screens
//!
//! Every simulated delay runs as a spawned task that reports back through
//! the UI's event channel. Handles are kept so a newer request, or dropping
//! the owning screen, aborts whatever is still pending.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use super::generation::{GenerationRequest, GenerationTicket, SitePublisher};
use super::lookup::{LocationSource, LookupRequest, RequestId};

/// Results delivered by background tasks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OnboardingEvent {
    /// Intake delay elapsed, mount the wizard
    IntakeReady { description: String },
    SuggestionsReady {
        request: RequestId,
        suggestions: Vec<String>,
    },
    WebsiteGenerated {
        ticket: GenerationTicket,
        url: String,
    },
    ConfirmationSent { ticket: GenerationTicket },
}

/// Owns the in-flight tasks of one screen
pub struct BackgroundTasks<E> {
    tx: UnboundedSender<E>,
    intake: Option<JoinHandle<()>>,
    lookup: Option<JoinHandle<()>>,
    generation: Option<JoinHandle<()>>,
}

impl<E> BackgroundTasks<E>
where
    E: From<OnboardingEvent> + Send + 'static,
{
    pub fn new(tx: UnboundedSender<E>) -> Self {
        Self {
            tx,
            intake: None,
            lookup: None,
            generation: None,
        }
    }

    /// Wait out the intake delay, then hand over the description
    pub fn spawn_intake(&mut self, delay: Duration, description: String) {
        abort(self.intake.take());
        let tx = self.tx.clone();
        self.intake = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(OnboardingEvent::IntakeReady { description }.into());
        }));
    }

    /// Start a lookup, aborting the previous one
    pub fn spawn_lookup(&mut self, source: Arc<dyn LocationSource>, request: LookupRequest) {
        self.cancel_lookup();
        let tx = self.tx.clone();
        trace!(seq = request.id.seq, query = %request.query, "Spawning location lookup");
        self.lookup = Some(tokio::spawn(async move {
            let suggestions = source.suggest(&request.query).await;
            let _ = tx.send(
                OnboardingEvent::SuggestionsReady {
                    request: request.id,
                    suggestions,
                }
                .into(),
            );
        }));
    }

    /// Generate the site, then send the confirmation
    pub fn spawn_generation(&mut self, publisher: Arc<dyn SitePublisher>, request: GenerationRequest) {
        abort(self.generation.take());
        let tx = self.tx.clone();
        self.generation = Some(tokio::spawn(async move {
            let ticket = request.ticket;
            let url = publisher.generate(&request.business_name).await;
            let _ = tx.send(
                OnboardingEvent::WebsiteGenerated {
                    ticket,
                    url: url.clone(),
                }
                .into(),
            );
            publisher.send_confirmation(&request.email, &url).await;
            let _ = tx.send(OnboardingEvent::ConfirmationSent { ticket }.into());
        }));
    }
}

impl<E> BackgroundTasks<E> {
    pub fn cancel_lookup(&mut self) {
        if let Some(handle) = self.lookup.take() {
            if !handle.is_finished() {
                debug!("Aborting in-flight location lookup");
            }
            handle.abort();
        }
    }

    pub fn abort_all(&mut self) {
        abort(self.intake.take());
        abort(self.lookup.take());
        abort(self.generation.take());
    }
}

impl<E> Drop for BackgroundTasks<E> {
    fn drop(&mut self) {
        self.abort_all();
    }
}

fn abort(handle: Option<JoinHandle<()>>) {
    if let Some(handle) = handle {
        handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::onboarding::Services;
    use tokio::sync::mpsc::unbounded_channel;

    #[tokio::test(start_paused = true)]
    async fn test_intake_event_after_delay() {
        let (tx, mut rx) = unbounded_channel::<OnboardingEvent>();
        let mut tasks = BackgroundTasks::new(tx);
        tasks.spawn_intake(Duration::from_millis(1000), "fruit".to_string());

        let event = rx.recv().await.unwrap();
        assert_eq!(
            event,
            OnboardingEvent::IntakeReady {
                description: "fruit".to_string()
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_lookup_aborts_previous() {
        let services = Services::simulated(&SiteConfig::default());
        let (tx, mut rx) = unbounded_channel::<OnboardingEvent>();
        let mut tasks = BackgroundTasks::new(tx);

        let first = RequestId { session: 1, seq: 1 };
        let second = RequestId { session: 1, seq: 2 };
        tasks.spawn_lookup(
            services.locations.clone(),
            LookupRequest { id: first, query: "Pun".into() },
        );
        tasks.spawn_lookup(
            services.locations.clone(),
            LookupRequest { id: second, query: "Mum".into() },
        );

        match rx.recv().await.unwrap() {
            OnboardingEvent::SuggestionsReady { request, suggestions } => {
                assert_eq!(request, second);
                assert_eq!(suggestions, vec!["Mumbai, Maharashtra"]);
            }
            other => panic!("unexpected event {:?}", other),
        }

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_generation_events_in_order() {
        let services = Services::simulated(&SiteConfig::default());
        let (tx, mut rx) = unbounded_channel::<OnboardingEvent>();
        let mut tasks = BackgroundTasks::new(tx);
        let ticket = GenerationTicket { session: 3 };

        tasks.spawn_generation(
            services.publisher.clone(),
            GenerationRequest {
                ticket,
                business_name: "Ramu Fruit Stall".into(),
                email: "ramu@example.com".into(),
            },
        );

        assert_eq!(
            rx.recv().await.unwrap(),
            OnboardingEvent::WebsiteGenerated {
                ticket,
                url: "https://voicesite.in/ramu-fruit-stall".into()
            }
        );
        assert_eq!(
            rx.recv().await.unwrap(),
            OnboardingEvent::ConfirmationSent { ticket }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts_pending_tasks() {
        let (tx, mut rx) = unbounded_channel::<OnboardingEvent>();
        let mut tasks = BackgroundTasks::new(tx);
        tasks.spawn_intake(Duration::from_millis(1000), String::new());
        drop(tasks);

        // Every sender is gone once the aborted task is torn down
        assert_eq!(rx.recv().await, None);
    }
}
