//! Website generation and confirmation e-mail, both simulated

use async_trait::async_trait;
use std::time::Duration;
use tracing::info;

/// Lowercase the name and collapse each whitespace run into one hyphen.
///
/// Leading and trailing whitespace runs become hyphens too.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_space = false;
    for ch in name.chars() {
        if ch.is_whitespace() {
            if !in_space {
                slug.push('-');
                in_space = true;
            }
        } else {
            slug.extend(ch.to_lowercase());
            in_space = false;
        }
    }
    slug
}

/// Address of the generated site
pub fn website_url(base_url: &str, business_name: &str) -> String {
    format!("{}/{}", base_url, slugify(business_name))
}

/// Authorises the single generation run of one wizard session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GenerationTicket {
    pub session: u64,
}

/// Inputs captured when generation starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub ticket: GenerationTicket,
    pub business_name: String,
    pub email: String,
}

/// Publishes a site and notifies its owner
#[async_trait]
pub trait SitePublisher: Send + Sync {
    /// Build the site and return its address
    async fn generate(&self, business_name: &str) -> String;

    /// Send the owner their site details
    async fn send_confirmation(&self, email: &str, url: &str);
}

/// Waits fixed delays instead of doing real work
pub struct SimulatedPublisher {
    base_url: String,
    generation_delay: Duration,
    email_delay: Duration,
}

impl SimulatedPublisher {
    pub fn new(base_url: impl Into<String>, generation_delay: Duration, email_delay: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            generation_delay,
            email_delay,
        }
    }
}

#[async_trait]
impl SitePublisher for SimulatedPublisher {
    async fn generate(&self, business_name: &str) -> String {
        tokio::time::sleep(self.generation_delay).await;
        website_url(&self.base_url, business_name)
    }

    async fn send_confirmation(&self, email: &str, url: &str) {
        tokio::time::sleep(self.email_delay).await;
        info!(email = %email, url = %url, "Confirmation e-mail simulated");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Ramu Fruit Stall"), "ramu-fruit-stall");
        assert_eq!(slugify("Priya   Beauty\tParlor"), "priya-beauty-parlor");
        assert_eq!(slugify("KIRANA"), "kirana");
        assert_eq!(slugify(" Lead"), "-lead");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_website_url() {
        assert_eq!(
            website_url("https://voicesite.in", "Ramu Fruit Stall"),
            "https://voicesite.in/ramu-fruit-stall"
        );
        // Unreachable through the wizard, but well defined
        assert_eq!(website_url("https://voicesite.in", ""), "https://voicesite.in/");
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_publisher_delays() {
        let publisher = SimulatedPublisher::new(
            "https://voicesite.in",
            Duration::from_millis(2000),
            Duration::from_millis(1500),
        );
        let start = tokio::time::Instant::now();
        let url = publisher.generate("Ramu Fruit Stall").await;
        assert_eq!(url, "https://voicesite.in/ramu-fruit-stall");
        assert!(start.elapsed() >= Duration::from_millis(2000));

        publisher.send_confirmation("ramu@example.com", &url).await;
        assert!(start.elapsed() >= Duration::from_millis(3500));
    }
}
