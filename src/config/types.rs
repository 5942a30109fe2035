use serde::{Deserialize, Serialize};

use crate::onboarding::intake::Language;

/// Cities offered by the location lookup when no list is configured
pub const DEFAULT_CITIES: [&str; 8] = [
    "Hyderabad, Telangana",
    "Bangalore, Karnataka",
    "Chennai, Tamil Nadu",
    "Mumbai, Maharashtra",
    "Delhi",
    "Kolkata, West Bengal",
    "Pune, Maharashtra",
    "Ahmedabad, Gujarat",
];

pub const DEFAULT_BASE_URL: &str = "https://voicesite.in";

/// Root configuration file structure (config.yaml)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Address the generated site slug is appended to
    pub base_url: String,

    /// Location lookups fire only when the query is longer than this
    pub min_query_len: usize,

    /// Simulated latency of a location lookup
    pub lookup_delay_ms: u64,

    /// Simulated latency between "Get Started" and the wizard
    pub intake_delay_ms: u64,

    /// Simulated website generation time
    pub generation_delay_ms: u64,

    /// Simulated confirmation e-mail dispatch time
    pub email_delay_ms: u64,

    /// Candidate locations, in display order
    pub cities: Vec<String>,

    /// Language preselected on the intake screen
    pub default_language: Language,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            min_query_len: 2,
            lookup_delay_ms: 300,
            intake_delay_ms: 1000,
            generation_delay_ms: 2000,
            email_delay_ms: 1500,
            cities: DEFAULT_CITIES.iter().map(|c| c.to_string()).collect(),
            default_language: Language::default(),
        }
    }
}
