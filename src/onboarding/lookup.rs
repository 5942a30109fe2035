//! Location autocomplete

use async_trait::async_trait;
use std::time::Duration;

/// Identifies one lookup so late responses can be recognised as stale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId {
    pub session: u64,
    pub seq: u64,
}

/// A lookup the wizard wants performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub id: RequestId,
    pub query: String,
}

/// Fixed list of known locations
#[derive(Debug, Clone)]
pub struct LocationDirectory {
    cities: Vec<String>,
}

impl LocationDirectory {
    pub fn new(cities: Vec<String>) -> Self {
        Self { cities }
    }

    /// Case-insensitive substring match, in list order
    pub fn search(&self, query: &str) -> Vec<String> {
        let needle = query.to_lowercase();
        self.cities
            .iter()
            .filter(|city| city.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}

/// Whether a location value is long enough to look up
pub fn should_lookup(query: &str, min_query_len: usize) -> bool {
    query.chars().count() > min_query_len
}

/// Source of location suggestions
#[async_trait]
pub trait LocationSource: Send + Sync {
    async fn suggest(&self, query: &str) -> Vec<String>;
}

/// Answers from a [`LocationDirectory`] after a fixed latency
pub struct SimulatedLocationSource {
    directory: LocationDirectory,
    latency: Duration,
}

impl SimulatedLocationSource {
    pub fn new(directory: LocationDirectory, latency: Duration) -> Self {
        Self { directory, latency }
    }
}

#[async_trait]
impl LocationSource for SimulatedLocationSource {
    async fn suggest(&self, query: &str) -> Vec<String> {
        tokio::time::sleep(self.latency).await;
        self.directory.search(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::DEFAULT_CITIES;
    use pretty_assertions::assert_eq;

    fn directory() -> LocationDirectory {
        LocationDirectory::new(DEFAULT_CITIES.iter().map(|c| c.to_string()).collect())
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let dir = directory();
        assert_eq!(dir.search("hyd"), vec!["Hyderabad, Telangana"]);
        assert_eq!(dir.search("HYD"), vec!["Hyderabad, Telangana"]);
        assert_eq!(
            dir.search("maha"),
            vec!["Mumbai, Maharashtra", "Pune, Maharashtra"]
        );
        assert!(dir.search("xyz").is_empty());
    }

    #[test]
    fn test_search_matches_filter_for_every_query() {
        let dir = directory();
        for query in ["del", "nadu", "a, ", "Karnataka", "ne,", "bad"] {
            let expected: Vec<String> = DEFAULT_CITIES
                .iter()
                .filter(|c| c.to_lowercase().contains(&query.to_lowercase()))
                .map(|c| c.to_string())
                .collect();
            assert_eq!(dir.search(query), expected, "query {:?}", query);
        }
    }

    #[test]
    fn test_should_lookup_threshold() {
        assert!(!should_lookup("", 2));
        assert!(!should_lookup("Hy", 2));
        assert!(should_lookup("Hyd", 2));
        // Counted in characters, not bytes
        assert!(!should_lookup("हि", 2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_source_waits_latency() {
        let source = SimulatedLocationSource::new(directory(), Duration::from_millis(300));
        let start = tokio::time::Instant::now();
        let result = source.suggest("pune").await;
        assert_eq!(result, vec!["Pune, Maharashtra"]);
        assert!(start.elapsed() >= Duration::from_millis(300));
    }
}
