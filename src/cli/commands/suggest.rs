use super::CommandHandler;
use crate::config::SiteConfig;
use crate::onboarding::lookup::{should_lookup, LocationDirectory};
use crate::Result;

/// Handler for the `suggest` command
pub struct SuggestCommand {
    pub query: String,
    directory: LocationDirectory,
    min_query_len: usize,
}

impl SuggestCommand {
    pub fn new(query: String, config: &SiteConfig) -> Self {
        Self {
            query,
            directory: LocationDirectory::new(config.cities.clone()),
            min_query_len: config.min_query_len,
        }
    }

    /// Suggestions the wizard would show for this query
    pub fn suggestions(&self) -> Vec<String> {
        if !should_lookup(&self.query, self.min_query_len) {
            return Vec::new();
        }
        self.directory.search(&self.query)
    }
}

impl CommandHandler for SuggestCommand {
    fn execute(&self) -> Result<()> {
        if !should_lookup(&self.query, self.min_query_len) {
            eprintln!(
                "Type more than {} characters to get suggestions.",
                self.min_query_len
            );
            return Ok(());
        }

        for city in self.suggestions() {
            println!("{}", city);
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "suggest"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestions_respect_threshold() {
        let config = SiteConfig::default();
        assert!(SuggestCommand::new("Hy".into(), &config).suggestions().is_empty());
        assert_eq!(
            SuggestCommand::new("Hyd".into(), &config).suggestions(),
            vec!["Hyderabad, Telangana"]
        );
    }

    #[test]
    fn test_suggestions_use_configured_cities() {
        let config = SiteConfig {
            cities: vec!["Mysuru, Karnataka".into(), "Madurai, Tamil Nadu".into()],
            ..SiteConfig::default()
        };
        assert_eq!(
            SuggestCommand::new("kar".into(), &config).suggestions(),
            vec!["Mysuru, Karnataka"]
        );
    }
}
