use super::CommandHandler;
use crate::onboarding::generation::website_url;
use crate::Result;

/// Handler for the `url` command
pub struct UrlCommand {
    pub business_name: String,
    base_url: String,
}

impl UrlCommand {
    pub fn new(words: Vec<String>, base_url: impl Into<String>) -> Self {
        Self {
            business_name: words.join(" "),
            base_url: base_url.into(),
        }
    }

    pub fn url(&self) -> String {
        website_url(&self.base_url, &self.business_name)
    }
}

impl CommandHandler for UrlCommand {
    fn execute(&self) -> Result<()> {
        println!("{}", self.url());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "url"
    }
}
