use anyhow::{anyhow, Result};
use scraper::Selector;

/// Parses a CSS selector, turning scraper's borrowed error into an owned one.
pub fn parse_selector(selectors: &str) -> Result<Selector> {
    Selector::parse(selectors).map_err(|e| anyhow!("Invalid selector '{}': {:?}", selectors, e))
}
