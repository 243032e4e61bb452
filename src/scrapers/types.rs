use serde::{Deserialize, Serialize};
use tracing::warn;

/// Tunables for scraping one hostel's review pages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeParams {
    /// Upper bound on listing pages fetched per hostel
    pub max_pages: u32,
    /// Reviews the site shows on one listing page
    pub reviews_per_page: u32,
    /// Appended after the page number of every listing URL
    pub query_suffix: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for ScrapeParams {
    fn default() -> Self {
        Self {
            max_pages: 25,
            reviews_per_page: 20,
            query_suffix: "?period=all".to_string(),
            timeout_secs: 30,
            user_agent: "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string(),
        }
    }
}

impl ScrapeParams {
    /// Defaults overlaid with `HOSTEL_*` environment variables
    pub fn from_env() -> Self {
        let mut params = Self::default();
        if let Some(max_pages) = env_value("HOSTEL_MAX_PAGES") {
            params.max_pages = max_pages;
        }
        if let Some(timeout) = env_value("HOSTEL_TIMEOUT_SECS") {
            params.timeout_secs = timeout;
        }
        if let Ok(agent) = std::env::var("HOSTEL_USER_AGENT") {
            if !agent.trim().is_empty() {
                params.user_agent = agent;
            }
        }
        params
    }

    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// URL of listing page `page` below `base_url`
    pub fn page_url(&self, base_url: &str, page: u32) -> String {
        format!("{}{}{}", base_url, page, self.query_suffix)
    }
}

fn env_value<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring {}={:?}: not a valid number", key, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_url_appends_number_and_period() {
        let params = ScrapeParams::default();
        let base = "https://www.hostelworld.com/hosteldetails.php/Foo/Lisbon/123/reviews/";
        assert_eq!(
            params.page_url(base, 3),
            "https://www.hostelworld.com/hosteldetails.php/Foo/Lisbon/123/reviews/3?period=all"
        );
    }

    #[test]
    fn env_overrides_defaults_and_skips_bad_numbers() {
        std::env::set_var("HOSTEL_MAX_PAGES", "7");
        std::env::set_var("HOSTEL_TIMEOUT_SECS", "soon");
        std::env::set_var("HOSTEL_USER_AGENT", "hostel-scout-test");
        let params = ScrapeParams::from_env();
        std::env::remove_var("HOSTEL_MAX_PAGES");
        std::env::remove_var("HOSTEL_TIMEOUT_SECS");
        std::env::remove_var("HOSTEL_USER_AGENT");

        assert_eq!(params.max_pages, 7);
        assert_eq!(params.timeout_secs, 30);
        assert_eq!(params.user_agent, "hostel-scout-test");
    }

    #[test]
    fn defaults_cap_at_twenty_five_pages() {
        let params = ScrapeParams::default();
        assert_eq!(params.max_pages, 25);
        assert_eq!(params.reviews_per_page, 20);
        assert_eq!(params.with_max_pages(4).max_pages, 4);
    }
}
