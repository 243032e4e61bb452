use crate::error::Result;
use async_trait::async_trait;

/// Anything that can hand back the markup of a review listing page.
/// The HTTP implementation talks to the live site, tests serve canned pages.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch the raw markup at `url`
    async fn fetch(&self, url: &str) -> Result<String>;

    /// Get the name of the page source
    fn source_name(&self) -> &'static str;
}
