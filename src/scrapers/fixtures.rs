//! Canned listing pages and an in-memory page source for tests.

use crate::error::{AnalysisError, Result};
use crate::scrapers::traits::PageSource;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// Listing page markup in the shape the live site serves
pub fn listing_page(total: u32, reviews: &[(u8, &str)]) -> String {
    let blocks: String = reviews
        .iter()
        .map(|(rating, text)| {
            format!(
                r#"<div class="microreviews rounded">
  <div class="reviewer">Traveller</div>
  <div class="score">{}%</div>
  <div class="reviewtext"><p>{}</p></div>
</div>
"#,
                rating, text
            )
        })
        .collect();

    format!(
        r#"<html><body>
<div class="header"><div class="results">Reviews({}) </div></div>
{}
</body></html>"#,
        total, blocks
    )
}

/// Serves pages from memory and remembers what was asked for
#[derive(Default)]
pub struct FixtureSource {
    pages: HashMap<String, String>,
    requested: Mutex<Vec<String>>,
}

impl FixtureSource {
    pub fn with_page(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.pages.insert(url.into(), body.into());
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl PageSource for FixtureSource {
    async fn fetch(&self, url: &str) -> Result<String> {
        if let Ok(mut requested) = self.requested.lock() {
            requested.push(url.to_string());
        }
        self.pages.get(url).cloned().ok_or_else(|| AnalysisError::Parse {
            url: url.to_string(),
            reason: "no fixture for url".to_string(),
        })
    }

    fn source_name(&self) -> &'static str {
        "fixture"
    }
}
