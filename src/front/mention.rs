use crate::analysis::AmenityLexicon;
use crate::error::{AnalysisError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

const SHORT_LINK_PREFIX: &str = "https://t.co";
const REVIEW_SITE: &str = "hostelworld.com";

/// A message addressed to the bot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Mention {
    pub id: u64,
    pub screen_name: String,
    pub text: String,
}

impl Mention {
    pub fn handle(&self) -> String {
        format!("@{}", self.screen_name)
    }
}

/// First amenity named anywhere in a word of `text`, checked word by word
pub fn find_keyword<'a>(text: &str, lexicon: &'a AmenityLexicon) -> Option<&'a str> {
    text.split_whitespace().find_map(|word| {
        let word = word.to_lowercase();
        lexicon.names().find(|name| word.contains(name))
    })
}

/// First shortened link in `text`
pub fn find_link(text: &str) -> Option<&str> {
    text.split_whitespace()
        .find(|word| word.contains(SHORT_LINK_PREFIX))
}

/// Normalise a hostel page URL to the base its review pages hang off
pub fn canonical_review_url(url: &str) -> Result<String> {
    if !url.contains(REVIEW_SITE) {
        return Err(AnalysisError::InvalidUrl {
            url: url.to_string(),
            reason: format!("not a {} link", REVIEW_SITE),
        });
    }

    let mut url = url.to_string();
    if !url.contains("www") {
        url = url.replace("t.hostelworld.com", "www.hostelworld.com");
    }
    let path = url.split('?').next().unwrap_or_default();
    Ok(format!("{}/reviews/", path))
}

/// Turns a shortened link into the address it redirects to
#[async_trait]
pub trait LinkResolver: Send + Sync {
    async fn resolve(&self, link: &str) -> Result<String>;
}

pub struct HttpLinkResolver {
    client: Client,
}

impl HttpLinkResolver {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LinkResolver for HttpLinkResolver {
    async fn resolve(&self, link: &str) -> Result<String> {
        let response = self
            .client
            .get(link)
            .send()
            .await
            .map_err(|source| AnalysisError::Fetch {
                url: link.to_string(),
                source,
            })?;
        let resolved = response.url().to_string();
        debug!("Resolved {} -> {}", link, resolved);
        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn keyword_is_found_inside_words() {
        let lexicon = AmenityLexicon::default();
        assert_eq!(find_keyword("@bot how is the #WiFi here?", &lexicon), Some("wifi"));
        assert_eq!(find_keyword("showers or breakfast?", &lexicon), Some("shower"));
        assert_eq!(find_keyword("how are the beds", &lexicon), None);
    }

    #[test]
    fn keyword_order_follows_the_table_within_a_word() {
        let lexicon = AmenityLexicon::default();
        assert_eq!(find_keyword("breakfast+wifi", &lexicon), Some("wifi"));
    }

    #[test]
    fn finds_first_short_link() {
        let text = "@bot wifi at https://t.co/abc and https://t.co/def";
        assert_eq!(find_link(text), Some("https://t.co/abc"));
        assert_eq!(find_link("@bot wifi please"), None);
    }

    #[test]
    fn canonicalises_hostel_links() {
        assert_eq!(
            canonical_review_url(
                "https://t.hostelworld.com/hosteldetails.php/Sunny/Lisbon/42?source=tw"
            )
            .unwrap(),
            "https://www.hostelworld.com/hosteldetails.php/Sunny/Lisbon/42/reviews/"
        );
        assert_eq!(
            canonical_review_url("https://www.hostelworld.com/hosteldetails.php/Sunny/Lisbon/42")
                .unwrap(),
            "https://www.hostelworld.com/hosteldetails.php/Sunny/Lisbon/42/reviews/"
        );
    }

    #[test]
    fn rejects_other_sites() {
        let err = canonical_review_url("https://example.com/hostel/1").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidUrl);
    }

    #[test]
    fn handle_prefixes_at_sign() {
        let mention = Mention {
            id: 1,
            screen_name: "traveller".into(),
            text: String::new(),
        };
        assert_eq!(mention.handle(), "@traveller");
    }
}
