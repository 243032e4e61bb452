use serde::{Deserialize, Serialize};

/// One review block scraped from a listing page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    /// Percentage rating, always within 0..=100
    pub rating: u8,
    pub text: String,
    /// 1-based index of the listing page the review came from
    pub page: u32,
}

/// A review that mentioned the requested amenity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnnotatedReview {
    pub review: Review,
    /// The matched sentence, lowercased and trimmed
    pub excerpt: String,
    pub sentiment: Option<f64>,
}

impl AnnotatedReview {
    pub fn new(review: Review, excerpt: String) -> Self {
        Self {
            review,
            excerpt,
            sentiment: None,
        }
    }
}

/// A scored excerpt used for the best and worst picks
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredPhrase {
    pub num: f64,
    pub phrase: String,
}

/// The excerpt sharing the most substrings with the top phrase words
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommonPhrase {
    pub phrase: String,
    pub num: i64,
}

impl Default for CommonPhrase {
    fn default() -> Self {
        Self {
            phrase: String::new(),
            num: -1,
        }
    }
}

/// Aggregate result of analysing one hostel for one amenity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    pub phrase_words: Vec<(String, usize)>,
    pub hotel_avg: f64,
    pub key_avg: f64,
    pub num: usize,
    pub mean: f64,
    pub positive: usize,
    pub negative: usize,
    pub zero: usize,
    pub max_val: ScoredPhrase,
    pub min_val: ScoredPhrase,
    pub common_phrase: CommonPhrase,
}
