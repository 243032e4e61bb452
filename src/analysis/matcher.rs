use crate::analysis::lexicon::Amenity;
use crate::models::{AnnotatedReview, Review};

pub const SENTENCE_DELIMITERS: [char; 5] = [',', '.', ';', '!', '?'];

/// First sentence-like segment of `text` holding a synonym of `amenity`,
/// lowercased and trimmed. Segment order wins, then word order.
pub fn key_sentence(text: &str, delimiters: &[char], amenity: &Amenity) -> Option<String> {
    text.split(|c: char| delimiters.contains(&c))
        .find(|segment| {
            segment
                .split_whitespace()
                .any(|word| amenity.has_synonym(&word.to_lowercase()))
        })
        .map(|segment| segment.to_lowercase().trim().to_string())
}

/// Reviews that mention the amenity, with their matched sentence
pub fn annotate(reviews: &[Review], amenity: &Amenity) -> Vec<AnnotatedReview> {
    reviews
        .iter()
        .filter_map(|review| {
            key_sentence(&review.text, &SENTENCE_DELIMITERS, amenity)
                .map(|excerpt| AnnotatedReview::new(review.clone(), excerpt))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wifi() -> Amenity {
        Amenity::new("wifi", &["wifi"])
    }

    #[test]
    fn first_matching_segment_wins() {
        let breakfast = Amenity::new("breakfast", &["breakfast"]);
        let text = "Great wifi! Bad breakfast.";
        assert_eq!(
            key_sentence(text, &SENTENCE_DELIMITERS, &wifi()).as_deref(),
            Some("great wifi")
        );
        assert_eq!(
            key_sentence(text, &SENTENCE_DELIMITERS, &breakfast).as_deref(),
            Some("bad breakfast")
        );
    }

    #[test]
    fn absent_synonym_gives_none() {
        let shower = Amenity::new("shower", &["shower", "showers"]);
        assert_eq!(
            key_sentence("Great wifi! Bad breakfast.", &SENTENCE_DELIMITERS, &shower),
            None
        );
    }

    #[test]
    fn matching_ignores_case_but_needs_whole_words() {
        assert_eq!(
            key_sentence("The WIFI was down; staff were kind", &SENTENCE_DELIMITERS, &wifi())
                .as_deref(),
            Some("the wifi was down")
        );
        assert_eq!(key_sentence("wifi-only lounge", &SENTENCE_DELIMITERS, &wifi()), None);
    }

    #[test]
    fn multi_word_synonyms_never_match_a_single_token() {
        let wifi = Amenity::new("wifi", &["wi fi"]);
        assert_eq!(key_sentence("The wi fi was slow", &SENTENCE_DELIMITERS, &wifi), None);
    }

    #[test]
    fn annotate_drops_reviews_without_a_match() {
        let reviews = vec![
            Review {
                rating: 90,
                text: "Fast wifi, nice bar".into(),
                page: 1,
            },
            Review {
                rating: 40,
                text: "Dirty rooms".into(),
                page: 1,
            },
            Review {
                rating: 70,
                text: "Ok. Wifi was slow".into(),
                page: 2,
            },
        ];
        let annotated = annotate(&reviews, &wifi());
        assert_eq!(annotated.len(), 2);
        assert_eq!(annotated[0].excerpt, "fast wifi");
        assert_eq!(annotated[1].excerpt, "wifi was slow");
        assert_eq!(annotated[1].review.page, 2);
        assert!(annotated.iter().all(|r| r.sentiment.is_none()));
    }
}
