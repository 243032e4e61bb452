use crate::error::{AnalysisError, Result};
use crate::models::{AnnotatedReview, CommonPhrase, Review, ScoredPhrase, Summary};

/// Build the summary for one amenity.
///
/// `reviews` is every review of the hostel, `matched` the ones whose text
/// mentioned the amenity. An excerpt that was never scored counts as neutral.
pub fn summarize(
    reviews: &[Review],
    matched: &[AnnotatedReview],
    keyword: &str,
    phrase_words: Vec<(String, usize)>,
) -> Result<Summary> {
    if matched.is_empty() {
        return Err(AnalysisError::NoMatch {
            keyword: keyword.to_string(),
        });
    }

    let scores: Vec<f64> = matched
        .iter()
        .map(|r| r.sentiment.unwrap_or_default())
        .collect();

    let best = extreme(&scores, |candidate, current| candidate > current);
    let worst = extreme(&scores, |candidate, current| candidate < current);

    let words: Vec<&str> = phrase_words.iter().map(|(w, _)| w.as_str()).collect();
    let common_phrase = common_phrase(matched, &words);

    Ok(Summary {
        hotel_avg: mean(reviews.iter().map(|r| f64::from(r.rating))),
        key_avg: mean(matched.iter().map(|r| f64::from(r.review.rating))),
        num: reviews.len(),
        mean: mean(scores.iter().copied()),
        positive: scores.iter().filter(|s| **s > 0.0).count(),
        negative: scores.iter().filter(|s| **s < 0.0).count(),
        zero: scores.iter().filter(|s| **s == 0.0).count(),
        max_val: ScoredPhrase {
            num: scores[best],
            phrase: matched[best].excerpt.clone(),
        },
        min_val: ScoredPhrase {
            num: scores[worst],
            phrase: matched[worst].excerpt.clone(),
        },
        common_phrase,
        phrase_words,
    })
}

/// Index of the best score under `better`, earliest on ties
fn extreme(scores: &[f64], better: impl Fn(f64, f64) -> bool) -> usize {
    let mut pick = 0;
    for (idx, score) in scores.iter().enumerate().skip(1) {
        if better(*score, scores[pick]) {
            pick = idx;
        }
    }
    pick
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, n) = values.fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    if n == 0 {
        0.0
    } else {
        sum / n as f64
    }
}

/// Excerpt whose tokens contain the phrase words most often.
///
/// A token scores once for every phrase word it contains as a substring.
/// The running best starts at -1 and only a strictly higher count replaces
/// it, so the first zero-scoring excerpt is kept when nothing scores higher.
pub fn common_phrase(matched: &[AnnotatedReview], phrase_words: &[&str]) -> CommonPhrase {
    let mut best = CommonPhrase::default();
    for review in matched {
        let num: usize = review
            .excerpt
            .split_whitespace()
            .map(|token| phrase_words.iter().filter(|w| token.contains(**w)).count())
            .sum();
        let num = num as i64;
        if num > best.num {
            best = CommonPhrase {
                phrase: review.excerpt.clone(),
                num,
            };
        }
    }
    best
}
