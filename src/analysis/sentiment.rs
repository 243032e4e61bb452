//! Word-list polarity scoring.
//!
//! Each known word carries a polarity in `[-1, 1]`. An intensifier scales the
//! next scored word, a negation flips it and halves it. The excerpt's score
//! is the mean over the words that were scored, or `0.0` when none were.

use std::collections::{HashMap, HashSet};

const POLARITY: &[(&str, f64)] = &[
    ("good", 0.7),
    ("great", 0.8),
    ("excellent", 1.0),
    ("amazing", 0.6),
    ("awesome", 1.0),
    ("fantastic", 0.4),
    ("wonderful", 1.0),
    ("perfect", 1.0),
    ("best", 1.0),
    ("better", 0.5),
    ("nice", 0.6),
    ("lovely", 0.5),
    ("love", 0.5),
    ("loved", 0.7),
    ("beautiful", 0.85),
    ("delicious", 1.0),
    ("tasty", 0.6),
    ("fresh", 0.3),
    ("clean", 0.37),
    ("spotless", 0.8),
    ("comfortable", 0.4),
    ("cozy", 0.5),
    ("friendly", 0.375),
    ("helpful", 0.5),
    ("fast", 0.2),
    ("quick", 0.33),
    ("strong", 0.43),
    ("reliable", 0.5),
    ("free", 0.4),
    ("fine", 0.42),
    ("decent", 0.17),
    ("ok", 0.5),
    ("okay", 0.5),
    ("hot", 0.25),
    ("warm", 0.6),
    ("plenty", 0.2),
    ("easy", 0.43),
    ("happy", 0.8),
    ("fun", 0.3),
    ("cheap", 0.4),
    ("bad", -0.7),
    ("terrible", -1.0),
    ("awful", -1.0),
    ("horrible", -1.0),
    ("worst", -1.0),
    ("worse", -0.4),
    ("poor", -0.4),
    ("disgusting", -1.0),
    ("gross", -0.5),
    ("dirty", -0.6),
    ("filthy", -0.8),
    ("smelly", -0.5),
    ("slow", -0.3),
    ("weak", -0.375),
    ("spotty", -0.3),
    ("patchy", -0.3),
    ("broken", -0.4),
    ("cold", -0.6),
    ("small", -0.25),
    ("tiny", -0.3),
    ("crowded", -0.3),
    ("expensive", -0.5),
    ("limited", -0.07),
    ("annoying", -0.8),
    ("disappointing", -0.6),
    ("useless", -0.5),
    ("unreliable", -0.5),
    ("uncomfortable", -0.5),
    ("rude", -0.3),
    ("noisy", -0.1),
    ("loud", -0.2),
    ("hard", -0.3),
    ("stale", -0.5),
    ("boring", -1.0),
    ("sad", -0.5),
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.2),
    ("extremely", 1.5),
    ("super", 1.4),
    ("so", 1.2),
    ("pretty", 1.1),
    ("quite", 1.1),
    ("too", 1.2),
    ("incredibly", 1.5),
    ("slightly", 0.7),
    ("somewhat", 0.8),
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "n't", "isn't", "wasn't", "don't", "didn't", "doesn't", "aren't",
    "weren't", "hardly", "barely",
];

#[derive(Debug, Clone)]
pub struct SentimentScorer {
    polarity: HashMap<&'static str, f64>,
    intensifiers: HashMap<&'static str, f64>,
    negations: HashSet<&'static str>,
}

impl SentimentScorer {
    pub fn new() -> Self {
        Self {
            polarity: POLARITY.iter().copied().collect(),
            intensifiers: INTENSIFIERS.iter().copied().collect(),
            negations: NEGATIONS.iter().copied().collect(),
        }
    }

    /// Polarity of `text` in `[-1.0, 1.0]`
    pub fn score(&self, text: &str) -> f64 {
        let mut scored = Vec::new();
        let mut intensity = 1.0;
        let mut negated = false;

        for word in words(text) {
            if self.negations.contains(word.as_str()) {
                negated = true;
                continue;
            }
            if let Some(factor) = self.intensifiers.get(word.as_str()) {
                intensity *= factor;
                continue;
            }
            if let Some(polarity) = self.polarity.get(word.as_str()) {
                let mut value = polarity * intensity;
                if negated {
                    value *= -0.5;
                }
                scored.push(value.clamp(-1.0, 1.0));
            }
            intensity = 1.0;
            negated = false;
        }

        if scored.is_empty() {
            return 0.0;
        }
        (scored.iter().sum::<f64>() / scored.len() as f64).clamp(-1.0, 1.0)
    }
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self::new()
    }
}

fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .filter(|w| !w.is_empty())
        .map(|w| w.to_lowercase())
}
