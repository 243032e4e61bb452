use crate::analysis::lexicon::Amenity;
use crate::analysis::stopwords::Stopwords;
use std::collections::HashMap;

/// Word counts that remember first-seen order for tie-breaking
#[derive(Debug, Default, Clone)]
pub struct WordFrequency {
    counts: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl WordFrequency {
    /// Count every whitespace token across `excerpts` that is neither a
    /// stopword nor a synonym of `amenity`. Tokens are compared as-is.
    pub fn count<'a, I>(excerpts: I, stopwords: &Stopwords, amenity: &Amenity) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut freq = Self::default();
        for excerpt in excerpts {
            for word in excerpt.split_whitespace() {
                if !stopwords.contains(word) && !amenity.has_synonym(word) {
                    freq.add(word);
                }
            }
        }
        freq
    }

    pub fn add(&mut self, word: &str) {
        match self.index.get(word) {
            Some(&slot) => self.counts[slot].1 += 1,
            None => {
                self.index.insert(word.to_string(), self.counts.len());
                self.counts.push((word.to_string(), 1));
            }
        }
    }

    /// The `n` highest counts; equal counts keep first-seen order
    pub fn most_common(&self, n: usize) -> Vec<(String, usize)> {
        let mut ranked = self.counts.clone();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}
