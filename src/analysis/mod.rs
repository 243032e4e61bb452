pub mod frequency;
pub mod lexicon;
pub mod matcher;
pub mod sentiment;
pub mod stopwords;
pub mod summary;

pub use frequency::WordFrequency;
pub use lexicon::{Amenity, AmenityLexicon};
pub use matcher::annotate;
pub use sentiment::SentimentScorer;
pub use stopwords::Stopwords;
pub use summary::summarize;
