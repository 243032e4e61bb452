use crate::error::{AnalysisError, Result};
use serde::{Deserialize, Serialize};

/// An amenity and the words reviewers use for it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Amenity {
    pub name: String,
    pub synonyms: Vec<String>,
}

impl Amenity {
    pub fn new(name: &str, synonyms: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            synonyms: synonyms.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Exact, case-sensitive membership
    pub fn has_synonym(&self, word: &str) -> bool {
        self.synonyms.iter().any(|s| s == word)
    }
}

/// Immutable amenity table handed to the analyzer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmenityLexicon {
    amenities: Vec<Amenity>,
}

impl AmenityLexicon {
    pub fn new(amenities: Vec<Amenity>) -> Self {
        Self { amenities }
    }

    pub fn get(&self, name: &str) -> Option<&Amenity> {
        self.amenities.iter().find(|a| a.name == name)
    }

    pub fn resolve(&self, keyword: &str) -> Result<&Amenity> {
        self.get(keyword)
            .ok_or_else(|| AnalysisError::UnknownKeyword(keyword.to_string()))
    }

    /// Amenity names in table order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.amenities.iter().map(|a| a.name.as_str())
    }
}

impl Default for AmenityLexicon {
    fn default() -> Self {
        Self::new(vec![
            Amenity::new("wifi", &["wifi", "internet", "wi-fi", "wi fi", "wireless"]),
            Amenity::new("breakfast", &["breakfast", "breakfest", "break fast", "brunch"]),
            Amenity::new(
                "bathroom",
                &[
                    "bathroom", "bath room", "bath", "restroom", "toilet", "urinal", "lavatory",
                    "washroom", "bathrooms",
                ],
            ),
            Amenity::new("shower", &["shower", "bathe", "showers"]),
            Amenity::new("noise", &["noise", "noisy", "quiet", "loud", "silent"]),
        ])
    }
}
