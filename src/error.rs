use reqwest::StatusCode;
use thiserror::Error;

/// Failure kinds surfaced by the review analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Fetch,
    Parse,
    Layout,
    NoMatch,
    InvalidUrl,
    UnknownKeyword,
}

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("request to {url} failed: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with status {status}")]
    Status { url: String, status: StatusCode },

    #[error("could not parse {url} as html: {reason}")]
    Parse { url: String, reason: String },

    #[error("unexpected page layout: {0}")]
    Layout(String),

    #[error("no review mentions {keyword}")]
    NoMatch { keyword: String },

    #[error("invalid url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("unknown amenity keyword {0:?}")]
    UnknownKeyword(String),
}

impl AnalysisError {
    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Fetch { .. } | Self::Status { .. } => ErrorKind::Fetch,
            Self::Parse { .. } => ErrorKind::Parse,
            Self::Layout(_) => ErrorKind::Layout,
            Self::NoMatch { .. } => ErrorKind::NoMatch,
            Self::InvalidUrl { .. } => ErrorKind::InvalidUrl,
            Self::UnknownKeyword(_) => ErrorKind::UnknownKeyword,
        }
    }

    /// NoMatch is a normal outcome, everything else is a failure
    pub fn is_expected(&self) -> bool {
        self.kind() == ErrorKind::NoMatch
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_errors_count_as_fetch_failures() {
        let err = AnalysisError::Status {
            url: "https://example.com/1".into(),
            status: StatusCode::BAD_GATEWAY,
        };
        assert_eq!(err.kind(), ErrorKind::Fetch);
        assert!(!err.is_expected());
    }

    #[test]
    fn no_match_is_the_only_expected_error() {
        let err = AnalysisError::NoMatch {
            keyword: "wifi".into(),
        };
        assert!(err.is_expected());
        assert!(!AnalysisError::layout("missing results").is_expected());
        assert!(!AnalysisError::UnknownKeyword("pool".into()).is_expected());
    }
}
