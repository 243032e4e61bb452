use crate::error::{AnalysisError, ErrorKind};
use crate::front::RequestError;
use crate::models::Summary;

pub const MAX_STATUS_CHARS: usize = 140;

/// Reply text for a finished analysis. The rating is rounded to a whole
/// number but printed with one decimal, e.g. `73.0/100`.
pub fn compose_status(summary: &Summary, handle: &str, keyword: &str) -> String {
    let status = format!(
        "{} {} rating: {:.1}/100. Positive: {} Negative: {} \"{}\"",
        handle,
        keyword,
        summary.key_avg.round(),
        summary.positive,
        summary.negative,
        summary.common_phrase.phrase
    );
    fit(status)
}

/// Reply text for a request that could not be answered
pub fn error_status(handle: &str, error: &RequestError) -> String {
    let body = match error {
        RequestError::MissingLink => "I couldn't find a hostel link in your message".to_string(),
        RequestError::Analysis(err) => analysis_message(err),
    };
    fit(format!("{} {}", handle, body))
}

fn analysis_message(err: &AnalysisError) -> String {
    match err.kind() {
        ErrorKind::InvalidUrl => "That link doesn't lead to a Hostelworld hostel".to_string(),
        ErrorKind::UnknownKeyword => {
            "Ask me about wifi, breakfast, bathroom, shower or noise".to_string()
        }
        ErrorKind::NoMatch => match err {
            AnalysisError::NoMatch { keyword } => format!("No reviews mention the {} yet", keyword),
            _ => "No reviews mention that yet".to_string(),
        },
        ErrorKind::Fetch | ErrorKind::Parse | ErrorKind::Layout => {
            "I couldn't read that hostel's reviews right now, try again later".to_string()
        }
    }
}

/// Over-long statuses keep their first `MAX_STATUS_CHARS - 1` characters
fn fit(status: String) -> String {
    if status.chars().count() > MAX_STATUS_CHARS {
        status.chars().take(MAX_STATUS_CHARS - 1).collect()
    } else {
        status
    }
}
