use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CallError {
    #[error("Failed to build request: {0}")]
    Request(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("{}", rejection_text(.status, .message))]
    Rejected { status: u16, message: Option<String> },
}

fn rejection_text(status: &u16, message: &Option<String>) -> String {
    match message.as_deref().map(str::trim) {
        Some(message) if !message.is_empty() => message.to_string(),
        _ => format!("Failed to initiate call (status {})", status),
    }
}
