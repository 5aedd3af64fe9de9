use thiserror::Error;

/// Failures talking to the backend REST service.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Backend returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Not found")]
    NotFound,

    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid backend URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Seed file error: {0}")]
    Seed(#[from] std::io::Error),
}

impl BackendError {
    /// Text safe to show a visitor. Details stay in the logs.
    pub fn user_notice(&self) -> &'static str {
        match self {
            BackendError::NotFound => "We couldn't find what you were looking for.",
            BackendError::Status { status, .. } if *status < 500 => {
                "The request was rejected. Please check your details and try again."
            }
            _ => "Something went wrong on our side. Please try again in a moment.",
        }
    }
}
