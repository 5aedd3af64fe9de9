use crate::backend::BackendError;
use astra::Response;
use thiserror::Error;

/// Errors that escape a route handler and become an error page.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Backend unavailable: {0}")]
    Backend(#[from] BackendError),

    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::MethodNotAllowed => 405,
            ServerError::BadRequest(_) => 400,
            ServerError::Backend(BackendError::NotFound) => 404,
            ServerError::Backend(_) => 502,
            ServerError::InternalError => 500,
        }
    }
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;
