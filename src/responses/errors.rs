use crate::errors::ServerError;
use crate::templates::pages::error_page;
use astra::{Body, Response, ResponseBuilder};
use tracing::{error, warn};

/// Convert a ServerError into a proper HTML response page
pub fn html_error_response(err: ServerError) -> Response {
    let status = err.status();
    if status >= 500 {
        error!(status, error = %err, "request failed");
    } else {
        warn!(status, error = %err, "request rejected");
    }

    let message = match &err {
        ServerError::NotFound => "The page you were looking for does not exist.".to_string(),
        ServerError::MethodNotAllowed => "That action is not supported here.".to_string(),
        ServerError::BadRequest(msg) => msg.clone(),
        ServerError::Backend(e) => e.user_notice().to_string(),
        ServerError::InternalError => "Internal Server Error".to_string(),
    };

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(error_page(status, &message).into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
