use crate::errors::{ResultResp, ServerError};
use astra::{Body, ResponseBuilder};

/// 303 so the browser follows with a GET after a form POST.
pub fn see_other(location: &str) -> ResultResp {
    ResponseBuilder::new()
        .status(303)
        .header("Location", location)
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}
