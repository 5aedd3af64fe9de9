pub mod errors;
pub mod html;
pub mod pdf;
pub mod redirect;

pub use errors::html_error_response;
pub use html::{html_response, html_with_status};
pub use pdf::pdf_attachment;
pub use redirect::see_other;
