// responses/pdf.rs
use crate::domain::ReceiptDocument;
use crate::errors::{ResultResp, ServerError};
use astra::{Body, ResponseBuilder};

/// Return a receipt as a downloadable PDF.
pub fn pdf_attachment(doc: ReceiptDocument) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime::APPLICATION_PDF.as_ref())
        .header(
            "Content-Disposition",
            format!("attachment; filename=\"{}\"", doc.filename),
        )
        .header("Content-Length", doc.bytes.len())
        .body(Body::from(doc.bytes))
        .map_err(|_| ServerError::InternalError)
}
