use serde::Deserialize;

/// Returned by `POST orders/checkout/`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CheckoutSession {
    #[serde(rename = "redirectUrl")]
    pub redirect_url: String,
    #[serde(deserialize_with = "crate::backend::wire::de_identifier")]
    pub order_id: String,
}

/// A receipt PDF fetched for a paid order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptDocument {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl ReceiptDocument {
    pub fn default_filename(order_id: &str) -> String {
        format!("receipt_{order_id}.pdf")
    }
}

/// Order ids come back to us in redirect query strings, so only accept
/// the shape the backend hands out before splicing one into a URL path.
pub fn parse_order_id(raw: &str) -> Option<String> {
    let id = raw.trim();
    let ok = !id.is_empty()
        && id.len() <= 64
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    ok.then(|| id.to_string())
}
