// src/forms.rs
use astra::Request;
use std::io::{self, Read};
use url::form_urlencoded;

/// Upper bound on form bodies we are willing to read.
const MAX_FORM_BYTES: u64 = 64 * 1024;

/// Decoded `application/x-www-form-urlencoded` pairs, in order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FormData {
    pairs: Vec<(String, String)>,
}

impl FormData {
    pub fn parse(raw: &[u8]) -> Self {
        Self {
            pairs: form_urlencoded::parse(raw).into_owned().collect(),
        }
    }

    pub fn from_query(req: &Request) -> Self {
        Self::parse(req.uri().query().unwrap_or("").as_bytes())
    }

    /// Bodies over the size limit are rejected rather than cut short.
    pub fn from_body(req: &mut Request) -> io::Result<Self> {
        let mut buf = Vec::new();
        req.body_mut()
            .reader()
            .take(MAX_FORM_BYTES + 1)
            .read_to_end(&mut buf)?;
        if buf.len() as u64 > MAX_FORM_BYTES {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "form body is too large",
            ));
        }
        Ok(Self::parse(&buf))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Value for `key`, or an empty string.
    pub fn text(&self, key: &str) -> String {
        self.get(key).unwrap_or_default().to_string()
    }
}
