// src/domain/inquiry.rs
//
// Contact and quote forms as the visitor typed them, and the validated
// payloads that get posted to the backend.

use crate::forms::FormData;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const STYLE_OPTIONS: &[&str] = &[
    "Modern",
    "Contemporary",
    "Traditional",
    "Mediterranean",
    "Farmhouse",
    "Tuscan",
    "Tuscan Roof",
    "Minimalist",
    "Craftsman",
    "Colonial",
    "Ranch",
    "Victorian",
    "Not sure",
    "Other",
];

pub const BUDGET_OPTIONS: &[&str] = &[
    "R1,000 - R1,500",
    "R2,000 - R2,500",
    "R3,000 - R3,500",
    "R4,000 - R4,500",
    "R5,000 - R5,500",
    "R6,000 - R6,500",
    "R7,000 - R7,500",
    "R8,000 - R8,500",
    "R9,000 - R9,500",
    "R10,000+",
    "Not sure yet",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

#[derive(Debug, Error)]
#[error("{} field(s) need attention", .errors.len())]
pub struct InquiryError {
    pub errors: Vec<FieldError>,
}

impl InquiryError {
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

/// Payload for `POST contact/`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

/// Payload for `POST quotes/`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteRequest {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub preferred_style: String,
    pub custom_style: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub other_rooms: String,
    pub yard_length: f64,
    pub yard_breadth: f64,
    pub budget: String,
    pub description: String,
}

/// Raw contact form state, kept verbatim so a failed submit can be re-rendered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

/// Raw quote form state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub preferred_style: String,
    pub custom_style: String,
    pub bedrooms: String,
    pub bathrooms: String,
    pub other_rooms: String,
    pub yard_length: String,
    pub yard_breadth: String,
    pub budget: String,
    pub description: String,
}

/// Trim + lowercase, minimal sanity check.
pub fn normalize_email(email: &str) -> Option<String> {
    let e = email.trim().to_lowercase();
    if e.is_empty() || !e.contains('@') || e.starts_with('@') || e.ends_with('@') {
        return None;
    }
    Some(e)
}

struct Checker {
    errors: Vec<FieldError>,
}

impl Checker {
    fn new() -> Self {
        Self { errors: Vec::new() }
    }

    fn fail(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    fn required(&mut self, field: &'static str, value: &str) -> String {
        let v = value.trim();
        if v.is_empty() {
            self.fail(field, "This field is required");
        }
        v.to_string()
    }

    fn email(&mut self, field: &'static str, value: &str) -> String {
        if value.trim().is_empty() {
            self.fail(field, "This field is required");
            return String::new();
        }
        match normalize_email(value) {
            Some(e) => e,
            None => {
                self.fail(field, "Enter a valid email address");
                String::new()
            }
        }
    }

    fn count(&mut self, field: &'static str, value: &str) -> u32 {
        match value.trim().parse::<u32>() {
            Ok(n) => n,
            Err(_) => {
                self.fail(field, "Enter a whole number");
                0
            }
        }
    }

    fn measure(&mut self, field: &'static str, value: &str) -> f64 {
        match value.trim().parse::<f64>() {
            Ok(n) if n.is_finite() && n >= 0.0 => n,
            _ => {
                self.fail(field, "Enter a positive number");
                0.0
            }
        }
    }

    fn finish<T>(self, value: T) -> Result<T, InquiryError> {
        if self.errors.is_empty() {
            Ok(value)
        } else {
            Err(InquiryError {
                errors: self.errors,
            })
        }
    }
}

impl ContactForm {
    pub fn from_form(form: &FormData) -> Self {
        Self {
            name: form.text("name"),
            email: form.text("email"),
            phone: form.text("phone"),
            subject: form.text("subject"),
            message: form.text("message"),
        }
    }

    pub fn validate(&self) -> Result<ContactMessage, InquiryError> {
        let mut check = Checker::new();

        let name = check.required("name", &self.name);
        let email = check.email("email", &self.email);
        let subject = check.required("subject", &self.subject);
        let message = check.required("message", &self.message);
        let phone = Some(self.phone.trim().to_string()).filter(|p| !p.is_empty());

        check.finish(ContactMessage {
            name,
            email,
            phone,
            subject,
            message,
        })
    }
}

impl QuoteForm {
    pub fn from_form(form: &FormData) -> Self {
        Self {
            full_name: form.text("full_name"),
            email: form.text("email"),
            phone: form.text("phone"),
            city: form.text("city"),
            preferred_style: form.text("preferred_style"),
            custom_style: form.text("custom_style"),
            bedrooms: form.text("bedrooms"),
            bathrooms: form.text("bathrooms"),
            other_rooms: form.text("other_rooms"),
            yard_length: form.text("yard_length"),
            yard_breadth: form.text("yard_breadth"),
            budget: form.text("budget"),
            description: form.text("description"),
        }
    }

    pub fn validate(&self) -> Result<QuoteRequest, InquiryError> {
        let mut check = Checker::new();

        let full_name = check.required("full_name", &self.full_name);
        let email = check.email("email", &self.email);
        let phone = check.required("phone", &self.phone);
        let city = check.required("city", &self.city);
        let preferred_style = check.required("preferred_style", &self.preferred_style);

        // A free-text style is only needed when "Other" was picked.
        let custom_style = if preferred_style == "Other" {
            check.required("custom_style", &self.custom_style)
        } else {
            self.custom_style.trim().to_string()
        };

        let bedrooms = check.count("bedrooms", &self.bedrooms);
        let bathrooms = check.count("bathrooms", &self.bathrooms);
        let yard_length = check.measure("yard_length", &self.yard_length);
        let yard_breadth = check.measure("yard_breadth", &self.yard_breadth);
        let budget = check.required("budget", &self.budget);
        let description = check.required("description", &self.description);

        check.finish(QuoteRequest {
            full_name,
            email,
            phone,
            city,
            preferred_style,
            custom_style,
            bedrooms,
            bathrooms,
            other_rooms: self.other_rooms.trim().to_string(),
            yard_length,
            yard_breadth,
            budget,
            description,
        })
    }
}
