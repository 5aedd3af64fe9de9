// src/domain/site.rs
//
// Display content managed in the backend admin. Every type has a fallback
// so pages still render when the backend is unreachable.

use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    pub company_name: String,
    pub tagline: String,
    pub hero_title: String,
    pub hero_description: String,
    pub about_title: String,
    pub about_description: String,
    pub who_we_are_content: String,
    pub mission_statement: String,
    pub years_experience: String,
    pub projects_completed: String,
    pub client_satisfaction: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            company_name: "House Plans".to_string(),
            tagline: "Designs for the way you live".to_string(),
            hero_title: "Find your dream home plan".to_string(),
            hero_description: "Browse ready-made house plans and built homes, or ask us for a custom design."
                .to_string(),
            about_title: "About us".to_string(),
            about_description: String::new(),
            who_we_are_content: String::new(),
            mission_statement: String::new(),
            years_experience: String::new(),
            projects_completed: String::new(),
            client_satisfaction: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContactInformation {
    pub phone_number: String,
    pub email: String,
    pub support_email: String,
    pub address: String,
    pub monday_friday: String,
    pub saturday: String,
    pub sunday: String,
    pub facebook_url: String,
    pub twitter_url: String,
    pub instagram_url: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TeamMember {
    pub id: i64,
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub specialty: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub order: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Testimonial {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub role: String,
    pub content: String,
    pub rating: u8,
    #[serde(default)]
    pub initials: String,
    pub created_at: DateTime<Utc>,
}

/// One offering on the services page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Service {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub badge: String,
    #[serde(default)]
    pub icon_name: String,
    #[serde(default)]
    pub order: i64,
    #[serde(default = "active")]
    pub is_active: bool,
}

fn active() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlanModification {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub order: i64,
}

impl Testimonial {
    /// Ratings are out of five; anything above is clamped.
    pub fn stars(&self) -> String {
        "★".repeat(usize::from(self.rating.min(5)))
    }

    pub fn posted_on(&self) -> String {
        self.created_at.format("%B %Y").to_string()
    }
}
