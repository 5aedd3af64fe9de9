use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Plan,
    Built,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Plan => "House Plan",
            Category::Built => "Built Home",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorRoom {
    pub name: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Floor {
    pub number: u32,
    pub name: String,
    pub rooms: Vec<FloorRoom>,
}

/// One plan or built home in the catalog.
///
/// Records are read-only once loaded; catalog queries borrow them and
/// never reorder or edit the source collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingRecord {
    pub id: String,
    pub title: String,
    pub category: Category,
    pub price: f64,

    pub bedrooms: u32,
    pub bathrooms: u32,
    pub garage: u32,
    pub levels: u32,
    /// Square metres.
    pub floor_area: f64,
    pub width: f64,
    pub depth: f64,

    pub styles: Vec<String>,
    pub is_new: bool,
    pub is_popular: bool,
    /// Display order is meaningful: the first image is the cover.
    pub images: Vec<String>,

    pub description: String,
    pub features: Vec<String>,
    pub amenities: Vec<String>,
    pub video_url: Option<String>,
    pub en_suite: u32,
    pub lounges: u32,
    pub dining_areas: u32,
    pub garage_parking: u32,
    pub covered_parking: u32,
    pub pet_friendly: bool,
    pub floors: Vec<Floor>,
}

impl ListingRecord {
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    pub fn has_style(&self, style: &str) -> bool {
        self.styles.iter().any(|s| s == style)
    }

    /// Price formatted for display, e.g. `R 12,500`.
    pub fn display_price(&self) -> String {
        format_rands(self.price)
    }

    /// The walkthrough video, if it points at an ordinary web page.
    pub fn video_link(&self) -> Option<&str> {
        self.video_url.as_deref().filter(|u| is_web_url(u))
    }
}

/// True for absolute `http`/`https` URLs.
pub fn is_web_url(raw: &str) -> bool {
    Url::parse(raw)
        .map(|u| matches!(u.scheme(), "https" | "http"))
        .unwrap_or(false)
}

pub fn format_rands(amount: f64) -> String {
    let whole = amount.round().max(0.0) as u64;
    let digits = whole.to_string();

    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    format!("R {out}")
}
