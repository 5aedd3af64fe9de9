use crate::domain::ListingRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Level selection value meaning "three or more levels".
pub const LEVELS_THREE_PLUS: u32 = 4;

/// Active filter constraints for a catalog query.
///
/// `None` bounds and empty selection lists impose no constraint. Bounds are
/// inclusive. Within a selection list any single match is enough; across
/// fields every populated constraint must hold.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub floor_area_min: Option<f64>,
    pub floor_area_max: Option<f64>,
    pub bedrooms: Vec<u32>,
    pub bathrooms: Vec<u32>,
    pub garage: Vec<u32>,
    pub levels: Vec<u32>,
    pub styles: Vec<String>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        *self == FilterCriteria::default()
    }

    pub fn matches(&self, listing: &ListingRecord) -> bool {
        within(listing.price, self.price_min, self.price_max)
            && within(listing.floor_area, self.floor_area_min, self.floor_area_max)
            && at_least_any(listing.bedrooms, &self.bedrooms)
            && at_least_any(listing.bathrooms, &self.bathrooms)
            && at_least_any(listing.garage, &self.garage)
            && level_matches(listing.levels, &self.levels)
            && (self.styles.is_empty() || self.styles.iter().any(|s| listing.has_style(s)))
    }
}

fn within(value: f64, min: Option<f64>, max: Option<f64>) -> bool {
    min.map_or(true, |m| value >= m) && max.map_or(true, |m| value <= m)
}

fn at_least_any(count: u32, thresholds: &[u32]) -> bool {
    thresholds.is_empty() || thresholds.iter().any(|&t| count >= t)
}

fn level_matches(levels: u32, selections: &[u32]) -> bool {
    selections.is_empty()
        || selections.iter().any(|&sel| {
            if sel == LEVELS_THREE_PLUS {
                levels >= 3
            } else {
                levels == sel
            }
        })
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    #[serde(rename = "newest")]
    Newest,
    #[serde(rename = "oldest")]
    Oldest,
    #[serde(rename = "price-high")]
    PriceHigh,
    #[serde(rename = "price-low")]
    PriceLow,
    #[serde(rename = "popular")]
    Popular,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Newest,
        SortKey::Oldest,
        SortKey::PriceHigh,
        SortKey::PriceLow,
        SortKey::Popular,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::PriceHigh => "price-high",
            SortKey::PriceLow => "price-low",
            SortKey::Popular => "popular",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Newest => "Newest first",
            SortKey::Oldest => "Oldest first",
            SortKey::PriceHigh => "Price: high to low",
            SortKey::PriceLow => "Price: low to high",
            SortKey::Popular => "Most popular",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| format!("unknown sort key: {s}"))
    }
}
