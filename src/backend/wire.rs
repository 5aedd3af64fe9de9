// src/backend/wire.rs
//
// Backend record shapes. Field names are snake_case on the wire and
// decimals may arrive as strings ("1500.00") or numbers.
//
// property
//  ├── id, title, category (PLAN | BUILT)
//  ├── price, width, depth            (decimal)
//  ├── bedrooms, bathrooms, garage, floor_area, levels
//  ├── styles, features, amenities    (string lists)
//  ├── floors                         ([{number, name, rooms: [{name, quantity}]}])
//  ├── is_new, is_popular, pet_friendly
//  ├── en_suite, lounges, dining_areas, garage_parking, covered_parking
//  ├── description, video_url
//  └── image_urls                     (ordered)

use crate::domain::listing::{Category, Floor, FloorRoom, ListingRecord};
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

pub fn de_decimal<'de, D>(d: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrText::deserialize(d)? {
        NumberOrText::Number(n) => Ok(n),
        NumberOrText::Text(s) => s.trim().parse::<f64>().map_err(serde::de::Error::custom),
    }
}

/// Ids are integers in the backend but opaque strings to us.
pub fn de_identifier<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Int(i64),
        Text(String),
    }

    Ok(match Id::deserialize(d)? {
        Id::Int(n) => n.to_string(),
        Id::Text(s) => s,
    })
}

fn de_null_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}

#[derive(Debug, Deserialize)]
pub struct PropertyResponse {
    #[serde(deserialize_with = "de_identifier")]
    pub id: String,
    pub title: String,
    #[serde(default = "default_category")]
    pub category: Category,
    #[serde(deserialize_with = "de_decimal")]
    pub price: f64,

    #[serde(default)]
    pub bedrooms: u32,
    #[serde(default)]
    pub bathrooms: u32,
    #[serde(default)]
    pub garage: u32,
    #[serde(default)]
    pub levels: u32,
    #[serde(deserialize_with = "de_decimal")]
    pub floor_area: f64,
    #[serde(default, deserialize_with = "de_decimal_opt")]
    pub width: f64,
    #[serde(default, deserialize_with = "de_decimal_opt")]
    pub depth: f64,

    #[serde(default, deserialize_with = "de_null_default")]
    pub styles: Vec<String>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub features: Vec<String>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub amenities: Vec<String>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub floors: Vec<FloorResponse>,

    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub is_popular: bool,
    #[serde(default, deserialize_with = "de_null_default")]
    pub description: String,
    #[serde(default)]
    pub video_url: Option<String>,

    #[serde(default)]
    pub en_suite: u32,
    #[serde(default)]
    pub lounges: u32,
    #[serde(default)]
    pub dining_areas: u32,
    #[serde(default)]
    pub garage_parking: u32,
    #[serde(default)]
    pub covered_parking: u32,
    #[serde(default)]
    pub pet_friendly: bool,

    #[serde(default, deserialize_with = "de_null_default")]
    pub image_urls: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct FloorResponse {
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub rooms: Vec<FloorRoomResponse>,
}

#[derive(Debug, Deserialize)]
pub struct FloorRoomResponse {
    pub name: String,
    #[serde(default)]
    pub quantity: u32,
}

fn default_category() -> Category {
    Category::Plan
}

fn de_decimal_opt<'de, D>(d: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrText>::deserialize(d)? {
        None => Ok(0.0),
        Some(NumberOrText::Number(n)) => Ok(n),
        Some(NumberOrText::Text(s)) => s.trim().parse::<f64>().map_err(serde::de::Error::custom),
    }
}

impl From<PropertyResponse> for ListingRecord {
    fn from(p: PropertyResponse) -> Self {
        ListingRecord {
            id: p.id,
            title: p.title,
            category: p.category,
            price: p.price,
            bedrooms: p.bedrooms,
            bathrooms: p.bathrooms,
            garage: p.garage,
            levels: p.levels,
            floor_area: p.floor_area,
            width: p.width,
            depth: p.depth,
            styles: p.styles,
            is_new: p.is_new,
            is_popular: p.is_popular,
            images: p.image_urls,
            description: p.description,
            features: p.features,
            amenities: p.amenities,
            video_url: p.video_url.filter(|u| !u.trim().is_empty()),
            en_suite: p.en_suite,
            lounges: p.lounges,
            dining_areas: p.dining_areas,
            garage_parking: p.garage_parking,
            covered_parking: p.covered_parking,
            pet_friendly: p.pet_friendly,
            floors: p
                .floors
                .into_iter()
                .map(|f| Floor {
                    number: f.number,
                    name: f.name,
                    rooms: f
                        .rooms
                        .into_iter()
                        .map(|r| FloorRoom {
                            name: r.name,
                            quantity: r.quantity,
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

/// Decode a JSON array of wire records, keeping their order.
pub fn decode_listings(body: &str) -> Result<Vec<ListingRecord>, serde_json::Error> {
    let raw: Vec<PropertyResponse> = serde_json::from_str(body)?;
    Ok(raw.into_iter().map(ListingRecord::from).collect())
}
