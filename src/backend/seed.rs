use crate::backend::wire::decode_listings;
use crate::backend::{BackendError, ListingScope, ListingSource};
use crate::domain::{Category, ListingRecord};
use std::fs;
use std::path::Path;
use tracing::info;

/// Listings loaded once from a JSON file in the backend wire format.
pub struct SeedListings {
    listings: Vec<ListingRecord>,
}

impl SeedListings {
    pub fn new(listings: Vec<ListingRecord>) -> Self {
        Self { listings }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, BackendError> {
        let path = path.as_ref();
        let body = fs::read_to_string(path)?;
        let listings = decode_listings(&body)?;
        info!(path = %path.display(), count = listings.len(), "loaded catalog seed");
        Ok(Self::new(listings))
    }
}

impl ListingSource for SeedListings {
    fn list(&self, scope: ListingScope) -> Result<Vec<ListingRecord>, BackendError> {
        let wanted = match scope {
            ListingScope::All => None,
            ListingScope::Plans => Some(Category::Plan),
            ListingScope::Built => Some(Category::Built),
        };

        Ok(self
            .listings
            .iter()
            .filter(|l| wanted.map_or(true, |c| l.category == c))
            .cloned()
            .collect())
    }

    fn get(&self, id: &str) -> Result<Option<ListingRecord>, BackendError> {
        Ok(self.listings.iter().find(|l| l.id == id).cloned())
    }
}
