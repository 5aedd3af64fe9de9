// src/catalog/query.rs

use crate::catalog::criteria::{FilterCriteria, SortKey};
use crate::domain::ListingRecord;
use std::cmp::Ordering;

/// A 1-based page window. Zero values are bumped to 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub number: usize,
    pub size: usize,
}

impl PageRequest {
    pub fn new(number: usize, size: usize) -> Self {
        Self {
            number: number.max(1),
            size: size.max(1),
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct QueryResult<'a> {
    pub items: Vec<&'a ListingRecord>,
    pub total_count: usize,
    pub total_pages: usize,
    pub page: PageRequest,
}

impl QueryResult<'_> {
    pub fn has_previous(&self) -> bool {
        self.page.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.page.number < self.total_pages
    }
}

/// Filter, search, sort and page the catalog.
///
/// The collection is only borrowed; the returned items point into it.
pub fn query<'a>(
    collection: &'a [ListingRecord],
    criteria: &FilterCriteria,
    search_text: &str,
    sort_key: SortKey,
    page: PageRequest,
) -> QueryResult<'a> {
    // Blank text means no search; otherwise the text is matched as typed.
    let needle = (!search_text.trim().is_empty()).then(|| search_text.to_lowercase());

    let mut matched: Vec<&ListingRecord> = collection
        .iter()
        .filter(|l| criteria.matches(l))
        .filter(|l| {
            needle
                .as_deref()
                .map_or(true, |n| l.title.to_lowercase().contains(n))
        })
        .collect();

    // `sort_by` is stable, so ties keep catalog order.
    matched.sort_by(|a, b| compare(sort_key, a, b));

    let total_count = matched.len();
    let total_pages = total_count.div_ceil(page.size);

    let start = (page.number - 1).saturating_mul(page.size);
    let items = if start >= total_count {
        Vec::new()
    } else {
        let end = start.saturating_add(page.size).min(total_count);
        matched.drain(start..end).collect()
    };

    QueryResult {
        items,
        total_count,
        total_pages,
        page,
    }
}

fn compare(sort_key: SortKey, a: &ListingRecord, b: &ListingRecord) -> Ordering {
    match sort_key {
        // true sorts first
        SortKey::Newest => b.is_new.cmp(&a.is_new),
        SortKey::Oldest => a.is_new.cmp(&b.is_new),
        SortKey::PriceHigh => b.price.total_cmp(&a.price),
        SortKey::PriceLow => a.price.total_cmp(&b.price),
        SortKey::Popular => b.is_popular.cmp(&a.is_popular),
    }
}
