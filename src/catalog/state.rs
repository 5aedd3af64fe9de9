// src/catalog/state.rs

use crate::catalog::criteria::{FilterCriteria, SortKey};
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Everything a catalog page needs to re-render itself, carried in the URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogState {
    pub criteria: FilterCriteria,
    pub search: String,
    pub sort: SortKey,
    pub page: usize,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            criteria: FilterCriteria::default(),
            search: String::new(),
            sort: SortKey::default(),
            page: 1,
        }
    }
}

impl CatalogState {
    /// Parse a raw query string. Values that don't parse are dropped.
    pub fn from_query(query: &str) -> Self {
        let mut state = CatalogState::default();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            let c = &mut state.criteria;
            match key.as_ref() {
                "price_min" => c.price_min = parse_bound(value),
                "price_max" => c.price_max = parse_bound(value),
                "area_min" => c.floor_area_min = parse_bound(value),
                "area_max" => c.floor_area_max = parse_bound(value),
                "bedrooms" => push_count(&mut c.bedrooms, value),
                "bathrooms" => push_count(&mut c.bathrooms, value),
                "garage" => push_count(&mut c.garage, value),
                "levels" => push_count(&mut c.levels, value),
                "style" => {
                    if !c.styles.iter().any(|s| s == value) {
                        c.styles.push(value.to_string());
                    }
                }
                "q" => state.search = value.to_string(),
                "sort" => state.sort = value.parse().unwrap_or_default(),
                "page" => state.page = value.parse::<usize>().ok().filter(|&p| p > 0).unwrap_or(1),
                _ => {}
            }
        }

        state
    }

    pub fn to_query(&self) -> String {
        let mut out = form_urlencoded::Serializer::new(String::new());
        let c = &self.criteria;

        for (key, bound) in [
            ("price_min", c.price_min),
            ("price_max", c.price_max),
            ("area_min", c.floor_area_min),
            ("area_max", c.floor_area_max),
        ] {
            if let Some(v) = bound {
                out.append_pair(key, &v.to_string());
            }
        }
        for (key, values) in [
            ("bedrooms", &c.bedrooms),
            ("bathrooms", &c.bathrooms),
            ("garage", &c.garage),
            ("levels", &c.levels),
        ] {
            for v in values {
                out.append_pair(key, &v.to_string());
            }
        }
        for s in &c.styles {
            out.append_pair("style", s);
        }
        if !self.search.trim().is_empty() {
            out.append_pair("q", self.search.trim());
        }
        if self.sort != SortKey::default() {
            out.append_pair("sort", self.sort.as_str());
        }
        if self.page > 1 {
            out.append_pair("page", &self.page.to_string());
        }

        out.finish()
    }

    pub fn href(&self, path: &str) -> String {
        let q = self.to_query();
        if q.is_empty() {
            path.to_string()
        } else {
            format!("{path}?{q}")
        }
    }

    pub fn with_page(&self, page: usize) -> Self {
        Self {
            page: page.max(1),
            ..self.clone()
        }
    }

    /// Changing the sort order starts over from the first page.
    pub fn with_sort(&self, sort: SortKey) -> Self {
        Self {
            sort,
            page: 1,
            ..self.clone()
        }
    }

    pub fn with_criteria(&self, criteria: FilterCriteria) -> Self {
        Self {
            criteria,
            page: 1,
            ..self.clone()
        }
    }

    pub fn with_search(&self, search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            page: 1,
            ..self.clone()
        }
    }

    pub fn is_filtered(&self) -> bool {
        !self.criteria.is_empty() || !self.search.trim().is_empty()
    }
}

/// A bound of zero means "no limit", the same as leaving the field empty.
fn parse_bound(value: &str) -> Option<f64> {
    value
        .replace(',', "")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}

fn push_count(values: &mut Vec<u32>, raw: &str) {
    if let Ok(v) = raw.parse::<u32>() {
        if !values.contains(&v) {
            values.push(v);
        }
    }
}
