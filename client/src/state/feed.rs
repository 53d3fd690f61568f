//! Feed query state: which page of which search/filter is on screen.
//!
//! DESIGN
//! ======
//! Changing the search text or a filter always resets to page 1, otherwise a
//! narrower result set could leave the user on a page that no longer exists.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use crate::net::api::PATIENTS_ENDPOINT;
use crate::net::types::{Sex, Species};

pub const DEFAULT_PER_PAGE: u32 = 12;

/// Parameters of one `GET /api/patients` request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedQuery {
    pub page: u32,
    pub per_page: u32,
    pub search: String,
    pub species: Option<Species>,
    pub sex: Option<Sex>,
}

impl Default for FeedQuery {
    fn default() -> Self {
        Self { page: 1, per_page: DEFAULT_PER_PAGE, search: String::new(), species: None, sex: None }
    }
}

impl FeedQuery {
    /// Query pairs in a stable order. Empty search and unset filters are omitted.
    #[must_use]
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("page", self.page.max(1).to_string()), ("per_page", self.per_page.to_string())];
        let search = self.search.trim();
        if !search.is_empty() {
            params.push(("search", search.to_owned()));
        }
        if let Some(species) = self.species {
            params.push(("species", species.as_str().to_owned()));
        }
        if let Some(sex) = self.sex {
            params.push(("sex", sex.as_str().to_owned()));
        }
        params
    }

    /// Cache key for this page, shaped like the request URL.
    #[must_use]
    pub fn cache_key(&self) -> String {
        let query = self
            .to_params()
            .iter()
            .map(|(k, v)| format!("{k}={}", encode_component(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{PATIENTS_ENDPOINT}?{query}")
    }

    /// Returns `true` when the search text actually changed.
    pub fn set_search(&mut self, search: &str) -> bool {
        if self.search.trim() == search.trim() {
            return false;
        }
        self.search = search.to_owned();
        self.page = 1;
        true
    }

    pub fn set_species(&mut self, species: Option<Species>) {
        if self.species != species {
            self.species = species;
            self.page = 1;
        }
    }

    pub fn set_sex(&mut self, sex: Option<Sex>) {
        if self.sex != sex {
            self.sex = sex;
            self.page = 1;
        }
    }

    #[must_use]
    pub fn has_filters(&self) -> bool {
        !self.search.trim().is_empty() || self.species.is_some() || self.sex.is_some()
    }

    pub fn clear_filters(&mut self) {
        *self = Self { per_page: self.per_page, ..Self::default() };
    }
}

fn encode_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~') {
            out.push(char::from(byte));
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}
