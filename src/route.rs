//! Client-visible URL state.
//!
//! The list page lives at `/` and keeps its page number in the `page`
//! query parameter; the detail page lives at `/recipe/{id}`.

use reqwest::Url;
use std::fmt;

use crate::error::BrowseError;

const LOCAL_ORIGIN: &str = "http://localhost/";

/// A page of the browser, identified by its URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    List { page: u32 },
    Detail { id: u32 },
}

impl Default for Route {
    fn default() -> Self {
        Route::List { page: 1 }
    }
}

impl Route {
    /// Parse a client URL. Accepts bare paths (`/recipe/3`), query-only
    /// strings (`?page=2`) and absolute URLs.
    pub fn parse(input: &str) -> Result<Self, BrowseError> {
        let url = local_origin()?
            .join(input.trim())
            .map_err(|e| BrowseError::InvalidRoute(format!("{}: {}", input, e)))?;

        let segments: Vec<&str> = url
            .path_segments()
            .map(|s| s.filter(|seg| !seg.is_empty()).collect())
            .unwrap_or_default();

        match segments.as_slice() {
            [] => Ok(Route::List {
                page: page_param(&url),
            }),
            ["recipe", id] => id
                .parse()
                .map(|id| Route::Detail { id })
                .map_err(|_| BrowseError::InvalidRoute(format!("not a recipe id: {}", id))),
            _ => Err(BrowseError::InvalidRoute(input.to_string())),
        }
    }

    pub fn list(page: u32) -> Self {
        Route::List { page: page.max(1) }
    }

    pub fn detail(id: u32) -> Self {
        Route::Detail { id }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::List { page } => write!(f, "/?{}", query_for_page(*page)),
            Route::Detail { id } => write!(f, "/recipe/{}", id),
        }
    }
}

/// Read the 1-based page number from a query string such as `page=3&x=y`.
///
/// Absent, empty, non-numeric and zero values all mean page 1. Trailing
/// garbage after the digits is ignored, so `page=3abc` is page 3.
pub fn page_from_query(query: &str) -> u32 {
    match local_origin() {
        Ok(mut url) => {
            url.set_query(Some(query.trim_start_matches('?')));
            page_param(&url)
        }
        Err(_) => 1,
    }
}

/// The decoded `page` parameter of `url`, with the defaults of
/// [`page_from_query`].
fn page_param(url: &Url) -> u32 {
    url.query_pairs()
        .find(|(key, _)| key == "page")
        .and_then(|(_, value)| parse_leading_digits(&value))
        .filter(|page| *page > 0)
        .unwrap_or(1)
}

fn local_origin() -> Result<Url, BrowseError> {
    Url::parse(LOCAL_ORIGIN).map_err(|e| BrowseError::InvalidRoute(e.to_string()))
}

/// Query string that selects `page` on the list page.
pub fn query_for_page(page: u32) -> String {
    format!("page={}", page)
}

fn parse_leading_digits(value: &str) -> Option<u32> {
    let value = value.trim_start();
    let end = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    value[..end].parse().ok()
}
