//! # Listing Query Engine
//!
//! Turns the restaurant catalog plus a [`ListingQuery`] into one page of
//! results for the home page.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Listing Pipeline (single pass, pure)                 │
//! │                                                                         │
//! │  catalog ──► 1. text filter ──► 2. cuisine filter ──► 3. sort ──►       │
//! │              name OR any tag     tags ⊇ selection     stable            │
//! │              contains term       (AND semantics)                        │
//! │              (case-insensitive)                                         │
//! │                                                                         │
//! │          ──► 4. paginate ──► ListingPage { restaurants, total_pages }   │
//! │              [(page-1)*size, page*size)                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Preconditions
//! The engine never fails. The caller is responsible for keeping `page`
//! within `1..=total_pages`; a page outside that range yields an empty slice.
//! An empty result set reports `total_pages == 0`.
//!
//! ## Example
//! ```rust
//! use foodfleet_core::listing::{run_query, ListingQuery, SortKey};
//! use foodfleet_core::RestaurantSummary;
//!
//! let restaurants: Vec<RestaurantSummary> = Vec::new();
//! let query = ListingQuery::default().with_sort(SortKey::Rating);
//! let page = run_query(&restaurants, &query, 8);
//! assert!(page.restaurants.is_empty());
//! assert_eq!(page.total_pages, 0);
//! ```

use std::cmp::Ordering;
use std::collections::BTreeSet;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::RestaurantSummary;

/// Maximum number of numbered links in the pager.
const MAX_PAGE_LINKS: usize = 5;

// =============================================================================
// Query Types
// =============================================================================

/// Listing sort order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum SortKey {
    /// Locale-aware ascending by name.
    #[default]
    Name,
    /// Highest rating first.
    Rating,
    /// Fastest delivery first.
    DeliveryTime,
}

/// What the user has asked the listing page to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ListingQuery {
    /// Free-text term; empty matches everything.
    #[serde(default)]
    pub search: String,

    /// Required cuisine tags; a restaurant must carry all of them.
    #[serde(default)]
    pub cuisines: BTreeSet<String>,

    #[serde(default)]
    pub sort: SortKey,

    /// 1-based page number.
    #[serde(default = "first_page")]
    pub page: usize,
}

fn first_page() -> usize {
    1
}

impl Default for ListingQuery {
    fn default() -> Self {
        ListingQuery {
            search: String::new(),
            cuisines: BTreeSet::new(),
            sort: SortKey::default(),
            page: 1,
        }
    }
}

impl ListingQuery {
    /// Returns a copy with a new search term (page reset to 1).
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self.page = 1;
        self
    }

    /// Returns a copy with the cuisine added to the selection (page reset to 1).
    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisines.insert(cuisine.into());
        self.page = 1;
        self
    }

    /// Returns a copy with a new sort key. The page is kept.
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Returns a copy pointing at another page.
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    /// True when a search term or cuisine selection narrows the listing.
    ///
    /// The home page titles its results "Matching Restaurants" in that case
    /// and "Popular Choices" otherwise.
    pub fn is_filtered(&self) -> bool {
        !self.search.is_empty() || !self.cuisines.is_empty()
    }
}

/// One page of listing results plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ListingPage {
    pub restaurants: Vec<RestaurantSummary>,
    pub total_matches: usize,
    pub total_pages: usize,
    pub page: usize,
    pub page_size: usize,
}

// =============================================================================
// Engine
// =============================================================================

/// Runs the full pipeline and returns the requested page.
pub fn run_query(
    restaurants: &[RestaurantSummary],
    query: &ListingQuery,
    page_size: usize,
) -> ListingPage {
    let matches = matching(restaurants, query);
    let total_matches = matches.len();
    let total_pages = total_pages(total_matches, page_size);

    let start = query.page.saturating_sub(1).saturating_mul(page_size);
    let page = matches
        .into_iter()
        .skip(start)
        .take(if query.page == 0 { 0 } else { page_size })
        .cloned()
        .collect();

    ListingPage {
        restaurants: page,
        total_matches,
        total_pages,
        page: query.page,
        page_size,
    }
}

/// Filters and sorts without paginating.
pub fn matching<'a>(
    restaurants: &'a [RestaurantSummary],
    query: &ListingQuery,
) -> Vec<&'a RestaurantSummary> {
    let term = query.search.to_lowercase();

    let mut matches: Vec<&RestaurantSummary> = restaurants
        .iter()
        .filter(|r| matches_term(r, &term))
        .filter(|r| query.cuisines.iter().all(|c| r.has_cuisine(c)))
        .collect();

    // slice::sort_by is stable, so ties keep catalog order
    match query.sort {
        SortKey::Rating => matches.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::DeliveryTime => matches.sort_by_key(|r| r.delivery_time_minutes),
        SortKey::Name => matches.sort_by(|a, b| collate(&a.name, &b.name)),
    }

    matches
}

/// `ceil(matches / page_size)`; zero matches gives zero pages.
pub fn total_pages(matches: usize, page_size: usize) -> usize {
    matches.div_ceil(page_size.max(1))
}

fn matches_term(restaurant: &RestaurantSummary, term: &str) -> bool {
    term.is_empty()
        || restaurant.name.to_lowercase().contains(term)
        || restaurant
            .cuisine_types
            .iter()
            .any(|c| c.to_lowercase().contains(term))
}

/// Locale-style string ordering for display names.
///
/// Names compare first on their base letters (NFD with combining marks
/// dropped, then lowercased), so "Églantine" files under E. Remaining ties
/// go to the accented case-folded form, then lowercase before uppercase,
/// then the raw string.
///
/// ```rust
/// use std::cmp::Ordering;
/// use foodfleet_core::listing::collate;
///
/// assert_eq!(collate("apple", "Banana"), Ordering::Less);
/// assert_eq!(collate("apple", "Apple"), Ordering::Less);
/// assert_eq!(collate("Taco Town", "sushi Central"), Ordering::Greater);
/// assert_eq!(collate("Églantine", "Zeta"), Ordering::Less);
/// ```
pub fn collate(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| {
            a.chars()
                .flat_map(char::to_lowercase)
                .cmp(b.chars().flat_map(char::to_lowercase))
        })
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

// =============================================================================
// Cuisine Options
// =============================================================================

/// Distinct cuisine tags across the catalog, in first-appearance order.
///
/// These are the filter chips shown above the listing.
pub fn cuisine_options(restaurants: &[RestaurantSummary]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    restaurants
        .iter()
        .flat_map(|r| r.cuisine_types.iter())
        .filter(|c| seen.insert(c.as_str()))
        .cloned()
        .collect()
}

// =============================================================================
// Pager
// =============================================================================

/// One entry in the pager strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", content = "page", rename_all = "camelCase")]
#[ts(export)]
pub enum PageLink {
    Page(usize),
    Ellipsis,
}

/// Numbered pager links around `current`, at most five direct links.
///
/// ## Shapes (total = 10)
/// ```text
/// current 2:  1 2 3 4 … 10
/// current 5:  1 … 4 5 6 … 10
/// current 9:  1 … 7 8 9 10
/// ```
pub fn page_window(current: usize, total: usize) -> Vec<PageLink> {
    let half = MAX_PAGE_LINKS / 2;

    if total <= MAX_PAGE_LINKS {
        return (1..=total).map(PageLink::Page).collect();
    }

    let mut links = Vec::with_capacity(MAX_PAGE_LINKS + 2);
    if current <= half + 1 {
        links.extend((1..MAX_PAGE_LINKS).map(PageLink::Page));
        links.push(PageLink::Ellipsis);
        links.push(PageLink::Page(total));
    } else if current >= total - half {
        links.push(PageLink::Page(1));
        links.push(PageLink::Ellipsis);
        links.extend((total - (MAX_PAGE_LINKS - 2)..=total).map(PageLink::Page));
    } else {
        links.push(PageLink::Page(1));
        links.push(PageLink::Ellipsis);
        links.extend((current + 1 - half..=current + half - 1).map(PageLink::Page));
        links.push(PageLink::Ellipsis);
        links.push(PageLink::Page(total));
    }
    links
}

// =============================================================================
// Unit Tests
// =============================================================================
