//! # Listing State
//!
//! The home page's query, owned by the session and changed only by explicit
//! user actions.
//!
//! ## Page Reset Rules
//! ```text
//! ┌──────────────────────────┬────────────────────┐
//! │ Action                   │ Page afterwards    │
//! ├──────────────────────────┼────────────────────┤
//! │ set_search(term)         │ 1                  │
//! │ toggle_cuisine(tag)      │ 1                  │
//! │ clear_filters()          │ 1                  │
//! │ set_sort(key)            │ unchanged          │
//! │ change_page(p)           │ p, if 1..=total    │
//! └──────────────────────────┴────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use foodfleet_core::listing::{
    cuisine_options, page_window, run_query, ListingPage, ListingQuery, PageLink,
    SortKey,
};
use foodfleet_core::validation::{validate_search_term, ValidationResult};
use foodfleet_core::RestaurantSummary;

/// Everything the home page renders for the current query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingView {
    /// "Matching Restaurants" when filtered, "Popular Choices" otherwise.
    pub heading: String,
    pub query: ListingQuery,
    pub page: ListingPage,
    pub pager: Vec<PageLink>,
    /// Filter chips, in catalog order.
    pub cuisine_options: Vec<String>,
}

/// The session's listing query.
#[derive(Debug, Clone, Default)]
pub struct ListingState {
    query: ListingQuery,
}

impl ListingState {
    /// Starts at page 1 with no filters, sorted by name.
    pub fn new() -> Self {
        ListingState::default()
    }

    pub fn query(&self) -> &ListingQuery {
        &self.query
    }

    /// Replaces the search term and returns to the first page.
    ///
    /// The term is taken as typed; surrounding whitespace is significant.
    pub fn set_search(&mut self, term: &str) -> ValidationResult<()> {
        validate_search_term(term)?;
        self.query = std::mem::take(&mut self.query).with_search(term);
        Ok(())
    }

    /// Adds or removes a cuisine from the selection and returns to the first
    /// page. Returns whether the cuisine is now selected.
    pub fn toggle_cuisine(&mut self, cuisine: &str) -> bool {
        let selected = if self.query.cuisines.remove(cuisine) {
            false
        } else {
            self.query.cuisines.insert(cuisine.to_string());
            true
        };
        self.query.page = 1;
        debug!(cuisine = %cuisine, selected, "Cuisine toggled");
        selected
    }

    /// Drops the search term and cuisine selection; keeps the sort key.
    pub fn clear_filters(&mut self) {
        let sort = self.query.sort;
        self.query = ListingQuery::default().with_sort(sort);
    }

    /// Changes the sort key. The page is kept.
    pub fn set_sort(&mut self, sort: SortKey) {
        self.query.sort = sort;
    }

    /// Moves to page `page` if it exists for the current results.
    ///
    /// Returns `true` when the page changed; out-of-range requests and the
    /// current page are no-ops.
    pub fn change_page(
        &mut self,
        page: usize,
        restaurants: &[RestaurantSummary],
        page_size: usize,
    ) -> bool {
        let total = self.total_pages(restaurants, page_size);
        if page < 1 || page > total || page == self.query.page {
            debug!(page, total, "Page change ignored");
            return false;
        }
        self.query.page = page;
        true
    }

    /// Page count of the current results.
    pub fn total_pages(&self, restaurants: &[RestaurantSummary], page_size: usize) -> usize {
        run_query(restaurants, &self.query, page_size).total_pages
    }

    /// Runs the query and assembles the home page view.
    pub fn view(&self, restaurants: &[RestaurantSummary], page_size: usize) -> ListingView {
        let page = run_query(restaurants, &self.query, page_size);

        let heading = if self.query.is_filtered() {
            "Matching Restaurants"
        } else {
            "Popular Choices"
        };

        ListingView {
            heading: heading.to_string(),
            query: self.query.clone(),
            pager: page_window(page.page, page.total_pages),
            page,
            cuisine_options: cuisine_options(restaurants),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restaurant(id: &str, name: &str, cuisines: &[&str]) -> RestaurantSummary {
        RestaurantSummary {
            id: id.to_string(),
            name: name.to_string(),
            image_url: String::new(),
            cuisine_types: cuisines.iter().map(|c| c.to_string()).collect(),
            rating: 4.0,
            delivery_time_minutes: 30,
            promotional_tag: None,
        }
    }

    fn twenty() -> Vec<RestaurantSummary> {
        (0..20)
            .map(|i| restaurant(&i.to_string(), &format!("Place {:02}", i), &["Italian"]))
            .collect()
    }

    #[test]
    fn test_change_page_bounds() {
        let all = twenty();
        let mut state = ListingState::new();

        assert_eq!(state.total_pages(&all, 8), 3);
        assert!(state.change_page(3, &all, 8));
        assert_eq!(state.query().page, 3);

        assert!(!state.change_page(4, &all, 8));
        assert!(!state.change_page(0, &all, 8));
        assert!(!state.change_page(3, &all, 8));
        assert_eq!(state.query().page, 3);
    }

    #[test]
    fn test_filters_reset_page_but_sort_does_not() {
        let all = twenty();
        let mut state = ListingState::new();
        state.change_page(2, &all, 8);

        state.set_sort(SortKey::Rating);
        assert_eq!(state.query().page, 2);

        state.set_search("Place").unwrap();
        assert_eq!(state.query().page, 1);

        state.change_page(2, &all, 8);
        assert!(state.toggle_cuisine("Italian"));
        assert_eq!(state.query().page, 1);
        assert!(!state.toggle_cuisine("Italian"));
    }

    #[test]
    fn test_search_too_long_keeps_query() {
        let mut state = ListingState::new();
        state.set_search("pizza").unwrap();
        assert!(state.set_search(&"x".repeat(101)).is_err());
        assert_eq!(state.query().search, "pizza");
    }

    #[test]
    fn test_clear_filters_keeps_sort() {
        let mut state = ListingState::new();
        state.set_sort(SortKey::DeliveryTime);
        state.set_search("a").unwrap();
        state.toggle_cuisine("Italian");

        state.clear_filters();
        assert!(!state.query().is_filtered());
        assert_eq!(state.query().sort, SortKey::DeliveryTime);
    }

    #[test]
    fn test_view_heading_and_pager() {
        let all = twenty();
        let mut state = ListingState::new();

        let view = state.view(&all, 8);
        assert_eq!(view.heading, "Popular Choices");
        assert_eq!(view.page.restaurants.len(), 8);
        assert_eq!(view.pager.len(), 3);
        assert_eq!(view.cuisine_options, vec!["Italian"]);

        state.set_search("zzz").unwrap();
        let view = state.view(&all, 8);
        assert_eq!(view.heading, "Matching Restaurants");
        assert_eq!(view.page.total_pages, 0);
        assert!(view.pager.is_empty());
    }
}
