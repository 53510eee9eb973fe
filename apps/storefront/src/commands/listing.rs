//! # Listing Commands
//!
//! Commands behind the home page: search box, cuisine chips, sort dropdown and
//! pager. Every command answers with the freshly evaluated `ListingView`, so
//! the front-end never re-derives pages itself.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use foodfleet_core::listing::SortKey;

use crate::error::ApiError;
use crate::state::ListingView;
use crate::Session;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchArgs {
    pub term: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CuisineArgs {
    pub cuisine: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortArgs {
    pub sort: SortKey,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageArgs {
    pub page: usize,
}

/// Gets the home page for the current query.
pub fn get_listing(session: &Session) -> ListingView {
    debug!("get_listing command");
    session
        .listing
        .view(session.catalog.restaurants(), session.config.page_size)
}

/// Replaces the search term (case-insensitive substring of the name).
///
/// ## Errors
/// `VALIDATION_ERROR` for terms over 100 characters; the query is unchanged.
pub fn search_restaurants(session: &mut Session, args: SearchArgs) -> Result<ListingView, ApiError> {
    debug!(term = %args.term, "search_restaurants command");

    if let Err(e) = session.listing.set_search(&args.term) {
        warn!(error = %e, "Search term rejected");
        return Err(e.into());
    }

    Ok(get_listing(session))
}

/// Selects or deselects a cuisine chip.
pub fn toggle_cuisine(session: &mut Session, args: CuisineArgs) -> ListingView {
    debug!(cuisine = %args.cuisine, "toggle_cuisine command");
    session.listing.toggle_cuisine(&args.cuisine);
    get_listing(session)
}

/// Drops search term and cuisine selection.
pub fn clear_filters(session: &mut Session) -> ListingView {
    debug!("clear_filters command");
    session.listing.clear_filters();
    get_listing(session)
}

pub fn set_sort(session: &mut Session, args: SortArgs) -> ListingView {
    debug!(sort = ?args.sort, "set_sort command");
    session.listing.set_sort(args.sort);
    get_listing(session)
}

/// Moves to another page. Pages outside `1..=total_pages` leave the view
/// unchanged.
pub fn change_page(session: &mut Session, args: PageArgs) -> ListingView {
    debug!(page = args.page, "change_page command");
    session
        .listing
        .change_page(args.page, session.catalog.restaurants(), session.config.page_size);
    get_listing(session)
}
