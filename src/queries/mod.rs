//! Paginated query accessors.
//!
//! Each accessor builds a persisted-query request, sends it once through the
//! caller's [`Transport`](crate::transport::Transport) and decodes the
//! connection into a [`Page`](crate::pagination::Page). Nothing is cached or
//! retried, so repeating a call with the same cursor asks for the same page.

pub mod items;
pub mod reviews;

pub use items::{fetch_items, ItemsFilter, ItemsQuery, ItemsVariables};
pub use reviews::{
    fetch_reviews, ItemPriceRange, ReviewsFilter, ReviewsQuery, ReviewsSort, ReviewsVariables,
    SortDirection,
};

use serde::Serialize;

use crate::error::{ApiError, ApiResult};
use crate::pagination::Page;

/// Largest page the API serves in one request.
///
/// Accessors do not enforce it; asking for more is a caller error.
pub const MAX_PAGE_SIZE: u32 = 24;

/// `{first, after}` pagination variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub first: u32,
    pub after: Option<String>,
}

impl Pagination {
    pub fn new(first: u32, after: Option<&str>) -> Self {
        Self {
            first,
            after: after.map(str::to_string),
        }
    }
}

/// Reject a page holding more items than were asked for.
pub(crate) fn check_page_size<T>(page: Page<T>, requested: u32) -> ApiResult<Page<T>> {
    if page.items.len() > requested as usize {
        return Err(ApiError::Decode(format!(
            "server returned {} items for a page of {}",
            page.items.len(),
            requested
        )));
    }
    Ok(page)
}
