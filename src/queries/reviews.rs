use serde::Serialize;
use tracing::debug;

use crate::error::ApiResult;
use crate::graphql::{self, TESTIMONIALS};
use crate::models::ReviewStatus;
use crate::pagination::{Page, ReviewList};
use crate::queries::{check_page_size, Pagination, MAX_PAGE_SIZE};
use crate::transport::Transport;

/// Sort order of a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Arguments of the `testimonials` query.
///
/// Optional filters are left out of the request entirely when unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewsQuery {
    /// Page size, at most [`MAX_PAGE_SIZE`]
    pub count: u32,
    pub status: ReviewStatus,
    /// Only reviews with (`true`) or without (`false`) a comment
    pub comment_required: Option<bool>,
    /// Review rating, 1 to 5
    pub rating: Option<u32>,
    pub game_id: Option<String>,
    pub category_id: Option<String>,
    /// Lower bound on the reviewed item's price, in minor units
    pub min_item_price: Option<i64>,
    pub max_item_price: Option<i64>,
    pub sort_direction: SortDirection,
    pub sort_field: String,
    pub after_cursor: Option<String>,
}

impl Default for ReviewsQuery {
    fn default() -> Self {
        Self {
            count: MAX_PAGE_SIZE,
            status: ReviewStatus::Approved,
            comment_required: None,
            rating: None,
            game_id: None,
            category_id: None,
            min_item_price: None,
            max_item_price: None,
            sort_direction: SortDirection::Desc,
            sort_field: "createdAt".to_string(),
            after_cursor: None,
        }
    }
}

impl ReviewsQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    pub fn status(mut self, status: ReviewStatus) -> Self {
        self.status = status;
        self
    }

    pub fn comment_required(mut self, required: bool) -> Self {
        self.comment_required = Some(required);
        self
    }

    pub fn rating(mut self, rating: u32) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn game(mut self, game_id: impl Into<String>) -> Self {
        self.game_id = Some(game_id.into());
        self
    }

    pub fn category(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }

    pub fn min_item_price(mut self, price: i64) -> Self {
        self.min_item_price = Some(price);
        self
    }

    pub fn max_item_price(mut self, price: i64) -> Self {
        self.max_item_price = Some(price);
        self
    }

    pub fn sort(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.sort_field = field.into();
        self.sort_direction = direction;
        self
    }

    pub fn after(mut self, cursor: impl Into<String>) -> Self {
        self.after_cursor = Some(cursor.into());
        self
    }

    /// Variables for `user_id`.
    pub fn variables(&self, user_id: &str) -> ReviewsVariables {
        let item_price = match (self.min_item_price, self.max_item_price) {
            (None, None) => None,
            (min, max) => Some(ItemPriceRange { min, max }),
        };
        ReviewsVariables {
            pagination: Pagination::new(self.count, self.after_cursor.as_deref()),
            filter: ReviewsFilter {
                user_id: user_id.to_string(),
                status: vec![self.status.as_str()],
                has_comment: self.comment_required,
                game_id: self.game_id.clone(),
                category_id: self.category_id.clone(),
                rating: self.rating,
                item_price,
            },
            sort: ReviewsSort {
                direction: self.sort_direction,
                field: self.sort_field.clone(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewsVariables {
    pub pagination: Pagination,
    pub filter: ReviewsFilter,
    pub sort: ReviewsSort,
}

/// Review filter; unset keys are omitted rather than sent as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewsFilter {
    pub user_id: String,
    pub status: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_comment: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_price: Option<ItemPriceRange>,
}

/// Item price bounds; only the bounds that are set are sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ItemPriceRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewsSort {
    pub direction: SortDirection,
    pub field: String,
}

/// Fetch one page of reviews left for `user_id`
pub async fn fetch_reviews<T>(transport: &T, user_id: &str, query: &ReviewsQuery) -> ApiResult<ReviewList>
where
    T: Transport + ?Sized,
{
    let variables = query.variables(user_id);
    let raw = graphql::execute(transport, &TESTIMONIALS, &variables).await?;
    let page = check_page_size(Page::decode(raw)?, query.count)?;
    debug!(
        "reviews for {}: {} of {} (has_next_page={})",
        user_id,
        page.items.len(),
        page.total_count,
        page.page_info.has_next_page
    );
    Ok(page)
}
