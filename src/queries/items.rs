use serde::Serialize;
use tracing::debug;

use crate::error::ApiResult;
use crate::graphql::{self, ITEMS};
use crate::models::ItemStatus;
use crate::pagination::{ItemProfileList, Page};
use crate::queries::{check_page_size, Pagination, MAX_PAGE_SIZE};
use crate::transport::Transport;

/// Arguments of the `items` query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemsQuery {
    /// Page size, at most [`MAX_PAGE_SIZE`]
    pub count: u32,
    /// Statuses to include; `None` (or empty) asks for every status visible
    /// to the caller
    pub statuses: Option<Vec<ItemStatus>>,
    pub after_cursor: Option<String>,
}

impl Default for ItemsQuery {
    fn default() -> Self {
        Self {
            count: MAX_PAGE_SIZE,
            statuses: None,
            after_cursor: None,
        }
    }
}

impl ItemsQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    pub fn statuses(mut self, statuses: impl IntoIterator<Item = ItemStatus>) -> Self {
        self.statuses = Some(statuses.into_iter().collect());
        self
    }

    pub fn after(mut self, cursor: impl Into<String>) -> Self {
        self.after_cursor = Some(cursor.into());
        self
    }

    /// Variables for `user_id`.
    ///
    /// `status` is always present; `null` means every status.
    pub fn variables(&self, user_id: &str) -> ItemsVariables {
        let status = self
            .statuses
            .as_ref()
            .filter(|s| !s.is_empty())
            .map(|s| s.iter().map(|status| status.as_str()).collect());
        ItemsVariables {
            pagination: Pagination::new(self.count, self.after_cursor.as_deref()),
            filter: ItemsFilter {
                user_id: user_id.to_string(),
                status,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemsVariables {
    pub pagination: Pagination,
    pub filter: ItemsFilter,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemsFilter {
    pub user_id: String,
    pub status: Option<Vec<&'static str>>,
}

/// Fetch one page of `user_id`'s listings
pub async fn fetch_items<T>(transport: &T, user_id: &str, query: &ItemsQuery) -> ApiResult<ItemProfileList>
where
    T: Transport + ?Sized,
{
    let variables = query.variables(user_id);
    let raw = graphql::execute(transport, &ITEMS, &variables).await?;
    let page = check_page_size(Page::decode(raw)?, query.count)?;
    debug!(
        "items for {}: {} of {} (has_next_page={})",
        user_id,
        page.items.len(),
        page.total_count,
        page.page_info.has_next_page
    );
    Ok(page)
}
