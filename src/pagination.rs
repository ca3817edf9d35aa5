//! Cursor pagination envelope shared by every listable entity.
//!
//! The API returns relay-style connections:
//! `{ edges: [{ node }], pageInfo: {...}, totalCount }`. [`Page::decode`]
//! flattens the edges into `items` in response order.

use std::future::Future;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use thiserror::Error;

use crate::error::{ApiError, ApiResult};
use crate::models::{
    Chat, ChatMessage, Game, GameCategoryAgreement, GameCategoryDataField,
    GameCategoryInstruction, GameCategoryObtainingType, ItemDeal, ItemProfile, Review,
};

/// Cursor position of a page. Cursors are opaque and must be passed back
/// verbatim; an empty page carries no cursors.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub start_cursor: Option<String>,
    pub end_cursor: Option<String>,
    pub has_previous_page: bool,
    pub has_next_page: bool,
}

/// One page of `T`.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page_info: PageInfo,
    pub total_count: u64,
}

pub type ItemProfileList = Page<ItemProfile>;
pub type ReviewList = Page<Review>;
pub type ItemDealList = Page<ItemDeal>;
pub type ChatList = Page<Chat>;
pub type ChatMessageList = Page<ChatMessage>;
pub type GameList = Page<Game>;
pub type GameCategoryAgreementList = Page<GameCategoryAgreement>;
pub type GameCategoryObtainingTypeList = Page<GameCategoryObtainingType>;
pub type GameCategoryDataFieldList = Page<GameCategoryDataField>;
pub type GameCategoryInstructionList = Page<GameCategoryInstruction>;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawConnection<N> {
    edges: Vec<RawEdge<N>>,
    page_info: PageInfo,
    total_count: u64,
}

#[derive(Deserialize)]
struct RawEdge<N> {
    node: N,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ConnectionRef<'a, T> {
    edges: Vec<EdgeRef<'a, T>>,
    page_info: &'a PageInfo,
    total_count: u64,
}

#[derive(Serialize)]
struct EdgeRef<'a, T> {
    node: &'a T,
}

impl<T: DeserializeOwned> Page<T> {
    /// Decode a connection object into a page.
    ///
    /// A connection with the wrong shape, whose `totalCount` is smaller than
    /// the number of edges, or that reports a next page without an
    /// `endCursor`, is a [`ApiError::Decode`]. A node that is not a valid `T`
    /// is a [`ApiError::Validation`] naming the edge.
    pub fn decode(raw: Value) -> ApiResult<Self> {
        let connection: RawConnection<Value> = serde_json::from_value(raw)
            .map_err(|e| ApiError::Decode(format!("invalid connection: {}", e)))?;

        if connection.total_count < connection.edges.len() as u64 {
            return Err(ApiError::Decode(format!(
                "totalCount {} is smaller than the {} edges returned",
                connection.total_count,
                connection.edges.len()
            )));
        }

        if connection.page_info.has_next_page && connection.page_info.end_cursor.is_none() {
            return Err(ApiError::Decode(
                "hasNextPage is true but endCursor is missing".to_string(),
            ));
        }

        let items = connection
            .edges
            .into_iter()
            .enumerate()
            .map(|(index, edge)| {
                serde_json::from_value(edge.node).map_err(|e| {
                    ApiError::Validation(format!(
                        "edge {} is not a valid {}: {}",
                        index,
                        std::any::type_name::<T>(),
                        e
                    ))
                })
            })
            .collect::<ApiResult<Vec<T>>>()?;

        Ok(Self {
            items,
            page_info: connection.page_info,
            total_count: connection.total_count,
        })
    }
}

impl<T> Page<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check if this is the last page
    pub fn is_terminal(&self) -> bool {
        !self.page_info.has_next_page
    }

    /// Cursor to request the following page with, if there is one
    pub fn next_cursor(&self) -> Option<&str> {
        if self.page_info.has_next_page {
            self.page_info.end_cursor.as_deref()
        } else {
            None
        }
    }
}

impl<T: Serialize> Serialize for Page<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ConnectionRef {
            edges: self.items.iter().map(|node| EdgeRef { node }).collect(),
            page_info: &self.page_info,
            total_count: self.total_count,
        }
        .serialize(serializer)
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Page<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Page::decode(raw).map_err(serde::de::Error::custom)
    }
}

/// Upper bound on items gathered by [`collect_pages`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimit {
    /// Maximum number of items to fetch.
    pub max_items: usize,
}

impl PageLimit {
    pub const fn new(max_items: usize) -> Self {
        Self { max_items }
    }
}

/// Pagination error type.
#[derive(Debug, Error)]
pub enum PaginationError {
    /// Underlying query error.
    #[error("pagination fetch failed: {0}")]
    Api(#[from] ApiError),

    /// More pages remained after the limit was reached.
    #[error("pagination limit of {0} items reached")]
    LimitExceeded(usize),
}

/// Follow `end_cursor` from `cursor` until the last page, collecting items.
///
/// `fetch_page` receives the cursor to continue after (`None` for the first
/// page). With a `limit`, items beyond it are dropped and
/// [`PaginationError::LimitExceeded`] is returned if pages remain.
pub async fn collect_pages<T, F, Fut>(
    mut cursor: Option<String>,
    limit: Option<PageLimit>,
    mut fetch_page: F,
) -> Result<Vec<T>, PaginationError>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = ApiResult<Page<T>>>,
{
    let mut out = Vec::new();
    loop {
        if let Some(limit) = limit {
            if out.len() >= limit.max_items {
                return Err(PaginationError::LimitExceeded(limit.max_items));
            }
        }

        let page = fetch_page(cursor.take()).await?;
        let next = page.next_cursor().map(str::to_string);

        match limit {
            Some(limit) => {
                let remaining = limit.max_items.saturating_sub(out.len());
                out.extend(page.items.into_iter().take(remaining));
            }
            None => out.extend(page.items),
        }

        match next {
            Some(next) => cursor = Some(next),
            None => break,
        }
    }

    Ok(out)
}
