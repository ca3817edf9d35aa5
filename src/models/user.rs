use crate::error::ApiResult;
use crate::pagination::{ItemProfileList, ReviewList};
use crate::queries::{self, ItemsQuery, ReviewsQuery};
use crate::transport::Transport;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Marketplace role of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserType {
    User,
    Moderator,
    Bot,
}

/// Public profile of a marketplace user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub username: String,
    pub role: UserType,
    #[serde(rename = "avatarURL")]
    pub avatar_url: String,
    pub is_online: bool,
    pub is_blocked: bool,
    pub rating: u32,
    #[serde(rename = "testimonialCounter")]
    pub reviews_count: u32,
    pub support_chat_id: Option<String>,
    pub system_chat_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl UserProfile {
    /// Fetch one page of this user's listings through `account`.
    ///
    /// Some statuses are only visible when `account` is signed in as this
    /// user. `query.count` must not exceed [`queries::MAX_PAGE_SIZE`].
    pub async fn get_items<T>(&self, account: &T, query: &ItemsQuery) -> ApiResult<ItemProfileList>
    where
        T: Transport + ?Sized,
    {
        queries::fetch_items(account, &self.id, query).await
    }

    /// Fetch one page of reviews left for this user through `account`.
    pub async fn get_reviews<T>(&self, account: &T, query: &ReviewsQuery) -> ApiResult<ReviewList>
    where
        T: Transport + ?Sized,
    {
        queries::fetch_reviews(account, &self.id, query).await
    }

    /// Check if this user is a moderator; bots are not counted
    pub fn is_moderator(&self) -> bool {
        self.role == UserType::Moderator
    }
}
