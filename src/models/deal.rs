use crate::models::{Chat, Item, ItemLog, Review, Transaction, UserProfile};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Deal lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemDealStatus {
    Paid,
    Pending,
    Sent,
    Confirmed,
    RolledBack,
}

/// Whether the account is buying (`In`) or selling (`Out`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemDealDirection {
    In,
    Out,
}

/// A deal between two users over an item.
///
/// Most links are optional because a deal can be observed at any stage of its
/// lifecycle. `chat` and `review` are boxed: both types can embed a deal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDeal {
    pub id: String,
    pub status: ItemDealStatus,
    pub status_expiration_date: Option<DateTime<Utc>>,
    pub status_description: Option<String>,
    pub direction: ItemDealDirection,
    pub obtaining: Option<String>,
    pub has_problem: bool,
    pub report_problem_enabled: Option<bool>,
    #[serde(rename = "completedBy")]
    pub completed_user: Option<UserProfile>,
    pub props: Option<String>,
    #[serde(rename = "prevStatus")]
    pub previous_status: Option<ItemDealStatus>,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub logs: Option<Vec<ItemLog>>,
    pub transaction: Option<Transaction>,
    pub user: UserProfile,
    pub chat: Option<Box<Chat>>,
    pub item: Item,
    #[serde(rename = "testimonial")]
    pub review: Option<Box<Review>>,
    pub obtaining_fields: Option<serde_json::Map<String, serde_json::Value>>,
    pub comment_from_buyer: Option<String>,
}

impl ItemDeal {
    /// Check if the deal reached a final state
    pub fn is_closed(&self) -> bool {
        matches!(
            self.status,
            ItemDealStatus::Confirmed | ItemDealStatus::RolledBack
        )
    }

    /// Check if the server reports a `prevStatus` different from the current one
    pub fn status_changed(&self) -> bool {
        self.previous_status
            .map(|prev| prev != self.status)
            .unwrap_or(false)
    }
}
