use crate::models::{
    FileObject, GameCategory, GameCategoryDataField, GameCategoryObtainingType, GameProfile,
    UserProfile, UserType,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Listing status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemStatus {
    PendingApproval,
    PendingModeration,
    Approved,
    Declined,
    Blocked,
    Expired,
    Sold,
    Draft,
}

impl ItemStatus {
    /// Wire name, as sent in query filters
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::PendingApproval => "PENDING_APPROVAL",
            ItemStatus::PendingModeration => "PENDING_MODERATION",
            ItemStatus::Approved => "APPROVED",
            ItemStatus::Declined => "DECLINED",
            ItemStatus::Blocked => "BLOCKED",
            ItemStatus::Expired => "EXPIRED",
            ItemStatus::Sold => "SOLD",
            ItemStatus::Draft => "DRAFT",
        }
    }
}

impl std::str::FromStr for ItemStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PENDING_APPROVAL" => Ok(ItemStatus::PendingApproval),
            "PENDING_MODERATION" => Ok(ItemStatus::PendingModeration),
            "APPROVED" => Ok(ItemStatus::Approved),
            "DECLINED" => Ok(ItemStatus::Declined),
            "BLOCKED" => Ok(ItemStatus::Blocked),
            "EXPIRED" => Ok(ItemStatus::Expired),
            "SOLD" => Ok(ItemStatus::Sold),
            "DRAFT" => Ok(ItemStatus::Draft),
            _ => Err(format!("Invalid item status: {}", s)),
        }
    }
}

/// Listing promotion tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriorityType {
    Default,
    Premium,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemLogEvent {
    Paid,
    Sent,
    DealConfirmed,
    DealRolledBack,
    ProblemReported,
    ProblemResolved,
}

/// Full listing record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub description: String,
    pub obtaining_type: Option<GameCategoryObtainingType>,
    pub price: i64,
    pub raw_price: i64,
    pub priority_position: i32,
    pub attachments: Vec<FileObject>,
    pub attributes: serde_json::Map<String, serde_json::Value>,
    pub buyer: Option<UserProfile>,
    pub category: GameCategory,
    pub comment: Option<String>,
    pub data_fields: Option<Vec<GameCategoryDataField>>,
    pub fee_multiplier: f64,
    pub game: GameProfile,
    pub seller_type: UserType,
    pub status: ItemStatus,
    pub user: UserProfile,
}

impl Item {
    /// Discount applied to the listing, in minor units
    pub fn discount(&self) -> i64 {
        self.raw_price - self.price
    }

    pub fn is_sold(&self) -> bool {
        self.status == ItemStatus::Sold
    }
}

/// Summary listing record returned by paginated listing queries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemProfile {
    pub id: String,
    pub slug: String,
    pub priority: PriorityType,
    pub status: ItemStatus,
    pub name: String,
    pub price: i64,
    pub raw_price: i64,
    pub seller_type: UserType,
    pub attachment: FileObject,
    pub user: UserProfile,
    /// Unset until moderation approves the listing
    pub approval_date: Option<DateTime<Utc>>,
    pub priority_position: i32,
    pub views_counter: Option<u32>,
    pub fee_multiplier: f64,
    pub created_at: DateTime<Utc>,
}

/// Entry in an item's action history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemLog {
    pub id: String,
    pub event: ItemLogEvent,
    pub created_at: DateTime<Utc>,
    pub user: UserProfile,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPriorityStatusPriceRange {
    pub min: i64,
    pub max: i64,
}

/// Priority tier offered for a listing within a price range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPriorityStatus {
    pub id: String,
    pub price: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub priority_type: PriorityType,
    /// Duration of the priority period
    pub period: i64,
    pub price_range: ItemPriorityStatusPriceRange,
}

impl ItemPriorityStatus {
    /// Check if a listing price falls inside this tier's range
    pub fn applies_to(&self, price: i64) -> bool {
        price >= self.price_range.min && price <= self.price_range.max
    }
}
