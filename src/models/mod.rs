//! Domain models for the Playerok marketplace.
//!
//! Every record here is an immutable value built by deserializing a server
//! response. Field names on the wire are the API's camelCase names.

pub mod account;
pub mod chat;
pub mod deal;
pub mod file;
pub mod game;
pub mod item;
pub mod review;
pub mod transaction;
pub mod user;

// Re-export all models for convenient access
pub use account::{
    AccountBalance, AccountDealsStats, AccountIncomingDealsStats, AccountItemsStats,
    AccountOutgoingDealsStats, AccountProfile, AccountStats,
};
pub use chat::{Chat, ChatMessage, ChatMessageButton, ChatMessageButtonType, ChatStatus, ChatType};
pub use deal::{ItemDeal, ItemDealDirection, ItemDealStatus};
pub use file::FileObject;
pub use game::{
    Game, GameCategory, GameCategoryAgreement, GameCategoryAgreementIconType,
    GameCategoryAutoConfirmPeriod, GameCategoryDataField, GameCategoryDataFieldInputType,
    GameCategoryDataFieldType, GameCategoryInstruction, GameCategoryObtainingType,
    GameCategoryOption, GameCategoryOptionType, GameCategoryProps, GameProfile, GameType,
};
pub use item::{
    Item, ItemLog, ItemLogEvent, ItemPriorityStatus, ItemPriorityStatusPriceRange, ItemProfile,
    ItemStatus, PriorityType,
};
pub use review::{Review, ReviewStatus};
pub use transaction::{
    Transaction, TransactionDirection, TransactionOperation, TransactionProviderId,
    TransactionStatus,
};
pub use user::{UserProfile, UserType};

use crate::error::{ApiError, ApiResult};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Opaque payload for objects the API exposes without a stable schema
/// (message events, moderators).
pub type RawObject = serde_json::Map<String, Value>;

/// Build a record from a JSON value.
///
/// Any missing required field, wrong type or unknown enum variant is reported
/// as [`ApiError::Validation`]; nothing is defaulted.
pub fn parse<T: DeserializeOwned>(value: Value) -> ApiResult<T> {
    serde_json::from_value(value).map_err(|e| {
        ApiError::Validation(format!("{}: {}", std::any::type_name::<T>(), e))
    })
}
