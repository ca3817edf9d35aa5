//! The signed-in account's own profile, with balance and deal statistics.

use crate::models::UserType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account balance, all amounts in minor units
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountBalance {
    pub id: String,
    pub value: i64,
    pub frozen: i64,
    pub available: i64,
    pub withdrawable: i64,
    pub pending_income: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountIncomingDealsStats {
    pub total: u32,
    pub finished: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountOutgoingDealsStats {
    pub total: u32,
    pub finished: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountDealsStats {
    pub incoming: AccountIncomingDealsStats,
    pub outgoing: AccountOutgoingDealsStats,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountItemsStats {
    pub total: u32,
    pub finished: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountStats {
    pub items: AccountItemsStats,
    pub deals: AccountDealsStats,
}

/// Profile of the account the client is signed in as
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountProfile {
    pub id: String,
    pub username: String,
    pub email: String,
    pub balance: AccountBalance,
    pub stats: AccountStats,
    pub role: UserType,
    #[serde(rename = "avatarURL")]
    pub avatar_url: String,
    pub is_online: bool,
    pub is_blocked: bool,
    /// Block reason, when the account is blocked
    pub is_blocked_for: Option<String>,
    pub is_verified: bool,
    pub rating: u32,
    #[serde(rename = "testimonialCounter")]
    pub reviews_count: u32,
    pub created_at: DateTime<Utc>,
    pub support_chat_id: String,
    pub system_chat_id: String,
    pub has_frozen_balance: bool,
    pub has_enabled_notifications: bool,
}

impl AccountProfile {
    /// Balance that can be spent right now
    pub fn spendable(&self) -> i64 {
        self.balance.available
    }
}
