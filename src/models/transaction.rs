use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What a ledger entry was created for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionOperation {
    Deposit,
    Buy,
    Sell,
    ItemDefaultPriority,
    ItemPremiumPriority,
    Withdraw,
    ManualBalanceIncrease,
    ManualBalanceDecrease,
    ReferralBonus,
    SteamDeposit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionDirection {
    In,
    Out,
}

/// Payment provider that processed a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionProviderId {
    Local,
    Sbp,
    BankCardRu,
    BankCardBy,
    BankCard,
    Ymoney,
    Usdt,
    PendingIncome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Pending,
    Processing,
    Confirmed,
    RolledBack,
    Failed,
}

/// Financial ledger entry; `value` is in minor units
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub operation: TransactionOperation,
    pub direction: TransactionDirection,
    pub provider_id: TransactionProviderId,
    pub status: TransactionStatus,
    pub value: i64,
    pub created_at: DateTime<Utc>,
    pub payment_method_id: Option<String>,
    pub status_expiration_date: Option<DateTime<Utc>>,
}

impl Transaction {
    /// Value with the sign of its direction
    pub fn signed_value(&self) -> i64 {
        match self.direction {
            TransactionDirection::In => self.value,
            TransactionDirection::Out => -self.value,
        }
    }

    pub fn is_confirmed(&self) -> bool {
        self.status == TransactionStatus::Confirmed
    }
}
