use crate::models::{ItemDeal, RawObject, UserProfile};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Moderation status of a review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewStatus {
    Approved,
    Deleted,
}

impl ReviewStatus {
    /// Wire name, as sent in query filters
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewStatus::Approved => "APPROVED",
            ReviewStatus::Deleted => "DELETED",
        }
    }
}

impl std::str::FromStr for ReviewStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "APPROVED" => Ok(ReviewStatus::Approved),
            "DELETED" => Ok(ReviewStatus::Deleted),
            _ => Err(format!("Invalid review status: {}", s)),
        }
    }
}

/// Review ("testimonial") left on a seller after a deal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub status: ReviewStatus,
    pub text: Option<String>,
    pub rating: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deal: Box<ItemDeal>,
    pub creator: UserProfile,
    pub moderator: Option<RawObject>,
    pub user: UserProfile,
}

impl Review {
    pub fn has_text(&self) -> bool {
        self.text.as_deref().map(|t| !t.trim().is_empty()).unwrap_or(false)
    }
}
