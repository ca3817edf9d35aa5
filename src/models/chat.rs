use crate::models::{
    FileObject, Game, ItemDeal, ItemProfile, RawObject, Transaction, UserProfile,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChatType {
    Pm,
    Notifications,
    Support,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChatStatus {
    New,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChatMessageButtonType {
    Redirect,
    Lottery,
}

/// Interactive button attached to a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessageButton {
    #[serde(rename = "type")]
    pub button_type: ChatMessageButtonType,
    pub url: Option<String>,
    pub text: String,
}

/// Message in a chat, optionally tied to a deal, item or transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub is_read: bool,
    pub is_suspicious: bool,
    pub is_bulk_messaging: bool,
    pub game: Option<Game>,
    pub file: Option<FileObject>,
    pub user: UserProfile,
    pub deal: Option<Box<ItemDeal>>,
    pub item: Option<ItemProfile>,
    pub transaction: Option<Transaction>,
    pub moderator: Option<RawObject>,
    pub event_by_user: Option<UserProfile>,
    pub event_to_user: Option<UserProfile>,
    pub is_auto_response: bool,
    pub event: Option<RawObject>,
    pub buttons: Vec<ChatMessageButton>,
}

impl ChatMessage {
    /// System messages carry an event instead of user text
    pub fn is_event(&self) -> bool {
        self.event.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chat {
    pub id: String,
    #[serde(rename = "type")]
    pub chat_type: ChatType,
    pub status: Option<ChatStatus>,
    pub unread_messages_counter: u32,
    pub bookmarked: Option<bool>,
    pub is_texting_allowed: Option<bool>,
    /// Set only for chats with a bot
    pub owner: Option<UserProfile>,
    pub deals: Option<Vec<ItemDeal>>,
    pub last_message: Option<Box<ChatMessage>>,
    #[serde(rename = "participants")]
    pub users: Vec<UserProfile>,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl Chat {
    /// The participant that is not `me`
    pub fn companion(&self, me: &str) -> Option<&UserProfile> {
        self.users.iter().find(|u| u.id != me)
    }

    pub fn has_unread(&self) -> bool {
        self.unread_messages_counter > 0
    }
}
