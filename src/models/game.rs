//! Game/application catalog and the category metadata that describes how an
//! item in a category is fulfilled.

use crate::models::FileObject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameType {
    Game,
    Application,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameCategoryAgreementIconType {
    Restriction,
    Confirmation,
}

/// Whether a data field describes the item or is filled in on delivery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameCategoryDataFieldType {
    ItemData,
    ObtainingData,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameCategoryDataFieldInputType {
    Input,
    PhoneNumber,
    Email,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameCategoryOptionType {
    Selector,
    Switch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameCategoryAutoConfirmPeriod {
    SevenDays,
}

/// Buyer agreement shown before purchase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameCategoryAgreement {
    pub id: String,
    pub description: String,
    pub icon_type: GameCategoryAgreementIconType,
    pub sequence: String,
}

/// Review thresholds a buyer/seller must meet in a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameCategoryProps {
    #[serde(rename = "minTestimonials")]
    pub min_reviews: u32,
    #[serde(rename = "minTestimonialsForSeller")]
    pub min_reviews_for_seller: u32,
}

/// A way an item in a category can be delivered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameCategoryObtainingType {
    pub id: String,
    pub name: String,
    pub description: String,
    pub game_category_id: String,
    pub no_comment_from_buyer: bool,
    pub instruction_for_buyer: Option<String>,
    pub instruction_for_seller: Option<String>,
    pub sequence: i32,
    pub fee_multiplier: f64,
    pub agreements: Vec<GameCategoryAgreement>,
    pub props: GameCategoryProps,
}

/// Field of item data, some of it sent to the buyer after purchase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameCategoryDataField {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: GameCategoryDataFieldType,
    pub input_type: GameCategoryDataFieldInputType,
    pub copyable: bool,
    pub hidden: bool,
    pub required: bool,
    pub value: Option<String>,
}

/// Selectable filter option of a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameCategoryOption {
    pub id: String,
    pub group: String,
    pub label: String,
    #[serde(rename = "type")]
    pub option_type: GameCategoryOptionType,
    pub field: String,
    pub value: String,
    pub value_range_limit: Option<i64>,
}

/// Selling/buying instruction for a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameCategoryInstruction {
    pub id: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameCategory {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub category_id: Option<String>,
    pub game_id: Option<String>,
    pub obtaining: Option<String>,
    pub options: Option<Vec<GameCategoryOption>>,
    pub props: Option<String>,
    pub no_comment_from_buyer: Option<bool>,
    pub instruction_for_buyer: Option<String>,
    pub instruction_for_seller: Option<String>,
    pub use_custom_obtaining: bool,
    pub auto_confirm_period: Option<GameCategoryAutoConfirmPeriod>,
    pub auto_moderation_mode: Option<bool>,
    pub agreements: Option<Vec<GameCategoryAgreement>>,
    pub fee_multiplier: Option<f64>,
}

/// Game or application in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: String,
    pub slug: String,
    pub name: String,
    #[serde(rename = "type")]
    pub game_type: GameType,
    pub logo: FileObject,
    pub banner: FileObject,
    pub categories: Vec<GameCategory>,
    pub created_at: DateTime<Utc>,
}

impl Game {
    /// Look up a category by its slug
    pub fn category(&self, slug: &str) -> Option<&GameCategory> {
        self.categories.iter().find(|c| c.slug == slug)
    }
}

/// Reduced game record embedded in listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameProfile {
    pub id: String,
    pub slug: String,
    pub name: String,
    #[serde(rename = "type")]
    pub game_type: GameType,
    pub logo: FileObject,
}
