mod helpers;

use chrono::{TimeZone, Utc};
use helpers::*;
use playerok_api::models::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};

/// Parse a fixture, serialize it back and parse again; both records must match
fn round_trip<T>(fixture: Value) -> T
where
    T: DeserializeOwned + Serialize + PartialEq + std::fmt::Debug,
{
    let record: T = parse(fixture).expect("fixture should parse");
    let encoded = serde_json::to_value(&record).unwrap();
    let again: T = parse(encoded).expect("serialized record should parse");
    assert_eq!(record, again);
    record
}

#[test]
fn test_user_profile() {
    let user: UserProfile = round_trip(TestFixtures::user("u1"));
    assert_eq!(user.id, "u1");
    assert_eq!(user.role, UserType::User);
    assert_eq!(user.reviews_count, 12);
    assert_eq!(user.created_at, Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap());
    assert!(!user.is_moderator());

    let mut raw = TestFixtures::user("mod-1");
    raw["role"] = json!("MODERATOR");
    assert!(parse::<UserProfile>(raw).unwrap().is_moderator());
    let mut raw = TestFixtures::user("bot-1");
    raw["role"] = json!("BOT");
    assert!(!parse::<UserProfile>(raw).unwrap().is_moderator());

    let encoded = serde_json::to_value(&user).unwrap();
    assert!(encoded.get("avatarURL").is_some());
    assert_eq!(encoded["testimonialCounter"], 12);
}

#[test]
fn test_account_profile() {
    let account: AccountProfile = round_trip(TestFixtures::account());
    assert_eq!(account.balance.pending_income, 2500);
    assert_eq!(account.stats.deals.outgoing.finished, 30);
    assert_eq!(account.spendable(), 145000);
    assert_eq!(account.is_blocked_for, None);
}

#[test]
fn test_file_object() {
    let file: FileObject = round_trip(TestFixtures::file("f1"));
    assert!(file.is_image());

    let bare: FileObject = parse(json!({ "id": "f2", "url": "https://cdn/f2" })).unwrap();
    assert_eq!(bare.filename, None);
    assert!(!bare.is_image());
}

#[test]
fn test_game_catalog() {
    let game: Game = round_trip(TestFixtures::game());
    assert_eq!(game.game_type, GameType::Game);
    let category = game.category("accounts").expect("category by slug");
    assert_eq!(
        category.auto_confirm_period,
        Some(GameCategoryAutoConfirmPeriod::SevenDays)
    );
    assert!(game.category("keys").is_none());

    let _: GameProfile = round_trip(TestFixtures::game_profile());
    let _: GameCategoryInstruction = round_trip(TestFixtures::instruction());

    let field: GameCategoryDataField = round_trip(TestFixtures::data_field());
    assert_eq!(field.field_type, GameCategoryDataFieldType::ObtainingData);

    let obtaining: GameCategoryObtainingType = round_trip(TestFixtures::obtaining_type());
    assert_eq!(obtaining.props.min_reviews_for_seller, 3);
    assert_eq!(
        obtaining.agreements[0].icon_type,
        GameCategoryAgreementIconType::Restriction
    );
}

#[test]
fn test_item_records() {
    let item: Item = round_trip(TestFixtures::item("i1"));
    assert_eq!(item.discount(), 3000);
    assert!(!item.is_sold());
    assert!(item.buyer.is_none());
    assert_eq!(item.attributes["region"], "eu");

    let profile: ItemProfile = round_trip(TestFixtures::item_profile("i2", "SOLD"));
    assert_eq!(profile.status, ItemStatus::Sold);
    assert_eq!(profile.priority, PriorityType::Default);

    let log: ItemLog = round_trip(TestFixtures::item_log());
    assert_eq!(log.event, ItemLogEvent::Paid);

    let priority: ItemPriorityStatus = round_trip(TestFixtures::priority_status());
    assert!(priority.applies_to(4900));
}

#[test]
fn test_transaction() {
    let tx: Transaction = round_trip(TestFixtures::transaction());
    assert_eq!(tx.operation, TransactionOperation::Sell);
    assert_eq!(tx.signed_value(), 9900);
    assert!(tx.is_confirmed());
}

#[test]
fn test_deal_and_review() {
    let deal: ItemDeal = round_trip(TestFixtures::deal("d1"));
    assert!(deal.is_closed());
    assert!(deal.status_changed());
    assert_eq!(deal.previous_status, Some(ItemDealStatus::Sent));

    let mut raw = TestFixtures::deal("d-same");
    raw["prevStatus"] = json!("CONFIRMED");
    assert!(!parse::<ItemDeal>(raw).unwrap().status_changed());
    let mut raw = TestFixtures::deal("d-new");
    raw["prevStatus"] = json!(null);
    assert!(!parse::<ItemDeal>(raw).unwrap().status_changed());
    assert_eq!(deal.completed_user.as_ref().map(|u| u.id.as_str()), Some("buyer-1"));

    let review: Review = round_trip(TestFixtures::review("r1", Some("Fast delivery")));
    assert!(review.has_text());
    assert_eq!(review.deal.id, "deal-r1");
    assert_eq!(review.deal.item.id, "item-1");

    let silent: Review = parse(TestFixtures::review("r2", Some("   "))).unwrap();
    assert!(!silent.has_text());
}

#[test]
fn test_deal_with_embedded_review() {
    let mut raw = TestFixtures::deal("d2");
    raw["testimonial"] = TestFixtures::review("r3", None);
    let deal: ItemDeal = round_trip(raw);
    let review = deal.review.as_ref().expect("embedded review");
    assert_eq!(review.id, "r3");
    assert_eq!(review.deal.id, "deal-r3");
}

#[test]
fn test_chat_and_messages() {
    let chat: Chat = round_trip(TestFixtures::chat("ch1"));
    assert_eq!(chat.chat_type, ChatType::Pm);
    assert!(chat.has_unread());
    assert_eq!(chat.companion("me").map(|u| u.id.as_str()), Some("buyer-1"));

    let message = chat.last_message.as_ref().expect("last message");
    assert!(message.is_event());
    assert_eq!(message.buttons[0].button_type, ChatMessageButtonType::Redirect);
    assert_eq!(message.deal.as_ref().map(|d| d.id.as_str()), Some("deal-msg"));

    let encoded = serde_json::to_value(&chat).unwrap();
    assert_eq!(encoded["participants"].as_array().map(Vec::len), Some(2));
}

#[test]
fn test_missing_required_field_is_validation_error() {
    let mut raw = TestFixtures::item("i1");
    raw.as_object_mut().unwrap().remove("id");
    let err = parse::<Item>(raw).unwrap_err();
    assert!(err.is_validation(), "{:?}", err);
}

#[test]
fn test_unknown_enum_value_is_validation_error() {
    let raw = TestFixtures::item_profile("i1", "ARCHIVED");
    let err = parse::<ItemProfile>(raw).unwrap_err();
    assert!(err.is_validation(), "{:?}", err);
}

#[test]
fn test_wrong_type_is_validation_error() {
    let mut raw = TestFixtures::transaction();
    raw["value"] = json!("99.00");
    assert!(parse::<Transaction>(raw).unwrap_err().is_validation());
}
