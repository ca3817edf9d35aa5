#![allow(dead_code)]

use async_trait::async_trait;
use http::{HeaderMap, Method};
use playerok_api::{BoxError, Transport};
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::Mutex;
use thiserror::Error;

pub const BASE_URL: &str = "https://playerok.com";
pub const TIMESTAMP: &str = "2024-01-01T10:00:00Z";

/// Failure injected by [`MockTransport`]
#[derive(Debug, Error, PartialEq, Eq)]
#[error("connection reset by peer")]
pub struct ConnectionReset;

/// A request seen by [`MockTransport`]
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub payload: Value,
}

impl RecordedRequest {
    /// Decode the JSON-encoded `variables` string
    pub fn variables(&self) -> Value {
        let raw = self.payload["variables"]
            .as_str()
            .expect("variables should be a string");
        serde_json::from_str(raw).expect("variables should be JSON")
    }

    /// Decode the JSON-encoded `extensions` string
    pub fn extensions(&self) -> Value {
        let raw = self.payload["extensions"]
            .as_str()
            .expect("extensions should be a string");
        serde_json::from_str(raw).expect("extensions should be JSON")
    }
}

/// Transport that replays queued responses and records every request
pub struct MockTransport {
    base_url: String,
    responses: Mutex<VecDeque<Result<Value, ConnectionReset>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue a raw response body
    pub fn respond(&self, body: Value) -> &Self {
        self.responses.lock().unwrap().push_back(Ok(body));
        self
    }

    /// Queue `{"data": {field: connection}}`
    pub fn respond_with(&self, field: &str, connection: Value) -> &Self {
        self.respond(json!({ "data": { field: connection } }))
    }

    /// Queue a transport failure
    pub fn fail(&self) -> &Self {
        self.responses.lock().unwrap().push_back(Err(ConnectionReset));
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests()
            .pop()
            .expect("no request was sent")
    }
}

#[async_trait]
impl Transport for MockTransport {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn request(
        &self,
        method: Method,
        url: &str,
        headers: HeaderMap,
        payload: &Value,
    ) -> Result<Value, BoxError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method,
            url: url.to_string(),
            headers,
            payload: payload.clone(),
        });
        match self.responses.lock().unwrap().pop_front() {
            Some(Ok(body)) => Ok(body),
            Some(Err(err)) => Err(Box::new(err)),
            None => panic!("MockTransport has no queued response"),
        }
    }
}

/// Relay connection over `nodes`, with cursors `c-<id>`
pub fn connection(nodes: Vec<Value>, total_count: u64, has_next_page: bool) -> Value {
    let cursor = |node: &Value| format!("c-{}", node["id"].as_str().unwrap_or_default());
    json!({
        "edges": nodes.iter().map(|node| json!({ "cursor": cursor(node), "node": node })).collect::<Vec<_>>(),
        "pageInfo": {
            "startCursor": nodes.first().map(cursor),
            "endCursor": nodes.last().map(cursor),
            "hasPreviousPage": false,
            "hasNextPage": has_next_page
        },
        "totalCount": total_count
    })
}

/// JSON fixtures for every record type
pub struct TestFixtures;

impl TestFixtures {
    pub fn file(id: &str) -> Value {
        json!({
            "id": id,
            "url": format!("https://cdn.playerok.com/{}.png", id),
            "filename": format!("{}.png", id),
            "mime": "image/png"
        })
    }

    pub fn user(id: &str) -> Value {
        json!({
            "id": id,
            "username": format!("user-{}", id),
            "role": "USER",
            "avatarURL": format!("https://cdn.playerok.com/avatars/{}.png", id),
            "isOnline": true,
            "isBlocked": false,
            "rating": 5,
            "testimonialCounter": 12,
            "supportChatId": null,
            "systemChatId": null,
            "createdAt": TIMESTAMP
        })
    }

    pub fn account() -> Value {
        json!({
            "id": "me",
            "username": "seller",
            "email": "seller@example.com",
            "balance": {
                "id": "bal-1",
                "value": 150000,
                "frozen": 5000,
                "available": 145000,
                "withdrawable": 100000,
                "pendingIncome": 2500
            },
            "stats": {
                "items": { "total": 40, "finished": 31 },
                "deals": {
                    "incoming": { "total": 3, "finished": 3 },
                    "outgoing": { "total": 31, "finished": 30 }
                }
            },
            "role": "USER",
            "avatarURL": "https://cdn.playerok.com/avatars/me.png",
            "isOnline": true,
            "isBlocked": false,
            "isBlockedFor": null,
            "isVerified": true,
            "rating": 5,
            "testimonialCounter": 28,
            "createdAt": TIMESTAMP,
            "supportChatId": "chat-support",
            "systemChatId": "chat-system",
            "hasFrozenBalance": true,
            "hasEnabledNotifications": false
        })
    }

    pub fn agreement() -> Value {
        json!({
            "id": "agr-1",
            "description": "Do not change the account password",
            "iconType": "RESTRICTION",
            "sequence": "1"
        })
    }

    pub fn obtaining_type() -> Value {
        json!({
            "id": "obt-1",
            "name": "Account login",
            "description": "Seller hands over credentials",
            "gameCategoryId": "cat-1",
            "noCommentFromBuyer": false,
            "instructionForBuyer": "Change the password after login",
            "instructionForSeller": null,
            "sequence": 1,
            "feeMultiplier": 1.0,
            "agreements": [Self::agreement()],
            "props": { "minTestimonials": 0, "minTestimonialsForSeller": 3 }
        })
    }

    pub fn data_field() -> Value {
        json!({
            "id": "df-1",
            "label": "Login",
            "type": "OBTAINING_DATA",
            "inputType": "INPUT",
            "copyable": true,
            "hidden": false,
            "required": true,
            "value": null
        })
    }

    pub fn instruction() -> Value {
        json!({ "id": "ins-1", "text": "Describe the account rank" })
    }

    pub fn category() -> Value {
        json!({
            "id": "cat-1",
            "slug": "accounts",
            "name": "Accounts",
            "categoryId": null,
            "gameId": "game-1",
            "obtaining": null,
            "options": [{
                "id": "opt-1",
                "group": "Region",
                "label": "Europe",
                "type": "SELECTOR",
                "field": "region",
                "value": "eu",
                "valueRangeLimit": null
            }],
            "props": null,
            "noCommentFromBuyer": null,
            "instructionForBuyer": null,
            "instructionForSeller": null,
            "useCustomObtaining": false,
            "autoConfirmPeriod": "SEVEN_DAYS",
            "autoModerationMode": true,
            "agreements": [Self::agreement()],
            "feeMultiplier": 1.0
        })
    }

    pub fn game() -> Value {
        json!({
            "id": "game-1",
            "slug": "dota-2",
            "name": "Dota 2",
            "type": "GAME",
            "logo": Self::file("logo"),
            "banner": Self::file("banner"),
            "categories": [Self::category()],
            "createdAt": TIMESTAMP
        })
    }

    pub fn game_profile() -> Value {
        json!({
            "id": "game-1",
            "slug": "dota-2",
            "name": "Dota 2",
            "type": "GAME",
            "logo": Self::file("logo")
        })
    }

    pub fn item_profile(id: &str, status: &str) -> Value {
        json!({
            "id": id,
            "slug": format!("item-{}", id),
            "priority": "DEFAULT",
            "status": status,
            "name": format!("Listing {}", id),
            "price": 9900,
            "rawPrice": 12900,
            "sellerType": "USER",
            "attachment": Self::file(&format!("att-{}", id)),
            "user": Self::user("seller-1"),
            "approvalDate": TIMESTAMP,
            "priorityPosition": 3,
            "viewsCounter": 120,
            "feeMultiplier": 1.0,
            "createdAt": TIMESTAMP
        })
    }

    pub fn item(id: &str) -> Value {
        json!({
            "id": id,
            "slug": format!("item-{}", id),
            "name": format!("Listing {}", id),
            "description": "Ranked account",
            "obtainingType": Self::obtaining_type(),
            "price": 9900,
            "rawPrice": 12900,
            "priorityPosition": 3,
            "attachments": [Self::file("att-1")],
            "attributes": { "region": "eu" },
            "buyer": null,
            "category": Self::category(),
            "comment": null,
            "dataFields": [Self::data_field()],
            "feeMultiplier": 1.0,
            "game": Self::game_profile(),
            "sellerType": "USER",
            "status": "APPROVED",
            "user": Self::user("seller-1")
        })
    }

    pub fn item_log() -> Value {
        json!({
            "id": "log-1",
            "event": "PAID",
            "createdAt": TIMESTAMP,
            "user": Self::user("buyer-1")
        })
    }

    pub fn priority_status() -> Value {
        json!({
            "id": "prio-1",
            "price": 4900,
            "name": "Premium",
            "type": "PREMIUM",
            "period": 24,
            "priceRange": { "min": 0, "max": 100000 }
        })
    }

    pub fn transaction() -> Value {
        json!({
            "id": "tx-1",
            "operation": "SELL",
            "direction": "IN",
            "providerId": "LOCAL",
            "status": "CONFIRMED",
            "value": 9900,
            "createdAt": TIMESTAMP,
            "paymentMethodId": null,
            "statusExpirationDate": null
        })
    }

    pub fn deal(id: &str) -> Value {
        json!({
            "id": id,
            "status": "CONFIRMED",
            "statusExpirationDate": null,
            "statusDescription": null,
            "direction": "OUT",
            "obtaining": null,
            "hasProblem": false,
            "reportProblemEnabled": true,
            "completedBy": Self::user("buyer-1"),
            "props": null,
            "prevStatus": "SENT",
            "completedAt": TIMESTAMP,
            "createdAt": TIMESTAMP,
            "logs": [Self::item_log()],
            "transaction": Self::transaction(),
            "user": Self::user("buyer-1"),
            "chat": null,
            "item": Self::item("item-1"),
            "testimonial": null,
            "obtainingFields": null,
            "commentFromBuyer": null
        })
    }

    pub fn review(id: &str, text: Option<&str>) -> Value {
        json!({
            "id": id,
            "status": "APPROVED",
            "text": text,
            "rating": 5,
            "createdAt": TIMESTAMP,
            "updatedAt": TIMESTAMP,
            "deal": Self::deal(&format!("deal-{}", id)),
            "creator": Self::user("buyer-1"),
            "moderator": null,
            "user": Self::user("seller-1")
        })
    }

    pub fn message(id: &str) -> Value {
        json!({
            "id": id,
            "text": "Thanks, all good",
            "createdAt": TIMESTAMP,
            "deletedAt": null,
            "isRead": true,
            "isSuspicious": false,
            "isBulkMessaging": false,
            "game": null,
            "file": null,
            "user": Self::user("buyer-1"),
            "deal": Self::deal("deal-msg"),
            "item": null,
            "transaction": null,
            "moderator": null,
            "eventByUser": null,
            "eventToUser": null,
            "isAutoResponse": false,
            "event": { "type": "DEAL_CONFIRMED" },
            "buttons": [{ "type": "REDIRECT", "url": "https://playerok.com/deal/1", "text": "Open" }]
        })
    }

    pub fn chat(id: &str) -> Value {
        json!({
            "id": id,
            "type": "PM",
            "status": "NEW",
            "unreadMessagesCounter": 2,
            "bookmarked": false,
            "isTextingAllowed": true,
            "owner": null,
            "deals": [Self::deal("deal-chat")],
            "lastMessage": Self::message("msg-1"),
            "participants": [Self::user("me"), Self::user("buyer-1")],
            "startedAt": TIMESTAMP,
            "finishedAt": null
        })
    }
}
