//! Playerok API
//!
//! Typed records for the Playerok marketplace GraphQL API and the
//! cursor-paginated queries that return them. Network I/O goes through an
//! injected [`Transport`]; [`HttpTransport`] is the reqwest-based default.
//!
//! ```no_run
//! # async fn run(user: playerok_api::models::UserProfile) -> playerok_api::ApiResult<()> {
//! use playerok_api::{ClientConfig, HttpTransport, ItemsQuery, ItemStatus};
//!
//! let account = HttpTransport::new(&ClientConfig::default())?;
//! let page = user
//!     .get_items(&account, &ItemsQuery::new().statuses([ItemStatus::Approved]))
//!     .await?;
//! if let Some(cursor) = page.next_cursor() {
//!     let _next = user.get_items(&account, &ItemsQuery::new().after(cursor)).await?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod graphql;
pub mod models;
pub mod pagination;
pub mod queries;
pub mod transport;

// Re-export commonly used types
pub use config::{AppConfig, ClientConfig};
pub use error::{ApiError, ApiResult, BoxError};
pub use models::{ItemStatus, ReviewStatus, UserProfile};
pub use pagination::{Page, PageInfo};
pub use queries::{ItemsQuery, ReviewsQuery, SortDirection};
pub use transport::{HttpTransport, Transport};
