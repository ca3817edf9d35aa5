//! Playerok API command line
//!
//! Prints a user's listings or reviews as JSON:
//!
//! ```text
//! playerok-api items <user-id> [after-cursor]
//! playerok-api reviews <user-id> [after-cursor]
//! playerok-api summary <user-id>
//! ```

use anyhow::{bail, Context, Result};
use playerok_api::config::{AppConfig, LogFormat};
use playerok_api::queries::{fetch_items, fetch_reviews};
use playerok_api::{HttpTransport, ItemsQuery, ReviewsQuery};
use serde_json::json;
use tracing::{error, info};

const USAGE: &str = "usage: playerok-api <items|reviews|summary> <user-id> [after-cursor]";

enum Command {
    Items { user_id: String, after: Option<String> },
    Reviews { user_id: String, after: Option<String> },
    Summary { user_id: String },
}

impl Command {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self> {
        let name = args.next().context(USAGE)?;
        let user_id = args.next().context(USAGE)?;
        let after = args.next();
        if args.next().is_some() {
            bail!(USAGE);
        }
        match name.as_str() {
            "items" => Ok(Command::Items { user_id, after }),
            "reviews" => Ok(Command::Reviews { user_id, after }),
            "summary" if after.is_none() => Ok(Command::Summary { user_id }),
            _ => bail!(USAGE),
        }
    }
}

fn init_tracing(config: &AppConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("playerok_api={},reqwest=warn", config.log_level).into()
    });
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match config.log_format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables first
    dotenv::dotenv().ok();

    let config = AppConfig::from_env()
        .map_err(|e| anyhow::anyhow!("Configuration error: {}", e))?;
    init_tracing(&config);

    let command = Command::parse(std::env::args().skip(1))?;

    info!("Using API at {}", config.base_url());
    let account = HttpTransport::new(&config.client)?;

    let output = match command {
        Command::Items { user_id, after } => {
            let mut query = ItemsQuery::new();
            query.after_cursor = after;
            serde_json::to_value(fetch_items(&account, &user_id, &query).await?)?
        }
        Command::Reviews { user_id, after } => {
            let mut query = ReviewsQuery::new();
            query.after_cursor = after;
            serde_json::to_value(fetch_reviews(&account, &user_id, &query).await?)?
        }
        Command::Summary { user_id } => {
            let items_query = ItemsQuery::new();
            let reviews_query = ReviewsQuery::new();
            let (items, reviews) = futures::try_join!(
                fetch_items(&account, &user_id, &items_query),
                fetch_reviews(&account, &user_id, &reviews_query),
            )
            .map_err(|e| {
                error!("Summary for {} failed: {}", user_id, e);
                e
            })?;
            json!({
                "userId": user_id,
                "items": { "totalCount": items.total_count, "firstPage": items },
                "reviews": { "totalCount": reviews.total_count, "firstPage": reviews },
            })
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
