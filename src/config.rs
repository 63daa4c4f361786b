use std::env;

use anyhow;

/// Connection parameters for the bookstore database.
///
/// All values come from the environment (or an `.env` file) so that no
/// credential ever lives in source. Missing variables fall back to a
/// local, unauthenticated MongoDB.
#[derive(Clone, Debug)]
pub struct Config {
    pub mongodb_uri: String,
    pub database: String,
    pub collection: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Config> {
        dotenvy::dotenv().ok();

        Ok(Config {
            mongodb_uri: env::var("MONGODB_URI")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            database: env::var("MONGODB_DATABASE").unwrap_or_else(|_| "bookstore".to_string()),
            collection: env::var("MONGODB_COLLECTION").unwrap_or_else(|_| "books".to_string()),
        })
    }
}
