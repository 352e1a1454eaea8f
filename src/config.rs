//! Application Configuration
//!
//! Values baked in at build time through environment variables, with
//! defaults for everything.

use serde::{Deserialize, Serialize};

pub const DEFAULT_GRAPHQL_ENDPOINT: &str = "https://wpe-hiring.tokopedia.net/graphql";
pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_SNAPSHOT_KEY: &str = "contactList";
pub const DEFAULT_FAVORITES_KEY: &str = "favoriteContactIds";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub graphql_endpoint: String,
    /// Sent as `x-hasura-admin-secret` when present
    pub admin_secret: Option<String>,
    pub page_size: usize,
    pub snapshot_key: String,
    pub favorites_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            graphql_endpoint: DEFAULT_GRAPHQL_ENDPOINT.to_string(),
            admin_secret: None,
            page_size: DEFAULT_PAGE_SIZE,
            snapshot_key: DEFAULT_SNAPSHOT_KEY.to_string(),
            favorites_key: DEFAULT_FAVORITES_KEY.to_string(),
        }
    }
}

impl AppConfig {
    /// Read `PHONEBOOK_*` variables captured at compile time
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("PHONEBOOK_GRAPHQL_ENDPOINT"),
            option_env!("PHONEBOOK_ADMIN_SECRET"),
            option_env!("PHONEBOOK_PAGE_SIZE"),
        )
    }

    fn from_values(endpoint: Option<&str>, secret: Option<&str>, page_size: Option<&str>) -> Self {
        let mut config = Self::default();

        if let Some(endpoint) = endpoint.map(str::trim).filter(|e| !e.is_empty()) {
            config.graphql_endpoint = endpoint.to_string();
        }
        config.admin_secret = secret
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        if let Some(raw) = page_size {
            match raw.trim().parse::<usize>() {
                Ok(size) if size > 0 => config.page_size = size,
                _ => log::warn!(
                    "[CONFIG] Ignoring invalid PHONEBOOK_PAGE_SIZE={:?}, using {}",
                    raw,
                    DEFAULT_PAGE_SIZE
                ),
            }
        }
        config
    }
}
