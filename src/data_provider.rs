//! Context handed to the downstream data provider.
//!
//! The data provider itself (dataset access over HTTP) lives outside this
//! crate. The home provider only guarantees that it is constructed with the
//! resolved service URL and database name.

use crate::config::ResolvedConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataProviderContext {
    url: String,
    database: String,
}

impl DataProviderContext {
    pub fn new(url: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            database: database.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn database(&self) -> &str {
        &self.database
    }
}

impl From<&ResolvedConfig> for DataProviderContext {
    fn from(config: &ResolvedConfig) -> Self {
        Self::new(config.service_url.clone(), config.database_name.clone())
    }
}
