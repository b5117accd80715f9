use std::sync::Arc;

use crate::{
    config::{AppConfig, DatabaseConfig},
    db::connection,
    state::AppState,
};

/// Default configuration pointed at `database_url`, without reading the
/// process environment.
pub fn test_config(database_url: &str) -> AppConfig {
    AppConfig {
        database: DatabaseConfig {
            url: database_url.to_string(),
            ..DatabaseConfig::default()
        },
        ..AppConfig::default()
    }
}

pub async fn test_state(database_url: &str) -> anyhow::Result<Arc<AppState>> {
    let config = test_config(database_url);
    let db = connection::connect(&config.database, false).await?;
    Ok(AppState::new(config, db))
}
