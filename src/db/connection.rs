use std::time::Duration;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use crate::{config::DatabaseConfig, migration::Migrator};

const SQLITE_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Opens the SQLite pool and applies pending migrations.
pub async fn connect(cfg: &DatabaseConfig, debug: bool) -> anyhow::Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(cfg.url.clone());
    options
        .max_connections(cfg.max_connections)
        .min_connections(cfg.min_idle)
        .connect_timeout(Duration::from_secs(5))
        .sqlx_logging(debug);

    let db = Database::connect(options).await?;
    db.execute_unprepared(&format!("PRAGMA busy_timeout = {SQLITE_BUSY_TIMEOUT_MS}"))
        .await?;

    info!("applying database migrations");
    Migrator::up(&db, None).await?;
    Ok(db)
}
