use std::time::Duration;

use config::DatabaseConfig;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

pub use sea_orm::DbErr;

pub mod entities;
pub mod models;
pub mod types;

#[derive(Clone)]
pub struct DBService {
    pub conn: DatabaseConnection,
}

impl DBService {
    /// Connects to the configured database and brings the schema up to date.
    pub async fn new(config: &DatabaseConfig) -> Result<DBService, DbErr> {
        let mut options = ConnectOptions::new(config.url.clone());
        options
            .max_connections(10)
            .connect_timeout(Duration::from_secs(5))
            .sqlx_logging(false);

        let conn = Database::connect(options).await?;
        db_migration::Migrator::up(&conn, None).await?;
        tracing::debug!("Database connected and migrations applied");
        Ok(DBService { conn })
    }
}
