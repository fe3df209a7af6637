use db::DBService;
use sea_orm::{ConnectOptions, Database};
use sea_orm_migration::MigratorTrait;

/// Fresh in-memory SQLite database with the full schema applied. A single
/// pooled connection keeps every statement on the same in-memory store.
pub async fn sqlite_db() -> DBService {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).sqlx_logging(false);
    let conn = Database::connect(options)
        .await
        .expect("failed to open in-memory sqlite");
    db_migration::Migrator::up(&conn, None)
        .await
        .expect("failed to run migrations");
    DBService { conn }
}
