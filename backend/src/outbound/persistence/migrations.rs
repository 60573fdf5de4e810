//! Embedded schema migrations applied at startup.

use diesel::Connection;
use diesel::pg::PgConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Errors raised while applying migrations.
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    /// The migration connection could not be opened.
    #[error("failed to connect for migrations: {0}")]
    Connect(#[from] diesel::ConnectionError),
    /// A migration script failed.
    #[error("failed to run migrations: {0}")]
    Run(String),
    /// The blocking migration task panicked or was cancelled.
    #[error("migration task aborted: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Apply pending migrations over a synchronous `PgConnection` on a blocking
/// thread.
pub async fn run_migrations(database_url: &str) -> Result<Vec<String>, MigrationError> {
    let url = database_url.to_owned();
    let applied = tokio::task::spawn_blocking(move || -> Result<Vec<String>, MigrationError> {
        let mut conn = PgConnection::establish(&url)?;
        let versions = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|err| MigrationError::Run(err.to_string()))?;
        Ok(versions.iter().map(ToString::to_string).collect())
    })
    .await??;
    info!(count = applied.len(), "database migrations applied");
    Ok(applied)
}
