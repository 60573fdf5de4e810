//! PostgreSQL-backed `InboxRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{InboxRepository, InboxRepositoryError};
use crate::domain::{InboxMessage, NewInboxMessage};

use super::diesel_helpers::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{InboxMessageRow, NewInboxMessageRow};
use super::pool::{DbPool, PoolError};
use super::schema::inbox_messages;

/// Diesel-backed implementation of the `InboxRepository` port.
#[derive(Clone)]
pub struct DieselInboxRepository {
    pool: DbPool,
}

impl DieselInboxRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> InboxRepositoryError {
    map_basic_pool_error(error, InboxRepositoryError::connection)
}

fn map_diesel_error(operation: &'static str) -> impl FnOnce(diesel::result::Error) -> InboxRepositoryError {
    move |error| {
        map_basic_diesel_error(
            error,
            operation,
            InboxRepositoryError::query,
            InboxRepositoryError::connection,
        )
    }
}

#[async_trait]
impl InboxRepository for DieselInboxRepository {
    async fn save(&self, message: &NewInboxMessage) -> Result<InboxMessage, InboxRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: InboxMessageRow = diesel::insert_into(inbox_messages::table)
            .values(NewInboxMessageRow::from(message))
            .returning(InboxMessageRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error("save_message"))?;
        Ok(row.into())
    }

    async fn list_messages(&self) -> Result<Vec<InboxMessage>, InboxRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<InboxMessageRow> = inbox_messages::table
            .select(InboxMessageRow::as_select())
            .order_by((inbox_messages::received_at.desc(), inbox_messages::id.desc()))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error("list_messages"))?;
        Ok(rows.into_iter().map(InboxMessage::from).collect())
    }

    async fn mark_read(
        &self,
        id: i32,
        updated_at: DateTime<Utc>,
    ) -> Result<bool, InboxRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let updated = diesel::update(inbox_messages::table.find(id))
            .set((
                inbox_messages::unread.eq(false),
                inbox_messages::updated_at.eq(updated_at),
            ))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error("mark_message_read"))?;
        Ok(updated > 0)
    }
}
