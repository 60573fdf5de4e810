//! Shared helpers for Diesel repository implementations.
//!
//! - Error mapping from pool and Diesel errors into each port's
//!   `connection` / `query` constructors.
//! - `LIKE` pattern escaping for user-supplied search terms.

use tracing::debug;

use super::pool::PoolError;

/// Map pool errors into a repository-specific connection error constructor.
pub fn map_basic_pool_error<E, C>(error: PoolError, connection: C) -> E
where
    C: FnOnce(String) -> E,
{
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    connection(message)
}

/// Map Diesel errors into query/connection constructors.
///
/// Closed connections map to connection errors; every other failure is a
/// query error. `operation` names the repository call for the debug log.
pub fn map_basic_diesel_error<E, Q, C>(
    error: diesel::result::Error,
    operation: &str,
    query: Q,
    connection: C,
) -> E
where
    Q: FnOnce(&'static str) -> E,
    C: FnOnce(&'static str) -> E,
{
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), %operation, "diesel operation failed");
        }
        _ => debug!(
            error_message = %error,
            %operation,
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => query("record not found"),
        DieselError::QueryBuilderError(_) => query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            connection("database connection error")
        }
        DieselError::DatabaseError(_, _) => query("database error"),
        _ => query("database error"),
    }
}

/// Escape `%`, `_` and `\` so `term` matches literally inside `LIKE`.
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// `%term%` with `term` escaped.
pub fn contains_pattern(term: &str) -> String {
    format!("%{}%", escape_like(term))
}
