//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They enforce existence
//! and uniqueness rules, skip writes that would not change anything, and return domain
//! models; controllers hand those models to the assemblers.

pub mod coach;
pub mod hall;
pub mod role_coach;
pub mod team;
pub mod training_session;

#[cfg(test)]
mod test;

use sea_orm::{DbErr, SqlErr};

use crate::server::error::AppError;

/// Maps a unique index violation to a 409 carrying `message`.
///
/// Covers inserts racing past the `exists` check; any other database error passes
/// through unchanged.
fn conflict_on_unique(err: DbErr, message: String) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::Conflict(message),
        _ => err.into(),
    }
}
