//! PostgreSQL repository implementations of the store traits.

pub mod application;
pub mod membership;
pub mod property;
pub mod tenant;

pub use application::ApplicationRepository;
pub use membership::MembershipRepository;
pub use property::PropertyRepository;
pub use tenant::TenantRepository;

use rentdesk_core::error::{AppError, ErrorKind};

/// Map a sqlx error, turning unique-constraint violations into `Conflict`.
pub(crate) fn map_write_error(err: sqlx::Error, context: &str, conflict: &str) -> AppError {
    match err {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            AppError::conflict(conflict.to_string())
        }
        e => AppError::with_source(ErrorKind::Database, context.to_string(), e),
    }
}
