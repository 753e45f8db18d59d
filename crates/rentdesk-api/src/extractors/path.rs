//! Typed path parameter helpers.

use std::str::FromStr;

use rentdesk_core::error::AppError;

/// Parses an identifier from a path segment.
///
/// A malformed identifier names nothing that exists, so it reads as
/// not-found rather than as a validation failure.
pub fn parse_id<T: FromStr>(s: &str) -> Result<T, AppError> {
    s.parse()
        .map_err(|_| AppError::not_found(format!("No resource with id '{s}'")))
}
