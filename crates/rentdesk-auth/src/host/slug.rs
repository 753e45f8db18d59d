//! Rules for slugs claimed at onboarding.

use rentdesk_core::error::AppError;
use rentdesk_core::result::AppResult;

/// Minimum slug length.
const MIN_LEN: usize = 3;
/// Maximum slug length (one DNS label).
const MAX_LEN: usize = 63;

/// Validate a slug a landlord wants to claim.
///
/// A claimable slug is a single DNS label of 3 to 63 characters drawn from
/// `a-z`, `0-9` and `-`, neither starting nor ending with a hyphen, and not
/// one of the `reserved` labels. The check is case-sensitive: callers fold
/// the slug to lower case first.
pub fn validate_slug(slug: &str, reserved: &[String]) -> AppResult<()> {
    let len = slug.len();
    if !(MIN_LEN..=MAX_LEN).contains(&len) {
        return Err(AppError::validation(format!(
            "Slug must be between {MIN_LEN} and {MAX_LEN} characters"
        )));
    }

    if !slug
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
    {
        return Err(AppError::validation(
            "Slug may only contain lowercase letters, digits, and hyphens",
        ));
    }

    if slug.starts_with('-') || slug.ends_with('-') {
        return Err(AppError::validation(
            "Slug must not start or end with a hyphen",
        ));
    }

    if reserved.iter().any(|r| r.eq_ignore_ascii_case(slug)) {
        return Err(AppError::validation(format!("Slug '{slug}' is reserved")));
    }

    Ok(())
}
