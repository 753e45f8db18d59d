//! Subdomain slug newtype.

use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::postgres::{PgTypeInfo, PgValueRef};
use sqlx::{Decode, Encode, Postgres, Type};

/// A landlord's subdomain label.
///
/// Always stored lower-cased so that comparisons are case-insensitive.
/// Construction does not validate the label's characters; see the
/// onboarding validation for the stricter rules applied to new slugs.
/// Every way in, including deserialization and database decoding, folds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub struct TenantSlug(String);

impl TenantSlug {
    /// Create a slug, folding it to lower case.
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().to_lowercase())
    }

    /// Return the slug as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the slug, returning the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for TenantSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TenantSlug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TenantSlug {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for TenantSlug {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<TenantSlug> for String {
    fn from(slug: TenantSlug) -> Self {
        slug.0
    }
}

impl Type<Postgres> for TenantSlug {
    fn type_info() -> PgTypeInfo {
        <String as Type<Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <String as Type<Postgres>>::compatible(ty)
    }
}

impl<'q> Encode<'q, Postgres> for TenantSlug {
    fn encode_by_ref(
        &self,
        buf: &mut <Postgres as sqlx::Database>::ArgumentBuffer<'q>,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <String as Encode<'q, Postgres>>::encode_by_ref(&self.0, buf)
    }
}

impl<'r> Decode<'r, Postgres> for TenantSlug {
    fn decode(value: PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        <String as Decode<'r, Postgres>>::decode(value).map(Self::new)
    }
}
