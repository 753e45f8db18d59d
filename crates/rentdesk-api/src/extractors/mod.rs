//! Custom Axum extractors.

pub mod pagination;
pub mod path;
pub mod tenant;
pub mod validated;

pub use pagination::PaginationParams;
pub use tenant::TenantScope;
pub use validated::ValidatedJson;
