//! # rentdesk-api
//!
//! HTTP API layer for RentDesk built on Axum.
//!
//! Every request is first resolved into a
//! [`TenantContext`](rentdesk_auth::TenantContext) by the
//! [`TenantScope`](extractors::TenantScope) extractor: the `Host` header
//! selects the landlord, the session token selects the user. Handlers pass
//! that context to the services, which consult the authorization guard
//! before any data access.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::{ApiError, ApiResult};
pub use state::AppState;
