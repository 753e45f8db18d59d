//! Route definitions for the RentDesk HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post, put},
};
use tower_http::trace::TraceLayer;

use rentdesk_core::error::AppError;

use crate::error::ApiError;
use crate::handlers;
use crate::middleware::{build_cors_layer, request_logging};
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(health_routes())
        .merge(tenant_routes())
        .merge(team_routes())
        .merge(property_routes())
        .merge(application_routes())
        .merge(onboarding_routes())
        .merge(admin_routes());

    let cors = build_cors_layer(&state.config.server.cors, &state.resolver);

    Router::new()
        .nest("/api", api_routes)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(request_logging))
        .with_state(state)
}

async fn not_found() -> ApiError {
    AppError::not_found("No such route").into()
}

/// Liveness and readiness
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/ready", get(handlers::health::ready))
}

/// The tenant behind the host, and the caller's relationship to it
fn tenant_routes() -> Router<AppState> {
    Router::new()
        .route("/tenant", get(handlers::tenant::current_tenant))
        .route("/me", get(handlers::tenant::whoami))
}

/// Landlord team management
fn team_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/team",
            get(handlers::team::list_members).post(handlers::team::add_member),
        )
        .route(
            "/team/{user_id}",
            put(handlers::team::change_role).delete(handlers::team::remove_member),
        )
}

/// Properties and applying for them
fn property_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/properties",
            get(handlers::property::list_properties).post(handlers::property::create_property),
        )
        .route(
            "/properties/{id}",
            get(handlers::property::get_property).delete(handlers::property::delete_property),
        )
        .route(
            "/properties/{id}/applications",
            post(handlers::property::apply),
        )
}

/// Rental applications
fn application_routes() -> Router<AppState> {
    Router::new()
        .route("/applications/mine", get(handlers::application::list_mine))
        .route(
            "/applications/{id}",
            get(handlers::application::get_application),
        )
        .route(
            "/applications/{id}/decision",
            put(handlers::application::decide),
        )
}

/// Claiming a subdomain on the root domain
fn onboarding_routes() -> Router<AppState> {
    Router::new().route("/onboarding", post(handlers::onboarding::create_tenant))
}

/// Platform operator endpoints
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/admin/tenants",
            get(handlers::admin::tenants::list_tenants),
        )
        .route(
            "/admin/tenants/{id}/disable",
            put(handlers::admin::tenants::disable_tenant),
        )
        .route(
            "/admin/properties",
            get(handlers::admin::properties::list_all_properties),
        )
}
