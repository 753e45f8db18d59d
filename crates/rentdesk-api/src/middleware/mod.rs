//! Tower middleware applied to the router.

pub mod cors;
pub mod logging;

pub use cors::build_cors_layer;
pub use logging::request_logging;
