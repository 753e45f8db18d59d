//! Property service.

pub mod service;

pub use service::{CreatePropertyRequest, PropertyService};
