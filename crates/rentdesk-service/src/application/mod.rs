//! Rental application service.

pub mod service;

pub use service::{ApplicationService, DecisionRequest, SubmitApplicationRequest};
