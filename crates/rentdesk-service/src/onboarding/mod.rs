//! Landlord onboarding service.

pub mod service;

pub use service::{CreateTenantRequest, OnboardingService};
