//! Request handlers, grouped by resource.

pub mod admin;
pub mod application;
pub mod health;
pub mod onboarding;
pub mod property;
pub mod team;
pub mod tenant;
