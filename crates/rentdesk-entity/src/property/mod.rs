//! Property entities.

pub mod model;

pub use model::{NewProperty, Property};
