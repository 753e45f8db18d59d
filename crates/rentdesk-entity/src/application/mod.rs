//! Rental application entities.

pub mod model;
pub mod status;

pub use model::{NewApplication, RentalApplication};
pub use status::ApplicationStatus;
