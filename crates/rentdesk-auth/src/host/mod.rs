//! Host header resolution and slug validation.

pub mod resolver;
pub mod slug;

pub use resolver::{HostResolver, resolve};
pub use slug::validate_slug;
