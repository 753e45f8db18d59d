//! Platform administration service.

pub mod service;

pub use service::PlatformService;
