//! Team membership mutation policy.

pub mod policy;

pub use policy::{ensure_not_owner, removal_capability};
