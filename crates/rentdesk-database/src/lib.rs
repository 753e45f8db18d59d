//! # rentdesk-database
//!
//! Data access for RentDesk. The [`store`] traits are the only way the rest
//! of the workspace touches persisted data; every method on a tenant-owned
//! entity takes the owning `TenantId` and filters by it.
//!
//! Two implementations are provided: PostgreSQL [`repositories`] and the
//! [`memory`] store used by tests and local tooling.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use memory::MemoryStore;
pub use store::{
    ApplicationStore, PropertyStore, Stores, TeamStore, TenantDirectory, TenantStore,
};
