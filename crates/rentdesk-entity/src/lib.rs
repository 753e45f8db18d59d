//! # rentdesk-entity
//!
//! Domain entity models for RentDesk. Every struct in this crate
//! represents a database table row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.
//!
//! Tenant-owned rows (`Property`, `RentalApplication`) always carry the
//! owning landlord's `tenant_id`.

pub mod application;
pub mod identity;
pub mod membership;
pub mod property;
pub mod tenant;
