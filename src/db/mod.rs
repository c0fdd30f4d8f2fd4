//! Database module: read-only access to the breached-password table.
//!
//! Layout:
//! - `schema.rs`: SQL DDL describing the `pwdlist` table
//! - `sqlite.rs`: pool setup and the existence lookup

pub mod schema;
pub mod sqlite;

pub use sqlite::{PwdListStorage, connect};
