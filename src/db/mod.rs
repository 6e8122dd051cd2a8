//! Database schema management.

pub mod schema;
