//! Router configuration.

pub mod router;
