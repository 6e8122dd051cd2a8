//! Request middleware: session-based current-user extraction.

pub mod auth;
