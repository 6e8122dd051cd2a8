/**
 * Error Handling
 *
 * This module defines the error types used across the application and
 * their conversion into HTTP responses.
 */

pub mod conversion;
pub mod types;

pub use types::AppError;
