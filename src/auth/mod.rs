/**
 * Authentication and Authorization
 *
 * - `service` - signup and credential verification on top of bcrypt
 * - `sessions` - signed session tokens, the session cookie, and flash
 *   message cookies
 * - `guard` - ownership and login checks applied before mutations
 */

pub mod guard;
pub mod service;
pub mod sessions;
