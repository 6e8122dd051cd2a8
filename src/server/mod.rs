/**
 * Server Setup
 *
 * - `config` - database configuration and pool construction
 * - `state` - shared application state
 * - `init` - app construction (state + router)
 */

pub mod config;
pub mod init;
pub mod state;
