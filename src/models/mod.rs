/**
 * Data Model
 *
 * Entity structs and their database queries. Each entity lives in its
 * own module with free async functions taking the connection pool, so
 * derived relationships (followers, liked messages, ...) are explicit
 * queries computed on demand rather than cached object graphs.
 */

pub mod follows;
pub mod like;
pub mod message;
pub mod user;

pub use follows::Follow;
pub use like::Like;
pub use message::Message;
pub use user::User;
