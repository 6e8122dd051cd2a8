/**
 * HTTP Route Handlers
 *
 * - `home` - landing page and logged-in feed
 * - `auth` - signup, login, logout
 * - `users` - user pages, follow/unfollow, profile edit, account delete
 * - `messages` - message CRUD, like/unlike
 */

pub mod auth;
pub mod home;
pub mod messages;
pub mod users;
